//! Physical pixel coordinate system used by the tab geometry engine.
//!
//! Tab rectangles, page bounds and pointer positions all live in the host
//! widget's client space, measured in whole device pixels.
//!
//! # Key Types
//!
//! - [`Px`] - A single pixel coordinate value, negative values allowed for
//!   tabs that have scrolled out of view
//! - [`PxPosition`] - A 2D position (x, y)
//! - [`PxRect`] - An axis-aligned rectangle with edge accessors
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the host widget
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use tabstrip_ui::px::{Px, PxPosition, PxRect};
//!
//! let tab = PxRect::new(Px(10), Px(2), Px(80), Px(24));
//! assert_eq!(tab.right(), Px(90));
//! assert!(tab.contains(PxPosition::new(Px(20), Px(10))));
//!
//! let grown = tab.inflate(Px(3), Px(3)).offset(Px(-1), Px(-1));
//! assert_eq!(grown, PxRect::new(Px(6), Px(-2), Px(86), Px(30)));
//! ```

use std::ops::{AddAssign, Neg, SubAssign};

/// A physical pixel coordinate value.
///
/// Supports negative values, which occur for tabs scrolled past the leading
/// edge of the tab row.
///
/// # Examples
///
/// ```
/// use tabstrip_ui::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-50);
/// assert_eq!(a + b, Px(50));
/// assert_eq!(a * 2, Px(200));
/// assert_eq!(Px::new(5) / 2, Px(2));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Creates a new `Px` instance from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the value clamped to zero from below, as u32.
    ///
    /// ```
    /// use tabstrip_ui::px::Px;
    ///
    /// assert_eq!(Px::new(10).positive(), 10);
    /// assert_eq!(Px::new(-5).positive(), 0);
    /// ```
    pub fn positive(self) -> u32 {
        if self.0 < 0 { 0 } else { self.0 as u32 }
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing. The fractional part is truncated.
    ///
    /// ```
    /// use tabstrip_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Saturating integer addition.
    ///
    /// Computes `self + rhs`, clamping at the numeric bounds instead of
    /// overflowing.
    ///
    /// ```
    /// use tabstrip_ui::px::Px;
    ///
    /// assert_eq!(Px::new(10).saturating_add(Px::new(5)), Px::new(15));
    /// assert_eq!(Px::new(i32::MAX).saturating_add(Px::new(1)), Px::new(i32::MAX));
    /// ```
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    ///
    /// Computes `self - rhs`, clamping at the numeric bounds instead of
    /// underflowing.
    ///
    /// ```
    /// use tabstrip_ui::px::Px;
    ///
    /// assert_eq!(Px::new(10).saturating_sub(Px::new(5)), Px::new(5));
    /// assert_eq!(Px::new(i32::MIN).saturating_sub(Px::new(1)), Px::new(i32::MIN));
    /// ```
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A 2D position in physical pixel space.
///
/// Also used for paired x/y settings such as tab padding, where `x` and `y`
/// are independent insets rather than a point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the zero position (0, 0).
    pub const ZERO: Self = Self {
        x: Px(0),
        y: Px(0),
    };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D rectangle in physical pixel space.
///
/// Stored as the top-left corner plus dimensions. `right()` and `bottom()`
/// are exclusive edges, so `x + width` and `y + height`. Edge and resize
/// arithmetic saturates, so host-supplied extremes never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from its top-left corner and dimensions.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge, same as `x`.
    pub fn left(&self) -> Px {
        self.x
    }

    /// Top edge, same as `y`.
    pub fn top(&self) -> Px {
        self.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> Px {
        self.y.saturating_add(self.height)
    }

    /// Center point, rounded toward the top-left.
    pub fn center(&self) -> PxPosition {
        PxPosition::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    /// Returns `true` when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width.0 <= 0 || self.height.0 <= 0
    }

    /// Grows the rectangle by `dx` on the left and right and by `dy` on the
    /// top and bottom. Negative values shrink it.
    ///
    /// ```
    /// use tabstrip_ui::px::{Px, PxRect};
    ///
    /// let r = PxRect::new(Px(10), Px(10), Px(20), Px(20));
    /// assert_eq!(
    ///     r.inflate(Px(3), Px(3)),
    ///     PxRect::new(Px(7), Px(7), Px(26), Px(26))
    /// );
    /// ```
    pub fn inflate(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x.saturating_sub(dx),
            y: self.y.saturating_sub(dy),
            width: self.width.saturating_add(dx).saturating_add(dx),
            height: self.height.saturating_add(dy).saturating_add(dy),
        }
    }

    /// Moves the rectangle without changing its size.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Check if a point is inside the rectangle. The right and bottom edges
    /// are exclusive.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Checks whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Px::new(-self.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(a / 2, Px(5));
        assert_eq!(Px(-3) / 2, Px(-1));
        assert_eq!(-a, Px(-10));
    }

    #[test]
    fn test_rect_edges() {
        let rect = PxRect::new(Px(10), Px(20), Px(30), Px(40));
        assert_eq!(rect.left(), Px(10));
        assert_eq!(rect.top(), Px(20));
        assert_eq!(rect.right(), Px(40));
        assert_eq!(rect.bottom(), Px(60));
        assert_eq!(rect.center(), PxPosition::new(Px(25), Px(40)));
    }

    #[test]
    fn test_rect_inflate_then_offset() {
        let rect = PxRect::new(Px(0), Px(0), Px(10), Px(10));
        let brush_rect = rect.inflate(Px(3), Px(3)).offset(Px(-1), Px(-1));
        assert_eq!(brush_rect, PxRect::new(Px(-4), Px(-4), Px(16), Px(16)));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = PxRect::new(Px(0), Px(0), Px(10), Px(10));
        assert!(rect.contains(PxPosition::new(Px(0), Px(0))));
        assert!(rect.contains(PxPosition::new(Px(9), Px(9))));
        assert!(!rect.contains(PxPosition::new(Px(10), Px(5))));
        assert!(!rect.contains(PxPosition::new(Px(5), Px(10))));
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = PxRect::new(Px(0), Px(0), Px(100), Px(20));
        assert!(outer.contains_rect(&PxRect::new(Px(10), Px(0), Px(20), Px(20))));
        assert!(!outer.contains_rect(&PxRect::new(Px(-1), Px(0), Px(20), Px(20))));
    }

    #[test]
    fn test_saturating_ops_clamp_at_bounds() {
        assert_eq!(Px(i32::MAX).saturating_add(Px(7)), Px(i32::MAX));
        assert_eq!(Px(i32::MIN).saturating_sub(Px(7)), Px(i32::MIN));
        assert_eq!(Px(i32::MIN).saturating_add(Px(i32::MAX)), Px(-1));
    }

    #[test]
    fn test_rect_math_saturates_on_extreme_extents() {
        let wide = PxRect::new(Px(10), Px(i32::MIN), Px(i32::MAX), Px(4));
        assert_eq!(wide.right(), Px(i32::MAX));
        assert_eq!(wide.bottom(), Px(i32::MIN + 4));
        assert_eq!(wide.center(), PxPosition::new(Px(10 + i32::MAX / 2), Px(i32::MIN + 2)));
        assert!(wide.contains(PxPosition::new(Px(i32::MAX - 1), Px(i32::MIN))));

        let grown = wide.inflate(Px(3), Px(3)).offset(Px(-1), Px(-1));
        assert_eq!(grown, PxRect::new(Px(6), Px(i32::MIN), Px(i32::MAX), Px(10)));
    }

    #[test]
    fn test_empty_rect() {
        assert!(PxRect::ZERO.is_empty());
        assert!(PxRect::new(Px(5), Px(5), Px(-2), Px(4)).is_empty());
        assert!(!PxRect::new(Px(5), Px(5), Px(1), Px(1)).is_empty());
    }
}
