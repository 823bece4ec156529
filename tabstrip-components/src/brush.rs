//! Paint sources for tab fills and strokes.

use smallvec::{SmallVec, smallvec};
use tabstrip_ui::{Color, PxRect};

/// Piecewise-linear remapping of a gradient's progress.
///
/// `factors[i]` is the share of the end color at `positions[i]`. Both lists
/// have the same length, positions ascend from 0 to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Blend {
    /// End-color share at each position.
    pub factors: SmallVec<[f32; 4]>,
    /// Positions along the gradient axis, in `[0, 1]`.
    pub positions: SmallVec<[f32; 4]>,
}

impl Blend {
    /// Plain linear blend.
    pub fn linear() -> Self {
        Self {
            factors: smallvec![0.0, 1.0],
            positions: smallvec![0.0, 1.0],
        }
    }

    /// Two-tone blend of top-aligned tabs: the lower half is flat dark.
    pub fn top_tab() -> Self {
        Self {
            factors: smallvec![0.0, 0.5, 1.0, 1.0],
            positions: smallvec![0.0, 0.5, 0.51, 1.0],
        }
    }

    /// Soft blend used by every other alignment.
    pub fn side_tab() -> Self {
        Self {
            factors: smallvec![0.0, 0.7, 1.0],
            positions: smallvec![0.0, 0.6, 1.0],
        }
    }

    /// Evaluates the blend at `t`, clamped to `[0, 1]`.
    pub fn factor_at(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let pairs = self.positions.iter().zip(self.factors.iter());
        let mut prev: Option<(f32, f32)> = None;
        for (&pos, &factor) in pairs {
            if t <= pos {
                return match prev {
                    Some((p0, f0)) if pos > p0 => f0 + (factor - f0) * (t - p0) / (pos - p0),
                    _ => factor,
                };
            }
            prev = Some((pos, factor));
        }
        prev.map_or(t, |(_, factor)| factor)
    }
}

impl Default for Blend {
    fn default() -> Self {
        Self::linear()
    }
}

/// Axis a [`LinearGradient`] runs along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientDirection {
    /// From the top edge of the gradient rect to the bottom edge.
    #[default]
    Vertical,
    /// From the left edge to the right edge.
    Horizontal,
}

/// Two-color gradient over a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Area the gradient spans; outside it the edge colors extend.
    pub rect: PxRect,
    /// Color at progress 0.
    pub start: Color,
    /// Color at progress 1.
    pub end: Color,
    /// Axis of progress.
    pub direction: GradientDirection,
    /// Progress remapping.
    pub blend: Blend,
}

impl LinearGradient {
    /// Linear gradient without a custom blend.
    pub fn new(rect: PxRect, start: Color, end: Color, direction: GradientDirection) -> Self {
        Self {
            rect,
            start,
            end,
            direction,
            blend: Blend::linear(),
        }
    }

    /// Replaces the blend.
    pub fn with_blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }

    /// Color at progress `t` along the gradient axis.
    pub fn color_at(&self, t: f32) -> Color {
        self.start.lerp(self.end, self.blend.factor_at(t))
    }

    /// Color at the pixel position `(x, y)`.
    pub fn color_at_point(&self, x: f32, y: f32) -> Color {
        let (pos, origin, extent) = match self.direction {
            GradientDirection::Vertical => (y, self.rect.y.to_f32(), self.rect.height.to_f32()),
            GradientDirection::Horizontal => (x, self.rect.x.to_f32(), self.rect.width.to_f32()),
        };
        if extent <= 0.0 {
            return self.color_at(0.0);
        }
        self.color_at((pos - origin) / extent)
    }

    /// Color stops at each blend position, for renderers that take stop lists.
    pub fn stops(&self) -> SmallVec<[(f32, Color); 4]> {
        self.blend
            .positions
            .iter()
            .map(|&pos| (pos, self.color_at(pos)))
            .collect()
    }
}

/// Single-color fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBrush {
    /// Fill color.
    pub color: Color,
}

impl SolidBrush {
    /// Creates a solid brush.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Any fill source.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// Flat color.
    Solid(SolidBrush),
    /// Two-color gradient.
    Linear(LinearGradient),
}

impl Brush {
    /// Color the brush paints at pixel position `(x, y)`.
    pub fn color_at_point(&self, x: f32, y: f32) -> Color {
        match self {
            Brush::Solid(solid) => solid.color,
            Brush::Linear(gradient) => gradient.color_at_point(x, y),
        }
    }
}

impl From<SolidBrush> for Brush {
    fn from(brush: SolidBrush) -> Self {
        Brush::Solid(brush)
    }
}

impl From<LinearGradient> for Brush {
    fn from(brush: LinearGradient) -> Self {
        Brush::Linear(brush)
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(SolidBrush::new(color))
    }
}

/// Stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Pen {
    /// Creates a pen.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}
