//! Validated per-engine style settings.
//!
//! ## Usage
//!
//! A [`StyleConfig`] is seeded from the [`StyleDefaults`] of a [`TabStyle`]
//! and then adjusted through its setters. Numeric setters refuse values that
//! would break painting and leave the previous value untouched:
//!
//! ```
//! use tabstrip_components::{border_shape::TabStyle, config::{ConfigError, StyleConfig}};
//!
//! let mut config = StyleConfig::for_style(TabStyle::Rounded, false);
//! assert_eq!(config.radius(), 12);
//! assert_eq!(config.set_radius(0), Err(ConfigError::InvalidRadius(0)));
//! assert_eq!(config.radius(), 12);
//! ```

use tabstrip_ui::{Color, Px, PxPosition};
use thiserror::Error;

use crate::{alignment::ContentAlignment, border_shape::TabStyle, theme::SystemColors};

/// A rejected configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Corner radius below one pixel.
    #[error("radius must be at least 1, got {0}")]
    InvalidRadius(i32),
    /// Negative tab overlap.
    #[error("overlap must not be negative, got {0}")]
    NegativeOverlap(i32),
    /// Opacity outside `[0, 1]`, including NaN.
    #[error("opacity must be between 0 and 1, got {0}")]
    OpacityOutOfRange(f32),
}

/// Per-style starting values for a [`StyleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefaults {
    /// Corner radius.
    pub radius: i32,
    /// Pixels each tab overlaps its leading neighbour.
    pub overlap: i32,
    /// Padding around tab content.
    pub padding: PxPosition,
    /// Whether the selected tab shows a focus strip.
    pub focus_track: bool,
    /// Whether the tab under the pointer is highlighted.
    pub hot_track: bool,
}

impl StyleDefaults {
    /// Shared by [`TabStyle::None`], [`TabStyle::Default`] and [`TabStyle::Dark`].
    pub const BASE: Self = Self {
        radius: 2,
        overlap: 0,
        padding: PxPosition::new(Px(6), Px(3)),
        focus_track: false,
        hot_track: true,
    };

    /// Defaults of [`TabStyle::Rounded`].
    pub const ROUNDED: Self = Self {
        radius: 12,
        padding: PxPosition::new(Px(10), Px(3)),
        focus_track: true,
        ..Self::BASE
    };

    /// Defaults of [`TabStyle::VisualStudio`].
    pub const VISUAL_STUDIO: Self = Self {
        radius: 3,
        overlap: 7,
        padding: PxPosition::new(Px(14), Px(1)),
        ..Self::BASE
    };

    /// Default opacity of every style.
    pub const OPACITY: f32 = 1.0;

    /// Looks up the defaults of `style`.
    pub fn for_style(style: TabStyle) -> Self {
        match style {
            TabStyle::None | TabStyle::Default | TabStyle::Dark => Self::BASE,
            TabStyle::Rounded => Self::ROUNDED,
            TabStyle::VisualStudio => Self::VISUAL_STUDIO,
        }
    }
}

/// A named color slot of the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Border of an idle tab.
    Border,
    /// Border of the selected tab.
    BorderSelected,
    /// Border of the hot-tracked tab.
    BorderHot,
    /// Text of an idle tab.
    Text,
    /// Text of the selected tab.
    TextSelected,
    /// Text of a disabled tab.
    TextDisabled,
    /// Leading color of the focus strip.
    Focus,
    /// Closer glyph while the pointer is elsewhere.
    Closer,
    /// Closer glyph while the pointer is over it.
    CloserActive,
}

impl ColorRole {
    /// Every role, in slot order.
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Border,
        ColorRole::BorderSelected,
        ColorRole::BorderHot,
        ColorRole::Text,
        ColorRole::TextSelected,
        ColorRole::TextDisabled,
        ColorRole::Focus,
        ColorRole::Closer,
        ColorRole::CloserActive,
    ];

    /// The color this role takes while no explicit value is set.
    pub fn theme_default(self, theme: &SystemColors) -> Color {
        match self {
            ColorRole::Border | ColorRole::BorderSelected | ColorRole::BorderHot => {
                theme.control_dark
            }
            ColorRole::Text | ColorRole::TextSelected => theme.control_text,
            ColorRole::TextDisabled => theme.control_dark,
            ColorRole::Focus => Color::ORANGE,
            ColorRole::Closer => Color::DARK_GRAY,
            ColorRole::CloserActive => Color::BLACK,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

const ROLE_COUNT: usize = ColorRole::ALL.len();

/// An explicit color, or nothing to follow the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorOverride(Option<Color>);

impl ColorOverride {
    /// The explicit value, if any.
    pub fn get(self) -> Option<Color> {
        self.0
    }

    /// Resolves against `default`.
    pub fn resolve(self, default: Color) -> Color {
        self.0.unwrap_or(default)
    }

    /// Stores `color`, or clears the override when it equals `default`.
    pub fn set(&mut self, color: Color, default: Color) {
        self.0 = (color != default).then_some(color);
    }

    /// Drops the explicit value.
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

/// Derives the padding the container reserves around tab text.
///
/// `radius / 2` truncates toward zero; `y` is passed through.
///
/// ```
/// use tabstrip_components::config::derive_host_padding;
/// use tabstrip_ui::{Px, PxPosition};
///
/// let padding = PxPosition::new(Px(6), Px(3));
/// assert_eq!(derive_host_padding(padding, 2, false), PxPosition::new(Px(6), Px(3)));
/// assert_eq!(derive_host_padding(padding, 2, true), PxPosition::new(Px(13), Px(3)));
/// ```
pub fn derive_host_padding(padding: PxPosition, radius: i32, show_closer: bool) -> PxPosition {
    let base = padding.x.0.saturating_add(radius / 2);
    let x = if show_closer {
        if base < -6 { 0 } else { base.saturating_add(6) }
    } else if base < 1 {
        0
    } else {
        base - 1
    };
    PxPosition::new(Px(x), padding.y)
}

/// Style settings owned by one engine.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    padding: PxPosition,
    radius: i32,
    overlap: i32,
    opacity: f32,
    hot_track: bool,
    focus_track: bool,
    show_closer: bool,
    image_align: ContentAlignment,
    colors: [ColorOverride; ROLE_COUNT],
}

impl StyleConfig {
    /// Starts from the defaults of `style`. The image alignment follows the
    /// layout direction.
    pub fn for_style(style: TabStyle, right_to_left: bool) -> Self {
        Self::from_defaults(StyleDefaults::for_style(style), right_to_left)
    }

    /// Starts from explicit defaults.
    pub fn from_defaults(defaults: StyleDefaults, right_to_left: bool) -> Self {
        Self {
            padding: defaults.padding,
            radius: defaults.radius.max(1),
            overlap: defaults.overlap.max(0),
            opacity: StyleDefaults::OPACITY,
            hot_track: defaults.hot_track,
            focus_track: defaults.focus_track,
            show_closer: false,
            image_align: ContentAlignment::leading(right_to_left),
            colors: [ColorOverride::default(); ROLE_COUNT],
        }
    }

    /// Padding around tab content.
    pub fn padding(&self) -> PxPosition {
        self.padding
    }

    /// Sets the padding around tab content. Any value is accepted.
    pub fn set_padding(&mut self, padding: PxPosition) {
        self.padding = padding;
    }

    /// Corner radius, always at least 1.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Sets the corner radius.
    pub fn set_radius(&mut self, radius: i32) -> Result<(), ConfigError> {
        if radius < 1 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        self.radius = radius;
        Ok(())
    }

    /// Pixels each non-leading tab extends under its neighbour.
    pub fn overlap(&self) -> i32 {
        self.overlap
    }

    /// Sets the tab overlap.
    pub fn set_overlap(&mut self, overlap: i32) -> Result<(), ConfigError> {
        if overlap < 0 {
            return Err(ConfigError::NegativeOverlap(overlap));
        }
        self.overlap = overlap;
        Ok(())
    }

    /// Opacity of tab backgrounds.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the background opacity.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::OpacityOutOfRange(opacity));
        }
        self.opacity = opacity;
        Ok(())
    }

    /// Whether the tab under the pointer is highlighted.
    pub fn hot_track(&self) -> bool {
        self.hot_track
    }

    /// Toggles hot tracking.
    pub fn set_hot_track(&mut self, hot_track: bool) {
        self.hot_track = hot_track;
    }

    /// Whether the selected tab shows a focus strip.
    pub fn focus_track(&self) -> bool {
        self.focus_track
    }

    /// Toggles the focus strip.
    pub fn set_focus_track(&mut self, focus_track: bool) {
        self.focus_track = focus_track;
    }

    /// Whether tabs draw a closer glyph.
    pub fn show_closer(&self) -> bool {
        self.show_closer
    }

    /// Toggles the closer glyph.
    pub fn set_show_closer(&mut self, show_closer: bool) {
        self.show_closer = show_closer;
    }

    /// Preferred placement of tab images.
    pub fn image_align(&self) -> ContentAlignment {
        self.image_align
    }

    /// Sets the preferred placement of tab images.
    pub fn set_image_align(&mut self, image_align: ContentAlignment) {
        self.image_align = image_align;
    }

    /// The override stored for `role`.
    pub fn color_override(&self, role: ColorRole) -> ColorOverride {
        self.colors[role.slot()]
    }

    /// Resolves `role` against `theme`.
    pub fn color(&self, role: ColorRole, theme: &SystemColors) -> Color {
        self.colors[role.slot()].resolve(role.theme_default(theme))
    }

    /// Sets `role` to `color`. A color equal to the current theme default
    /// clears the override so later theme changes show through.
    pub fn set_color(&mut self, role: ColorRole, color: Color, theme: &SystemColors) {
        self.colors[role.slot()].set(color, role.theme_default(theme));
    }

    /// Returns `role` to the theme default.
    pub fn reset_color(&mut self, role: ColorRole) {
        self.colors[role.slot()].clear();
    }

    /// Padding the container should use for the current settings.
    pub fn host_padding(&self) -> PxPosition {
        derive_host_padding(self.padding, self.radius, self.show_closer)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::for_style(TabStyle::Default, false)
    }
}
