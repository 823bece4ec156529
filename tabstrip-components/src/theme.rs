//! Theme palette consulted by the style engine.
//!
//! ## Usage
//!
//! Hosts report their current system palette through
//! [`crate::host::TabHost::system_colors`]. Unset style colors resolve
//! against it on every read, so a theme switch shows up without touching the
//! style configuration.

use tabstrip_ui::Color;

/// The handful of system colors tab painting depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemColors {
    /// Background of document areas; the selected tab's light tone.
    pub window: Color,
    /// Light 3D highlight; the selected tab's dark tone.
    pub control_light: Color,
    /// Shadow color; default for borders and disabled text.
    pub control_dark: Color,
    /// Default text color.
    pub control_text: Color,
}

impl SystemColors {
    /// Classic light desktop palette.
    pub const CLASSIC: Self = Self {
        window: Color::WHITE,
        control_light: Color::from_rgb_u8(0xE3, 0xE3, 0xE3),
        control_dark: Color::from_rgb_u8(0xA0, 0xA0, 0xA0),
        control_text: Color::BLACK,
    };

    /// High-contrast dark palette, handy for checking that nothing is frozen
    /// to the classic values.
    pub const HIGH_CONTRAST: Self = Self {
        window: Color::BLACK,
        control_light: Color::from_rgb_u8(0x40, 0x40, 0x40),
        control_dark: Color::from_rgb_u8(0x80, 0x80, 0x80),
        control_text: Color::WHITE,
    };
}

impl Default for SystemColors {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Fixed tab tones that do not follow the system palette.
pub struct TabTones;

impl TabTones {
    /// Light tone of an idle tab.
    pub const IDLE_LIGHT: Color = Color::from_rgb_u8(0xF2, 0xF2, 0xF2);
    /// Dark tone of an idle tab; also the flat fill of a disabled tab.
    pub const IDLE_DARK: Color = Color::from_rgb_u8(0xCF, 0xCF, 0xCF);
    /// Flat fill of a disabled tab.
    pub const DISABLED: Color = Self::IDLE_DARK;
    /// Light tone of the hot-tracked tab.
    pub const HOT_LIGHT: Color = Color::from_rgb_u8(0xEA, 0xF6, 0xFD);
    /// Dark tone of the hot-tracked tab.
    pub const HOT_DARK: Color = Color::from_rgb_u8(0xA7, 0xD9, 0xF5);
}
