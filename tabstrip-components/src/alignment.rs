//! Defines where the tab row sits relative to the content page, and the
//! content alignment used for tab images.

/// Side of the host container the tab row is attached to.
///
/// The page lies on the opposite side: for [`TabAlignment::Top`] the tabs
/// sit above the page and their bottom edge touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TabAlignment {
    /// Tabs above the page.
    #[default]
    Top,
    /// Tabs below the page.
    Bottom,
    /// Tabs to the left of the page, stacked vertically.
    Left,
    /// Tabs to the right of the page, stacked vertically.
    Right,
}

impl TabAlignment {
    /// All four alignments, in declaration order.
    pub const ALL: [TabAlignment; 4] = [
        TabAlignment::Top,
        TabAlignment::Bottom,
        TabAlignment::Left,
        TabAlignment::Right,
    ];

    /// Returns `true` when tabs run along a horizontal row (Top or Bottom).
    pub fn is_horizontal(self) -> bool {
        matches!(self, TabAlignment::Top | TabAlignment::Bottom)
    }
}

/// Placement of an image inside its tab.
///
/// Image drawing itself belongs to the host; the style only carries the
/// preferred alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentAlignment {
    /// Top edge, left side.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Top edge, right side.
    TopRight,
    /// Vertically centered, left side.
    #[default]
    MiddleLeft,
    /// Centered on both axes.
    MiddleCenter,
    /// Vertically centered, right side.
    MiddleRight,
    /// Bottom edge, left side.
    BottomLeft,
    /// Bottom edge, centered.
    BottomCenter,
    /// Bottom edge, right side.
    BottomRight,
}

impl ContentAlignment {
    /// Default image placement for a layout direction.
    pub fn leading(right_to_left: bool) -> Self {
        if right_to_left {
            ContentAlignment::MiddleRight
        } else {
            ContentAlignment::MiddleLeft
        }
    }
}
