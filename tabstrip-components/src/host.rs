//! The capability a tab control hands to its style engine.
//!
//! ## Usage
//!
//! Implement [`TabHost`] on the widget (or on a thin adapter around it) and
//! pass it to [`crate::style_engine::create_style_engine`]. The engine only
//! ever reads layout through the query methods and talks back through the
//! three notification methods, so tests can drive it with
//! [`StaticTabHost`].

use derive_builder::Builder;
use tabstrip_ui::{Px, PxPosition, PxRect};

use crate::{
    alignment::TabAlignment,
    theme::SystemColors,
};

/// Snapshot of the widget-wide state the engine reads while computing one
/// tab.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
#[builder(pattern = "owned", default)]
pub struct WidgetState {
    /// Side of the container the tab row is attached to.
    pub alignment: TabAlignment,
    /// Whether the widget mirrors its layout for right-to-left reading.
    pub right_to_left: bool,
    /// Index of the selected tab, if any.
    #[builder(setter(strip_option))]
    pub selected_index: Option<usize>,
    /// Index of the tab under the pointer, if any.
    #[builder(setter(strip_option))]
    pub active_index: Option<usize>,
    /// Whether the widget currently has keyboard focus.
    pub focused: bool,
    /// Pointer position in client coordinates.
    pub mouse_position: PxPosition,
    /// The widget's own bounds in client coordinates.
    pub bounds: PxRect,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            alignment: TabAlignment::Top,
            right_to_left: false,
            selected_index: None,
            active_index: None,
            focused: false,
            mouse_position: PxPosition::new(Px(-1), Px(-1)),
            bounds: PxRect::ZERO,
        }
    }
}

/// Layout queries and notifications the engine needs from its widget.
pub trait TabHost {
    /// Number of tabs currently in the widget.
    fn tab_count(&self) -> usize;

    /// The rectangle the container assigned to tab `index`, before any
    /// style adjustment.
    fn raw_tab_rect(&self, index: usize) -> PxRect;

    /// Bounds of the content page belonging to tab `index`.
    fn page_bounds(&self, index: usize) -> PxRect;

    /// Rectangle reserved for the closer glyph of tab `index`.
    fn closer_rect(&self, index: usize) -> PxRect;

    /// Whether tab `index` starts a visual row after wrapping.
    fn is_first_tab_in_row(&self, index: usize) -> bool;

    /// Whether tab `index` accepts input.
    fn tab_enabled(&self, index: usize) -> bool {
        let _ = index;
        true
    }

    /// Widget-wide layout and interaction state.
    fn widget_state(&self) -> WidgetState;

    /// Current system palette.
    fn system_colors(&self) -> SystemColors {
        SystemColors::default()
    }

    /// Request a repaint. Must not paint synchronously.
    fn invalidate(&mut self);

    /// Apply the padding the container should reserve around tab text.
    fn set_padding(&mut self, padding: PxPosition);

    /// Mirror the hot-track toggle onto the container.
    fn set_hot_track(&mut self, hot_track: bool) {
        let _ = hot_track;
    }
}

impl<T: TabHost + ?Sized> TabHost for &mut T {
    fn tab_count(&self) -> usize {
        (**self).tab_count()
    }

    fn raw_tab_rect(&self, index: usize) -> PxRect {
        (**self).raw_tab_rect(index)
    }

    fn page_bounds(&self, index: usize) -> PxRect {
        (**self).page_bounds(index)
    }

    fn closer_rect(&self, index: usize) -> PxRect {
        (**self).closer_rect(index)
    }

    fn is_first_tab_in_row(&self, index: usize) -> bool {
        (**self).is_first_tab_in_row(index)
    }

    fn tab_enabled(&self, index: usize) -> bool {
        (**self).tab_enabled(index)
    }

    fn widget_state(&self) -> WidgetState {
        (**self).widget_state()
    }

    fn system_colors(&self) -> SystemColors {
        (**self).system_colors()
    }

    fn invalidate(&mut self) {
        (**self).invalidate()
    }

    fn set_padding(&mut self, padding: PxPosition) {
        (**self).set_padding(padding)
    }

    fn set_hot_track(&mut self, hot_track: bool) {
        (**self).set_hot_track(hot_track)
    }
}

/// One tab of a [`StaticTabHost`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticTab {
    /// Raw rectangle reported to the engine.
    pub rect: PxRect,
    /// Whether the tab is enabled.
    pub enabled: bool,
    /// Whether the tab starts a visual row.
    pub first_in_row: bool,
}

/// In-memory [`TabHost`] with a fixed single-row layout.
///
/// Records every notification so callers can assert on them.
#[derive(Debug, Clone)]
pub struct StaticTabHost {
    /// Tabs in index order.
    pub tabs: Vec<StaticTab>,
    /// Content page shared by all tabs.
    pub page: PxRect,
    /// Widget-wide state returned from [`TabHost::widget_state`].
    pub state: WidgetState,
    /// Palette returned from [`TabHost::system_colors`].
    pub colors: SystemColors,
    /// Last padding pushed by the engine.
    pub padding: PxPosition,
    /// Last hot-track value pushed by the engine.
    pub hot_track: bool,
    /// Number of repaint requests received.
    pub invalidations: usize,
}

impl StaticTabHost {
    /// Margin between the widget edge and the tab row or page.
    pub const MARGIN: Px = Px(2);
    /// Side length of the closer glyph box.
    pub const CLOSER_SIZE: Px = Px(8);

    /// Lays out `count` tabs of `tab_length` along the row and `thickness`
    /// across it, inside a widget of `bounds` size.
    ///
    /// The page fills the rest of the widget, so the first tab's leading edge
    /// lines up with the page's leading edge.
    pub fn row(
        count: usize,
        tab_length: Px,
        thickness: Px,
        alignment: TabAlignment,
        bounds: PxRect,
    ) -> Self {
        let m = Self::MARGIN;
        let tabs = (0..count)
            .map(|i| {
                let along = m + tab_length * i as i32;
                let rect = match alignment {
                    TabAlignment::Top => PxRect::new(along, m, tab_length, thickness),
                    TabAlignment::Bottom => PxRect::new(
                        along,
                        bounds.height - m - thickness,
                        tab_length,
                        thickness,
                    ),
                    TabAlignment::Left => PxRect::new(m, along, thickness, tab_length),
                    TabAlignment::Right => PxRect::new(
                        bounds.width - m - thickness,
                        along,
                        thickness,
                        tab_length,
                    ),
                };
                StaticTab {
                    rect,
                    enabled: true,
                    first_in_row: i == 0,
                }
            })
            .collect();

        let inner = bounds.width - m * 2;
        let inner_h = bounds.height - m * 2;
        let page = match alignment {
            TabAlignment::Top => PxRect::new(m, m + thickness, inner, inner_h - thickness),
            TabAlignment::Bottom => PxRect::new(m, m, inner, inner_h - thickness),
            TabAlignment::Left => PxRect::new(m + thickness, m, inner - thickness, inner_h),
            TabAlignment::Right => PxRect::new(m, m, inner - thickness, inner_h),
        };

        Self {
            tabs,
            page,
            state: WidgetState {
                alignment,
                bounds,
                ..WidgetState::default()
            },
            colors: SystemColors::default(),
            padding: PxPosition::ZERO,
            hot_track: false,
            invalidations: 0,
        }
    }
}

impl TabHost for StaticTabHost {
    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn raw_tab_rect(&self, index: usize) -> PxRect {
        self.tabs.get(index).map(|t| t.rect).unwrap_or_default()
    }

    fn page_bounds(&self, _index: usize) -> PxRect {
        self.page
    }

    fn closer_rect(&self, index: usize) -> PxRect {
        let rect = self.raw_tab_rect(index);
        let size = Self::CLOSER_SIZE;
        if self.state.alignment.is_horizontal() {
            PxRect::new(
                rect.right() - size - Px(4),
                rect.y + (rect.height - size) / 2,
                size,
                size,
            )
        } else {
            PxRect::new(
                rect.x + (rect.width - size) / 2,
                rect.bottom() - size - Px(4),
                size,
                size,
            )
        }
    }

    fn is_first_tab_in_row(&self, index: usize) -> bool {
        self.tabs.get(index).is_some_and(|t| t.first_in_row)
    }

    fn tab_enabled(&self, index: usize) -> bool {
        self.tabs.get(index).is_some_and(|t| t.enabled)
    }

    fn widget_state(&self) -> WidgetState {
        self.state
    }

    fn system_colors(&self) -> SystemColors {
        self.colors
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn set_padding(&mut self, padding: PxPosition) {
        self.padding = padding;
    }

    fn set_hot_track(&mut self, hot_track: bool) {
        self.hot_track = hot_track;
    }
}
