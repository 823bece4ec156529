//! Per-tab geometry and paint pipeline.
//!
//! ## Usage
//!
//! Create one engine per widget with [`create_style_engine`] and call
//! [`StyleEngine::paint_tab`] for each visible tab from the widget's paint
//! handler. Switching to another named style means creating a new engine.
//!
//! ```
//! use tabstrip_components::{
//!     alignment::TabAlignment,
//!     border_shape::TabStyle,
//!     host::StaticTabHost,
//!     style_engine::create_style_engine,
//!     surface::PaintRecorder,
//! };
//! use tabstrip_ui::{Px, PxRect};
//!
//! let bounds = PxRect::new(Px(0), Px(0), Px(320), Px(200));
//! let host = StaticTabHost::row(3, Px(80), Px(22), TabAlignment::Top, bounds);
//! let engine = create_style_engine(TabStyle::Rounded, host);
//!
//! let mut recorder = PaintRecorder::new();
//! for index in 0..3 {
//!     engine.paint_tab(index, &mut recorder).expect("recorder never fails");
//! }
//! assert_eq!(recorder.ops().len(), 3);
//! ```

use tabstrip_ui::{Color, Px, PxPosition, PxRect};
use tracing::{debug, trace, warn};

use crate::{
    alignment::{ContentAlignment, TabAlignment},
    border_shape::TabStyle,
    brush::{Blend, Brush, GradientDirection, LinearGradient, Pen, SolidBrush},
    config::{ColorRole, ConfigError, StyleConfig},
    host::{TabHost, WidgetState},
    surface::{DrawingSurface, PaintError},
    tab_path::TabPath,
    theme::TabTones,
};

/// Pixels a tab grows toward the page so it covers the page border.
pub const PAGE_OVERLAP: Px = Px(2);
/// Thickness of the focus strip.
pub const FOCUS_STRIP_WIDTH: Px = Px(4);
/// Width of the closer glyph strokes.
pub const CLOSER_PEN_WIDTH: f32 = 1.0;

/// Visual state that picks a tab's background tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabState {
    /// The selected tab.
    Selected,
    /// A tab that does not accept input.
    Disabled,
    /// The tab under the pointer while hot tracking is on.
    Hot,
    /// Any other tab.
    Normal,
}

/// Background of one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBackground {
    /// State the tones were picked for.
    pub state: TabState,
    /// Light tone, before opacity.
    pub light: Color,
    /// Dark tone, before opacity.
    pub dark: Color,
    /// Gradient that fills the tab outline.
    pub brush: LinearGradient,
}

/// Focus strip drawn on the selected tab of a focused widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusIndicator {
    /// Strip rectangle along the page-side edge of the tab.
    pub rect: PxRect,
    /// Fill of the strip.
    pub brush: LinearGradient,
    /// Tab outline the strip is clipped to.
    pub clip: TabPath,
}

/// Closer cross drawn inside a tab.
#[derive(Debug, Clone, PartialEq)]
pub struct CloserGlyph {
    /// Box the cross spans.
    pub rect: PxRect,
    /// Two diagonal strokes.
    pub path: TabPath,
    /// Stroke style.
    pub pen: Pen,
    /// Whether the pointer is over the closer.
    pub active: bool,
}

/// Creates the engine for `style` around `host`.
///
/// The style's defaults are applied, and the derived padding and hot-track
/// setting are pushed to the host.
pub fn create_style_engine<H: TabHost>(style: TabStyle, host: H) -> StyleEngine<H> {
    StyleEngine::new(style, host)
}

/// Computes tab rectangles, outlines and brushes for one widget.
pub struct StyleEngine<H: TabHost> {
    style: TabStyle,
    config: StyleConfig,
    host: H,
}

macro_rules! color_accessors {
    ($($(#[$doc:meta])* $get:ident, $set:ident => $role:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $get(&self) -> Color {
                self.color(ColorRole::$role)
            }

            #[doc = concat!("Sets the color returned by [`Self::", stringify!($get), "`].")]
            pub fn $set(&mut self, color: Color) {
                self.set_color(ColorRole::$role, color);
            }
        )*
    };
}

impl<H: TabHost> StyleEngine<H> {
    /// Same as [`create_style_engine`].
    pub fn new(style: TabStyle, mut host: H) -> Self {
        let state = host.widget_state();
        let config = StyleConfig::for_style(style, state.right_to_left);
        debug!(
            style = %style,
            radius = config.radius(),
            overlap = config.overlap(),
            focus_track = config.focus_track(),
            "creating tab style engine"
        );
        host.set_hot_track(config.hot_track());
        let mut engine = Self {
            style,
            config,
            host,
        };
        engine.recompute_host_padding();
        engine
    }

    /// The style this engine draws.
    pub fn style(&self) -> TabStyle {
        self.style
    }

    /// Current settings.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// The widget behind this engine.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the widget, e.g. to update its state between paints.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the engine, returning the widget.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Pushes the padding derived from the current settings to the host.
    pub fn recompute_host_padding(&mut self) {
        let padding = self.config.host_padding();
        debug!(x = padding.x.0, y = padding.y.0, "host padding");
        self.host.set_padding(padding);
    }

    fn rejected(&self, err: ConfigError) -> Result<(), ConfigError> {
        warn!(style = %self.style, "rejected style setting: {err}");
        Err(err)
    }

    /// Padding around tab content.
    pub fn padding(&self) -> PxPosition {
        self.config.padding()
    }

    /// Sets the content padding and re-derives the host padding.
    pub fn set_padding(&mut self, padding: PxPosition) {
        self.config.set_padding(padding);
        self.recompute_host_padding();
        self.host.invalidate();
    }

    /// Corner radius.
    pub fn radius(&self) -> i32 {
        self.config.radius()
    }

    /// Sets the corner radius. Values below 1 are rejected and the previous
    /// radius is kept.
    pub fn set_radius(&mut self, radius: i32) -> Result<(), ConfigError> {
        if let Err(err) = self.config.set_radius(radius) {
            return self.rejected(err);
        }
        self.recompute_host_padding();
        self.host.invalidate();
        Ok(())
    }

    /// Pixels each non-leading tab extends under its neighbour.
    pub fn overlap(&self) -> i32 {
        self.config.overlap()
    }

    /// Sets the tab overlap. Negative values are rejected.
    pub fn set_overlap(&mut self, overlap: i32) -> Result<(), ConfigError> {
        if let Err(err) = self.config.set_overlap(overlap) {
            return self.rejected(err);
        }
        self.host.invalidate();
        Ok(())
    }

    /// Background opacity.
    pub fn opacity(&self) -> f32 {
        self.config.opacity()
    }

    /// Sets the background opacity. Values outside `[0, 1]` are rejected.
    pub fn set_opacity(&mut self, opacity: f32) -> Result<(), ConfigError> {
        if let Err(err) = self.config.set_opacity(opacity) {
            return self.rejected(err);
        }
        self.host.invalidate();
        Ok(())
    }

    /// Whether the tab under the pointer is highlighted.
    pub fn hot_track(&self) -> bool {
        self.config.hot_track()
    }

    /// Toggles hot tracking here and on the host.
    pub fn set_hot_track(&mut self, hot_track: bool) {
        self.config.set_hot_track(hot_track);
        self.host.set_hot_track(hot_track);
        self.host.invalidate();
    }

    /// Whether the selected tab of a focused widget shows a focus strip.
    pub fn focus_track(&self) -> bool {
        self.config.focus_track()
    }

    /// Toggles the focus strip.
    pub fn set_focus_track(&mut self, focus_track: bool) {
        self.config.set_focus_track(focus_track);
        self.host.invalidate();
    }

    /// Whether tabs draw a closer glyph.
    pub fn show_closer(&self) -> bool {
        self.config.show_closer()
    }

    /// Toggles the closer glyph and re-derives the host padding.
    pub fn set_show_closer(&mut self, show_closer: bool) {
        self.config.set_show_closer(show_closer);
        self.recompute_host_padding();
        self.host.invalidate();
    }

    /// Preferred placement of tab images.
    pub fn image_align(&self) -> ContentAlignment {
        self.config.image_align()
    }

    /// Sets the preferred placement of tab images.
    pub fn set_image_align(&mut self, image_align: ContentAlignment) {
        self.config.set_image_align(image_align);
        self.host.invalidate();
    }

    /// Resolves `role` against the host's current theme.
    pub fn color(&self, role: ColorRole) -> Color {
        self.config.color(role, &self.host.system_colors())
    }

    /// Sets `role`. A color equal to the current theme default is stored as
    /// unset.
    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        let theme = self.host.system_colors();
        self.config.set_color(role, color, &theme);
        self.host.invalidate();
    }

    /// Returns `role` to its theme default.
    pub fn reset_color(&mut self, role: ColorRole) {
        self.config.reset_color(role);
        self.host.invalidate();
    }

    color_accessors! {
        /// Border color of idle tabs.
        border_color, set_border_color => Border;
        /// Border color of the selected tab.
        border_color_selected, set_border_color_selected => BorderSelected;
        /// Border color of the hot-tracked tab.
        border_color_hot, set_border_color_hot => BorderHot;
        /// Text color of idle tabs.
        text_color, set_text_color => Text;
        /// Text color of the selected tab.
        text_color_selected, set_text_color_selected => TextSelected;
        /// Text color of disabled tabs.
        text_color_disabled, set_text_color_disabled => TextDisabled;
        /// Leading color of the focus strip.
        focus_color, set_focus_color => Focus;
        /// Closer glyph color.
        closer_color, set_closer_color => Closer;
        /// Closer glyph color while the pointer is over it.
        closer_color_active, set_closer_color_active => CloserActive;
    }

    fn tab_index(&self, index: i32) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.host.tab_count())
    }

    fn tab_state(&self, index: usize, state: &WidgetState) -> TabState {
        if state.selected_index == Some(index) {
            TabState::Selected
        } else if !self.host.tab_enabled(index) {
            TabState::Disabled
        } else if self.config.hot_track() && state.active_index == Some(index) {
            TabState::Hot
        } else {
            TabState::Normal
        }
    }

    /// Visual state of tab `index`, or `None` for an invalid index.
    pub fn state_of(&self, index: i32) -> Option<TabState> {
        let index = self.tab_index(index)?;
        Some(self.tab_state(index, &self.host.widget_state()))
    }

    /// Final rectangle of tab `index`, or an empty rectangle for an invalid
    /// index.
    ///
    /// Starting from the host rectangle: mirrored under right-to-left
    /// layout, grown by [`PAGE_OVERLAP`] toward the page, widened by the
    /// overlap for non-leading tabs, and clipped so the first tab of a row
    /// lines up with the page.
    pub fn get_tab_rect(&self, index: i32) -> PxRect {
        let Some(index) = self.tab_index(index) else {
            return PxRect::ZERO;
        };
        let state = self.host.widget_state();
        let rtl = state.right_to_left;
        let mut rect = self.host.raw_tab_rect(index);

        if rtl {
            rect.x = state.bounds.width.saturating_sub(rect.right());
        }

        match state.alignment {
            TabAlignment::Top => rect.height = rect.height.saturating_add(PAGE_OVERLAP),
            TabAlignment::Bottom => {
                rect.height = rect.height.saturating_add(PAGE_OVERLAP);
                rect.y = rect.y.saturating_sub(PAGE_OVERLAP);
            }
            TabAlignment::Left => rect.width = rect.width.saturating_add(PAGE_OVERLAP),
            TabAlignment::Right => {
                rect.width = rect.width.saturating_add(PAGE_OVERLAP);
                rect.x = rect.x.saturating_sub(PAGE_OVERLAP);
            }
        }

        let first_in_row = self.host.is_first_tab_in_row(index);
        let overlap = Px(self.config.overlap());
        if (!first_in_row || rtl) && overlap > Px::ZERO {
            if state.alignment.is_horizontal() {
                rect.x = rect.x.saturating_sub(overlap);
                rect.width = rect.width.saturating_add(overlap);
            } else {
                rect.y = rect.y.saturating_sub(overlap);
                rect.height = rect.height.saturating_add(overlap);
            }
        }

        if first_in_row {
            self.ensure_first_tab_in_view(&mut rect, index, &state);
        }
        rect
    }

    // Only tabs still inside the container are moved; scrolled-out tabs keep
    // their rectangle.
    fn ensure_first_tab_in_view(&self, rect: &mut PxRect, index: usize, state: &WidgetState) {
        let page = self.host.page_bounds(index);
        let container = state.bounds;
        match (state.alignment.is_horizontal(), state.right_to_left) {
            (true, true) => {
                if rect.left() < container.right() && rect.right() > page.right() {
                    let excess = rect.right().saturating_sub(page.right());
                    rect.width = rect.width.saturating_sub(excess);
                }
            }
            (true, false) => {
                if rect.right() > Px::ZERO && rect.x < page.x {
                    let excess = page.x.saturating_sub(rect.x);
                    rect.width = rect.width.saturating_sub(excess);
                    rect.x = page.x;
                }
            }
            (false, true) => {
                if rect.top() < container.bottom() && rect.bottom() > page.bottom() {
                    let excess = rect.bottom().saturating_sub(page.bottom());
                    rect.height = rect.height.saturating_sub(excess);
                }
            }
            (false, false) => {
                if rect.bottom() > Px::ZERO && rect.y < page.y {
                    let excess = page.y.saturating_sub(rect.y);
                    rect.height = rect.height.saturating_sub(excess);
                    rect.y = page.y;
                }
            }
        }
    }

    /// Closed outline of tab `index` in the engine's style. Empty for an
    /// invalid index.
    pub fn get_tab_border_path(&self, index: i32) -> TabPath {
        let rect = self.get_tab_rect(index);
        self.border_path_for(rect, self.host.widget_state().alignment)
    }

    fn border_path_for(&self, rect: PxRect, alignment: TabAlignment) -> TabPath {
        let mut path = TabPath::new();
        if rect.is_empty() {
            return path;
        }
        self.style
            .add_tab_border(&mut path, rect, alignment, self.config.radius());
        path.close_figure();
        path
    }

    /// Background tones and gradient of tab `index`.
    pub fn tab_background(&self, index: i32) -> Option<TabBackground> {
        let i = self.tab_index(index)?;
        let state = self.host.widget_state();
        Some(self.background_for(i, self.get_tab_rect(index), &state))
    }

    fn background_for(&self, i: usize, rect: PxRect, state: &WidgetState) -> TabBackground {
        let theme = self.host.system_colors();
        let tab_state = self.tab_state(i, state);
        let (light, dark) = match tab_state {
            TabState::Selected => (theme.window, theme.control_light),
            TabState::Disabled => (TabTones::DISABLED, TabTones::DISABLED),
            TabState::Hot => (TabTones::HOT_LIGHT, TabTones::HOT_DARK),
            TabState::Normal => (TabTones::IDLE_LIGHT, TabTones::IDLE_DARK),
        };

        let rect = rect.inflate(Px(3), Px(3)).offset(Px(-1), Px(-1));
        let direction = gradient_direction(state.alignment);
        let (start, end) = match state.alignment {
            TabAlignment::Left => (dark, light),
            _ => (light, dark),
        };
        let blend = match state.alignment {
            TabAlignment::Top => Blend::top_tab(),
            _ => Blend::side_tab(),
        };
        let opacity = self.config.opacity();
        let brush = LinearGradient::new(
            rect,
            start.scale_alpha(opacity),
            end.scale_alpha(opacity),
            direction,
        )
        .with_blend(blend);

        TabBackground {
            state: tab_state,
            light,
            dark,
            brush,
        }
    }

    /// Flat fill for the page belonging to tab `index`.
    pub fn page_background_brush(&self, index: i32) -> Option<SolidBrush> {
        let i = self.tab_index(index)?;
        let state = self.host.widget_state();
        let color = match self.tab_state(i, &state) {
            TabState::Selected => self.host.system_colors().window,
            TabState::Disabled => TabTones::DISABLED,
            TabState::Hot => TabTones::HOT_LIGHT,
            TabState::Normal if state.alignment == TabAlignment::Top => TabTones::IDLE_DARK,
            TabState::Normal => TabTones::IDLE_LIGHT,
        };
        Some(SolidBrush::new(color))
    }

    /// Pen for the border of tab `index`, colored by its state.
    pub fn border_pen(&self, index: i32) -> Option<Pen> {
        let role = match self.state_of(index)? {
            TabState::Selected => ColorRole::BorderSelected,
            TabState::Hot => ColorRole::BorderHot,
            TabState::Disabled | TabState::Normal => ColorRole::Border,
        };
        Some(Pen::new(self.color(role), 1.0))
    }

    /// Text color of tab `index`, colored by its state.
    pub fn tab_text_color(&self, index: i32) -> Option<Color> {
        let role = match self.state_of(index)? {
            TabState::Selected => ColorRole::TextSelected,
            TabState::Disabled => ColorRole::TextDisabled,
            TabState::Hot | TabState::Normal => ColorRole::Text,
        };
        Some(self.color(role))
    }

    /// Focus strip of tab `index`. Present only when focus tracking is on,
    /// the widget has focus and `index` is the selected tab.
    pub fn focus_indicator(&self, index: i32) -> Option<FocusIndicator> {
        let i = self.tab_index(index)?;
        let state = self.host.widget_state();
        if !self.shows_focus(i, &state) {
            return None;
        }
        let clip = self.border_path_for(self.get_tab_rect(index), state.alignment);
        let (rect, brush) = self.focus_strip_for(&clip, &state)?;
        Some(FocusIndicator { rect, brush, clip })
    }

    fn shows_focus(&self, i: usize, state: &WidgetState) -> bool {
        self.config.focus_track() && state.focused && state.selected_index == Some(i)
    }

    // Strip rectangle and gradient along the page side of `clip`.
    fn focus_strip_for(
        &self,
        clip: &TabPath,
        state: &WidgetState,
    ) -> Option<(PxRect, LinearGradient)> {
        if clip.is_empty() {
            return None;
        }
        let b = clip.bounds();
        let strip = FOCUS_STRIP_WIDTH;
        let rect = match state.alignment {
            TabAlignment::Top => {
                PxRect::new(b.x, b.bottom().saturating_sub(strip), b.width, strip)
            }
            TabAlignment::Bottom => PxRect::new(b.x, b.y, b.width, strip),
            TabAlignment::Left => {
                PxRect::new(b.right().saturating_sub(strip), b.y, strip, b.height)
            }
            TabAlignment::Right => PxRect::new(b.x, b.y, strip, b.height),
        };

        let theme = self.host.system_colors();
        let end = match state.alignment {
            TabAlignment::Top => theme.window,
            _ => theme.control_light,
        };
        let brush = LinearGradient::new(
            rect,
            self.focus_color(),
            end,
            gradient_direction(state.alignment),
        );
        Some((rect, brush))
    }

    /// Closer cross of tab `index`, when closers are shown.
    pub fn closer_glyph(&self, index: i32) -> Option<CloserGlyph> {
        let i = self.tab_index(index)?;
        if !self.config.show_closer() {
            return None;
        }
        let rect = self.host.closer_rect(i);
        let active = rect.contains(self.host.widget_state().mouse_position);
        let color = if active {
            self.closer_color_active()
        } else {
            self.closer_color()
        };

        let (x, y) = (rect.left().to_f32(), rect.top().to_f32());
        let (r, b) = (rect.right().to_f32(), rect.bottom().to_f32());
        let mut path = TabPath::new();
        path.add_line(x, y, r, b);
        path.start_figure();
        path.add_line(r, y, x, b);

        Some(CloserGlyph {
            rect,
            path,
            pen: Pen::new(color, CLOSER_PEN_WIDTH),
            active,
        })
    }

    /// Paints tab `index`: background fill, focus strip, closer glyph.
    ///
    /// An invalid index paints nothing. The first surface error aborts the
    /// tab and is returned.
    #[tracing::instrument(level = "trace", skip(self, surface))]
    pub fn paint_tab<S: DrawingSurface + ?Sized>(
        &self,
        index: i32,
        surface: &mut S,
    ) -> Result<(), PaintError> {
        let Some(i) = self.tab_index(index) else {
            return Ok(());
        };
        let widget = self.host.widget_state();
        let rect = self.get_tab_rect(index);
        let path = self.border_path_for(rect, widget.alignment);
        if path.is_empty() {
            return Ok(());
        }
        let background = self.background_for(i, rect, &widget);
        let state = background.state;
        surface.fill_path(&path, &Brush::from(background.brush))?;

        if self.shows_focus(i, &widget)
            && let Some((strip, brush)) = self.focus_strip_for(&path, &widget)
        {
            surface.fill_clipped(strip, &path, &Brush::from(brush))?;
        }
        if let Some(closer) = self.closer_glyph(index) {
            surface.stroke_path(&closer.path, &closer.pen)?;
        }

        trace!(?state, "painted tab");
        Ok(())
    }
}

fn gradient_direction(alignment: TabAlignment) -> GradientDirection {
    if alignment.is_horizontal() {
        GradientDirection::Vertical
    } else {
        GradientDirection::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        host::StaticTabHost,
        surface::{PaintOp, PaintRecorder},
        theme::SystemColors,
    };

    fn host(alignment: TabAlignment) -> StaticTabHost {
        let bounds = PxRect::new(Px(0), Px(0), Px(300), Px(200));
        match alignment {
            TabAlignment::Top | TabAlignment::Bottom => {
                StaticTabHost::row(3, Px(60), Px(20), alignment, bounds)
            }
            TabAlignment::Left | TabAlignment::Right => {
                StaticTabHost::row(3, Px(40), Px(24), alignment, bounds)
            }
        }
    }

    fn rect(x: i32, y: i32, w: i32, h: i32) -> PxRect {
        PxRect::new(Px(x), Px(y), Px(w), Px(h))
    }

    #[test]
    fn creation_applies_style_defaults_and_notifies_host() {
        let engine = create_style_engine(TabStyle::Rounded, host(TabAlignment::Top));
        assert_eq!(engine.style(), TabStyle::Rounded);
        assert_eq!(engine.radius(), 12);
        assert!(engine.focus_track());
        assert!(engine.host().hot_track);
        // (10 + 12 / 2 - 1, 3)
        assert_eq!(engine.host().padding, PxPosition::new(Px(15), Px(3)));
        assert_eq!(engine.host().invalidations, 0);
    }

    #[test]
    fn image_alignment_follows_layout_direction() {
        let mut rtl = host(TabAlignment::Top);
        rtl.state.right_to_left = true;
        let engine = create_style_engine(TabStyle::Default, rtl);
        assert_eq!(engine.image_align(), ContentAlignment::MiddleRight);
    }

    #[test]
    fn setters_invalidate_and_rejections_keep_prior_values() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        engine.set_radius(4).expect("valid radius");
        assert_eq!(engine.host().invalidations, 1);

        assert_eq!(engine.set_radius(0), Err(ConfigError::InvalidRadius(0)));
        assert_eq!(engine.set_radius(-1), Err(ConfigError::InvalidRadius(-1)));
        assert_eq!(engine.radius(), 4);
        assert_eq!(engine.set_overlap(-1), Err(ConfigError::NegativeOverlap(-1)));
        assert_eq!(engine.overlap(), 0);
        assert!(engine.set_opacity(1.01).is_err());
        assert!(engine.set_opacity(-0.01).is_err());
        assert_eq!(engine.host().invalidations, 1);

        engine.set_opacity(0.0).expect("lower bound");
        engine.set_opacity(1.0).expect("upper bound");
        engine.set_focus_track(true);
        assert_eq!(engine.host().invalidations, 4);
    }

    #[test]
    fn padding_related_setters_recompute_host_padding() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        assert_eq!(engine.host().padding, PxPosition::new(Px(6), Px(3)));

        engine.set_show_closer(true);
        assert_eq!(engine.host().padding, PxPosition::new(Px(13), Px(3)));

        engine.set_padding(PxPosition::new(Px(-20), Px(5)));
        assert_eq!(engine.host().padding, PxPosition::new(Px(0), Px(5)));

        engine.set_show_closer(false);
        engine.set_padding(PxPosition::new(Px(6), Px(2)));
        engine.set_radius(2).expect("valid radius");
        assert_eq!(engine.host().padding, PxPosition::new(Px(6), Px(2)));
    }

    #[test]
    fn extreme_padding_saturates_host_padding() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        engine.set_padding(PxPosition::new(Px(i32::MAX), Px(0)));
        assert_eq!(engine.host().padding, PxPosition::new(Px(i32::MAX - 1), Px(0)));

        engine.set_show_closer(true);
        assert_eq!(engine.host().padding, PxPosition::new(Px(i32::MAX), Px(0)));

        engine.set_padding(PxPosition::new(Px(i32::MIN), Px(i32::MIN)));
        assert_eq!(engine.host().padding, PxPosition::new(Px(0), Px(i32::MIN)));
    }

    #[test]
    fn hot_track_is_mirrored_to_host() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        engine.set_hot_track(false);
        assert!(!engine.host().hot_track);
        assert!(!engine.hot_track());
    }

    #[test]
    fn tab_rect_grows_toward_the_page() {
        let top = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        assert_eq!(top.get_tab_rect(1), rect(62, 2, 60, 22));

        let bottom = create_style_engine(TabStyle::Default, host(TabAlignment::Bottom));
        assert_eq!(bottom.get_tab_rect(1), rect(62, 176, 60, 22));

        let left = create_style_engine(TabStyle::Default, host(TabAlignment::Left));
        assert_eq!(left.get_tab_rect(1), rect(2, 42, 26, 40));

        let right = create_style_engine(TabStyle::Default, host(TabAlignment::Right));
        assert_eq!(right.get_tab_rect(1), rect(272, 42, 26, 40));
    }

    #[test]
    fn invalid_indices_yield_empty_results() {
        let engine = create_style_engine(TabStyle::Rounded, host(TabAlignment::Top));
        for index in [-1, 3, i32::MAX] {
            assert_eq!(engine.get_tab_rect(index), PxRect::ZERO);
            assert!(engine.get_tab_border_path(index).is_empty());
            assert!(engine.tab_background(index).is_none());
            assert!(engine.page_background_brush(index).is_none());
            assert!(engine.focus_indicator(index).is_none());
            assert!(engine.closer_glyph(index).is_none());
        }
    }

    #[test]
    fn overlap_extends_non_leading_tabs_only() {
        let engine = create_style_engine(TabStyle::VisualStudio, host(TabAlignment::Top));
        assert_eq!(engine.overlap(), 7);
        assert_eq!(engine.get_tab_rect(0), rect(2, 2, 60, 22));
        assert_eq!(engine.get_tab_rect(1), rect(55, 2, 67, 22));

        let vertical = create_style_engine(TabStyle::VisualStudio, host(TabAlignment::Left));
        assert_eq!(vertical.get_tab_rect(2), rect(2, 75, 26, 47));
    }

    #[test]
    fn huge_overlap_saturates_instead_of_overflowing() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        engine.set_overlap(i32::MAX).expect("overlap is not negative");
        assert_eq!(engine.get_tab_rect(0), rect(2, 2, 60, 22));
        assert_eq!(engine.get_tab_rect(1), rect(62 - i32::MAX, 2, i32::MAX, 22));
        assert!(engine.tab_background(1).is_some());

        let mut recorder = PaintRecorder::new();
        engine.paint_tab(1, &mut recorder).expect("recorder accepts");
        assert_eq!(recorder.ops().len(), 1);

        let mut vertical = create_style_engine(TabStyle::Default, host(TabAlignment::Right));
        vertical.set_overlap(i32::MAX).expect("overlap is not negative");
        let tab = vertical.get_tab_rect(2);
        assert_eq!((tab.y, tab.height), (Px(82 - i32::MAX), Px(i32::MAX)));
    }

    #[test]
    fn zero_overlap_keeps_tabs_inside_their_grown_bounds() {
        let engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        for index in 1..3 {
            let raw = engine.host().raw_tab_rect(index as usize);
            let grown = PxRect::new(raw.x, raw.y, raw.width, raw.height + PAGE_OVERLAP);
            assert!(grown.contains_rect(&engine.get_tab_rect(index)));
        }
    }

    #[test]
    fn right_to_left_mirrors_x_only() {
        let mut h = host(TabAlignment::Top);
        h.state.right_to_left = true;
        let engine = create_style_engine(TabStyle::Default, h);
        // raw tab 1 spans 62..122 in a 300 wide widget
        assert_eq!(engine.get_tab_rect(1), rect(178, 2, 60, 22));
    }

    #[test]
    fn right_to_left_applies_overlap_to_the_first_tab() {
        let mut h = host(TabAlignment::Top);
        h.state.right_to_left = true;
        let engine = create_style_engine(TabStyle::VisualStudio, h);
        assert_eq!(engine.get_tab_rect(0), rect(231, 2, 67, 22));
    }

    #[test]
    fn first_tab_is_clipped_to_the_page() {
        let mut h = host(TabAlignment::Top);
        h.tabs[0].rect.x = Px(-3);
        let engine = create_style_engine(TabStyle::Default, h);
        assert_eq!(engine.get_tab_rect(0), rect(2, 2, 55, 22));

        let mut scrolled = host(TabAlignment::Top);
        scrolled.tabs[0].rect.x = Px(-80);
        let engine = create_style_engine(TabStyle::Default, scrolled);
        assert_eq!(engine.get_tab_rect(0), rect(-80, 2, 60, 22));
    }

    #[test]
    fn first_tab_right_to_left_is_trimmed_at_the_page_edge() {
        let mut h = host(TabAlignment::Left);
        h.state.right_to_left = true;
        h.tabs[0].rect.height = Px(300);
        let engine = create_style_engine(TabStyle::Default, h);
        let tab = engine.get_tab_rect(0);
        assert_eq!(tab.bottom(), engine.host().page.bottom());
    }

    #[test]
    fn first_tab_right_to_left_is_trimmed_at_the_page_right() {
        // raw 2..57 mirrors to 243..303, past the page's right edge at 298
        let mut h = host(TabAlignment::Top);
        h.state.right_to_left = true;
        h.tabs[0].rect.x = Px(-3);
        let engine = create_style_engine(TabStyle::Default, h);
        assert_eq!(engine.get_tab_rect(0), rect(243, 2, 55, 22));
    }

    #[test]
    fn first_tab_right_to_left_scrolled_out_is_left_alone() {
        let mut h = host(TabAlignment::Top);
        h.state.right_to_left = true;
        h.tabs[0].rect.x = Px(-80);
        let engine = create_style_engine(TabStyle::Default, h);
        assert_eq!(engine.get_tab_rect(0), rect(320, 2, 60, 22));

        let mut vertical = host(TabAlignment::Left);
        vertical.state.right_to_left = true;
        vertical.tabs[0].rect.y = Px(210);
        let engine = create_style_engine(TabStyle::Default, vertical);
        assert_eq!(engine.get_tab_rect(0), rect(274, 210, 26, 40));
    }

    #[test]
    fn first_vertical_tab_is_clipped_to_the_page_top() {
        let mut h = host(TabAlignment::Left);
        h.tabs[0].rect.y = Px(-3);
        let engine = create_style_engine(TabStyle::Default, h);
        assert_eq!(engine.get_tab_rect(0), rect(2, 2, 26, 35));

        let mut scrolled = host(TabAlignment::Left);
        scrolled.tabs[0].rect.y = Px(-50);
        let engine = create_style_engine(TabStyle::Default, scrolled);
        assert_eq!(engine.get_tab_rect(0), rect(2, -50, 26, 40));
    }

    #[test]
    fn background_tones_follow_tab_state() {
        let mut h = host(TabAlignment::Top);
        h.state.selected_index = Some(1);
        h.state.active_index = Some(2);
        h.tabs[0].enabled = false;
        let engine = create_style_engine(TabStyle::Default, h);
        let theme = SystemColors::default();

        let disabled = engine.tab_background(0).expect("valid index");
        assert_eq!(disabled.state, TabState::Disabled);
        assert_eq!((disabled.light, disabled.dark), (TabTones::DISABLED, TabTones::DISABLED));

        let selected = engine.tab_background(1).expect("valid index");
        assert_eq!(selected.state, TabState::Selected);
        assert_eq!((selected.light, selected.dark), (theme.window, theme.control_light));

        let hot = engine.tab_background(2).expect("valid index");
        assert_eq!(hot.state, TabState::Hot);
        assert_eq!((hot.light, hot.dark), (TabTones::HOT_LIGHT, TabTones::HOT_DARK));
    }

    #[test]
    fn hot_state_needs_hot_tracking() {
        let mut h = host(TabAlignment::Top);
        h.state.active_index = Some(2);
        let mut engine = create_style_engine(TabStyle::Default, h);
        engine.set_hot_track(false);
        let idle = engine.tab_background(2).expect("valid index");
        assert_eq!(idle.state, TabState::Normal);
        assert_eq!((idle.light, idle.dark), (TabTones::IDLE_LIGHT, TabTones::IDLE_DARK));
    }

    #[test]
    fn gradient_geometry_and_blend_depend_on_alignment() {
        let top = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        let brush = top.tab_background(1).expect("valid index").brush;
        // (62, 2, 60, 22) inflated by 3, moved up-left by 1
        assert_eq!(brush.rect, rect(58, -2, 66, 28));
        assert_eq!(brush.direction, GradientDirection::Vertical);
        assert_eq!(brush.blend, Blend::top_tab());
        assert_eq!((brush.start, brush.end), (TabTones::IDLE_LIGHT, TabTones::IDLE_DARK));

        let left = create_style_engine(TabStyle::Default, host(TabAlignment::Left));
        let brush = left.tab_background(1).expect("valid index").brush;
        assert_eq!(brush.direction, GradientDirection::Horizontal);
        assert_eq!(brush.blend, Blend::side_tab());
        assert_eq!((brush.start, brush.end), (TabTones::IDLE_DARK, TabTones::IDLE_LIGHT));

        let right = create_style_engine(TabStyle::Default, host(TabAlignment::Right));
        let brush = right.tab_background(1).expect("valid index").brush;
        assert_eq!((brush.start, brush.end), (TabTones::IDLE_LIGHT, TabTones::IDLE_DARK));
    }

    #[test]
    fn opacity_scales_gradient_alpha_only() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        engine.set_opacity(0.5).expect("valid opacity");
        let background = engine.tab_background(0).expect("valid index");
        assert_eq!(background.brush.start.a, 0.5);
        assert_eq!(background.brush.end.a, 0.5);
        assert_eq!(background.light.a, 1.0);
    }

    #[test]
    fn theme_changes_show_through_unset_colors() {
        let mut h = host(TabAlignment::Top);
        h.state.selected_index = Some(0);
        let mut engine = create_style_engine(TabStyle::Default, h);
        engine.set_border_color(SystemColors::CLASSIC.control_dark);
        assert_eq!(engine.config().color_override(ColorRole::Border).get(), None);

        engine.host_mut().colors = SystemColors::HIGH_CONTRAST;
        assert_eq!(engine.border_color(), SystemColors::HIGH_CONTRAST.control_dark);
        let selected = engine.tab_background(0).expect("valid index");
        assert_eq!(selected.light, Color::BLACK);
    }

    #[test]
    fn explicit_colors_drive_pens_and_text() {
        let mut h = host(TabAlignment::Top);
        h.state.selected_index = Some(0);
        h.tabs[2].enabled = false;
        let mut engine = create_style_engine(TabStyle::Default, h);
        let red = Color::from_rgb_u8(0xFF, 0, 0);
        engine.set_border_color_selected(red);
        assert_eq!(engine.border_pen(0).map(|p| p.color), Some(red));
        assert_eq!(
            engine.border_pen(1).map(|p| p.color),
            Some(SystemColors::CLASSIC.control_dark)
        );
        assert_eq!(engine.tab_text_color(2), Some(SystemColors::CLASSIC.control_dark));
    }

    #[test]
    fn page_background_follows_tab_state() {
        let mut h = host(TabAlignment::Top);
        h.state.selected_index = Some(0);
        h.state.active_index = Some(2);
        let engine = create_style_engine(TabStyle::Default, h);
        let color = |i| engine.page_background_brush(i).map(|b| b.color);
        assert_eq!(color(0), Some(Color::WHITE));
        assert_eq!(color(1), Some(TabTones::IDLE_DARK));
        assert_eq!(color(2), Some(TabTones::HOT_LIGHT));

        let bottom = create_style_engine(TabStyle::Default, host(TabAlignment::Bottom));
        assert_eq!(
            bottom.page_background_brush(1).map(|b| b.color),
            Some(TabTones::IDLE_LIGHT)
        );
    }

    fn focused(alignment: TabAlignment) -> StaticTabHost {
        let mut h = host(alignment);
        h.state.selected_index = Some(0);
        h.state.focused = true;
        h
    }

    #[test]
    fn focus_strip_sits_on_the_page_side() {
        let top = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Top));
        let focus = top.focus_indicator(0).expect("focused selected tab");
        assert_eq!(focus.rect, rect(2, 20, 60, 4));
        assert_eq!(focus.brush.start, Color::ORANGE);
        assert_eq!(focus.brush.end, SystemColors::CLASSIC.window);
        assert!(focus.clip.is_closed());

        let bottom = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Bottom));
        let focus = bottom.focus_indicator(0).expect("focused selected tab");
        assert_eq!(focus.rect, rect(2, 176, 60, 4));
        assert_eq!(focus.brush.end, SystemColors::CLASSIC.control_light);

        let left = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Left));
        let focus = left.focus_indicator(0).expect("focused selected tab");
        assert_eq!(focus.rect, rect(24, 2, 4, 40));
        assert_eq!(focus.brush.direction, GradientDirection::Horizontal);

        let right = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Right));
        let focus = right.focus_indicator(0).expect("focused selected tab");
        assert_eq!(focus.rect, rect(272, 2, 4, 40));
    }

    #[test]
    fn focus_strip_needs_tracking_focus_and_selection() {
        let engine = create_style_engine(TabStyle::Default, focused(TabAlignment::Top));
        assert!(engine.focus_indicator(0).is_none());

        let mut h = focused(TabAlignment::Top);
        h.state.focused = false;
        let engine = create_style_engine(TabStyle::Rounded, h);
        assert!(engine.focus_indicator(0).is_none());

        let engine = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Top));
        assert!(engine.focus_indicator(1).is_none());
    }

    #[test]
    fn closer_glyph_follows_the_pointer() {
        let mut engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        assert!(engine.closer_glyph(0).is_none());

        engine.set_show_closer(true);
        let idle = engine.closer_glyph(0).expect("closers shown");
        assert!(!idle.active);
        assert_eq!(idle.pen.color, Color::DARK_GRAY);
        assert_eq!(idle.path.figures().len(), 2);
        assert!(!idle.path.is_closed());

        let center = idle.rect.center();
        engine.host_mut().state.mouse_position = center;
        let active = engine.closer_glyph(0).expect("closers shown");
        assert!(active.active);
        assert_eq!(active.pen.color, Color::BLACK);
    }

    #[test]
    fn paint_tab_composes_fill_focus_and_closer() {
        let mut engine = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Top));
        engine.set_show_closer(true);
        let mut recorder = PaintRecorder::new();
        engine.paint_tab(0, &mut recorder).expect("recorder accepts");
        let ops = recorder.ops();
        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], PaintOp::Fill { brush: Brush::Linear(_), .. }));
        assert!(matches!(ops[1], PaintOp::FillClipped { .. }));
        assert!(matches!(ops[2], PaintOp::Stroke { .. }));

        recorder.clear();
        engine.paint_tab(1, &mut recorder).expect("recorder accepts");
        assert_eq!(recorder.ops().len(), 2);
    }

    #[test]
    fn paint_tab_ignores_invalid_indices() {
        let engine = create_style_engine(TabStyle::Default, host(TabAlignment::Top));
        let mut recorder = PaintRecorder::new();
        engine.paint_tab(-1, &mut recorder).expect("nothing painted");
        engine.paint_tab(3, &mut recorder).expect("nothing painted");
        assert!(recorder.ops().is_empty());
    }

    #[test]
    fn paint_tab_stops_at_the_first_surface_error() {
        let engine = create_style_engine(TabStyle::Rounded, focused(TabAlignment::Top));
        let mut recorder = PaintRecorder::failing_at(1);
        let err = engine
            .paint_tab(0, &mut recorder)
            .expect_err("focus strip must fail");
        assert!(matches!(err, PaintError::Rejected { operation: "fill_clipped", .. }));
        assert_eq!(recorder.ops().len(), 1);
    }

    struct CountingHost {
        inner: StaticTabHost,
        rect_queries: Cell<usize>,
    }

    impl TabHost for CountingHost {
        fn tab_count(&self) -> usize {
            self.inner.tab_count()
        }

        fn raw_tab_rect(&self, index: usize) -> PxRect {
            self.rect_queries.set(self.rect_queries.get() + 1);
            self.inner.raw_tab_rect(index)
        }

        fn page_bounds(&self, index: usize) -> PxRect {
            self.inner.page_bounds(index)
        }

        fn closer_rect(&self, index: usize) -> PxRect {
            self.inner.closer_rect(index)
        }

        fn is_first_tab_in_row(&self, index: usize) -> bool {
            self.inner.is_first_tab_in_row(index)
        }

        fn widget_state(&self) -> WidgetState {
            self.inner.widget_state()
        }

        fn invalidate(&mut self) {
            self.inner.invalidate();
        }

        fn set_padding(&mut self, padding: PxPosition) {
            self.inner.set_padding(padding);
        }
    }

    #[test]
    fn paint_tab_lays_out_once_and_clips_to_the_filled_outline() {
        let host = CountingHost {
            inner: focused(TabAlignment::Bottom),
            rect_queries: Cell::new(0),
        };
        let engine = create_style_engine(TabStyle::Rounded, host);
        let mut recorder = PaintRecorder::new();
        engine.paint_tab(0, &mut recorder).expect("recorder accepts");
        assert_eq!(engine.host().rect_queries.get(), 1);

        let [PaintOp::Fill { path, .. }, PaintOp::FillClipped { clip, .. }] = recorder.ops() else {
            panic!("expected fill then focus strip, got {:?}", recorder.ops());
        };
        assert_eq!(clip, path);
        assert_eq!(Some(clip), engine.focus_indicator(0).map(|f| f.clip).as_ref());
    }
}
