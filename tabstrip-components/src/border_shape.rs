//! Named tab styles and the border outline each one draws.
//!
//! Every style is a pure function of the tab rectangle, the row alignment and
//! the configured corner radius. The outline starts and ends on the page side
//! of the tab; [`crate::style_engine::StyleEngine::get_tab_border_path`]
//! closes it along that edge.
//!
//! Corner radii are clamped to half the shorter side of the rectangle, so a
//! large radius on a small tab degrades to a capsule end instead of crossing
//! arcs.

use std::fmt;

use tabstrip_ui::PxRect;

use crate::{alignment::TabAlignment, tab_path::TabPath};

/// Largest trailing-corner radius of the [`TabStyle::VisualStudio`] shape.
const VISUAL_STUDIO_CORNER: f32 = 3.0;

/// Identifier of a tab look.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TabStyle {
    /// Plain rectangle. The host is expected to skip most decoration.
    None,
    /// Square three-sided tab.
    #[default]
    Default,
    /// Tab with both outer corners chamfered by the radius.
    Dark,
    /// Tab with both outer corners rounded by the radius.
    Rounded,
    /// IDE-like tab with a slanted leading edge.
    VisualStudio,
}

impl TabStyle {
    /// Every style, in declaration order.
    pub const ALL: [TabStyle; 5] = [
        TabStyle::None,
        TabStyle::Default,
        TabStyle::Dark,
        TabStyle::Rounded,
        TabStyle::VisualStudio,
    ];

    /// Resolves a style name, ignoring case, `-`, `_` and spaces.
    /// Unknown names resolve to [`TabStyle::Default`].
    ///
    /// ```
    /// use tabstrip_components::border_shape::TabStyle;
    ///
    /// assert_eq!(TabStyle::from_name("Rounded"), TabStyle::Rounded);
    /// assert_eq!(TabStyle::from_name("visual-studio"), TabStyle::VisualStudio);
    /// assert_eq!(TabStyle::from_name("chrome"), TabStyle::Default);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "none" => TabStyle::None,
            "dark" => TabStyle::Dark,
            "rounded" => TabStyle::Rounded,
            "visualstudio" | "ide" => TabStyle::VisualStudio,
            _ => TabStyle::Default,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            TabStyle::None => "none",
            TabStyle::Default => "default",
            TabStyle::Dark => "dark",
            TabStyle::Rounded => "rounded",
            TabStyle::VisualStudio => "visual-studio",
        }
    }

    /// Appends this style's open border outline for `rect` to `path`.
    pub fn add_tab_border(
        self,
        path: &mut TabPath,
        rect: PxRect,
        alignment: TabAlignment,
        radius: i32,
    ) {
        let edges = Edges::of(rect);
        match self {
            TabStyle::None | TabStyle::Default => square_border(path, edges, alignment),
            TabStyle::Dark => chamfered_border(path, edges, alignment, radius),
            TabStyle::Rounded => rounded_border(path, edges, alignment, radius),
            TabStyle::VisualStudio => slanted_border(path, edges, alignment, radius),
        }
    }
}

impl fmt::Display for TabStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug)]
struct Edges {
    x: f32,
    y: f32,
    r: f32,
    b: f32,
}

impl Edges {
    fn of(rect: PxRect) -> Self {
        Self {
            x: rect.left().to_f32(),
            y: rect.top().to_f32(),
            r: rect.right().to_f32(),
            b: rect.bottom().to_f32(),
        }
    }

    fn width(&self) -> f32 {
        self.r - self.x
    }

    fn height(&self) -> f32 {
        self.b - self.y
    }

    fn clamp_radius(&self, radius: f32) -> f32 {
        radius.min(self.width().min(self.height()) / 2.0).max(0.0)
    }
}

fn square_border(path: &mut TabPath, e: Edges, alignment: TabAlignment) {
    let Edges { x, y, r, b } = e;
    match alignment {
        TabAlignment::Top => {
            path.add_line(x, b, x, y);
            path.add_line(x, y, r, y);
            path.add_line(r, y, r, b);
        }
        TabAlignment::Bottom => {
            path.add_line(r, y, r, b);
            path.add_line(r, b, x, b);
            path.add_line(x, b, x, y);
        }
        TabAlignment::Left => {
            path.add_line(r, b, x, b);
            path.add_line(x, b, x, y);
            path.add_line(x, y, r, y);
        }
        TabAlignment::Right => {
            path.add_line(x, y, r, y);
            path.add_line(r, y, r, b);
            path.add_line(r, b, x, b);
        }
    }
}

fn rounded_border(path: &mut TabPath, e: Edges, alignment: TabAlignment, radius: i32) {
    let Edges { x, y, r, b } = e;
    let rad = e.clamp_radius(radius as f32);
    let d = rad * 2.0;
    match alignment {
        TabAlignment::Top => {
            path.add_line(x, b, x, y + rad);
            path.add_arc(x, y, d, d, 180.0, 90.0);
            path.add_line(x + rad, y, r - rad, y);
            path.add_arc(r - d, y, d, d, 270.0, 90.0);
            path.add_line(r, y + rad, r, b);
        }
        TabAlignment::Bottom => {
            path.add_line(r, y, r, b - rad);
            path.add_arc(r - d, b - d, d, d, 0.0, 90.0);
            path.add_line(r - rad, b, x + rad, b);
            path.add_arc(x, b - d, d, d, 90.0, 90.0);
            path.add_line(x, b - rad, x, y);
        }
        TabAlignment::Left => {
            path.add_line(r, b, x + rad, b);
            path.add_arc(x, b - d, d, d, 90.0, 90.0);
            path.add_line(x, b - rad, x, y + rad);
            path.add_arc(x, y, d, d, 180.0, 90.0);
            path.add_line(x + rad, y, r, y);
        }
        TabAlignment::Right => {
            path.add_line(x, y, r - rad, y);
            path.add_arc(r - d, y, d, d, 270.0, 90.0);
            path.add_line(r, y + rad, r, b - rad);
            path.add_arc(r - d, b - d, d, d, 0.0, 90.0);
            path.add_line(r - rad, b, x, b);
        }
    }
}

/// Maps tab-local coordinates onto the real rectangle.
///
/// `u` runs along the tab row from the leading end, `v` runs from the outer
/// edge (`v = 0`) toward the page (`v = thickness`). In these coordinates
/// every alignment looks like a top-aligned tab.
struct Frame {
    edges: Edges,
    alignment: TabAlignment,
}

impl Frame {
    fn length(&self) -> f32 {
        if self.alignment.is_horizontal() {
            self.edges.width()
        } else {
            self.edges.height()
        }
    }

    fn thickness(&self) -> f32 {
        if self.alignment.is_horizontal() {
            self.edges.height()
        } else {
            self.edges.width()
        }
    }

    fn map(&self, u: f32, v: f32) -> (f32, f32) {
        let Edges { x, y, r, b } = self.edges;
        match self.alignment {
            TabAlignment::Top => (x + u, y + v),
            TabAlignment::Bottom => (x + u, b - v),
            TabAlignment::Left => (x + v, y + u),
            TabAlignment::Right => (r - v, y + u),
        }
    }

    fn line(&self, path: &mut TabPath, from: (f32, f32), to: (f32, f32)) {
        let (x1, y1) = self.map(from.0, from.1);
        let (x2, y2) = self.map(to.0, to.1);
        path.add_line(x1, y1, x2, y2);
    }

    /// Quarter arc at the outer trailing corner, traversed from
    /// `(length - radius, 0)` to `(length, radius)`.
    fn trailing_corner(&self, path: &mut TabPath, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        let Edges { x, y, r, b } = self.edges;
        let (cx, cy) = self.map(self.length(), 0.0);
        let left = cx <= x;
        let top = cy <= y;
        // Top and Right keep the screen orientation; Bottom and Left mirror it.
        let clockwise = matches!(self.alignment, TabAlignment::Top | TabAlignment::Right);
        let d = radius * 2.0;
        let (bx, by, start) = match (left, top) {
            (true, true) => (x, y, if clockwise { 180.0 } else { 270.0 }),
            (false, true) => (r - d, y, if clockwise { 270.0 } else { 0.0 }),
            (false, false) => (r - d, b - d, if clockwise { 0.0 } else { 90.0 }),
            (true, false) => (x, b - d, if clockwise { 90.0 } else { 180.0 }),
        };
        let sweep = if clockwise { 90.0 } else { -90.0 };
        path.add_arc(bx, by, d, d, start, sweep);
    }
}

fn chamfered_border(path: &mut TabPath, e: Edges, alignment: TabAlignment, radius: i32) {
    let frame = Frame {
        edges: e,
        alignment,
    };
    let (len, t) = (frame.length(), frame.thickness());
    let c = e.clamp_radius(radius as f32);
    frame.line(path, (0.0, t), (0.0, c));
    frame.line(path, (0.0, c), (c, 0.0));
    frame.line(path, (c, 0.0), (len - c, 0.0));
    frame.line(path, (len - c, 0.0), (len, c));
    frame.line(path, (len, c), (len, t));
}

fn slanted_border(path: &mut TabPath, e: Edges, alignment: TabAlignment, radius: i32) {
    let frame = Frame {
        edges: e,
        alignment,
    };
    let (len, t) = (frame.length(), frame.thickness());
    let slant = (t - 2.0).min(len / 2.0).max(0.0);
    let corner = e.clamp_radius((radius as f32).min(VISUAL_STUDIO_CORNER));
    frame.line(path, (0.0, t), (slant, 0.0));
    frame.line(path, (slant, 0.0), (len - corner, 0.0));
    frame.trailing_corner(path, corner);
    frame.line(path, (len, corner), (len, t));
}
