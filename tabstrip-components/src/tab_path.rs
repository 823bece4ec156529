//! Vector outlines for tab borders and glyphs.
//!
//! A [`TabPath`] is an ordered list of figures, each an ordered list of line
//! and circular-arc segments. Consecutive segments of a figure are joined:
//! when a segment does not start where the previous one ended, a straight
//! connector is implied. Closing a figure joins its last point back to its
//! first.
//!
//! Arcs are described like a desktop graphics path: the bounding box of the
//! full ellipse plus a start angle and a sweep in degrees, measured clockwise
//! from the positive x-axis (y grows downward).
//!
//! Paths convert to [`lyon_path::Path`] for rasterizing backends, flatten to
//! polygons for hit testing, and print as SVG path data.


use lyon_geom::{Angle, Arc, LineSegment, Point, point, vector};
use lyon_path::{Event, Path, iterator::PathIterator};
use smallvec::SmallVec;
use tabstrip_ui::{Px, PxRect};

/// Flattening tolerance used by hit testing and bounds, in pixels.
pub const DEFAULT_TOLERANCE: f32 = 0.05;

const JOIN_EPSILON: f32 = 1e-3;

/// One drawing primitive of a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderSegment {
    /// Straight line.
    Line(LineSegment<f32>),
    /// Elliptic arc; tab borders only produce circular ones.
    Arc(Arc<f32>),
}

impl BorderSegment {
    /// Start point of the segment.
    pub fn from(&self) -> Point<f32> {
        match self {
            BorderSegment::Line(line) => line.from,
            BorderSegment::Arc(arc) => arc.from(),
        }
    }

    /// End point of the segment.
    pub fn to(&self) -> Point<f32> {
        match self {
            BorderSegment::Line(line) => line.to,
            BorderSegment::Arc(arc) => arc.to(),
        }
    }
}

/// A connected run of segments, optionally closed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Figure {
    segments: SmallVec<[BorderSegment; 8]>,
    closed: bool,
}

impl Figure {
    /// Segments in drawing order.
    pub fn segments(&self) -> &[BorderSegment] {
        &self.segments
    }

    /// Whether the figure was closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// First point of the figure.
    pub fn start(&self) -> Option<Point<f32>> {
        self.segments.first().map(BorderSegment::from)
    }

    /// Last point reached before any closing edge.
    pub fn end(&self) -> Option<Point<f32>> {
        self.segments.last().map(BorderSegment::to)
    }

    /// Largest implied connector between consecutive segments.
    pub fn max_join_gap(&self) -> f32 {
        self.segments
            .windows(2)
            .map(|pair| (pair[1].from() - pair[0].to()).length())
            .fold(0.0, f32::max)
    }
}

/// A closed-figure outline built from lines and arcs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabPath {
    figures: SmallVec<[Figure; 2]>,
}

impl TabPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    fn open_figure(&mut self) -> &mut Figure {
        if self.figures.last().is_none_or(|f| f.closed) {
            self.figures.push(Figure::default());
        }
        let last = self.figures.len() - 1;
        &mut self.figures[last]
    }

    /// Appends a straight line to the current figure.
    pub fn add_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.open_figure()
            .segments
            .push(BorderSegment::Line(LineSegment {
                from: point(x1, y1),
                to: point(x2, y2),
            }));
    }

    /// Appends an arc of the ellipse bounded by `(x, y, width, height)`,
    /// starting at `start_degrees` and sweeping `sweep_degrees` clockwise.
    pub fn add_arc(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    ) {
        let radii = vector(width / 2.0, height / 2.0);
        let arc = Arc {
            center: point(x + radii.x, y + radii.y),
            radii,
            start_angle: Angle::degrees(start_degrees),
            sweep_angle: Angle::degrees(sweep_degrees),
            x_rotation: Angle::zero(),
        };
        self.open_figure().segments.push(BorderSegment::Arc(arc));
    }

    /// Closes the current figure. Later segments start a new figure.
    pub fn close_figure(&mut self) {
        if let Some(figure) = self.figures.last_mut() {
            if !figure.segments.is_empty() {
                figure.closed = true;
            }
        }
    }

    /// Starts a new open figure without closing the current one.
    pub fn start_figure(&mut self) {
        if self.figures.last().is_some_and(|f| !f.segments.is_empty()) {
            self.figures.push(Figure::default());
        }
    }

    /// Figures in drawing order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Returns `true` when the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.figures.iter().all(|f| f.segments.is_empty())
    }

    /// Returns `true` when the path has segments and every figure is closed.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.figures.iter().all(|f| f.closed)
    }

    /// Converts the path into a lyon path; arcs become quadratic béziers.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        for figure in &self.figures {
            let Some(start) = figure.start() else {
                continue;
            };
            builder.begin(start);
            let mut current = start;
            for segment in &figure.segments {
                let from = segment.from();
                if (from - current).length() > JOIN_EPSILON {
                    builder.line_to(from);
                }
                match segment {
                    BorderSegment::Line(line) => {
                        builder.line_to(line.to);
                    }
                    BorderSegment::Arc(arc) => {
                        arc.for_each_quadratic_bezier(&mut |curve| {
                            builder.quadratic_bezier_to(curve.ctrl, curve.to);
                        });
                    }
                }
                current = segment.to();
            }
            builder.end(figure.closed);
        }
        builder.build()
    }

    /// Flattens every figure into a polyline. Closed figures repeat their
    /// first point at the end, so `first == last`.
    pub fn outlines(&self, tolerance: f32) -> Vec<Vec<Point<f32>>> {
        let mut outlines = Vec::new();
        let mut current: Vec<Point<f32>> = Vec::new();
        for event in self.to_lyon_path().iter().flattened(tolerance) {
            match event {
                Event::Begin { at } => {
                    current = vec![at];
                }
                Event::Line { to, .. } => current.push(to),
                Event::End { first, close, .. } => {
                    if close {
                        current.push(first);
                    }
                    outlines.push(std::mem::take(&mut current));
                }
                Event::Quadratic { to, .. } | Event::Cubic { to, .. } => current.push(to),
            }
        }
        outlines
    }

    /// Smallest pixel rectangle containing the path, or an empty rectangle
    /// for an empty path.
    pub fn bounds(&self) -> PxRect {
        let mut points = self.outlines(DEFAULT_TOLERANCE).into_iter().flatten();
        let Some(first) = points.next() else {
            return PxRect::ZERO;
        };
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        let x = Px::saturating_from_f32(min.x.round());
        let y = Px::saturating_from_f32(min.y.round());
        PxRect::new(
            x,
            y,
            Px::saturating_from_f32(max.x.round()) - x,
            Px::saturating_from_f32(max.y.round()) - y,
        )
    }

    /// Non-zero winding hit test over the closed figures.
    pub fn contains(&self, p: Point<f32>) -> bool {
        self.outlines(DEFAULT_TOLERANCE)
            .iter()
            .zip(self.figures.iter().filter(|f| !f.segments.is_empty()))
            .filter(|(_, figure)| figure.closed)
            .map(|(outline, _)| winding_number(outline, p))
            .sum::<i32>()
            != 0
    }

    /// Returns `true` when two non-adjacent edges of any closed figure cross.
    pub fn is_self_intersecting(&self) -> bool {
        self.outlines(DEFAULT_TOLERANCE)
            .iter()
            .zip(self.figures.iter().filter(|f| !f.segments.is_empty()))
            .filter(|(_, figure)| figure.closed)
            .any(|(outline, _)| polygon_self_intersects(outline))
    }

    /// SVG path data (`M`, `L`, `A`, `Z` commands) for the path.
    pub fn to_svg_data(&self) -> String {
        let mut data = String::new();
        for figure in &self.figures {
            let Some(start) = figure.start() else {
                continue;
            };
            data.push_str(&format!("M{} {}", start.x, start.y));
            let mut current = start;
            for segment in &figure.segments {
                let from = segment.from();
                if (from - current).length() > JOIN_EPSILON {
                    data.push_str(&format!(" L{} {}", from.x, from.y));
                }
                let to = segment.to();
                match segment {
                    BorderSegment::Line(_) => {
                        data.push_str(&format!(" L{} {}", to.x, to.y));
                    }
                    BorderSegment::Arc(arc) => {
                        let sweep = arc.sweep_angle.get();
                        let large = u8::from(sweep.abs() > std::f32::consts::PI);
                        let positive = u8::from(sweep > 0.0);
                        data.push_str(&format!(
                            " A{} {} 0 {} {} {} {}",
                            arc.radii.x, arc.radii.y, large, positive, to.x, to.y
                        ));
                    }
                }
                current = to;
            }
            if figure.closed {
                data.push_str(" Z");
            }
            data.push(' ');
        }
        data.trim_end().to_string()
    }
}

fn cross(a: Point<f32>, b: Point<f32>, p: Point<f32>) -> f32 {
    (b - a).cross(p - a)
}

fn winding_number(polygon: &[Point<f32>], p: Point<f32>) -> i32 {
    let mut winding = 0;
    for edge in polygon.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if a.y <= p.y {
            if b.y > p.y && cross(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

fn polygon_self_intersects(polygon: &[Point<f32>]) -> bool {
    let mut points: Vec<Point<f32>> = Vec::with_capacity(polygon.len());
    for &p in polygon {
        if points
            .last()
            .is_none_or(|last| (p - *last).length() > JOIN_EPSILON)
        {
            points.push(p);
        }
    }
    if points.len() < 4 {
        return false;
    }

    let edge_count = points.len() - 1;
    let edges: Vec<(Point<f32>, Point<f32>)> =
        points.windows(2).map(|w| (w[0], w[1])).collect();
    for i in 0..edge_count {
        for j in (i + 2)..edge_count {
            if i == 0 && j == edge_count - 1 {
                continue;
            }
            let (a, b) = edges[i];
            let (c, d) = edges[j];
            let d1 = cross(a, b, c);
            let d2 = cross(a, b, d);
            let d3 = cross(c, d, a);
            let d4 = cross(c, d, b);
            if d1 * d2 < -JOIN_EPSILON && d3 * d4 < -JOIN_EPSILON {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> TabPath {
        let mut path = TabPath::new();
        path.add_line(0.0, 10.0, 0.0, 0.0);
        path.add_line(0.0, 0.0, 10.0, 0.0);
        path.add_line(10.0, 0.0, 10.0, 10.0);
        path.close_figure();
        path
    }

    #[test]
    fn closed_outline_repeats_first_point() {
        let outlines = square().outlines(DEFAULT_TOLERANCE);
        assert_eq!(outlines.len(), 1);
        let outline = &outlines[0];
        assert_eq!(outline.first(), outline.last());
        assert_eq!(outline.len(), 5);
    }

    #[test]
    fn square_contains_its_center_only() {
        let path = square();
        assert!(path.is_closed());
        assert!(path.contains(point(5.0, 5.0)));
        assert!(!path.contains(point(15.0, 5.0)));
        assert!(!path.contains(point(5.0, -1.0)));
    }

    #[test]
    fn bounds_cover_arcs() {
        let mut path = TabPath::new();
        path.add_arc(0.0, 0.0, 20.0, 20.0, 180.0, 90.0);
        path.add_line(10.0, 0.0, 30.0, 0.0);
        path.close_figure();
        assert_eq!(path.bounds(), PxRect::new(Px(0), Px(0), Px(30), Px(10)));
    }

    #[test]
    fn quarter_arc_runs_clockwise_in_screen_space() {
        let mut path = TabPath::new();
        path.add_arc(0.0, 0.0, 20.0, 20.0, 180.0, 90.0);
        let arc = path.figures()[0].segments()[0];
        assert!((arc.from() - point(0.0, 10.0)).length() < 1e-3);
        assert!((arc.to() - point(10.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn bow_tie_is_self_intersecting() {
        let mut path = TabPath::new();
        path.add_line(0.0, 0.0, 10.0, 10.0);
        path.add_line(10.0, 10.0, 10.0, 0.0);
        path.add_line(10.0, 0.0, 0.0, 10.0);
        path.close_figure();
        assert!(path.is_self_intersecting());
        assert!(!square().is_self_intersecting());
    }

    #[test]
    fn closing_starts_a_new_figure() {
        let mut path = TabPath::new();
        path.add_line(0.0, 0.0, 8.0, 8.0);
        path.close_figure();
        path.add_line(8.0, 0.0, 0.0, 8.0);
        path.close_figure();
        assert_eq!(path.figures().len(), 2);
        assert!(path.is_closed());
    }

    #[test]
    fn start_figure_leaves_both_figures_open() {
        let mut path = TabPath::new();
        path.start_figure();
        path.add_line(0.0, 0.0, 8.0, 8.0);
        path.start_figure();
        path.add_line(8.0, 0.0, 0.0, 8.0);
        assert_eq!(path.figures().len(), 2);
        assert!(!path.is_closed());
        assert_eq!(path.outlines(DEFAULT_TOLERANCE)[1], vec![point(8.0, 0.0), point(0.0, 8.0)]);
    }

    #[test]
    fn empty_path_has_no_bounds_and_is_not_closed() {
        let mut path = TabPath::new();
        path.close_figure();
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.bounds(), PxRect::ZERO);
        assert!(!path.contains(point(0.0, 0.0)));
    }

    #[test]
    fn svg_data_uses_arc_commands() {
        let mut path = TabPath::new();
        path.add_line(0.0, 20.0, 0.0, 5.0);
        path.add_arc(0.0, 0.0, 10.0, 10.0, 180.0, 90.0);
        path.close_figure();
        let data = path.to_svg_data();
        assert!(data.starts_with("M0 20 L0 5"));
        assert!(data.contains(" A5 5 0 0 1 "));
        assert!(data.ends_with('Z'));
    }
}
