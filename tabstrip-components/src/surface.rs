//! Paint targets for the style engine.
//!
//! ## Usage
//!
//! [`crate::style_engine::StyleEngine::paint_tab`] draws through the
//! [`DrawingSurface`] trait. Two surfaces ship with the crate:
//!
//! - [`PaintRecorder`] keeps every call as a [`PaintOp`] and can print the
//!   result as an SVG document.
//! - [`MeshSurface`] tessellates fills and strokes into colored triangles
//!   ready for upload to a GPU.


use lyon_geom::Point;
use lyon_path::Path;
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, StrokeOptions, StrokeTessellator,
    StrokeVertex, VertexBuffers,
};
use thiserror::Error;
use tabstrip_ui::PxRect;

use crate::{
    brush::{Brush, GradientDirection, LinearGradient, Pen},
    tab_path::{DEFAULT_TOLERANCE, TabPath},
};

/// Failure reported by a [`DrawingSurface`].
#[derive(Debug, Error)]
pub enum PaintError {
    /// The surface refused a drawing call.
    #[error("surface rejected {operation}: {reason}")]
    Rejected {
        /// Name of the refused call.
        operation: &'static str,
        /// Surface-specific explanation.
        reason: String,
    },
    /// Tessellating a path failed.
    #[error("tessellation error: {0}")]
    Tessellation(#[from] lyon_tessellation::TessellationError),
}

/// Something tabs can be painted onto.
pub trait DrawingSurface {
    /// Fills `path` with `brush`.
    fn fill_path(&mut self, path: &TabPath, brush: &Brush) -> Result<(), PaintError>;

    /// Fills the part of `rect` that lies inside `clip`.
    fn fill_clipped(
        &mut self,
        rect: PxRect,
        clip: &TabPath,
        brush: &Brush,
    ) -> Result<(), PaintError>;

    /// Strokes `path` with `pen`.
    fn stroke_path(&mut self, path: &TabPath, pen: &Pen) -> Result<(), PaintError>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn fill_path(&mut self, path: &TabPath, brush: &Brush) -> Result<(), PaintError> {
        (**self).fill_path(path, brush)
    }

    fn fill_clipped(
        &mut self,
        rect: PxRect,
        clip: &TabPath,
        brush: &Brush,
    ) -> Result<(), PaintError> {
        (**self).fill_clipped(rect, clip, brush)
    }

    fn stroke_path(&mut self, path: &TabPath, pen: &Pen) -> Result<(), PaintError> {
        (**self).stroke_path(path, pen)
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// A [`DrawingSurface::fill_path`] call.
    Fill {
        /// Filled outline.
        path: TabPath,
        /// Fill source.
        brush: Brush,
    },
    /// A [`DrawingSurface::fill_clipped`] call.
    FillClipped {
        /// Filled rectangle.
        rect: PxRect,
        /// Clip outline.
        clip: TabPath,
        /// Fill source.
        brush: Brush,
    },
    /// A [`DrawingSurface::stroke_path`] call.
    Stroke {
        /// Stroked outline.
        path: TabPath,
        /// Stroke style.
        pen: Pen,
    },
}

/// Surface that records every call.
#[derive(Debug, Clone, Default)]
pub struct PaintRecorder {
    ops: Vec<PaintOp>,
    fail_at: Option<usize>,
}

impl PaintRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that rejects its `n`th call (zero based) and every
    /// call after it.
    pub fn failing_at(n: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_at: Some(n),
        }
    }

    /// Recorded calls in order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Consumes the recorder, returning its calls.
    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn record(&mut self, operation: &'static str, op: PaintOp) -> Result<(), PaintError> {
        if self.fail_at.is_some_and(|n| self.ops.len() >= n) {
            return Err(PaintError::Rejected {
                operation,
                reason: format!("recorder configured to fail after {} ops", self.ops.len()),
            });
        }
        self.ops.push(op);
        Ok(())
    }

    /// Renders the recorded calls as a standalone SVG document of
    /// `width` x `height` pixels.
    pub fn to_svg_document(&self, width: u32, height: u32) -> String {
        let mut defs = String::new();
        let mut body = String::new();
        for (i, op) in self.ops.iter().enumerate() {
            match op {
                PaintOp::Fill { path, brush } => {
                    let fill = svg_paint(&mut defs, i, brush);
                    body.push_str(&format!(
                        "  <path d=\"{}\" {fill} fill-rule=\"nonzero\"/>\n",
                        path.to_svg_data()
                    ));
                }
                PaintOp::FillClipped { rect, clip, brush } => {
                    let fill = svg_paint(&mut defs, i, brush);
                    defs.push_str(&format!(
                        "    <clipPath id=\"clip{i}\"><path d=\"{}\"/></clipPath>\n",
                        clip.to_svg_data()
                    ));
                    body.push_str(&format!(
                        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {fill} clip-path=\"url(#clip{i})\"/>\n",
                        rect.x.0, rect.y.0, rect.width.0, rect.height.0
                    ));
                }
                PaintOp::Stroke { path, pen } => {
                    body.push_str(&format!(
                        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>\n",
                        path.to_svg_data(),
                        pen.color.to_hex(),
                        pen.color.a,
                        pen.width
                    ));
                }
            }
        }

        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        if !defs.is_empty() {
            doc.push_str(&format!("  <defs>\n{defs}  </defs>\n"));
        }
        doc.push_str(&body);
        doc.push_str("</svg>\n");
        doc
    }
}

fn svg_paint(defs: &mut String, id: usize, brush: &Brush) -> String {
    match brush {
        Brush::Solid(solid) => format!(
            r#"fill="{}" fill-opacity="{}""#,
            solid.color.to_hex(),
            solid.color.a
        ),
        Brush::Linear(gradient) => {
            write_svg_gradient(defs, id, gradient);
            format!(r#"fill="url(#grad{id})""#)
        }
    }
}

fn write_svg_gradient(defs: &mut String, id: usize, gradient: &LinearGradient) {
    let r = gradient.rect;
    let (x1, y1) = (r.x.0, r.y.0);
    let (x2, y2) = match gradient.direction {
        GradientDirection::Vertical => (r.x.0, r.bottom().0),
        GradientDirection::Horizontal => (r.right().0, r.y.0),
    };
    defs.push_str(&format!(
        "    <linearGradient id=\"grad{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\">\n"
    ));
    for (offset, color) in gradient.stops() {
        defs.push_str(&format!(
            "      <stop offset=\"{offset}\" stop-color=\"{}\" stop-opacity=\"{}\"/>\n",
            color.to_hex(),
            color.a
        ));
    }
    defs.push_str("    </linearGradient>\n");
}

impl DrawingSurface for PaintRecorder {
    fn fill_path(&mut self, path: &TabPath, brush: &Brush) -> Result<(), PaintError> {
        self.record(
            "fill_path",
            PaintOp::Fill {
                path: path.clone(),
                brush: brush.clone(),
            },
        )
    }

    fn fill_clipped(
        &mut self,
        rect: PxRect,
        clip: &TabPath,
        brush: &Brush,
    ) -> Result<(), PaintError> {
        self.record(
            "fill_clipped",
            PaintOp::FillClipped {
                rect,
                clip: clip.clone(),
                brush: brush.clone(),
            },
        )
    }

    fn stroke_path(&mut self, path: &TabPath, pen: &Pen) -> Result<(), PaintError> {
        self.record(
            "stroke_path",
            PaintOp::Stroke {
                path: path.clone(),
                pen: *pen,
            },
        )
    }
}

/// Vertex produced by [`MeshSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    /// Position in pixels.
    pub position: [f32; 2],
    /// Linear RGBA color sampled from the brush at `position`.
    pub color: [f32; 4],
}

/// Surface that tessellates everything into one triangle list.
pub struct MeshSurface {
    buffers: VertexBuffers<MeshVertex, u32>,
    tolerance: f32,
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshSurface {
    /// Creates an empty mesh with the default flattening tolerance.
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Creates an empty mesh with a custom flattening tolerance.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            buffers: VertexBuffers::new(),
            tolerance,
        }
    }

    /// Emitted vertices.
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.buffers.vertices
    }

    /// Triangle list indices into [`Self::vertices`].
    pub fn indices(&self) -> &[u32] {
        &self.buffers.indices
    }

    /// Number of triangles emitted so far.
    pub fn triangle_count(&self) -> usize {
        self.buffers.indices.len() / 3
    }

    /// Sum of the areas of all emitted triangles.
    pub fn covered_area(&self) -> f32 {
        self.buffers
            .indices
            .chunks_exact(3)
            .map(|tri| {
                let [a, b, c] = [tri[0], tri[1], tri[2]]
                    .map(|i| self.buffers.vertices[i as usize].position);
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
            })
            .sum()
    }

    /// Consumes the surface, returning its buffers.
    pub fn into_buffers(self) -> VertexBuffers<MeshVertex, u32> {
        self.buffers
    }

    fn tessellate_fill(&mut self, path: &Path, brush: &Brush) -> Result<(), PaintError> {
        let options = FillOptions::default().with_tolerance(self.tolerance);
        FillTessellator::new().tessellate_path(
            path,
            &options,
            &mut BuffersBuilder::new(&mut self.buffers, |vertex: FillVertex| {
                let p = vertex.position();
                MeshVertex {
                    position: p.to_array(),
                    color: brush.color_at_point(p.x, p.y).to_array(),
                }
            }),
        )?;
        Ok(())
    }
}

impl DrawingSurface for MeshSurface {
    fn fill_path(&mut self, path: &TabPath, brush: &Brush) -> Result<(), PaintError> {
        self.tessellate_fill(&path.to_lyon_path(), brush)
    }

    fn fill_clipped(
        &mut self,
        rect: PxRect,
        clip: &TabPath,
        brush: &Brush,
    ) -> Result<(), PaintError> {
        let mut builder = Path::builder();
        for outline in clip.outlines(self.tolerance) {
            let clipped = clip_polygon_to_rect(&outline, rect);
            let Some((&first, rest)) = clipped.split_first() else {
                continue;
            };
            builder.begin(first);
            for &p in rest {
                builder.line_to(p);
            }
            builder.end(true);
        }
        self.tessellate_fill(&builder.build(), brush)
    }

    fn stroke_path(&mut self, path: &TabPath, pen: &Pen) -> Result<(), PaintError> {
        let options = StrokeOptions::default()
            .with_line_width(pen.width)
            .with_tolerance(self.tolerance);
        let color = pen.color.to_array();
        StrokeTessellator::new().tessellate_path(
            &path.to_lyon_path(),
            &options,
            &mut BuffersBuilder::new(&mut self.buffers, |vertex: StrokeVertex| MeshVertex {
                position: vertex.position().to_array(),
                color,
            }),
        )?;
        Ok(())
    }
}

/// Sutherland-Hodgman clip of a polygon against an axis-aligned rectangle.
/// A repeated closing point in `polygon` is ignored.
fn clip_polygon_to_rect(polygon: &[Point<f32>], rect: PxRect) -> Vec<Point<f32>> {
    let mut points: Vec<Point<f32>> = polygon.to_vec();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let (left, top) = (rect.left().to_f32(), rect.top().to_f32());
    let (right, bottom) = (rect.right().to_f32(), rect.bottom().to_f32());
    // Each edge: signed distance (inside when >= 0) and the crossing point.
    let edges: [(fn(Point<f32>, f32) -> f32, f32); 4] = [
        (|p, v| p.x - v, left),
        (|p, v| v - p.x, right),
        (|p, v| p.y - v, top),
        (|p, v| v - p.y, bottom),
    ];

    for (distance, value) in edges {
        if points.is_empty() {
            break;
        }
        let input = std::mem::take(&mut points);
        let mut prev = input[input.len() - 1];
        for &current in &input {
            let (d_prev, d_cur) = (distance(prev, value), distance(current, value));
            if d_cur >= 0.0 {
                if d_prev < 0.0 {
                    points.push(prev.lerp(current, d_prev / (d_prev - d_cur)));
                }
                points.push(current);
            } else if d_prev >= 0.0 {
                points.push(prev.lerp(current, d_prev / (d_prev - d_cur)));
            }
            prev = current;
        }
    }
    points
}
