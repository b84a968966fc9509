//! Tessellation of frame primitives into alpha-blended triangle quads.

use super::composer::{FrameGeometry, Primitive};
use super::rings::{GLOW_LAYERS, RINGS, SPOKE_COUNT};
use super::{Vertex, SHAPE_FLAT, SHAPE_ROUND};

const ALPHA_SCALE: f32 = 1.0 / 255.0;
/// Edges shorter than this produce no quad (their normal is undefined).
const MIN_EDGE_LENGTH: f32 = 1e-6;

/// Canvas-to-NDC mapping plus quad emission.
struct CanvasContext {
    width: f32,
    height: f32,
}

impl CanvasContext {
    fn new(frame: &FrameGeometry) -> Self {
        Self {
            width: frame.width as f32,
            height: frame.height as f32,
        }
    }

    #[inline]
    fn to_ndc(&self, x: f32, y: f32) -> [f32; 2] {
        [(x / self.width) * 2.0 - 1.0, 1.0 - (y / self.height) * 2.0]
    }

    /// Two triangles over four canvas-space corners (tl, tr, bl, br).
    fn push_quad(
        &self,
        vertices: &mut Vec<Vertex>,
        corners: [[f32; 2]; 4],
        alpha: f32,
        shape: f32,
    ) {
        let local = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];
        let indices = [0usize, 2, 1, 1, 2, 3];
        for &idx in &indices {
            vertices.push(Vertex {
                position: self.to_ndc(corners[idx][0], corners[idx][1]),
                local_pos: local[idx],
                alpha: alpha * ALPHA_SCALE,
                shape,
            });
        }
    }

    /// Axis-aligned quad around a disc; the fragment shader rounds it off.
    fn push_disc(&self, vertices: &mut Vec<Vertex>, center: [f32; 2], diameter: f32, alpha: f32) {
        let half = diameter * 0.5;
        let [cx, cy] = center;
        self.push_quad(
            vertices,
            [
                [cx - half, cy - half],
                [cx + half, cy - half],
                [cx - half, cy + half],
                [cx + half, cy + half],
            ],
            alpha,
            SHAPE_ROUND,
        );
    }

    /// Quad along a stroke segment, expanded by half the stroke width on
    /// each side.
    fn push_stroke(
        &self,
        vertices: &mut Vec<Vertex>,
        from: [f32; 2],
        to: [f32; 2],
        width: f32,
        alpha: f32,
    ) {
        let dx = to[0] - from[0];
        let dy = to[1] - from[1];
        let len = (dx * dx + dy * dy).sqrt();
        if len < MIN_EDGE_LENGTH {
            return;
        }
        let half = width * 0.5;
        let nx = -dy / len * half;
        let ny = dx / len * half;
        self.push_quad(
            vertices,
            [
                [from[0] + nx, from[1] + ny],
                [to[0] + nx, to[1] + ny],
                [from[0] - nx, from[1] - ny],
                [to[0] - nx, to[1] - ny],
            ],
            alpha,
            SHAPE_FLAT,
        );
    }
}

/// Flatten a frame into triangles, preserving draw order for correct alpha
/// compositing.
pub fn tessellate(frame: &FrameGeometry) -> Vec<Vertex> {
    let ctx = CanvasContext::new(frame);
    let mut vertices = Vec::with_capacity(max_vertex_count());

    for primitive in &frame.primitives {
        match primitive {
            Primitive::Polyline {
                points,
                alpha,
                width,
            } => {
                for (i, &from) in points.iter().enumerate() {
                    let to = points[(i + 1) % points.len()];
                    ctx.push_stroke(&mut vertices, from, to, *width, *alpha);
                }
            }
            Primitive::Dot {
                center,
                diameter,
                alpha,
            } => ctx.push_disc(&mut vertices, *center, *diameter, *alpha),
            Primitive::Segment {
                from,
                to,
                alpha,
                width,
            } => ctx.push_stroke(&mut vertices, *from, *to, *width, *alpha),
        }
    }

    vertices
}

/// Upper bound on vertices a composed frame can tessellate into; sizes the
/// GPU vertex buffer once at renderer construction.
pub fn max_vertex_count() -> usize {
    let points: usize = RINGS.iter().map(|s| s.point_count as usize).sum();
    // closed outline edges + dots + spokes + glow discs + center dot,
    // six vertices per quad
    (points + points + SPOKE_COUNT as usize + GLOW_LAYERS as usize + 1) * 6
}
