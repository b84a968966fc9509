//! Shared test fixtures for scene tests.

use breath_visualizer::{FrameGeometry, NoiseField, Primitive};

/// A noise field pinned to one value. `ConstNoise(0.5)` makes every
/// `(noise - 0.5)` jitter term vanish.
pub struct ConstNoise(pub f64);

impl NoiseField for ConstNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

/// A smooth, deterministic, non-constant field for tests that need
/// variation without a seeded Perlin table.
pub struct WaveNoise;

impl NoiseField for WaveNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        0.5 + 0.25 * (x * 0.17).sin() + 0.25 * (y * 1.3).cos()
    }
}

/// Collect `(center, diameter, alpha)` for every dot in draw order.
pub fn dots(frame: &FrameGeometry) -> Vec<([f32; 2], f32, f32)> {
    frame
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Dot {
                center,
                diameter,
                alpha,
            } => Some((*center, *diameter, *alpha)),
            _ => None,
        })
        .collect()
}

/// Collect `(points, alpha, width)` for every closed outline in draw order.
pub fn polylines(frame: &FrameGeometry) -> Vec<(&Vec<[f32; 2]>, f32, f32)> {
    frame
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Polyline {
                points,
                alpha,
                width,
            } => Some((points, *alpha, *width)),
            _ => None,
        })
        .collect()
}

/// Collect every straight segment in draw order.
pub fn segments(frame: &FrameGeometry) -> Vec<([f32; 2], [f32; 2], f32, f32)> {
    frame
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Segment {
                from,
                to,
                alpha,
                width,
            } => Some((*from, *to, *alpha, *width)),
            _ => None,
        })
        .collect()
}

/// Largest distance from `center` among a set of points.
pub fn max_distance_from(center: [f32; 2], points: &[[f32; 2]]) -> f32 {
    points
        .iter()
        .map(|p| ((p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2)).sqrt())
        .fold(0.0f32, f32::max)
}
