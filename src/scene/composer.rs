//! Per-frame primitive composition.

use super::breath::{rotation_angle, Breath};
use super::rings::{
    dot_alpha, dot_diameter, line_alpha, point_polar, ring_radius, GLOW_LAYERS, RINGS, SPOKE_COUNT,
};
use super::FrameState;
use crate::noise::{NoiseField, PerlinField};
use std::f64::consts::TAU;

/// Ring outline stroke width in pixels.
const LINE_WIDTH: f32 = 0.5;
/// Spoke styling, barely above the background.
const SPOKE_ALPHA: f64 = 8.0;
const SPOKE_WIDTH: f32 = 0.4;
/// Center glow radius as fraction of the min dimension, plus its coupling
/// to the master breath.
const GLOW_BASE: f64 = 0.016;
const GLOW_BREATH_GAIN: f64 = 0.004;
/// Alpha per glow layer.
const GLOW_LAYER_ALPHA: f64 = 5.0;
/// Center dot pulse.
const CENTER_BASE_DIAMETER: f64 = 3.5;
const CENTER_DIAMETER_SWING: f64 = 0.9;
const CENTER_DIAMETER_PHASE: f64 = 1.6;
const CENTER_BASE_ALPHA: f64 = 200.0;
const CENTER_ALPHA_SWING: f64 = 35.0;
const CENTER_ALPHA_PHASE: f64 = 1.1;

/// One draw call. Alphas are in the 0–255 domain; positions are absolute
/// canvas pixels, y growing downward.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Closed white outline through the ring points.
    Polyline {
        points: Vec<[f32; 2]>,
        alpha: f32,
        width: f32,
    },
    /// Filled white disc.
    Dot {
        center: [f32; 2],
        diameter: f32,
        alpha: f32,
    },
    /// Straight white line.
    Segment {
        from: [f32; 2],
        to: [f32; 2],
        alpha: f32,
        width: f32,
    },
}

/// Everything needed to draw one frame, in draw order, over a black clear.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub primitives: Vec<Primitive>,
}

/// The frame's affine placement: rotation about the canvas center followed
/// by translation to it. Computed once per frame and applied to every
/// point, which keeps the geometry math free of stateful transform stacks.
#[derive(Debug, Clone, Copy)]
pub struct FrameTransform {
    cos_a: f64,
    sin_a: f64,
    center_x: f64,
    center_y: f64,
}

impl FrameTransform {
    pub fn new(state: &FrameState) -> Self {
        let angle = rotation_angle(state.t());
        Self {
            cos_a: angle.cos(),
            sin_a: angle.sin(),
            center_x: state.width() as f64 * 0.5,
            center_y: state.height() as f64 * 0.5,
        }
    }

    /// The rotation currently applied, in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.sin_a.atan2(self.cos_a).rem_euclid(TAU)
    }

    /// Map a center-relative point into absolute canvas coordinates.
    pub fn to_canvas(&self, x: f64, y: f64) -> [f32; 2] {
        let rx = x * self.cos_a - y * self.sin_a;
        let ry = x * self.sin_a + y * self.cos_a;
        [(rx + self.center_x) as f32, (ry + self.center_y) as f32]
    }
}

/// Compose the draw primitives for the frame `state` describes.
///
/// Pure: identical `(state, noise)` always yield an identical frame. The
/// caller advances the counter afterwards (see [`Animation::frame`]).
pub fn compose(state: &FrameState, noise: &dyn NoiseField) -> FrameGeometry {
    let t = state.t();
    let min_dim = state.min_dim();
    let breath = Breath::at(t, noise);
    let transform = FrameTransform::new(state);

    let dot_count: usize = RINGS.iter().map(|s| s.point_count as usize).sum();
    let mut primitives =
        Vec::with_capacity(RINGS.len() + dot_count + SPOKE_COUNT as usize + GLOW_LAYERS as usize + 1);

    for (ri, spec) in RINGS.iter().enumerate() {
        let radius = ring_radius(ri, t, min_dim, &breath, noise);

        let points: Vec<[f32; 2]> = (0..spec.point_count)
            .map(|i| {
                let (r, a) = point_polar(ri, i, radius, t, noise);
                transform.to_canvas(a.cos() * r, a.sin() * r)
            })
            .collect();

        primitives.push(Primitive::Polyline {
            points: points.clone(),
            alpha: line_alpha(ri) as f32,
            width: LINE_WIDTH,
        });

        for (i, &center) in points.iter().enumerate() {
            primitives.push(Primitive::Dot {
                center,
                diameter: dot_diameter(ri, i as u32, t, noise) as f32,
                alpha: dot_alpha(ri, i as u32, t, noise) as f32,
            });
        }
    }

    let origin = transform.to_canvas(0.0, 0.0);

    let outer_r =
        RINGS[RINGS.len() - 1].base_radius as f64 * min_dim as f64 * breath.factor;
    for i in 0..SPOKE_COUNT {
        let a = TAU * i as f64 / SPOKE_COUNT as f64;
        primitives.push(Primitive::Segment {
            from: origin,
            to: transform.to_canvas(a.cos() * outer_r, a.sin() * outer_r),
            alpha: SPOKE_ALPHA as f32,
            width: SPOKE_WIDTH,
        });
    }

    let glow_r = (GLOW_BASE + breath.master * GLOW_BREATH_GAIN) * min_dim as f64;
    for layer in (1..=GLOW_LAYERS).rev() {
        primitives.push(Primitive::Dot {
            center: origin,
            diameter: (2.0 * glow_r * layer as f64 / GLOW_LAYERS as f64) as f32,
            alpha: (layer as f64 * GLOW_LAYER_ALPHA) as f32,
        });
    }

    primitives.push(Primitive::Dot {
        center: origin,
        diameter: (CENTER_BASE_DIAMETER
            + (breath.phase * CENTER_DIAMETER_PHASE).sin() * CENTER_DIAMETER_SWING)
            as f32,
        alpha: (CENTER_BASE_ALPHA + (breath.phase * CENTER_ALPHA_PHASE).sin() * CENTER_ALPHA_SWING)
            as f32,
    });

    FrameGeometry {
        width: state.width(),
        height: state.height(),
        primitives,
    }
}

/// The animation: frame state plus the injected noise field.
///
/// Lifecycle is `new` → (`resize`)* → `frame` → `frame` → … until the
/// process ends; `frame` is the only thing that advances the counter.
pub struct Animation {
    state: FrameState,
    noise: Box<dyn NoiseField>,
}

impl Animation {
    pub fn new(width: u32, height: u32, noise: Box<dyn NoiseField>) -> Self {
        Self {
            state: FrameState::new(width, height),
            noise,
        }
    }

    /// Production setup: a Perlin field derived from `seed`.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::new(width, height, Box::new(PerlinField::new(seed)))
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// Host resize hook; the next composed frame picks up the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);
    }

    /// Compose the current frame and advance the counter by one.
    pub fn frame(&mut self) -> FrameGeometry {
        let geometry = compose(&self.state, self.noise.as_ref());
        self.state.advance();
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(f64);

    impl NoiseField for Flat {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    fn dots(frame: &FrameGeometry) -> Vec<(&[f32; 2], f32, f32)> {
        frame
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Dot {
                    center,
                    diameter,
                    alpha,
                } => Some((center, *diameter, *alpha)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_primitive_counts() {
        let frame = compose(&FrameState::new(800, 600), &Flat(0.5));
        let polylines = frame
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { .. }))
            .count();
        let segments = frame
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Segment { .. }))
            .count();
        let point_total: usize = RINGS.iter().map(|s| s.point_count as usize).sum();
        assert_eq!(polylines, RINGS.len());
        assert_eq!(segments, SPOKE_COUNT as usize);
        // ring dots + glow layers + center dot
        assert_eq!(dots(&frame).len(), point_total + GLOW_LAYERS as usize + 1);
    }

    #[test]
    fn test_compose_is_pure() {
        let state = FrameState::new(640, 480);
        let noise = Flat(0.31);
        assert_eq!(compose(&state, &noise), compose(&state, &noise));
    }

    #[test]
    fn test_frame_advances_counter_and_changes_output() {
        let mut animation = Animation::new(640, 480, Box::new(Flat(0.5)));
        let first = animation.frame();
        assert_eq!(animation.state().t(), 1);
        let second = animation.frame();
        assert_eq!(animation.state().t(), 2);
        // Breathing moves every radius between consecutive frames.
        assert_ne!(first, second);
    }

    #[test]
    fn test_dot_invariants_under_extreme_noise() {
        for field in [Flat(0.0), Flat(1.0)] {
            let frame = compose(&FrameState::new(800, 600), &field);
            for (_, diameter, alpha) in dots(&frame) {
                assert!(diameter >= 0.5);
                assert!((0.0..=255.0).contains(&alpha));
            }
        }
    }

    #[test]
    fn test_rotation_angle_zero_at_start() {
        let transform = FrameTransform::new(&FrameState::new(400, 400));
        assert_eq!(transform.angle(), 0.0);
    }

    #[test]
    fn test_glow_and_center_sit_at_canvas_center() {
        let frame = compose(&FrameState::new(800, 600), &Flat(0.5));
        let all = dots(&frame);
        // Last six dots are the five glow layers and the center pulse.
        for (center, _, _) in &all[all.len() - 6..] {
            assert!((center[0] - 400.0).abs() < 1e-3);
            assert!((center[1] - 300.0).abs() < 1e-3);
        }
    }
}
