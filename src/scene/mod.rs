//! Breathing-ring scene.
//!
//! Eight concentric point rings expand and contract around a shared
//! breathing oscillator, with coherent-noise jitter layered per ring and
//! per point. Everything here is CPU-side and deterministic: a frame is a
//! pure function of the frame counter, the canvas size and the injected
//! noise field.
//!
//! - [`breath`]: the global oscillator and frame rotation
//! - [`rings`]: the fixed ring table and per-ring/per-point math
//! - [`composer`]: assembles the draw primitives for one frame
//! - [`tessellate`]: turns primitives into GPU vertices

mod breath;
mod composer;
mod rings;
mod tessellate;

pub use breath::{rotation_angle, Breath};
pub use composer::{compose, Animation, FrameGeometry, FrameTransform, Primitive};
pub use rings::{RingSpec, GLOW_LAYERS, RINGS, SPOKE_COUNT};
pub use tessellate::{max_vertex_count, tessellate};

/// Vertex data for rendering.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub local_pos: [f32; 2],
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// 0 = flat quad, 1 = round mask applied in the fragment shader.
    pub shape: f32,
}

/// Shape flag for stroke and segment quads.
pub const SHAPE_FLAT: f32 = 0.0;
/// Shape flag for dots and glow discs.
pub const SHAPE_ROUND: f32 = 1.0;

/// Mutable per-process animation state.
///
/// The counter advances by exactly 1 per composed frame and is the sole
/// driver of all motion. Canvas dimensions change only through resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameState {
    t: u64,
    width: u32,
    height: u32,
}

impl FrameState {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { t: 0, width, height }
    }

    /// Current frame counter.
    pub fn t(&self) -> u64 {
        self.t
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Smaller canvas dimension, the base scale for all radii.
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height) as f32
    }

    /// Update canvas dimensions; takes effect on the next composed frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        debug_assert!(width > 0 && height > 0);
        self.width = width;
        self.height = height;
    }

    /// Step the frame counter. `u64` makes wraparound unreachable in
    /// practice (584 million years at 1000 fps).
    pub fn advance(&mut self) {
        self.t += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_state_starts_at_zero() {
        let state = FrameState::new(800, 600);
        assert_eq!(state.t(), 0);
    }

    #[test]
    fn test_advance_steps_by_one() {
        let mut state = FrameState::new(800, 600);
        for expected in 1..=100u64 {
            state.advance();
            assert_eq!(state.t(), expected);
        }
    }

    #[test]
    fn test_min_dim_follows_resize() {
        let mut state = FrameState::new(800, 600);
        assert_eq!(state.min_dim(), 600.0);
        state.resize(400, 400);
        assert_eq!(state.min_dim(), 400.0);
        assert_eq!((state.width(), state.height()), (400, 400));
    }

    #[test]
    fn test_resize_preserves_counter() {
        let mut state = FrameState::new(800, 600);
        state.advance();
        state.advance();
        state.resize(1024, 768);
        assert_eq!(state.t(), 2);
    }

    #[test]
    fn test_vertex_memory_layout() {
        // position + local_pos + alpha + shape, tightly packed for the GPU.
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
