//! Breath Visualizer Core
//!
//! GPU-accelerated generative animation library: eight concentric rings of
//! points breathe around a shared oscillator, jittered by coherent noise
//! and rendered as alpha-blended white geometry over black.
//!
//! # Features
//!
//! - Deterministic per-frame geometry: a pure function of the frame
//!   counter, canvas size and an injected noise field
//! - Perlin/fBm noise (4 octaves, persistence 0.5) seeded via `rand`
//! - Offscreen GPU rendering via wgpu (Metal on macOS, Vulkan on Linux)
//! - PNG frame-sequence export via the `image` crate

pub mod gpu;
pub mod noise;
pub mod pipeline;
pub mod scene;

// Re-export commonly used types
pub use gpu::{GpuContext, GpuError, RenderConfig, SceneRenderer};
pub use noise::{NoiseField, PerlinField};
pub use pipeline::{render_frames, PipelineConfig, PipelineError};
pub use scene::{
    compose, max_vertex_count, rotation_angle, tessellate, Animation, Breath, FrameGeometry,
    FrameState, FrameTransform, Primitive, RingSpec, Vertex, RINGS,
};
