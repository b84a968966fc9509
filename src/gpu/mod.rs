//! GPU rendering via wgpu.
//!
//! Offscreen pipeline: tessellated scene quads are alpha-blended over a
//! black clear into an RGBA8 texture, then read back as raw pixels for
//! export or inspection.

mod context;
mod renderer;

pub use context::{GpuContext, GpuError};
pub use renderer::{RenderConfig, SceneRenderer};
