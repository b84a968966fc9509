//! Offline frame pipeline: animation state, GPU rendering and PNG export.

use crate::gpu::{GpuError, RenderConfig, SceneRenderer};
use crate::noise::PerlinField;
use crate::scene::{tessellate, Animation};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration for rendering the animation to a frame sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub frame_count: u32,
    /// Seed for the production noise field.
    pub seed: u64,
    /// Global brightness multiplier.
    pub intensity: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30,
            frame_count: 900,
            seed: 0,
            intensity: 1.0,
        }
    }
}

impl PipelineConfig {
    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            intensity: self.intensity,
        }
    }

    /// Parse a JSON preset; absent fields fall back to defaults.
    pub fn from_preset(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON preset file.
    pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_preset(&text)
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),
}

/// Render `config.frame_count` frames into `output_dir` as
/// `frame_00000.png`, `frame_00001.png`, …
pub async fn render_frames<P: AsRef<Path>>(
    output_dir: P,
    config: PipelineConfig,
    progress_callback: Option<Box<dyn Fn(f32) + Send>>,
) -> Result<(), PipelineError> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    let mut animation = Animation::new(
        config.width,
        config.height,
        Box::new(PerlinField::new(config.seed)),
    );

    let renderer = SceneRenderer::new(config.to_render_config()).await?;
    log::info!(
        "Rendering {} frames at {}x{} on {}",
        config.frame_count,
        config.width,
        config.height,
        renderer.adapter_info().name
    );

    for frame_idx in 0..config.frame_count {
        let geometry = animation.frame();
        let vertices = tessellate(&geometry);
        let pixels = renderer.render_frame(&vertices);

        let path = output_dir.join(format!("frame_{:05}.png", frame_idx));
        image::save_buffer(
            &path,
            &pixels,
            config.width,
            config.height,
            image::ExtendedColorType::Rgba8,
        )?;

        if let Some(ref callback) = progress_callback {
            callback((frame_idx + 1) as f32 / config.frame_count as f32);
        }
    }

    log::info!(
        "Wrote {} frames to {}",
        config.frame_count,
        output_dir.display()
    );

    Ok(())
}
