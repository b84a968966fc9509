//! Example: Render the breathing-ring animation to a PNG frame sequence.
//!
//! Run with:
//!     cargo run --example render_frames --features tokio

use anyhow::Context;
use breath_visualizer::{render_frames, PipelineConfig};
use std::sync::atomic::{AtomicU32, Ordering};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Breath Visualizer - Frame Export Example");
    println!("========================================\n");

    let config = PipelineConfig {
        width: 640,
        height: 360,
        fps: 30,
        frame_count: 300,
        seed: 7,
        intensity: 1.0,
    };

    println!("Rendering configuration:");
    println!("  Resolution: {}x{}", config.width, config.height);
    println!("  FPS: {}", config.fps);
    println!("  Frames: {}", config.frame_count);
    println!("  Noise seed: {}\n", config.seed);

    let output_dir = "breath_frames";
    println!("Writing frames to: {}/", output_dir);

    let fps = config.fps;
    let frame_count = config.frame_count;
    let last_decile = AtomicU32::new(0);
    render_frames(
        output_dir,
        config,
        Some(Box::new(move |progress| {
            let decile = (progress * 10.0) as u32;
            if decile > last_decile.swap(decile, Ordering::Relaxed) {
                println!("  Progress: {}%", decile * 10);
            }
        })),
    )
    .await
    .context("frame rendering failed")?;

    println!("\nDone! {} frames in {}/", frame_count, output_dir);
    println!(
        "Preview with: ffplay -framerate {} -i {}/frame_%05d.png",
        fps, output_dir
    );

    Ok(())
}
