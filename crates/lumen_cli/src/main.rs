use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use lumen_renderer::{render, FrameBuffer, RenderConfig};
use std::path::Path;

mod cli;
mod reference_scene;

use cli::Args;
use reference_scene::ReferenceScene;

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::from(args.log_level))
        .init();

    log::info!("Starting lumen");

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.lighting_mode = mode.into();
    }
    if args.shadows {
        config.shadows_enabled = true;
    }
    log::info!(
        "Lighting mode: {}, shadows {}",
        config.lighting_mode,
        if config.shadows_enabled { "on" } else { "off" }
    );

    let mut reference = ReferenceScene::new().context("Failed to build the reference scene")?;
    let mut frame = FrameBuffer::new(args.width, args.height);
    let frame_time = 1.0 / args.fps.max(f32::EPSILON);

    for index in 0..args.frames {
        // Scene updates complete before the frame is rendered
        reference.update(index as f32 * frame_time);

        let stats = render(&reference.scene, &reference.camera, &config, &mut frame)
            .with_context(|| format!("Failed to render frame {index}"))?;
        log::info!(
            "Frame {}: {} pixels, {:.1}% hit, {:.2?}",
            index,
            stats.pixels,
            stats.hit_ratio() * 100.0,
            stats.elapsed
        );

        let path = args.output.join(format!("frame_{index:03}.png"));
        frame
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    log::info!("Rendered {} frame(s) to {}", args.frames, args.output.display());
    Ok(())
}
