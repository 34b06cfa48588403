use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::LightingMode;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Lighting term to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<Mode> for LightingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::ObservedArea => LightingMode::ObservedArea,
            Mode::Radiance => LightingMode::Radiance,
            Mode::Brdf => LightingMode::Brdf,
            Mode::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "CPU ray tracer: renders the reference scene to PNG frames")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Number of frames to render
    #[arg(short, long, default_value = "1")]
    pub frames: u32,

    /// Simulated frame rate driving the mesh animation
    #[arg(long, default_value = "24")]
    pub fps: f32,

    /// Lighting mode, overriding the config file
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Enable shadow rays, overriding the config file
    #[arg(short, long)]
    pub shadows: bool,

    /// JSON render configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the frame_NNN.png files
    #[arg(short, long, default_value = "renders")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}
