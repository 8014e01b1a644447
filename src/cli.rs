use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use raycast::RenderMode;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "raycast")]
#[command(about = "Ray cast spheres with ambient, diffuse, specular and shadow lighting")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "800", value_parser = clap::value_parser!(u32).range(1..), help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "600", value_parser = clap::value_parser!(u32).range(1..), help = "Image height in pixels")]
    pub height: u32,

    /// Lighting terms to evaluate
    #[arg(short, long, value_enum, default_value = "shadows", help = "Lighting terms to evaluate")]
    pub mode: RenderMode,

    /// TOML scene file (built-in demo scene when omitted)
    #[arg(short, long, help = "TOML scene file (built-in demo scene when omitted)")]
    pub scene: Option<PathBuf>,

    /// Number of frames to render
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..), help = "Number of frames to render")]
    pub frames: u32,

    /// Advance the scene animation before every frame (implied by --frames > 1)
    #[arg(long, help = "Advance the scene animation before every frame (implied by --frames > 1)")]
    pub animate: bool,

    /// Output PNG path; animations get a frame number appended
    #[arg(short, long, default_value = "output.png", help = "Output PNG path; animations get a frame number appended")]
    pub output: PathBuf,

    /// Run benchmark comparing the render modes
    #[arg(long, help = "Run benchmark comparing the render modes (no images written)")]
    pub bench: bool,
}
