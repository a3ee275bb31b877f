use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_math::ColorRgb;
use prism_renderer::{RenderConfig, DEFAULT_BUCKET_SIZE};

/// Log levels selectable from the command line
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

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "A recursive Whitted-style ray tracer")]
pub struct Args {
    /// Scene file (JSON). Renders the built-in demo scene when omitted
    pub scene: Option<PathBuf>,

    /// Output file path (.png or .ppm)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    pub fov: f64,

    /// Maximum number of reflection bounces
    #[arg(short, long, default_value_t = 3)]
    pub bounces: u32,

    /// Offset for shadow and reflection ray origins
    #[arg(long, default_value_t = 1e-4)]
    pub epsilon: f64,

    /// Background color as #RRGGBB (linear); defaults to near-black
    #[arg(long)]
    pub background: Option<ColorRgb>,

    /// Bucket edge length in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Render settings from the command line; validated by `Renderer::new`.
    pub fn render_config(&self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            width: self.width,
            height: self.height,
            field_of_view: self.fov,
            max_bounces: self.bounces,
            background: self.background.unwrap_or(defaults.background),
            epsilon: self.epsilon,
            bucket_size: self.bucket_size,
            tone_map: defaults.tone_map,
        }
    }
}
