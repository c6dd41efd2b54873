use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "rust-timetable")]
#[command(about = "Lay out a weekly course timetable and resolve taps on it", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the computed layout as JSON
    Layout {
        #[command(flatten)]
        input: LayoutInput,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Simulate a tap (or long press) at a surface coordinate
    Select {
        #[command(flatten)]
        input: LayoutInput,

        #[arg(long, allow_negative_numbers = true)]
        x: f32,

        #[arg(long, allow_negative_numbers = true)]
        y: f32,

        /// Long press instead of tap
        #[arg(long)]
        long: bool,
    },

    /// Write the default layout config
    InitConfig {
        /// Target file; defaults to the platform config directory
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
pub struct LayoutInput {
    /// JSON course list
    #[arg(long)]
    pub events: PathBuf,

    /// TOML layout config; defaults to the platform config file if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Surface width in points
    #[arg(long, default_value_t = 375.0)]
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
