use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DecodePolicy;

/// iconsync: keep an asset catalog's currency icons in step with the upstream icon set
#[derive(Parser)]
#[command(name = "iconsync")]
#[command(version)]
#[command(about = "Synchronizes currency icons into an asset catalog")]
#[command(
    long_about = "iconsync downloads the upstream cryptocurrency icon archive, finds currencies missing from the local asset catalog, and writes 1x/2x/3x image sets for them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Behaviour when a source icon cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecodeErrorArg {
    Abort,
    Skip,
}

impl From<DecodeErrorArg> for DecodePolicy {
    fn from(arg: DecodeErrorArg) -> Self {
        match arg {
            DecodeErrorArg::Abort => DecodePolicy::Abort,
            DecodeErrorArg::Skip => DecodePolicy::Skip,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add image sets for currencies missing from the catalog
    Icons {
        /// Configuration file (defaults to the platform config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Asset catalog directory containing the .imageset bundles
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Scratch directory for download and extraction
        #[arg(long)]
        staging_dir: Option<PathBuf>,

        /// Icon archive URL
        #[arg(long, conflicts_with = "archive")]
        url: Option<String>,

        /// Use an already downloaded icon archive instead of fetching it
        #[arg(long)]
        archive: Option<PathBuf>,

        /// What to do with icons that fail to decode. `abort` stops icons not yet
        /// started; bundles already written stay in the catalog
        #[arg(long, value_enum)]
        on_decode_error: Option<DecodeErrorArg>,

        /// Rendering workers (0 = one per CPU, 1 = sequential)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Dry run - list new currencies without writing them
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Print localized currency titles from the market listing
    Names {
        /// Configuration file (defaults to the platform config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Listing endpoint URL
        #[arg(long)]
        url: Option<String>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Icons { .. } => "icons",
            Commands::Names { .. } => "names",
        }
    }

    /// Check if this command modifies files
    pub fn modifies_files(&self) -> bool {
        matches!(self, Commands::Icons { dry_run: false, .. })
    }
}
