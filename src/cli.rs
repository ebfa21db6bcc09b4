//! Command-line interface definition.
//!
//! Lives in the library so the xtask can build the man page from it.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::scheduler::SchedulerKind;
use crate::sync::{parse_rate, SyncOptions};

/// Version string with the build date, plus the git hash on dev builds.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let base = env!("CARGO_PKG_VERSION");
        let date = env!("READALONG_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if !sha.is_empty() && sha != "unknown" => {
                let short = sha.get(..7).unwrap_or(sha);
                format!("{base} ({short} {date})")
            }
            _ => format!("{base} ({date})"),
        }
    })
}

#[derive(Debug, Parser)]
#[command(name = "readalong", version = version(), about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by READALONG_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a transcript in the terminal with live highlighting
    Play(PlayArgs),

    /// Show which time slot each segment occupies
    Segments(SegmentsArgs),

    /// Replay playback positions and print the resulting events as JSON lines
    Simulate(SimulateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Synchronizer options that override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Playback rate (must be greater than 0)
    #[arg(long, value_parser = rate_arg)]
    pub rate: Option<f64>,

    /// Start of the playable window in seconds
    #[arg(long, value_name = "SECS")]
    pub clip_begin: Option<f64>,

    /// End of the playable window in seconds (default: media duration)
    #[arg(long, value_name = "SECS")]
    pub clip_end: Option<f64>,

    /// Stop at the end of the segment playback started in
    #[arg(long)]
    pub stop_after_current: bool,

    /// Do not seek when a segment is activated
    #[arg(long)]
    pub no_touch: bool,

    /// Segment attribute holding the start time
    #[arg(long, value_name = "NAME")]
    pub time_attribute: Option<String>,
}

impl SyncArgs {
    /// Apply flags that were given on top of `options`.
    pub fn apply(&self, mut options: SyncOptions) -> SyncOptions {
        if let Some(rate) = self.rate {
            options.playback_rate = rate;
        }
        if let Some(begin) = self.clip_begin {
            options.clip_begin = begin;
        }
        if let Some(end) = self.clip_end {
            options.clip_end = Some(end);
        }
        if self.stop_after_current {
            options.stop_after_current = true;
        }
        if self.no_touch {
            options.touch_to_seek = false;
        }
        if let Some(attr) = &self.time_attribute {
            options.time_attribute = attr.clone();
        }
        options
    }
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Transcript file (JSON)
    pub file: PathBuf,

    #[command(flatten)]
    pub sync: SyncArgs,

    /// Media duration in seconds (default: from the file, else last segment + 2s)
    #[arg(long, value_name = "SECS")]
    pub duration: Option<f64>,

    /// How playback time is polled
    #[arg(long, value_enum)]
    pub scheduler: Option<SchedulerKind>,

    /// Polling interval in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Args)]
pub struct SegmentsArgs {
    /// Transcript file (JSON)
    pub file: PathBuf,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Segment attribute holding the start time
    #[arg(long, value_name = "NAME")]
    pub time_attribute: Option<String>,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Transcript file (JSON)
    pub file: PathBuf,

    /// Comma-separated playback positions in seconds
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub positions: Vec<f64>,

    /// Seek here before replaying positions (otherwise play from clip begin)
    #[arg(long, value_name = "SECS")]
    pub seek: Option<f64>,

    /// Media duration in seconds (default: from the file)
    #[arg(long, value_name = "SECS")]
    pub duration: Option<f64>,

    #[command(flatten)]
    pub sync: SyncArgs,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn rate_arg(raw: &str) -> Result<f64, String> {
    parse_rate(raw).map_err(|e| e.to_string())
}
