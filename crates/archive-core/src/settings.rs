use clap::Parser;
use std::path::PathBuf;

/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "tweets.xlsx";

const AFTER_HELP: &str = "\
Examples:
  x-archive ./twitter-archive/data/js/tweets/
  x-archive ./tweets.js my-tweets.xlsx
  x-archive ./twitter-archive/ export.xlsx

The tool will automatically find all tweets*.js files in the specified directory.";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// X Archive Parser - Convert X/Twitter archive to Excel
#[derive(Parser, Debug, Clone)]
#[command(
    name = "x-archive",
    about = "X Archive Parser - Convert X/Twitter archive to Excel",
    after_help = AFTER_HELP,
    arg_required_else_help = true,
    version
)]
pub struct Settings {
    /// Path to X archive directory or tweets.js file
    pub archive_path: PathBuf,

    /// Output Excel file path
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Timezone for the Date and Time columns (auto-detected if not specified)
    #[arg(long, env = "X_ARCHIVE_TIMEZONE", default_value = "auto")]
    pub timezone: String,

    /// Time format for the Time column
    #[arg(long, env = "X_ARCHIVE_TIME_FORMAT", default_value = "auto", value_parser = ["12h", "24h", "auto"])]
    pub time_format: String,

    /// Logging level
    #[arg(long, env = "X_ARCHIVE_LOG_LEVEL", default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// The log level to install, with `--debug` taking precedence.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
