use super::Locale;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Language of the source page and of the rendered tables
    #[arg(long, value_enum, default_value = "en")]
    pub lang: Locale,

    /// Fetch standings from this URL instead of the locale's default page
    #[arg(long, env = "MEDALBOARD_URL")]
    pub url: Option<String>,

    /// Read the standings page from a local HTML file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// JSON file overriding the CSS selectors used to find medal rows
    #[arg(long)]
    pub selectors_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Reload the standings every SECS seconds instead of exiting
    #[arg(long, value_name = "SECS")]
    pub refresh: Option<u64>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
