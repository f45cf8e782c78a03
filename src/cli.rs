use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, DATASET_URL, DEFAULT_DATABASE, DEFAULT_LOG_FILE, DEFAULT_OUTPUT};

// Every flag is optional; a bare invocation runs the full pipeline with the defaults.
#[derive(Parser, Debug)]
#[command(name = "cities-to-sqlite")]
#[command(
    version,
    about = "Load the world cities dataset into SQLite and export countries without a megapolis"
)]
pub struct Cli {
    /// Dataset URL (semicolon-delimited CSV)
    #[arg(long, default_value = DATASET_URL)]
    pub url: String,

    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Output TSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log file (appended to)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// HTTP timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            url: self.url,
            database: self.database,
            output: self.output,
            log_file: self.log_file,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
