pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod export;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod query;
pub mod schema;
pub mod writer;

pub use cli::Cli;
pub use config::Config;
pub use error::PipelineError;
pub use pipeline::{load_and_export, run, RunSummary};
