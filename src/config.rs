use std::path::PathBuf;
use std::time::Duration;

/// GeoNames export of every city with a population above 1000
pub const DATASET_URL: &str = "https://public.opendatasoft.com/api/records/1.0/download/?dataset=geonames-all-cities-with-a-population-1000";
pub const DEFAULT_DATABASE: &str = "cities_database.db";
pub const DEFAULT_OUTPUT: &str = "countries_without_megapolis.tsv";
pub const DEFAULT_LOG_FILE: &str = "cities.log";

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub database: PathBuf,
    pub output: PathBuf,
    pub log_file: PathBuf,
    /// Request timeout; `None` waits for the server indefinitely
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DATASET_URL.to_string(),
            database: PathBuf::from(DEFAULT_DATABASE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            timeout: None,
        }
    }
}
