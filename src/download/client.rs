use reqwest::blocking::Client;
use tracing::info;

use super::dataset::Dataset;
use crate::config::Config;
use crate::error::FetchError;

pub struct CityClient {
    client: Client,
}

impl CityClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self { client })
    }

    /// Download the whole dataset into memory
    ///
    /// Any status outside 2xx is an error; nothing is retried.
    pub fn fetch(&self, url: &str) -> Result<Dataset, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        let dataset = Dataset::from_text(text);
        info!(
            characters = dataset.len_chars(),
            "Data download completed"
        );

        Ok(dataset)
    }
}
