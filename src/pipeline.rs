//! Fetch, load, query, export.
//!
//! Stages run strictly in order and the first failure ends the run. Download
//! and database failures are logged here before being returned; export
//! failures are left for the caller to report.

use std::error::Error;
use tracing::{error, info};

use crate::config::Config;
use crate::download::{CityClient, Dataset};
use crate::error::{PipelineError, StoreError};
use crate::export::write_results;
use crate::query::CountrySummary;
use crate::schema::CITIES;
use crate::writer::CityStore;

/// What a successful run did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub response_chars: usize,
    pub rows_inserted: usize,
    pub countries: Vec<CountrySummary>,
}

/// Download the dataset and run the rest of the pipeline on it
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    info!(url = %config.url, "Downloading dataset");
    let dataset = CityClient::new(config)
        .and_then(|client| client.fetch(&config.url))
        .inspect_err(|e| {
            error!(
                error = e as &(dyn Error + 'static),
                "Error occurred during request"
            )
        })?;

    load_and_export(config, &dataset)
}

/// Load an already fetched dataset, query it and write the results file
pub fn load_and_export(config: &Config, dataset: &Dataset) -> Result<RunSummary, PipelineError> {
    let (rows_inserted, countries) = load_and_query(config, dataset)
        .inspect_err(|e| {
            error!(
                error = e as &(dyn Error + 'static),
                "Database error occurred"
            )
        })?;

    info!(path = ?config.output, "Exporting results");
    write_results(&config.output, &countries)?;

    Ok(RunSummary {
        response_chars: dataset.len_chars(),
        rows_inserted,
        countries,
    })
}

fn load_and_query(
    config: &Config,
    dataset: &Dataset,
) -> Result<(usize, Vec<CountrySummary>), StoreError> {
    info!(path = ?config.database, "Loading dataset into SQLite");
    let mut store = CityStore::open(&config.database)?;
    store.recreate_table(&CITIES)?;
    store.create_table(&CITIES)?;
    let rows_inserted = store.insert_records(&CITIES, dataset.records())?;

    info!("Querying countries without a megapolis");
    let countries = store.countries_without_megapolis()?;
    store.close()?;

    Ok((rows_inserted, countries))
}
