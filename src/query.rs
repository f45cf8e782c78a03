//! The countries-without-a-megapolis report.

use rusqlite::{params, Connection};
use serde::Serialize;
use tracing::info;

use crate::error::StoreError;

/// Population at which a city counts as a megapolis
pub const MEGAPOLIS_POPULATION: i64 = 10_000_000;

/// Distinct country codes are excluded by code, but pairs are returned as
/// stored: one code spelled two ways yields two rows.
const COUNTRIES_WITHOUT_MEGAPOLIS: &str = "
    SELECT DISTINCT country_code, cou_name_en
    FROM cities
    WHERE country_code NOT IN (
        SELECT DISTINCT country_code
        FROM cities
        WHERE population >= ?1
    )
    ORDER BY cou_name_en
";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    #[serde(rename = "Country Code")]
    pub code: String,
    #[serde(rename = "Country Name")]
    pub name: String,
}

impl CountrySummary {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Countries with at least one city but none at or above
/// [`MEGAPOLIS_POPULATION`], ordered by English country name.
pub fn countries_without_megapolis(conn: &Connection) -> Result<Vec<CountrySummary>, StoreError> {
    let mut stmt = conn
        .prepare(COUNTRIES_WITHOUT_MEGAPOLIS)
        .map_err(|source| StoreError::Query { source })?;

    let results = stmt
        .query_map(params![MEGAPOLIS_POPULATION], |row| {
            Ok(CountrySummary {
                code: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .map_err(|source| StoreError::Query { source })?;

    info!(rows = results.len(), "Select query executed");
    Ok(results)
}
