//! Error types for each pipeline stage.
//!
//! Stages only report failures. Whether to log and abort is decided by the
//! driver in [`crate::pipeline`] and by `main`.

use rusqlite::Error as SqliteError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while downloading the dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failures in the embedded database: table setup, loading and querying.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open SQLite database at {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: SqliteError,
    },
    #[error("failed to configure SQLite connection")]
    Configure {
        #[source]
        source: SqliteError,
    },
    #[error("failed to drop table {table}")]
    DropTable {
        table: &'static str,
        #[source]
        source: SqliteError,
    },
    #[error("failed to create table {table}")]
    CreateTable {
        table: &'static str,
        #[source]
        source: SqliteError,
    },
    #[error("malformed CSV record")]
    MalformedRecord {
        #[source]
        source: csv::Error,
    },
    #[error("record on line {line} has {found} fields, expected {expected}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("failed to begin insert transaction")]
    BeginTransaction {
        #[source]
        source: SqliteError,
    },
    #[error("failed to prepare insert statement")]
    PrepareInsert {
        #[source]
        source: SqliteError,
    },
    #[error("failed to insert record from line {line}")]
    InsertRow {
        line: u64,
        #[source]
        source: SqliteError,
    },
    #[error("failed to commit insert transaction")]
    Commit {
        #[source]
        source: SqliteError,
    },
    #[error("query failed")]
    Query {
        #[source]
        source: SqliteError,
    },
    #[error("failed to close SQLite database")]
    Close {
        #[source]
        source: SqliteError,
    },
}

/// Failures while writing the results file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to flush {path:?}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("download failed")]
    Fetch(#[from] FetchError),
    #[error("database error")]
    Store(#[from] StoreError),
    #[error("export failed")]
    Export(#[from] ExportError),
}
