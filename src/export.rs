use csv::{Terminator, WriterBuilder};
use std::path::Path;
use tracing::info;

use crate::error::ExportError;
use crate::query::CountrySummary;

pub const HEADER: [&str; 2] = ["Country Code", "Country Name"];

/// Write results as TSV, replacing any existing file.
///
/// The header is always written, even when there are no rows. Lines end in
/// `\r\n`.
pub fn write_results(path: &Path, results: &[CountrySummary]) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_path(path)
        .map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record(HEADER).map_err(write_err)?;
    for summary in results {
        writer.serialize(summary).map_err(write_err)?;
    }

    writer.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = ?path, rows = results.len(), "Query results saved");
    Ok(results.len())
}
