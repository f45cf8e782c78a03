use csv::StringRecord;

use crate::error::StoreError;
use crate::schema::{ColumnType, TableSchema};

/// A parsed row ready for insertion, values in column order
pub struct ParsedRow {
    /// Source line of the record, for error reporting
    pub line: u64,
    pub values: Vec<SqlValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

/// Convert one CSV record into a row for the given table schema
pub fn parse_record(record: &StringRecord, schema: &TableSchema) -> Result<ParsedRow, StoreError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != schema.column_count() {
        return Err(StoreError::FieldCount {
            line,
            expected: schema.column_count(),
            found: record.len(),
        });
    }

    let values = schema
        .columns
        .iter()
        .zip(record.iter())
        .map(|(col, field)| extract_value(field, col.col_type))
        .collect();

    Ok(ParsedRow { line, values })
}

fn extract_value(field: &str, col_type: ColumnType) -> SqlValue {
    match col_type {
        ColumnType::Integer => {
            let trimmed = field.trim();
            if trimmed.is_empty() {
                SqlValue::Null
            } else {
                trimmed
                    .parse::<i64>()
                    .map(SqlValue::Integer)
                    // Keep unparseable values as text rather than dropping them
                    .unwrap_or_else(|_| SqlValue::Text(field.to_string()))
            }
        }
        ColumnType::Text | ColumnType::Date => SqlValue::Text(field.to_string()),
    }
}
