use csv::StringRecord;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

use super::schema_gen::{generate_create_table, generate_drop_table, generate_insert};
use crate::error::StoreError;
use crate::parser::{parse_record, ParsedRow};
use crate::query::{countries_without_megapolis, CountrySummary};
use crate::schema::TableSchema;

/// Single connection to the cities database, opened once per run.
pub struct CityStore {
    conn: Connection,
}

impl CityStore {
    /// Open (or create) the database file. Existing tables are left alone
    /// until [`CityStore::recreate_table`] runs.
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path).map_err(|source| StoreError::Open {
            path: db_path.to_path_buf(),
            source,
        })?;
        Self::configure(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Self::configure(conn)
    }

    fn configure(conn: Connection) -> Result<Self, StoreError> {
        // Bulk load settings
        conn.execute_batch(
            "PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -64000;",
        )
        .map_err(|source| StoreError::Configure { source })?;

        Ok(Self { conn })
    }

    /// Drop the table if it exists
    pub fn recreate_table(&self, schema: &TableSchema) -> Result<(), StoreError> {
        self.conn
            .execute(&generate_drop_table(schema), [])
            .map_err(|source| StoreError::DropTable {
                table: schema.name,
                source,
            })?;
        info!(table = schema.name, "Table dropped");
        Ok(())
    }

    pub fn create_table(&self, schema: &TableSchema) -> Result<(), StoreError> {
        self.conn
            .execute(&generate_create_table(schema), [])
            .map_err(|source| StoreError::CreateTable {
                table: schema.name,
                source,
            })?;
        info!(table = schema.name, "Table created");
        Ok(())
    }

    /// Insert every record after the header in one transaction.
    ///
    /// All rows are parsed up front, so a malformed record anywhere in the
    /// input leaves the table empty. Returns the number of rows inserted.
    pub fn insert_records<I>(&mut self, schema: &TableSchema, records: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = csv::Result<StringRecord>>,
    {
        let mut records = records.into_iter();

        // Header
        if let Some(header) = records.next() {
            header.map_err(|source| StoreError::MalformedRecord { source })?;
        }

        let rows = records
            .map(|record| {
                let record = record.map_err(|source| StoreError::MalformedRecord { source })?;
                parse_record(&record, schema)
            })
            .collect::<Result<Vec<ParsedRow>, StoreError>>()?;

        let tx = self
            .conn
            .transaction()
            .map_err(|source| StoreError::BeginTransaction { source })?;

        insert_batch(&tx, &generate_insert(schema), &rows)?;

        tx.commit().map_err(|source| StoreError::Commit { source })?;

        info!(table = schema.name, rows = rows.len(), "Data insertion completed");
        Ok(rows.len())
    }

    #[cfg(test)]
    fn row_count(&self, schema: &TableSchema) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", schema.name);
        let count: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|source| StoreError::Query { source })?;
        Ok(count as u64)
    }

    pub fn countries_without_megapolis(&self) -> Result<Vec<CountrySummary>, StoreError> {
        countries_without_megapolis(&self.conn)
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn
            .close()
            .map_err(|(_, source)| StoreError::Close { source })
    }
}

/// Insert parsed rows through a cached prepared statement
fn insert_batch(
    tx: &rusqlite::Transaction,
    sql: &str,
    rows: &[ParsedRow],
) -> Result<(), StoreError> {
    let mut stmt = tx
        .prepare_cached(sql)
        .map_err(|source| StoreError::PrepareInsert { source })?;

    for row in rows {
        insert_row(&mut stmt, row).map_err(|source| StoreError::InsertRow {
            line: row.line,
            source,
        })?;
    }

    Ok(())
}

fn insert_row(stmt: &mut rusqlite::Statement, row: &ParsedRow) -> rusqlite::Result<()> {
    for (idx, value) in row.values.iter().enumerate() {
        value.bind_to(idx + 1, stmt)?;
    }
    stmt.raw_execute()?;
    Ok(())
}
