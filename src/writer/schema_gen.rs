use crate::schema::TableSchema;

/// Generate DROP TABLE SQL; a no-op when the table is absent
pub fn generate_drop_table(schema: &TableSchema) -> String {
    format!("DROP TABLE IF EXISTS {}", schema.name)
}

/// Generate CREATE TABLE SQL for a table schema
///
/// No keys or constraints are declared.
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);

    let columns: Vec<String> = schema
        .columns
        .iter()
        .map(|col| format!("    {} {}", col.name, col.col_type.sql_type()))
        .collect();

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate an INSERT with one positional placeholder per column
pub fn generate_insert(schema: &TableSchema) -> String {
    let placeholders: Vec<&str> = schema.columns.iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        schema.column_names().join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CITIES;

    #[test]
    fn test_generate_drop_table() {
        assert_eq!(generate_drop_table(&CITIES), "DROP TABLE IF EXISTS cities");
    }

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&CITIES);
        assert!(sql.starts_with("CREATE TABLE cities ("));
        assert!(sql.contains("geoname_id INTEGER"));
        assert!(sql.contains("cou_name_en TEXT"));
        assert!(sql.contains("population INTEGER"));
        assert!(sql.contains("modification_date DATE"));
        assert!(!sql.contains("PRIMARY KEY"));
        assert_eq!(sql.matches(",\n").count(), 19);
    }

    #[test]
    fn test_generate_insert() {
        let sql = generate_insert(&CITIES);
        assert!(sql.starts_with("INSERT INTO cities (geoname_id, name, ascii_name"));
        assert_eq!(sql.matches('?').count(), 20);
    }
}
