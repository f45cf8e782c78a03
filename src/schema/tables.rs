//! Table schema for the GeoNames cities export

use super::types::*;

pub static CITIES: TableSchema = TableSchema {
    name: "cities",
    columns: &[
        Column::new("geoname_id", ColumnType::Integer),
        Column::new("name", ColumnType::Text),
        Column::new("ascii_name", ColumnType::Text),
        Column::new("alternate_names", ColumnType::Text),
        Column::new("feature_class", ColumnType::Text),
        Column::new("feature_code", ColumnType::Text),
        Column::new("country_code", ColumnType::Text),
        Column::new("cou_name_en", ColumnType::Text),
        Column::new("country_code_2", ColumnType::Text),
        Column::new("admin1_code", ColumnType::Text),
        Column::new("admin2_code", ColumnType::Text),
        Column::new("admin3_code", ColumnType::Text),
        Column::new("admin4_code", ColumnType::Text),
        Column::new("population", ColumnType::Integer),
        Column::new("elevation", ColumnType::Integer),
        Column::new("dem", ColumnType::Integer),
        Column::new("timezone", ColumnType::Text),
        Column::new("modification_date", ColumnType::Date),
        Column::new("label_en", ColumnType::Text),
        Column::new("coordinates", ColumnType::Text),
    ],
};
