use serde_json::{Map, Value};

use crate::parser::row::{Row, Table};
use crate::schema::TableSchema;

/// Project a row into a named-field record.
///
/// Fields are trimmed; empty or missing fields become explicit `null`. Returns
/// `None` when no field at all is populated.
pub fn project_row(row: &Row, schema: &TableSchema) -> Option<Map<String, Value>> {
    let mut record = Map::new();
    let mut populated = 0usize;

    for (idx, col) in schema.columns.iter().enumerate() {
        let value = row
            .text(idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| col.col_type.coerce(s))
            .unwrap_or(Value::Null);

        if !value.is_null() {
            populated += 1;
        }
        record.insert(col.name.to_string(), value);
    }

    (populated > 0).then_some(record)
}

/// Project every row of a table, preserving source order
pub fn project_table(table: &Table) -> Vec<Value> {
    table
        .rows
        .iter()
        .filter_map(|row| project_row(row, table.schema))
        .map(Value::Object)
        .collect()
}
