use tracing::{debug, trace};

use crate::error::{DumpError, Result};
use crate::schema::TableSchema;

/// One matched tuple from a SQL dump, fields in column order.
///
/// `NULL` and optional groups that did not participate in the match are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: Vec<Option<String>>,
}

impl Row {
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self { fields }
    }

    /// Raw field text, if present
    pub fn text(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).and_then(|f| f.as_deref())
    }

    /// Field parsed as an integer key or value
    pub fn int(&self, idx: usize) -> Option<i64> {
        self.text(idx).and_then(|s| s.trim().parse().ok())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Rows extracted from one table's dump text, in source order
#[derive(Debug, Clone)]
pub struct Table {
    pub schema: &'static TableSchema,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// First row whose id column equals `id`
    pub fn find_by_id(&self, id: i64) -> Option<&Row> {
        self.rows.iter().find(|row| row.int(0) == Some(id))
    }
}

/// Scan dump text line by line and collect every tuple matching the table's pattern.
///
/// Lines that don't match are skipped. Returns an empty vector if nothing matched.
pub fn extract_rows(text: &str, schema: &'static TableSchema) -> Vec<Row> {
    let re = schema.regex();

    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let Some(caps) = re.captures(line) else {
            trace!(table = schema.name, line = line_no + 1, "no tuple on line");
            continue;
        };

        let fields = caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()))
            .collect();
        rows.push(Row::new(fields));
    }

    debug!(table = schema.name, rows = rows.len(), "extracted rows");
    rows
}

/// Extract a whole table, treating zero rows as fatal for the run
pub fn extract_table(text: &str, schema: &'static TableSchema) -> Result<Table> {
    let rows = extract_rows(text, schema);
    if rows.is_empty() {
        return Err(DumpError::EmptyTable { table: schema.name });
    }
    Ok(Table { schema, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{player, trigger, PLAYERS, ROUTES, TRICKS, TRIGGERS};

    const ROUTES_SQL: &str = "\
INSERT INTO `routes` (`id`, `trick_id`, `trigger_id`) VALUES
(1, 5, 3),
(2, 5, 7),
-- comment line
(3,6,1);
";

    #[test]
    fn test_extract_routes_in_order() {
        let rows = extract_rows(ROUTES_SQL, &ROUTES);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].int(2), Some(3));
        assert_eq!(rows[1].int(2), Some(7));
        assert_eq!(rows[2].int(1), Some(6));
    }

    #[test]
    fn test_extract_player_with_nulls() {
        let sql = "(1, 'STEAM_0:1:111', '76561198059585682', 'Evvvai', \
                   'https://steamcommunity.com/id/evvvai/', NULL, NULL, NULL, \
                   '2020-01-01 00:00:00', NULL, NULL, 'user'),";
        let rows = extract_rows(sql, &PLAYERS);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.len(), PLAYERS.arity());
        assert_eq!(row.text(player::NAME), Some("Evvvai"));
        assert_eq!(row.text(player::STEAM_VANITY_ID), Some("evvvai"));
        assert_eq!(row.text(player::AVATAR_URL), None);
        assert_eq!(row.text(player::ROLE), Some("user"));
    }

    #[test]
    fn test_extract_trigger_signed_decimal_coordinates() {
        let sql = "(4, 't_spawn', NULL, -12.5, 40, NULL, 1, 'https://img/t.png'),";
        let rows = extract_rows(sql, &TRIGGERS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(trigger::X), Some("-12.5"));
        assert_eq!(rows[0].text(trigger::Y), Some("40"));
        assert_eq!(rows[0].text(trigger::Z), None);
        assert_eq!(rows[0].text(trigger::IMAGE_URL), Some("https://img/t.png"));
    }

    #[test]
    fn test_trick_requires_literal_flag() {
        let sql = "(1, 'Ok', 150, 1, '2020-01-01 00:00:00', 1, 1),\n\
                   (2, 'Hidden', 150, 1, '2020-01-01 00:00:00', 1, 0),";
        let rows = extract_rows(sql, &TRICKS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(1), Some("Ok"));
    }

    #[test]
    fn test_empty_table_is_error() {
        let err = extract_table("INSERT INTO `routes` VALUES;", &ROUTES).unwrap_err();
        assert!(matches!(err, DumpError::EmptyTable { table: "routes" }));
    }

    #[test]
    fn test_pattern_is_shared_across_calls() {
        let first = extract_rows(ROUTES_SQL, &ROUTES);
        let second = extract_rows(ROUTES_SQL, &ROUTES);
        assert_eq!(first, second);
        assert!(std::ptr::eq(ROUTES.regex(), ROUTES.regex()));
        assert_eq!(ROUTES.regex().as_str(), ROUTES.pattern);
    }

    #[test]
    fn test_find_by_id() {
        let table = extract_table(ROUTES_SQL, &ROUTES).unwrap();
        assert_eq!(table.find_by_id(2).and_then(|r| r.int(2)), Some(7));
        assert!(table.find_by_id(99).is_none());
    }
}
