use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// How a raw field is coerced into a JSON value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    /// Velocity flag: `1` means no pre-speed lock, anything else means locked
    InvertedFlag,
}

impl ColumnType {
    /// Coerce an already trimmed, non-empty field.
    ///
    /// Returns `None` when the text does not parse as the column's type.
    pub fn coerce(&self, raw: &str) -> Option<Value> {
        match self {
            ColumnType::Integer => raw.parse::<i64>().ok().map(Value::from),
            ColumnType::Real => raw
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
            ColumnType::Text => Some(Value::String(raw.to_string())),
            ColumnType::InvertedFlag => raw.parse::<i64>().ok().map(|v| Value::Bool(v != 1)),
        }
    }
}

/// Column definition: output field name plus its coercion
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self { name, col_type }
    }
}

/// Table schema definition
///
/// `pattern` matches one tuple per line; its capture groups, in order, are the
/// row's fields and line up one-to-one with `columns`. `regex` is `pattern`
/// compiled on first use.
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub source_file: &'static str,
    pub pattern: &'static str,
    pub regex: Lazy<Regex>,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compile a static row pattern
pub(crate) fn row_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid row pattern {:?}: {}", pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer_and_real() {
        assert_eq!(ColumnType::Integer.coerce("42"), Some(Value::from(42)));
        assert_eq!(ColumnType::Integer.coerce("4.2"), None);
        assert_eq!(ColumnType::Real.coerce("-12.5"), Some(Value::from(-12.5)));
        assert_eq!(ColumnType::Real.coerce("7"), Some(Value::from(7.0)));
    }

    #[test]
    fn test_coerce_inverted_flag() {
        assert_eq!(ColumnType::InvertedFlag.coerce("1"), Some(Value::Bool(false)));
        assert_eq!(ColumnType::InvertedFlag.coerce("0"), Some(Value::Bool(true)));
        assert_eq!(ColumnType::InvertedFlag.coerce("2"), Some(Value::Bool(true)));
    }
}
