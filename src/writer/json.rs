use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{DumpError, Result};

const JSON_EXT: &str = "json";
const JSON_MIN_EXT: &str = "min.json";
const INDENT: &[u8] = b"    ";

/// Where finished documents go
pub trait Sink {
    /// Persist one document under `dir` as `base_name`
    fn write_document(&mut self, dir: &Path, base_name: &str, value: &Value) -> Result<()>;
}

/// Writes `<base>.json` (pretty) and `<base>.min.json` (compact) side by side
#[derive(Debug, Default)]
pub struct JsonFileWriter;

impl JsonFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for JsonFileWriter {
    fn write_document(&mut self, dir: &Path, base_name: &str, value: &Value) -> Result<()> {
        if is_empty_document(value) {
            return Err(DumpError::EmptyDocument {
                name: base_name.to_string(),
            });
        }

        fs::create_dir_all(dir).map_err(|source| DumpError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let value = unescape_value(value);

        let pretty_path = dir.join(format!("{}.{}", base_name, JSON_EXT));
        write_file(&pretty_path, &to_pretty(&value)?)?;

        let min_path = dir.join(format!("{}.{}", base_name, JSON_MIN_EXT));
        write_file(&min_path, &serde_json::to_vec(&value)?)?;

        info!(path = %pretty_path.display(), "wrote document");
        Ok(())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| DumpError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn to_pretty(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Copy of `value` with literal `\uXXXX` sequences in strings decoded
fn unescape_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(unescape_unicode(s).into_owned()),
        Value::Array(items) => Value::Array(items.iter().map(unescape_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (unescape_unicode(k).into_owned(), unescape_value(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Decode literal `\uXXXX` escapes, joining surrogate pairs.
///
/// Sequences that don't form a valid character are left as they are.
pub fn unescape_unicode(s: &str) -> Cow<'_, str> {
    if !s.contains("\\u") {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match decode_escape(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push_str("\\u");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Decode an escape at the start of `s`, returning the char and bytes consumed
fn decode_escape(s: &str) -> Option<(char, usize)> {
    let high = hex_unit(s)?;

    if (0xD800..0xDC00).contains(&high) {
        let low = hex_unit(&s[6..])?;
        if !(0xDC00..0xE000).contains(&low) {
            return None;
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).map(|ch| (ch, 12));
    }

    char::from_u32(high).map(|ch| (ch, 6))
}

/// Parse `\uXXXX` at the start of `s`
fn hex_unit(s: &str) -> Option<u32> {
    let digits = s.strip_prefix("\\u")?.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_unescape_unicode() {
        assert_eq!(unescape_unicode("plain"), "plain");
        assert_eq!(unescape_unicode(r"\u041f\u0440\u0438"), "При");
        assert_eq!(unescape_unicode(r"smile \ud83d\ude00!"), "smile 😀!");
        assert_eq!(unescape_unicode(r"\nt2_big_hole_left"), r"\nt2_big_hole_left");
        assert_eq!(unescape_unicode(r"bad \u12 and \uZZZZ"), r"bad \u12 and \uZZZZ");
        assert_eq!(unescape_unicode(r"lone \ud83d end"), r"lone \ud83d end");
    }

    #[test]
    fn test_writes_pretty_and_min_siblings() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("unified");
        let mut writer = JsonFileWriter::new();

        let doc = json!([{"Name": r"T\u00e9st", "Points": 150}]);
        writer.write_document(&out, "tricks~sifted", &doc).unwrap();

        let pretty = fs::read_to_string(out.join("tricks~sifted.json")).unwrap();
        assert!(pretty.starts_with("[\n    {\n        \"Name\": \"Tést\""));

        let min = fs::read_to_string(out.join("tricks~sifted.min.json")).unwrap();
        assert_eq!(min, r#"[{"Name":"Tést","Points":150}]"#);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut writer = JsonFileWriter::new();

        let err = writer.write_document(dir.path(), "empty", &json!([])).unwrap_err();
        assert!(matches!(err, DumpError::EmptyDocument { .. }));
        assert!(!dir.path().join("empty.json").exists());
    }
}
