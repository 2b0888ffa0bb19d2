//! Error types for the dump pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a dump run fails.
///
/// Records dropped during resolution (unknown trigger, point value with no
/// tier) are not errors; those are filtered out with `Option` returns.
#[derive(Error, Debug)]
pub enum DumpError {
    /// A SQL table produced no parseable rows
    #[error("table '{table}' yielded no rows")]
    EmptyTable { table: &'static str },

    /// A REST endpoint returned nothing usable
    #[error("endpoint '{endpoint}' yielded no records")]
    EmptyEndpoint { endpoint: String },

    /// An assembled document has no entries
    #[error("document '{name}' is empty")]
    EmptyDocument { name: String },

    /// A creation date that cannot be turned into a timestamp
    #[error("malformed date: {value:?}")]
    MalformedDate { value: Option<String> },

    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;
