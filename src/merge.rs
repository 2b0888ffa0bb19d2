//! Assembles the unified trick documents from the extracted tables
//!
//! Output entry shape:
//!
//! ```json
//! {
//!     "Name": "<TRICK-NAME>",
//!     "Points": 150,
//!     "Tier": 2,
//!     "PreSpeedLock": false,
//!     "CreateDate": "2020-01-01 00:00:00",
//!     "UpdateDate": "2020-01-01 00:00:00",
//!     "CreateTimestamp": 1577836800,
//!     "UpdateTimestamp": 1577836800,
//!     "Author": { "PlayerName": "<NAME>", "ProfileURL": "<URL>" },
//!     "RoutePath": ["<TRIGGER-NAME-0>", "<TRIGGER-NAME-1>"]
//! }
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::DumpOptions;
use crate::error::{DumpError, Result};
use crate::parser::{project_table, Table};
use crate::resolve::{find_author, find_route, Author};
use crate::schema::tables::trick;
use crate::sift::Sifter;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrickEntry {
    pub name: String,
    pub points: i64,
    pub tier: usize,
    pub pre_speed_lock: bool,
    pub create_date: String,
    pub update_date: String,
    pub create_timestamp: i64,
    pub update_timestamp: i64,
    pub author: Option<Author>,
    pub route_path: Vec<String>,
}

/// The four Trick Gxds tables of one run
#[derive(Debug, Clone)]
pub struct GxdsTables {
    pub players: Table,
    pub routes: Table,
    pub tricks: Table,
    pub triggers: Table,
}

impl GxdsTables {
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        [&self.players, &self.routes, &self.tricks, &self.triggers].into_iter()
    }
}

/// Everything a Trick Gxds run writes
#[derive(Debug, Clone)]
pub struct GxdsDocuments {
    pub original: Vec<TrickEntry>,
    pub sifted: Vec<TrickEntry>,
    /// Per-table projections, keyed by table name
    pub projections: Vec<(&'static str, Vec<Value>)>,
}

/// Build both unified variants and the per-table projections
pub fn assemble(tables: &GxdsTables, options: DumpOptions) -> Result<GxdsDocuments> {
    let original = merge_tricks(tables, Sifter::original(options))?;
    let sifted = merge_tricks(tables, Sifter::sifted(options))?;

    let projections = tables
        .iter()
        .map(|table| (table.name(), project_table(table)))
        .collect();

    Ok(GxdsDocuments {
        original,
        sifted,
        projections,
    })
}

/// Merge tricks with their route and author.
///
/// Tricks whose route does not resolve, or whose points have no tier, are left
/// out. A creation date that cannot be parsed fails the whole merge.
pub fn merge_tricks(tables: &GxdsTables, sifter: Sifter) -> Result<Vec<TrickEntry>> {
    let mut entries = Vec::new();

    for row in &tables.tricks.rows {
        let Some(trick_id) = row.int(trick::ID) else {
            continue;
        };

        let Some(route_path) = find_route(&tables.routes, &tables.triggers, trick_id, sifter.enabled)
        else {
            debug!(trick_id, sifted = sifter.enabled, "skipping trick: route unresolved");
            continue;
        };

        let Some(grade) = row.int(trick::POINTS).and_then(|points| sifter.grade(points)) else {
            debug!(trick_id, sifted = sifter.enabled, "skipping trick: no tier");
            continue;
        };

        let name = sifter.trick_name(row.text(trick::NAME).unwrap_or_default());
        let pre_speed_lock = row.int(trick::VELOCITY) != Some(1);

        let date = row.text(trick::CREATE_DATE);
        let timestamp = creation_timestamp(date)?;
        let date = date.unwrap_or_default().to_string();

        let author = row
            .int(trick::AUTHOR_ID)
            .and_then(|id| find_author(&tables.players, id, sifter.enabled));

        entries.push(TrickEntry {
            name,
            points: grade.points,
            tier: grade.tier,
            pre_speed_lock,
            create_date: date.clone(),
            update_date: date,
            create_timestamp: timestamp,
            update_timestamp: timestamp,
            author,
            route_path,
        });
    }

    debug!(sifted = sifter.enabled, tricks = entries.len(), "merged tricks");
    Ok(entries)
}

/// Grade Trick Surf API trick records.
///
/// Records need a string `name` and an integer `points`; others, and those
/// whose points have no tier, are left out. The result leads with `Name`,
/// `Points` and `Tier`, followed by the record's remaining fields.
pub fn merge_surf_tricks(records: &[Value], sifter: Sifter) -> Vec<Value> {
    let mut entries = Vec::new();

    for record in records {
        let Some(object) = record.as_object() else {
            continue;
        };
        let (Some(name), Some(points)) = (
            object.get("name").and_then(Value::as_str),
            object.get("points").and_then(Value::as_i64),
        ) else {
            debug!("skipping surf trick without name or points");
            continue;
        };
        let Some(grade) = sifter.grade(points) else {
            debug!(name, points, "skipping surf trick: no tier");
            continue;
        };

        let mut entry = Map::new();
        entry.insert("Name".to_string(), Value::from(sifter.trick_name(name)));
        entry.insert("Points".to_string(), Value::from(grade.points));
        entry.insert("Tier".to_string(), Value::from(grade.tier));
        for (key, value) in object {
            if key != "name" && key != "points" {
                entry.insert(key.clone(), value.clone());
            }
        }
        entries.push(Value::Object(entry));
    }

    entries
}

/// Unix timestamp of a dump date.
///
/// Dates without an offset are wall-clock values and are read as UTC.
pub fn creation_timestamp(date: Option<&str>) -> Result<i64> {
    let malformed = || DumpError::MalformedDate {
        value: date.map(str::to_string),
    };
    let text = date.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(malformed)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc().timestamp());
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp())
        .ok_or_else(malformed)
}
