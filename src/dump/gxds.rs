use serde_json::Value;
use tracing::info;

use super::DumpSummary;
use crate::config::{DumpOptions, GxdsSources, OutputLayout};
use crate::download::Source;
use crate::error::{DumpError, Result};
use crate::merge::{assemble, GxdsTables};
use crate::parser::{extract_table, Table};
use crate::schema::{TableSchema, PLAYERS, ROUTES, TRICKS, TRIGGERS};
use crate::ui::{Phase, Ui};
use crate::writer::Sink;

/// Dump the Trick Gxds SQL tables.
///
/// All four tables are fetched and extracted and both unified variants are
/// assembled before anything is written, so a failed run leaves no output.
/// Writes `unified/ski2-gxds-tricks~{original,sifted}` and one projection per
/// table under `trick-gxds/`.
pub fn dump_trick_gxds(
    source: &impl Source,
    sink: &mut impl Sink,
    sources: &GxdsSources,
    layout: &OutputLayout,
    options: DumpOptions,
    ui: &mut impl Ui,
) -> Result<DumpSummary> {
    let tables = GxdsTables {
        players: fetch_table(source, sources, &PLAYERS, ui)?,
        routes: fetch_table(source, sources, &ROUTES, ui)?,
        tricks: fetch_table(source, sources, &TRICKS, ui)?,
        triggers: fetch_table(source, sources, &TRIGGERS, ui)?,
    };

    ui.set_phase(Phase::Merging);
    let docs = assemble(&tables, options)?;

    let original_name = OutputLayout::variant_name(OutputLayout::GXDS_UNIFIED_NAME, false);
    let sifted_name = OutputLayout::variant_name(OutputLayout::GXDS_UNIFIED_NAME, true);
    if docs.original.is_empty() {
        return Err(DumpError::EmptyDocument { name: original_name });
    }
    if docs.sifted.is_empty() {
        return Err(DumpError::EmptyDocument { name: sifted_name });
    }
    ui.log(format!(
        "Merged {} original and {} sifted tricks",
        docs.original.len(),
        docs.sifted.len()
    ));

    ui.set_phase(Phase::Writing);
    let unified_dir = layout.unified_dir();
    let table_dir = layout.trick_gxds_dir();
    let total = 2 + docs.projections.len() as u64;

    sink.write_document(&unified_dir, &original_name, &serde_json::to_value(&docs.original)?)?;
    ui.set_progress(1, total, original_name);
    sink.write_document(&unified_dir, &sifted_name, &serde_json::to_value(&docs.sifted)?)?;
    ui.set_progress(2, total, sifted_name);

    for (i, (name, records)) in docs.projections.into_iter().enumerate() {
        sink.write_document(&table_dir, name, &Value::Array(records))?;
        ui.set_progress(3 + i as u64, total, name);
    }

    ui.set_phase(Phase::Complete);
    let summary = DumpSummary {
        documents: total as usize,
        original_tricks: docs.original.len(),
        sifted_tricks: docs.sifted.len(),
    };
    info!(?summary, "trick gxds dump finished");
    Ok(summary)
}

fn fetch_table(
    source: &impl Source,
    sources: &GxdsSources,
    schema: &'static TableSchema,
    ui: &mut impl Ui,
) -> Result<Table> {
    ui.set_phase(Phase::Fetching);
    let url = sources.table_url(schema.source_file);
    let text = source
        .fetch_text(&url)?
        .ok_or(DumpError::EmptyTable { table: schema.name })?;

    ui.set_phase(Phase::Extracting);
    let table = extract_table(&text, schema)?;
    ui.log(format!("{}: {} rows", schema.name, table.rows.len()));
    Ok(table)
}
