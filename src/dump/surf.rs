use serde_json::Value;
use tracing::info;

use super::DumpSummary;
use crate::config::{DumpOptions, OutputLayout, SurfSources};
use crate::download::Source;
use crate::error::{DumpError, Result};
use crate::merge::merge_surf_tricks;
use crate::sift::Sifter;
use crate::ui::{Phase, Ui};
use crate::writer::Sink;

/// Dump the Trick Surf REST API.
///
/// Each endpoint is written to `trick-surf/<endpoint>` as soon as it is
/// fetched, so files from earlier endpoints remain when a later one fails.
/// The tricks endpoint also feeds `unified/ski2-surf-tricks~{original,sifted}`.
pub fn dump_trick_surf(
    source: &impl Source,
    sink: &mut impl Sink,
    sources: &SurfSources,
    layout: &OutputLayout,
    options: DumpOptions,
    ui: &mut impl Ui,
) -> Result<DumpSummary> {
    let surf_dir = layout.trick_surf_dir();
    let total = SurfSources::ENDPOINTS.len() as u64 + 2;
    let mut tricks = Vec::new();
    let mut documents = 0;

    for endpoint in SurfSources::ENDPOINTS {
        ui.set_phase(Phase::Fetching);
        let records = fetch_records(source, sources, endpoint)?;
        ui.log(format!("{}: {} records", endpoint, records.len()));

        ui.set_phase(Phase::Writing);
        sink.write_document(&surf_dir, endpoint, &Value::Array(records.clone()))?;
        documents += 1;
        ui.set_progress(documents as u64, total, endpoint);

        if endpoint == "tricks" {
            tricks = records;
        }
    }

    ui.set_phase(Phase::Merging);
    let unified_dir = layout.unified_dir();
    let mut counts = [0usize; 2];

    for (sifted, count) in [false, true].into_iter().zip(counts.iter_mut()) {
        let sifter = if sifted {
            Sifter::sifted(options)
        } else {
            Sifter::original(options)
        };
        let name = OutputLayout::variant_name(OutputLayout::SURF_UNIFIED_NAME, sifted);

        let entries = merge_surf_tricks(&tricks, sifter);
        if entries.is_empty() {
            return Err(DumpError::EmptyDocument { name });
        }
        *count = entries.len();

        ui.set_phase(Phase::Writing);
        sink.write_document(&unified_dir, &name, &Value::Array(entries))?;
        documents += 1;
        ui.set_progress(documents as u64, total, name);
    }

    ui.set_phase(Phase::Complete);
    let summary = DumpSummary {
        documents,
        original_tricks: counts[0],
        sifted_tricks: counts[1],
    };
    info!(?summary, "trick surf dump finished");
    Ok(summary)
}

/// Fetch one endpoint, requiring a non-empty JSON array
fn fetch_records(source: &impl Source, sources: &SurfSources, endpoint: &str) -> Result<Vec<Value>> {
    match source.fetch_json(&sources.endpoint_url(endpoint))? {
        Some(Value::Array(records)) if !records.is_empty() => Ok(records),
        _ => Err(DumpError::EmptyEndpoint {
            endpoint: endpoint.to_string(),
        }),
    }
}
