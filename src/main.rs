use anyhow::{Context, Result};
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trick_surf_data_dump::{
    cli::{Cli, LICENSE_NOTICE},
    config::{GxdsSources, OutputLayout, SurfSources, TRICK_GXDS_NAME, TRICK_SURF_NAME},
    download::HttpSource,
    error::Result as DumpResult,
    dump::{dump_trick_gxds, dump_trick_surf, DumpSummary},
    ui::LogUi,
    writer::JsonFileWriter,
};

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trick_surf_data_dump=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    if cli.license {
        println!("{}", LICENSE_NOTICE);
        return Ok(ExitCode::SUCCESS);
    }

    let layout = OutputLayout::new(cli.output_dir.clone())?;
    let source = HttpSource::new()?;
    let mut writer = JsonFileWriter::new();
    let mut ok = true;

    if cli.dump_trick_gxds_data {
        let start = Instant::now();
        let sources = GxdsSources::new(cli.trick_gxds_url.clone());
        let result = dump_trick_gxds(
            &source,
            &mut writer,
            &sources,
            &layout,
            cli.trick_gxds_options(),
            &mut LogUi::new(TRICK_GXDS_NAME),
        );
        ok &= report(TRICK_GXDS_NAME, result, start);
    }

    if cli.dump_trick_surf_data {
        let start = Instant::now();
        let url = cli
            .trick_surf_url
            .clone()
            .context("--trick-surf-url is required to dump trick surf data")?;
        let sources = SurfSources::new(url);
        let result = dump_trick_surf(
            &source,
            &mut writer,
            &sources,
            &layout,
            cli.trick_surf_options(),
            &mut LogUi::new(TRICK_SURF_NAME),
        );
        ok &= report(TRICK_SURF_NAME, result, start);
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print the per-source outcome line
fn report(name: &str, result: DumpResult<DumpSummary>, start: Instant) -> bool {
    match result {
        Ok(summary) => {
            println!("SUCCESS :: {} :: Created & wrote data dumps to JSON files", name);
            println!(
                "  {} documents, {} tricks ({} sifted) in {:.1}s",
                summary.documents,
                summary.original_tricks,
                summary.sifted_tricks,
                start.elapsed().as_secs_f64()
            );
            true
        }
        Err(err) => {
            error!(source = name, "dump failed: {:#}", anyhow::Error::from(err));
            eprintln!("-- FAILURE :: {} :: Couldn't create & write data dumps to JSON files", name);
            false
        }
    }
}
