use std::collections::BTreeSet;
use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use herp_cli::config::ViewerConfig;
use herp_cli::render::{
    fields_table, map_json, map_table, records_json, records_table, regions_table,
    write_records_csv,
};
use herp_core::ViewState;
use herp_ingest::{Dataset, load_dataset};
use herp_model::fields;
use tracing::{info, info_span, warn};

use crate::cli::{MapArgs, MapFormatArg, SourceArgs, TableArgs, TableFormatArg};

pub fn run_regions() -> Result<()> {
    println!("{}", regions_table());
    Ok(())
}

pub fn run_table(config: &ViewerConfig, args: &TableArgs) -> Result<()> {
    let dataset = load(config, &args.source)?;
    if args.list_fields {
        println!("{}", fields_table(&dataset));
        return Ok(());
    }
    let view = config
        .view_state(&args.source.filters, &args.sort, args.columns.as_deref())
        .context("build view state")?;
    warn_unknown_fields(&dataset, &view);

    let span = info_span!("table");
    let _guard = span.enter();
    let start = Instant::now();
    let mut rows = view.table(&dataset.records);
    info!(
        rows = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "table view built"
    );
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    match args.format {
        TableFormatArg::Table => {
            println!("{}", records_table(&rows, &view.columns, &view.sort));
            println!(
                "{} of {} taxa ({} rows dropped)",
                rows.len(),
                dataset.records.len(),
                dataset.dropped_rows
            );
        }
        TableFormatArg::Json => {
            let json = records_json(&rows, &view.columns);
            println!(
                "{}",
                serde_json::to_string_pretty(&json).context("serialize records")?
            );
        }
        TableFormatArg::Csv => {
            write_records_csv(io::stdout().lock(), &rows, &view.columns)
                .context("write csv")?;
        }
    }
    Ok(())
}

pub fn run_map(config: &ViewerConfig, args: &MapArgs) -> Result<()> {
    let dataset = load(config, &args.source)?;
    let view = config
        .view_state(&args.source.filters, &[], None)
        .context("build view state")?;
    warn_unknown_fields(&dataset, &view);

    let span = info_span!("map");
    let _guard = span.enter();
    let start = Instant::now();
    let summary = view.map(&dataset.records);
    info!(
        records = summary.record_count(),
        tier = summary.tier().as_str(),
        duration_ms = start.elapsed().as_millis(),
        "map view built"
    );

    match args.format {
        MapFormatArg::Table => {
            println!("{}", map_table(&summary));
            println!(
                "{} taxa, {} resolution",
                summary.record_count(),
                summary.tier().as_str()
            );
        }
        MapFormatArg::Json => {
            let json = map_json(&summary);
            println!(
                "{}",
                serde_json::to_string_pretty(&json).context("serialize map")?
            );
        }
    }
    Ok(())
}

fn load(config: &ViewerConfig, args: &SourceArgs) -> Result<Dataset> {
    let source = config.source(args.source.as_deref());
    let options = config.load_options(args.delimiter.as_deref())?;
    load_dataset(&source, &options).with_context(|| format!("load checklist from {source}"))
}

/// Unknown fields are legal (they read as empty) but usually a typo.
fn warn_unknown_fields(dataset: &Dataset, view: &ViewState) {
    let known: BTreeSet<&str> = dataset
        .headers
        .iter()
        .map(String::as_str)
        .chain([fields::SCIENTIFIC_NAME, fields::AUTHOR])
        .collect();
    let referenced = view
        .columns
        .iter()
        .map(String::as_str)
        .chain(view.filters.active().map(|(field, _)| field))
        .chain(view.sort.keys().iter().map(|key| key.field.as_str()));
    for field in referenced {
        if !known.contains(field) {
            warn!(field, "field not present in the dataset");
        }
    }
}
