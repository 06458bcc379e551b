//! Terminal, JSON, and CSV rendering of the table and map views.

use std::io::Write;

use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use herp_core::{RegionShade, RegionalSummary, SortDirection, SortState};
use herp_ingest::Dataset;
use herp_model::{MacroRegionCode, NormalizedRecord, RegionCode};
use serde_json::{Value, json};

/// Width of the intensity bar in the map table.
const BAR_WIDTH: usize = 10;

pub fn records_table(rows: &[&NormalizedRecord], columns: &[String], sort: &SortState) -> Table {
    let mut table = Table::new();
    table.set_header(
        columns
            .iter()
            .map(|column| sorted_header_cell(column, sort.direction_of(column))),
    );
    apply_table_style(&mut table);
    for record in rows {
        table.add_row(columns.iter().map(|column| value_cell(record.value_of(column))));
    }
    table
}

/// Records as a JSON array of objects, restricted to `columns`.
pub fn records_json(rows: &[&NormalizedRecord], columns: &[String]) -> Value {
    Value::Array(
        rows.iter()
            .map(|record| {
                let object = columns
                    .iter()
                    .map(|column| (column.clone(), Value::from(record.value_of(column))))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}

pub fn write_records_csv<W: Write>(
    writer: W,
    rows: &[&NormalizedRecord],
    columns: &[String],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(columns)?;
    for record in rows {
        writer.write_record(columns.iter().map(|column| record.value_of(column)))?;
    }
    writer.flush()?;
    Ok(())
}

/// Header names of the dataset with the derived fields first.
pub fn fields_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Kind")]);
    apply_table_style(&mut table);
    for field in [
        herp_model::fields::SCIENTIFIC_NAME,
        herp_model::fields::AUTHOR,
    ] {
        table.add_row(vec![Cell::new(field), dim_cell("derived")]);
    }
    for header in &dataset.headers {
        let kind = if header.parse::<RegionCode>().is_ok() {
            "region"
        } else if header.parse::<MacroRegionCode>().is_ok() {
            "macro-region"
        } else {
            "source"
        };
        table.add_row(vec![Cell::new(header), dim_cell(kind)]);
    }
    table
}

pub fn map_table(summary: &RegionalSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Region"),
        header_cell("Macro"),
        header_cell("Count"),
        header_cell("Shade"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (code, shade) in summary.shades() {
        let count = summary.stats().count(code);
        table.add_row(vec![
            Cell::new(code.code())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(code.display_name()),
            code.macro_region()
                .map_or_else(|| dim_cell("-"), |parent| Cell::new(parent.code())),
            count.map_or_else(|| dim_cell("-"), Cell::new),
            shade_cell(shade),
        ]);
    }
    table
}

pub fn map_json(summary: &RegionalSummary) -> Value {
    let regions: Vec<Value> = summary
        .shades()
        .into_iter()
        .map(|(code, shade)| {
            json!({
                "code": code,
                "name": code.display_name(),
                "macro": code.macro_region(),
                "count": summary.stats().count(code),
                "shade": shade,
            })
        })
        .collect();
    json!({
        "tier": summary.tier(),
        "records": summary.record_count(),
        "singleton": summary.is_singleton(),
        "stats": summary.stats(),
        "regions": regions,
    })
}

pub fn regions_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Region"),
        header_cell("Macro"),
        header_cell("Macro name"),
    ]);
    apply_table_style(&mut table);
    for code in RegionCode::ALL {
        let (macro_code, macro_name) = match code.macro_region() {
            Some(parent) => (Cell::new(parent.code()), Cell::new(parent.display_name())),
            None => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(code.code())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(code.display_name()),
            macro_code,
            macro_name,
        ]);
    }
    table
}

/// Plain-text label for a shade.
pub fn shade_label(shade: RegionShade) -> String {
    match shade {
        RegionShade::Present => "present".to_string(),
        RegionShade::Doubtful => "doubtful".to_string(),
        RegionShade::Absent => "absent".to_string(),
        RegionShade::NoData => "no data".to_string(),
        RegionShade::Unknown => "unknown".to_string(),
        RegionShade::Intensity(value) => {
            let filled = (value * BAR_WIDTH as f64).round() as usize;
            format!(
                "{}{} {value:.2}",
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH.saturating_sub(filled))
            )
        }
    }
}

fn shade_cell(shade: RegionShade) -> Cell {
    let cell = Cell::new(shade_label(shade));
    match shade {
        RegionShade::Present => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        RegionShade::Doubtful => cell.fg(Color::Yellow),
        RegionShade::Intensity(_) => cell.fg(Color::Green),
        RegionShade::Absent | RegionShade::NoData | RegionShade::Unknown => {
            cell.fg(Color::DarkGrey)
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn sorted_header_cell(label: &str, direction: Option<SortDirection>) -> Cell {
    match direction {
        Some(SortDirection::Ascending) => header_cell(&format!("{label} ▲")),
        Some(SortDirection::Descending) => header_cell(&format!("{label} ▼")),
        None => header_cell(label),
    }
}

fn value_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
