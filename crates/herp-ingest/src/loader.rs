//! Delimited-text loading.

use std::io::Read;
use std::time::Instant;

use csv::ReaderBuilder;
use herp_model::{NormalizedRecord, RawRow};
use tracing::{debug, info, info_span};

use crate::error::{IngestError, Result};
use crate::normalize::normalize_row;
use crate::source::DatasetSource;

/// Options for reading the delimited source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    /// Set the delimiter from a textual form (`,`, `;`, `\t`, `tab`, ...).
    pub fn with_delimiter(mut self, delimiter: &str) -> Result<Self> {
        self.delimiter = parse_delimiter(delimiter)?;
        Ok(self)
    }
}

fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        other => {
            let bytes = other.as_bytes();
            if bytes.len() == 1 && bytes[0].is_ascii() {
                Ok(bytes[0])
            } else {
                Err(IngestError::InvalidDelimiter(other.to_string()))
            }
        }
    }
}

/// A loaded checklist.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the data came from.
    pub origin: String,
    /// Header names in source order.
    pub headers: Vec<String>,
    /// Normalized records in source order.
    pub records: Vec<NormalizedRecord>,
    /// Non-blank data rows seen.
    pub total_rows: usize,
    /// Rows rejected for a blank genus or species.
    pub dropped_rows: usize,
}

/// Fetches and parses the checklist.
///
/// Any fetch or parse failure aborts the whole load; rejected rows do not.
pub fn load_dataset(source: &DatasetSource, options: &LoadOptions) -> Result<Dataset> {
    let origin = source.origin();
    let span = info_span!("load", origin = %origin);
    let _guard = span.enter();
    let start = Instant::now();
    let bytes = source.fetch()?;
    let dataset = read_dataset(bytes.as_slice(), options, &origin)?;
    info!(
        records = dataset.records.len(),
        dropped = dataset.dropped_rows,
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parses delimited text with a header row from any reader.
pub fn read_dataset<R: Read>(reader: R, options: &LoadOptions, origin: &str) -> Result<Dataset> {
    let csv_error = |source| IngestError::CsvParse {
        origin: origin.to_string(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptySource {
            origin: origin.to_string(),
        });
    }

    let mut records = Vec::new();
    let mut total_rows = 0usize;
    let mut dropped_rows = 0usize;
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = record.get(idx) {
                row.insert(header.as_str(), value);
            }
        }
        if row.is_blank() {
            continue;
        }
        total_rows += 1;
        match normalize_row(row) {
            Some(normalized) => records.push(normalized),
            None => dropped_rows += 1,
        }
    }
    debug!(origin, total_rows, dropped_rows, "rows normalized");

    Ok(Dataset {
        origin: origin.to_string(),
        headers,
        records,
        total_rows,
        dropped_rows,
    })
}

/// Strips a leading byte-order mark; names are otherwise kept verbatim.
fn normalize_header(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert!(matches!(
            parse_delimiter(";;"),
            Err(IngestError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}Famiglia"), "Famiglia");
        assert_eq!(normalize_header(" Lo"), " Lo");
    }
}
