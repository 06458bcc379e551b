//! Viewer configuration file and its merge with command-line values.
//!
//! Precedence: command line, then the TOML file, then built-in defaults.
//!
//! ```toml
//! source = "https://example.org/checklist.csv"
//! delimiter = ";"
//! columns = ["ScientificName", "Author", "Famiglia", "Lo"]
//! sort = ["Famiglia", "Genere:desc"]
//!
//! [filters]
//! Famiglia = "ranidae"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use herp_core::{FilterSet, SortKey, SortState, ViewState};
use herp_ingest::{DatasetSource, LoadOptions};
use serde::{Deserialize, Serialize};

/// Dataset read when neither the command line nor the config names one.
pub const DEFAULT_SOURCE: &str = "checklist.csv";

/// Contents of the optional `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Dataset path or URL.
    pub source: Option<String>,
    /// Field delimiter (`,`, `;`, `tab`).
    pub delimiter: Option<String>,
    /// Visible table columns.
    pub columns: Option<Vec<String>>,
    /// Sort keys, primary first (`FIELD[:asc|:desc]`).
    pub sort: Vec<String>,
    /// Initial filter queries.
    pub filters: BTreeMap<String, String>,
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn source(&self, cli: Option<&str>) -> DatasetSource {
        let raw = cli.or(self.source.as_deref()).unwrap_or(DEFAULT_SOURCE);
        match raw.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }

    pub fn load_options(&self, cli: Option<&str>) -> Result<LoadOptions> {
        match cli.or(self.delimiter.as_deref()) {
            Some(delimiter) => Ok(LoadOptions::default().with_delimiter(delimiter)?),
            None => Ok(LoadOptions::default()),
        }
    }

    /// Builds the view state from config values overridden by the command line.
    ///
    /// Command-line filters are merged over the configured ones; command-line
    /// sort keys and columns replace the configured lists.
    pub fn view_state(
        &self,
        filters: &[String],
        sort: &[String],
        columns: Option<&[String]>,
    ) -> Result<ViewState> {
        let mut filter_set: FilterSet = self.filters.clone().into_iter().collect();
        for raw in filters {
            let (field, query) = parse_filter(raw)?;
            filter_set = filter_set.with(field, query);
        }
        let sort_specs = if sort.is_empty() { &self.sort[..] } else { sort };
        let sort_state = parse_sort(sort_specs)?;
        let mut view = ViewState::default()
            .with_filters(filter_set)
            .with_sort(sort_state);
        if let Some(columns) = columns.or(self.columns.as_deref()) {
            view = view.with_columns(columns.iter().cloned());
        }
        Ok(view)
    }
}

/// Parses `FIELD=QUERY`. The query may be empty or contain `=`.
pub fn parse_filter(raw: &str) -> Result<(String, String)> {
    let (field, query) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid filter '{raw}': expected FIELD=QUERY"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(anyhow!("invalid filter '{raw}': empty field name"));
    }
    Ok((field.to_string(), query.to_string()))
}

pub fn parse_sort(specs: &[String]) -> Result<SortState> {
    specs
        .iter()
        .map(|spec| spec.parse::<SortKey>().map_err(|message| anyhow!(message)))
        .collect()
}
