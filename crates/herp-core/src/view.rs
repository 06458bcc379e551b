//! Immutable view state for the table and map views.

use herp_model::NormalizedRecord;
use herp_model::fields;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{RegionalSummary, aggregate};
use crate::filter::{FilterSet, filter_records};
use crate::sort::{SortGesture, SortState, sort_records};

/// Columns shown when nothing else is selected.
pub const DEFAULT_COLUMNS: [&str; 3] = [fields::SCIENTIFIC_NAME, fields::AUTHOR, fields::FAMILY];

/// Filters, sort keys, and visible columns.
///
/// Every update consumes the state and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterSet,
    pub sort: SortState,
    pub columns: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: FilterSet::default(),
            sort: SortState::default(),
            columns: DEFAULT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, query: impl Into<String>) -> Self {
        self.filters = self.filters.with(field, query);
        self
    }

    #[must_use]
    pub fn without_filter(mut self, field: &str) -> Self {
        self.filters = self.filters.without(field);
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Activate a column header for sorting.
    #[must_use]
    pub fn with_sort_toggled(mut self, field: &str, gesture: SortGesture) -> Self {
        self.sort = self.sort.toggle(field, gesture);
        self
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Show a hidden column (appended) or hide a visible one.
    #[must_use]
    pub fn with_column_toggled(mut self, field: &str) -> Self {
        match self.columns.iter().position(|column| column == field) {
            Some(idx) => {
                self.columns.remove(idx);
            }
            None => self.columns.push(field.to_string()),
        }
        self
    }

    /// Filtered and sorted rows for the table view.
    pub fn table<'a>(&self, records: &'a [NormalizedRecord]) -> Vec<&'a NormalizedRecord> {
        let filtered = filter_records(records, &self.filters);
        debug!(
            total = records.len(),
            matched = filtered.len(),
            "filters applied"
        );
        sort_records(filtered, &self.sort)
    }

    /// Regional summary of the filtered rows for the map view.
    pub fn map(&self, records: &[NormalizedRecord]) -> RegionalSummary {
        aggregate(filter_records(records, &self.filters))
    }
}
