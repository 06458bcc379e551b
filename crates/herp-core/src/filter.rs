//! Field-level substring filtering.

use std::collections::BTreeMap;

use herp_model::NormalizedRecord;
use serde::{Deserialize, Serialize};

/// Per-field query strings.
///
/// A missing key and an empty query both leave the field unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    queries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the query for `field` replaced.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, query: impl Into<String>) -> Self {
        self.queries.insert(field.into(), query.into());
        self
    }

    /// Returns a copy without any query for `field`.
    #[must_use]
    pub fn without(mut self, field: &str) -> Self {
        self.queries.remove(field);
        self
    }

    pub fn query(&self, field: &str) -> Option<&str> {
        self.queries.get(field).map(String::as_str)
    }

    /// Predicates with a non-empty query.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries
            .iter()
            .filter(|(_, query)| !query.is_empty())
            .map(|(field, query)| (field.as_str(), query.as_str()))
    }

    pub fn is_active(&self) -> bool {
        self.active().next().is_some()
    }
}

impl<K, V> FromIterator<(K, V)> for FilterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FilterSet::new(), |set, (field, query)| set.with(field, query))
    }
}

/// Keeps the records matching every active predicate, in input order.
///
/// A record matches when its lowercased field value contains the lowercased
/// query; a missing field reads as the empty string.
pub fn filter_records<'a, I>(records: I, filters: &FilterSet) -> Vec<&'a NormalizedRecord>
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let predicates: Vec<(&str, String)> = filters
        .active()
        .map(|(field, query)| (field, query.to_lowercase()))
        .collect();
    if predicates.is_empty() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| {
            predicates
                .iter()
                .all(|(field, query)| record.value_of(field).to_lowercase().contains(query.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queries_are_inactive() {
        let filters = FilterSet::new().with("Genere", "").with("Specie", "");
        assert!(!filters.is_active());
        assert_eq!(filters.query("Genere"), Some(""));
        assert_eq!(filters.query("Famiglia"), None);
    }

    #[test]
    fn without_removes_a_query() {
        let filters = FilterSet::new().with("Genere", "rana").without("Genere");
        assert_eq!(filters, FilterSet::new());
    }

    #[test]
    fn later_query_replaces_earlier() {
        let filters: FilterSet = [("Genere", "rana"), ("Genere", "bufo")].into_iter().collect();
        assert_eq!(filters.query("Genere"), Some("bufo"));
    }
}
