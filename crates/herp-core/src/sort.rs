//! Stable multi-key sorting and the interactive sort-key list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use herp_model::NormalizedRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// One column of the sort order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    /// Parses `FIELD`, `FIELD:asc`, or `FIELD:desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.rsplit_once(':') {
            Some((field, suffix)) => match suffix.trim().to_ascii_lowercase().as_str() {
                "asc" | "ascending" => (field, SortDirection::Ascending),
                "desc" | "descending" => (field, SortDirection::Descending),
                _ => (s, SortDirection::Ascending),
            },
            None => (s, SortDirection::Ascending),
        };
        let field = field.trim();
        if field.is_empty() {
            return Err(format!("empty sort field in '{s}'"));
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// How a column activation combines with the existing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortGesture {
    /// Drop every other key.
    Replace,
    /// Keep the other keys in place.
    Extend,
}

/// Ordered sort keys, primary key first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|key| key.field == field)
            .map(|key| key.direction)
    }

    /// Applies a column activation and returns the new state.
    ///
    /// Each activation cycles the column through ascending, descending, and
    /// unsorted. `Extend` updates the key where it stands, appends a new key
    /// at the end, and removes a key cycled back to unsorted.
    #[must_use]
    pub fn toggle(&self, field: &str, gesture: SortGesture) -> Self {
        let next = match self.direction_of(field) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        let keys = match gesture {
            SortGesture::Replace => next
                .map(|direction| {
                    vec![SortKey {
                        field: field.to_string(),
                        direction,
                    }]
                })
                .unwrap_or_default(),
            SortGesture::Extend => {
                let mut keys = self.keys.clone();
                match (keys.iter().position(|key| key.field == field), next) {
                    (Some(idx), Some(direction)) => keys[idx].direction = direction,
                    (Some(idx), None) => {
                        keys.remove(idx);
                    }
                    (None, Some(direction)) => keys.push(SortKey {
                        field: field.to_string(),
                        direction,
                    }),
                    (None, None) => {}
                }
                keys
            }
        };
        Self { keys }
    }

    /// Compares two records key by key; equal on every key means equal.
    pub fn compare(&self, left: &NormalizedRecord, right: &NormalizedRecord) -> Ordering {
        for key in &self.keys {
            let ordering = key
                .direction
                .apply(left.value_of(&key.field).cmp(right.value_of(&key.field)));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl FromIterator<SortKey> for SortState {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        let mut keys: Vec<SortKey> = Vec::new();
        for key in iter {
            match keys.iter_mut().find(|existing| existing.field == key.field) {
                Some(existing) => existing.direction = key.direction,
                None => keys.push(key),
            }
        }
        Self { keys }
    }
}

/// Returns the records ordered by the sort keys.
///
/// Values compare as case-sensitive strings, missing fields as empty.
/// Records equal on every key keep their input order.
pub fn sort_records<'a, I>(records: I, state: &SortState) -> Vec<&'a NormalizedRecord>
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let mut sorted: Vec<&NormalizedRecord> = records.into_iter().collect();
    if !state.is_empty() {
        sorted.sort_by(|left, right| state.compare(left, right));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(keys: &[(&str, SortDirection)]) -> SortState {
        keys.iter()
            .map(|(field, direction)| SortKey {
                field: (*field).to_string(),
                direction: *direction,
            })
            .collect()
    }

    #[test]
    fn toggle_cycles_ascending_descending_removed() {
        let first = SortState::new().toggle("Genere", SortGesture::Extend);
        assert_eq!(first.direction_of("Genere"), Some(SortDirection::Ascending));
        let second = first.toggle("Genere", SortGesture::Extend);
        assert_eq!(second.direction_of("Genere"), Some(SortDirection::Descending));
        let third = second.toggle("Genere", SortGesture::Extend);
        assert!(third.is_empty());
    }

    #[test]
    fn extend_updates_in_place() {
        let current = state(&[
            ("Famiglia", SortDirection::Ascending),
            ("Genere", SortDirection::Ascending),
            ("Specie", SortDirection::Ascending),
        ]);
        let next = current.toggle("Genere", SortGesture::Extend);
        assert_eq!(
            next,
            state(&[
                ("Famiglia", SortDirection::Ascending),
                ("Genere", SortDirection::Descending),
                ("Specie", SortDirection::Ascending),
            ])
        );
        let removed = next.toggle("Genere", SortGesture::Extend);
        assert_eq!(
            removed,
            state(&[
                ("Famiglia", SortDirection::Ascending),
                ("Specie", SortDirection::Ascending),
            ])
        );
    }

    #[test]
    fn extend_appends_new_keys() {
        let current = state(&[("Famiglia", SortDirection::Descending)]);
        let next = current.toggle("Genere", SortGesture::Extend);
        assert_eq!(
            next,
            state(&[
                ("Famiglia", SortDirection::Descending),
                ("Genere", SortDirection::Ascending),
            ])
        );
    }

    #[test]
    fn replace_clears_other_keys() {
        let current = state(&[
            ("Famiglia", SortDirection::Ascending),
            ("Genere", SortDirection::Ascending),
        ]);
        assert_eq!(
            current.toggle("Genere", SortGesture::Replace),
            state(&[("Genere", SortDirection::Descending)])
        );
        assert_eq!(
            current.toggle("Specie", SortGesture::Replace),
            state(&[("Specie", SortDirection::Ascending)])
        );
        let descending = state(&[
            ("Famiglia", SortDirection::Ascending),
            ("Genere", SortDirection::Descending),
        ]);
        assert!(descending.toggle("Genere", SortGesture::Replace).is_empty());
    }

    #[test]
    fn parse_sort_keys() {
        assert_eq!("Genere".parse::<SortKey>(), Ok(SortKey::ascending("Genere")));
        assert_eq!(
            "Genere:desc".parse::<SortKey>(),
            Ok(SortKey::descending("Genere"))
        );
        assert_eq!(
            "Autore e anno specie:ASC".parse::<SortKey>(),
            Ok(SortKey::ascending("Autore e anno specie"))
        );
        assert_eq!("a:b".parse::<SortKey>(), Ok(SortKey::ascending("a:b")));
        assert!(":desc".parse::<SortKey>().is_err());
    }

    #[test]
    fn duplicate_keys_collapse_on_collect() {
        let collected = state(&[
            ("Genere", SortDirection::Ascending),
            ("Famiglia", SortDirection::Ascending),
            ("Genere", SortDirection::Descending),
        ]);
        assert_eq!(collected.keys().len(), 2);
        assert_eq!(collected.keys()[0], SortKey::descending("Genere"));
    }
}
