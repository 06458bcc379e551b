//! Raw and normalized checklist rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields;
use crate::region::RegionValue;

/// One parsed line of the delimited source, keyed by header.
///
/// A field that is missing from the line (short row) is absent from the map,
/// which is distinct from a field present with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Removes a field and returns its value.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if every present value is blank.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|value| value.trim().is_empty())
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (name, value) in iter {
            row.insert(name, value);
        }
        row
    }
}

/// Taxonomic name components as they appear in the source.
///
/// Values are kept verbatim; trimming happens when they are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxon {
    #[serde(rename = "Genere", default)]
    pub genus: String,
    #[serde(rename = "Sottogenere", default)]
    pub subgenus: String,
    #[serde(rename = "Specie", default)]
    pub species: String,
    #[serde(rename = "Sottospecie", default)]
    pub subspecies: String,
}

impl Taxon {
    pub fn new(
        genus: impl Into<String>,
        subgenus: impl Into<String>,
        species: impl Into<String>,
        subspecies: impl Into<String>,
    ) -> Self {
        Self {
            genus: genus.into(),
            subgenus: subgenus.into(),
            species: species.into(),
            subspecies: subspecies.into(),
        }
    }

    /// A taxon is usable only when both genus and species are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.genus.trim().is_empty() && !self.species.trim().is_empty()
    }

    pub fn has_subspecies(&self) -> bool {
        !self.subspecies.trim().is_empty()
    }

    /// Composes `Genus [(Subgenus)] species [subspecies]`.
    ///
    /// Blank components are skipped, including the parentheses around an
    /// empty subgenus.
    pub fn scientific_name(&self) -> String {
        let subgenus = self.subgenus.trim();
        let subgenus = if subgenus.is_empty() {
            String::new()
        } else {
            format!("({subgenus})")
        };
        [
            self.genus.trim(),
            subgenus.as_str(),
            self.species.trim(),
            self.subspecies.trim(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// A checklist entry with its derived name and authorship.
///
/// Records are immutable once built. Both raw authorship columns stay
/// available next to the canonical [`NormalizedRecord::author`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "ScientificName")]
    scientific_name: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(flatten)]
    taxon: Taxon,
    #[serde(
        rename = "Autore e anno specie",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    species_author: Option<String>,
    #[serde(
        rename = "Autore e anno sottospecie",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    subspecies_author: Option<String>,
    /// Every other column, verbatim.
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
}

impl NormalizedRecord {
    /// Builds a record and derives its scientific name and author.
    ///
    /// The author is the subspecies authorship when the subspecies is
    /// non-blank, even if that authorship is itself empty.
    pub fn new(
        taxon: Taxon,
        species_author: Option<String>,
        subspecies_author: Option<String>,
        extra: BTreeMap<String, String>,
    ) -> Self {
        let scientific_name = taxon.scientific_name();
        let author = if taxon.has_subspecies() {
            subspecies_author.clone().unwrap_or_default()
        } else {
            species_author.clone().unwrap_or_default()
        };
        Self {
            scientific_name,
            author,
            taxon,
            species_author,
            subspecies_author,
            extra,
        }
    }

    pub fn scientific_name(&self) -> &str {
        &self.scientific_name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn taxon(&self) -> &Taxon {
        &self.taxon
    }

    pub fn species_author(&self) -> Option<&str> {
        self.species_author.as_deref()
    }

    pub fn subspecies_author(&self) -> Option<&str> {
        self.subspecies_author.as_deref()
    }

    /// Columns without a typed slot.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// Looks up any field by its header name, derived fields included.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            fields::SCIENTIFIC_NAME => Some(&self.scientific_name),
            fields::AUTHOR => Some(&self.author),
            fields::GENUS => Some(&self.taxon.genus),
            fields::SUBGENUS => Some(&self.taxon.subgenus),
            fields::SPECIES => Some(&self.taxon.species),
            fields::SUBSPECIES => Some(&self.taxon.subspecies),
            fields::SPECIES_AUTHOR => self.species_author.as_deref(),
            fields::SUBSPECIES_AUTHOR => self.subspecies_author.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    /// Field value with missing fields read as the empty string.
    pub fn value_of(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }

    /// Presence state stored under a region or macro-region column.
    pub fn region_value(&self, column: &str) -> RegionValue {
        RegionValue::parse(self.value_of(column))
    }
}
