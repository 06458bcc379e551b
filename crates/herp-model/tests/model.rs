//! Tests for record construction and field lookup.

use std::collections::BTreeMap;

use herp_model::fields;
use herp_model::{NormalizedRecord, RawRow, RegionValue, Taxon};

fn record(taxon: Taxon, species_author: &str, subspecies_author: &str) -> NormalizedRecord {
    let mut extra = BTreeMap::new();
    extra.insert("Famiglia".to_string(), "Bufonidae".to_string());
    extra.insert("Lo".to_string(), "y".to_string());
    NormalizedRecord::new(
        taxon,
        Some(species_author.to_string()),
        Some(subspecies_author.to_string()),
        extra,
    )
}

#[test]
fn scientific_name_skips_blank_components() {
    assert_eq!(
        Taxon::new("Rana", "", "dalmatina", "").scientific_name(),
        "Rana dalmatina"
    );
    assert_eq!(
        Taxon::new("Rana", "Pelophylax", "esculentus", "").scientific_name(),
        "Rana (Pelophylax) esculentus"
    );
    assert_eq!(
        Taxon::new("Bufo", "", "bufo", "spinosus").scientific_name(),
        "Bufo bufo spinosus"
    );
    assert_eq!(
        Taxon::new(" Bufo ", "  ", "bufo ", "   ").scientific_name(),
        "Bufo bufo"
    );
}

#[test]
fn author_follows_subspecies_presence() {
    let species_level = record(Taxon::new("Bufo", "", "bufo", ""), "Linnaeus, 1758", "X");
    assert_eq!(species_level.author(), "Linnaeus, 1758");

    let subspecies_level = record(
        Taxon::new("Bufo", "", "bufo", "spinosus"),
        "Linnaeus, 1758",
        "Daudin, 1803",
    );
    assert_eq!(subspecies_level.author(), "Daudin, 1803");
}

#[test]
fn empty_subspecies_author_is_kept() {
    let rec = record(Taxon::new("Bufo", "", "bufo", "spinosus"), "Linnaeus, 1758", "");
    assert_eq!(rec.author(), "");
    assert_eq!(rec.species_author(), Some("Linnaeus, 1758"));
}

#[test]
fn field_lookup_covers_typed_derived_and_extra_columns() {
    let rec = record(Taxon::new("Bufo", "", "bufo", ""), "Linnaeus, 1758", "");
    assert_eq!(rec.field(fields::SCIENTIFIC_NAME), Some("Bufo bufo"));
    assert_eq!(rec.field(fields::GENUS), Some("Bufo"));
    assert_eq!(rec.field(fields::SUBSPECIES_AUTHOR), Some(""));
    assert_eq!(rec.field(fields::FAMILY), Some("Bufonidae"));
    assert_eq!(rec.field("Missing"), None);
    assert_eq!(rec.value_of("Missing"), "");
    assert_eq!(rec.region_value("Lo"), RegionValue::Present);
    assert_eq!(rec.region_value("Pi"), RegionValue::Absent);
}

#[test]
fn record_serializes_flat() {
    let rec = record(Taxon::new("Bufo", "", "bufo", ""), "Linnaeus, 1758", "");
    let json = serde_json::to_value(&rec).expect("serialize record");
    assert_eq!(json["ScientificName"], "Bufo bufo");
    assert_eq!(json["Author"], "Linnaeus, 1758");
    assert_eq!(json["Genere"], "Bufo");
    assert_eq!(json["Famiglia"], "Bufonidae");
    assert_eq!(json["Lo"], "y");
}

#[test]
fn raw_row_tracks_blank_rows() {
    let row: RawRow = [("Genere", " "), ("Specie", "")].into_iter().collect();
    assert!(row.is_blank());
    assert_eq!(row.len(), 2);
    assert_eq!(row.get("Genere"), Some(" "));
    assert_eq!(row.get("Sottospecie"), None);
}
