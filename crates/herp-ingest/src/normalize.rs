//! Raw row to normalized record conversion.

use herp_model::fields;
use herp_model::{NormalizedRecord, RawRow, Taxon};

/// Converts a raw row into a record, or `None` when the row is unusable.
///
/// A row is unusable when its genus or species is blank after trimming.
/// Such rows are dropped silently; every other column passes through
/// untouched, both authorship columns included.
pub fn normalize_row(mut row: RawRow) -> Option<NormalizedRecord> {
    let taxon = Taxon {
        genus: row.take(fields::GENUS).unwrap_or_default(),
        subgenus: row.take(fields::SUBGENUS).unwrap_or_default(),
        species: row.take(fields::SPECIES).unwrap_or_default(),
        subspecies: row.take(fields::SUBSPECIES).unwrap_or_default(),
    };
    if !taxon.is_complete() {
        return None;
    }
    let species_author = row.take(fields::SPECIES_AUTHOR);
    let subspecies_author = row.take(fields::SUBSPECIES_AUTHOR);
    // Derived names in the source would shadow the computed ones.
    row.take(fields::SCIENTIFIC_NAME);
    row.take(fields::AUTHOR);
    Some(NormalizedRecord::new(
        taxon,
        species_author,
        subspecies_author,
        row.into_fields(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_normalize_composes_name_and_author() {
        let record = normalize_row(row(&[
            ("Famiglia", "Bufonidae"),
            ("Genere", "Bufo"),
            ("Sottogenere", "Epidalea"),
            ("Specie", "bufo"),
            ("Autore e anno specie", "(Linnaeus, 1758)"),
        ]))
        .expect("complete row");

        assert_eq!(record.scientific_name(), "Bufo (Epidalea) bufo");
        assert_eq!(record.author(), "(Linnaeus, 1758)");
        assert_eq!(record.value_of("Famiglia"), "Bufonidae");
    }

    #[test]
    fn test_normalize_subspecies_author_wins() {
        let record = normalize_row(row(&[
            ("Genere", "Bufo"),
            ("Specie", "bufo"),
            ("Sottospecie", "spinosus"),
            ("Autore e anno specie", "(Linnaeus, 1758)"),
            ("Autore e anno sottospecie", "Daudin, 1803"),
        ]))
        .expect("complete row");

        assert_eq!(record.scientific_name(), "Bufo bufo spinosus");
        assert_eq!(record.author(), "Daudin, 1803");
        assert_eq!(record.species_author(), Some("(Linnaeus, 1758)"));
    }

    #[test]
    fn test_normalize_missing_subspecies_author_is_empty() {
        let record = normalize_row(row(&[
            ("Genere", "Bufo"),
            ("Specie", "bufo"),
            ("Sottospecie", "spinosus"),
            ("Autore e anno specie", "(Linnaeus, 1758)"),
        ]))
        .expect("complete row");

        assert_eq!(record.author(), "");
    }

    #[test]
    fn test_normalize_author_is_verbatim() {
        let record = normalize_row(row(&[
            ("Genere", "Rana"),
            ("Specie", "dalmatina"),
            ("Autore e anno specie", "  Fitzinger in Bonaparte, 1838 "),
        ]))
        .expect("complete row");

        assert_eq!(record.author(), "  Fitzinger in Bonaparte, 1838 ");
    }

    #[test]
    fn test_normalize_rejects_missing_genus_or_species() {
        assert!(normalize_row(row(&[("Genere", "Rana")])).is_none());
        assert!(normalize_row(row(&[("Specie", "dalmatina")])).is_none());
        assert!(normalize_row(row(&[("Genere", "  "), ("Specie", "dalmatina")])).is_none());
        assert!(normalize_row(RawRow::new()).is_none());
    }

    proptest! {
        #[test]
        fn blank_genus_or_species_is_always_rejected(
            blank in "[ \t]{0,4}",
            other in "[a-z]{1,8}",
            genus_blank in any::<bool>(),
        ) {
            let (genus, species) = if genus_blank {
                (blank.clone(), other.clone())
            } else {
                (other.clone(), blank.clone())
            };
            let raw = row(&[
                ("Genere", genus.as_str()),
                ("Specie", species.as_str()),
                ("Sottospecie", "x"),
            ]);
            prop_assert!(normalize_row(raw).is_none());
        }

        #[test]
        fn complete_rows_always_normalize(
            genus in "[A-Z][a-z]{1,8}",
            species in "[a-z]{1,8}",
        ) {
            let raw = row(&[("Genere", genus.as_str()), ("Specie", species.as_str())]);
            let record = normalize_row(raw).expect("complete row");
            prop_assert_eq!(record.scientific_name(), format!("{genus} {species}"));
        }
    }
}
