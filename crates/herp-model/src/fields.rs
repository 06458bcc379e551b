//! Column headers read by the core logic.
//!
//! Header names come straight from the published checklist, so they are
//! Italian and may contain spaces.

pub const GENUS: &str = "Genere";
pub const SUBGENUS: &str = "Sottogenere";
pub const SPECIES: &str = "Specie";
pub const SUBSPECIES: &str = "Sottospecie";
pub const SPECIES_AUTHOR: &str = "Autore e anno specie";
pub const SUBSPECIES_AUTHOR: &str = "Autore e anno sottospecie";
pub const FAMILY: &str = "Famiglia";

/// Derived composite name.
pub const SCIENTIFIC_NAME: &str = "ScientificName";
/// Derived canonical authorship.
pub const AUTHOR: &str = "Author";

/// Fields with a typed slot on [`crate::NormalizedRecord`].
pub const TYPED_FIELDS: [&str; 8] = [
    SCIENTIFIC_NAME,
    AUTHOR,
    GENUS,
    SUBGENUS,
    SPECIES,
    SUBSPECIES,
    SPECIES_AUTHOR,
    SUBSPECIES_AUTHOR,
];

/// Returns true if the header is one of the typed fields.
pub fn is_typed_field(name: &str) -> bool {
    TYPED_FIELDS.contains(&name)
}
