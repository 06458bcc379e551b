//! Data model for the herpetofauna checklist viewer.
//!
//! Provides the raw row shape produced by the delimited-text reader, the
//! normalized record with its derived nomenclature fields, and the fixed
//! tables of Italian region codes and macro-regions.

pub mod error;
pub mod fields;
pub mod record;
pub mod region;

pub use error::{ModelError, Result};
pub use record::{NormalizedRecord, RawRow, Taxon};
pub use region::{MacroRegionCode, RegionCode, RegionValue};
