//! Checklist ingestion.
//!
//! Reads the delimited-text checklist from a local file, a URL, or any
//! reader, and turns every usable row into a [`herp_model::NormalizedRecord`].
//!
//! # Example
//!
//! ```ignore
//! use herp_ingest::{DatasetSource, LoadOptions, load_dataset};
//!
//! let source: DatasetSource = "data/checklist.csv".parse()?;
//! let dataset = load_dataset(&source, &LoadOptions::default())?;
//! println!("{} records", dataset.records.len());
//! ```

mod error;
mod loader;
mod normalize;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{Dataset, LoadOptions, load_dataset, read_dataset};

// === Normalization ===
pub use normalize::normalize_row;

// === Sources ===
pub use source::DatasetSource;
