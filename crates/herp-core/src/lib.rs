//! Pure query engines over normalized checklist records.
//!
//! Every engine is a function of its inputs: the record collection is never
//! mutated, and each call recomputes its result in full.
//!
//! - [`filter`]: per-field, case-insensitive substring predicates (AND)
//! - [`sort`]: stable multi-key ordering and the interactive sort-key state
//! - [`aggregate`]: per-region presence counts and map shading
//! - [`view`]: the immutable view state threaded through the engines

pub mod aggregate;
pub mod filter;
pub mod sort;
pub mod view;

pub use aggregate::{AggregateStats, RegionShade, RegionalSummary, ResolutionTier, aggregate};
pub use filter::{FilterSet, filter_records};
pub use sort::{SortDirection, SortGesture, SortKey, SortState, sort_records};
pub use view::ViewState;
