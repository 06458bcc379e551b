//! Regional presence counts and map shading.
//!
//! A record collection is summarized at one of two resolutions. When every
//! record carries at least one per-region value the counts are kept per
//! region; otherwise they are kept per macro-region and each region inherits
//! the count of its macro-region.
//!
//! Shading has two modes that are deliberately not unified:
//!
//! - exactly one record: the stored presence value picks a category
//! - zero or several records: counts are scaled linearly into `[0, 1]`

use std::collections::BTreeMap;

use herp_model::{MacroRegionCode, NormalizedRecord, RegionCode, RegionValue};
use serde::Serialize;
use tracing::debug;

/// Resolution at which a collection can be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionTier {
    Regional,
    Macro,
}

impl ResolutionTier {
    /// `Regional` iff the collection is non-empty and every record has a
    /// non-blank value in at least one per-region column.
    ///
    /// The island columns `Si` and `Sa` are shared with the macro-regions and
    /// count as per-region data only on records without `N`/`S` values.
    pub fn detect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a NormalizedRecord>,
    {
        let mut seen = false;
        for record in records {
            seen = true;
            if !has_regional_data(record) {
                return Self::Macro;
            }
        }
        if seen { Self::Regional } else { Self::Macro }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regional => "regional",
            Self::Macro => "macro",
        }
    }
}

/// `Si`/`Sa` are both region and macro-region columns, so an island value
/// only counts as regional data when the mainland macro columns are blank.
fn has_regional_data(record: &NormalizedRecord) -> bool {
    let filled = |code: &str| !record.value_of(code).trim().is_empty();
    let mainland = RegionCode::ALL
        .into_iter()
        .filter(|code| !code.is_macro_column())
        .any(|code| filled(code.code()));
    let island = RegionCode::ALL
        .into_iter()
        .filter(|code| code.is_macro_column())
        .any(|code| filled(code.code()));
    let mainland_macro = [MacroRegionCode::North, MacroRegionCode::South]
        .into_iter()
        .any(|code| filled(code.code()));
    mainland || (island && !mainland_macro)
}

/// Count of records marked present, per key of the active tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", content = "counts", rename_all = "lowercase")]
pub enum AggregateStats {
    Regional(BTreeMap<RegionCode, usize>),
    Macro(BTreeMap<MacroRegionCode, usize>),
}

impl AggregateStats {
    pub fn tier(&self) -> ResolutionTier {
        match self {
            Self::Regional(_) => ResolutionTier::Regional,
            Self::Macro(_) => ResolutionTier::Macro,
        }
    }

    /// Count shown for a region, inherited from its macro-region in the
    /// macro tier. `None` for a region outside every macro-region.
    pub fn count(&self, region: RegionCode) -> Option<usize> {
        match self {
            Self::Regional(counts) => counts.get(&region).copied(),
            Self::Macro(counts) => region
                .macro_region()
                .and_then(|parent| counts.get(&parent).copied()),
        }
    }

    /// Smallest and largest count, with the largest raised to at least 1.
    pub fn bounds(&self) -> (usize, usize) {
        let values: Vec<usize> = match self {
            Self::Regional(counts) => counts.values().copied().collect(),
            Self::Macro(counts) => counts.values().copied().collect(),
        };
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0).max(1);
        (min, max)
    }
}

/// Map shading for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "intensity", rename_all = "snake_case")]
pub enum RegionShade {
    /// Single record, marked present.
    Present,
    /// Single record, marked doubtful.
    Doubtful,
    /// Single record, not marked.
    Absent,
    /// Several records, none present here.
    NoData,
    /// Several records, scaled count in `[0, 1]`.
    Intensity(f64),
    /// Geographic name with no region code.
    Unknown,
}

impl From<RegionValue> for RegionShade {
    fn from(value: RegionValue) -> Self {
        match value {
            RegionValue::Present => Self::Present,
            RegionValue::Doubtful => Self::Doubtful,
            RegionValue::Absent => Self::Absent,
        }
    }
}

/// Stored values of the only record in a singleton collection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SingletonValues {
    regions: BTreeMap<RegionCode, RegionValue>,
}

impl SingletonValues {
    fn capture(record: &NormalizedRecord, tier: ResolutionTier) -> Self {
        let regions = RegionCode::ALL
            .into_iter()
            .map(|code| {
                let value = match tier {
                    ResolutionTier::Regional => record.region_value(code.code()),
                    ResolutionTier::Macro => code
                        .macro_region()
                        .map_or(RegionValue::Absent, |parent| {
                            record.region_value(parent.code())
                        }),
                };
                (code, value)
            })
            .collect();
        Self { regions }
    }
}

/// Summary of a filtered collection for the map view.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalSummary {
    record_count: usize,
    stats: AggregateStats,
    singleton: Option<SingletonValues>,
}

impl RegionalSummary {
    pub fn tier(&self) -> ResolutionTier {
        self.stats.tier()
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// True when shading is categorical (exactly one record).
    pub fn is_singleton(&self) -> bool {
        self.singleton.is_some()
    }

    /// Shade for a region.
    pub fn shade(&self, region: RegionCode) -> RegionShade {
        if let Some(values) = &self.singleton {
            let value = values
                .regions
                .get(&region)
                .copied()
                .unwrap_or(RegionValue::Absent);
            return value.into();
        }
        let Some(count) = self.stats.count(region).filter(|count| *count > 0) else {
            return RegionShade::NoData;
        };
        let (min, max) = self.stats.bounds();
        if max == min {
            return RegionShade::Intensity(1.0);
        }
        let scaled = count.saturating_sub(min) as f64 / (max - min) as f64;
        RegionShade::Intensity(scaled.clamp(0.0, 1.0))
    }

    /// Shade for a boundary-dataset region name; unmapped names are `Unknown`.
    pub fn shade_for_geo_name(&self, name: &str) -> RegionShade {
        RegionCode::from_geo_name(name).map_or(RegionShade::Unknown, |code| self.shade(code))
    }

    /// Every region with its shade, in display order.
    pub fn shades(&self) -> Vec<(RegionCode, RegionShade)> {
        RegionCode::ALL
            .into_iter()
            .map(|code| (code, self.shade(code)))
            .collect()
    }
}

/// Summarizes a (filtered) record collection.
pub fn aggregate<'a, I>(records: I) -> RegionalSummary
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let records: Vec<&NormalizedRecord> = records.into_iter().collect();
    let tier = ResolutionTier::detect(records.iter().copied());
    let stats = match tier {
        ResolutionTier::Regional => AggregateStats::Regional(
            RegionCode::ALL
                .into_iter()
                .map(|code| (code, count_present(&records, code.code())))
                .collect(),
        ),
        ResolutionTier::Macro => AggregateStats::Macro(
            MacroRegionCode::ALL
                .into_iter()
                .map(|code| (code, count_present(&records, code.code())))
                .collect(),
        ),
    };
    let singleton = match records.as_slice() {
        [only] => Some(SingletonValues::capture(only, tier)),
        _ => None,
    };
    debug!(
        records = records.len(),
        tier = tier.as_str(),
        singleton = singleton.is_some(),
        "regional summary computed"
    );
    RegionalSummary {
        record_count: records.len(),
        stats,
        singleton,
    }
}

fn count_present(records: &[&NormalizedRecord], column: &str) -> usize {
    records
        .iter()
        .filter(|record| record.region_value(column).is_present())
        .count()
}
