//! Italian administrative regions, associated territories, and macro-regions.
//!
//! Region codes double as the column headers under which each record stores
//! its presence state. The island codes `Si` and `Sa` are both a concrete
//! region and a macro-region.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the 20 Italian regions or the 5 associated territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    #[serde(rename = "Pi")]
    Piemonte,
    #[serde(rename = "VA")]
    ValleDAosta,
    #[serde(rename = "Lo")]
    Lombardia,
    #[serde(rename = "TAA")]
    TrentinoAltoAdige,
    #[serde(rename = "Ve")]
    Veneto,
    #[serde(rename = "FVG")]
    FriuliVeneziaGiulia,
    #[serde(rename = "Li")]
    Liguria,
    #[serde(rename = "ER")]
    EmiliaRomagna,
    #[serde(rename = "To")]
    Toscana,
    #[serde(rename = "Um")]
    Umbria,
    #[serde(rename = "Ma")]
    Marche,
    #[serde(rename = "La")]
    Lazio,
    #[serde(rename = "Ab")]
    Abruzzo,
    #[serde(rename = "Mo")]
    Molise,
    #[serde(rename = "Ca")]
    Campania,
    #[serde(rename = "Pu")]
    Puglia,
    #[serde(rename = "Ba")]
    Basilicata,
    #[serde(rename = "Cl")]
    Calabria,
    #[serde(rename = "Si")]
    Sicilia,
    #[serde(rename = "Sa")]
    Sardegna,
    #[serde(rename = "SM")]
    SanMarino,
    #[serde(rename = "VC")]
    CittaDelVaticano,
    #[serde(rename = "CT")]
    CantonTicino,
    #[serde(rename = "Co")]
    Corsica,
    #[serde(rename = "Mt")]
    Malta,
}

impl RegionCode {
    /// All region codes in display order.
    pub const ALL: [RegionCode; 25] = [
        Self::Piemonte,
        Self::ValleDAosta,
        Self::Lombardia,
        Self::TrentinoAltoAdige,
        Self::Veneto,
        Self::FriuliVeneziaGiulia,
        Self::Liguria,
        Self::EmiliaRomagna,
        Self::Toscana,
        Self::Umbria,
        Self::Marche,
        Self::Lazio,
        Self::Abruzzo,
        Self::Molise,
        Self::Campania,
        Self::Puglia,
        Self::Basilicata,
        Self::Calabria,
        Self::Sicilia,
        Self::Sardegna,
        Self::SanMarino,
        Self::CittaDelVaticano,
        Self::CantonTicino,
        Self::Corsica,
        Self::Malta,
    ];

    /// Short code, also the column header in the source data.
    pub fn code(self) -> &'static str {
        match self {
            Self::Piemonte => "Pi",
            Self::ValleDAosta => "VA",
            Self::Lombardia => "Lo",
            Self::TrentinoAltoAdige => "TAA",
            Self::Veneto => "Ve",
            Self::FriuliVeneziaGiulia => "FVG",
            Self::Liguria => "Li",
            Self::EmiliaRomagna => "ER",
            Self::Toscana => "To",
            Self::Umbria => "Um",
            Self::Marche => "Ma",
            Self::Lazio => "La",
            Self::Abruzzo => "Ab",
            Self::Molise => "Mo",
            Self::Campania => "Ca",
            Self::Puglia => "Pu",
            Self::Basilicata => "Ba",
            Self::Calabria => "Cl",
            Self::Sicilia => "Si",
            Self::Sardegna => "Sa",
            Self::SanMarino => "SM",
            Self::CittaDelVaticano => "VC",
            Self::CantonTicino => "CT",
            Self::Corsica => "Co",
            Self::Malta => "Mt",
        }
    }

    /// Italian display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Piemonte => "Piemonte",
            Self::ValleDAosta => "Valle d'Aosta",
            Self::Lombardia => "Lombardia",
            Self::TrentinoAltoAdige => "Trentino-Alto Adige",
            Self::Veneto => "Veneto",
            Self::FriuliVeneziaGiulia => "Friuli-Venezia Giulia",
            Self::Liguria => "Liguria",
            Self::EmiliaRomagna => "Emilia-Romagna",
            Self::Toscana => "Toscana",
            Self::Umbria => "Umbria",
            Self::Marche => "Marche",
            Self::Lazio => "Lazio",
            Self::Abruzzo => "Abruzzo",
            Self::Molise => "Molise",
            Self::Campania => "Campania",
            Self::Puglia => "Puglia",
            Self::Basilicata => "Basilicata",
            Self::Calabria => "Calabria",
            Self::Sicilia => "Sicilia",
            Self::Sardegna => "Sardegna",
            Self::SanMarino => "San Marino",
            Self::CittaDelVaticano => "Città del Vaticano",
            Self::CantonTicino => "Canton Ticino",
            Self::Corsica => "Corsica",
            Self::Malta => "Malta",
        }
    }

    /// Macro-region the territory belongs to.
    ///
    /// Malta sits outside the four macro-regions and returns `None`.
    pub fn macro_region(self) -> Option<MacroRegionCode> {
        match self {
            Self::Piemonte
            | Self::ValleDAosta
            | Self::Lombardia
            | Self::TrentinoAltoAdige
            | Self::Veneto
            | Self::FriuliVeneziaGiulia
            | Self::Liguria
            | Self::EmiliaRomagna
            | Self::SanMarino
            | Self::CantonTicino => Some(MacroRegionCode::North),
            Self::Toscana
            | Self::Umbria
            | Self::Marche
            | Self::Lazio
            | Self::Abruzzo
            | Self::Molise
            | Self::Campania
            | Self::Puglia
            | Self::Basilicata
            | Self::Calabria
            | Self::CittaDelVaticano
            | Self::Corsica => Some(MacroRegionCode::South),
            Self::Sicilia => Some(MacroRegionCode::Sicily),
            Self::Sardegna => Some(MacroRegionCode::Sardinia),
            Self::Malta => None,
        }
    }

    /// True for the island codes that share their column with a macro-region.
    pub fn is_macro_column(self) -> bool {
        matches!(self, Self::Sicilia | Self::Sardegna)
    }

    /// Maps a boundary-dataset region name to its code.
    ///
    /// Matching ignores case and punctuation. Unknown names return `None`.
    pub fn from_geo_name(name: &str) -> Option<Self> {
        let key = normalize_geo_name(name);
        let code = match key.as_str() {
            "piemonte" | "piedmont" => Self::Piemonte,
            "valle d aosta" | "valle d aosta vallée d aoste" | "vallée d aoste"
            | "aosta valley" => Self::ValleDAosta,
            "lombardia" | "lombardy" => Self::Lombardia,
            "trentino alto adige" | "trentino alto adige südtirol" | "trentino south tyrol" => {
                Self::TrentinoAltoAdige
            }
            "veneto" => Self::Veneto,
            "friuli venezia giulia" => Self::FriuliVeneziaGiulia,
            "liguria" => Self::Liguria,
            "emilia romagna" => Self::EmiliaRomagna,
            "toscana" | "tuscany" => Self::Toscana,
            "umbria" => Self::Umbria,
            "marche" => Self::Marche,
            "lazio" => Self::Lazio,
            "abruzzo" => Self::Abruzzo,
            "molise" => Self::Molise,
            "campania" => Self::Campania,
            "puglia" | "apulia" => Self::Puglia,
            "basilicata" => Self::Basilicata,
            "calabria" => Self::Calabria,
            "sicilia" | "sicily" => Self::Sicilia,
            "sardegna" | "sardinia" => Self::Sardegna,
            "san marino" => Self::SanMarino,
            "città del vaticano" | "vaticano" | "vatican city" | "holy see" => {
                Self::CittaDelVaticano
            }
            "ticino" | "canton ticino" | "cantone ticino" => Self::CantonTicino,
            "corsica" | "corse" => Self::Corsica,
            "malta" => Self::Malta,
            _ => return None,
        };
        Some(code)
    }
}

fn normalize_geo_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RegionCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.code() == trimmed)
            .ok_or_else(|| ModelError::UnknownRegion(trimmed.to_string()))
    }
}

/// Coarse partition used by datasets without per-region columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MacroRegionCode {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "Si")]
    Sicily,
    #[serde(rename = "Sa")]
    Sardinia,
}

impl MacroRegionCode {
    pub const ALL: [MacroRegionCode; 4] = [Self::North, Self::South, Self::Sicily, Self::Sardinia];

    /// Column header for the macro-region.
    pub fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::Sicily => "Si",
            Self::Sardinia => "Sa",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::North => "Nord",
            Self::South => "Centro-Sud",
            Self::Sicily => "Sicilia",
            Self::Sardinia => "Sardegna",
        }
    }

    /// Concrete regions inheriting this macro-region's data.
    pub fn members(self) -> Vec<RegionCode> {
        RegionCode::ALL
            .into_iter()
            .filter(|code| code.macro_region() == Some(self))
            .collect()
    }
}

impl fmt::Display for MacroRegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MacroRegionCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.code() == trimmed)
            .ok_or_else(|| ModelError::UnknownMacroRegion(trimmed.to_string()))
    }
}

/// Presence of a taxon in a region: `y`, `?`, or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionValue {
    Present,
    Doubtful,
    Absent,
}

impl RegionValue {
    /// Reads a stored cell. Only an exact `y` or `?` is recognized.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "y" => Self::Present,
            "?" => Self::Doubtful,
            _ => Self::Absent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "y",
            Self::Doubtful => "?",
            Self::Absent => "",
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}
