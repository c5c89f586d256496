use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//-----------------------------------------------------------------------------
// Vocabularies
//-----------------------------------------------------------------------------

static REALM: &[&str] = &["ocean", "atmos", "land", "sea-ice"];

static DATA_TYPE: &[&str] = &["time-series", "climo", "model-output", "mapping", "restart"];

// Only present in native E3SM dataset identifiers.
static TIME_FREQUENCY: &[&str] = &[
    "3hr",
    "3hr_snap",
    "5day_snap",
    "6hr",
    "6hr_ave",
    "6hr_snap",
    "day",
    "day_cosp",
    "fixed",
    "mon",
    "monClim",
];

// Only present in CMIP6 dataset identifiers.
static ACTIVITY: &[&str] = &["C4MIP", "CMIP", "DAMIP", "ScenarioMIP"];

static SCIENCE_DRIVER: &[&str] = &["Biogeochemical Cycle", "Cryosphere", "Water Cycle"];

static CAMPAIGN: &[&str] = &["BGC-v1", "Cryosphere-v1", "DECK-v1", "HighResMIP-v1"];

//-----------------------------------------------------------------------------
// Facet names
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetName {
    Realm,
    DataType,
    TimeFrequency,
    Activity,
    ScienceDriver,
    Campaign,
}

impl FacetName {
    pub const ALL: [FacetName; 6] = [
        FacetName::Realm,
        FacetName::DataType,
        FacetName::TimeFrequency,
        FacetName::Activity,
        FacetName::ScienceDriver,
        FacetName::Campaign,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FacetName::Realm => "realm",
            FacetName::DataType => "data_type",
            FacetName::TimeFrequency => "time_frequency",
            FacetName::Activity => "activity",
            FacetName::ScienceDriver => "science_driver",
            FacetName::Campaign => "campaign",
        }
    }

    /// Candidate values in declaration order.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            FacetName::Realm => REALM,
            FacetName::DataType => DATA_TYPE,
            FacetName::TimeFrequency => TIME_FREQUENCY,
            FacetName::Activity => ACTIVITY,
            FacetName::ScienceDriver => SCIENCE_DRIVER,
            FacetName::Campaign => CAMPAIGN,
        }
    }
}

impl fmt::Display for FacetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown facet '{name}' (expected one of: realm, data_type, time_frequency, activity, science_driver, campaign)")]
pub struct UnknownFacetError {
    pub name: String,
}

impl FromStr for FacetName {
    type Err = UnknownFacetError;

    /// Accepts the snake_case names as well as their camelCase spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "realm" => Ok(FacetName::Realm),
            "data_type" | "dataType" => Ok(FacetName::DataType),
            "time_frequency" | "timeFrequency" => Ok(FacetName::TimeFrequency),
            "activity" => Ok(FacetName::Activity),
            "science_driver" | "scienceDriver" => Ok(FacetName::ScienceDriver),
            "campaign" => Ok(FacetName::Campaign),
            _ => Err(UnknownFacetError {
                name: s.to_string(),
            }),
        }
    }
}

//-----------------------------------------------------------------------------
// Facet values
//-----------------------------------------------------------------------------

/// Facet values assigned to one dataset identifier. `None` means no
/// vocabulary entry matched, which is a valid "unclassified" outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub realm: Option<&'static str>,
    pub data_type: Option<&'static str>,
    pub time_frequency: Option<&'static str>,
    pub activity: Option<&'static str>,
    pub science_driver: Option<&'static str>,
    pub campaign: Option<&'static str>,
}

impl Facets {
    pub fn get(&self, name: FacetName) -> Option<&'static str> {
        match name {
            FacetName::Realm => self.realm,
            FacetName::DataType => self.data_type,
            FacetName::TimeFrequency => self.time_frequency,
            FacetName::Activity => self.activity,
            FacetName::ScienceDriver => self.science_driver,
            FacetName::Campaign => self.campaign,
        }
    }

    pub(crate) fn set(&mut self, name: FacetName, value: Option<&'static str>) {
        let slot = match name {
            FacetName::Realm => &mut self.realm,
            FacetName::DataType => &mut self.data_type,
            FacetName::TimeFrequency => &mut self.time_frequency,
            FacetName::Activity => &mut self.activity,
            FacetName::ScienceDriver => &mut self.science_driver,
            FacetName::Campaign => &mut self.campaign,
        };
        *slot = value;
    }

    pub fn is_unclassified(&self) -> bool {
        FacetName::ALL.iter().all(|name| self.get(*name).is_none())
    }
}
