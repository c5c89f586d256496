use crate::facet::{FacetName, Facets};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Path substring marking datasets republished in the CMIP6 collection.
pub const ALTERNATE_COLLECTION_MARKER: &str = "/E3SM-Project";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Project {
    /// Datasets published under the archive's own collection.
    #[serde(rename(serialize = "E3SM", deserialize = "e3sm"))]
    #[value(name = "e3sm")]
    Primary,

    /// Datasets republished inside the CMIP6 collection.
    #[serde(rename(serialize = "E3SM in CMIP6", deserialize = "e3sm-in-cmip6"))]
    #[value(name = "e3sm-in-cmip6")]
    PrimaryInAlternateCollection,
}

impl Project {
    pub const ALL: [Project; 2] = [Project::Primary, Project::PrimaryInAlternateCollection];

    pub fn from_path(path: &str) -> Self {
        if path.contains(ALTERNATE_COLLECTION_MARKER) {
            Project::PrimaryInAlternateCollection
        } else {
            Project::Primary
        }
    }

    /// Facet a breakdown report uses when none is requested. Time frequency
    /// only appears in native identifiers and activity only in CMIP6 ones.
    pub fn default_facet(self) -> FacetName {
        match self {
            Project::Primary => FacetName::TimeFrequency,
            Project::PrimaryInAlternateCollection => FacetName::Activity,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Project::Primary => "E3SM",
            Project::PrimaryInAlternateCollection => "E3SM in CMIP6",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.title())
    }
}

/// A single download request parsed from an access log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEvent {
    /// The original line, kept for diagnostics.
    pub raw_line: String,
    pub date: NaiveDate,
    pub requester_address: String,
    /// Request path with `%2F` decoded to `/`.
    pub url_path: String,
    /// Dot-joined directory segments after the marker segment, or empty.
    pub dataset_id: String,
    pub file_id: String,
    pub access_type: String,
    pub http_status: String,
    /// Zero when the log recorded the size as unknown (`-`).
    pub byte_count: u64,
    pub project: Project,
    pub facets: Facets,
}

impl RequestEvent {
    pub fn calendar_year(&self) -> i32 {
        self.date.year()
    }

    pub fn calendar_month(&self) -> u32 {
        self.date.month()
    }

    pub fn megabytes(&self) -> f64 {
        self.byte_count as f64 / BYTES_PER_MIB
    }

    /// Whether the request actually transferred data (full or partial content).
    pub fn is_served(&self) -> bool {
        matches!(self.http_status.as_str(), "200" | "206")
    }
}
