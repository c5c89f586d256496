use crate::facet::FacetName;
use crate::record::{Project, RequestEvent};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Binary gigabytes (GiB).
pub fn gigabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

/// Request and byte totals. Requests count every event; bytes only count
/// events that were actually served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub requests: u64,
    pub bytes: u64,
}

impl Usage {
    pub fn record(&mut self, event: &RequestEvent) {
        self.requests += 1;
        if event.is_served() {
            self.bytes += event.byte_count;
        }
    }

    pub fn add(&mut self, other: Usage) {
        self.requests += other.requests;
        self.bytes += other.bytes;
    }
}

//-----------------------------------------------------------------------------
// Fiscal calendar
//-----------------------------------------------------------------------------

/// Fiscal year, named after the calendar year in which it ends (FY2020 runs
/// July 2019 through June 2020).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FiscalYear(pub i32);

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for FiscalYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FiscalQuarter {
    /// July to September.
    Q1,
    /// October to December.
    Q2,
    /// January to March.
    Q3,
    /// April to June.
    Q4,
}

impl FiscalQuarter {
    pub fn number(self) -> u8 {
        match self {
            FiscalQuarter::Q1 => 1,
            FiscalQuarter::Q2 => 2,
            FiscalQuarter::Q3 => 3,
            FiscalQuarter::Q4 => 4,
        }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            FiscalQuarter::Q1 => "Q1",
            FiscalQuarter::Q2 => "Q2",
            FiscalQuarter::Q3 => "Q3",
            FiscalQuarter::Q4 => "Q4",
        })
    }
}

impl Serialize for FiscalQuarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// Where a calendar month sits in the fiscal calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiscalPeriod {
    pub fiscal_year: FiscalYear,
    pub fiscal_quarter: FiscalQuarter,
    /// 1 = July ... 12 = June.
    pub fiscal_month: u32,
}

//-----------------------------------------------------------------------------
// Buckets
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub calendar_year: i32,
    pub calendar_month: u32,
    #[serde(flatten)]
    pub fiscal: FiscalPeriod,
    /// Only meaningful when the report is grouped by a facet; `None` there
    /// is the unclassified group.
    pub facet_value: Option<&'static str>,
    pub requests: u64,
    pub bytes: u64,
    pub gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiscalQuarterBucket {
    pub fiscal_year: FiscalYear,
    pub fiscal_quarter: FiscalQuarter,
    pub facet_value: Option<&'static str>,
    pub requests: u64,
    pub bytes: u64,
    pub gb: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiscalYearSummary {
    pub fiscal_year: FiscalYear,
    pub facet_value: Option<&'static str>,
    pub requests: u64,
    pub bytes: u64,
    pub gb: f64,
}

/// Everything produced for one project in one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectReport {
    pub project: Project,
    pub facet: Option<FacetName>,
    pub monthly: Vec<MonthlyBucket>,
    pub quarterly: Vec<FiscalQuarterBucket>,
    pub yearly: Vec<FiscalYearSummary>,
}

impl ProjectReport {
    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }
}
