/// Substring every download request for the archive's datasets carries.
pub const MARKER_TOKEN: &str = "E3SM";

/// Requests that are not dataset downloads: site assets, THREDDS catalog and
/// aggregation services, and auxiliary XML.
pub const EXCLUDED_SUBSTRINGS: &[&str] = &[
    "xml",
    "ico",
    "cmip6_variables",
    "html",
    "catalog",
    "aggregation",
];

/// Textual pre-filter applied before parsing, so lines that are not genuine
/// data-download requests never reach the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFilter {
    pub marker: &'static str,
    pub exclusions: &'static [&'static str],
}

impl Default for LineFilter {
    fn default() -> Self {
        Self {
            marker: MARKER_TOKEN,
            exclusions: EXCLUDED_SUBSTRINGS,
        }
    }
}

impl LineFilter {
    pub fn admits(&self, line: &str) -> bool {
        line.contains(self.marker) && !self.exclusions.iter().any(|ex| line.contains(ex))
    }
}
