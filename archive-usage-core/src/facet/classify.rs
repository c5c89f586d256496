use crate::facet::{FacetName, Facets};
use tracing::debug;

/// Path component after which the dataset-identifying segments begin.
pub const MARKER_SEGMENT: &str = "user_pub_work";

/// Assigns facet values to a dot-delimited dataset identifier.
///
/// Each vocabulary is scanned in declaration order and every hit replaces the
/// previous candidate, so when several entries appear as segments the one
/// declared last in the vocabulary wins (not the one appearing last in the
/// identifier).
pub fn classify(dataset_id: &str) -> Facets {
    let segments: Vec<&str> = dataset_id.split('.').collect();
    let mut facets = Facets::default();

    for name in FacetName::ALL {
        let mut candidate = None;
        for option in name.vocabulary() {
            if segments.contains(option) {
                candidate = Some(*option);
            }
        }
        facets.set(name, candidate);
    }

    facets
}

/// Derives the dataset identifier from a request path: every segment after
/// [`MARKER_SEGMENT`] except the file name, joined with `.`.
///
/// Redirects and error responses usually carry paths without the marker;
/// those yield an empty identifier.
pub fn dataset_id(path: &str) -> String {
    let mut segments = path.split('/');
    if !segments.any(|segment| segment == MARKER_SEGMENT) {
        debug!(path, "request path has no dataset marker segment");
        return String::new();
    }

    let rest: Vec<&str> = segments.collect();
    match rest.split_last() {
        Some((_file, directories)) => directories.join("."),
        None => String::new(),
    }
}

/// Final path segment.
pub fn file_id(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
