use crate::cli::report::error_hint;
use crate::error::ReportError;
use crate::facet::UnknownFacetError;

#[test]
fn unknown_facet_points_at_vocab() {
    let err = anyhow::Error::new(UnknownFacetError {
        name: "x".to_string(),
    });

    let hint = error_hint(&err).unwrap();

    assert!(hint.contains("archive-usage vocab"));
}

#[test]
fn empty_result_points_at_logs_path() {
    let err = anyhow::Error::new(ReportError::EmptyResult { roots: vec![] });

    let hint = error_hint(&err).unwrap();

    assert!(hint.contains("--logs-path"));
}

#[test]
fn io_errors_have_no_hint() {
    let err = anyhow::Error::new(ReportError::io(
        "/nope",
        std::io::Error::from(std::io::ErrorKind::NotFound),
    ));

    assert!(error_hint(&err).is_none());
}
