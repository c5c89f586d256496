use archive_usage_core::ReportError;
use archive_usage_core::facet::FacetName;
use archive_usage_core::record::{MalformedReason, ParseError, Project};
use archive_usage_core::report::{FiscalQuarter, FiscalYear, ReportRequest, generate};
use chrono::NaiveDate;
use integration_tests::harness::{CMIP6_PATH, E3SM_PATH, LogTree, access_line};
use pretty_assertions::assert_eq;

fn july_2019_tree() -> LogTree {
    LogTree::new().with_log(
        "2019/access_log",
        &[
            access_line("15/Jul/2019", E3SM_PATH, 200, "2097152"),
            access_line("20/Jul/2019", E3SM_PATH, 404, "-"),
            // Filtered: no marker token, then an excluded catalog request.
            access_line("21/Jul/2019", "/thredds/fileServer/other/file.nc", 200, "10"),
            access_line("22/Jul/2019", "/thredds/catalog/E3SM/catalog.xml", 200, "10"),
        ],
    )
}

#[test]
fn builds_fiscal_report_from_log_tree() {
    // Arrange
    let tree = july_2019_tree();
    let request = ReportRequest::new(vec![tree.root()]);

    // Act
    let reports = generate(&request).expect("report failed");

    // Assert
    assert_eq!(reports.len(), 4);
    let e3sm = &reports[0];
    assert_eq!(e3sm.project, Project::Primary);
    assert_eq!(e3sm.facet, None);

    assert_eq!(e3sm.monthly.len(), 1);
    let july = &e3sm.monthly[0];
    assert_eq!((july.calendar_year, july.calendar_month), (2019, 7));
    assert_eq!(july.requests, 2);
    assert!((july.gb - 0.001_953_125).abs() < 1e-9);

    assert_eq!(e3sm.quarterly.len(), 1);
    let q1 = &e3sm.quarterly[0];
    assert_eq!(q1.fiscal_year, FiscalYear(2020));
    assert_eq!(q1.fiscal_quarter, FiscalQuarter::Q1);
    assert_eq!(q1.requests, 2);
    assert_eq!(q1.bytes, 2_097_152);
    assert_eq!(q1.start_date, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap());
    assert_eq!(q1.end_date, NaiveDate::from_ymd_opt(2019, 9, 30).unwrap());

    assert_eq!(e3sm.yearly.len(), 1);
    assert_eq!(e3sm.yearly[0].requests, 2);

    let by_frequency = &reports[1];
    assert_eq!(by_frequency.facet, Some(FacetName::TimeFrequency));
    assert_eq!(by_frequency.quarterly[0].facet_value, Some("mon"));
    assert_eq!(by_frequency.quarterly[0].requests, 2);

    for cmip6 in &reports[2..] {
        assert_eq!(cmip6.project, Project::PrimaryInAlternateCollection);
        assert!(cmip6.is_empty());
    }
    assert_eq!(reports[3].facet, Some(FacetName::Activity));
}

#[test]
fn splits_projects_and_groups_by_facet() {
    // Arrange
    let tree = LogTree::new()
        .with_log(
            "a/access_log",
            &[
                access_line("30/Jun/2020", E3SM_PATH, 200, "100"),
                access_line("01/Jul/2020", CMIP6_PATH, 206, "50"),
            ],
        )
        .with_log(
            "b/access_log",
            &[access_line("01/Jul/2020", CMIP6_PATH, 200, "25")],
        );
    let request = ReportRequest::new(vec![tree.root()])
        .with_facet_name(Some("activity"))
        .unwrap();

    // Act
    let reports = generate(&request).unwrap();

    // Assert
    assert_eq!(reports.len(), 4);
    let e3sm = &reports[1];
    assert_eq!(e3sm.facet, Some(FacetName::Activity));
    assert_eq!(e3sm.quarterly.len(), 1);
    assert_eq!(e3sm.quarterly[0].fiscal_year, FiscalYear(2020));
    assert_eq!(e3sm.quarterly[0].fiscal_quarter, FiscalQuarter::Q4);
    assert_eq!(e3sm.quarterly[0].facet_value, None);

    let cmip6 = &reports[3];
    assert_eq!(cmip6.facet, Some(FacetName::Activity));
    assert_eq!(cmip6.quarterly.len(), 1);
    let q1 = &cmip6.quarterly[0];
    assert_eq!(q1.fiscal_year, FiscalYear(2021));
    assert_eq!(q1.fiscal_quarter, FiscalQuarter::Q1);
    assert_eq!(q1.facet_value, Some("CMIP"));
    assert_eq!((q1.requests, q1.bytes), (2, 75));
}

#[test]
fn only_requested_projects_are_reported() {
    let tree = july_2019_tree();
    let request =
        ReportRequest::new(vec![tree.root()]).with_projects(vec![Project::PrimaryInAlternateCollection]);

    let reports = generate(&request).unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.project == Project::PrimaryInAlternateCollection));
    assert!(reports.iter().all(|r| r.is_empty()));
}

#[test]
fn unknown_facet_is_rejected_before_reading_logs() {
    // Act
    let err = ReportRequest::new(vec!["/does/not/exist".into()])
        .with_facet_name(Some("colour"))
        .unwrap_err();

    // Assert
    assert_eq!(err.name, "colour");
}

#[test]
fn filtered_only_logs_are_an_empty_result() {
    let tree = LogTree::new().with_log(
        "access_log",
        &[access_line("01/Jan/2020", "/thredds/catalog/E3SM/catalog.html", 200, "1")],
    );

    let err = generate(&ReportRequest::new(vec![tree.root()])).unwrap_err();

    assert!(matches!(err, ReportError::EmptyResult { .. }));
}

#[test]
fn malformed_line_aborts_with_location() {
    // Arrange
    let tree = LogTree::new().with_log(
        "access_log",
        &[
            access_line("15/Jul/2019", E3SM_PATH, 200, "1"),
            "128.55.1.1 - - [15/Jul/2019:03:18:49 -0700] \"GET /E3SM\"".to_string(),
        ],
    );

    // Act
    let err = generate(&ReportRequest::new(vec![tree.root()])).unwrap_err();

    // Assert
    let ReportError::Parse {
        path,
        line_number,
        source,
    } = &err
    else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(path.file_name().unwrap(), "access_log");
    assert_eq!(*line_number, 2);
    assert!(matches!(
        source,
        ParseError::MalformedLine {
            reason: MalformedReason::TooFewFields { .. },
            ..
        }
    ));
}

#[test]
fn reports_serialize_with_fiscal_labels() {
    let tree = july_2019_tree();
    let reports = generate(&ReportRequest::new(vec![tree.root()])).unwrap();

    let json = serde_json::to_value(&reports).unwrap();

    assert_eq!(json[0]["project"], "E3SM");
    assert_eq!(json[0]["facet"], serde_json::Value::Null);
    assert_eq!(json[1]["project"], "E3SM");
    assert_eq!(json[1]["facet"], "time_frequency");
    assert_eq!(json[2]["project"], "E3SM in CMIP6");
    assert_eq!(json[3]["facet"], "activity");
    let q1 = &json[0]["quarterly"][0];
    assert_eq!(q1["fiscal_year"], "2020");
    assert_eq!(q1["fiscal_quarter"], 1);
    assert_eq!(q1["start_date"], "2019-07-01");
    let july = &json[0]["monthly"][0];
    assert_eq!(july["fiscal_month"], 1);
    assert_eq!(july["requests"], 2);
}
