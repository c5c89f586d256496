use crate::cli::report::ReportArgs;
use crate::conf::{DEFAULT_LOGS_PATH, OutputFormat};
use crate::record::Project;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn bare_args_resolve_to_default_logs_path() {
    let cfg = ReportArgs::default().resolve().unwrap();

    assert_eq!(cfg.logs_path, vec![PathBuf::from(DEFAULT_LOGS_PATH)]);
    assert_eq!(cfg.facet, None);
    assert_eq!(cfg.projects, Project::ALL.to_vec());
}

#[test]
fn flags_apply_without_a_config_file() {
    let args = ReportArgs {
        logs_path: vec![PathBuf::from("/srv/logs")],
        facet: Some("realm".to_string()),
        projects: vec![Project::Primary],
        format: Some(OutputFormat::Yaml),
        monthly: true,
        ..ReportArgs::default()
    };

    let cfg = args.resolve().unwrap();

    assert_eq!(cfg.logs_path, vec![PathBuf::from("/srv/logs")]);
    assert_eq!(cfg.facet.as_deref(), Some("realm"));
    assert_eq!(cfg.projects, vec![Project::Primary]);
    assert_eq!(cfg.format, OutputFormat::Yaml);
    assert!(cfg.monthly);
}
