mod args;
mod dump;
mod render;
#[cfg(test)]
mod tests;

pub use args::*;
pub use dump::*;
pub use render::*;

use crate::conf::OutputFormat;
use crate::error::ReportError;
use crate::facet::UnknownFacetError;
use crate::report::{ReportRequest, generate};
use std::io::{self, IsTerminal};
use tracing::info;

pub fn run(args: &ReportArgs) -> anyhow::Result<()> {
    let cfg = args.resolve()?;
    let request = ReportRequest::from_config(&cfg)?;

    info!(
        roots = ?request.roots,
        facet = ?request.facet,
        projects = ?request.projects,
        "generating usage report"
    );
    let reports = generate(&request)?;

    match cfg.format {
        OutputFormat::Table => {
            let opts = RenderOptions {
                monthly: cfg.monthly,
                color: io::stdout().is_terminal(),
            };
            for report in &reports {
                print!("{}", render_report(report, &opts));
            }
        }
        OutputFormat::Json => dump_json(&reports)?,
        OutputFormat::Yaml => dump_yaml(&reports)?,
    }

    Ok(())
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("error: {err}");
    if let Some(hint) = error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if err.downcast_ref::<UnknownFacetError>().is_some() {
        return Some(FACET_HINT);
    }

    match err.downcast_ref::<ReportError>()? {
        ReportError::UnknownFacet(_) => Some(FACET_HINT),

        ReportError::EmptyResult { .. } => Some(
            "No access-log line mentioning E3SM was found.\n\
             \n\
             Point --logs-path (or ACCESS_LOGS_PATH) at the directory holding the\n\
             Apache access logs. Files are only read from leaf directories.",
        ),

        ReportError::Parse { .. } => Some(
            "A download request did not match the expected access-log layout.\n\
             \n\
             Reports are only produced from fully parseable input; remove or fix\n\
             the offending line and run again.",
        ),

        _ => None,
    }
}

const FACET_HINT: &str = "Run `archive-usage vocab` to list the facets and their values.";
