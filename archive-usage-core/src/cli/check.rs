use crate::cli::report::ReportArgs;
use crate::report::ReportRequest;
use crate::stream::discover;

/// Validates the resolved configuration and counts the log files that a
/// report would read, without parsing any of them.
pub fn check(args: &ReportArgs) -> anyhow::Result<()> {
    let cfg = args.resolve()?;
    let request = ReportRequest::from_config(&cfg)?;

    println!("✔ Config loaded successfully");
    println!(
        "✔ projects: {}",
        request
            .projects
            .iter()
            .map(|&p| format!("{p} (by {})", request.breakdown_facet(p)))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let files = discover(&request.roots)?.count();
    println!(
        "✔ {} log files under {} root(s)",
        files,
        request.roots.len()
    );

    Ok(())
}
