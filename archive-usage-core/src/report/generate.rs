use crate::conf::ReportConfig;
use crate::error::ReportError;
use crate::facet::{FacetName, UnknownFacetError};
use crate::record::{Project, RequestEvent};
use crate::report::{ProjectReport, aggregate_monthly, resample_quarters, yearly_totals};
use crate::stream::{EventSource, LineFilter, collect_events};
use std::path::PathBuf;
use tracing::{info, warn};

/// A validated report request. Building one never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub roots: Vec<PathBuf>,
    /// Breakdown facet for every project; `None` uses each project's default.
    pub facet: Option<FacetName>,
    pub projects: Vec<Project>,
}

impl ReportRequest {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            facet: None,
            projects: Project::ALL.to_vec(),
        }
    }

    /// Sets the grouping facet from its textual name.
    pub fn with_facet_name(mut self, name: Option<&str>) -> Result<Self, UnknownFacetError> {
        self.facet = name.map(str::parse).transpose()?;
        Ok(self)
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn from_config(cfg: &ReportConfig) -> Result<Self, UnknownFacetError> {
        Ok(Self::new(cfg.logs_path.clone())
            .with_facet_name(cfg.facet.as_deref())?
            .with_projects(cfg.projects.clone()))
    }

    pub fn breakdown_facet(&self, project: Project) -> FacetName {
        self.facet.unwrap_or_else(|| project.default_facet())
    }
}

/// Parses every log under the request's roots once, then builds two reports
/// per requested project, in project order: the totals, then the breakdown
/// by [`ReportRequest::breakdown_facet`].
///
/// # Errors
///
/// Any unparseable admitted line, unreadable file, or an empty set of parsed
/// events aborts the run. A requested project that simply has no events gets
/// empty reports.
pub fn generate(request: &ReportRequest) -> Result<Vec<ProjectReport>, ReportError> {
    let source = EventSource::new(request.roots.clone(), LineFilter::default());
    let events = collect_events(&source)?;

    let mut reports = Vec::with_capacity(request.projects.len() * 2);
    for &project in &request.projects {
        let project_events: Vec<&RequestEvent> =
            events.iter().filter(|e| e.project == project).collect();
        if project_events.is_empty() {
            warn!(%project, "no requests found for project");
        }

        reports.push(build_report(project, None, project_events.iter().copied()));
        reports.push(build_report(
            project,
            Some(request.breakdown_facet(project)),
            project_events.iter().copied(),
        ));
    }

    Ok(reports)
}

/// Runs the monthly and fiscal stages over one project's events.
pub fn build_report<'a, I>(project: Project, facet: Option<FacetName>, events: I) -> ProjectReport
where
    I: IntoIterator<Item = &'a RequestEvent>,
{
    let monthly = aggregate_monthly(events, facet);
    let quarterly = resample_quarters(&monthly);
    let yearly = yearly_totals(&quarterly);

    info!(
        %project,
        facet = facet.map(FacetName::as_str),
        months = monthly.len(),
        quarters = quarterly.len(),
        "built usage report"
    );

    ProjectReport {
        project,
        facet,
        monthly,
        quarterly,
        yearly,
    }
}
