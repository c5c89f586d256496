use crate::conf::{ConfigError, ConfigOverrides, OutputFormat, ReportConfig, load_config};
use crate::record::Project;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Path to a TOML report config
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory (or single file) holding the access logs; may be repeated
    #[arg(long = "logs-path", short = 'l', env = "ACCESS_LOGS_PATH")]
    pub logs_path: Vec<PathBuf>,

    /// Break every project down by this facet instead of its default
    /// (time_frequency for e3sm, activity for e3sm-in-cmip6)
    #[arg(long, short)]
    pub facet: Option<String>,

    /// Only report on these projects
    #[arg(long = "project", short = 'p', value_enum)]
    pub projects: Vec<Project>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the monthly breakdown in table output
    #[arg(long)]
    pub monthly: bool,
}

impl ReportArgs {
    /// Loads the config file if one was given and layers the flags on top.
    pub fn resolve(&self) -> Result<ReportConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => ReportConfig::default(),
        };

        Ok(base.apply(ConfigOverrides {
            logs_path: self.logs_path.clone(),
            facet: self.facet.clone(),
            projects: self.projects.clone(),
            format: self.format,
            monthly: self.monthly,
        }))
    }
}
