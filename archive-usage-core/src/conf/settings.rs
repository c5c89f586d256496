use crate::record::Project;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOGS_PATH: &str = "access_logs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// One root or a list of roots to scan for access logs.
    #[serde(default = "default_logs_path", deserialize_with = "one_or_many")]
    pub logs_path: Vec<PathBuf>,

    /// Breakdown facet for every project; unset uses each project's default.
    #[serde(default)]
    pub facet: Option<String>,

    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Include the monthly breakdown in table output.
    #[serde(default)]
    pub monthly: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            logs_path: default_logs_path(),
            facet: None,
            projects: default_projects(),
            format: OutputFormat::default(),
            monthly: false,
        }
    }
}

/// Values given on the command line. Anything set here wins over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub logs_path: Vec<PathBuf>,
    pub facet: Option<String>,
    pub projects: Vec<Project>,
    pub format: Option<OutputFormat>,
    pub monthly: bool,
}

impl ReportConfig {
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if !overrides.logs_path.is_empty() {
            self.logs_path = overrides.logs_path;
        }
        if overrides.facet.is_some() {
            self.facet = overrides.facet;
        }
        if !overrides.projects.is_empty() {
            self.projects = overrides.projects;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self.monthly |= overrides.monthly;
        self
    }
}

fn default_logs_path() -> Vec<PathBuf> {
    vec![PathBuf::from(DEFAULT_LOGS_PATH)]
}

fn default_projects() -> Vec<Project> {
    Project::ALL.to_vec()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(PathBuf),
        Many(Vec<PathBuf>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(path) => Ok(vec![path]),
        OneOrMany::Many(paths) => Ok(paths),
    }
}
