use crate::conf::{ConfigError, ReportConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a report configuration file.
///
/// ```toml
/// logs_path = ["/var/log/esgf/access_logs"]
/// facet = "time_frequency"
/// projects = ["e3sm"]
/// format = "table"
/// monthly = true
/// ```
///
/// Every key is optional. The facet name is kept as written here and only
/// checked when a report is requested (or by `archive-usage check`).
pub fn load_config(path: &Path) -> Result<ReportConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: ReportConfig = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    debug!(path = %path.display(), "loaded report config");
    Ok(cfg)
}
