use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const E3SM_PATH: &str = "/thredds/fileServer/user_pub_work/E3SM/1_0/historical/\
1deg_atm_60-30km_ocean/atmos/180x360/model-output/mon/ens1/v1/file.nc";

pub const CMIP6_PATH: &str = "/thredds/fileServer/user_pub_work/CMIP6/CMIP/E3SM-Project/\
E3SM-1-0/historical/r1i1p1f1/Amon/tas/gr/v20190913/\
tas_Amon_E3SM-1-0_historical_r1i1p1f1_gr_185001-189912.nc";

/// One Apache combined-format line requesting `path` on `date`
/// (`dd/Mon/yyyy`).
pub fn access_line(date: &str, path: &str, status: u16, bytes: &str) -> String {
    format!(
        "128.55.1.1 - - [{date}:03:18:49 -0700] \"GET {path} HTTP/1.1\" {status} {bytes} \
         \"-\" \"Wget/1.14 (linux-gnu)\""
    )
}

/// A throwaway directory of access logs, removed on drop.
pub struct LogTree {
    dir: TempDir,
}

impl LogTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create log tree"),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Writes `lines` to `relative`, creating parent directories.
    pub fn with_log<S: AsRef<str>>(self, relative: &str, lines: &[S]) -> Self {
        let path = self.path(relative);
        write_lines(&path, lines);
        self
    }

    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).expect("failed to create directory");
        self
    }
}

impl Default for LogTree {
    fn default() -> Self {
        Self::new()
    }
}

fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create log directory");
    }
    let mut body = String::new();
    for line in lines {
        body.push_str(line.as_ref());
        body.push('\n');
    }
    fs::write(path, body).expect("failed to write log file");
}
