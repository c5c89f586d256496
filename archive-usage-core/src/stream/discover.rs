use crate::error::ReportError;
use glob::{Paths, Pattern, glob};
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RECURSIVE_PATTERN: &str = "**/*";

enum Root {
    File(PathBuf),
    Tree(String),
}

/// Lazy, single-pass iterator over the log files found under a set of roots.
///
/// Only files whose directory holds no subdirectories are yielded: the
/// archive keeps logs in leaf directories, and intermediate directories only
/// contain stray files that are not access logs. A root that is itself a file
/// is yielded as-is.
pub struct LogFiles {
    roots: VecDeque<Root>,
    current: Option<Paths>,
    leaf_dirs: HashMap<PathBuf, bool>,
}

/// Prepares discovery over `roots`. Paths are made absolute up front; no
/// directory is read until the iterator is driven.
///
/// # Errors
///
/// Returns `ReportError::Io` if a root cannot be made absolute.
pub fn discover(roots: &[PathBuf]) -> Result<LogFiles, ReportError> {
    let mut pending = VecDeque::with_capacity(roots.len());

    for root in roots {
        let root = std::path::absolute(root).map_err(|e| ReportError::io(root, e))?;

        if root.is_file() {
            pending.push_back(Root::File(root));
            continue;
        }

        if !root.exists() {
            warn!(root = %root.display(), "log root does not exist");
        }

        pending.push_back(Root::Tree(resolve_glob(&root, RECURSIVE_PATTERN)));
    }

    Ok(LogFiles {
        roots: pending,
        current: None,
        leaf_dirs: HashMap::new(),
    })
}

/// Joins a glob pattern onto a root directory, escaping any glob
/// metacharacters in the root itself.
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    let escaped = Pattern::escape(&root.to_string_lossy());
    Path::new(&escaped).join(pattern).to_string_lossy().into_owned()
}

impl LogFiles {
    fn is_log_file(&mut self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        let Some(parent) = path.parent() else {
            return false;
        };

        *self
            .leaf_dirs
            .entry(parent.to_path_buf())
            .or_insert_with(|| is_leaf_dir(parent))
    }
}

impl Iterator for LogFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(paths) = &mut self.current {
                let next = paths.next();
                match next {
                    Some(Ok(path)) => {
                        if self.is_log_file(&path) {
                            return Some(path);
                        }
                        continue;
                    }
                    Some(Err(err)) => {
                        warn!(
                            path = %err.path().display(),
                            error = %err.error(),
                            "skipping unreadable path"
                        );
                        continue;
                    }
                    None => self.current = None,
                }
            }

            match self.roots.pop_front()? {
                Root::File(path) => return Some(path),
                Root::Tree(pattern) => match glob(&pattern) {
                    Ok(paths) => {
                        debug!(%pattern, "walking log root");
                        self.current = Some(paths);
                    }
                    Err(error) => warn!(%pattern, %error, "skipping log root"),
                },
            }
        }
    }
}

fn is_leaf_dir(dir: &Path) -> bool {
    match fs::read_dir(dir) {
        Ok(entries) => !entries
            .filter_map(Result::ok)
            .any(|entry| entry.path().is_dir()),
        Err(_) => false,
    }
}
