use crate::facet::UnknownFacetError;
use crate::record::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a report run. No partial report is produced.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    UnknownFacet(#[from] UnknownFacetError),

    #[error("{path}:{line_number}: {source}")]
    Parse {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: ParseError,
    },

    #[error("no log lines were parsed under {roots:?}; check that the logs path is correct")]
    EmptyResult { roots: Vec<PathBuf> },

    #[error("failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
