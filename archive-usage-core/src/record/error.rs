use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed log line ({reason}): {line}")]
    MalformedLine {
        line: String,
        reason: MalformedReason,
    },

    #[error("unparseable timestamp '{raw}' in log line: {line}")]
    Timestamp { line: String, raw: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("status '{0}' is not a three-digit code")]
    InvalidStatus(String),

    #[error("byte count '{0}' is not an integer")]
    InvalidByteCount(String),
}

impl ParseError {
    pub fn malformed(line: &str, reason: MalformedReason) -> Self {
        Self::MalformedLine {
            line: line.trim_end().to_string(),
            reason,
        }
    }

    pub fn timestamp(line: &str, raw: &str) -> Self {
        Self::Timestamp {
            line: line.trim_end().to_string(),
            raw: raw.to_string(),
        }
    }
}
