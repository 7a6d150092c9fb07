//! Error taxonomy for record operations, CSV import and configuration.

use thiserror::Error;

/// What kind of entity a failed id lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Record,
    Comment,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Record => "radar",
            EntityKind::Comment => "comment",
        }
    }
}

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("{} '{id}' not found", kind.label())]
    NotFound { kind: EntityKind, id: String },

    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RadarError {
    pub fn record_not_found(id: &str) -> Self {
        RadarError::NotFound {
            kind: EntityKind::Record,
            id: id.to_string(),
        }
    }

    pub fn comment_not_found(id: &str) -> Self {
        RadarError::NotFound {
            kind: EntityKind::Comment,
            id: id.to_string(),
        }
    }

    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        RadarError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RadarError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RadarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = RadarError::record_not_found("radr://9");
        assert_eq!(err.to_string(), "radar 'radr://9' not found");
        assert!(err.is_not_found());

        let err = RadarError::comment_not_found("comment-x-1");
        assert_eq!(err.to_string(), "comment 'comment-x-1' not found");
    }

    #[test]
    fn malformed_message_carries_line() {
        let err = RadarError::malformed(4, "missing id");
        assert_eq!(err.to_string(), "malformed input at line 4: missing id");
        assert!(!err.is_not_found());
    }
}
