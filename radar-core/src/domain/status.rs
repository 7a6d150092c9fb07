use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a radar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Status {
    /// All statuses in display order.
    pub const ALL: [Status; 3] = [Status::InProgress, Status::Completed, Status::OnHold];

    pub fn label(self) -> &'static str {
        match self {
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::OnHold => "On Hold",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Status::InProgress => 0,
            Status::Completed => 1,
            Status::OnHold => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Status::ALL.get(i).copied()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
    type Err = UnknownStatus;

    /// Accepts display names ("On Hold") as well as variant-style spellings
    /// ("OnHold", "on_hold"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "onhold" => Ok(Status::OnHold),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_and_variant_spellings() {
        assert_eq!("In Progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("InProgress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("on_hold".parse::<Status>(), Ok(Status::OnHold));
        assert_eq!(" completed ".parse::<Status>(), Ok(Status::Completed));
        assert!("Done".parse::<Status>().is_err());
    }

    #[test]
    fn index_roundtrip() {
        for status in Status::ALL {
            assert_eq!(Status::from_index(status.index()), Some(status));
        }
        assert!(Status::from_index(3).is_none());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Status::OnHold.to_string(), "On Hold");
    }
}
