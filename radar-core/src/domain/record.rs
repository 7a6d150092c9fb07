use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{parse_timestamp, Status, Tag};

/// One entry in a record's comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub timestamp: String,
    pub comment: String,
    pub author: String,
}

/// One change to an editable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub field: String,
    pub old_value: String,
    pub new_value: String,
}

/// Fields that can be edited in place and are tracked in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditableField {
    TeamDri,
    Notes,
}

impl EditableField {
    /// Name recorded in the audit log.
    pub fn key(self) -> &'static str {
        match self {
            EditableField::TeamDri => "team_dri",
            EditableField::Notes => "notes",
        }
    }
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A radar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub dri: String,
    pub team_dri: String,
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub comments_history: Vec<Comment>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub history: Vec<AuditEntry>,
}

impl Record {
    pub fn has_tag(&self, text: &str) -> bool {
        self.tags.iter().any(|t| t.text == text)
    }

    /// Scalar fields that free-text search looks at. Nested collections
    /// (tags, comments, history) are not searched.
    pub fn searchable_fields(&self) -> [&str; 6] {
        [
            &self.id,
            &self.title,
            &self.dri,
            &self.team_dri,
            self.status.label(),
            &self.notes,
        ]
    }

    pub fn tag_texts(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.text.as_str()).collect()
    }

    /// Id for the next appended comment: `comment-<recordId>-<n>`.
    ///
    /// `n` is one past the highest numeric suffix already in the thread, so
    /// imported threads with gaps or foreign ids never produce a collision.
    pub fn next_comment_id(&self) -> String {
        let prefix = format!("comment-{}-", self.id);
        let highest = self
            .comments_history
            .iter()
            .filter_map(|c| c.id.strip_prefix(&prefix)?.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        let mut n = highest.max(self.comments_history.len()) + 1;
        loop {
            let candidate = format!("{prefix}{n}");
            if self.comment(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    /// First comment id that appears more than once in the thread.
    pub fn duplicate_comment_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.comments_history
            .iter()
            .map(|c| c.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments_history.iter().find(|c| c.id == comment_id)
    }

    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments_history.iter_mut().find(|c| c.id == comment_id)
    }

    pub fn field(&self, field: EditableField) -> &str {
        match field {
            EditableField::TeamDri => &self.team_dri,
            EditableField::Notes => &self.notes,
        }
    }

    pub(crate) fn field_mut(&mut self, field: EditableField) -> &mut String {
        match field {
            EditableField::TeamDri => &mut self.team_dri,
            EditableField::Notes => &mut self.notes,
        }
    }

    /// Most recent comment or audit timestamp. Unparseable stamps are skipped.
    pub fn latest_activity(&self) -> Option<NaiveDateTime> {
        self.comments_history
            .iter()
            .map(|c| c.timestamp.as_str())
            .chain(self.history.iter().map(|h| h.timestamp.as_str()))
            .filter_map(parse_timestamp)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            id: "radr://7".into(),
            title: "Sample Radar 7".into(),
            dri: "Person 7".into(),
            team_dri: "Person C".into(),
            status: Status::OnHold,
            tags: vec![Tag {
                text: "Bug".into(),
                style: "x".into(),
            }],
            comments_history: vec![Comment {
                id: "comment-7-1".into(),
                timestamp: "2024-12-28 10:00:00".into(),
                comment: "Initial comment 7".into(),
                author: "Person C".into(),
            }],
            notes: String::new(),
            history: vec![AuditEntry {
                timestamp: "2024-12-30 09:30:00".into(),
                field: "team_dri".into(),
                old_value: "Person B".into(),
                new_value: "Person C".into(),
            }],
        }
    }

    #[test]
    fn next_comment_id_counts_existing() {
        assert_eq!(record().next_comment_id(), "comment-radr://7-2");
    }

    fn comment(id: &str) -> Comment {
        Comment {
            id: id.into(),
            timestamp: "2024-12-29 10:00:00".into(),
            comment: id.into(),
            author: "Person A".into(),
        }
    }

    #[test]
    fn next_comment_id_skips_past_gaps() {
        let mut r = record();
        r.comments_history = vec![comment("comment-radr://7-2")];
        assert_eq!(r.next_comment_id(), "comment-radr://7-3");

        r.comments_history = vec![
            comment("comment-radr://7-5"),
            comment("comment-radr://7-1"),
        ];
        assert_eq!(r.next_comment_id(), "comment-radr://7-6");
    }

    #[test]
    fn next_comment_id_ignores_foreign_ids() {
        let mut r = record();
        r.comments_history = vec![comment("c-a"), comment("c-b"), comment("comment-radr://7-x")];
        assert_eq!(r.next_comment_id(), "comment-radr://7-4");
        assert!(r.comment(&r.next_comment_id()).is_none());
    }

    #[test]
    fn duplicate_comment_id_detected() {
        let mut r = record();
        assert_eq!(r.duplicate_comment_id(), None);
        r.comments_history.push(comment("comment-7-1"));
        assert_eq!(r.duplicate_comment_id(), Some("comment-7-1"));
    }

    #[test]
    fn latest_activity_spans_comments_and_history() {
        let latest = record().latest_activity().unwrap();
        assert_eq!(latest.to_string(), "2024-12-30 09:30:00");
    }

    #[test]
    fn searchable_fields_include_status_label() {
        let r = record();
        assert!(r.searchable_fields().contains(&"On Hold"));
        assert!(r.has_tag("Bug"));
        assert!(!r.has_tag("bug"));
    }
}
