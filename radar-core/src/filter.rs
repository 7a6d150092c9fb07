//! Filter engine — derives the visible subset of records.
//!
//! Three independent predicates are ANDed:
//! - free-text search (case-insensitive substring over scalar fields)
//! - status equality
//! - tag membership
//!
//! Each predicate is pure, so the order in which they are applied does not
//! change the result. The visible list is always recomputed from scratch.

use serde::{Deserialize, Serialize};

use crate::domain::{Record, Status};

/// A single filter predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Lowercased needle.
    Search(String),
    Status(Status),
    Tag(String),
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Search(needle) => record
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            Predicate::Status(status) => record.status == *status,
            Predicate::Tag(text) => record.has_tag(text),
        }
    }
}

/// Current search/status/tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub status_filter: Option<Status>,
    pub tag_filter: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Select a status, or clear it if it is already selected.
    pub fn toggle_status(&mut self, status: Status) {
        self.status_filter = if self.status_filter == Some(status) {
            None
        } else {
            Some(status)
        };
    }

    /// Select a tag, or clear it if it is already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.tag_filter = if self.tag_filter.as_deref() == Some(tag) {
            None
        } else {
            Some(tag.to_string())
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || self.status_filter.is_some() || self.tag_filter.is_some()
    }

    /// The active predicates. Absent filters contribute nothing.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut preds = Vec::with_capacity(3);
        if !self.search_query.is_empty() {
            preds.push(Predicate::Search(self.search_query.to_lowercase()));
        }
        if let Some(status) = self.status_filter {
            preds.push(Predicate::Status(status));
        }
        if let Some(tag) = &self.tag_filter {
            preds.push(Predicate::Tag(tag.clone()));
        }
        preds
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.predicates().iter().all(|p| p.matches(record))
    }

    /// Indices of matching records, in list order.
    pub fn apply(&self, records: &[Record]) -> Vec<usize> {
        let preds = self.predicates();
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| preds.iter().all(|p| p.matches(r)))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Apply predicates one after another, each narrowing the previous result.
pub fn apply_in_order(records: &[Record], predicates: &[Predicate]) -> Vec<usize> {
    let mut visible: Vec<usize> = (0..records.len()).collect();
    for pred in predicates {
        visible.retain(|&i| pred.matches(&records[i]));
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tag, TagCatalog};

    fn rec(i: usize, status: Status, tags: &[&str]) -> Record {
        let catalog = TagCatalog::default();
        Record {
            id: format!("radr://{i}"),
            title: format!("Sample Radar {i}"),
            dri: format!("Person {i}"),
            team_dri: "Person A".into(),
            status,
            tags: tags.iter().map(|t| catalog.tag(t)).collect::<Vec<Tag>>(),
            comments_history: Vec::new(),
            notes: String::new(),
            history: Vec::new(),
        }
    }

    fn records() -> Vec<Record> {
        vec![
            rec(1, Status::InProgress, &["Bug", "Feature"]),
            rec(2, Status::Completed, &["Bug"]),
            rec(3, Status::Completed, &["Documentation"]),
            rec(13, Status::OnHold, &["High Priority"]),
        ]
    }

    #[test]
    fn empty_filter_matches_all() {
        let f = FilterState::new();
        assert_eq!(f.apply(&records()), vec![0, 1, 2, 3]);
        assert!(!f.is_active());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut f = FilterState::new();
        f.set_search("PERSON 3");
        assert_eq!(f.apply(&records()), vec![2]);
        f.set_search("person 1");
        assert_eq!(f.apply(&records()), vec![0, 3]);
    }

    #[test]
    fn search_covers_status_label_but_not_tags() {
        let mut f = FilterState::new();
        f.set_search("on hold");
        assert_eq!(f.apply(&records()), vec![3]);
        f.set_search("documentation");
        assert!(f.apply(&records()).is_empty());
    }

    #[test]
    fn predicates_are_anded() {
        let mut f = FilterState::new();
        f.toggle_status(Status::Completed);
        f.toggle_tag("Bug");
        assert_eq!(f.apply(&records()), vec![1]);
    }

    #[test]
    fn toggle_twice_clears() {
        let mut f = FilterState::new();
        f.toggle_status(Status::Completed);
        assert_eq!(f.status_filter, Some(Status::Completed));
        f.toggle_status(Status::Completed);
        assert_eq!(f.status_filter, None);

        f.toggle_tag("Bug");
        f.toggle_tag("Feature");
        assert_eq!(f.tag_filter.as_deref(), Some("Feature"));
        f.toggle_tag("Feature");
        assert_eq!(f.tag_filter, None);
    }

    #[test]
    fn unknown_tag_yields_empty() {
        let mut f = FilterState::new();
        f.toggle_tag("Nope");
        assert!(f.apply(&records()).is_empty());
    }

    #[test]
    fn ordered_application_matches_combined() {
        let mut f = FilterState::new();
        f.set_search("radar");
        f.toggle_status(Status::Completed);
        f.toggle_tag("Documentation");
        let mut preds = f.predicates();
        let combined = f.apply(&records());
        preds.reverse();
        assert_eq!(apply_in_order(&records(), &preds), combined);
    }
}
