//! The record store and its derived visible list.
//!
//! `Dashboard` owns the full ordered record list and the current
//! [`FilterState`]. Every mutation ends with a full recompute of the visible
//! indices, so the visible list can never go stale. All lookups by id are
//! linear scans, which is fine at the tens-of-records scale this serves.

use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::domain::{now_timestamp, AuditEntry, Comment, EditableField, Record, Status, TagCatalog};
use crate::error::{RadarError, Result};
use crate::filter::FilterState;
use crate::sample;

#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<Record>,
    filter: FilterState,
    visible: Vec<usize>,
    catalog: TagCatalog,
    comment_author: String,
}

impl Dashboard {
    pub fn new(records: Vec<Record>, catalog: TagCatalog, comment_author: impl Into<String>) -> Self {
        let mut dashboard = Self {
            records,
            filter: FilterState::default(),
            visible: Vec::new(),
            catalog,
            comment_author: comment_author.into(),
        };
        dashboard.recompute();
        dashboard
    }

    /// A dashboard seeded with synthetic records.
    pub fn with_sample_data(config: &DashboardConfig) -> Self {
        let records = sample::sample_records(config);
        info!(count = records.len(), "generated sample records");
        Self::new(records, config.tags.clone(), config.comment_author.clone())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Indices into [`Dashboard::records`] of the visible subset.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.visible.iter().map(move |&i| &self.records[i])
    }

    /// The `n`th visible record.
    pub fn visible_record(&self, n: usize) -> Option<&Record> {
        self.visible.get(n).map(|&i| &self.records[i])
    }

    // ── Filters ──────────────────────────────────────────────────────

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.set_search(query);
        self.recompute();
    }

    pub fn toggle_status(&mut self, status: Status) {
        self.filter.toggle_status(status);
        self.recompute();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append a comment and return its generated id.
    pub fn add_comment(&mut self, record_id: &str, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(RadarError::Validation("comment text is empty".into()));
        }
        let author = self.comment_author.clone();
        let record = self.record_mut(record_id)?;
        let comment = Comment {
            id: record.next_comment_id(),
            timestamp: now_timestamp(),
            comment: text.to_string(),
            author,
        };
        let id = comment.id.clone();
        record.comments_history.push(comment);
        debug!(record_id, comment_id = %id, "comment added");
        self.recompute();
        Ok(id)
    }

    /// Overwrite the text of an existing comment.
    pub fn edit_comment(&mut self, record_id: &str, comment_id: &str, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(RadarError::Validation("comment text is empty".into()));
        }
        let record = self.record_mut(record_id)?;
        let comment = record
            .comment_mut(comment_id)
            .ok_or_else(|| RadarError::comment_not_found(comment_id))?;
        comment.comment = text.to_string();
        debug!(record_id, comment_id, "comment edited");
        self.recompute();
        Ok(())
    }

    /// Overwrite an editable field and append the change to the audit log.
    pub fn update_field(
        &mut self,
        record_id: &str,
        field: EditableField,
        value: &str,
    ) -> Result<AuditEntry> {
        let record = self.record_mut(record_id)?;
        let old_value = std::mem::replace(record.field_mut(field), value.to_string());
        let entry = AuditEntry {
            timestamp: now_timestamp(),
            field: field.key().to_string(),
            old_value,
            new_value: value.to_string(),
        };
        record.history.push(entry.clone());
        debug!(record_id, %field, old = %entry.old_value, new = %entry.new_value, "field updated");
        self.recompute();
        Ok(entry)
    }

    /// Remove a record. Returns `None` when the id is not present.
    pub fn delete(&mut self, record_id: &str) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == record_id)?;
        let removed = self.records.remove(pos);
        debug!(record_id, "record deleted");
        self.recompute();
        Some(removed)
    }

    /// Replace the whole data set and reset every filter.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        info!(count = records.len(), "replacing record set");
        self.records = records;
        self.filter.clear();
        self.recompute();
    }

    fn record_mut(&mut self, id: &str) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RadarError::record_not_found(id))
    }

    fn recompute(&mut self) {
        self.visible = self.filter.apply(&self.records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        let mut config = DashboardConfig::default();
        config.sample.seed = Some(9);
        Dashboard::with_sample_data(&config)
    }

    #[test]
    fn starts_unfiltered() {
        let d = dashboard();
        assert_eq!(d.len(), 20);
        assert_eq!(d.visible_len(), 20);
    }

    #[test]
    fn search_person_3() {
        let mut d = dashboard();
        d.set_search("person 3");
        let ids: Vec<&str> = d.visible_records().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["radr://3"]);
    }

    #[test]
    fn add_comment_generates_sequential_id() {
        let mut d = dashboard();
        let id = d.add_comment("radr://4", "looks good").unwrap();
        assert_eq!(id, "comment-radr://4-2");
        let record = d.record("radr://4").unwrap();
        assert_eq!(record.comments_history.len(), 2);
        let last = record.comments_history.last().unwrap();
        assert_eq!(last.author, "Current User");
        assert_eq!(last.comment, "looks good");
    }

    #[test]
    fn add_comment_rejects_blank_and_unknown() {
        let mut d = dashboard();
        assert!(matches!(
            d.add_comment("radr://4", "   "),
            Err(RadarError::Validation(_))
        ));
        assert!(d.add_comment("radr://404", "hi").unwrap_err().is_not_found());
    }

    #[test]
    fn edit_comment_in_place() {
        let mut d = dashboard();
        d.edit_comment("radr://2", "comment-2-1", "rewritten").unwrap();
        assert_eq!(
            d.record("radr://2").unwrap().comments_history[0].comment,
            "rewritten"
        );
        assert!(d
            .edit_comment("radr://2", "comment-2-9", "x")
            .unwrap_err()
            .is_not_found());
        assert!(d
            .edit_comment("radr://99", "comment-2-1", "x")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn update_field_appends_audit_entry() {
        let mut d = dashboard();
        let entry = d
            .update_field("radr://1", EditableField::TeamDri, "Person E")
            .unwrap();
        assert_eq!(entry.field, "team_dri");
        assert_eq!(entry.old_value, "Person B");
        assert_eq!(entry.new_value, "Person E");

        d.update_field("radr://1", EditableField::Notes, "blocked on infra")
            .unwrap();
        let record = d.record("radr://1").unwrap();
        assert_eq!(record.team_dri, "Person E");
        assert_eq!(record.notes, "blocked on infra");
        assert_eq!(record.history.len(), 2);
        assert_eq!(record.history[1].field, "notes");
    }

    #[test]
    fn update_field_refreshes_visible_list() {
        let mut d = dashboard();
        d.set_search("blocked");
        assert_eq!(d.visible_len(), 0);
        d.update_field("radr://6", EditableField::Notes, "Blocked upstream")
            .unwrap();
        assert_eq!(d.visible_len(), 1);
    }

    #[test]
    fn delete_removes_from_full_and_visible() {
        let mut d = dashboard();
        d.set_search("radar 1");
        let before = d.visible_len();
        assert!(d.delete("radr://1").is_some());
        assert_eq!(d.len(), 19);
        assert_eq!(d.visible_len(), before - 1);
        assert!(d.visible_records().all(|r| r.id != "radr://1"));
        assert!(d.delete("radr://1").is_none());
        assert_eq!(d.len(), 19);
    }

    #[test]
    fn replace_all_resets_filters() {
        let mut d = dashboard();
        d.set_search("person");
        d.toggle_status(Status::Completed);
        d.toggle_tag("Bug");
        let records = d.records()[..3].to_vec();
        d.replace_all(records);
        assert!(!d.filter().is_active());
        assert_eq!(d.visible_len(), 3);
    }
}
