//! CSV import/export of the record list.
//!
//! Columns: id, title, dri, team_dri, status, tags, comments_history, notes
//!
//! - `tags` holds the tag texts joined with `", "`; styles are looked up in
//!   the tag catalog on import.
//! - `comments_history` holds the comment thread as a JSON array.
//! - The audit history is not exported. Imported records get a single
//!   `Initial` → `Imported` audit entry instead, so an export/import
//!   round-trip intentionally loses it.
//!
//! Import requires an `id` column; every other column is optional and
//! defaults to empty (status defaults to In Progress).

use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::domain::{now_timestamp, AuditEntry, Comment, Record, Status, TagCatalog};
use crate::error::{RadarError, Result};

pub const COLUMNS: [&str; 8] = [
    "id",
    "title",
    "dri",
    "team_dri",
    "status",
    "tags",
    "comments_history",
    "notes",
];

/// Separator between tag texts in the `tags` column.
pub const TAG_SEPARATOR: &str = ", ";

// ─── Export ─────────────────────────────────────────────────────────

/// Write records as CSV to any writer.
pub fn export_csv<'a, W: Write>(
    records: impl IntoIterator<Item = &'a Record>,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;

    for r in records {
        let tags = r.tag_texts().join(TAG_SEPARATOR);
        let comments = serde_json::to_string(&r.comments_history)
            .map_err(|e| RadarError::Validation(format!("serialize comments of {}: {e}", r.id)))?;
        let row: [&str; 8] = [
            &r.id,
            &r.title,
            &r.dri,
            &r.team_dri,
            r.status.label(),
            &tags,
            &comments,
            &r.notes,
        ];
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render records as a CSV string.
pub fn export_to_string<'a>(records: impl IntoIterator<Item = &'a Record>) -> Result<String> {
    let mut buf = Vec::new();
    export_csv(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| RadarError::Validation(format!("CSV is not UTF-8: {e}")))
}

/// Write records to a CSV file, creating parent directories as needed.
/// Returns the number of rows written.
pub fn export_to_path<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    path: &Path,
) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let records: Vec<&Record> = records.into_iter().collect();
    let file = std::fs::File::create(path)?;
    export_csv(records.iter().copied(), file)?;
    info!(rows = records.len(), path = %path.display(), "exported CSV");
    Ok(records.len())
}

// ─── Import ─────────────────────────────────────────────────────────

/// Column positions found in the header row.
struct ColumnMap {
    id: usize,
    title: Option<usize>,
    dri: Option<usize>,
    team_dri: Option<usize>,
    status: Option<usize>,
    tags: Option<usize>,
    comments: Option<usize>,
    notes: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let id = find("id").ok_or_else(|| RadarError::malformed(1, "missing 'id' column"))?;
        Ok(Self {
            id,
            title: find("title"),
            dri: find("dri"),
            team_dri: find("team_dri"),
            status: find("status"),
            tags: find("tags"),
            comments: find("comments_history"),
            notes: find("notes"),
        })
    }
}

fn field<'r>(row: &'r csv::StringRecord, col: Option<usize>) -> &'r str {
    col.and_then(|c| row.get(c)).unwrap_or("")
}

fn csv_error_line(err: &csv::Error) -> u64 {
    err.position().map(|p| p.line()).unwrap_or(0)
}

/// Split the `tags` column back into catalog-styled tags.
pub fn parse_tags(raw: &str, catalog: &TagCatalog) -> Vec<crate::domain::Tag> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| catalog.tag(t))
        .collect()
}

/// Audit entry given to every imported record.
pub fn imported_audit_entry() -> AuditEntry {
    AuditEntry {
        timestamp: now_timestamp(),
        field: "Initial".to_string(),
        old_value: String::new(),
        new_value: "Imported".to_string(),
    }
}

/// Parse CSV from any reader into records.
pub fn import_csv<R: Read>(reader: R, catalog: &TagCatalog) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| RadarError::malformed(csv_error_line(&e), e.to_string()))?
        .clone();
    let cols = ColumnMap::from_headers(&headers)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row.map_err(|e| RadarError::malformed(csv_error_line(&e), e.to_string()))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let id = field(&row, Some(cols.id)).trim().to_string();
        if id.is_empty() {
            return Err(RadarError::malformed(line, "empty id"));
        }
        if !seen.insert(id.clone()) {
            return Err(RadarError::malformed(line, format!("duplicate id '{id}'")));
        }

        let raw_status = field(&row, cols.status).trim();
        let status = if raw_status.is_empty() {
            Status::InProgress
        } else {
            raw_status
                .parse::<Status>()
                .map_err(|e| RadarError::malformed(line, e.to_string()))?
        };

        let raw_comments = field(&row, cols.comments).trim();
        let comments_history: Vec<Comment> = if raw_comments.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(raw_comments).map_err(|e| {
                RadarError::malformed(line, format!("comments_history is not a JSON list: {e}"))
            })?
        };

        let record = Record {
            id,
            title: field(&row, cols.title).to_string(),
            dri: field(&row, cols.dri).to_string(),
            team_dri: field(&row, cols.team_dri).to_string(),
            status,
            tags: parse_tags(field(&row, cols.tags), catalog),
            comments_history,
            notes: field(&row, cols.notes).to_string(),
            history: vec![imported_audit_entry()],
        };
        if let Some(cid) = record.duplicate_comment_id() {
            return Err(RadarError::malformed(
                line,
                format!("duplicate comment id '{cid}'"),
            ));
        }
        records.push(record);
    }

    if cols.title.is_none() || cols.status.is_none() {
        warn!("imported CSV lacks title or status column; defaults used");
    }
    Ok(records)
}

/// Parse a CSV file into records.
pub fn import_from_path(path: &Path, catalog: &TagCatalog) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path)?;
    let records = import_csv(file, catalog)?;
    info!(rows = records.len(), path = %path.display(), "imported CSV");
    Ok(records)
}
