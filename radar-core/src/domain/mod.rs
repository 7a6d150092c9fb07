//! Domain types for radar tracking

pub mod record;
pub mod status;
pub mod tag;

pub use record::{AuditEntry, Comment, EditableField, Record};
pub use status::{Status, UnknownStatus};
pub use tag::{Tag, TagCatalog, TagDef, NEUTRAL_TAG_STYLE};

use chrono::NaiveDateTime;

/// Format of every comment and audit timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}
