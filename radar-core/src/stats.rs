//! Stat aggregation — status and tag counts, drill-down, time windows.
//!
//! Everything here is a pure function of the records passed in and is
//! recomputed on every render.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Record, Status};

/// Window applied to the statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    Last7Days,
    Last30Days,
    Last3Months,
    #[default]
    AllTime,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last3Months,
        TimeRange::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Last7Days => "Last 7 Days",
            TimeRange::Last30Days => "Last 30 Days",
            TimeRange::Last3Months => "Last 3 Months",
            TimeRange::AllTime => "All Time",
        }
    }

    pub fn next(self) -> TimeRange {
        match self {
            TimeRange::Last7Days => TimeRange::Last30Days,
            TimeRange::Last30Days => TimeRange::Last3Months,
            TimeRange::Last3Months => TimeRange::AllTime,
            TimeRange::AllTime => TimeRange::Last7Days,
        }
    }

    /// Earliest timestamp inside the window, or `None` for all time.
    pub fn cutoff(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TimeRange::Last7Days => Some(now - Duration::days(7)),
            TimeRange::Last30Days => Some(now - Duration::days(30)),
            TimeRange::Last3Months => Some(now - Duration::days(90)),
            TimeRange::AllTime => None,
        }
    }

    /// Whether a record had any activity inside the window. Records with no
    /// parseable activity only appear under [`TimeRange::AllTime`].
    pub fn includes(self, record: &Record, now: NaiveDateTime) -> bool {
        match self.cutoff(now) {
            None => true,
            Some(cutoff) => record.latest_activity().is_some_and(|t| t >= cutoff),
        }
    }
}

/// Count of records per status, in [`Status::ALL`] order.
pub fn status_counts<'a>(records: impl IntoIterator<Item = &'a Record>) -> [(Status, usize); 3] {
    let mut counts = Status::ALL.map(|s| (s, 0));
    for record in records {
        counts[record.status.index()].1 += 1;
    }
    counts
}

/// Tag occurrences across the records, in first-appearance order.
pub fn tag_counts<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        for tag in &record.tags {
            match counts.iter_mut().find(|(text, _)| *text == tag.text) {
                Some((_, n)) => *n += 1,
                None => counts.push((tag.text.clone(), 1)),
            }
        }
    }
    counts
}

/// Records with the given status, for the drill-down overlay.
pub fn drill_down<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    status: Status,
) -> Vec<&'a Record> {
    records.into_iter().filter(|r| r.status == status).collect()
}

/// Share of `count` in `total`, as a percentage.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Everything the statistics view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total: usize,
    pub by_status: [(Status, usize); 3],
    pub by_tag: Vec<(String, usize)>,
}

impl StatsSummary {
    pub fn compute<'a>(
        records: impl IntoIterator<Item = &'a Record>,
        range: TimeRange,
        now: NaiveDateTime,
    ) -> Self {
        let in_range: Vec<&Record> = records
            .into_iter()
            .filter(|r| range.includes(r, now))
            .collect();
        Self {
            total: in_range.len(),
            by_status: status_counts(in_range.iter().copied()),
            by_tag: tag_counts(in_range.iter().copied()),
        }
    }

    pub fn status_percent(&self, status: Status) -> f64 {
        percent(self.by_status[status.index()].1, self.total)
    }
}
