//! Radar Core — records, filtering, mutations, stats and CSV exchange.
//!
//! This crate holds everything the dashboard front-ends share:
//! - Domain types (records, comments, tags, audit entries, statuses)
//! - Filter engine (search / status / tag predicates)
//! - `Dashboard` store with id-based mutations
//! - Stat aggregation and drill-down
//! - CSV import/export
//! - Synthetic sample data and TOML configuration

pub mod config;
pub mod csv_io;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod filter;
pub mod sample;
pub mod stats;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{RadarError, Result};
pub use filter::FilterState;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the store and its parts can cross threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Dashboard>();
        require_sync::<Dashboard>();
        require_send::<domain::Record>();
        require_sync::<domain::Record>();
        require_send::<FilterState>();
        require_sync::<FilterState>();
        require_send::<RadarError>();
        require_sync::<RadarError>();
    }
}
