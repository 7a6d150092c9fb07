//! Dashboard configuration — TOML file with every field defaulted.
//!
//! ```toml
//! projects = ["Project A", "Project B"]
//! team_members = ["Person A", "Person B"]
//! comment_author = "Current User"
//! export_path = "radar_data.csv"
//! page_size = 15
//! detail_page_size = 5
//!
//! [sample]
//! count = 20
//! seed = 7
//!
//! [[tags]]
//! text = "Bug"
//! style = "rgba(255,215,0,0.2)"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::TagCatalog;
use crate::error::{RadarError, Result};

/// Synthetic data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub count: usize,
    /// Fixed seed for reproducible sample data; random when absent.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 20,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub projects: Vec<String>,
    pub team_members: Vec<String>,
    pub tags: TagCatalog,
    pub sample: SampleConfig,
    /// Rows per page in the main table.
    pub page_size: usize,
    /// Rows per page in the drill-down overlay.
    pub detail_page_size: usize,
    /// Author recorded on comments added from the dashboard.
    pub comment_author: String,
    pub export_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            projects: to_strings(&["Project A", "Project B", "Project C"]),
            team_members: to_strings(&["Person A", "Person B", "Person C", "Person D", "Person E"]),
            tags: TagCatalog::default(),
            sample: SampleConfig::default(),
            page_size: 15,
            detail_page_size: 5,
            comment_author: "Current User".to_string(),
            export_path: PathBuf::from("radar_data.csv"),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DashboardConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| RadarError::Config(format!("parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RadarError::Config(format!("read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if given, else `default_path` if it exists, else defaults.
    ///
    /// An explicitly given path must exist; the default location is optional.
    pub fn load(path: Option<&Path>, default_path: Option<&Path>) -> Result<Self> {
        match (path, default_path) {
            (Some(p), _) => Self::from_file(p),
            (None, Some(p)) if p.exists() => Self::from_file(p),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.team_members.is_empty() {
            return Err(RadarError::Config("team_members must not be empty".into()));
        }
        if self.projects.is_empty() {
            return Err(RadarError::Config("projects must not be empty".into()));
        }
        if self.page_size == 0 || self.detail_page_size == 0 {
            return Err(RadarError::Config("page sizes must be positive".into()));
        }
        Ok(())
    }
}
