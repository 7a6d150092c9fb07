//! Radar CLI — headless access to radar CSV files.
//!
//! Commands:
//! - `sample` — write a synthetic data set as CSV
//! - `list` — print the filtered table
//! - `stats` — print status and tag counts for the filtered set
//! - `export` — re-export the filtered subset as CSV

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use radar_core::csv_io;
use radar_core::domain::{Record, Status};
use radar_core::stats::{percent, status_counts, tag_counts};
use radar_core::{Dashboard, DashboardConfig};

#[derive(Parser)]
#[command(name = "radar", about = "Radar CLI — inspect and reshape radar CSV files")]
struct Cli {
    /// Config file (TOML). Defaults to <config dir>/radar-tracker/config.toml,
    /// then to built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write synthetic radars as CSV.
    Sample {
        /// Number of records. Defaults to the config's sample count.
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file. Prints to stdout when absent.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the radars matching the filters.
    List {
        /// CSV file to read.
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print status and tag counts for the radars matching the filters.
    Stats {
        /// CSV file to read.
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the radars matching the filters to a new CSV.
    Export {
        /// CSV file to read.
        file: PathBuf,

        /// Output file.
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Filters shared by the read commands.
#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive substring over id, title, DRIs, status and notes.
    #[arg(long)]
    search: Option<String>,

    /// Status: "In Progress", "Completed" or "On Hold".
    #[arg(long)]
    status: Option<Status>,

    /// Exact tag text.
    #[arg(long)]
    tag: Option<String>,
}

const APP_DIR: &str = "radar-tracker";

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), default_config_path().as_deref())?;

    match cli.command {
        Commands::Sample { count, seed, out } => run_sample(config, count, seed, out),
        Commands::List { file, filter, json } => run_list(&config, &file, &filter, json),
        Commands::Stats { file, filter } => run_stats(&config, &file, &filter),
        Commands::Export { file, out, filter } => run_export(&config, &file, &out, &filter),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("RADAR_LOG").unwrap_or_else(|_| EnvFilter::new("radar=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Config file shared with the TUI.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

fn load_config(explicit: Option<&Path>, default_path: Option<&Path>) -> Result<DashboardConfig> {
    if let Some(path) = explicit.or(default_path) {
        debug!(path = %path.display(), "config lookup");
    }
    DashboardConfig::load(explicit, default_path).context("load config")
}

/// Load a CSV and apply the filters.
fn load_filtered(config: &DashboardConfig, file: &Path, filter: &FilterArgs) -> Result<Dashboard> {
    let records = csv_io::import_from_path(file, &config.tags)
        .with_context(|| format!("import {}", file.display()))?;
    let mut dashboard = Dashboard::new(records, config.tags.clone(), config.comment_author.clone());
    if let Some(q) = &filter.search {
        dashboard.set_search(q.as_str());
    }
    if let Some(status) = filter.status {
        dashboard.toggle_status(status);
    }
    if let Some(tag) = &filter.tag {
        dashboard.toggle_tag(tag);
    }
    debug!(
        total = dashboard.len(),
        visible = dashboard.visible_len(),
        "filters applied"
    );
    Ok(dashboard)
}

fn run_sample(
    mut config: DashboardConfig,
    count: Option<usize>,
    seed: Option<u64>,
    out: Option<PathBuf>,
) -> Result<()> {
    if let Some(count) = count {
        config.sample.count = count;
    }
    if seed.is_some() {
        config.sample.seed = seed;
    }
    let records = radar_core::sample::sample_records(&config);

    match out {
        Some(path) => {
            let rows = csv_io::export_to_path(&records, &path)
                .with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {rows} radars to {}", path.display());
        }
        None => print!("{}", csv_io::export_to_string(&records)?),
    }
    Ok(())
}

fn run_list(config: &DashboardConfig, file: &Path, filter: &FilterArgs, json: bool) -> Result<()> {
    let dashboard = load_filtered(config, file, filter)?;
    let records: Vec<&Record> = dashboard.visible_records().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<28} {:<12} {:<10} {:<12} {:<28} {:>8}",
        "Radar ID", "Title", "Current DRI", "Team DRI", "Status", "Tags", "Comments"
    );
    println!("{}", "-".repeat(116));
    for r in &records {
        println!(
            "{:<12} {:<28} {:<12} {:<10} {:<12} {:<28} {:>8}",
            truncate(&r.id, 12),
            truncate(&r.title, 28),
            truncate(&r.dri, 12),
            truncate(&r.team_dri, 10),
            r.status.label(),
            truncate(&r.tag_texts().join(", "), 28),
            r.comments_history.len(),
        );
    }
    println!("\n{} of {} radars", records.len(), dashboard.len());
    Ok(())
}

fn run_stats(config: &DashboardConfig, file: &Path, filter: &FilterArgs) -> Result<()> {
    let dashboard = load_filtered(config, file, filter)?;
    let total = dashboard.visible_len();

    println!("Total: {total} (of {})", dashboard.len());
    println!();
    println!("Status");
    for (status, count) in status_counts(dashboard.visible_records()) {
        println!(
            "  {:<12} {:>5} {:>6.1}%",
            status.label(),
            count,
            percent(count, total)
        );
    }
    println!();
    println!("Tags");
    let tags = tag_counts(dashboard.visible_records());
    if tags.is_empty() {
        println!("  (none)");
    }
    for (tag, count) in tags {
        println!("  {tag:<16} {count:>5}");
    }
    Ok(())
}

fn run_export(config: &DashboardConfig, file: &Path, out: &Path, filter: &FilterArgs) -> Result<()> {
    let dashboard = load_filtered(config, file, filter)?;
    let rows = csv_io::export_to_path(dashboard.visible_records(), out)
        .with_context(|| format!("write {}", out.display()))?;
    info!(rows, out = %out.display(), "export complete");
    println!("Exported {rows} of {} radars to {}", dashboard.len(), out.display());
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{head}.")
    }
}
