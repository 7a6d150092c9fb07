//! Synthetic radar records for a fresh dashboard.
//!
//! Record `i` (1-based) gets id `radr://{i}`, DRI `Person {i}`, a team DRI
//! picked round-robin from the team list, a random status, two distinct random
//! tags and a single initial comment.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::DashboardConfig;
use crate::domain::{now_timestamp, Comment, Record, Status, TagDef};

/// Generate `config.sample.count` records, seeded from the config when set.
pub fn sample_records(config: &DashboardConfig) -> Vec<Record> {
    let mut rng = match config.sample.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(config, config.sample.count, &mut rng)
}

/// Generate `count` records with the given RNG.
pub fn generate<R: Rng>(config: &DashboardConfig, count: usize, rng: &mut R) -> Vec<Record> {
    let timestamp = now_timestamp();
    let tag_defs = config.tags.defs();
    let team = &config.team_members;

    (1..=count)
        .map(|i| {
            let team_dri = if team.is_empty() {
                String::new()
            } else {
                team[i % team.len()].clone()
            };
            let status = *Status::ALL.choose(rng).unwrap_or(&Status::InProgress);
            let tags = tag_defs
                .choose_multiple(rng, 2.min(tag_defs.len()))
                .map(|d: &TagDef| config.tags.tag(&d.text))
                .collect();

            Record {
                id: format!("radr://{i}"),
                title: format!("Sample Radar {i}"),
                dri: format!("Person {i}"),
                status,
                tags,
                comments_history: vec![Comment {
                    id: format!("comment-{i}-1"),
                    timestamp: timestamp.clone(),
                    comment: format!("Initial comment {i}"),
                    author: team_dri.clone(),
                }],
                team_dri,
                notes: String::new(),
                history: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> DashboardConfig {
        let mut config = DashboardConfig::default();
        config.sample.seed = Some(seed);
        config
    }

    #[test]
    fn generates_twenty_unique_records() {
        let records = sample_records(&seeded(1));
        assert_eq!(records.len(), 20);
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(records[0].id, "radr://1");
        assert_eq!(records[19].title, "Sample Radar 20");
    }

    #[test]
    fn team_dri_is_round_robin() {
        let records = sample_records(&seeded(1));
        // i % 5: record 1 -> "Person B", record 5 -> "Person A"
        assert_eq!(records[0].team_dri, "Person B");
        assert_eq!(records[4].team_dri, "Person A");
        assert_eq!(records[0].comments_history[0].author, "Person B");
    }

    #[test]
    fn two_distinct_catalog_tags() {
        let config = seeded(3);
        for record in sample_records(&config) {
            assert_eq!(record.tags.len(), 2);
            assert_ne!(record.tags[0].text, record.tags[1].text);
            for tag in &record.tags {
                assert!(config.tags.contains(&tag.text));
                assert_eq!(tag.style, config.tags.style_for(&tag.text));
            }
        }
    }

    #[test]
    fn initial_comment_shape() {
        let records = sample_records(&seeded(5));
        let c = &records[2].comments_history[0];
        assert_eq!(c.id, "comment-3-1");
        assert_eq!(c.comment, "Initial comment 3");
        assert!(records[2].history.is_empty());
    }

    #[test]
    fn same_seed_same_statuses() {
        let a: Vec<Status> = sample_records(&seeded(42)).iter().map(|r| r.status).collect();
        let b: Vec<Status> = sample_records(&seeded(42)).iter().map(|r| r.status).collect();
        assert_eq!(a, b);
    }
}
