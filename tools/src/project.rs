//! Tabular projection of decoded snapshots.

use codec::{GlobalSummary, LeaderboardEntry, Snapshot, WorldAggregate};
use serde::Serialize;

/// One leaderboard table row, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub seed: i64,
    pub stars: i64,
    pub resource_multiplier: String,
    pub user_id: i64,
    pub platform: &'static str,
    pub name: String,
    pub generation_rate: i64,
    pub is_anonymous: bool,
}

/// One world aggregate table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRow {
    pub seed: i64,
    pub stars: i64,
    pub resource_multiplier: String,
    pub user_count: i32,
    pub generation_rate: i64,
}

/// Global totals with generation scaled to per-minute units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub total_players: i32,
    pub total_generation_rate: i64,
    pub total_sails_launched: i64,
    pub total_dyson_spheres: i32,
}

/// Whole-snapshot document for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub format_version: u32,
    pub leaderboard: Vec<LeaderboardRow>,
    pub summary: SummaryRow,
    pub worlds: Vec<WorldRow>,
}

impl From<&LeaderboardEntry> for LeaderboardRow {
    fn from(entry: &LeaderboardEntry) -> Self {
        let parts = entry.seed.decompose();
        Self {
            seed: parts.galaxy_seed,
            stars: parts.star_count,
            resource_multiplier: parts.resource_multiplier().to_string(),
            user_id: entry.user_id,
            platform: entry.platform().label(),
            name: entry.display_name_lossy().into_owned(),
            generation_rate: entry.generation_rate(),
            is_anonymous: entry.is_anonymous,
        }
    }
}

impl From<&WorldAggregate> for WorldRow {
    fn from(world: &WorldAggregate) -> Self {
        let parts = world.seed.decompose();
        Self {
            seed: parts.galaxy_seed,
            stars: parts.star_count,
            resource_multiplier: parts.resource_multiplier().to_string(),
            user_count: world.player_count,
            generation_rate: world.generation_rate(),
        }
    }
}

impl From<&GlobalSummary> for SummaryRow {
    fn from(summary: &GlobalSummary) -> Self {
        Self {
            total_players: summary.total_players,
            total_generation_rate: summary.generation_rate(),
            total_sails_launched: summary.total_sails_launched,
            total_dyson_spheres: summary.total_dyson_spheres,
        }
    }
}

impl From<&Snapshot> for SnapshotDocument {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            format_version: snapshot.format_version.raw(),
            leaderboard: project_leaderboard(snapshot),
            summary: SummaryRow::from(&snapshot.summary),
            worlds: project_worlds(snapshot),
        }
    }
}

/// Projects leaderboard entries in stream order.
pub fn project_leaderboard(snapshot: &Snapshot) -> Vec<LeaderboardRow> {
    snapshot
        .leaderboard
        .entries
        .iter()
        .map(LeaderboardRow::from)
        .collect()
}

/// Projects world aggregates in stream order.
pub fn project_worlds(snapshot: &Snapshot) -> Vec<WorldRow> {
    snapshot
        .aggregates
        .worlds
        .iter()
        .map(WorldRow::from)
        .collect()
}

/// Formats the global totals as the four-line summary text.
pub fn format_summary(summary: &GlobalSummary) -> String {
    let row = SummaryRow::from(summary);
    format!(
        "Total players: {}\nTotal generation rate: {}\nTotal sails launched: {}\nTotal Dyson spheres: {}\n",
        row.total_players,
        row.total_generation_rate,
        row.total_sails_launched,
        row.total_dyson_spheres
    )
}

/// Renders the whole snapshot as one pretty-printed JSON object.
pub fn render_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SnapshotDocument::from(snapshot))
}

/// Renders a human-readable overview of a snapshot.
pub fn format_pretty(snapshot: &Snapshot) -> String {
    let mut out = format!("format version: {}\n", snapshot.format_version);
    out.push_str(&format_summary(&snapshot.summary));
    out.push_str(&format!(
        "leaderboard ({} entries):\n",
        snapshot.leaderboard.entries.len()
    ));
    for (rank, row) in project_leaderboard(snapshot).iter().enumerate() {
        let name = if row.is_anonymous {
            format!("{} (anonymous)", row.name)
        } else {
            row.name.clone()
        };
        out.push_str(&format!(
            "  #{:<3} {name:<24} {:<10} seed {:08} stars {:>3} res {:>9} rate {}\n",
            rank + 1,
            row.platform,
            row.seed,
            row.stars,
            row.resource_multiplier,
            row.generation_rate
        ));
    }
    out.push_str(&format!("worlds: {}\n", snapshot.aggregates.worlds.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{Leaderboard, Seed, VersionTag, WorldAggregates};

    fn sample() -> Snapshot {
        Snapshot {
            format_version: VersionTag::new(1),
            leaderboard: Leaderboard {
                version: VersionTag::new(1),
                entries: vec![LeaderboardEntry {
                    seed: Seed::new(1_234_599_899),
                    user_id: 42,
                    platform_id: 3,
                    display_name: b"A".to_vec(),
                    raw_generation_capacity: 100,
                    is_anonymous: true,
                }],
            },
            summary: GlobalSummary {
                version: VersionTag::new(1),
                total_generation_capacity: 2,
                total_sails_launched: 3,
                total_players: 4,
                total_dyson_spheres: 5,
            },
            aggregates: WorldAggregates {
                version: VersionTag::new(1),
                worlds: vec![WorldAggregate {
                    seed: Seed::new(1_234_525_000),
                    generation_capacity: 0.5,
                    player_count: 9,
                }],
            },
        }
    }

    #[test]
    fn leaderboard_row_projection() {
        let rows = project_leaderboard(&sample());
        assert_eq!(
            rows,
            vec![LeaderboardRow {
                seed: 12,
                stars: 345,
                resource_multiplier: "Unlimited".to_string(),
                user_id: 42,
                platform: "XGP",
                name: "A".to_string(),
                generation_rate: 6000,
                is_anonymous: true,
            }]
        );
    }

    #[test]
    fn world_row_projection() {
        let rows = project_worlds(&sample());
        assert_eq!(
            rows,
            vec![WorldRow {
                seed: 12,
                stars: 345,
                resource_multiplier: "2.5".to_string(),
                user_count: 9,
                generation_rate: 30,
            }]
        );
    }

    #[test]
    fn summary_text_order() {
        let text = format_summary(&sample().summary);
        assert_eq!(
            text,
            "Total players: 4\nTotal generation rate: 120\nTotal sails launched: 3\nTotal Dyson spheres: 5\n"
        );
    }

    #[test]
    fn json_document_uses_camel_case() {
        let document = SnapshotDocument::from(&sample());
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["formatVersion"], 1);
        assert_eq!(json["leaderboard"][0]["resourceMultiplier"], "Unlimited");
        assert_eq!(json["leaderboard"][0]["isAnonymous"], true);
        assert_eq!(json["summary"]["totalGenerationRate"], 120);
        assert_eq!(json["worlds"][0]["userCount"], 9);
    }

    #[test]
    fn render_json_is_one_object() {
        let text = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(4));
    }

    #[test]
    fn pretty_output_mentions_rank_and_counts() {
        let text = format_pretty(&sample());
        assert!(text.contains("#1"));
        assert!(text.contains("(anonymous)"));
        assert!(text.contains("worlds: 1"));
    }
}
