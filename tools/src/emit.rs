//! Table and summary file emitters.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codec::Snapshot;
use serde::Serialize;

use crate::project::{format_summary, project_leaderboard, project_worlds};

/// File name of the leaderboard table.
pub const LEADERBOARD_FILE: &str = "top_ten.csv";
/// File name of the global summary text.
pub const SUMMARY_FILE: &str = "summary.txt";
/// File name of the world aggregate table.
pub const WORLDS_FILE: &str = "all.csv";

/// Header row of the leaderboard table.
pub const LEADERBOARD_COLUMNS: [&str; 8] = [
    "seed",
    "stars",
    "resourceMultiplier",
    "userId",
    "platform",
    "name",
    "generationRate",
    "isAnonymous",
];
/// Header row of the world aggregate table.
pub const WORLD_COLUMNS: [&str; 5] = [
    "seed",
    "stars",
    "resourceMultiplier",
    "userCount",
    "generationRate",
];

/// Paths written by [`emit_tables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFiles {
    pub leaderboard: PathBuf,
    pub summary: PathBuf,
    pub worlds: PathBuf,
}

/// Writes the leaderboard table, summary text, and world table into `out_dir`.
pub fn emit_tables(snapshot: &Snapshot, out_dir: &Path) -> Result<EmittedFiles> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let files = EmittedFiles {
        leaderboard: out_dir.join(LEADERBOARD_FILE),
        summary: out_dir.join(SUMMARY_FILE),
        worlds: out_dir.join(WORLDS_FILE),
    };

    write_csv(
        &files.leaderboard,
        &LEADERBOARD_COLUMNS,
        &project_leaderboard(snapshot),
    )?;
    fs::write(&files.summary, format_summary(&snapshot.summary))
        .with_context(|| format!("write {}", files.summary.display()))?;
    write_csv(&files.worlds, &WORLD_COLUMNS, &project_worlds(snapshot))?;
    Ok(files)
}

/// Writes `columns` and then `rows`; the header is present even with no rows.
fn write_csv<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(columns)
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
