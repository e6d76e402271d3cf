//! Fetch, decode, and tabulate galaxy leaderboard snapshots.
//!
//! This crate sits on top of the codec:
//!
//! - Acquire the latest snapshot from the publishing server (gzip over HTTP)
//! - Project decoded records into leaderboard and world tables
//! - Emit CSV tables, summary text, JSON, or a pretty overview
//! - Inspect snapshot structure without emitting anything
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Rows keep stream order and use derived values.

mod emit;
mod fetch;
mod inspect;
mod project;

pub use emit::{
    emit_tables, EmittedFiles, LEADERBOARD_COLUMNS, LEADERBOARD_FILE, SUMMARY_FILE, WORLDS_FILE,
    WORLD_COLUMNS,
};
pub use fetch::{
    generate_steam_user_id, gunzip, parse_login_header, validate_retrieval_id, CachedSnapshot,
    LoginHeader, SnapshotClient, DEFAULT_SERVER,
};
pub use inspect::{inspect_snapshot, InspectReport};
pub use project::{
    format_pretty, format_summary, project_leaderboard, project_worlds, render_json,
    LeaderboardRow, SnapshotDocument, SummaryRow, WorldRow,
};
