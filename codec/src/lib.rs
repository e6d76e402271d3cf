//! Snapshot decoding for published galaxy leaderboards.
//!
//! This is the main codec crate that ties together the byte cursor and the
//! section framing to decode a complete snapshot: the top-N leaderboard,
//! the global summary, and the per-world aggregate table.
//!
//! # Features
//!
//! - Strictly sequential decoding over one forward-only cursor
//! - Section and record context on every failure
//! - Derived values: seed decomposition, resource multipliers, platforms,
//!   per-minute generation rates
//! - An encoder producing the same wire form, for fixtures and tooling
//!
//! # Design Principles
//!
//! - **All or nothing** - A snapshot is returned fully populated or not at all.
//! - **Raw values kept** - Records hold wire values; derived values are computed on demand.
//! - **Stream order** - Records are never sorted, filtered, or deduplicated.

mod aggregates;
mod derived;
mod error;
mod leaderboard;
mod section;
mod snapshot;
mod summary;
mod types;

pub use aggregates::{decode_world_aggregates, encode_world_aggregates};
pub use derived::{
    decompose_seed, format_resource_multiplier, platform_name, scale_generation_capacity,
    scale_world_capacity, GENERATION_RATE_FACTOR, UNLIMITED_LABEL, UNLIMITED_RESOURCE_CODE,
};
pub use error::{CodecError, CodecResult};
pub use leaderboard::{decode_leaderboard, encode_leaderboard};
pub use snapshot::{decode_snapshot, decode_snapshot_prefix, encode_snapshot, Snapshot};
pub use summary::{decode_summary, encode_summary};
pub use types::{
    GlobalSummary, Leaderboard, LeaderboardEntry, Platform, ResourceMultiplier, Seed,
    SeedDecomposition, WorldAggregate, WorldAggregates,
};
pub use wire::{DecodeError, LimitKind, Limits, SectionKind, VersionTag};
