//! Core domain types and derived values.

use std::borrow::Cow;
use std::fmt;

use wire::VersionTag;

use crate::derived::{
    decompose_seed, format_resource_multiplier, scale_generation_capacity, scale_world_capacity,
    UNLIMITED_RESOURCE_CODE,
};

/// A packed world seed.
///
/// Digits encode the galaxy seed, star count, and resource multiplier code.
/// See [`decompose_seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seed(i64);

impl Seed {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Splits the packed seed into its components.
    #[must_use]
    pub const fn decompose(self) -> SeedDecomposition {
        decompose_seed(self.0)
    }
}

impl From<i64> for Seed {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// The components packed into a [`Seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedDecomposition {
    pub galaxy_seed: i64,
    /// Star count, 0 to 999 for non-negative seeds.
    pub star_count: i64,
    /// Resource multiplier code, 0 to 99 for non-negative seeds.
    pub resource_code: i64,
}

impl SeedDecomposition {
    #[must_use]
    pub const fn resource_multiplier(&self) -> ResourceMultiplier {
        ResourceMultiplier(self.resource_code)
    }
}

/// A resource multiplier code in tenths, with `99` meaning unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceMultiplier(i64);

impl ResourceMultiplier {
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_unlimited(self) -> bool {
        self.0 == UNLIMITED_RESOURCE_CODE
    }
}

impl fmt::Display for ResourceMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_resource_multiplier(self.0))
    }
}

/// Distribution platform of a player account.
///
/// Unknown ids map to [`Platform::Standalone`]; the raw id stays on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Standalone,
    Steam,
    WeGame,
    Xbox,
}

impl Platform {
    #[must_use]
    pub const fn from_raw(id: u8) -> Self {
        match id {
            1 => Self::Steam,
            2 => Self::WeGame,
            3 => Self::Xbox,
            _ => Self::Standalone,
        }
    }

    /// Human-readable platform label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steam => "Steam",
            Self::WeGame => "WeGame",
            Self::Xbox => "XGP",
            Self::Standalone => "Standalone",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One player in the top-N leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub seed: Seed,
    pub user_id: i64,
    pub platform_id: u8,
    /// Name bytes exactly as published.
    pub display_name: Vec<u8>,
    /// Generation capacity in per-tick units.
    pub raw_generation_capacity: i64,
    pub is_anonymous: bool,
}

impl LeaderboardEntry {
    #[must_use]
    pub const fn platform(&self) -> Platform {
        Platform::from_raw(self.platform_id)
    }

    /// Display name as text, with invalid UTF-8 replaced by U+FFFD.
    #[must_use]
    pub fn display_name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.display_name)
    }

    /// Generation rate in per-minute units.
    #[must_use]
    pub const fn generation_rate(&self) -> i64 {
        scale_generation_capacity(self.raw_generation_capacity)
    }
}

/// The leaderboard section, in server rank order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaderboard {
    pub version: VersionTag,
    pub entries: Vec<LeaderboardEntry>,
}

/// Server-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalSummary {
    pub version: VersionTag,
    /// Total generation capacity in per-tick units.
    pub total_generation_capacity: i64,
    pub total_sails_launched: i64,
    pub total_players: i32,
    pub total_dyson_spheres: i32,
}

impl GlobalSummary {
    /// Total generation rate in per-minute units.
    #[must_use]
    pub const fn generation_rate(&self) -> i64 {
        scale_generation_capacity(self.total_generation_capacity)
    }
}

/// Per-world rollup across all players in that world.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldAggregate {
    pub seed: Seed,
    /// Generation capacity in per-tick units.
    pub generation_capacity: f32,
    pub player_count: i32,
}

impl WorldAggregate {
    /// Generation rate in per-minute units, truncated toward zero.
    #[must_use]
    pub fn generation_rate(&self) -> i64 {
        scale_world_capacity(self.generation_capacity)
    }
}

/// The world aggregate section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldAggregates {
    pub version: VersionTag,
    pub worlds: Vec<WorldAggregate>,
}
