//! Configurable limits for bounded decoding.

/// Limits enforced while decoding a snapshot.
///
/// Record counts and name lengths come from untrusted input; these bounds
/// keep memory use proportional to what the caller is willing to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum snapshot size in bytes.
    pub max_snapshot_bytes: usize,

    /// Maximum number of leaderboard entries.
    pub max_leaderboard_entries: usize,

    /// Maximum number of world aggregate records.
    pub max_world_aggregates: usize,

    /// Maximum display name length in bytes.
    pub max_name_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Published snapshots are a few megabytes uncompressed
            max_snapshot_bytes: 64 * 1024 * 1024,
            max_leaderboard_entries: 1_000_000,
            max_world_aggregates: 1_000_000,
            max_name_bytes: 4096,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_snapshot_bytes: 64 * 1024,
            max_leaderboard_entries: 32,
            max_world_aggregates: 64,
            max_name_bytes: 256,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_snapshot_bytes: usize::MAX,
            max_leaderboard_entries: usize::MAX,
            max_world_aggregates: usize::MAX,
            max_name_bytes: usize::MAX,
        }
    }
}
