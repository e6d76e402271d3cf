//! Version tags, record counts, and section identities.

use std::fmt;

use bytestream::ByteReader;
use tracing::warn;

use crate::error::{DecodeError, LimitKind, WireResult};
use crate::limits::Limits;

/// Width of a version tag in bytes.
pub const VERSION_SIZE: usize = 4;

/// Width of a record count in bytes.
pub const COUNT_SIZE: usize = 4;

/// A format or section version tag.
///
/// Tags are retained exactly as read. No value is currently rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionTag(u32);

impl VersionTag {
    /// Creates a version tag from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw tag value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for VersionTag {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// The parts of a snapshot stream, in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The leading stream version.
    Header,
    /// Top-N player leaderboard.
    Leaderboard,
    /// Global totals.
    Summary,
    /// Per-world aggregate table.
    WorldAggregates,
}

impl SectionKind {
    /// Returns the count limit that applies to this section, if it is counted.
    #[must_use]
    pub const fn count_limit(self, limits: &Limits) -> Option<(LimitKind, usize)> {
        match self {
            Self::Leaderboard => {
                Some((LimitKind::LeaderboardEntries, limits.max_leaderboard_entries))
            }
            Self::WorldAggregates => {
                Some((LimitKind::WorldAggregates, limits.max_world_aggregates))
            }
            Self::Header | Self::Summary => None,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Header => "header",
            Self::Leaderboard => "leaderboard",
            Self::Summary => "summary",
            Self::WorldAggregates => "world aggregates",
        };
        write!(f, "{name}")
    }
}

/// Reads a 32-bit version tag.
pub fn read_version(reader: &mut ByteReader<'_>) -> WireResult<VersionTag> {
    Ok(VersionTag(reader.read_u32()?))
}

/// Reads the signed record count of a repeated section.
///
/// A negative count declares an empty section and is read as zero. Counts
/// above the section's limit are rejected.
pub fn read_count(
    reader: &mut ByteReader<'_>,
    section: SectionKind,
    limits: &Limits,
) -> WireResult<usize> {
    let raw = reader.read_i32()?;
    let count = usize::try_from(raw).unwrap_or_else(|_| {
        warn!(section = %section, count = raw, "negative record count read as zero");
        0
    });
    if let Some((kind, limit)) = section.count_limit(limits) {
        if count > limit {
            return Err(DecodeError::LimitsExceeded {
                kind,
                limit,
                actual: count,
            });
        }
    }
    Ok(count)
}

/// Reads a varint length prefix for a display name.
pub fn read_name_len(reader: &mut ByteReader<'_>, limits: &Limits) -> WireResult<usize> {
    let len = reader.read_var_u32()? as usize;
    if len > limits.max_name_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::NameBytes,
            limit: limits.max_name_bytes,
            actual: len,
        });
    }
    Ok(len)
}
