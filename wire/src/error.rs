//! Error types for snapshot framing.

use std::fmt;

use bytestream::ByteError;

/// Result type for framing operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Decode errors for a single field or framing element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The stream ended before a field could be completed.
    TruncatedStream { requested: usize, available: usize },

    /// A varint length prefix exceeded the five-group bound.
    MalformedVarInt,

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific decode limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    SnapshotBytes,
    LeaderboardEntries,
    WorldAggregates,
    NameBytes,
}

impl DecodeError {
    /// Returns `true` if the stream ran out of bytes.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedStream { .. })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedStream {
                requested,
                available,
            } => {
                write!(
                    f,
                    "truncated stream: need {requested} bytes, have {available}"
                )
            }
            Self::MalformedVarInt => {
                write!(f, "malformed varint: too many continuation bytes")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SnapshotBytes => "snapshot bytes",
            Self::LeaderboardEntries => "leaderboard entries",
            Self::WorldAggregates => "world aggregates",
            Self::NameBytes => "name bytes",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {}

impl From<ByteError> for DecodeError {
    fn from(err: ByteError) -> Self {
        match err {
            ByteError::UnexpectedEof {
                requested,
                available,
            } => Self::TruncatedStream {
                requested,
                available,
            },
            ByteError::InvalidVarint => Self::MalformedVarInt,
        }
    }
}
