//! Whole-snapshot decoding and encoding.

use bytestream::{ByteReader, ByteWriter};
use tracing::{debug, warn};
use wire::{read_version, DecodeError, LimitKind, Limits, SectionKind, VersionTag};

use crate::aggregates::{decode_world_aggregates, encode_world_aggregates};
use crate::error::{CodecError, CodecResult, SectionContext};
use crate::leaderboard::{decode_leaderboard, encode_leaderboard};
use crate::summary::{decode_summary, encode_summary};
use crate::types::{GlobalSummary, Leaderboard, WorldAggregates};

/// One complete decoded publication of server state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub format_version: VersionTag,
    pub leaderboard: Leaderboard,
    pub summary: GlobalSummary,
    pub aggregates: WorldAggregates,
}

/// Decodes a snapshot from a fully materialized byte buffer.
///
/// Sections are read in fixed order over one cursor. The first failure
/// aborts the decode; no partial snapshot is returned. Bytes left after
/// the aggregate section are ignored.
pub fn decode_snapshot(bytes: &[u8], limits: &Limits) -> CodecResult<Snapshot> {
    let (snapshot, consumed) = decode_snapshot_prefix(bytes, limits)?;
    if consumed < bytes.len() {
        warn!(
            trailing = bytes.len() - consumed,
            "ignoring trailing bytes after world aggregates"
        );
    }
    Ok(snapshot)
}

/// Decodes a snapshot and returns it with the number of bytes consumed.
pub fn decode_snapshot_prefix(bytes: &[u8], limits: &Limits) -> CodecResult<(Snapshot, usize)> {
    if bytes.len() > limits.max_snapshot_bytes {
        return Err(CodecError::new(
            SectionKind::Header,
            None,
            DecodeError::LimitsExceeded {
                kind: LimitKind::SnapshotBytes,
                limit: limits.max_snapshot_bytes,
                actual: bytes.len(),
            },
        ));
    }

    let mut reader = ByteReader::new(bytes);
    let format_version = read_version(&mut reader).in_section(SectionKind::Header)?;
    debug!(version = format_version.raw(), len = bytes.len(), "decoding snapshot");

    let leaderboard = decode_leaderboard(&mut reader, limits)?;
    let summary = decode_summary(&mut reader)?;
    let aggregates = decode_world_aggregates(&mut reader, limits)?;

    let snapshot = Snapshot {
        format_version,
        leaderboard,
        summary,
        aggregates,
    };
    Ok((snapshot, reader.position()))
}

/// Encodes a snapshot into its wire form.
///
/// Anything that encodes successfully decodes under the same `limits`.
pub fn encode_snapshot(snapshot: &Snapshot, limits: &Limits) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::new();
    writer.write_u32(snapshot.format_version.raw());
    encode_leaderboard(&snapshot.leaderboard, limits, &mut writer)?;
    encode_summary(&snapshot.summary, &mut writer);
    encode_world_aggregates(&snapshot.aggregates, limits, &mut writer)?;
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LeaderboardEntry, Seed, WorldAggregate};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            format_version: VersionTag::new(1),
            leaderboard: Leaderboard {
                version: VersionTag::new(1),
                entries: vec![LeaderboardEntry {
                    seed: Seed::new(1_234_567_899),
                    user_id: 42,
                    platform_id: 1,
                    display_name: b"A".to_vec(),
                    raw_generation_capacity: 100,
                    is_anonymous: false,
                }],
            },
            summary: GlobalSummary {
                version: VersionTag::new(1),
                ..GlobalSummary::default()
            },
            aggregates: WorldAggregates {
                version: VersionTag::new(1),
                worlds: vec![WorldAggregate {
                    seed: Seed::new(1_234_567_899),
                    generation_capacity: 100.0,
                    player_count: 1,
                }],
            },
        }
    }

    #[test]
    fn encode_decode_sample() {
        let snapshot = sample_snapshot();
        let bytes = encode_snapshot(&snapshot, &Limits::for_testing()).unwrap();
        let decoded = decode_snapshot(&bytes, &Limits::for_testing()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn prefix_reports_consumed_bytes() {
        let mut bytes = encode_snapshot(&sample_snapshot(), &Limits::for_testing()).unwrap();
        let len = bytes.len();
        bytes.extend_from_slice(&[0xAA; 3]);

        let (_, consumed) = decode_snapshot_prefix(&bytes, &Limits::for_testing()).unwrap();
        assert_eq!(consumed, len);
        assert!(decode_snapshot(&bytes, &Limits::for_testing()).is_ok());
    }

    #[test]
    fn empty_input_fails_in_header() {
        let err = decode_snapshot(&[], &Limits::for_testing()).unwrap_err();
        assert_eq!(err.section(), SectionKind::Header);
        assert!(err.is_truncated());
    }

    #[test]
    fn oversized_input_rejected() {
        let limits = Limits {
            max_snapshot_bytes: 8,
            ..Limits::for_testing()
        };
        let err = decode_snapshot(&[0u8; 9], &limits).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeError::LimitsExceeded {
                kind: LimitKind::SnapshotBytes,
                limit: 8,
                actual: 9
            }
        ));
    }
}
