//! Structural inspection of snapshot bytes.

use anyhow::Result;
use codec::{decode_snapshot_prefix, Limits, VersionTag};

/// Structure of one snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub byte_len: usize,
    pub format_version: VersionTag,
    pub leaderboard_version: VersionTag,
    pub leaderboard_entries: usize,
    pub summary_version: VersionTag,
    pub total_players: i32,
    pub aggregates_version: VersionTag,
    pub world_count: usize,
    /// Bytes left unread after the aggregate section.
    pub trailing_bytes: usize,
}

/// Decodes `bytes` and reports versions, counts, and trailing data.
pub fn inspect_snapshot(bytes: &[u8], limits: &Limits) -> Result<InspectReport> {
    let (snapshot, consumed) = decode_snapshot_prefix(bytes, limits)?;
    Ok(InspectReport {
        byte_len: bytes.len(),
        format_version: snapshot.format_version,
        leaderboard_version: snapshot.leaderboard.version,
        leaderboard_entries: snapshot.leaderboard.entries.len(),
        summary_version: snapshot.summary.version,
        total_players: snapshot.summary.total_players,
        aggregates_version: snapshot.aggregates.version,
        world_count: snapshot.aggregates.worlds.len(),
        trailing_bytes: bytes.len() - consumed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{encode_snapshot, Snapshot};

    #[test]
    fn inspect_reports_trailing_bytes() {
        let mut bytes = encode_snapshot(&Snapshot::default(), &Limits::for_testing()).unwrap();
        let encoded_len = bytes.len();
        bytes.push(0xEE);

        let report = inspect_snapshot(&bytes, &Limits::for_testing()).unwrap();
        assert_eq!(report.byte_len, encoded_len + 1);
        assert_eq!(report.trailing_bytes, 1);
        assert_eq!(report.leaderboard_entries, 0);
        assert_eq!(report.world_count, 0);
    }

    #[test]
    fn inspect_propagates_decode_errors() {
        let err = inspect_snapshot(&[1, 0], &Limits::for_testing()).unwrap_err();
        let codec_err = err.downcast_ref::<codec::CodecError>().unwrap();
        assert!(codec_err.is_truncated());
    }
}
