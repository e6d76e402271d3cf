//! Leaderboard section encoding/decoding.

use bytestream::{ByteReader, ByteWriter};
use tracing::debug;
use wire::{
    read_count, read_name_len, read_version, DecodeError, LimitKind, Limits, SectionKind,
    WireResult,
};

use crate::error::{CodecError, CodecResult, SectionContext};
use crate::section::write_count;
use crate::types::{Leaderboard, LeaderboardEntry, Seed};

const SECTION: SectionKind = SectionKind::Leaderboard;

/// Smallest possible encoded entry: seed, user id, platform, one-byte
/// name length, capacity, anonymity flag.
const MIN_ENTRY_BYTES: usize = 8 + 8 + 1 + 1 + 8 + 1;

/// Decodes the leaderboard section.
///
/// Entries are returned in stream order, which is the server's rank order.
pub fn decode_leaderboard(
    reader: &mut ByteReader<'_>,
    limits: &Limits,
) -> CodecResult<Leaderboard> {
    let version = read_version(reader).in_section(SECTION)?;
    let count = read_count(reader, SECTION, limits).in_section(SECTION)?;
    debug!(section = %SECTION, version = version.raw(), count, "decoding section");

    let mut entries = Vec::with_capacity(count.min(reader.remaining() / MIN_ENTRY_BYTES));
    for index in 0..count {
        let entry = decode_entry(reader, limits).in_record(SECTION, index)?;
        entries.push(entry);
    }
    Ok(Leaderboard { version, entries })
}

fn decode_entry(reader: &mut ByteReader<'_>, limits: &Limits) -> WireResult<LeaderboardEntry> {
    let seed = Seed::new(reader.read_i64()?);
    let user_id = reader.read_i64()?;
    let platform_id = reader.read_u8()?;
    let name_len = read_name_len(reader, limits)?;
    let display_name = reader.read_bytes(name_len)?.to_vec();
    let raw_generation_capacity = reader.read_i64()?;
    let is_anonymous = reader.read_u8()? != 0;
    Ok(LeaderboardEntry {
        seed,
        user_id,
        platform_id,
        display_name,
        raw_generation_capacity,
        is_anonymous,
    })
}

/// Encodes the leaderboard section.
pub fn encode_leaderboard(
    leaderboard: &Leaderboard,
    limits: &Limits,
    writer: &mut ByteWriter,
) -> CodecResult<()> {
    writer.write_u32(leaderboard.version.raw());
    write_count(
        writer,
        SECTION,
        leaderboard.entries.len(),
        LimitKind::LeaderboardEntries,
        limits.max_leaderboard_entries,
    )?;
    for (index, entry) in leaderboard.entries.iter().enumerate() {
        let name_len = entry.display_name.len();
        let encoded_len = u32::try_from(name_len)
            .ok()
            .filter(|_| name_len <= limits.max_name_bytes)
            .ok_or_else(|| {
                CodecError::new(
                    SECTION,
                    Some(index),
                    DecodeError::LimitsExceeded {
                        kind: LimitKind::NameBytes,
                        limit: limits.max_name_bytes.min(u32::MAX as usize),
                        actual: name_len,
                    },
                )
            })?;
        writer.write_i64(entry.seed.raw());
        writer.write_i64(entry.user_id);
        writer.write_u8(entry.platform_id);
        writer.write_var_u32(encoded_len);
        writer.write_bytes(&entry.display_name);
        writer.write_i64(entry.raw_generation_capacity);
        writer.write_u8(u8::from(entry.is_anonymous));
    }
    Ok(())
}
