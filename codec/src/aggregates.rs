//! World aggregate section encoding/decoding.

use bytestream::{ByteReader, ByteWriter};
use tracing::debug;
use wire::{read_count, read_version, LimitKind, Limits, SectionKind, WireResult};

use crate::error::{CodecResult, SectionContext};
use crate::section::write_count;
use crate::types::{Seed, WorldAggregate, WorldAggregates};

const SECTION: SectionKind = SectionKind::WorldAggregates;

/// Encoded record size: seed, capacity, player count, reserved pad.
const RECORD_BYTES: usize = 8 + 4 + 4 + 4;

/// Decodes the world aggregate section.
///
/// Every record is followed by a reserved 32-bit field that is consumed
/// and discarded.
pub fn decode_world_aggregates(
    reader: &mut ByteReader<'_>,
    limits: &Limits,
) -> CodecResult<WorldAggregates> {
    let version = read_version(reader).in_section(SECTION)?;
    let count = read_count(reader, SECTION, limits).in_section(SECTION)?;
    debug!(section = %SECTION, version = version.raw(), count, "decoding section");

    let mut worlds = Vec::with_capacity(count.min(reader.remaining() / RECORD_BYTES));
    for index in 0..count {
        let world = decode_world(reader).in_record(SECTION, index)?;
        worlds.push(world);
    }
    Ok(WorldAggregates { version, worlds })
}

fn decode_world(reader: &mut ByteReader<'_>) -> WireResult<WorldAggregate> {
    let seed = Seed::new(reader.read_i64()?);
    let generation_capacity = reader.read_f32()?;
    let player_count = reader.read_i32()?;
    let _reserved = reader.read_u32()?;
    Ok(WorldAggregate {
        seed,
        generation_capacity,
        player_count,
    })
}

/// Encodes the world aggregate section, writing zero for each reserved pad.
pub fn encode_world_aggregates(
    aggregates: &WorldAggregates,
    limits: &Limits,
    writer: &mut ByteWriter,
) -> CodecResult<()> {
    writer.write_u32(aggregates.version.raw());
    write_count(
        writer,
        SECTION,
        aggregates.worlds.len(),
        LimitKind::WorldAggregates,
        limits.max_world_aggregates,
    )?;
    for world in &aggregates.worlds {
        writer.write_i64(world.seed.raw());
        writer.write_f32(world.generation_capacity);
        writer.write_i32(world.player_count);
        writer.write_u32(0);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::{DecodeError, VersionTag};

    #[test]
    fn decode_skips_reserved_pad() {
        let mut writer = ByteWriter::new();
        writer.write_u32(1);
        writer.write_i32(2);
        writer.write_i64(64_010_000);
        writer.write_f32(2.5);
        writer.write_i32(12);
        writer.write_u32(0xFFFF_FFFF);
        writer.write_i64(1_234_567_899);
        writer.write_f32(0.5);
        writer.write_i32(1);
        writer.write_u32(0);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let aggregates = decode_world_aggregates(&mut reader, &Limits::for_testing()).unwrap();
        assert!(reader.is_empty());
        assert_eq!(aggregates.worlds.len(), 2);
        assert_eq!(aggregates.worlds[0].seed.raw(), 64_010_000);
        assert_eq!(aggregates.worlds[0].player_count, 12);
        assert_eq!(aggregates.worlds[0].generation_rate(), 150);
        assert_eq!(aggregates.worlds[1].seed.raw(), 1_234_567_899);
        assert_eq!(aggregates.worlds[1].generation_rate(), 30);
    }

    #[test]
    fn decode_empty_section() {
        let mut writer = ByteWriter::new();
        writer.write_u32(1);
        writer.write_i32(0);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let aggregates = decode_world_aggregates(&mut reader, &Limits::for_testing()).unwrap();
        assert!(aggregates.worlds.is_empty());
    }

    #[test]
    fn missing_pad_is_truncation() {
        let mut writer = ByteWriter::new();
        writer.write_u32(1);
        writer.write_i32(1);
        writer.write_i64(1);
        writer.write_f32(1.0);
        writer.write_i32(1);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = decode_world_aggregates(&mut reader, &Limits::for_testing()).unwrap_err();
        assert_eq!(err.record(), Some(0));
        assert_eq!(
            err.kind(),
            &DecodeError::TruncatedStream {
                requested: 4,
                available: 0
            }
        );
    }

    #[test]
    fn count_larger_than_stream_fails_without_huge_allocation() {
        let mut writer = ByteWriter::new();
        writer.write_u32(1);
        writer.write_i32(1_000_000);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = decode_world_aggregates(&mut reader, &Limits::default()).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.record(), Some(0));
    }

    #[test]
    fn encode_writes_zero_pad() {
        let aggregates = WorldAggregates {
            version: VersionTag::new(1),
            worlds: vec![WorldAggregate {
                seed: Seed::new(7),
                generation_capacity: 1.0,
                player_count: 2,
            }],
        };
        let mut writer = ByteWriter::new();
        encode_world_aggregates(&aggregates, &Limits::for_testing(), &mut writer).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 4 + 4 + RECORD_BYTES);
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 0]);
    }
}
