//! Global summary section encoding/decoding.

use bytestream::{ByteReader, ByteWriter};
use tracing::debug;
use wire::{read_version, SectionKind};

use crate::error::{CodecResult, SectionContext};
use crate::types::GlobalSummary;

const SECTION: SectionKind = SectionKind::Summary;

/// Decodes the global summary section: a version tag and exactly one record.
pub fn decode_summary(reader: &mut ByteReader<'_>) -> CodecResult<GlobalSummary> {
    let version = read_version(reader).in_section(SECTION)?;
    debug!(section = %SECTION, version = version.raw(), "decoding section");

    let total_generation_capacity = reader.read_i64().in_record(SECTION, 0)?;
    let total_sails_launched = reader.read_i64().in_record(SECTION, 0)?;
    let total_players = reader.read_i32().in_record(SECTION, 0)?;
    let total_dyson_spheres = reader.read_i32().in_record(SECTION, 0)?;
    Ok(GlobalSummary {
        version,
        total_generation_capacity,
        total_sails_launched,
        total_players,
        total_dyson_spheres,
    })
}

/// Encodes the global summary section.
pub fn encode_summary(summary: &GlobalSummary, writer: &mut ByteWriter) {
    writer.write_u32(summary.version.raw());
    writer.write_i64(summary.total_generation_capacity);
    writer.write_i64(summary.total_sails_launched);
    writer.write_i32(summary.total_players);
    writer.write_i32(summary.total_dyson_spheres);
}
