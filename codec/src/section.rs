//! Helpers shared by the section encoders.

use bytestream::ByteWriter;
use wire::{DecodeError, LimitKind, SectionKind};

use crate::error::{CodecError, CodecResult};

/// Writes a record count, rejecting counts the decoder would refuse.
pub(crate) fn write_count(
    writer: &mut ByteWriter,
    section: SectionKind,
    count: usize,
    kind: LimitKind,
    limit: usize,
) -> CodecResult<()> {
    let encoded = i32::try_from(count)
        .ok()
        .filter(|_| count <= limit)
        .ok_or_else(|| {
            CodecError::new(
                section,
                None,
                DecodeError::LimitsExceeded {
                    kind,
                    limit: limit.min(i32::MAX as usize),
                    actual: count,
                },
            )
        })?;
    writer.write_i32(encoded);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_count_within_limit() {
        let mut writer = ByteWriter::new();
        write_count(
            &mut writer,
            SectionKind::WorldAggregates,
            3,
            LimitKind::WorldAggregates,
            4,
        )
        .unwrap();
        assert_eq!(writer.finish(), 3i32.to_le_bytes().to_vec());
    }

    #[test]
    fn write_count_over_limit() {
        let mut writer = ByteWriter::new();
        let err = write_count(
            &mut writer,
            SectionKind::WorldAggregates,
            5,
            LimitKind::WorldAggregates,
            4,
        )
        .unwrap_err();
        assert_eq!(err.section(), SectionKind::WorldAggregates);
        assert!(writer.is_empty());
    }
}
