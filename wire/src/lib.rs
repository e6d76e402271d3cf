//! Section framing for galaxy snapshot streams.
//!
//! This crate knows the shape of the stream but not its records: the
//! leading format version, the per-section version tags, the signed record
//! counts that precede repeated sections, and the limits enforced while
//! reading them.
//!
//! # Design Principles
//!
//! - **Retained versions** - Version tags are read and kept, never validated.
//! - **Bounded decoding** - Counts and lengths are checked against limits before iteration.
//! - **No domain knowledge** - Players and worlds live in the codec crate.
//!
//! See `FORMAT.md` for the complete layout.

mod error;
mod header;
mod limits;

pub use error::{DecodeError, LimitKind, WireResult};
pub use header::{
    read_count, read_name_len, read_version, SectionKind, VersionTag, COUNT_SIZE, VERSION_SIZE,
};
pub use limits::Limits;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn public_api_exports() {
        let _ = Limits::default();
        let _ = VersionTag::new(1);
        let _ = SectionKind::Leaderboard;
        let _ = LimitKind::NameBytes;

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn limits_default_is_reasonable() {
        let limits = Limits::default();
        assert!(
            limits.max_snapshot_bytes >= 1024 * 1024,
            "should allow multi-megabyte snapshots"
        );
        assert!(
            limits.max_name_bytes >= 64,
            "should allow useful display names"
        );
    }

    #[test]
    fn framing_sizes_match_field_widths() {
        assert_eq!(VERSION_SIZE, size_of::<u32>());
        assert_eq!(COUNT_SIZE, size_of::<i32>());
    }
}
