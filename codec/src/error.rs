//! Error types for snapshot decoding.

use std::fmt;

use wire::{DecodeError, SectionKind};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// A decode failure, located by section and record index.
///
/// Decoding never recovers locally: the first failing field aborts the
/// whole snapshot and is reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    section: SectionKind,
    record: Option<usize>,
    kind: DecodeError,
}

impl CodecError {
    #[must_use]
    pub const fn new(section: SectionKind, record: Option<usize>, kind: DecodeError) -> Self {
        Self {
            section,
            record,
            kind,
        }
    }

    /// The section that was being decoded.
    #[must_use]
    pub const fn section(&self) -> SectionKind {
        self.section
    }

    /// Zero-based record index within the section, if inside a record.
    #[must_use]
    pub const fn record(&self) -> Option<usize> {
        self.record
    }

    /// The underlying field error.
    #[must_use]
    pub const fn kind(&self) -> &DecodeError {
        &self.kind
    }

    /// Returns `true` if the stream ended early.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.kind.is_truncated()
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(index) => write!(
                f,
                "{} section, record {index}: {}",
                self.section, self.kind
            ),
            None => write!(f, "{} section: {}", self.section, self.kind),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Attaches section and record context to field-level results.
pub(crate) trait SectionContext<T> {
    fn in_section(self, section: SectionKind) -> CodecResult<T>;
    fn in_record(self, section: SectionKind, index: usize) -> CodecResult<T>;
}

impl<T, E: Into<DecodeError>> SectionContext<T> for Result<T, E> {
    fn in_section(self, section: SectionKind) -> CodecResult<T> {
        self.map_err(|err| CodecError::new(section, None, err.into()))
    }

    fn in_record(self, section: SectionKind, index: usize) -> CodecResult<T> {
        self.map_err(|err| CodecError::new(section, Some(index), err.into()))
    }
}
