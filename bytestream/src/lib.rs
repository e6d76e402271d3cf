//! Forward-only byte cursor and varint primitives for galaxy snapshots.
//!
//! This crate provides [`ByteReader`] and [`ByteWriter`] for little-endian,
//! fixed-width field access plus the 7-bit continuation varint used for
//! length prefixes.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every read is bounds-checked; nothing is zero-filled.
//! - **Forward only** - The reader never rewinds.
//! - **No domain knowledge** - This crate knows nothing about players, worlds, or sections.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u32(1);
//! writer.write_var_u32(300);
//! writer.write_bytes(b"hi");
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u32().unwrap(), 1);
//! assert_eq!(reader.read_var_u32().unwrap(), 300);
//! assert_eq!(reader.read_bytes(2).unwrap(), b"hi");
//! assert!(reader.is_empty());
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::{ByteReader, VARINT_MAX_GROUPS};
pub use writer::ByteWriter;
