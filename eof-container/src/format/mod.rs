//! EOF1 container format.
//!
//! Byte layout (sizes are big-endian):
//! - 0x00: u8  format byte (`0xEF`)
//! - 0x01: [u8; 2] magic (`0xCA 0xFE`)
//! - 0x03: u8  version (`1`)
//! - 0x04: section entries `(id: u8, size: u16)`, terminated by id `0`
//! - code bytes, then optional data bytes, with nothing after them

mod builder;
mod container;
mod detect;
mod error;
mod header;

pub use builder::{BuildError, ContainerBuilder};
pub use container::Container;
pub use detect::CodeFormat;
pub use error::{EofError, Result};
pub use header::{
    has_eof_magic, has_format_byte, is_eof_version1, is_valid_eof, read_eof1_header,
    ContainerHeader, SectionKind, FORMAT_BYTE, MAGIC, VERSION,
};
