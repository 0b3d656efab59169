//! eof-container
//!
//! Validation and decoding of EOF1 bytecode containers.
//!
//! A container is admitted into the VM execution path only after
//! [`read_eof1_header`] has proven that its declared structure matches its
//! actual length. The returned [`ContainerHeader`] carries the offsets the
//! interpreter uses to slice out the code and data sections.
//!
//! ```
//! use eof_container::{read_eof1_header, EofError};
//!
//! let header = read_eof1_header(&[0xEF, 0xCA, 0xFE, 0x01, 0x01, 0x00, 0x02, 0x00, 0x60, 0x00])?;
//! assert_eq!(header.code_size, 2);
//! assert_eq!(header.data_size, 0);
//! # Ok::<(), EofError>(())
//! ```

pub mod format;

pub use format::{
    has_eof_magic, has_format_byte, is_eof_version1, is_valid_eof, read_eof1_header, BuildError,
    CodeFormat, Container, ContainerBuilder, ContainerHeader, EofError, Result, SectionKind,
    FORMAT_BYTE, MAGIC, VERSION,
};
