use std::ops::Range;

use byteorder::{BigEndian, ByteOrder};
use serde::Serialize;

use super::error::{EofError, Result};

/// First byte of every EOF container.
pub const FORMAT_BYTE: u8 = 0xEF;

/// Magic following the format byte.
pub const MAGIC: [u8; 2] = [0xCA, 0xFE];

/// The only supported container version.
pub const VERSION: u8 = 1;

/// format byte + magic + version
pub(crate) const PREAMBLE_SIZE: usize = 4;

/// Section id followed by a big-endian u16 size.
pub(crate) const SECTION_ENTRY_SIZE: usize = 3;

/// Section ids as they appear in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Terminator,
    Code,
    Data,
}

impl SectionKind {
    pub const fn id(self) -> u8 {
        match self {
            SectionKind::Terminator => 0,
            SectionKind::Code => 1,
            SectionKind::Data => 2,
        }
    }
}

impl TryFrom<u8> for SectionKind {
    type Error = EofError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            0 => Ok(SectionKind::Terminator),
            1 => Ok(SectionKind::Code),
            2 => Ok(SectionKind::Data),
            _ => Err(EofError::UnknownSection),
        }
    }
}

/// Layout of a validated EOF1 container.
///
/// Offsets are absolute positions in the container bytes. The header is only
/// ever produced by [`read_eof1_header`], so
/// `data_offset + data_size` is always the exact container length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContainerHeader {
    pub code_offset: usize,
    pub code_size: u16,
    pub data_offset: usize,
    /// `0` when the container declares no data section.
    pub data_size: u16,
}

impl ContainerHeader {
    /// Size of the preamble plus all section entries and the terminator.
    #[inline]
    pub fn header_size(&self) -> usize {
        self.code_offset
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_size != 0
    }

    #[inline]
    pub fn code_range(&self) -> Range<usize> {
        self.code_offset..self.code_offset + usize::from(self.code_size)
    }

    /// Empty (and positioned at the end of the container) when there is no data section.
    #[inline]
    pub fn data_range(&self) -> Range<usize> {
        self.data_offset..self.data_offset + usize::from(self.data_size)
    }

    #[inline]
    pub fn total_size(&self) -> usize {
        self.data_range().end
    }
}

/// Whether `code` starts with [`FORMAT_BYTE`].
///
/// Code without the format byte is legacy bytecode and is not subject to
/// container validation.
#[inline]
pub fn has_format_byte(code: &[u8]) -> bool {
    code.first() == Some(&FORMAT_BYTE)
}

/// Whether bytes 1..3 of `code` hold [`MAGIC`].
#[inline]
pub fn has_eof_magic(code: &[u8]) -> bool {
    code.get(1..3) == Some(&MAGIC[..])
}

/// Whether `code` carries the full version 1 preamble.
#[inline]
pub fn is_eof_version1(code: &[u8]) -> bool {
    has_format_byte(code) && has_eof_magic(code) && code.get(3) == Some(&VERSION)
}

/// Whether `code` is a well-formed EOF1 container.
pub fn is_valid_eof(code: &[u8]) -> bool {
    read_eof1_header(code).is_ok()
}

/// Validate an EOF1 container and return its section layout.
///
/// The preamble is checked first (format byte, magic, version, in that
/// order), then the section entries are scanned once from offset 4, and
/// finally the declared sizes are checked against `code.len()`. The first
/// failing check determines the error.
///
/// Running out of input inside the entry list after at least one entry has
/// been read is not reported separately; it ends the scan and surfaces as
/// [`EofError::InvalidTotalSize`].
pub fn read_eof1_header(code: &[u8]) -> Result<ContainerHeader> {
    scan(code).map_err(|err| {
        log::debug!("rejected EOF container (len={}): {}", code.len(), err);
        err
    })
}

fn scan(code: &[u8]) -> Result<ContainerHeader> {
    if !has_format_byte(code) {
        return Err(EofError::InvalidFormatByte);
    }
    if !has_eof_magic(code) {
        return Err(EofError::InvalidMagic);
    }
    if code.get(3) != Some(&VERSION) {
        return Err(EofError::InvalidVersion);
    }

    let mut cursor = PREAMBLE_SIZE;
    let mut code_size: Option<u16> = None;
    let mut data_size: Option<u16> = None;

    loop {
        // A data entry can only follow a code entry, so running out here
        // with no code recorded means the header has no entries at all.
        let Some(&id) = code.get(cursor) else {
            if code_size.is_none() {
                return Err(EofError::CodeSectionMissing);
            }
            break;
        };

        let kind = SectionKind::try_from(id)?;
        log::trace!("section entry {:?} at 0x{:X}", kind, cursor);

        match kind {
            SectionKind::Terminator => {
                cursor += 1;
                break;
            }
            SectionKind::Code => {
                if code_size.is_some() {
                    return Err(EofError::MultipleCodeSections);
                }
                let size =
                    read_section_size(code, cursor).ok_or(EofError::CodeSectionSizeMissing)?;
                if size == 0 {
                    return Err(EofError::EmptyCodeSection);
                }
                code_size = Some(size);
            }
            SectionKind::Data => {
                if code_size.is_none() {
                    return Err(EofError::DataSectionBeforeCodeSection);
                }
                if data_size.is_some() {
                    return Err(EofError::MultipleDataSections);
                }
                let size =
                    read_section_size(code, cursor).ok_or(EofError::DataSectionSizeMissing)?;
                if size == 0 {
                    return Err(EofError::EmptyDataSection);
                }
                data_size = Some(size);
            }
        }

        cursor += SECTION_ENTRY_SIZE;
    }

    let Some(code_size) = code_size else {
        return Err(EofError::CodeSectionMissing);
    };
    let data_size = data_size.unwrap_or(0);

    let expected = cursor + usize::from(code_size) + usize::from(data_size);
    if expected != code.len() {
        return Err(EofError::InvalidTotalSize);
    }

    let header = ContainerHeader {
        code_offset: cursor,
        code_size,
        data_offset: cursor + usize::from(code_size),
        data_size,
    };
    log::debug!("accepted EOF container: {:?}", header);
    Ok(header)
}

/// Size field of the entry whose id sits at `entry`, if both bytes are present.
fn read_section_size(code: &[u8], entry: usize) -> Option<u16> {
    code.get(entry + 1..entry + SECTION_ENTRY_SIZE)
        .map(BigEndian::read_u16)
}
