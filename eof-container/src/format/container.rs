use super::error::Result;
use super::header::{read_eof1_header, ContainerHeader};

/// A validated EOF1 container borrowed from its backing bytes.
///
/// The section slices are taken from ranges [`read_eof1_header`] has already
/// checked against the input length, so accessors never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Container<'a> {
    bytes: &'a [u8],
    header: ContainerHeader,
}

impl<'a> Container<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let header = read_eof1_header(bytes)?;
        Ok(Self { bytes, header })
    }

    #[inline]
    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// The code section the interpreter executes.
    #[inline]
    pub fn code(&self) -> &'a [u8] {
        &self.bytes[self.header.code_range()]
    }

    /// Read-only auxiliary data; empty when no data section was declared.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        &self.bytes[self.header.data_range()]
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}
