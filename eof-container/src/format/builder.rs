use byteorder::{BigEndian, ByteOrder};

use super::header::{SectionKind, FORMAT_BYTE, MAGIC, PREAMBLE_SIZE, SECTION_ENTRY_SIZE, VERSION};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("code section must not be empty")]
    EmptyCode,

    #[error("code section too large: len={len}, max={}", u16::MAX)]
    CodeTooLarge { len: usize },

    #[error("data section too large: len={len}, max={}", u16::MAX)]
    DataTooLarge { len: usize },
}

/// Encodes an EOF1 container from its sections.
///
/// An empty data slice means the container declares no data section.
#[derive(Clone, Debug)]
pub struct ContainerBuilder<'a> {
    code: &'a [u8],
    data: &'a [u8],
}

impl<'a> ContainerBuilder<'a> {
    pub fn new(code: &'a [u8]) -> Self {
        Self { code, data: &[] }
    }

    pub fn with_data(mut self, data: &'a [u8]) -> Self {
        self.data = data;
        self
    }

    pub fn build(&self) -> Result<Vec<u8>, BuildError> {
        if self.code.is_empty() {
            return Err(BuildError::EmptyCode);
        }
        let code_size = u16::try_from(self.code.len())
            .map_err(|_| BuildError::CodeTooLarge { len: self.code.len() })?;
        let data_size = u16::try_from(self.data.len())
            .map_err(|_| BuildError::DataTooLarge { len: self.data.len() })?;

        let entries = if data_size == 0 { 1 } else { 2 };
        let header_size = PREAMBLE_SIZE + entries * SECTION_ENTRY_SIZE + 1;
        let mut out = Vec::with_capacity(header_size + self.code.len() + self.data.len());

        out.push(FORMAT_BYTE);
        out.extend_from_slice(&MAGIC);
        out.push(VERSION);

        put_section(&mut out, SectionKind::Code, code_size);
        if data_size != 0 {
            put_section(&mut out, SectionKind::Data, data_size);
        }
        out.push(SectionKind::Terminator.id());

        out.extend_from_slice(self.code);
        out.extend_from_slice(self.data);

        Ok(out)
    }
}

fn put_section(buffer: &mut Vec<u8>, kind: SectionKind, size: u16) {
    let mut raw = [kind.id(), 0, 0];
    BigEndian::write_u16(&mut raw[1..], size);
    buffer.extend_from_slice(&raw);
}
