use serde::Serialize;

use super::error::Result;
use super::header::{has_format_byte, read_eof1_header, ContainerHeader};

/// How the VM should treat a piece of stored bytecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum CodeFormat {
    /// No format byte; executed as plain bytecode.
    Legacy,
    /// A validated EOF1 container.
    Eof1(ContainerHeader),
}

impl CodeFormat {
    /// Classify `code` for admission.
    ///
    /// Anything starting with the format byte is claimed by the container
    /// format and must validate; there is no fallback to legacy execution.
    pub fn detect(code: &[u8]) -> Result<Self> {
        if !has_format_byte(code) {
            return Ok(CodeFormat::Legacy);
        }
        read_eof1_header(code).map(CodeFormat::Eof1)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, CodeFormat::Eof1(_))
    }
}
