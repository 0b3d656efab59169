use anyhow::Result;
use eof_container::{CodeFormat, ContainerHeader, EofError};
use serde::Serialize;

use crate::config::OutputFormat;

/// Outcome of validating one input, as printed by `validate`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub source: String,
    pub length: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ContainerHeader>,
}

impl Report {
    pub fn from_header(
        source: String,
        length: usize,
        result: Result<ContainerHeader, EofError>,
    ) -> Self {
        Self::from_format(source, length, result.map(CodeFormat::Eof1))
    }

    pub fn from_format(
        source: String,
        length: usize,
        result: Result<CodeFormat, EofError>,
    ) -> Self {
        let mut report = Self {
            source,
            length,
            valid: result.is_ok(),
            format: None,
            error: None,
            header: None,
        };
        match result {
            Ok(CodeFormat::Legacy) => report.format = Some("legacy"),
            Ok(CodeFormat::Eof1(header)) => {
                report.format = Some("eof1");
                report.header = Some(header);
            }
            Err(err) => report.error = Some(err.to_string()),
        }
        report
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
            OutputFormat::Toml => toml::to_string_pretty(self)?,
        })
    }
}
