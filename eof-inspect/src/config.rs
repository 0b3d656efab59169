use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Logger configuration used by `eof-inspect`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerConfig {
    pub level_filter: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level_filter: LevelFilter::Warn }
    }
}

/// How reports are rendered on stdout.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Toml,
}

/// Contents of the optional `--config` file. Command-line flags win over it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InspectConfig {
    pub logger: LoggerConfig,
    pub output: OutputFormat,
}

impl InspectConfig {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
        Self::from_toml(&text).with_context(|| format!("parse {:?}", path))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
