use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub header: HeaderConfig,
    pub inline: InlineConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeaderConfig {
    pub emoji: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { emoji: true }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InlineConfig {
    pub unsupported: UnsupportedInline,
}

/// What the inline styler does with a span that has no rich text element
/// (inline code, images, inline HTML). Line breaks are never affected.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedInline {
    /// Fail the whole conversion.
    #[default]
    Error,
    /// Drop the span and keep going.
    Skip,
}

impl Config {
    /// The config bundled at compile time (validated by build.rs).
    pub fn compiled_default() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse config from TOML text. Missing keys take their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::parse(&content)
    }
}
