//! Output configuration loaded from YAML and refined by command line flags.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use fab_core::{ErrorInfo, FabError};
use fab_group::{Decomposition, Notation};
use serde::{Deserialize, Serialize};

/// Shape of the emitted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Optional headline followed by one group per line.
    #[default]
    Lines,
    /// Standalone LaTeX document.
    Document,
    /// Pretty-printed catalog report.
    Json,
}

/// YAML-configurable rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Normal forms printed for each group.
    #[serde(default)]
    pub decomposition: Decomposition,
    /// Symbols used for cyclic groups and products.
    #[serde(default)]
    pub notation: Notation,
    /// Overall output shape.
    #[serde(default)]
    pub format: OutputFormat,
    /// Whether to print the "There are K abelian groups" sentence.
    #[serde(default = "default_headline")]
    pub headline: bool,
}

fn default_headline() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decomposition: Decomposition::default(),
            notation: Notation::default(),
            format: OutputFormat::default(),
            headline: default_headline(),
        }
    }
}

/// Reads an [`OutputConfig`] from a YAML file.
pub fn load_config(path: &Path) -> Result<OutputConfig, FabError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        FabError::Io(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    serde_yaml::from_str(&contents).map_err(|err| {
        FabError::Config(
            ErrorInfo::new("config-parse", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

impl FromStr for OutputFormat {
    type Err = FabError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(OutputFormat::Lines),
            "document" => Ok(OutputFormat::Document),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FabError::Config(
                ErrorInfo::new("config-parse", format!("unknown format `{text}`"))
                    .with_hint("expected one of: lines, document, json"),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Document => "document",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}
