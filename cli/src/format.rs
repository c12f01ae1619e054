//! Document formats.
use std::{fmt, path::Path};

use immupath_core::Value;

/// Available document formats.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Format {
    /// Guess the format of a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    pub fn parse(self, text: &str) -> Result<Value, FormatError> {
        Ok(match self {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Toml => toml::from_str(text)?,
        })
    }

    /// Render `value`, with a trailing newline.
    pub fn render(self, value: &Value) -> Result<String, FormatError> {
        Ok(match self {
            Format::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
            // Both already end with a newline.
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Toml => toml::to_string_pretty(value)?,
        })
    }
}
