use clap::ValueEnum;
use pda_engine::Notation;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "pda.config.json";

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// PDA configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Notation assumed for input when `--from` is not given
    #[serde(default = "default_from")]
    pub default_from: Notation,

    /// Notation produced when `--to` is not given
    #[serde(default = "default_to")]
    pub default_to: Notation,

    /// Output format when `--format` is not given
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_from() -> Notation {
    Notation::Infix
}

fn default_to() -> Notation {
    Notation::Postfix
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = Self::path(cwd);

        if config_path.exists() {
            debug!(path = %config_path.display(), "Loading config");
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path(cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
            format: default_format(),
        }
    }
}
