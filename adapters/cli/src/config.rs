//! Settings loaded from an optional TOML file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use color_alchemy_core::Rules;
use serde::Deserialize;

/// Config file consulted when no explicit path is given.
pub(crate) const DEFAULT_CONFIG_PATH: &str = ".color-alchemy/config.toml";

/// Runtime settings of the command-line front end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// File holding persisted progress.
    pub(crate) store_path: PathBuf,
    /// File receiving feedback submissions.
    pub(crate) feedback_path: PathBuf,
    /// Log filter used when `RUST_LOG` is unset.
    pub(crate) log_filter: String,
    /// Scoring and budget constants.
    pub(crate) rules: Rules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".color-alchemy/progress.json"),
            feedback_path: PathBuf::from(".color-alchemy/feedback.jsonl"),
            log_filter: String::from("warn"),
            rules: Rules::default(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when it exists.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_PATH);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
