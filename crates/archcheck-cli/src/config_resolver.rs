//! Locates and loads `archcheck.toml`.
//!
//! `--config` wins outright. Otherwise the first existing file among
//! `./archcheck.toml`, `./.archcheck.toml` and `~/.archcheck/config.toml`
//! is used, and with none of them the compiled-in defaults apply.

use anyhow::{Context, Result};
use archcheck::Config;
use std::path::{Path, PathBuf};

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file: given on the command line, found in the project, or global.
    File(PathBuf),
    /// No file; built-in defaults.
    Default,
}

impl ConfigSource {
    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        match self {
            Self::File(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Config::from_file(path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))
            }
            Self::Default => Ok(Config::default()),
        }
    }
}

/// Resolves the configuration for a run started in `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    match explicit {
        Some(path) => ConfigSource::File(path.to_path_buf()),
        None => first_existing(&candidates(project_dir, global_config_dir())),
    }
}

fn candidates(project_dir: &Path, global_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = vec![
        project_dir.join("archcheck.toml"),
        project_dir.join(".archcheck.toml"),
    ];
    paths.extend(global_dir.map(|dir| dir.join("config.toml")));
    paths
}

fn first_existing(paths: &[PathBuf]) -> ConfigSource {
    paths
        .iter()
        .find(|p| p.is_file())
        .map_or(ConfigSource::Default, |p| ConfigSource::File(p.clone()))
}

/// `$ARCHCHECK_CONFIG_DIR`, else `~/.archcheck`.
fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os("ARCHCHECK_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".archcheck")))
}
