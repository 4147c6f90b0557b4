//! Configuration types for archcheck.
//!
//! Every value has a compiled-in default, so running without an
//! `archcheck.toml` enforces the stock conventions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::utils::paths::{has_extension, normalize_dir, normalize_path};

/// Top-level configuration for archcheck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Composition rule scope and limits.
    #[serde(default)]
    pub composition: CompositionConfig,

    /// Boundary scanner behavior.
    #[serde(default)]
    pub boundary: BoundaryConfig,

    /// Forbidden-token zones, checked in order.
    #[serde(default = "default_zones")]
    pub zones: Vec<ZoneDef>,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            composition: CompositionConfig::default(),
            boundary: BoundaryConfig::default(),
            zones: default_zones(),
            rules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Renders this configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Validates config consistency.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, zone) in self.zones.iter().enumerate() {
            if zone.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!("zones[{i}]: empty name")));
            }
            if !seen.insert(zone.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "zones[{i}]: duplicate zone '{}'",
                    zone.name
                )));
            }
            if zone.forbidden.iter().any(String::is_empty) {
                return Err(ConfigError::Validation(format!(
                    "zones.{}: empty forbidden token",
                    zone.name
                )));
            }
        }

        if self.composition.frontend_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "composition.frontend_root: must not be empty".to_string(),
            ));
        }

        if self.analyzer.parallelism == Some(0) {
            return Err(ConfigError::Validation(
                "analyzer.parallelism: must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Looks up a zone by name.
    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&ZoneDef> {
        self.zones.iter().find(|z| z.name == name)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Worker threads for the composition engine; unset means sequential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallelism: Option<usize>,
}

/// Scope and limits for the composition rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionConfig {
    /// Only files under this directory are checked.
    #[serde(default = "default_frontend_root")]
    pub frontend_root: String,

    /// Files under this directory are screens.
    #[serde(default = "default_screens_dir")]
    pub screens_dir: String,

    /// Maximum number of `Card` elements per screen.
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,

    /// File extensions (without dot) the composition rules apply to.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            frontend_root: default_frontend_root(),
            screens_dir: default_screens_dir(),
            max_cards: default_max_cards(),
            extensions: default_extensions(),
        }
    }
}

impl CompositionConfig {
    /// Returns true when the composition rules apply to `path`.
    #[must_use]
    pub fn in_scope(&self, path: &Path) -> bool {
        normalize_path(path).starts_with(&normalize_dir(&self.frontend_root))
            && has_extension(path, &self.extensions)
    }

    /// Returns true when `path` lies inside the screens directory.
    #[must_use]
    pub fn is_screen(&self, path: &Path) -> bool {
        let marker = format!("{}/", normalize_dir(&self.screens_dir));
        normalize_path(path).contains(&marker)
    }
}

/// Boundary scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Stop at the first forbidden token found (first token, first file).
    #[serde(default = "default_true")]
    pub fail_fast: bool,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

/// A named codebase partition with its own forbidden substrings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDef {
    /// Zone name (e.g., `"frontend"`).
    pub name: String,

    /// Path prefixes belonging to this zone, used when no zone is forced.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Substrings that must not appear anywhere in the zone's files, in search order.
    #[serde(default)]
    pub forbidden: Vec<String>,
}

impl ZoneDef {
    /// Creates a zone definition.
    #[must_use]
    pub fn new<P, F>(name: impl Into<String>, paths: P, forbidden: F) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            name: name.into(),
            paths: paths.into_iter().map(Into::into).collect(),
            forbidden: forbidden.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_frontend_root() -> String {
    "apps/frontend/src".to_string()
}

fn default_screens_dir() -> String {
    "apps/frontend/src/screens".to_string()
}

fn default_max_cards() -> usize {
    2
}

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string(), "tsx".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_zones() -> Vec<ZoneDef> {
    vec![
        ZoneDef::new(
            "frontend",
            ["apps/frontend/"],
            [
                "apps/backend",
                "core/",
                "LifecycleState",
                "NodeLifecycleState",
                "panel_lifecycle",
            ],
        ),
        ZoneDef::new(
            "shared",
            ["packages/shared/"],
            [
                "apps/backend",
                "apps/frontend",
                "core/",
                "trestle-dev-tools_legacy_backend",
                "trestle-roundhouse-frontend_legacy",
            ],
        ),
    ]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config could not be rendered as TOML.
    #[error("Failed to serialize config: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),

    /// A zone was requested by name but is not configured.
    #[error("unknown zone '{0}'")]
    UnknownZone(String),
}
