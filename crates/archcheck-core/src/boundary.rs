//! Module boundary scanner.
//!
//! A purely textual check: each file is searched for the forbidden substrings
//! of its zone. No parsing, no import resolution.

use tracing::debug;

use crate::config::{Config, ConfigError, ZoneDef};
use crate::context::SourceFile;
use crate::types::{Location, Subsystem, Violation};
use crate::utils::position::position_at;
use crate::zone::ZoneResolver;

/// Rule code for boundary findings.
pub const CODE: &str = "AB001";

/// Rule id for boundary findings.
pub const NAME: &str = "forbidden-token";

/// How a file's zone is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSelection {
    /// Resolve each file's zone from its path prefix; files outside every zone are skipped.
    ByPath,
    /// Apply the named zone to every file.
    Forced(String),
}

/// Searches raw file text for zone-forbidden substrings.
pub struct BoundaryScanner {
    zones: Vec<ZoneDef>,
    resolver: ZoneResolver,
    forced: Option<usize>,
    fail_fast: bool,
}

impl BoundaryScanner {
    /// Create a scanner from config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownZone`] if a forced zone is not configured.
    pub fn new(config: &Config, selection: &ZoneSelection) -> Result<Self, ConfigError> {
        let forced = match selection {
            ZoneSelection::ByPath => None,
            ZoneSelection::Forced(name) => Some(
                config
                    .zones
                    .iter()
                    .position(|z| &z.name == name)
                    .ok_or_else(|| ConfigError::UnknownZone(name.clone()))?,
            ),
        };

        Ok(Self {
            zones: config.zones.clone(),
            resolver: ZoneResolver::new(&config.zones),
            forced,
            fail_fast: config.boundary.fail_fast,
        })
    }

    /// Overrides the fail-fast setting from config.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Whether the scan stops at the first finding.
    #[must_use]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// The zone that applies to `source`, if any.
    #[must_use]
    pub fn zone_for(&self, source: &SourceFile) -> Option<&ZoneDef> {
        let index = self.forced.or_else(|| self.resolver.resolve(&source.path))?;
        self.zones.get(index)
    }

    /// Scans files in input order.
    ///
    /// In fail-fast mode the first hit ends the scan, so at most one violation
    /// is returned.
    #[must_use]
    pub fn scan(&self, sources: &[SourceFile]) -> Vec<Violation> {
        let mut violations = Vec::new();
        for source in sources {
            violations.extend(self.scan_file(source));
            if self.fail_fast && !violations.is_empty() {
                break;
            }
        }
        violations
    }

    /// Scans one file against its zone's token list, in list order.
    ///
    /// In fail-fast mode only the first matching token is reported.
    #[must_use]
    pub fn scan_file(&self, source: &SourceFile) -> Vec<Violation> {
        let Some(zone) = self.zone_for(source) else {
            debug!("No zone for {}", source.path.display());
            return Vec::new();
        };

        let mut violations = Vec::new();
        for token in &zone.forbidden {
            let Some(offset) = source.text.find(token.as_str()) else {
                continue;
            };
            let position = position_at(&source.text, offset);
            violations.push(Violation::new(
                CODE,
                NAME,
                Subsystem::Boundary,
                Location::at(&source.path, position),
                format!("imports forbidden module: {token}"),
            ));
            if self.fail_fast {
                break;
            }
        }
        violations
    }
}
