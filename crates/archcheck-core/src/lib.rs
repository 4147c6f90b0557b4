//! # archcheck-core
//!
//! Core framework for the archcheck architecture-conformance gate.
//!
//! This crate provides the pieces shared by both rule families:
//!
//! - [`Violation`] and [`Report`] for representing findings
//! - [`load_sources`] for reading the caller-supplied file list
//! - [`RuleAllowance`] for `ui-check: allow` suppression directives
//! - [`Config`] for the optional `archcheck.toml`
//! - [`BoundaryScanner`] for the textual module-boundary check
//!
//! ## Example
//!
//! ```ignore
//! use archcheck_core::{load_sources, BoundaryScanner, Config, ZoneSelection};
//!
//! let config = Config::default();
//! let sources = load_sources(&["apps/frontend/src/App.tsx"])?;
//! let scanner = BoundaryScanner::new(&config, &ZoneSelection::ByPath)?;
//! let violations = scanner.scan(&sources);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boundary;
mod config;
mod context;
mod loader;
mod types;
mod zone;

/// Utility modules shared by rule implementations.
pub mod utils;

pub use boundary::{BoundaryScanner, ZoneSelection};
pub use config::{
    AnalyzerConfig, BoundaryConfig, CompositionConfig, Config, ConfigError, RuleConfig, ZoneDef,
};
pub use context::{FileContext, SourceFile};
pub use loader::{load_sources, LoadError};
pub use types::{Location, Position, Report, Subsystem, Violation};
pub use utils::allowance::RuleAllowance;
pub use zone::ZoneResolver;
