//! # archcheck
//!
//! Architecture-conformance gate for TSX frontends.
//!
//! This is the facade crate: it re-exports the core types and wires the
//! composition engine, the rule catalog and the boundary scanner into one
//! [`Checker`].
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use archcheck::{Checker, Config};
//!
//! let checker = Checker::builder().config(Config::default()).build()?;
//! let report = checker.check_files(&["apps/frontend/src/screens/Home.tsx"])?;
//! std::process::exit(report.exit_code());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core types
pub use archcheck_core::*;

/// Element trees, walker and composition engine.
pub mod tsx {
    pub use archcheck_tsx::*;
}

/// Built-in composition rules.
pub mod rules {
    pub use archcheck_rules::*;
}

mod checker;

pub use archcheck_tsx::ParseError;
pub use checker::{CheckError, Checker, CheckerBuilder, Scope};
