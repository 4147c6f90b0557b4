//! Utility functions for rule implementations.

pub mod allowance;
pub mod paths;
pub mod position;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use allowance::RuleAllowance;
#[doc(inline)]
pub use paths::normalize_path;
#[doc(inline)]
pub use position::{position_at, utf16_column};
