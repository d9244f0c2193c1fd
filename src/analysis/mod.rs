//! Capability analysis - decides from sample files whether the generated
//! server should expose resources.

pub mod analyzer;
pub mod rules;
pub mod types;

pub use analyzer::FileCapabilityAnalyzer;
pub use types::*;
