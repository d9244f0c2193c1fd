//! Generation domain module - turns a validated project spec into a bundle
//! of generated files.
//!
//! Names are sanitized at the boundary ([`sanitizers`]), the template model
//! describes every file a project may contain ([`templates`]) and the
//! [`TemplateSynthesizer`] renders the files whose capability gates are open.

pub mod sanitizers;
pub mod synthesizer;
pub mod templates;
pub mod types;

pub use sanitizers::{ProjectName, sanitize_project_name, to_symbol_name};
pub use synthesizer::{TemplateSynthesizer, effective_capabilities};
pub use types::*;
