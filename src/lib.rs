//! Scaffolds TypeScript MCP server projects.
//!
//! A request flows through [`generation::sanitizers`] (project name),
//! [`analysis`] (optional capability inference from sample files),
//! [`generation::TemplateSynthesizer`] (file bundle) and
//! [`infrastructure::output::ProjectWriter`] (disk), orchestrated by
//! [`application::CreateProjectUseCase`].
#![deny(unsafe_code)]

pub mod analysis;
pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
