//! Application layer - the create-project use case and its boundary types

pub mod create_project;
pub mod report;
pub mod request;

pub use create_project::*;
pub use report::*;
pub use request::*;
