//! Output implementations

pub mod project_writer;

pub use project_writer::*;
