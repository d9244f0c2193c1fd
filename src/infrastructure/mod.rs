//! Infrastructure layer - filesystem access and project output

pub mod fs;
pub mod output;

pub use fs::{FileSystem, TokioFileSystem};
pub use output::*;
