//! Filesystem collaborator interface.
//!
//! Every read and write the builder performs goes through [`FileSystem`], so
//! the analyzer and the writer can be exercised against an in-memory double.
//! Existence checks return an explicit [`Probe`] instead of surfacing
//! "not found" as an error to be caught and filtered.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What kind of entry a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// Type and size of an existing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub kind: EntryKind,
    pub len: u64,
}

impl EntryMeta {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Outcome of an existence check
#[derive(Debug)]
pub enum Probe {
    Exists(EntryMeta),
    NotFound,
    Failed(io::Error),
}

impl Probe {
    pub fn exists(&self) -> bool {
        matches!(self, Probe::Exists(_))
    }
}

/// Filesystem operations consumed by the builder
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Check whether `path` exists and stat it
    async fn probe(&self, path: &Path) -> Probe;

    /// Names of the immediate children of a directory
    async fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Create a directory and all missing parents
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a whole file
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write a whole file, replacing any previous content
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// [`FileSystem`] backed by `tokio::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn probe(&self, path: &Path) -> Probe {
        match fs::metadata(path).await {
            Ok(metadata) => {
                let kind = if metadata.is_dir() {
                    EntryKind::Directory
                } else if metadata.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                Probe::Exists(EntryMeta {
                    kind,
                    len: metadata.len(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Probe::NotFound,
            Err(e) => Probe::Failed(e),
        }
    }

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(PathBuf::from(entry.file_name()));
        }
        names.sort();
        Ok(names)
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents).await
    }
}
