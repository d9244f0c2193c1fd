//! Materializes a [`ProjectBundle`] on disk.
//!
//! Conflict checks run before anything is created. Directories are created
//! parents-first, then all file writes are issued concurrently. Writing is
//! not transactional: when a write fails, files that were already written
//! stay on disk.

use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{ConflictKind, Result, ScaffoldError};
use crate::generation::templates::typescript::{PACKAGE_JSON, SDK_PACKAGE};
use crate::generation::{ProjectBundle, ProjectName};
use crate::infrastructure::fs::{FileSystem, Probe};

/// Where the project lands relative to the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<output_dir>/<project_name>`, which must not exist yet
    Subdirectory,
    /// Directly into `<output_dir>`
    InPlace,
}

impl OutputLayout {
    pub fn from_flag(create_subdirectory: bool) -> Self {
        if create_subdirectory {
            OutputLayout::Subdirectory
        } else {
            OutputLayout::InPlace
        }
    }

    /// Resolved project path for this layout
    pub fn project_path(&self, output_dir: &Path, name: &ProjectName) -> PathBuf {
        match self {
            OutputLayout::Subdirectory => output_dir.join(name.as_str()),
            OutputLayout::InPlace => output_dir.to_path_buf(),
        }
    }
}

/// Writes bundles through a [`FileSystem`]
pub struct ProjectWriter {
    fs: Arc<dyn FileSystem>,
}

impl ProjectWriter {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Write `bundle` and return the resolved project path
    pub async fn write(
        &self,
        output_dir: &Path,
        name: &ProjectName,
        bundle: &ProjectBundle,
        layout: OutputLayout,
    ) -> Result<PathBuf> {
        let project_path = layout.project_path(output_dir, name);

        match layout {
            OutputLayout::Subdirectory => self.ensure_vacant(&project_path).await?,
            OutputLayout::InPlace => self.ensure_no_existing_project(&project_path).await?,
        }

        self.create_dir(&project_path).await?;
        for dir in bundle.directories() {
            self.create_dir(&project_path.join(dir)).await?;
        }

        let writes = bundle.files().iter().map(|file| {
            let path = project_path.join(&file.relative_path);
            async move {
                self.fs
                    .write(&path, file.content.as_bytes())
                    .await
                    .map_err(|e| ScaffoldError::write_failure(&path, e))?;
                debug!(path = %path.display(), "Wrote generated file");
                Ok::<_, ScaffoldError>(())
            }
        });
        try_join_all(writes).await?;

        info!(
            project_name = %name,
            path = %project_path.display(),
            files = bundle.len(),
            "Project written"
        );
        Ok(project_path)
    }

    async fn create_dir(&self, path: &Path) -> Result<()> {
        self.fs
            .create_dir_all(path)
            .await
            .map_err(|e| ScaffoldError::write_failure(path, e))
    }

    async fn ensure_vacant(&self, project_path: &Path) -> Result<()> {
        match self.fs.probe(project_path).await {
            Probe::NotFound => Ok(()),
            Probe::Exists(_) => Err(ConflictKind::AlreadyExists {
                path: project_path.to_path_buf(),
            }
            .into()),
            Probe::Failed(e) => Err(ScaffoldError::write_failure(project_path, e)),
        }
    }

    /// Best-effort check for a project that already depends on the SDK.
    /// A descriptor that is missing, unreadable or not JSON is no conflict.
    async fn ensure_no_existing_project(&self, project_path: &Path) -> Result<()> {
        let descriptor = project_path.join(PACKAGE_JSON);
        if !self.fs.probe(&descriptor).await.exists() {
            return Ok(());
        }

        let bytes = match self.fs.read(&descriptor).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %descriptor.display(), error = %e, "Ignoring unreadable descriptor");
                return Ok(());
            }
        };

        if declares_sdk_dependency(&bytes) {
            return Err(ConflictKind::ExistingProject {
                path: project_path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

fn declares_sdk_dependency(descriptor: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(descriptor)
        .ok()
        .and_then(|package| package.get("dependencies")?.get(SDK_PACKAGE).cloned())
        .is_some()
}
