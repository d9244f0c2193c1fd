//! Infers the resource capability from sample files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::analysis::rules::{self, SNIFF_SIZE_LIMIT};
use crate::analysis::{CapabilityDecision, Classification, EvidenceEntry};
use crate::infrastructure::fs::{FileSystem, Probe};

/// Classifies candidate paths and aggregates a [`CapabilityDecision`].
///
/// A path that cannot be read never aborts the batch; it becomes an
/// [`Classification::Inaccessible`] entry instead.
pub struct FileCapabilityAnalyzer {
    fs: Arc<dyn FileSystem>,
}

impl FileCapabilityAnalyzer {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Analyze `paths` in order, producing one evidence entry per path
    pub async fn analyze(&self, paths: &[PathBuf]) -> CapabilityDecision {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let classification = self.classify(path).await;
            debug!(
                path = %path.display(),
                classification = ?classification,
                "Classified sample path"
            );
            entries.push(EvidenceEntry::new(path.clone(), classification));
        }

        let decision = CapabilityDecision::from_entries(entries);
        info!(
            analyzed = paths.len(),
            needs_resources = decision.needs_resources,
            "Capability analysis finished"
        );
        decision
    }

    /// Apply the rules to one path; the first applicable rule wins
    async fn classify(&self, path: &Path) -> Classification {
        let meta = match self.fs.probe(path).await {
            Probe::Exists(meta) => meta,
            Probe::NotFound => return Classification::Inaccessible,
            Probe::Failed(e) => {
                debug!(path = %path.display(), error = %e, "Sample path not accessible");
                return Classification::Inaccessible;
            }
        };

        if rules::is_data_file(path) {
            return Classification::DataFile;
        }

        if meta.is_dir() {
            return match self.fs.list_dir(path).await {
                Ok(children) => rules::classify_directory(&children),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Failed to list sample directory");
                    Classification::Inaccessible
                }
            };
        }

        if rules::is_code_file(path) {
            return Classification::CodeFile;
        }

        if rules::is_config_file(path) {
            return Classification::ConfigFile;
        }

        if meta.len >= SNIFF_SIZE_LIMIT {
            return Classification::TooLarge;
        }

        match self.fs.read(path).await {
            Ok(bytes) => rules::sniff(&bytes),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Unreadable sample treated as binary");
                Classification::Binary
            }
        }
    }
}
