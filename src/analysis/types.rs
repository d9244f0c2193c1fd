//! Capability analysis results

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Marker text for an analysis that received no paths
pub const EMPTY_BATCH_MARKER: &str = "No files analyzed";

/// How a single candidate path was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Known data extension, or a name mentioning data/content
    DataFile,
    /// Directory with at least one data file among its children
    DataDirectory,
    /// Directory without data files among its children
    PlainDirectory,
    /// Source code; advisory only
    CodeFile,
    /// Configuration extension or a name mentioning config
    ConfigFile,
    JsonLike,
    YamlLike,
    TextContent,
    /// Not valid UTF-8, exposed as an opaque resource
    Binary,
    /// Readable text too short to say anything about
    ShortText,
    /// Too large to sniff
    TooLarge,
    /// Could not be stat'ed or listed
    Inaccessible,
}

impl Classification {
    /// Whether this classification raises the resource signal
    pub fn signals_resources(&self) -> bool {
        matches!(
            self,
            Classification::DataFile
                | Classification::DataDirectory
                | Classification::ConfigFile
                | Classification::JsonLike
                | Classification::YamlLike
                | Classification::TextContent
                | Classification::Binary
        )
    }
}

/// One audit line: the path and the classification chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceEntry {
    pub path: PathBuf,
    pub classification: Classification,
}

impl EvidenceEntry {
    pub fn new(path: impl Into<PathBuf>, classification: Classification) -> Self {
        Self {
            path: path.into(),
            classification,
        }
    }

    fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for EvidenceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.display_name();
        match self.classification {
            Classification::DataFile => {
                write!(f, "📄 {name}: Data file detected - will expose as resource")
            }
            Classification::DataDirectory => {
                write!(f, "📁 {name}/: Directory with data files - will expose as resources")
            }
            Classification::PlainDirectory => {
                write!(f, "📁 {name}/: Directory without data files - no resources inferred")
            }
            Classification::CodeFile => {
                write!(f, "⚙️ {name}: Code file detected - will create corresponding tools")
            }
            Classification::ConfigFile => {
                write!(f, "⚙️ {name}: Config file - will expose as resource")
            }
            Classification::JsonLike => {
                write!(f, "🔍 {name}: JSON-like content detected - will expose as resource")
            }
            Classification::YamlLike => {
                write!(f, "🔍 {name}: YAML-like content detected - will expose as resource")
            }
            Classification::TextContent => {
                write!(f, "📝 {name}: Text content detected - will expose as resource")
            }
            Classification::Binary => write!(f, "📦 {name}: Binary file - will expose as resource"),
            Classification::ShortText => {
                write!(f, "📝 {name}: Too little content to classify - no resources inferred")
            }
            Classification::TooLarge => {
                write!(f, "📦 {name}: Too large to inspect - no resources inferred")
            }
            Classification::Inaccessible => {
                write!(f, "❌ {}: File not accessible", self.path.display())
            }
        }
    }
}

/// Ordered audit trail of an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "kebab-case")]
pub enum Evidence {
    /// No paths were supplied
    EmptyBatch,
    /// One entry per analyzed path, in input order
    Analyzed(Vec<EvidenceEntry>),
}

impl Evidence {
    pub fn entries(&self) -> &[EvidenceEntry] {
        match self {
            Evidence::EmptyBatch => &[],
            Evidence::Analyzed(entries) => entries,
        }
    }

    /// Human-readable summary, one line per entry
    pub fn summary(&self) -> String {
        match self {
            Evidence::EmptyBatch => EMPTY_BATCH_MARKER.to_string(),
            Evidence::Analyzed(entries) => {
                let lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
                format!("Analyzed {} file(s):\n{}", entries.len(), lines.join("\n"))
            }
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Whether the resource capability is needed, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityDecision {
    pub needs_resources: bool,
    pub evidence: Evidence,
}

impl CapabilityDecision {
    /// Decision for a request that supplied no sample files
    pub fn empty() -> Self {
        Self {
            needs_resources: false,
            evidence: Evidence::EmptyBatch,
        }
    }

    /// Aggregate per-path entries; the resource flag is the OR of their signals
    pub fn from_entries(entries: Vec<EvidenceEntry>) -> Self {
        if entries.is_empty() {
            return Self::empty();
        }
        let needs_resources = entries
            .iter()
            .any(|e| e.classification.signals_resources());
        Self {
            needs_resources,
            evidence: Evidence::Analyzed(entries),
        }
    }
}

impl Default for CapabilityDecision {
    fn default() -> Self {
        Self::empty()
    }
}
