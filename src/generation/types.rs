//! Core types for the generation domain

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::generation::sanitizers::ProjectName;

/// Everything the caller asked for, validated once at the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    /// The name exactly as the caller typed it
    pub raw_name: String,
    /// Sanitized slug and derived symbol name
    pub name: ProjectName,
    pub description: String,
    pub author: String,
    /// Directory the project is generated into (or under, with a subdirectory)
    pub output_path: PathBuf,
    /// Caller-supplied default for the resource capability
    pub include_resources: bool,
    pub create_subdirectory: bool,
    /// Sample files and directories to analyze for capabilities
    pub sample_files: Vec<PathBuf>,
}

impl ProjectSpec {
    /// Minimal spec with defaults for everything but the name and location
    pub fn new(name: ProjectName, output_path: impl Into<PathBuf>) -> Self {
        Self {
            raw_name: name.as_str().to_string(),
            name,
            description: String::new(),
            author: String::new(),
            output_path: output_path.into(),
            include_resources: false,
            create_subdirectory: false,
            sample_files: Vec::new(),
        }
    }

    /// The description, or the default one derived from the project name
    pub fn effective_description(&self) -> String {
        if self.description.is_empty() {
            format!("MCP server for {}", self.name)
        } else {
            self.description.clone()
        }
    }
}

/// Capability surfaces advertised by the generated server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    Tools,
    Resources,
}

impl Capability {
    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::Tools => "Tools",
            Capability::Resources => "Resources",
        }
    }
}

/// Effective capabilities of a generated project. Tools are always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub tools: bool,
    pub resources: bool,
}

impl CapabilitySet {
    pub fn tools_only() -> Self {
        Self {
            tools: true,
            resources: false,
        }
    }

    pub fn with_resources(resources: bool) -> Self {
        Self {
            tools: true,
            resources,
        }
    }

    pub fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Tools => self.tools,
            Capability::Resources => self.resources,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        [Capability::Tools, Capability::Resources]
            .into_iter()
            .filter(|c| self.contains(*c))
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|c| c.display_name()).collect();
        f.write_str(&names.join(" + "))
    }
}

/// A single generated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub relative_path: PathBuf,
    pub content: String,
}

/// The complete, ordered set of files generated for one request.
///
/// Relative paths are unique; [`ProjectBundle::push`] refuses duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectBundle {
    files: Vec<GeneratedFile>,
}

impl ProjectBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file, rejecting a path that is already present
    pub fn push(&mut self, file: GeneratedFile) -> Result<(), GeneratedFile> {
        if self.contains(&file.relative_path) {
            return Err(file);
        }
        self.files.push(file);
        Ok(())
    }

    pub fn contains(&self, relative_path: impl AsRef<Path>) -> bool {
        self.get(relative_path).is_some()
    }

    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let wanted = relative_path.as_ref();
        self.files.iter().find(|f| f.relative_path == wanted)
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Relative directories that must exist before the files are written,
    /// parents before children, without duplicates.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::new();
        for file in &self.files {
            let mut ancestors: Vec<&Path> = file
                .relative_path
                .ancestors()
                .skip(1)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            ancestors.reverse();
            for dir in ancestors {
                if !dirs.iter().any(|d| d == dir) {
                    dirs.push(dir.to_path_buf());
                }
            }
        }
        dirs
    }
}

impl<'a> IntoIterator for &'a ProjectBundle {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
