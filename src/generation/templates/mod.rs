//! Declarative template model.
//!
//! A [`TemplateSet`] is a list of [`FileTemplate`]s; each file is a named,
//! ordered list of [`Section`]s. Every section carries a [`Gate`] and is
//! emitted only when the gate is open for the effective [`CapabilitySet`].
//! Capability-specific code therefore lives in its own sections and can
//! never be half-present: either every section gated on a capability is
//! rendered, or none is.
//!
//! Section bodies are Tera templates. They may interpolate values but must
//! not contain control flow; gating is the only conditional.

pub mod typescript;

use crate::core::{Result, ScaffoldError};
use crate::generation::{Capability, CapabilitySet};

/// Condition under which a file or section is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Requires(Capability),
}

impl Gate {
    pub fn is_open(&self, capabilities: CapabilitySet) -> bool {
        match self {
            Gate::Always => true,
            Gate::Requires(capability) => capabilities.contains(*capability),
        }
    }
}

/// Whether a file describes the project or implements the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Descriptor, build config, ignore-file, readme
    Metadata,
    /// Entrypoint, server, tool and resource modules
    Source,
}

/// A gated chunk of a generated file
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub gate: Gate,
    pub body: &'static str,
}

impl Section {
    pub const fn always(name: &'static str, body: &'static str) -> Self {
        Self {
            name,
            gate: Gate::Always,
            body,
        }
    }

    pub const fn requires(capability: Capability, name: &'static str, body: &'static str) -> Self {
        Self {
            name,
            gate: Gate::Requires(capability),
            body,
        }
    }
}

/// A generated file described as ordered sections
#[derive(Debug, Clone)]
pub struct FileTemplate {
    pub path: &'static str,
    pub role: FileRole,
    pub gate: Gate,
    pub sections: Vec<Section>,
}

impl FileTemplate {
    /// Tera template name of one of this file's sections
    pub fn section_key(&self, section: &Section) -> String {
        format!("{}#{}", self.path, section.name)
    }

    /// Sections emitted for the given capabilities, in order
    pub fn open_sections(&self, capabilities: CapabilitySet) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| s.gate.is_open(capabilities))
    }
}

/// Every file a generated project may contain
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub name: &'static str,
    pub files: Vec<FileTemplate>,
}

impl TemplateSet {
    /// Check the structural rules of the model
    pub fn validate(&self) -> Result<()> {
        for (index, file) in self.files.iter().enumerate() {
            if self.files[..index].iter().any(|f| f.path == file.path) {
                return Err(ScaffoldError::template(format!(
                    "duplicate file path '{}' in template set '{}'",
                    file.path, self.name
                )));
            }

            if file.role == FileRole::Metadata
                && (file.gate != Gate::Always || file.sections.iter().any(|s| s.gate != Gate::Always))
            {
                return Err(ScaffoldError::template(format!(
                    "metadata file '{}' must not depend on capabilities",
                    file.path
                )));
            }

            for section in &file.sections {
                if section.body.contains("{%") {
                    return Err(ScaffoldError::template(format!(
                        "section '{}' uses template control flow; use a gated section instead",
                        file.section_key(section)
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn file(&self, path: &str) -> Option<&FileTemplate> {
        self.files.iter().find(|f| f.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_is_open() {
        let tools = CapabilitySet::tools_only();
        let both = CapabilitySet::with_resources(true);

        assert!(Gate::Always.is_open(tools));
        assert!(Gate::Requires(Capability::Tools).is_open(tools));
        assert!(!Gate::Requires(Capability::Resources).is_open(tools));
        assert!(Gate::Requires(Capability::Resources).is_open(both));
    }

    #[test]
    fn test_validate_rejects_gated_metadata() {
        let set = TemplateSet {
            name: "broken",
            files: vec![FileTemplate {
                path: "README.md",
                role: FileRole::Metadata,
                gate: Gate::Always,
                sections: vec![Section::requires(Capability::Resources, "extra", "resources")],
            }],
        };
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_control_flow() {
        let set = TemplateSet {
            name: "broken",
            files: vec![FileTemplate {
                path: "src/index.ts",
                role: FileRole::Source,
                gate: Gate::Always,
                sections: vec![Section::always("body", "{% if resources %}x{% endif %}")],
            }],
        };
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_paths() {
        let file = FileTemplate {
            path: "src/index.ts",
            role: FileRole::Source,
            gate: Gate::Always,
            sections: vec![Section::always("body", "x")],
        };
        let set = TemplateSet {
            name: "broken",
            files: vec![file.clone(), file],
        };
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_open_sections_filters_by_gate() {
        let file = FileTemplate {
            path: "src/server.ts",
            role: FileRole::Source,
            gate: Gate::Always,
            sections: vec![
                Section::always("head", "a"),
                Section::requires(Capability::Resources, "resources", "b"),
                Section::always("tail", "c"),
            ],
        };

        let names: Vec<&str> = file
            .open_sections(CapabilitySet::tools_only())
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["head", "tail"]);

        let names: Vec<&str> = file
            .open_sections(CapabilitySet::with_resources(true))
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["head", "resources", "tail"]);
    }
}
