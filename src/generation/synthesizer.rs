//! Template synthesizer - maps a project spec and capability decision to a
//! complete [`ProjectBundle`].

use std::path::PathBuf;
use tera::{Context, Tera};
use tracing::debug;

use crate::analysis::CapabilityDecision;
use crate::core::{Result, ScaffoldError};
use crate::generation::templates::{TemplateSet, typescript};
use crate::generation::{CapabilitySet, GeneratedFile, ProjectBundle, ProjectSpec};

/// Version written into generated descriptors and server metadata
pub const GENERATED_VERSION: &str = "1.0.0";

/// The capability set a project ends up with: the caller's default OR the
/// analyzer's inference.
pub fn effective_capabilities(spec: &ProjectSpec, decision: &CapabilityDecision) -> CapabilitySet {
    CapabilitySet::with_resources(spec.include_resources || decision.needs_resources)
}

/// Renders a [`TemplateSet`] into bundles.
///
/// Synthesis is deterministic: the same spec and decision always produce a
/// byte-identical bundle.
pub struct TemplateSynthesizer {
    templates: TemplateSet,
    tera: Tera,
}

impl TemplateSynthesizer {
    /// Synthesizer for the default TypeScript template set
    pub fn new() -> Result<Self> {
        Self::with_template_set(typescript::template_set())
    }

    pub fn with_template_set(templates: TemplateSet) -> Result<Self> {
        templates.validate()?;

        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        for file in &templates.files {
            for section in &file.sections {
                let key = file.section_key(section);
                tera.add_raw_template(&key, section.body).map_err(|e| {
                    ScaffoldError::template(format!("Failed to add template '{key}': {e}"))
                })?;
            }
        }

        Ok(Self { templates, tera })
    }

    pub fn template_set(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render every file whose gate is open for the effective capabilities
    pub fn synthesize(
        &self,
        spec: &ProjectSpec,
        decision: &CapabilityDecision,
    ) -> Result<ProjectBundle> {
        let capabilities = effective_capabilities(spec, decision);
        let context = render_context(spec);
        let mut bundle = ProjectBundle::new();

        for file in &self.templates.files {
            if !file.gate.is_open(capabilities) {
                continue;
            }

            let mut content = String::new();
            for section in file.open_sections(capabilities) {
                let key = file.section_key(section);
                let rendered = self.tera.render(&key, &context).map_err(|e| {
                    ScaffoldError::template(format!("Failed to render '{key}': {e}"))
                })?;
                content.push_str(&rendered);
            }

            bundle
                .push(GeneratedFile {
                    relative_path: PathBuf::from(file.path),
                    content,
                })
                .map_err(|f| {
                    ScaffoldError::template(format!(
                        "duplicate generated path {}",
                        f.relative_path.display()
                    ))
                })?;
        }

        debug!(
            project_name = %spec.name,
            files = bundle.len(),
            capabilities = %capabilities,
            "Synthesized project bundle"
        );
        Ok(bundle)
    }
}

fn render_context(spec: &ProjectSpec) -> Context {
    let mut context = Context::new();
    context.insert("project_name", spec.name.as_str());
    context.insert("symbol_name", spec.name.symbol());
    context.insert("server_class", &format!("{}Server", spec.name.symbol()));
    context.insert("description", &spec.effective_description());
    context.insert("author", &spec.author);
    context.insert("version", GENERATED_VERSION);
    context.insert("sdk_package", typescript::SDK_PACKAGE);
    context.insert("sdk_version", typescript::SDK_VERSION);
    context
}
