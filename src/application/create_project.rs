//! Use case for creating an MCP server project

use std::sync::Arc;
use tracing::info;

use crate::analysis::{CapabilityDecision, FileCapabilityAnalyzer};
use crate::application::{CreateRequest, Report};
use crate::core::Result;
use crate::generation::{ProjectBundle, ProjectSpec, TemplateSynthesizer, effective_capabilities};
use crate::infrastructure::fs::FileSystem;
use crate::infrastructure::output::{OutputLayout, ProjectWriter};

/// Sanitize, analyze, synthesize, write.
///
/// Validation happens before anything touches the filesystem; analysis
/// only runs when the request names sample files.
pub struct CreateProjectUseCase {
    analyzer: FileCapabilityAnalyzer,
    synthesizer: TemplateSynthesizer,
    writer: ProjectWriter,
}

impl CreateProjectUseCase {
    pub fn new(
        analyzer: FileCapabilityAnalyzer,
        synthesizer: TemplateSynthesizer,
        writer: ProjectWriter,
    ) -> Self {
        Self {
            analyzer,
            synthesizer,
            writer,
        }
    }

    /// Wire every component to the same filesystem
    pub fn with_file_system(fs: Arc<dyn FileSystem>) -> Result<Self> {
        Ok(Self::new(
            FileCapabilityAnalyzer::new(fs.clone()),
            TemplateSynthesizer::new()?,
            ProjectWriter::new(fs),
        ))
    }

    pub async fn execute(&self, request: CreateRequest) -> Result<Report> {
        let (spec, analysis, bundle) = self.prepare(request).await?;
        let layout = OutputLayout::from_flag(spec.create_subdirectory);

        let resolved_path = self
            .writer
            .write(&spec.output_path, &spec.name, &bundle, layout)
            .await?;

        Ok(build_report(&spec, analysis, &bundle, resolved_path, false))
    }

    /// Everything but the write phase; no conflict checks are made
    pub async fn preview(&self, request: CreateRequest) -> Result<Report> {
        let (spec, analysis, bundle) = self.prepare(request).await?;
        let resolved_path = OutputLayout::from_flag(spec.create_subdirectory)
            .project_path(&spec.output_path, &spec.name);

        Ok(build_report(&spec, analysis, &bundle, resolved_path, true))
    }

    async fn prepare(
        &self,
        request: CreateRequest,
    ) -> Result<(ProjectSpec, Option<CapabilityDecision>, ProjectBundle)> {
        let spec = request.into_spec()?;
        info!(
            project_name = %spec.name,
            output_path = %spec.output_path.display(),
            "Creating MCP server project"
        );

        let analysis = if spec.sample_files.is_empty() {
            None
        } else {
            Some(self.analyzer.analyze(&spec.sample_files).await)
        };

        let decision = analysis.clone().unwrap_or_default();
        let bundle = self.synthesizer.synthesize(&spec, &decision)?;
        Ok((spec, analysis, bundle))
    }
}

fn build_report(
    spec: &ProjectSpec,
    analysis: Option<CapabilityDecision>,
    bundle: &ProjectBundle,
    resolved_path: std::path::PathBuf,
    dry_run: bool,
) -> Report {
    let decision = analysis.clone().unwrap_or_default();
    Report {
        project_name: spec.name.to_string(),
        symbol_name: spec.name.symbol().to_string(),
        resolved_path,
        capabilities: effective_capabilities(spec, &decision),
        analysis: analysis.map(|d| d.evidence),
        created_subdirectory: spec.create_subdirectory,
        files: bundle
            .files()
            .iter()
            .map(|f| f.relative_path.clone())
            .collect(),
        dry_run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConflictKind, ScaffoldError, ValidationError};
    use crate::generation::ProjectName;
    use crate::generation::templates::typescript::RESOURCE_MODULE;
    use crate::infrastructure::fs::memory::MemoryFileSystem;
    use std::path::{Path, PathBuf};

    fn use_case(fs: Arc<MemoryFileSystem>) -> CreateProjectUseCase {
        CreateProjectUseCase::with_file_system(fs).unwrap()
    }

    fn spec(name: &str) -> ProjectSpec {
        let mut spec = ProjectSpec::new(ProjectName::parse(name).unwrap(), "/out");
        spec.create_subdirectory = true;
        spec
    }

    #[tokio::test]
    async fn test_execute_without_samples() {
        let fs = Arc::new(MemoryFileSystem::new());
        let report = use_case(fs.clone())
            .execute(CreateRequest::WellFormed(spec("weather")))
            .await
            .unwrap();

        assert_eq!(report.resolved_path, PathBuf::from("/out/weather"));
        assert!(!report.capabilities.resources);
        assert!(report.analysis.is_none());
        assert_eq!(report.files.len(), 7);
        assert_eq!(fs.file_paths().len(), 7);
        assert!(fs.file(Path::new("/out/weather").join(RESOURCE_MODULE)).is_none());
    }

    #[tokio::test]
    async fn test_execute_with_data_sample_enables_resources() {
        let fs = Arc::new(MemoryFileSystem::new().with_file("/in/data.json", "{}"));
        let mut spec = spec("weather");
        spec.sample_files = vec![PathBuf::from("/in/data.json")];

        let report = use_case(fs.clone())
            .execute(CreateRequest::WellFormed(spec))
            .await
            .unwrap();

        assert!(report.capabilities.resources);
        assert!(report.analysis.unwrap().summary().contains("data.json"));
        assert!(fs.file(Path::new("/out/weather").join(RESOURCE_MODULE)).is_some());
    }

    #[tokio::test]
    async fn test_code_sample_alone_keeps_tools_only() {
        let fs = Arc::new(MemoryFileSystem::new().with_file("/in/main.py", "print()"));
        let mut spec = spec("weather");
        spec.sample_files = vec![PathBuf::from("/in/main.py")];

        let report = use_case(fs)
            .execute(CreateRequest::WellFormed(spec))
            .await
            .unwrap();

        assert!(!report.capabilities.resources);
        assert!(report.analysis.is_some());
    }

    #[tokio::test]
    async fn test_malformed_request_has_no_side_effects() {
        let fs = Arc::new(MemoryFileSystem::new());
        let err = use_case(fs.clone())
            .execute(CreateRequest::Malformed(ValidationError::MissingProjectName))
            .await
            .unwrap_err();

        assert!(err.is_validation_error());
        assert!(fs.file_paths().is_empty());
        assert!(!fs.has_dir("/out"));
    }

    #[tokio::test]
    async fn test_existing_subdirectory_conflict() {
        let fs = Arc::new(MemoryFileSystem::new().with_dir("/out/weather"));
        let err = use_case(fs.clone())
            .execute(CreateRequest::WellFormed(spec("weather")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Conflict(ConflictKind::AlreadyExists { .. })
        ));
        assert!(fs.file_paths().is_empty());
    }

    #[tokio::test]
    async fn test_preview_writes_nothing() {
        let fs = Arc::new(MemoryFileSystem::new().with_dir("/out/weather"));
        let mut spec = spec("weather");
        spec.include_resources = true;

        let report = use_case(fs.clone())
            .preview(CreateRequest::WellFormed(spec))
            .await
            .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.resolved_path, PathBuf::from("/out/weather"));
        assert!(report.files.contains(&PathBuf::from(RESOURCE_MODULE)));
        assert!(fs.file_paths().is_empty());
    }
}
