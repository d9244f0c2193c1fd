//! Request types for the create-project use case
//!
//! The loosely-typed arguments object is validated exactly once, here, and
//! turned into a [`CreateRequest`]. Nothing downstream re-checks it.

use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::core::{BuilderConfig, ValidationError};
use crate::generation::{ProjectName, ProjectSpec};

/// Caller-supplied arguments, as received from JSON or the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub output_path: Option<PathBuf>,
    pub include_resources: Option<bool>,
    #[serde(default)]
    pub analyze_files: Vec<PathBuf>,
    pub create_subdirectory: Option<bool>,
}

/// A create request after boundary validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRequest {
    WellFormed(ProjectSpec),
    Malformed(ValidationError),
}

impl CreateRequest {
    /// Validate typed arguments, filling gaps from `config`
    pub fn from_args(args: ProjectArgs, config: &BuilderConfig) -> Self {
        let raw_name = match args.name {
            Some(name) if !name.is_empty() => name,
            _ => return CreateRequest::Malformed(ValidationError::MissingProjectName),
        };

        let name = match ProjectName::parse(&raw_name) {
            Ok(name) => name,
            Err(e) => return CreateRequest::Malformed(e),
        };

        let output_path = match config.resolve_output_dir(args.output_path.as_deref()) {
            Ok(path) => path,
            Err(e) => {
                return CreateRequest::Malformed(ValidationError::MalformedArguments(format!(
                    "cannot resolve output path: {e}"
                )));
            }
        };

        CreateRequest::WellFormed(ProjectSpec {
            raw_name,
            name,
            description: args.description.unwrap_or_default(),
            author: args
                .author
                .or_else(|| config.author.clone())
                .unwrap_or_default(),
            output_path,
            include_resources: args.include_resources.unwrap_or(config.include_resources),
            create_subdirectory: args
                .create_subdirectory
                .unwrap_or(config.create_subdirectory),
            sample_files: args.analyze_files,
        })
    }

    /// Validate a JSON arguments object
    pub fn from_json(value: Value, config: &BuilderConfig) -> Self {
        let Some(object) = value.as_object() else {
            return CreateRequest::Malformed(ValidationError::MalformedArguments(
                "expected a JSON object".to_string(),
            ));
        };

        match object.get("name") {
            Some(Value::String(name)) if !name.is_empty() => {}
            _ => return CreateRequest::Malformed(ValidationError::MissingProjectName),
        }

        match serde_json::from_value::<ProjectArgs>(value) {
            Ok(args) => Self::from_args(args, config),
            Err(e) => CreateRequest::Malformed(ValidationError::MalformedArguments(e.to_string())),
        }
    }

    pub fn into_spec(self) -> Result<ProjectSpec, ValidationError> {
        match self {
            CreateRequest::WellFormed(spec) => Ok(spec),
            CreateRequest::Malformed(e) => Err(e),
        }
    }
}
