//! Result of a create-project run

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::analysis::Evidence;
use crate::generation::CapabilitySet;

/// What was generated and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub project_name: String,
    pub symbol_name: String,
    pub resolved_path: PathBuf,
    pub capabilities: CapabilitySet,
    /// Present only when sample files were analyzed
    pub analysis: Option<Evidence>,
    pub created_subdirectory: bool,
    /// Bundle paths, relative to `resolved_path`
    pub files: Vec<PathBuf>,
    /// True when nothing was written
    pub dry_run: bool,
}

impl Report {
    /// Commands to run after generation
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = Vec::with_capacity(3);
        if self.created_subdirectory {
            steps.push(format!("cd {}", self.project_name));
        }
        steps.push("npm install".to_string());
        steps.push("npm run dev".to_string());
        steps
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            writeln!(
                f,
                "🧪 Dry run: would create MCP server project '{}'\n",
                self.project_name
            )?;
        } else {
            writeln!(
                f,
                "✅ Successfully created MCP server project '{}'\n",
                self.project_name
            )?;
        }
        writeln!(f, "📁 Location: {}\n", self.resolved_path.display())?;
        writeln!(f, "🎯 Capabilities: {}\n", self.capabilities)?;
        if let Some(analysis) = &self.analysis {
            writeln!(f, "🔍 Analysis: {}\n", analysis.summary())?;
        }

        if self.dry_run {
            writeln!(f, "📄 Files:")?;
            for file in &self.files {
                writeln!(f, "   {}", file.display())?;
            }
            return Ok(());
        }

        writeln!(f, "🚀 Next steps:")?;
        for step in self.next_steps() {
            writeln!(f, "   {step}")?;
        }
        write!(f, "\n📖 See README.md for configuration instructions.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Classification, EvidenceEntry};

    fn report() -> Report {
        Report {
            project_name: "weather".to_string(),
            symbol_name: "Weather".to_string(),
            resolved_path: PathBuf::from("/out/weather"),
            capabilities: CapabilitySet::tools_only(),
            analysis: None,
            created_subdirectory: true,
            files: vec![PathBuf::from("package.json")],
            dry_run: false,
        }
    }

    #[test]
    fn test_success_message() {
        let text = report().to_string();
        assert_eq!(
            text,
            "✅ Successfully created MCP server project 'weather'\n\n\
             📁 Location: /out/weather\n\n\
             🎯 Capabilities: Tools\n\n\
             🚀 Next steps:\n   cd weather\n   npm install\n   npm run dev\n\n\
             📖 See README.md for configuration instructions."
        );
    }

    #[test]
    fn test_analysis_and_in_place_next_steps() {
        let mut report = report();
        report.created_subdirectory = false;
        report.capabilities = CapabilitySet::with_resources(true);
        report.analysis = Some(Evidence::Analyzed(vec![EvidenceEntry::new(
            "/in/data.json",
            Classification::DataFile,
        )]));

        let text = report.to_string();
        assert!(text.contains("🎯 Capabilities: Tools + Resources"));
        assert!(text.contains("🔍 Analysis: Analyzed 1 file(s):\n📄 data.json: Data file detected"));
        assert!(!text.contains("cd weather"));
        assert_eq!(report.next_steps(), vec!["npm install", "npm run dev"]);
    }

    #[test]
    fn test_dry_run_lists_files() {
        let mut report = report();
        report.dry_run = true;

        let text = report.to_string();
        assert!(text.starts_with("🧪 Dry run: would create MCP server project 'weather'"));
        assert!(text.contains("📄 Files:\n   package.json\n"));
        assert!(!text.contains("Next steps"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["projectName"], "weather");
        assert_eq!(value["resolvedPath"], "/out/weather");
        assert_eq!(value["capabilities"]["resources"], false);
        assert!(value["analysis"].is_null());
        assert_eq!(value["createdSubdirectory"], true);
    }
}
