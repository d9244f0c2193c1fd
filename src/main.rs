//! mcp-server-builder CLI entrypoint
//! Parses command-line arguments and dispatches to the create-project use case.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use mcp_server_builder::{
    analysis::FileCapabilityAnalyzer,
    application::{CreateProjectUseCase, CreateRequest, ProjectArgs, Report},
    core::{BuilderConfig, ValidationError},
    generation::CapabilitySet,
    infrastructure::TokioFileSystem,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mcp-server-builder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Create a TypeScript MCP server project
    Create(CreateArgs),
    /// Analyze sample files and report which capabilities they suggest
    Analyze {
        /// Files or directories to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Project name; sanitized to kebab-case, so leading hyphens are allowed
    #[arg(required_unless_present = "args", allow_hyphen_values = true)]
    name: Option<String>,
    /// Project description
    #[arg(long)]
    description: Option<String>,
    /// Author written into package.json
    #[arg(long)]
    author: Option<String>,
    /// Directory to generate into (defaults to config, then the current directory)
    #[arg(long)]
    output_path: Option<PathBuf>,
    /// Always generate the example resource
    #[arg(long, overrides_with = "no_include_resources")]
    include_resources: bool,
    /// Only add resources when analysis asks for them, even if config enables them
    #[arg(long, overrides_with = "include_resources")]
    no_include_resources: bool,
    /// Sample file or directory used to infer capabilities; repeat for several
    #[arg(long = "analyze", value_name = "PATH", action = ArgAction::Append)]
    analyze_files: Vec<PathBuf>,
    /// Generate into <output-path>/<name> instead of in place
    #[arg(long, overrides_with = "no_create_subdirectory")]
    create_subdirectory: bool,
    /// Generate in place, even if config asks for a subdirectory
    #[arg(long, overrides_with = "create_subdirectory")]
    no_create_subdirectory: bool,
    /// Read a JSON arguments object from a file, or `-` for stdin
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "name",
            "description",
            "author",
            "output_path",
            "include_resources",
            "no_include_resources",
            "analyze_files",
            "create_subdirectory",
            "no_create_subdirectory",
        ]
    )]
    args: Option<PathBuf>,
    /// Synthesize and list the files without writing anything
    #[arg(long)]
    dry_run: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CreateArgs {
    fn project_args(&self) -> ProjectArgs {
        ProjectArgs {
            name: self.name.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            output_path: self.output_path.clone(),
            include_resources: switch(self.include_resources, self.no_include_resources),
            analyze_files: self.analyze_files.clone(),
            create_subdirectory: switch(self.create_subdirectory, self.no_create_subdirectory),
        }
    }
}

/// `--flag` / `--no-flag` pair; `None` leaves the config default in place
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Create(args) => create_project(args).await,
        Commands::Analyze { paths, format } => analyze_files(paths, format).await,
    }
}

async fn create_project(args: CreateArgs) -> anyhow::Result<ExitCode> {
    let config = BuilderConfig::load().context("Failed to load builder configuration")?;
    debug!(?config, "Loaded builder configuration");

    let request = match &args.args {
        Some(source) => request_from_json(source, &config)?,
        None => CreateRequest::from_args(args.project_args(), &config),
    };

    let use_case = CreateProjectUseCase::with_file_system(Arc::new(TokioFileSystem::new()))
        .context("Failed to load built-in templates")?;

    let result = if args.dry_run {
        use_case.preview(request).await
    } else {
        use_case.execute(request).await
    };

    match result {
        Ok(report) => {
            print_report(&report, args.format)?;
            info!(path = %report.resolved_path.display(), "Done");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("❌ Failed to create MCP server project: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn analyze_files(paths: Vec<PathBuf>, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let analyzer = FileCapabilityAnalyzer::new(Arc::new(TokioFileSystem::new()));
    let decision = analyzer.analyze(&paths).await;

    match format {
        OutputFormat::Text => {
            println!(
                "🎯 Capabilities: {}\n",
                CapabilitySet::with_resources(decision.needs_resources)
            );
            println!("🔍 Analysis: {}", decision.evidence.summary());
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&decision).context("Failed to serialize decision")?
        ),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &Report, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(report).context("Failed to serialize report")?
        ),
    }
    Ok(())
}

/// Build a request from a JSON arguments object. Unparseable JSON is a
/// malformed request, not an I/O failure.
fn request_from_json(source: &Path, config: &BuilderConfig) -> anyhow::Result<CreateRequest> {
    let text = if source == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("Failed to read arguments from stdin")?
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read arguments file {}", source.display()))?
    };

    Ok(match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => CreateRequest::from_json(value, config),
        Err(e) => CreateRequest::Malformed(ValidationError::MalformedArguments(e.to_string())),
    })
}
