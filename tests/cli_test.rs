//! Integration tests for the mcp-server-builder CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from any user configuration
fn builder(config_root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mcp-server-builder").unwrap();
    cmd.env("MCP_SERVER_BUILDER_CONFIG", config_root.join("absent.toml"))
        .env_remove("MCP_SERVER_BUILDER_OUTPUT_DIR")
        .env_remove("MCP_SERVER_BUILDER_AUTHOR")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_create_into_subdirectory() {
    let temp_dir = TempDir::new().unwrap();

    builder(temp_dir.path())
        .arg("create")
        .arg("My Cool App!")
        .arg("--output-path")
        .arg(temp_dir.path())
        .arg("--create-subdirectory")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✅ Successfully created MCP server project 'my-cool-app'",
        ))
        .stdout(predicate::str::contains("🎯 Capabilities: Tools\n"))
        .stdout(predicate::str::contains("cd my-cool-app"));

    let project = temp_dir.path().join("my-cool-app");
    assert!(project.join("package.json").is_file());
    assert!(project.join("src/server.ts").is_file());
    assert!(!project.join("src/resources/example-resource.ts").exists());

    let entrypoint = std::fs::read_to_string(project.join("src/index.ts")).unwrap();
    assert!(entrypoint.contains("new MyCoolAppServer()"));
}

#[test]
fn test_create_with_analysis() {
    let temp_dir = TempDir::new().unwrap();
    let sample = temp_dir.path().join("records.csv");
    std::fs::write(&sample, "id,name\n1,a\n").unwrap();
    let output = temp_dir.path().join("out");

    builder(temp_dir.path())
        .arg("create")
        .arg("records")
        .arg("--output-path")
        .arg(&output)
        .arg("--analyze")
        .arg(&sample)
        .assert()
        .success()
        .stdout(predicate::str::contains("🎯 Capabilities: Tools + Resources"))
        .stdout(predicate::str::contains("🔍 Analysis: Analyzed 1 file(s)"))
        .stdout(predicate::str::contains("records.csv: Data file detected"));

    assert!(output.join("src/resources/example-resource.ts").is_file());
}

#[test]
fn test_existing_subdirectory_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("weather")).unwrap();

    builder(temp_dir.path())
        .arg("create")
        .arg("weather")
        .arg("--output-path")
        .arg(temp_dir.path())
        .arg("--create-subdirectory")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "❌ Failed to create MCP server project: Directory",
        ))
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        std::fs::read_dir(temp_dir.path().join("weather"))
            .unwrap()
            .count(),
        0
    );
}

#[test]
fn test_invalid_name_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");

    builder(temp_dir.path())
        .arg("create")
        .arg("---")
        .arg("--output-path")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name '---'"));

    assert!(!output.exists());
}

#[test]
fn test_create_from_json_arguments_on_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let arguments = serde_json::json!({
        "name": "notes",
        "outputPath": temp_dir.path(),
        "includeResources": true,
        "createSubdirectory": true
    });

    builder(temp_dir.path())
        .arg("create")
        .arg("--args")
        .arg("-")
        .arg("--format")
        .arg("json")
        .write_stdin(arguments.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"projectName\": \"notes\""))
        .stdout(predicate::str::contains("\"resources\": true"));

    assert!(
        temp_dir
            .path()
            .join("notes/src/resources/example-resource.ts")
            .is_file()
    );
}

#[test]
fn test_malformed_json_arguments() {
    let temp_dir = TempDir::new().unwrap();

    builder(temp_dir.path())
        .arg("create")
        .arg("--args")
        .arg("-")
        .write_stdin(r#"{"description": "no name"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Project name is required and must be a string",
        ));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");

    builder(temp_dir.path())
        .arg("create")
        .arg("weather")
        .arg("--output-path")
        .arg(&output)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("🧪 Dry run"))
        .stdout(predicate::str::contains("src/tools/example-tool.ts"));

    assert!(!output.exists());
}

#[test]
fn test_analyze_command() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("main.py");
    std::fs::write(&script, "print('hi')\n").unwrap();

    builder(temp_dir.path())
        .arg("analyze")
        .arg(&script)
        .arg(temp_dir.path().join("missing.bin"))
        .assert()
        .success()
        .stdout(predicate::str::contains("🎯 Capabilities: Tools\n"))
        .stdout(predicate::str::contains("main.py: Code file detected"))
        .stdout(predicate::str::contains("missing.bin: File not accessible"));
}

#[test]
fn test_name_with_leading_hyphen_is_sanitized() {
    let temp_dir = TempDir::new().unwrap();

    builder(temp_dir.path())
        .arg("create")
        .arg("-weather")
        .arg("--output-path")
        .arg(temp_dir.path())
        .arg("--create-subdirectory")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✅ Successfully created MCP server project 'weather'",
        ));

    assert!(temp_dir.path().join("weather/package.json").is_file());
}

#[test]
fn test_no_create_subdirectory_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "create_subdirectory = true\n").unwrap();
    let output = temp_dir.path().join("out");

    builder(temp_dir.path())
        .env("MCP_SERVER_BUILDER_CONFIG", &config_path)
        .arg("create")
        .arg("weather")
        .arg("--output-path")
        .arg(&output)
        .arg("--no-create-subdirectory")
        .assert()
        .success()
        .stdout(predicate::str::contains("cd weather").not());

    assert!(output.join("package.json").is_file());
    assert!(!output.join("weather").exists());
}

#[test]
fn test_name_after_analyze_flag_is_not_a_sample() {
    let temp_dir = TempDir::new().unwrap();
    let sample = temp_dir.path().join("records.csv");
    std::fs::write(&sample, "id\n1\n").unwrap();
    let output = temp_dir.path().join("out");

    builder(temp_dir.path())
        .arg("create")
        .arg("--analyze")
        .arg(&sample)
        .arg("records")
        .arg("--output-path")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("project 'records'"))
        .stdout(predicate::str::contains("Analyzed 1 file(s)"));

    assert!(output.join("src/resources/example-resource.ts").is_file());
}
