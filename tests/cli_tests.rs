//! Exit status and diagnostics of the installed binaries.

use std::fs;
use std::process::{Command, Output};

const CONFIGURE_NODES: &str = env!("CARGO_BIN_EXE_configure-nodes");
const EVENTS_TO_JSON: &str = env!("CARGO_BIN_EXE_events-to-json");

fn run(binary: &str, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_configure_nodes_without_path_prints_usage() {
    let output = run(CONFIGURE_NODES, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Usage: configure-nodes [--use-mongodb=true|false] <path_to_docker_volumes>"));
}

#[test]
fn test_configure_nodes_with_only_flag_prints_usage() {
    let output = run(CONFIGURE_NODES, &["--use-mongodb=true"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: configure-nodes"));
}

#[test]
fn test_configure_nodes_missing_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nodeX")).unwrap();

    let output = run(CONFIGURE_NODES, &[dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(combined(&output).contains("Config directory not found for node: nodeX"));
}

#[test]
fn test_configure_nodes_help_succeeds() {
    let output = run(CONFIGURE_NODES, &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--use-mongodb"));
}

#[test]
fn test_events_to_json_single_argument_prints_usage() {
    let output = run(EVENTS_TO_JSON, &["events.csv"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Usage: events-to-json <path_to_events_csv> <output_file>"));
}

#[test]
fn test_events_to_json_converts_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("events.json");

    let output = run(
        EVENTS_TO_JSON,
        &["tests/fixtures/events.csv", output_path.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "{\n    \"1\": \"A\",\n    \"2\": \"B\"\n}"
    );
}
