// End-to-end tests for the `client-search` binary.
// Run with: cargo test -p client-search --test cli

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

fn client_search(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_client-search"));
    cmd.current_dir(dir)
        .env_remove("CLIENT_SEARCH_API_URL")
        .env_remove("CLIENT_SEARCH_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

fn clients() -> Value {
    json!([
        {"id": 1, "full_name": "John Doe", "email": "john@example.com"},
        {"id": 2, "full_name": "Jane Smith", "email": "jane@example.com"},
        {"id": 3, "full_name": "John-Paul Jones", "email": "jp@example.com"},
        {"id": 4, "full_name": "Johnny Walker", "email": "JOHN@example.com"},
        {"id": 5, "first_name": "Bob", "last_name": "Johnson", "email": "bob@example.com"}
    ])
}

fn write_clients(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("clients.json");
    std::fs::write(&path, contents).unwrap();
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_clients(&dir, &clients().to_string());
    (dir, path)
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = run(client_search(dir.path()).arg("version"));
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("client-search version {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_search_table() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["search", "John"])
        .arg("--file")
        .arg(&file));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Full name"));
    assert!(out.contains("John Doe"));
    assert!(out.contains("John-Paul Jones"));
    assert!(!out.contains("Johnny Walker"));
}

#[test]
fn test_search_json() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["search", "john doe", "--format", "json", "--file"])
        .arg(&file));

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        json!([{"id": 1, "full_name": "John Doe", "email": "john@example.com"}])
    );
}

#[test]
fn test_search_csv_with_synthesized_name() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["search", "johnson", "--format", "csv", "--file"])
        .arg(&file));

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "id,first_name,last_name,email,full_name\n5,Bob,Johnson,bob@example.com,Bob Johnson\n"
    );
}

#[test]
fn test_search_email_field_with_limit() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["search", "example.com", "--field", "email", "--limit", "2", "--format", "json", "--file"])
        .arg(&file));

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<i64> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_no_results() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["search", "Nonexistent", "--file"])
        .arg(&file));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No results found.\n");
}

#[test]
fn test_unknown_format_falls_back_to_table() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["search", "Jane", "--format", "yaml", "--file"])
        .arg(&file));

    assert!(output.status.success());
    assert!(stdout(&output).contains("| 2 "));
}

#[test]
fn test_duplicates_table() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["duplicates", "--file"])
        .arg(&file));

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Duplicate email: john@example.com"));
    assert!(out.contains("Johnny Walker"));
    assert!(!out.contains("jane@example.com"));
}

#[test]
fn test_duplicates_json() {
    let (dir, file) = setup();
    let output = run(client_search(dir.path())
        .args(["duplicates", "--format", "json", "--file"])
        .arg(&file));

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let groups = parsed.as_object().unwrap();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["john@example.com"]);
    assert_eq!(groups["john@example.com"][1]["id"], json!(4));
}

#[test]
fn test_no_duplicates() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir, r#"[{"id": 1, "email": "a@x.com"}, {"id": 2, "email": "b@x.com"}]"#);
    let output = run(client_search(dir.path())
        .args(["duplicates", "--file"])
        .arg(&file));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No duplicate emails found.\n");
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = run(client_search(dir.path())
        .args(["search", "John", "--file", "missing.json"]));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim(), "Error: File not found: missing.json");
}

#[test]
fn test_invalid_json_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let file = write_clients(&dir, "{ invalid json");
    let output = run(client_search(dir.path())
        .args(["duplicates", "--file"])
        .arg(&file));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Invalid JSON format:"));
}

#[test]
fn test_search_against_api() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/clients.json");
        then.status(200).json_body(clients());
    });

    let dir = TempDir::new().unwrap();
    let output = run(client_search(dir.path())
        .args(["search", "jane", "--format", "json", "--api-url"])
        .arg(server.base_url()));

    mock.assert();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed[0]["full_name"], json!("Jane Smith"));
}

#[test]
fn test_api_url_from_env() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clients.json");
        then.status(200).json_body(clients());
    });

    let dir = TempDir::new().unwrap();
    let output = run(client_search(dir.path())
        .env("CLIENT_SEARCH_API_URL", server.base_url())
        .args(["duplicates", "--format", "csv"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("email,id,full_name\n"));
}

#[test]
fn test_api_url_from_dotenv() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clients.json");
        then.status(200).json_body(clients());
    });

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        format!("CLIENT_SEARCH_API_URL={}\n", server.base_url()),
    )
    .unwrap();
    let output = run(client_search(dir.path()).args(["search", "Jane"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Jane Smith"));
}

#[test]
fn test_api_error_exits_with_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clients.json");
        then.status(500);
    });

    let dir = TempDir::new().unwrap();
    let output = run(client_search(dir.path())
        .args(["search", "John", "--api-url"])
        .arg(server.base_url()));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim(), "Error: Server error (500)");
}
