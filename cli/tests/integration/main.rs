use std::fs;

use assert_cmd::Command;
use immupath_utils::project_root::project_root;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

fn immupath() -> Command {
    Command::cargo_bin("immupath").expect("the immupath binary should be built")
}

/// Run immupath with `stdin` as the input document and parse its output as JSON.
fn run_json(args: &[&str], stdin: &str) -> serde_json::Value {
    let output = immupath()
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("immupath should be runnable");
    assert!(
        output.status.success(),
        "immupath failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).expect("immupath should output valid JSON")
}

fn fixture(name: &str) -> String {
    project_root()
        .join("cli/tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn set_nested_field() {
    assert_eq!(
        run_json(&["set", "a.b", "2"], r#"{"a": {"b": 1}, "c": [1]}"#),
        json!({"a": {"b": 2}, "c": [1]})
    );
}

#[test]
fn delete_removes_the_field_from_the_output() {
    assert_eq!(
        run_json(&["delete", "a"], r#"{"a": 1, "b": 2}"#),
        json!({"b": 2})
    );
}

#[test]
fn array_subcommands() {
    let list = r#"{"list": [1, 2, 3]}"#;

    assert_eq!(run_json(&["push", "list", "4", "5"], list), json!({"list": [1, 2, 3, 4, 5]}));
    assert_eq!(run_json(&["pop", "list"], list), json!({"list": [1, 2]}));
    assert_eq!(run_json(&["pop", "list", "-c", "0"], list), json!({"list": [1, 2, 3]}));
    assert_eq!(run_json(&["shift", "list", "--count", "2"], list), json!({"list": [3]}));
    assert_eq!(run_json(&["unshift", "list", "-1", "0"], list), json!({"list": [-1, 0, 1, 2, 3]}));
    assert_eq!(run_json(&["insert", "list", "1", r#""x""#], list), json!({"list": [1, "x", 2, 3]}));
    assert_eq!(run_json(&["splice", "list", "1", "1", "9"], list), json!({"list": [1, 9, 3]}));
}

#[test]
fn extend_merges_fields() {
    assert_eq!(
        run_json(&["extend", "config", r#"{"debug": true}"#], r#"{"config": {"port": 80}}"#),
        json!({"config": {"port": 80, "debug": true}})
    );
}

#[test]
fn get_reads_from_files() {
    let output = immupath()
        .args(["get", "servers[1].host", "-f", &fixture("config.yaml"), "--output-format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\"beta\"\n");
}

#[test]
fn get_missing_value_prints_nothing() {
    immupath()
        .args(["get", "nothing.here"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn formats_are_guessed_from_the_extension() {
    let output = immupath()
        .args(["set", "dependencies.serde", r#""1.0""#, "-f", &fixture("manifest.toml")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: toml::Table = toml::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(result["dependencies"]["serde"].as_str(), Some("1.0"));
    assert_eq!(result["dependencies"]["log"].as_str(), Some("0.4"));
}

#[test]
fn in_place_update() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("state.json");
    fs::write(&file, r#"{"count": 1}"#).unwrap();
    let file_arg = file.to_string_lossy().into_owned();

    immupath()
        .args(["set", "count", "2", "-i", "-f", &file_arg])
        .assert()
        .success()
        .stdout("");
    let updated: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(updated, json!({"count": 2}));

    // A no-op update doesn't rewrite the file.
    fs::write(&file, r#"{"count":   2}"#).unwrap();
    immupath()
        .args(["set", "count", "2", "-i", "-f", &file_arg])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), r#"{"count":   2}"#);
}

#[test]
fn in_place_requires_a_file() {
    let output = immupath()
        .args(["set", "a", "1", "-i"])
        .write_stdin("{}")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("`--in-place` requires an input file"));
}

#[test]
fn missing_intermediate_is_reported() {
    let output = immupath()
        .args(["set", "a.b.c", "1"])
        .write_stdin(r#"{"a": {}}"#)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot access `c` at `a.b`"), "{stderr}");
    assert!(stderr.contains("never created"), "{stderr}");
}

#[test]
fn huge_index_is_reported() {
    let output = immupath()
        .args(["set", "a[1152921504606846976]", "1"])
        .write_stdin(r#"{"a": []}"#)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is too large for the array at `a`"), "{stderr}");
}

#[test]
fn invalid_path_points_at_the_error() {
    let output = immupath()
        .args(["set", "a[x]", "1"])
        .write_stdin("{}")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid path"), "{stderr}");
    assert!(stderr.contains("expected an array index"), "{stderr}");
}

#[test]
fn no_color_on_non_tty() {
    let output = immupath()
        .args(["set", "a..b", "1"])
        .write_stdin("{}")
        .output()
        .unwrap();

    for stream in [output.stdout, output.stderr] {
        let stream = String::from_utf8(stream).unwrap();
        assert_eq!(stream.find("\x1b["), None);
    }
}

#[test]
fn completions() {
    immupath().args(["gen-completions", "bash"]).assert().success();
}
