//! CLI tests for the `rolo explain` subcommand.

use std::process::Command;

use assert_cmd::cargo;

fn rolo_cmd() -> Command {
    Command::new(cargo::cargo_bin!("rolo"))
}

#[test]
fn explain_known_code_json_returns_explanation() {
    let output = rolo_cmd()
        .args(["explain", "RLO1004", "--output", "json"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["id"], "RLO1004");
    assert!(json["explanation"].is_string());
}

#[test]
fn explain_unknown_code_json_returns_null_explanation() {
    let output = rolo_cmd()
        .args(["explain", "RLO9999", "--output", "json"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["id"], "RLO9999");
    assert!(json["explanation"].is_null());
}

#[test]
fn explain_pretty_shows_human_readable_text() {
    let output = rolo_cmd()
        .args(["explain", "RLO1005", "--output", "pretty"])
        .output()
        .expect("run explain command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("RLO1005") && stdout.contains(':'),
        "unexpected output: {stdout}"
    );
}

#[test]
fn explain_covers_every_parser_code() {
    for code in rolo_diagnostics::codes::ALL {
        let output = rolo_cmd()
            .args(["explain", code, "--output", "json"])
            .output()
            .expect("run explain command");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
        assert!(
            json["explanation"].is_string(),
            "code {code} has no explanation"
        );
    }
}
