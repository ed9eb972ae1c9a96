//! Integration tests for the rdflint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_dataset(files: &[(&str, &[u8])]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (name, content) in files {
        let path = temp.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    temp
}

fn rdflint(target: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("rdflint"));
    cmd.arg("--targetdir").arg(target).arg("--no-color");
    cmd.env_remove("RUST_LOG");
    cmd
}

const CLEAN_TTL: &[u8] = b"@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n<a> foaf:name \"A\" .\n";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rdflint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--targetdir"))
        .stdout(predicate::str::contains("--suppress"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rdflint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn clean_dataset_succeeds_without_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("data.ttl", CLEAN_TTL)]);

    rdflint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));

    assert!(!temp.path().join("rdflint-problems.yml").exists());
    Ok(())
}

#[test]
fn unwritable_output_dir_does_not_change_exit_code() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("data.ttl", b"<a> <b> <c> . \n")]);
    fs::write(temp.path().join("blocker"), "")?;

    rdflint(temp.path())
        .arg("--outputdir")
        .arg(temp.path().join("blocker").join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("warning[data.ttl]"))
        .stderr(predicate::str::contains("Could not write report"));
    Ok(())
}

#[test]
fn warnings_do_not_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("data.ttl", b"<a> <b> <c> . \n")]);

    rdflint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning[data.ttl]: fileEncoding: line 1: trailing whitespace",
        ));
    Ok(())
}

#[test]
fn errors_exit_with_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("a.rdf", b"<rdf>\xff</rdf>\n"), ("b.ttl", b"<a> <b> <c> . \n")]);

    rdflint(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[a.rdf]: fileEncoding: not valid UTF-8"))
        .stdout(predicate::str::contains("Found 1 error(s) and 1 warning(s) in 2 resource(s)"));
    Ok(())
}

#[test]
fn suppressed_error_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[
        ("a.rdf", b"<rdf>\xff</rdf>\n"),
        ("rdflint-suppress.yml", b"- file: a.rdf\n  message: UTF-8\n"),
    ]);

    rdflint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.rdf").not());
    Ok(())
}

#[test]
fn explicit_suppression_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("a.rdf", b"<rdf>\xff</rdf>\n")]);
    let suppress = temp.path().join("known.yml");
    fs::write(&suppress, "- file: a.rdf\n  pattern: '^fileEncoding: '\n")?;

    rdflint(temp.path())
        .arg("--suppress")
        .arg(&suppress)
        .assert()
        .success();
    Ok(())
}

#[test]
fn config_is_discovered_in_search_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[
        ("data.ttl", b"<a> <b> <c> . \n"),
        (
            ".rdflint/rdflint-config.yml",
            b"validation:\n  fileEncoding:\n    trailingWhitespace: false\n",
        ),
    ]);

    rdflint(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
    Ok(())
}

#[test]
fn bad_validator_section_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[
        ("data.ttl", CLEAN_TTL),
        ("rdflint-config.yml", b"validation:\n  fileEncoding:\n    bogus: 1\n"),
    ]);

    rdflint(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "error[runner]: fileEncoding: invalid configuration: unknown key `bogus`",
        ));
    Ok(())
}

#[test]
fn prefix_rules_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[
        ("data.ttl", b"@prefix foaf: <http://xmlns.com/foaf/> .\n"),
        (
            "rdflint-config.yml",
            b"validation:\n  prefix:\n    severity: error\n    prefixes:\n      - name: foaf\n        url: http://xmlns.com/foaf/0.1/\n",
        ),
    ]);

    rdflint(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[data.ttl]: prefix: line 1: prefix foaf:"));
    Ok(())
}

#[test]
fn invalid_config_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("rdflint-config.yml", b"baseUri: [unclosed\n")]);

    rdflint(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn missing_config_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[]);

    rdflint(temp.path())
        .arg("--config")
        .arg(temp.path().join("nope.yml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("data.ttl", b"<a> <b> <c> . \n")]);

    let output = rdflint(temp.path()).args(["--format", "json"]).output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["resources"][0]["resource"], "data.ttl");
    assert_eq!(json["summary"]["warnings"], 1);
    Ok(())
}

#[test]
fn output_dir_receives_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("data.ttl", b"<a> <b> <c> . \n")]);
    let out = temp.path().join("reports");

    rdflint(temp.path()).arg("--outputdir").arg(&out).assert().success();

    let report = fs::read_to_string(out.join("rdflint-problems.yml"))?;
    assert!(report.contains("data.ttl"));
    assert!(report.contains("level: WARNING"));
    assert!(!temp.path().join("rdflint-problems.yml").exists());
    Ok(())
}

#[test]
fn diagnostics_emit_notifications() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("data.ttl", b"<a> <b> <c> . \n")]);

    rdflint(temp.path())
        .arg("--diagnostics")
        .assert()
        .success()
        .stdout(predicate::str::contains("textDocument/publishDiagnostics"))
        .stdout(predicate::str::contains("data.ttl"));
    Ok(())
}

#[test]
fn missing_rule_target_is_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dataset(&[("rdflint-config.yml", b"rules:\n  - target: generated.rdf\n")]);

    rdflint(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error[generated.rdf]: generation: target not found"));
    Ok(())
}
