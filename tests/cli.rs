use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const CREDENTIAL_VARS: [&str; 5] = [
    "DINERO_CONFIG",
    "DINERO_CLIENT_ID",
    "DINERO_CLIENT_SECRET",
    "DINERO_API_KEY",
    "DINERO_ORGANIZATION_ID",
];

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn dinero() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dinero"));
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "client_id: id\nclient_secret: secret\napi_key: key\norganization_id: 42\n",
    );

    let assert = dinero()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Organization: 42"));
    assert!(stdout.contains("API key configured"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(!stdout.contains("Please specify"));

    Ok(())
}

#[test]
fn status_applies_org_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "client_id: id\nclient_secret: secret\napi_key: key\norganization_id: 42\n",
    );

    dinero()
        .args(["status", "--org", "99", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Organization: 99"));

    Ok(())
}

#[test]
fn status_reports_missing_field() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "client_id: id\nclient_secret: secret\norganization_id: 42\n",
    );

    dinero()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("API key not configured"))
        .stdout(predicate::str::contains("Please specify 'api_key'"));

    Ok(())
}

#[test]
fn contacts_list_fails_before_network_on_missing_field() -> Result<(), Box<dyn std::error::Error>>
{
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "client_id: id\napi_key: key\norganization_id: 42\n");

    dinero()
        .args(["contacts", "list", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please specify 'client_secret'"));

    Ok(())
}

#[test]
fn explicit_config_path_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("nope.yaml");

    dinero()
        .args(["orgs", "list", "--api-key", "key", "--config"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    Ok(())
}

#[test]
fn version_prints_package_version() {
    dinero()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_format() {
    dinero()
        .args(["--format", "xml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}
