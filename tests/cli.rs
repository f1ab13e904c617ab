// tests/cli.rs

mod common;

use assert_cmd::prelude::*;
use common::scaffold_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_malformed_reference_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    scaffold_cmd()
        .arg("create")
        .arg("/broken")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Malformed repository reference"));

    Ok(())
}

#[test]
fn test_tags_rejects_malformed_reference() -> Result<(), Box<dyn std::error::Error>> {
    scaffold_cmd()
        .arg("tags")
        .arg("not-a-repository")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Malformed repository reference"));

    Ok(())
}

#[test]
fn test_zero_timeout_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    scaffold_cmd()
        .args(["tags", "https://github.com/o/r", "--timeout", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid configuration"))
        .stderr(predicate::str::contains("Timeout must be greater than zero"));

    Ok(())
}

#[test]
fn test_invalid_api_url_is_reported_like_other_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    scaffold_cmd()
        .args(["create", "https://github.com/o/r", "--api-url", "not a url"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid configuration"))
        .stderr(predicate::str::contains("Caused by").not());

    Ok(())
}

#[test]
fn test_subcommand_is_required() -> Result<(), Box<dyn std::error::Error>> {
    scaffold_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

/// Scaffolds from a real public repository.
/// This is a slow, network-dependent test.
/// To run: `cargo test -- --ignored network`
#[test]
#[ignore = "requires network access and is slow"]
fn test_network_create_from_public_repository() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    scaffold_cmd()
        .args(["create", "https://github.com/git-fixtures/basic/tree/master"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project"));

    assert!(temp.path().join("go").join("example.go").is_file());
    Ok(())
}
