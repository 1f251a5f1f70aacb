#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flixterm");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movies"))
        .stdout(predicate::str::contains("tv"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_version() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flixterm");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flixterm"));
}

#[test]
fn test_search_missing_keyword() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flixterm");
    cmd.arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEYWORD"));
}

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flixterm");
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword"));
}

#[test]
fn test_movies_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("flixterm");
    cmd.args(["movies", "--help"]).assert().success();
}

#[test]
fn test_missing_api_token() {
    // Arrange
    let tmp = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("flixterm");
    cmd.env_remove("TMDB_API_TOKEN")
        .arg("--dir")
        .arg(tmp.path())
        .arg("movies")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TMDB_API_TOKEN"));
}
