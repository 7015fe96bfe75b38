//! Integration tests for the `validate` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_valid_file() {
    let env = TestEnv::new();
    let file = env.write_file(
        "rootdir.yaml",
        "projectDirectories:\n  - moduleA\n  - null\nfollowSymbolicLinks: false\noutput_format: export:zsh\n",
    );

    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_unknown_field() {
    let env = TestEnv::new();
    let file = env.write_file("rootdir.yaml", "ports: 5000\n");

    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_validate_invalid_property() {
    let env = TestEnv::new();
    let file = env.write_file("custom.yaml", "output_property: \"two words\"\n");

    env.command()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("whitespace"));
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command()
        .arg("validate")
        .arg(env.path().join("nope.yaml"))
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_validate_merged_configuration() {
    let env = TestEnv::new();
    env.write_file("rootdir.yaml", "skip: false\n");
    env.write_user_config("output_format: json\n");

    env.command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_merged_configuration_reports_bad_layer() {
    let env = TestEnv::new();
    env.write_file("rootdir.local.yaml", "output_format: table\n");

    env.command()
        .arg("validate")
        .assert()
        .failure()
        .code(7);
}

#[test]
fn test_validate_uses_config_dir_from_environment() {
    let env = TestEnv::new();
    env.write_user_config("follow_symbolic_links: maybe\n");

    env.command_bare()
        .env("ROOTDIR_CONFIG_DIR", &env.config_dir)
        .arg("validate")
        .assert()
        .failure()
        .code(7);
}
