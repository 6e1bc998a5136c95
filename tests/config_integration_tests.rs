//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

const VALID_CONFIG: &str = r#"
[scanner]
skip_list = [".git", "vendor"]
extensions = ["go"]

[content]
exclude = "TODO|FIXME"
"#;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config(VALID_CONFIG);

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", VALID_CONFIG);

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "custom.toml"])
        .assert()
        .success();
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner\nskip_list = ");

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn config_validate_rejects_unknown_keys() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nmax_lines = 10\n");

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2);
}

#[test]
fn config_validate_rejects_bad_exclude_regex() {
    let fixture = TestFixture::new();
    fixture.create_config("[content]\nexclude = \"[unclosed\"\n");

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid exclude pattern"));
}

#[test]
fn config_validate_rejects_bad_skip_glob() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nskip_list = [\"[z-a]\"]\n");

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_defaults_without_config() {
    let fixture = TestFixture::new();

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "show", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[scanner]"))
        .stdout(predicate::str::contains("node_modules"));
}

#[test]
fn config_show_local_config_as_json() {
    let fixture = TestFixture::new();
    fixture.create_config(VALID_CONFIG);

    let output = comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .output()
        .expect("Failed to run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["scanner"]["extensions"][0], "go");
    assert_eq!(json["content"]["exclude"], "TODO|FIXME");
}

#[test]
fn config_show_missing_explicit_file() {
    let fixture = TestFixture::new();

    comment_guard!()
        .current_dir(fixture.path())
        .args(["config", "show", "--config", "nope.toml"])
        .assert()
        .code(2);
}
