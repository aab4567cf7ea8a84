//! CLI integration tests.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn blend() -> Command {
    cargo_bin_cmd!("blend")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

#[test]
fn help_lists_commands() {
    blend()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("rates"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_names_binary() {
    blend()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("blend"));
}

#[test]
fn rates_prints_best_quotes() {
    let config = config_file("[simulation]\nseed = 1\n");

    blend()
        .args(["rates", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MorphoBlue"))
        .stdout(predicate::str::contains("Best rates"));
}

#[test]
fn rates_json_is_parseable() {
    let config = config_file(
        r#"
[[rates]]
asset = "USDC"
chain = "Base"
protocol = "MorphoBlue"
rate = 3.8

[[rates]]
asset = "USDC"
chain = "Base"
protocol = "AAVEV3"
rate = 3.6
"#,
    );

    let output = blend()
        .args(["rates", "--json", "--config"])
        .arg(config.path())
        .output()
        .expect("run blend");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json output");
    assert_eq!(report["rates"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["best"][0]["protocol"], "MorphoBlue");
    assert_eq!(report["best"][1]["protocol"], "AAVEV3");
}

#[test]
fn check_config_accepts_valid_file() {
    let config = config_file("referral_code = \"FRIEND\"\n");

    blend()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn check_config_rejects_zero_tick() {
    let config = config_file("[simulation]\ntick_interval_ms = 0\n");

    blend()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_interval_ms"));
}

#[test]
fn missing_config_fails() {
    blend()
        .args(["rates", "--config", "/nonexistent/blend.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn demo_runs_scripted_session() {
    let config = config_file("");

    blend()
        .args(["demo", "--ticks", "2", "--seed", "7", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction Successful"))
        .stdout(predicate::str::contains("Positions Optimized"))
        .stdout(predicate::str::contains("Bridging 2.50 ETH from Ethereum to Optimism."))
        .stdout(predicate::str::contains("BLEND123"));
}
