use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to build a command pointed at a scratch config file
fn stardate_cmd(config_path: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("stardate");
    cmd.env_remove("STARDATE_CONFIG")
        .arg("--config")
        .arg(config_path);
    cmd
}

#[test]
fn test_no_flags_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Date: "))
        .stdout(predicate::str::contains(
            "Current Stardate (using base year 2323):",
        ))
        .stdout(predicate::str::contains("stardate -h or --help"));
}

#[test]
fn test_help_lists_examples() {
    cargo::cargo_bin_cmd!("stardate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--set-base"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_show_base_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .arg("--show-base")
        .assert()
        .success()
        .stdout("Current Reference base year: 2323\n");
}

#[test]
fn test_show_base_with_corrupted_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");
    fs::write(&config_path, "garbage").unwrap();

    stardate_cmd(&config_path)
        .arg("--show-base")
        .assert()
        .success()
        .stdout(predicate::str::contains("2323"));
}

#[test]
fn test_set_base_persists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .args(["--set-base", "2300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference base year updated to 2300"))
        .stdout(predicate::str::contains("(using base year 2300)"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), "2300");

    stardate_cmd(&config_path)
        .arg("--show-base")
        .assert()
        .success()
        .stdout("Current Reference base year: 2300\n");
}

#[test]
fn test_set_base_write_failure_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();

    // A directory cannot be overwritten with the base year
    stardate_cmd(temp_dir.path())
        .args(["--set-base", "2300"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot write base year"));
}

#[test]
fn test_temporary_base_is_not_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .args(["--date", "01-01-2325", "--base", "2323"])
        .assert()
        .success()
        .stdout("Converted date 01-01-2325 to stardate: 2002.74 (using base year 2323)\n");

    stardate_cmd(&config_path)
        .args(["-d", "01-01-2325", "-b", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(using base year 2000)"));

    assert!(!config_path.exists());
}

#[test]
fn test_stardate_to_date() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .args(["--stardate", "2002.74"])
        .assert()
        .success()
        .stdout(
            "Converted stardate 2002.74 to human date: 01-01-2325 (using base year 2323)\n",
        );
}

#[test]
fn test_stardate_takes_priority_over_date() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .args(["-s", "0", "-d", "01-01-2325", "-b", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to human date: 31-12-2023"));
}

#[test]
fn test_persisted_base_is_used_for_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");
    fs::write(&config_path, "2024\n").unwrap();

    stardate_cmd(&config_path)
        .args(["--date", "31-12-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "stardate: 1000.00 (using base year 2024)",
        ));
}

#[test]
fn test_invalid_date_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .args(["--date", "31-02-2024"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a valid calendar date"));

    stardate_cmd(&config_path)
        .args(["--date", "2024-02-01x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");
    fs::write(&config_path, "2100").unwrap();

    cargo::cargo_bin_cmd!("stardate")
        .env("STARDATE_CONFIG", &config_path)
        .arg("--show-base")
        .assert()
        .success()
        .stdout("Current Reference base year: 2100\n");
}

#[test]
#[cfg(unix)]
fn test_default_config_lives_in_home() {
    let home = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("stardate")
        .env_remove("STARDATE_CONFIG")
        .env("HOME", home.path())
        .args(["--set-base", "2250"])
        .assert()
        .success();

    let config_path = home.path().join(".stardate-cli-config");
    assert_eq!(fs::read_to_string(config_path).unwrap(), "2250");
}

#[test]
fn test_malformed_flag_value_exits_with_one() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("base");

    stardate_cmd(&config_path)
        .args(["--stardate", "warp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--stardate"));
}
