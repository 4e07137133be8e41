//! Configuration resolution tests: defaults, file values, env overrides.
//!
//! These tests mutate DRAWFIVE_* environment variables and must run
//! serially.

use drawfive_cli::config;
use drawfive_cli::run;
use serial_test::serial;

fn clear_env() {
    for key in [
        "DRAWFIVE_CONFIG",
        "DRAWFIVE_SEED",
        "DRAWFIVE_STARTING_STACK",
        "DRAWFIVE_OPPONENTS",
        "DRAWFIVE_SAVE_DIR",
    ] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn defaults_apply_without_file_or_env() {
    clear_env();
    let cfg = config::load().expect("defaults are valid");
    assert_eq!(cfg.starting_stack, 1_000);
    assert_eq!(cfg.small_blind, 25);
    assert_eq!(cfg.big_blind, 50);
    assert_eq!(cfg.opponents, 2);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.save_dir, None);
}

#[test]
#[serial]
fn file_values_override_defaults() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawfive.toml");
    std::fs::write(
        &path,
        "starting_stack = 5000\nsmall_blind = 10\nbig_blind = 20\nopponents = 4\n",
    )
    .unwrap();
    unsafe { std::env::set_var("DRAWFIVE_CONFIG", path.to_str().unwrap()) };

    let resolved = config::load_with_sources().expect("file config is valid");
    clear_env();

    assert_eq!(resolved.config.starting_stack, 5_000);
    assert_eq!(resolved.config.small_blind, 10);
    assert_eq!(resolved.config.big_blind, 20);
    assert_eq!(resolved.config.opponents, 4);
    assert!(matches!(
        resolved.sources.opponents,
        config::ValueSource::File
    ));
    assert!(matches!(
        resolved.sources.seed,
        config::ValueSource::Default
    ));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawfive.toml");
    std::fs::write(&path, "seed = 1\n").unwrap();
    unsafe { std::env::set_var("DRAWFIVE_CONFIG", path.to_str().unwrap()) };
    unsafe { std::env::set_var("DRAWFIVE_SEED", "99") };

    let resolved = config::load_with_sources().expect("env config is valid");
    clear_env();

    assert_eq!(resolved.config.seed, Some(99));
    assert!(matches!(resolved.sources.seed, config::ValueSource::Env));
}

#[test]
#[serial]
fn invalid_env_seed_is_rejected() {
    clear_env();
    unsafe { std::env::set_var("DRAWFIVE_SEED", "not-a-number") };
    let result = config::load();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn invalid_opponent_count_is_rejected() {
    clear_env();
    unsafe { std::env::set_var("DRAWFIVE_OPPONENTS", "9") };
    let result = config::load();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn cfg_command_reports_values_with_sources() {
    clear_env();
    unsafe { std::env::set_var("DRAWFIVE_SEED", "7") };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["drawfive", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 0);

    let stdout = String::from_utf8_lossy(&out);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("cfg emits JSON");
    assert_eq!(parsed["seed"]["value"], 7);
    assert_eq!(parsed["seed"]["source"], "env");
    assert_eq!(parsed["small_blind"]["value"], 25);
    assert_eq!(parsed["small_blind"]["source"], "default");
}

#[test]
#[serial]
fn cfg_command_fails_on_invalid_configuration() {
    clear_env();
    unsafe { std::env::set_var("DRAWFIVE_STARTING_STACK", "10") };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["drawfive", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 2);

    let stderr = String::from_utf8_lossy(&err);
    assert!(stderr.contains("Invalid configuration"));
}
