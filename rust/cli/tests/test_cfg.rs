//! Configuration resolution: defaults, file overrides via HOLDEM_CONFIG,
//! and environment variable overrides on top of the file.
//!
//! All tests are serialized because they mutate process environment.

use std::io::Write as _;

use holdem_cli::run;
use serial_test::serial;

fn clear_env() {
    unsafe {
        std::env::remove_var("HOLDEM_CONFIG");
        std::env::remove_var("HOLDEM_PLAYERS");
        std::env::remove_var("HOLDEM_STACK");
        std::env::remove_var("HOLDEM_SEED");
    }
}

fn run_cfg() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn defaults_apply_without_any_overrides() {
    clear_env();
    let (code, out, _) = run_cfg();
    assert_eq!(code, 0);
    assert!(out.contains("players        = 2 (default)"));
    assert!(out.contains("starting_stack = 100 (default)"));
    assert!(out.contains("small_blind    = 5 (default)"));
    assert!(out.contains("big_blind      = 10 (default)"));
    assert!(out.contains("seed           = random (default)"));
}

#[test]
#[serial]
fn config_file_overrides_defaults() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "players = 6").unwrap();
    writeln!(f, "starting_stack = 500").unwrap();
    unsafe {
        std::env::set_var("HOLDEM_CONFIG", &path);
    }

    let (code, out, _) = run_cfg();
    clear_env();
    assert_eq!(code, 0);
    assert!(out.contains("players        = 6 (file)"));
    assert!(out.contains("starting_stack = 500 (file)"));
    assert!(out.contains("small_blind    = 5 (default)"));
}

#[test]
#[serial]
fn environment_overrides_the_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("holdem.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "players = 6").unwrap();
    writeln!(f, "seed = 1").unwrap();
    unsafe {
        std::env::set_var("HOLDEM_CONFIG", &path);
        std::env::set_var("HOLDEM_PLAYERS", "4");
        std::env::set_var("HOLDEM_SEED", "99");
    }

    let (code, out, _) = run_cfg();
    clear_env();
    assert_eq!(code, 0);
    assert!(out.contains("players        = 4 (env)"));
    assert!(out.contains("seed           = 99 (env)"));
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("HOLDEM_PLAYERS", "1");
    }
    let (code, _, err) = run_cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("players must be 2-9"));
}

#[test]
#[serial]
fn unparseable_env_values_are_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("HOLDEM_SEED", "notanumber");
    }
    let (code, _, err) = run_cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("HOLDEM_SEED"));
}
