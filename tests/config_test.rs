//! Integration tests for runtime configuration resolution

use std::path::PathBuf;

use speedway::config::{AppConfig, Command, FrameConfig, PlayConfig, ENV_CELL_SIZE, ENV_SEED};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_environment_seeds_both_commands() {
    let lookup = |k: &str| match k {
        ENV_SEED => Some("42".to_string()),
        ENV_CELL_SIZE => Some("4".to_string()),
        _ => None,
    };

    let play = AppConfig::resolve(&[], lookup).unwrap();
    assert_eq!(
        play.command,
        Command::Play(PlayConfig {
            seed: Some(42),
            tick_ms: 100,
            cell_size: 4,
        })
    );

    let frame = AppConfig::resolve(&args(&["frame"]), lookup).unwrap();
    assert_eq!(
        frame.command,
        Command::Frame(FrameConfig {
            seed: Some(42),
            ticks: 600,
            out: PathBuf::from("frame.png"),
            cell_size: 4,
        })
    );
}

#[test]
fn test_blank_environment_values_are_ignored() {
    let lookup = |k: &str| (k == ENV_SEED).then(|| "  ".to_string());
    let cfg = AppConfig::resolve(&[], lookup).unwrap();
    assert!(matches!(cfg.command, Command::Play(PlayConfig { seed: None, .. })));
}

#[test]
fn test_unknown_flag_names_the_flag() {
    let err = AppConfig::resolve(&args(&["--fast"]), |_| None).unwrap_err();
    assert!(err.to_string().contains("--fast"));
}

#[test]
fn test_tick_bounds_are_inclusive() {
    for ms in ["50", "200"] {
        assert!(AppConfig::resolve(&args(&["--tick-ms", ms]), |_| None).is_ok());
    }
    for ms in ["49", "201"] {
        assert!(AppConfig::resolve(&args(&["--tick-ms", ms]), |_| None).is_err());
    }
}
