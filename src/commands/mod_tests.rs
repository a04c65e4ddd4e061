use clap::Parser;

use super::*;
use crate::cli::Cli;

#[test]
fn validation_errors_exit_with_one() {
    let err = PointError::not_a_number("x", &serde_json::json!("a"));
    assert_eq!(exit_code_for(&err), EXIT_VALIDATION_ERROR);

    let err = PointError::Value {
        color: "magenta".to_string(),
        allowed: Vec::new(),
    };
    assert_eq!(exit_code_for(&err), EXIT_VALIDATION_ERROR);
}

#[test]
fn other_errors_exit_with_two() {
    let err = PointError::Config("bad".to_string());
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
    let err = PointError::Io(std::io::Error::other("boom"));
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn run_impl_dispatches_record() {
    let cli = Cli::parse_from(["colorpoint", "--no-config", "record", r#"{"y": 1}"#]);
    assert_eq!(run_impl(&cli).unwrap(), "<10,1>(black)\n");
}

#[test]
fn run_impl_dispatches_points_with_seed() {
    let cli = Cli::parse_from(["colorpoint", "--no-config", "--seed", "3", "points", "-n", "2"]);
    let output = run_impl(&cli).unwrap();
    assert!(output.starts_with("unsorted points\n"));
}

#[test]
fn run_returns_validation_exit_code() {
    let cli = Cli::parse_from(["colorpoint", "--no-config", "record", r#"{"x": "a"}"#]);
    assert_eq!(run(&cli), EXIT_VALIDATION_ERROR);
}

#[test]
fn run_returns_config_exit_code_for_missing_config() {
    let cli = Cli::parse_from(["colorpoint", "--config", "/definitely/missing.toml", "colors"]);
    assert_eq!(run(&cli), EXIT_CONFIG_ERROR);
}
