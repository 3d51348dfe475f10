#![allow(clippy::expect_used, reason = "Fine in tests")]
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_movies-site"))
    .args(args)
    .output()
    .expect("Failed to run movies-site in test")
}

fn stdout(output: &Output) -> String {
  String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn test_get_prints_raw_strings() {
  let output = run(&["get", "logo.alt"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "My Favorite Movies Ranked Logo\n");

  let output = run(&["get", "mode"]);
  assert_eq!(stdout(&output), "auto\n");
}

#[test]
fn test_get_prints_booleans() {
  let output = run(&["get", "noindex"]);
  assert!(output.status.success());
  assert_eq!(stdout(&output), "false\n");
}

#[test]
fn test_get_unknown_key_fails() {
  let output = run(&["get", "theme"]);
  assert!(!output.status.success());
  assert!(output.stdout.is_empty());
}

#[test]
fn test_show_json() {
  let output = run(&["show"]);
  assert!(output.status.success());

  let value: serde_json::Value =
    serde_json::from_str(&stdout(&output)).expect("show should print JSON");
  assert_eq!(value["siteTitle"], "My Favorite Movies Ranked");
  assert_eq!(value["scrollAnimations"], true);
}

#[test]
fn test_show_toml() {
  let output = run(&["show", "--format", "toml"]);
  assert!(output.status.success());
  assert!(stdout(&output).contains("mode = \"auto\""));
}
