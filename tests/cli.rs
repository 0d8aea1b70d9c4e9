//! Command-line behaviour of the `cafe_persona` binary.

use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cafe_persona"))
        .args(args)
        .current_dir(dir)
        .env("CAFE_QUIZ_CONTENT", dir.join("quiz_content.json"))
        .output()
        .unwrap()
}

#[test]
fn test_usage_does_not_touch_content() {
    let dir = tempfile::tempdir().unwrap();

    for args in [&[][..], &["help"][..]] {
        let out = run(dir.path(), args);
        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains("Usage:"));
    }
    assert!(!dir.path().join("quiz_content.json").exists());
}

#[test]
fn test_score_seeds_content_and_prints_share_query() {
    let dir = tempfile::tempdir().unwrap();

    let out = run(dir.path(), &["score", "q1=a"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Share:  ?data="));
    assert!(dir.path().join("quiz_content.json").exists());
}
