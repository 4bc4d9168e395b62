// taboo/tests/cli_integration_tests.rs
//! Command-line integration tests for the `taboo` binary.
//!
//! Each test writes its own word list into a temporary directory and passes
//! it with `--wordlist`, so no test depends on the bundled list or on a
//! user's configuration. Colored output is stripped before comparisons.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

/// Writes `contents` as `words.csv` inside `dir`.
fn write_wordlist(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("words.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn taboo_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("taboo"));
    cmd.env_remove("TABOO_WORDLIST");
    cmd.env_remove("TABOO_CONFIG");
    cmd.env("RUST_LOG", "warn");
    cmd
}

fn strip_ansi(s: &[u8]) -> String {
    let cleaned = strip_ansi_escapes_fn(s);
    String::from_utf8_lossy(&cleaned).to_string()
}

#[test]
fn test_censor_positional_message() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");

    taboo_cmd()
        .args(["censor", "--wordlist"])
        .arg(&wordlist)
        .arg("What the heck")
        .assert()
        .success()
        .stdout("What the ****\n");
    Ok(())
}

#[test]
fn test_censor_stdin_with_phrases() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "bad word,heck\n");

    let output = taboo_cmd()
        .args(["censor", "--wordlist"])
        .arg(&wordlist)
        .write_stdin("That's a BAD WORD and a heck of a day\n")
        .output()?;

    assert!(output.status.success());
    assert_eq!(strip_ansi(&output.stdout), "That's a ******** and a **** of a day\n");

    let stderr = strip_ansi(&output.stderr);
    assert!(stderr.contains("--- Censor Summary ---"), "stderr: {stderr}");
    assert!(stderr.contains("bad word (1 occurrence)"));
    assert!(stderr.contains("heck (1 occurrence)"));
    Ok(())
}

#[test]
fn test_wordlist_from_environment() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "darn\n");

    taboo_cmd()
        .env("TABOO_WORDLIST", &wordlist)
        .args(["censor", "--no-summary", "darn it"])
        .assert()
        .success()
        .stdout("**** it\n");
    Ok(())
}

#[test]
fn test_empty_message_warns() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");

    taboo_cmd()
        .args(["censor", "--wordlist"])
        .arg(&wordlist)
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Please enter a message to be censored."));
    Ok(())
}

#[test]
fn test_show_original_layout() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");

    taboo_cmd()
        .args(["--quiet", "censor", "--show-original", "--wordlist"])
        .arg(&wordlist)
        .arg("What the heck")
        .assert()
        .success()
        .stdout("Original Message:\nWhat the heck\n\nCensored Message:\nWhat the ****\n");
    Ok(())
}

#[test]
fn test_output_file() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");
    let out_path = dir.path().join("out.txt");

    taboo_cmd()
        .args(["-q", "censor", "--wordlist"])
        .arg(&wordlist)
        .arg("--output")
        .arg(&out_path)
        .arg("heck yes")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out_path)?, "**** yes\n");
    Ok(())
}

#[test]
fn test_input_file_and_diff() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");
    let input = dir.path().join("input.txt");
    fs::write(&input, "all good\nwhat the heck\n")?;

    let output = taboo_cmd()
        .args(["-q", "censor", "--diff", "--wordlist"])
        .arg(&wordlist)
        .arg("--input-file")
        .arg(&input)
        .output()?;

    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("--- Diff View ---"));
    assert!(stdout.contains("- what the heck"));
    assert!(stdout.contains("+ what the ****"));
    Ok(())
}

#[test]
fn test_literal_terms_via_cli() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "f.o.o\n");

    taboo_cmd()
        .args(["censor", "--no-summary", "--wordlist"])
        .arg(&wordlist)
        .arg("f.o.o and fxoxo")
        .assert()
        .success()
        .stdout("***** and fxoxo\n");
    Ok(())
}

#[test]
fn test_missing_wordlist_fails() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.csv");

    taboo_cmd()
        .args(["censor", "--wordlist"])
        .arg(&missing)
        .arg("heck")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Failed to load word list"));
    Ok(())
}

#[test]
fn test_missing_wordlist_policy_empty() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("config.yaml");
    fs::write(
        &config,
        format!("wordlist: {}\nmissing_wordlist: empty\n", dir.path().join("missing.csv").display()),
    )?;

    taboo_cmd()
        .args(["censor", "--no-summary", "--config"])
        .arg(&config)
        .arg("what the heck")
        .assert()
        .success()
        .stdout("what the heck\n");
    Ok(())
}

#[test]
fn test_scan_json_stdout() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck,darn\n");

    let output = taboo_cmd()
        .args(["scan", "--json-stdout", "--wordlist"])
        .arg(&wordlist)
        .arg("heck, darn, HECK")
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["total_matches"], 3);
    assert_eq!(report["source"], "argument");
    assert_eq!(report["terms"][0]["term"], "heck");
    assert_eq!(report["terms"][0]["occurrences"], 2);
    Ok(())
}

#[test]
fn test_scan_fail_over_threshold() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");

    taboo_cmd()
        .args(["scan", "--fail-over-threshold", "1", "--wordlist"])
        .arg(&wordlist)
        .arg("heck heck")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeding the threshold of 1"));

    taboo_cmd()
        .args(["scan", "--fail-over-threshold", "2", "--wordlist"])
        .arg(&wordlist)
        .arg("heck heck")
        .assert()
        .success();
    Ok(())
}

#[test]
fn test_terms_lists_wordlist() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck,,darn\nheck\n");

    taboo_cmd()
        .args(["terms", "--wordlist"])
        .arg(&wordlist)
        .assert()
        .success()
        .stdout("heck\ndarn\nheck\n")
        .stderr(predicate::str::contains("Loaded 3 terms (2 unique)."));
    Ok(())
}

#[test]
fn test_message_and_input_file_conflict() {
    taboo_cmd()
        .args(["censor", "--input-file", "x.txt", "heck"])
        .assert()
        .failure();
}

#[test]
fn test_disable_debug_hides_info_logs() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");

    for level in [None, Some("debug")] {
        let mut cmd = taboo_cmd();
        cmd.env_remove("RUST_LOG");
        if let Some(level) = level {
            cmd.env("RUST_LOG", level);
        }
        let output = cmd
            .args(["--disable-debug", "censor", "--no-summary", "--wordlist"])
            .arg(&wordlist)
            .arg("what the heck")
            .output()?;

        assert!(output.status.success());
        assert_eq!(strip_ansi(&output.stdout), "what the ****\n");
        let stderr = strip_ansi(&output.stderr);
        assert!(!stderr.contains("[INFO"), "stderr: {stderr}");
        assert!(!stderr.contains("[DEBUG"), "stderr: {stderr}");
    }
    Ok(())
}

#[test]
fn test_invalid_theme_color_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let wordlist = write_wordlist(&dir, "heck\n");
    let theme = dir.path().join("theme.yaml");
    fs::write(&theme, "censored_text:\n  fg: purpel\n")?;

    taboo_cmd()
        .arg("--theme")
        .arg(&theme)
        .args(["censor", "--no-summary", "--wordlist"])
        .arg(&wordlist)
        .arg("heck")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid color 'purpel'"));
    Ok(())
}
