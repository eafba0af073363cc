/// Command-line output tests.
///
/// Run the built binary in a scratch directory with a scratch home, so no
/// real config file leaks in. Stdout must stay machine-readable; diagnostics
/// belong on stderr.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aiportfolio"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("AIPORTFOLIO_CATALOG")
        .env_remove("AIPORTFOLIO_LOG")
        .env_remove("AIPORTFOLIO_LOG_FORMAT")
        .output()
        .expect("failed to run aiportfolio")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn malformed_project_config_is_reported_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".aiportfolio.toml"),
        "[filler]\nseed = \"not a number\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["summary", "--format", "json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let err = stderr(&output);
    assert!(err.contains("ignoring malformed config file"), "{err}");
    assert!(err.contains(".aiportfolio.toml"), "{err}");

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(json.is_object());
}

#[test]
fn unknown_use_case_hint_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["use-case", "no-such-use-case", "--format", "json"],
    );

    assert!(!output.status.success());
    assert!(stdout(&output).trim().is_empty(), "{}", stdout(&output));
    let err = stderr(&output);
    assert!(err.contains("no-such-use-case"), "{err}");
    assert!(err.contains("aiportfolio list"), "{err}");
}

#[test]
fn invalid_catalog_report_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("catalog.toml");
    fs::write(&catalog, "[[departments]]\nid = \"Bad Id\"\nname = \"Bad\"\n").unwrap();

    let output = run(dir.path(), &["validate", catalog.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stdout(&output).trim().is_empty(), "{}", stdout(&output));
    assert!(stderr(&output).contains("is invalid"), "{}", stderr(&output));
}
