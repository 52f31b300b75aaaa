//! Runs the binary's terminal commands against draft files
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn bin_path() -> String {
    std::env::var("CARGO_BIN_EXE_draft-ls").unwrap_or_else(|_| "target/debug/draft-ls".to_string())
}

fn run_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env("RUST_LOG", "off")
        .spawn()
        .expect("Failed to spawn draft-ls");

    child
        .stdin
        .take()
        .expect("Child stdin should be available")
        .write_all(input.as_bytes())
        .expect("Failed to write answers");

    child.wait_with_output().expect("Failed to wait for draft-ls")
}

#[test]
fn scan_lists_blanks_as_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let draft = dir.path().join("notice.txt");
    fs::write(&draft, "To: ____\nSubject: __subject__\n").expect("write draft");

    let output = run_with_input(
        &["scan", draft.to_str().expect("utf8 path"), "--json"],
        "",
    );
    assert!(output.status.success());

    let blanks: Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    let blanks = blanks.as_array().expect("array of blanks");
    assert_eq!(blanks.len(), 2);
    assert_eq!(blanks[0]["raw_marker"], "____");
    assert_eq!(blanks[0]["kind"], "run");
    assert_eq!(blanks[1]["raw_marker"], "__subject__");
    assert_eq!(blanks[1]["kind"], "token");
    assert_eq!(blanks[1]["start_offset"], 18);
}

#[test]
fn fill_writes_completed_draft() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let draft = dir.path().join("petition.txt");
    let finished = dir.path().join("petition.filled.txt");
    fs::write(&draft, "Petitioner: ____ files this petition against ___.").expect("write draft");

    let output = run_with_input(
        &[
            "fill",
            draft.to_str().expect("utf8 path"),
            "--output",
            finished.to_str().expect("utf8 path"),
        ],
        "Jane Doe\n\nJohn Doe\n",
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        fs::read_to_string(&finished).expect("read output"),
        "Petitioner: Jane Doe files this petition against John Doe."
    );

    let prompts = String::from_utf8_lossy(&output.stderr);
    assert!(prompts.contains("Current blank: ____"));
    assert!(prompts.contains("Please type a value for this blank."));
}

#[test]
fn fill_fails_when_answers_run_out() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let draft = dir.path().join("petition.txt");
    fs::write(&draft, "___ and ___").expect("write draft");

    let output = run_with_input(&["fill", draft.to_str().expect("utf8 path")], "first\n");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 blank(s) left"));
}

#[test]
fn render_lays_out_json_draft() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let draft = dir.path().join("petition.json");
    fs::write(&draft, r#"{"Case": "petition", "act": "Section 13(1)"}"#).expect("write draft");

    let output = run_with_input(&["render", draft.to_str().expect("utf8 path")], "");
    assert!(output.status.success());

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "PETITION\n\nUnder Section 13(1)\n\nAND\n\nAND\n"
    );
}
