//! Integration tests for the CryptJournal CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`. The
//! password comes from `JOURNAL_PASSWORD` so nothing prompts, and each
//! test drops a `.journal.toml` with a low iteration count into its own
//! temp directory to keep key derivation fast.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the cryptjournal binary.
fn cryptjournal() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("cryptjournal").expect("binary should exist")
}

/// A temp project directory with fast KDF settings.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".journal.toml")
        .write_str("kdf_iterations = 1000\n")
        .unwrap();
    tmp
}

/// A command running inside `dir` with `password` in the environment.
fn in_project(dir: &TempDir, password: &str) -> Command {
    let mut cmd = cryptjournal();
    cmd.current_dir(dir.path())
        .env("JOURNAL_PASSWORD", password)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    cryptjournal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted local journal"))
        .stdout(predicate::str::contains("write"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn version_flag_shows_version() {
    cryptjournal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cryptjournal"));
}

#[test]
fn no_args_shows_help() {
    cryptjournal()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn write_then_list_and_show() {
    let tmp = project();

    in_project(&tmp, "correcthorse")
        .args(["write", "--title", "First day", "--body", "It rained."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry #1"));

    tmp.child(".journal").assert(predicate::path::is_dir());
    tmp.child(".journal/journal.db")
        .assert(predicate::path::exists());
    tmp.child(".journal/state.json")
        .assert(predicate::str::contains("journal_salt"));

    in_project(&tmp, "correcthorse")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("First day"));

    in_project(&tmp, "correcthorse")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("It rained."));
}

#[test]
fn plaintext_never_reaches_disk() {
    let tmp = project();

    in_project(&tmp, "correcthorse")
        .args(["write", "--title", "secret-title", "--body", "secret-body"])
        .assert()
        .success();

    let db = std::fs::read(tmp.child(".journal/journal.db").path()).unwrap();
    let haystack = String::from_utf8_lossy(&db);
    assert!(!haystack.contains("secret-title"));
    assert!(!haystack.contains("secret-body"));
}

#[test]
fn wrong_password_fails() {
    let tmp = project();

    in_project(&tmp, "correcthorse")
        .args(["write", "--title", "mine", "--body", "private"])
        .assert()
        .success();

    in_project(&tmp, "batterystaple")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong password"));
}

#[test]
fn search_filters_entries() {
    let tmp = project();

    for (title, body) in [("Alpha", "nothing here"), ("Beta Plan", "the roadmap")] {
        in_project(&tmp, "pw")
            .args(["write", "--title", title, "--body", body])
            .assert()
            .success();
    }

    in_project(&tmp, "pw")
        .args(["search", "PLAN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beta Plan"))
        .stdout(predicate::str::contains("Alpha").not());
}

#[test]
fn edit_title_keeps_body() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["write", "--title", "Draft", "--body", "original body"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["edit", "1", "--title", "Final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry #1"));

    in_project(&tmp, "pw")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final"))
        .stdout(predicate::str::contains("original body"))
        .stdout(predicate::str::contains("Draft").not());
}

#[test]
fn edit_body_keeps_title() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["write", "--title", "Stable title", "--body", "old words"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["edit", "1", "--body", "new words"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stable title"))
        .stdout(predicate::str::contains("new words"))
        .stdout(predicate::str::contains("old words").not());
}

#[test]
fn edit_restamps_date_and_keeps_id() {
    let tmp = project();

    for title in ["Older", "Newer"] {
        in_project(&tmp, "pw")
            .args(["write", "--title", title, "--body", "x"])
            .assert()
            .success();
    }

    let list = |tmp: &TempDir| {
        let out = in_project(tmp, "pw").arg("list").output().unwrap();
        assert!(out.status.success());
        String::from_utf8_lossy(&out.stdout).into_owned()
    };

    let before = list(&tmp);
    assert!(before.find("Newer").unwrap() < before.find("Older").unwrap());

    in_project(&tmp, "pw")
        .args(["edit", "1", "--title", "Older revised"])
        .assert()
        .success();

    let after = list(&tmp);
    assert!(after.find("Older revised").unwrap() < after.find("Newer").unwrap());

    // Still id 1, and no third entry appeared.
    in_project(&tmp, "pw")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Older revised"));
    in_project(&tmp, "pw")
        .args(["show", "3"])
        .assert()
        .failure();
}

#[test]
fn edit_missing_entry_fails() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["write", "--title", "only one", "--body", "x"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["edit", "99", "--title", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry 99 not found"));
}

#[test]
fn delete_with_force_removes_entry() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["write", "--title", "doomed", "--body", "x"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["delete", "1", "--force"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["show", "1"])
        .assert()
        .failure();
}

#[test]
fn export_then_import_round_trips() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["write", "--title", "keepsake", "--body", "remember this"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["export", "--output", "backup.json"])
        .assert()
        .success();
    tmp.child("backup.json")
        .assert(predicate::str::contains("\"iv\""))
        .assert(predicate::str::contains("keepsake").not());

    in_project(&tmp, "pw")
        .args(["delete", "1", "--force"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["import", "backup.json"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remember this"));
}

#[test]
fn export_refuses_database_file_with_any_name() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".journal.toml")
        .write_str("kdf_iterations = 1000\ndatabase_file = \"journal.sqlite\"\n")
        .unwrap();

    in_project(&tmp, "pw")
        .args(["write", "--title", "keep me", "--body", "x"])
        .assert()
        .success();

    in_project(&tmp, "pw")
        .args(["export", "--output", ".journal/journal.sqlite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing"));

    in_project(&tmp, "pw")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me"));
}

#[test]
fn export_refuses_state_file() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["write", "--title", "keep me", "--body", "x"])
        .assert()
        .success();
    let salt_before = std::fs::read_to_string(tmp.child(".journal/state.json").path()).unwrap();

    for dest in [
        ".journal/state.json",
        "./.journal/../.journal/state.json",
    ] {
        in_project(&tmp, "pw")
            .args(["export", "--output", dest])
            .assert()
            .failure()
            .stderr(predicate::str::contains("refusing"));
    }

    let salt_after = std::fs::read_to_string(tmp.child(".journal/state.json").path()).unwrap();
    assert_eq!(salt_before, salt_after);

    in_project(&tmp, "pw")
        .args(["show", "1"])
        .assert()
        .success();
}

#[test]
fn import_reports_skipped_elements_even_when_nothing_imported() {
    let tmp = project();
    tmp.child("partial.json")
        .write_str(r#"[{"data": "YQ=="}, {"iv": "Yg=="}]"#)
        .unwrap();

    in_project(&tmp, "pw")
        .args(["import", "partial.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped 2 elements"))
        .stderr(predicate::str::contains("No records found"));
}

#[test]
fn import_rejects_non_array() {
    let tmp = project();
    tmp.child("bad.json").write_str("{\"not\": \"an array\"}").unwrap();

    in_project(&tmp, "pw")
        .args(["import", "bad.json"])
        .assert()
        .failure();
}

#[test]
fn clear_with_force_starts_over() {
    let tmp = project();

    in_project(&tmp, "first-password")
        .args(["write", "--title", "old", "--body", "gone soon"])
        .assert()
        .success();

    in_project(&tmp, "first-password")
        .args(["clear", "--force"])
        .assert()
        .success();

    // Any password opens a cleared journal.
    in_project(&tmp, "a-new-password")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("old").not());
}

#[test]
fn custom_data_dir_flag() {
    let tmp = project();

    in_project(&tmp, "pw")
        .args(["--data-dir", "elsewhere", "write", "--title", "t", "--body", "b"])
        .assert()
        .success();

    tmp.child("elsewhere/journal.db")
        .assert(predicate::path::exists());
    tmp.child(".journal").assert(predicate::path::missing());
}

#[test]
fn demo_runs_without_touching_disk() {
    let tmp = TempDir::new().unwrap();

    cryptjournal()
        .current_dir(tmp.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the demo!"));

    tmp.child(".journal").assert(predicate::path::missing());
}
