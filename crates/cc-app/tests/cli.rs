use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(storage: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cc-counter").unwrap();
    cmd.arg("--storage").arg(storage);
    cmd
}

#[test]
fn plays_a_round_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("session.json");

    cmd(&storage)
        .write_stdin("new\nAlpha\nBeta\nround\nt 5\nd 3\nq h\nnext\ndone\nok\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha: -130"))
        .stdout(predicate::str::contains("Beta: -370"))
        .stdout(predicate::str::contains("expected -500 / actual -500"));

    assert!(storage.exists());
}

#[test]
fn continue_restores_the_saved_game() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("session.json");

    cmd(&storage)
        .write_stdin("new\nAlpha\nBeta\nround\nt 1\nnext\ndone\nok\nquit\n")
        .assert()
        .success();

    cmd(&storage)
        .write_stdin("continue\nhistory\nback\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha -15 | Beta -485 | round 1"))
        .stdout(predicate::str::contains("(expected -500)"));
}

#[test]
fn corrupt_save_falls_back_to_a_fresh_game() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("session.json");
    std::fs::write(&storage, "{definitely not json").unwrap();

    cmd(&storage)
        .write_stdin("continue\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("round 0"));
}
