//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studydesk() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("studydesk").unwrap()
}

/// Command running inside `dir` with no ambient config.
fn studydesk_in(dir: &Path) -> Command {
    let mut cmd = studydesk();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("STUDYDESK_DATA_DIR");
    cmd
}

/// Blank every cell outside the input columns, last row included.
const ALL_BLANKS_CONFIG: &str = r#"
blank_probability = 1.0
excluded_columns = [0, 1]
skip_final_row = false
"#;

const AND_TABLE: &str = "a,b,a AND b\nT,T,T\nT,F,F\n";

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn help_output() {
    studydesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Truth-table quizzes"));
}

#[test]
fn version_output() {
    studydesk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studydesk"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created studydesk.toml"))
        .stdout(predicate::str::contains("and_or.csv"));

    assert!(dir.path().join("studydesk.toml").exists());
    assert!(dir.path().join("tables/easy/and_or.csv").exists());
    assert!(dir.path().join("tables/normal/implication.csv").exists());
    assert!(dir.path().join("tables/hard/biconditional_xor.csv").exists());
    assert!(dir.path().join("sets/logic.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("studydesk.toml"), "# mine\n").unwrap();

    studydesk_in(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));

    let content = std::fs::read_to_string(dir.path().join("studydesk.toml")).unwrap();
    assert_eq!(content, "# mine\n");
}

#[test]
fn init_output_is_usable() {
    let dir = TempDir::new().unwrap();
    studydesk_in(dir.path()).arg("init").assert().success();

    studydesk_in(dir.path())
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("and_or.csv"))
        .stdout(predicate::str::contains("implication.csv"));

    studydesk_in(dir.path())
        .arg("sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("logic (3 cards)"));
}

#[test]
fn tables_empty_state() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args(["tables", "--difficulty", "hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tables available"));
}

#[test]
fn play_without_tables_reports_and_exits() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args(["play", "--difficulty", "easy", "--player", "Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tables available for EASY level"));
}

#[test]
fn play_all_correct_saves_score() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "studydesk.toml", ALL_BLANKS_CONFIG);
    write(dir.path(), "tables/easy/and.csv", AND_TABLE);

    studydesk_in(dir.path())
        .args(["play", "--difficulty", "easy", "--player", "Ada", "--seed", "7"])
        .write_stdin("t\n f \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations! All answers are correct."))
        .stdout(predicate::str::contains("Score: 2/2"))
        .stdout(predicate::str::contains("Saved score for Ada."));

    let history = dir.path().join("games_history/easy");
    let files: Vec<_> = std::fs::read_dir(&history)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("EASY_Ada_"));
    let content = std::fs::read_to_string(history.join(&files[0])).unwrap();
    assert!(content.starts_with("Player,Score,Time\nAda,2,"));

    studydesk_in(dir.path())
        .args(["leaderboard", "--difficulty", "easy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn play_wrong_answers_and_name_prompt() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "studydesk.toml", ALL_BLANKS_CONFIG);
    write(dir.path(), "tables/normal/and.csv", AND_TABLE);

    // Wrong first answer, submit early, blank name rejected, then a real one.
    studydesk_in(dir.path())
        .args(["play", "--difficulty", "normal"])
        .write_stdin("F\n:submit\n   \nGrace\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Oops! Some answers are incorrect."))
        .stdout(predicate::str::contains("Score: 0/2"))
        .stdout(predicate::str::contains("Saved score for Grace."));
}

#[test]
fn play_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "studydesk.toml", ALL_BLANKS_CONFIG);
    write(dir.path(), "and.csv", AND_TABLE);

    studydesk_in(dir.path())
        .args([
            "play",
            "--difficulty",
            "hard",
            "--table",
            "and.csv",
            "--player",
            "Ada",
            "--dry-run",
        ])
        .write_stdin("T\nF\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("HARD LEADERBOARD"))
        .stdout(predicate::str::contains("Ada"));

    assert!(!dir.path().join("games_history").exists());
}

#[test]
fn play_rejects_ragged_table() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.csv", "a,b,c\nT,F\n");

    studydesk_in(dir.path())
        .args(["play", "--difficulty", "easy", "--table", "bad.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid table"));
}

#[test]
fn leaderboard_orders_by_score_then_time() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "games_history/easy/EASY_A_00-50.csv",
        "Player,Score,Time\nA,5,00:50\n",
    );
    write(
        dir.path(),
        "games_history/easy/EASY_B_00-40.csv",
        "Player,Score,Time\nB,5,00:40\n",
    );
    write(
        dir.path(),
        "games_history/easy/EASY_C_00-10.csv",
        "Player,Score,Time\nC,3,00:10\n",
    );

    let output = studydesk_in(dir.path())
        .args(["leaderboard", "--difficulty", "easy", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let boards: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let players: Vec<&str> = boards[0]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["Player"].as_str().unwrap())
        .collect();
    assert_eq!(players, vec!["B", "A", "C"]);
}

#[test]
fn leaderboard_empty_and_markdown() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .arg("leaderboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No games played yet."));

    studydesk_in(dir.path())
        .args(["leaderboard", "--difficulty", "hard", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### HARD LEVEL"));
}

#[test]
fn leaderboard_unknown_format() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args(["leaderboard", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn flashcard_lifecycle() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args([
            "create-set",
            "--name",
            "basics",
            "--card",
            "capital of France=Paris",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created set 'basics' with 1 cards"));

    studydesk_in(dir.path())
        .args(["create-set", "--name", "basics", "--card", "2+2=4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated set 'basics'"));

    studydesk_in(dir.path())
        .arg("sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("basics (2 cards)"));

    studydesk_in(dir.path())
        .args(["review", "--set", "basics", "--no-shuffle"])
        .write_stdin(" paris \n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Incorrect! The correct answer was: 4"))
        .stdout(predicate::str::contains("Score: 1/2"))
        .stdout(predicate::str::contains("Progress saved to"));

    let saved: Vec<_> = std::fs::read_dir(dir.path().join("history"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("BASICS_session_"));

    studydesk_in(dir.path())
        .args(["history", "--set", "basics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("basics"))
        .stdout(predicate::str::contains("1/2"));

    studydesk_in(dir.path())
        .args(["delete-set", "--name", "basics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted set 'basics'"));

    studydesk_in(dir.path())
        .args(["delete-set", "--name", "basics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No set named 'basics'"));
}

#[test]
fn create_set_appends_when_name_needs_sanitizing() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args(["create-set", "--name", "a/b", "--card", "q1=a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created set 'a/b' with 1 cards"));

    studydesk_in(dir.path())
        .args(["create-set", "--name", "a/b", "--card", "q2=a2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated set 'a/b' (+1 cards, 2 total)"));

    studydesk_in(dir.path())
        .arg("sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("a_b (2 cards)"));
}

#[test]
fn review_stopped_early_saves_nothing() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "sets/pair.json",
        r#"[{"question":"one","answer":"1"},{"question":"two","answer":"2"}]"#,
    );

    studydesk_in(dir.path())
        .args(["review", "--set", "pair", "--seed", "3"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("progress not saved"));

    assert!(!dir.path().join("history").exists());
}

#[test]
fn create_set_rejects_malformed_card() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args(["create-set", "--name", "x", "--card", "no separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question=answer"));
}

#[test]
fn nonexistent_config_fails() {
    let dir = TempDir::new().unwrap();

    studydesk_in(dir.path())
        .args(["tables", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_probability_in_config_fails() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "studydesk.toml", "blank_probability = 1.5\n");

    studydesk_in(dir.path())
        .arg("tables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid blanking settings"));
}
