use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NOTES: &str = r#"
glob is I
prok is V
pish is X
tegj is L
glob glob Silver is 34 Credits
glob prok Gold is 57800 Credits
pish pish Iron is 3910 Credits
how much is pish tegj glob glob ?
how many Credits is glob prok Silver ?
how many Credits is glob prok Gold ?
how many Credits is glob prok Iron ?
how much wood could a woodchuck chuck if a woodchuck could chuck wood ?
"#;

fn write_notes(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("notes.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_run_file() {
    let temp_dir = TempDir::new().unwrap();
    let notes = write_notes(&temp_dir, NOTES);

    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run").arg(&notes);

    cmd.assert().success().stdout(
        "pish tegj glob glob is 42\n\
         glob prok Silver is 68 Credits\n\
         glob prok Gold is 57800 Credits\n\
         glob prok Iron is 782 Credits\n\
         I have no idea what you are talking about\n",
    );
}

#[test]
fn test_cli_run_stdin() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run")
        .write_stdin("glob is I\n\n   how much is glob glob ?   \n");

    cmd.assert().success().stdout("glob glob is 2\n");
}

#[test]
fn test_cli_run_json() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run")
        .arg("--json")
        .write_stdin("glob is I\nhow much is glob ?\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"answer\": \"glob is 1\""))
        .stdout(predicate::str::contains("\"template\": \"how_much\""));
}

#[test]
fn test_cli_run_extra_metal() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run")
        .arg("--metal")
        .arg("Platinum")
        .write_stdin("glob is I\nglob glob Platinum is 50 Credits\nhow many Credits is glob Platinum ?\n");

    cmd.assert()
        .success()
        .stdout("glob Platinum is 25 Credits\n");
}

#[test]
fn test_cli_run_bad_declaration_reports_file_line() {
    let temp_dir = TempDir::new().unwrap();
    let notes = write_notes(&temp_dir, "glob is I\n\nglob Gold is lots Credits\n");

    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run").arg(&notes);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'lots' is not a whole number of credits"))
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_cli_run_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run").arg(temp_dir.path().join("missing.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_cli_run_line_limit() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run")
        .arg("--max-lines")
        .arg("1")
        .write_stdin("glob is I\nhow much is glob ?\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_lines"));
}

#[test]
fn test_cli_run_long_line_names_source_line() {
    let temp_dir = TempDir::new().unwrap();
    let notes = write_notes(&temp_dir, "glob is I\n\n\nhow much is glob glob glob ?\n");

    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run").arg("--max-line-bytes").arg("16").arg(&notes);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 4"))
        .stderr(predicate::str::contains("max_line_bytes"));
}

#[test]
fn test_cli_show_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let notes = write_notes(&temp_dir, NOTES);

    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("show").arg(&notes);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("symbols (4)"))
        .stdout(predicate::str::contains("tegj"))
        .stdout(predicate::str::contains("metals (3)"))
        .stdout(predicate::str::contains("14450"))
        .stdout(predicate::str::contains("195.5"));
}

#[test]
fn test_cli_convert() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("convert").arg("1994");
    cmd.assert().success().stdout("MCMXCIV\n");

    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("convert").arg("mcmxciv");
    cmd.assert().success().stdout("1994\n");
}

#[test]
fn test_cli_convert_out_of_range() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("convert").arg("3999");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_cli_convert_invalid_numeral() {
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("convert").arg("IIII");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid roman numeral"));
}
