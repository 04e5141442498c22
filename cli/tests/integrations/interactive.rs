use assert_cmd::Command;

#[test]
fn test_interactive_flag_documented() {
    // Interactive mode needs a terminal, so only check the flag is offered
    let mut cmd = Command::cargo_bin("galaxy").unwrap();
    cmd.arg("run").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("--interactive"));
}
