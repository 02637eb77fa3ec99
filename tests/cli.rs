use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("vacprobe").expect("binary under test")
}

fn run_help(args: &[&str]) {
    cmd().args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    run_help(&[]);
    run_help(&["run"]);
    run_help(&["list"]);
    run_help(&["query"]);
    run_help(&["check"]);
}

#[test]
fn list_works_without_reaching_the_network() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("good-query"))
        .stdout(contains("exact_match"));
}
