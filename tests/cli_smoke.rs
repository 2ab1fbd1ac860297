use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn clitodo_help_works() {
    Command::cargo_bin("clitodo")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("to-do list"));
}

#[test]
fn clitodo_version_works() {
    let expected = format!("clitodo v{}\n", env!("CARGO_PKG_VERSION"));

    for flag in ["--version", "-v"] {
        Command::cargo_bin("clitodo")
            .expect("binary")
            .arg(flag)
            .assert()
            .success()
            .stdout(expected.clone());
    }
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["init", "add", "list", "complete", "remove", "clear"];

    for cmd in subcommands {
        Command::cargo_bin("clitodo")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
