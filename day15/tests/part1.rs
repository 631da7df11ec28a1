use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day15_part1").unwrap();
    cmd.arg("inputs.txt").arg("10");

    cmd.assert()
        .success()
        .stdout(str::contains("26 position(s)"));
}
