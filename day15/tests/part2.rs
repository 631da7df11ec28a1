use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day15_part2").unwrap();
    cmd.arg("inputs.txt").arg("20");

    cmd.assert().success().stdout(str::contains("56000011"));
}
