use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer_on_short_motions() {
    let mut cmd = Command::cargo_bin("day9_part2").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("visited 1 grid cell(s)"));
}

#[test]
fn part2_output_right_answer_on_long_motions() {
    let mut cmd = Command::cargo_bin("day9_part2").unwrap();
    cmd.arg("inputs2.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("visited 36 grid cell(s)"));
}
