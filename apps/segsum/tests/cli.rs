use assert_cmd::Command;
use predicates::prelude::*;

fn segsum() -> Command {
    Command::cargo_bin("segsum").unwrap()
}

#[test]
fn show_prints_root_and_total_for_default_values() {
    segsum()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("node   1  [ 0, 11]  sum = 57"))
        .stdout(predicate::str::contains("total: 57"))
        .stdout(predicate::str::contains("storage: [0, 57,"));
}

#[test]
fn show_prints_leaves() {
    segsum()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("leaf"));
}

#[test]
fn sum_reports_range() {
    segsum()
        .args(["sum", "--left", "2", "--right", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum[2, 5] = 24"));
}

#[test]
fn sum_accepts_custom_values() {
    segsum()
        .args(["sum", "--values", "1,2,3,4,5", "--left", "0", "--right", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum[0, 4] = 15"));
}

#[test]
fn update_reports_before_and_after() {
    segsum()
        .args([
            "update", "--index", "4", "--diff", "10", "--left", "2", "--right", "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("before: total = 57"))
        .stdout(predicate::str::contains("before: sum[2, 5] = 24"))
        .stdout(predicate::str::contains("after:  total = 67"))
        .stdout(predicate::str::contains("after:  sum[2, 5] = 34"));
}

#[test]
fn update_accepts_negative_diff() {
    segsum()
        .args(["update", "--index", "0", "--diff", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("after:  total = 54"));
}

#[test]
fn rejects_non_numeric_values() {
    segsum()
        .args(["show", "--values", "3,x,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rejects_empty_values() {
    segsum()
        .args(["sum", "--values", "", "--left", "0", "--right", "0"])
        .assert()
        .failure();
}
