//! CLI end-to-end tests

mod common;

use common::{cubeprob, input_file};
use predicates::prelude::*;

const UNIT_CUBE: &str = "-1,1,-1,1,-1,1";

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn no_arguments_prints_usage_and_exits_one() {
    cubeprob()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_limits_flag_exits_one() {
    let file = input_file("0 1 0 1 0 1\n");
    cubeprob()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn wrong_limit_count_exits_one_with_no_output() {
    cubeprob()
        .args(["-l", "0,1,0"])
        .write_stdin("0 1 0 1 0 1\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("six"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn non_numeric_limit_exits_one() {
    cubeprob()
        .args(["-l", "0,1,0,up,0,1"])
        .write_stdin("0 1 0 1 0 1\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn inverted_cube_bounds_are_rejected() {
    cubeprob()
        .args(["-l", "1,-1,-1,1,-1,1"])
        .write_stdin("0 1 0 1 0 1\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("inverted"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_displays() {
    cubeprob()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Containment probabilities"));
}

// ============================================================================
// Computation
// ============================================================================

#[test]
fn computes_probability_from_stdin() {
    let output = cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0 1 0 1 0 1\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let data = stdout.lines().find(|l| !l.starts_with('#')).unwrap();
    let p: f64 = data.split_whitespace().last().unwrap().parse().unwrap();
    // (Φ(1) − Φ(−1))³ ≈ 0.3183
    assert!((p - 0.3182).abs() < 1e-3, "p = {p}");
}

#[test]
fn reads_from_a_file_argument() {
    let file = input_file("0 1 0 1 0 1\n");
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "#col0 col1 col2 col3 col4 col5 p\n",
        ));
}

#[test]
fn header_comment_names_are_carried_to_output() {
    cubeprob()
        .args(["-l", "0,2,1,3,2,4"])
        .write_stdin("# lon e_lon lat e_lat dep e_dep mag\n1 0.5 2 0.5 3 0.5 4.2\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "#lon e_lon lat e_lat dep e_dep mag p\n",
        ));
}

#[test]
fn passthrough_fields_keep_order_and_position() {
    let output = cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0 1 0 1 0 1 alpha 7\n1 1 1 1 1 1 beta 8\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let data: Vec<&str> = stdout.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(data.len(), 2);

    let first: Vec<&str> = data[0].split(' ').collect();
    assert_eq!(&first[6..8], ["alpha", "7"]);
    let second: Vec<&str> = data[1].split(' ').collect();
    assert_eq!(&second[6..8], ["beta", "8"]);
}

#[test]
fn comma_delimited_input_is_accepted() {
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0,1,0,1,0,1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 1 0 1 0 1"));
}

#[test]
fn zero_sigma_is_clamped_not_fatal() {
    let output = cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0 0 0 1 0 1\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let data = stdout.lines().find(|l| !l.starts_with('#')).unwrap();
    let p: f64 = data.split_whitespace().last().unwrap().parse().unwrap();
    assert!(p.is_finite());
    assert!((0.0..=1.0).contains(&p));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn non_numeric_row_aborts_the_whole_run() {
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0 1 0 1 0 1\nbad 1 0 1 0 1\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a number"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn too_few_columns_aborts() {
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0 1 0\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("six"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn empty_input_aborts() {
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no data rows"));
}

#[test]
fn missing_file_aborts() {
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// Verbosity
// ============================================================================

#[test]
fn verbose_reports_input_source() {
    let file = input_file("0 1 0 1 0 1\n");
    cubeprob()
        .args(["-l", UNIT_CUBE, "-v"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Working on input:"));
}

#[test]
fn verbose_reports_clamp_events_with_row_and_axis() {
    cubeprob()
        .args(["-l", UNIT_CUBE, "-v"])
        .write_stdin("0 1 0 0 0 1\n")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("row 0")
                .and(predicate::str::contains("y uncertainty below")),
        );
}

#[test]
fn quiet_run_keeps_stderr_empty() {
    cubeprob()
        .args(["-l", UNIT_CUBE])
        .write_stdin("0 1 0 0 0 1\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn double_verbose_reports_cube_and_summary() {
    cubeprob()
        .args(["-l", UNIT_CUBE, "-vv"])
        .write_stdin("0 1 0 1 0 1\n")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Cube:")
                .and(predicate::str::contains("Processed 1 observations")),
        );
}

// ============================================================================
// Epsilon policy
// ============================================================================

#[test]
fn custom_epsilon_changes_the_clamp_threshold() {
    // sigma 0.005 is healthy under the default floor but clamped under 0.01
    cubeprob()
        .args(["-l", UNIT_CUBE, "--epsilon", "0.01", "-v"])
        .write_stdin("0 0.005 0 1 0 1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("x uncertainty below 0.01"));
}
