//! End-to-end tests for the `fit` binary.
//!
//! Runs the compiled binary the way the pipeline would: one package per
//! invocation, plus the built-in demo loop.

use std::process::Command;

fn fit_binary() -> String {
    env!("CARGO_BIN_EXE_fit").to_string()
}

#[test]
fn test_compute_formats_single_package() {
    let output = Command::new(fit_binary())
        .args(["compute", "--workout", "RUN", "--data", "15000", "1", "75"])
        .output()
        .expect("failed to run fit compute");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
         Mean speed: 9.750 km/h; Calories burnt: 699.750 kcal."
    );
}

#[test]
fn test_demo_prints_all_sample_packages() {
    let output = Command::new(fit_binary())
        .arg("demo")
        .output()
        .expect("failed to run fit demo");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3, "one report line per sample package");
    assert!(lines[0].starts_with("Training type: Swimming;"));
    assert!(lines[1].starts_with("Training type: Running;"));
    assert!(lines[2].starts_with("Training type: SportsWalking;"));
}

#[test]
fn test_compute_json_output() {
    let output = Command::new(fit_binary())
        .args([
            "compute", "--workout", "SWM", "--data", "720", "1", "80", "25", "40", "--json",
        ])
        .output()
        .expect("failed to run fit compute --json");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report");
    assert_eq!(report["workout_type"], "Swimming");
    assert_eq!(report["calories_kcal"], 336.0);
}

#[test]
fn test_unknown_workout_tag_fails() {
    let output = Command::new(fit_binary())
        .args(["compute", "--workout", "XYZ", "--data", "1", "1", "1"])
        .output()
        .expect("failed to run fit compute");

    assert!(!output.status.success(), "unknown tag must not succeed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown workout type: XYZ"));
    assert!(output.stdout.is_empty(), "no partial report on failure");
}

#[test]
fn test_wrong_arity_fails() {
    let output = Command::new(fit_binary())
        .args(["compute", "--workout", "WLK", "--data", "9000", "1", "75"])
        .output()
        .expect("failed to run fit compute");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expects 4 parameters, got 3"));
}
