use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mathsyn"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mathsyn")
}

#[test]
fn one_shot_prints_result() {
    let output = run(&["2", "+", "3*4"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Result: 14");
}

#[test]
fn one_shot_reports_errors_with_failure_status() {
    let output = run(&["5/0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr).trim(),
        "Error: division by zero"
    );
}

#[test]
fn depth_limit_is_read_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_mathsyn"))
        .arg("((1))")
        .env("MATHSYN_MAX_DEPTH", "1")
        .output()
        .expect("failed to run mathsyn");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nested deeper than 1 levels"));
}
