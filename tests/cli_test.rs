use anyhow::Result;
use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn small_calc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_small-calc"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_add_prints_sum() {
    let output = small_calc().args(["add", "5", "3"]).assert().success();
    assert_eq!(stdout_of(output.get_output()).trim(), "8");
}

#[test]
fn test_divide_json_output() -> Result<()> {
    let output = small_calc()
        .args(["divide", "10", "2", "--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(stdout_of(output.get_output()).trim())?;
    assert_eq!(json["operation"]["op"], "divide");
    assert_eq!(json["result"], 5.0);
    Ok(())
}

#[test]
fn test_divide_by_zero_exits_with_invalid_argument_code() {
    let output = small_calc().args(["divide", "10", "0"]).assert().code(2);
    let stderr = String::from_utf8_lossy(&output.get_output().stderr).to_string();
    assert!(stderr.contains("Cannot divide by zero"));
}

#[test]
fn test_negative_radius_is_accepted_as_operand() {
    let output = small_calc().args(["circle-area", "-5"]).assert().code(2);
    let stderr = String::from_utf8_lossy(&output.get_output().stderr).to_string();
    assert!(stderr.contains("Radius cannot be negative"));
}

#[test]
fn test_builtin_check_succeeds() {
    let output = small_calc().arg("check").assert().success();
    assert!(stdout_of(output.get_output()).contains("builtin: 14 passed, 0 failed"));
}

#[test]
fn test_check_dry_run_lists_cases() {
    let output = small_calc().args(["check", "--dry-run"]).assert().success();
    assert!(stdout_of(output.get_output()).contains("divide by zero: divide(10, 0)"));
}

#[test]
fn test_failing_check_file_exits_non_zero() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[suite]
name = "broken"

[[cases]]
name = "wrong"
operation = { op = "add", a = 1, b = 1 }
expect = 3
"#,
    )?;

    let output = small_calc()
        .args(["check", "--config"])
        .arg(file.path())
        .assert()
        .code(1);
    assert!(stdout_of(output.get_output()).contains("broken: 0 passed, 1 failed"));
    Ok(())
}

#[test]
fn test_missing_check_file_is_reported() {
    let output = small_calc()
        .args(["check", "--config", "/nonexistent/cases.toml"])
        .assert()
        .code(3);
    let stderr = String::from_utf8_lossy(&output.get_output().stderr).to_string();
    assert!(stderr.contains("Failed to load check file '/nonexistent/cases.toml'"));
    assert!(stderr.contains("IO error"));
}
