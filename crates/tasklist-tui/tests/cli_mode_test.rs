/*
[INPUT]:  tasklist-tui binary with --dry-run
[OUTPUT]: Verification of config loading and validation at startup
[POS]:    Integration test layer - binary entry point
[UPDATE]: When changing CLI flags or config validation
*/

use std::io::Write;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tasklist-tui"))
}

#[test]
fn dry_run_with_bundled_config_succeeds() {
    let config_path = format!("{}/config/tasklist.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = binary()
        .arg("--config")
        .arg(config_path)
        .arg("--dry-run")
        .output()
        .expect("Failed to start tasklist-tui binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration validated"), "stderr: {stderr}");
}

#[test]
fn dry_run_rejects_zero_tick_rate() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"ui:\n  tick_rate_ms: 0\n")
        .expect("write config");

    let output = binary()
        .arg("--config")
        .arg(file.path())
        .arg("--dry-run")
        .output()
        .expect("Failed to start tasklist-tui binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"), "stderr: {stderr}");
}

#[test]
fn dry_run_rejects_invalid_log_level() {
    let config_path = format!("{}/config/tasklist.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = binary()
        .arg("--config")
        .arg(config_path)
        .arg("--log-level")
        .arg("tasklist=notalevel")
        .arg("--dry-run")
        .output()
        .expect("Failed to start tasklist-tui binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid log level"), "stderr: {stderr}");
}
