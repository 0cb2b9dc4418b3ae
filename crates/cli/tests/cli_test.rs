//! Process-level tests for the `sabnotify` binary.

use std::process::Command;

fn sabnotify() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sabnotify"));
    cmd.env_remove("SABNOTIFY_CREDS")
        .env_remove("SABNOTIFY_LOG")
        .env_remove("SABNOTIFY_TIMEOUT");
    cmd
}

#[test]
fn missing_credentials_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let creds = dir.path().join("creds.json");
    let log = dir.path().join("notify.log");

    let output = sabnotify()
        .arg("--creds")
        .arg(&creds)
        .arg("--log-file")
        .arg(&log)
        .args(["complete", "SABnzbd", "Download finished: Ubuntu.iso"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot find"));
    assert!(stderr.contains("creds.json"));
    assert!(!log.exists());
}

#[test]
fn unsupported_service_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let creds = dir.path().join("creds.json");
    let log = dir.path().join("notify.log");
    std::fs::write(&creds, r#"{"telegram": {"bot_token": "t"}}"#).unwrap();

    let output = sabnotify()
        .arg("--creds")
        .arg(&creds)
        .arg("--log-file")
        .arg(&log)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("telegram"));
}

#[test]
fn ignored_message_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let creds = dir.path().join("creds.json");
    let log = dir.path().join("notify.log");
    // Unroutable endpoint: the test fails if a request is attempted and logged.
    std::fs::write(
        &creds,
        r#"{"discord": {"webhook_url": "http://127.0.0.1:1/discord"}}"#,
    )
    .unwrap();

    let status = sabnotify()
        .arg("--creds")
        .arg(&creds)
        .arg("--log-file")
        .arg(&log)
        .args(["pp", "SABnzbd", "cannot read watched directory"])
        .status()
        .unwrap();

    assert!(status.success());
    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("notification suppressed"));
    assert!(!content.contains("discord"));
}
