//! Common test utilities for wait-for integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound for a wait that is expected to finish
pub const FINISH_WITHIN: Duration = Duration::from_secs(5);

pub fn wait_for_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wait-for"));
    cmd.env_remove("WAIT_FOR_STRATEGY")
        .env_remove("WAIT_FOR_INTERVAL_MS")
        .env_remove("WAIT_FOR_POLICY")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

pub fn spawn(args: &[&str], file: &Path) -> Child {
    wait_for_cmd()
        .args(args)
        .arg(file)
        .spawn()
        .expect("Failed to start wait-for")
}

/// Poll the child until it exits or `limit` elapses.
pub fn exit_within(child: &mut Child, limit: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + limit;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().expect("try_wait failed") {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(10));
    }
    None
}

pub fn write_with_mode(path: &Path, mode: u32) {
    fs::write(path, "ready").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

pub fn chmod(path: &Path, mode: u32) {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

pub fn stdout_of(child: Child) -> String {
    let output = child.wait_with_output().expect("Failed to get output");
    String::from_utf8_lossy(&output.stdout).into_owned()
}
