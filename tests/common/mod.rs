#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Workspace with two JavaScript projects and one plain directory:
///
/// - `projA/node_modules`: 10 files, 100 bytes total
/// - `projB/node_modules`: empty
/// - `projC`: no dependencies
pub fn setup_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();

    for i in 0..10 {
        temp.child(format!("projA/node_modules/pkg/file{i}.js"))
            .write_binary(&[b'a'; 10])
            .unwrap();
    }
    temp.child("projA/package.json")
        .write_str("{\"name\": \"a\"}")
        .unwrap();
    temp.child("projA/src/index.js")
        .write_str("require('pkg');")
        .unwrap();

    temp.child("projB/node_modules").create_dir_all().unwrap();
    temp.child("projB/package.json")
        .write_str("{\"name\": \"b\"}")
        .unwrap();

    temp.child("projC/README.md").write_str("# c").unwrap();

    temp
}

/// Run the modprune binary in `dir`, feeding `stdin` to the prompt.
pub fn run_modprune(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_modprune"))
        .args(args)
        .current_dir(dir)
        .env_remove("MODPRUNE_MAX_DEPTH")
        .env_remove("MODPRUNE_DISPLAY_LIMIT")
        .env_remove("MODPRUNE_SIZE_MODE")
        .env_remove("MODPRUNE_DRY_RUN")
        .env_remove("MODPRUNE_VERBOSE")
        .env_remove("MODPRUNE_QUIET")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start modprune");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        // The process may exit before reading; a broken pipe is fine then
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("modprune did not finish")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
