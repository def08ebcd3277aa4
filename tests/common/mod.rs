//! Common test utilities for shipmate CLI tests.
//!
//! Tests run the real binary against a catalog written into an isolated
//! temp directory. CI and terminal environment variables are stripped so
//! results do not depend on where the suite runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// The catalog most tests run against: two domains, `demo` excluded from
/// `all` by default.
pub const SAMPLE_CATALOG: &str = r#"version = 1

[settings]
default_excluded_domain = "demo"

[[apps]]
domain = "demo"
name = "hello_python"

[[apps]]
domain = "demo"
name = "hello_go"

[[apps]]
domain = "manman"
name = "worker"

[[apps]]
domain = "manman"
name = "migration"
"#;

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_shipmate")
}

pub fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("shipmate.toml");
    std::fs::write(&path, content).unwrap();
    path
}

pub fn shipmate(cwd: &Path, args: &[&str]) -> Output {
    shipmate_with_env(cwd, args, &[])
}

pub fn shipmate_with_env(cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(bin());
    cmd.current_dir(cwd)
        .args(args)
        .env_remove("SHIPMATE_CATALOG")
        .env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("CI")
        .env_remove("TERM")
        .env_remove("NO_COLOR");

    for (key, value) in env {
        cmd.env(key, value);
    }

    cmd.output().expect("failed to execute shipmate")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
