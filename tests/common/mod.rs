//! Shared fixtures for cargo-bump integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a workspace with a versioned root manifest and two member crates.
#[allow(unused)]
pub fn create_test_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();

    let workspace_toml = r#"[workspace]
members = ["crate-a", "crates/crate-b"]
resolver = "2"

[package]
name = "root"
version = "1.0.0"
edition = "2021"
"#;
    fs::write(temp.path().join("Cargo.toml"), workspace_toml).unwrap();

    write_crate(temp.path(), "crate-a", "");
    write_crate(
        temp.path(),
        "crates/crate-b",
        "\n[dependencies]\ncrate-a = { path = \"../../crate-a\" }\n",
    );

    temp
}

/// Writes a member crate manifest at `rel` with `extra` appended.
#[allow(unused)]
pub fn write_crate(root: &Path, rel: &str, extra: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(dir.join("src")).unwrap();
    let name = rel.rsplit('/').next().unwrap();
    fs::write(
        dir.join("Cargo.toml"),
        format!(
            "[package]\nname = \"{}\"\nversion = \"1.0.0\"\nedition = \"2021\"\n{}",
            name, extra
        ),
    )
    .unwrap();
    fs::write(dir.join("src/lib.rs"), "pub const VERSION: &str = \"1.0.0\";\n").unwrap();
}

/// Runs `cargo-bump` in `root`, feeding `input` on stdin.
pub fn run_bump(root: &Path, input: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("cargo-bump");
    cmd.current_dir(root)
        .env("NO_COLOR", "1")
        .write_stdin(input.to_string());

    cmd.assert()
}
