#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use clitodo::todo::Todo;
use tempfile::TempDir;

/// Isolated config directory and database for one test
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    /// Environment with `clitodo init` already run against `db_path()`
    pub fn initialized() -> Self {
        let env = Self::new();
        env.cmd()
            .arg("init")
            .arg("--db-path")
            .arg(env.db_path())
            .assert()
            .success();
        env
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.toml")
    }

    pub fn home_dir(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("todo.json")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("clitodo").expect("binary");
        cmd.env("CLITODO_CONFIG_DIR", self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn write_db(&self, contents: &str) {
        fs::write(self.db_path(), contents).expect("write db");
    }

    pub fn read_db(&self) -> String {
        fs::read_to_string(self.db_path()).expect("read db")
    }

    pub fn read_todos(&self) -> Vec<Todo> {
        serde_json::from_str(&self.read_db()).expect("parse db")
    }

    pub fn add(&self, words: &[&str]) {
        self.cmd().arg("add").args(words).assert().success();
    }
}
