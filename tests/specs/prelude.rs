//! Shared helpers for the behavior tests

#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const SECRET: &str = "shared-secret";

/// An isolated data directory and config location
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// No config file, no saved events
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    /// `rota` logged in with the shared secret
    pub fn rota(&self) -> CliBuilder {
        self.anonymous()
            .env("ROTA_SECRET", SECRET)
            .env("ROTA_PASSWORD", SECRET)
    }

    /// `rota` with no secret and no password
    pub fn anonymous(&self) -> CliBuilder {
        CliBuilder {
            cmd: {
                let mut cmd = Command::cargo_bin("rota").unwrap();
                cmd.env_remove("ROTA_SECRET")
                    .env_remove("ROTA_PASSWORD")
                    .env("ROTA_DATA_DIR", self.dir.path().join("data"))
                    .env("ROTA_CONFIG", self.dir.path().join("rota.toml"))
                    .env("RUST_LOG", "off");
                cmd
            },
        }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    fn run(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        RunAssert {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Run and require exit code 0
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert_eq!(
            run.code,
            Some(0),
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert_ne!(
            run.code,
            Some(0),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout does not contain {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly contains {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr does not contain {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }
}
