// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for CLI specs.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// `tapeq` with a clean environment and no workspace.
pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_tapeq"));
    cmd.env_remove("TAPEQ_LOG")
        .env_remove("TAPEQ_CONTROL_DIR")
        .env_remove("TAPEQ_WORKSPACE_PARENT")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args<S: AsRef<OsStr>>(mut self, args: &[S]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and require exit code 0.
    pub fn passes(self) -> RunAssert {
        self.code(0)
    }

    /// Run and require a non-zero exit code.
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }

    /// Run and require a specific exit code.
    pub fn code(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert_eq!(run.output.status.code(), Some(code), "unexpected exit code\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}\n{}", self.describe());
        self
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status,
            self.stdout(),
            self.stderr()
        )
    }
}

/// A group workspace under a throwaway workspace tree.
pub struct Workspace {
    tree: TempDir,
    root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let tree = tempfile::tempdir().unwrap();
        let root = tree.path().join("gws1");
        std::fs::create_dir(&root).unwrap();
        Self { tree, root }
    }

    /// Another workspace in the same tree.
    pub fn sibling(&self, name: &str) -> PathBuf {
        let path = self.tree.path().join(name);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn control(&self) -> PathBuf {
        self.root.join(".mngr")
    }

    /// Create a directory (with one file in it) inside the workspace.
    pub fn data_dir(&self, rel: &str) -> PathBuf {
        let dir = self.root.join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("data.nc"), "payload").unwrap();
        dir
    }

    /// `tapeq` configured to recognise this workspace's tree.
    pub fn tapeq(&self) -> CliBuilder {
        cli().env("TAPEQ_WORKSPACE_PARENT", self.tree.path())
    }

    /// `tapeq init --yes` for this workspace.
    pub fn init(&self) {
        self.tapeq().arg("init").arg(self.path()).arg("--yes").passes();
    }

    /// Path of the single request file in `status`.
    pub fn request_file(&self, status: &str) -> PathBuf {
        let files: Vec<_> = std::fs::read_dir(self.control().join(status))
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.is_file())
            .collect();
        assert_eq!(files.len(), 1, "expected one request in {status}: {files:?}");
        files.into_iter().next().unwrap()
    }
}
