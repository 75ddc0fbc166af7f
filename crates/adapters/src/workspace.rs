// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace resolution and administrator checks.
//!
//! A group workspace is a directory at a fixed depth below one of the known
//! workspace trees. Any path inside it resolves to the workspace root; the
//! path itself need not exist, but the workspace must.

use std::os::unix::fs::MetadataExt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors from workspace resolution
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("{0} is not in a recognized group workspace")]
    NotAWorkspace(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A directory tree whose entries at a fixed depth are workspaces.
#[derive(Debug, Clone)]
struct WorkspaceTree {
    base: PathBuf,
    /// Components below `base` that make up a workspace root
    depth: usize,
}

/// Maps arbitrary paths to the root of the workspace containing them.
#[derive(Debug, Clone)]
pub struct WorkspaceResolver {
    trees: Vec<WorkspaceTree>,
}

impl WorkspaceResolver {
    /// Resolver for the standard trees: `/gws/<a>/<b>/<c>` and
    /// `/group_workspaces/<a>/<b>`.
    pub fn new() -> Self {
        Self {
            trees: vec![
                WorkspaceTree { base: PathBuf::from("/gws"), depth: 3 },
                WorkspaceTree { base: PathBuf::from("/group_workspaces"), depth: 2 },
            ],
        }
    }

    /// Also treat every immediate child of `parent` as a workspace.
    pub fn with_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.trees.push(WorkspaceTree { base: normalize(&parent.into()), depth: 1 });
        self
    }

    /// Resolve `path` to the root of its workspace.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf, WorkspaceError> {
        let absolute =
            if path.is_absolute() { path.to_path_buf() } else { std::env::current_dir()?.join(path) };
        let path = normalize(&absolute);

        for tree in &self.trees {
            let Ok(rest) = path.strip_prefix(&tree.base) else {
                continue;
            };
            let parts: Vec<_> = rest.components().take(tree.depth).collect();
            if parts.len() < tree.depth {
                continue;
            }
            let root = parts.iter().fold(tree.base.clone(), |acc, c| acc.join(c));
            if root.is_dir() {
                return Ok(root);
            }
        }
        Err(WorkspaceError::NotAWorkspace(path))
    }
}

impl Default for WorkspaceResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexically resolve `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Whether the calling user administers a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStatus {
    Administrator,
    NotAdministrator,
    /// No control directory exists yet, so ownership cannot tell
    Undetermined,
}

/// Decide administrator status from ownership of the control directory.
pub fn administrator_status(control_root: &Path) -> Result<AdminStatus, WorkspaceError> {
    match std::fs::metadata(control_root) {
        Ok(meta) => {
            let uid = nix::unistd::getuid().as_raw();
            Ok(if meta.uid() == uid {
                AdminStatus::Administrator
            } else {
                AdminStatus::NotAdministrator
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AdminStatus::Undetermined),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
