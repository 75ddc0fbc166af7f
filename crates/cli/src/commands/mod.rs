// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod archive;
pub mod handle;
pub mod init;
pub mod list;
pub mod request;
pub mod withdraw;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tapeq_adapters::{administrator_status, current_user, AdminStatus, WorkspaceResolver};
use tapeq_storage::RequestQueue;

use crate::env;

/// Workspace resolver with any configured extra workspace parent.
pub(crate) fn resolver() -> WorkspaceResolver {
    let resolver = WorkspaceResolver::new();
    match env::workspace_parent() {
        Some(parent) => resolver.with_parent(parent),
        None => resolver,
    }
}

/// Root of the workspace containing `path`.
pub(crate) fn workspace_root(path: &Path) -> Result<PathBuf> {
    Ok(resolver().resolve(path)?)
}

pub(crate) fn control_root(workspace: &Path) -> PathBuf {
    workspace.join(env::control_dir())
}

/// Queue of the workspace containing `path`, acting as the current user.
pub(crate) fn open_queue(path: &Path) -> Result<RequestQueue> {
    let workspace = workspace_root(path)?;
    Ok(RequestQueue::new(control_root(&workspace), current_user()?))
}

/// Queue of the workspace containing `path` if the current user administers
/// it. Otherwise prints a notice and returns `None`.
pub(crate) fn open_admin_queue(path: &Path) -> Result<Option<RequestQueue>> {
    let workspace = workspace_root(path)?;
    let control = control_root(&workspace);
    match administrator_status(&control)? {
        AdminStatus::Administrator => Ok(Some(RequestQueue::new(control, current_user()?))),
        AdminStatus::NotAdministrator | AdminStatus::Undetermined => {
            println!(
                "Skipping group workspace {} - it seems you are not the workspace administrator",
                workspace.display()
            );
            Ok(None)
        }
    }
}

/// Ask a yes/no question. Only an answer starting with `y` or `Y` counts as yes.
pub(crate) fn confirm(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<bool> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_start().to_ascii_uppercase().starts_with('Y'))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
