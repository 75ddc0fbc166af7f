// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Default name of the control directory inside a workspace
pub const DEFAULT_CONTROL_DIR: &str = ".mngr";

/// Log filter directives: TAPEQ_LOG > "warn"
pub fn log_filter() -> String {
    std::env::var("TAPEQ_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".into())
}

/// Extra directory whose immediate children are treated as workspaces.
pub fn workspace_parent() -> Option<PathBuf> {
    std::env::var_os("TAPEQ_WORKSPACE_PARENT").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Control directory name: TAPEQ_CONTROL_DIR > ".mngr"
pub fn control_dir() -> String {
    std::env::var("TAPEQ_CONTROL_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CONTROL_DIR.into())
}

/// `NO_COLOR=1` disables colour output.
pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

/// `COLOR=1` forces colour output even when stdout is not a terminal.
pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
