// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Current OS user lookup.

use nix::unistd::{getuid, User};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("no passwd entry for uid {0}")]
    UnknownUid(u32),
    #[error("user lookup failed: {0}")]
    Lookup(#[from] nix::errno::Errno),
}

/// Login name of the user running this process.
pub fn current_user() -> Result<String, UserError> {
    let uid = getuid();
    match User::from_uid(uid)? {
        Some(user) => Ok(user.name),
        None => Err(UserError::UnknownUid(uid.as_raw())),
    }
}
