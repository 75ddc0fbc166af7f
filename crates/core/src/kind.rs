// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request kinds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of request kinds.
///
/// The kind token appears verbatim in request filenames, so tokens must not
/// contain the filename separator (`-`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// Copy a directory to tape
    Migration,
    /// Restore a migrated directory from tape
    Retrieval,
    /// Delete the offline copy of a migrated directory
    Deletion,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] =
        [RequestKind::Migration, RequestKind::Retrieval, RequestKind::Deletion];

    /// Content keys that must be present for this kind.
    pub fn compulsory_fields(self) -> &'static [&'static str] {
        match self {
            RequestKind::Migration => &["path"],
            RequestKind::Retrieval => &["orig_path"],
            RequestKind::Deletion => &["orig_path"],
        }
    }
}

crate::str_names! {
    /// Filename token.
    RequestKind::token, display {
        Migration => "migration",
        Retrieval => "retrieval",
        Deletion => "deletion",
    }
}

/// Kind token not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown request type: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for RequestKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestKind::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
