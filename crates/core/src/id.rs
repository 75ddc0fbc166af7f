// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric request identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of consecutive ids grouped into one archive bucket.
pub const BUCKET_SIZE: u64 = 100;

/// Workspace-unique request id, shared across all request kinds.
///
/// Ids are minted from 1 upwards by the workspace sequence file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Archive bucket holding this id: ids 1..=100 are bucket 1,
    /// 101..=200 bucket 2, and so on.
    pub fn bucket(self) -> u64 {
        self.0.saturating_sub(1) / BUCKET_SIZE + 1
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl PartialEq<u64> for RequestId {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
