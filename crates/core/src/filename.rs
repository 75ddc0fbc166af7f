// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request filename codec.
//!
//! A request's filename is `<user>-<kind>-<id>-<YYYY>-<MM>-<DD>`. It never
//! changes as the file moves between status directories, so it is the only
//! persistent key for a request.

use crate::id::RequestId;
use crate::kind::RequestKind;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Prefix of write-in-progress files. Directory scans skip these.
pub const TMP_PREFIX: &str = ".tmp_";

#[allow(clippy::expect_used)]
static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<user>[^-/]+)-(?P<kind>[a-z]+)-(?P<id>[0-9]+)-(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$",
    )
    .expect("constant regex pattern is valid")
});

/// Errors from encoding or decoding request filenames
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    #[error("cannot parse {0}")]
    BadFileName(String),
    #[error("invalid user name {0:?}: must be non-empty and free of '-' and '/'")]
    BadUser(String),
}

/// Stable identity of a request, encoded losslessly in its filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestName {
    pub owner: String,
    pub kind: RequestKind,
    pub id: RequestId,
    pub date: NaiveDate,
}

impl RequestName {
    /// Build a name, rejecting owners that would not survive the round-trip.
    pub fn new(
        owner: impl Into<String>,
        kind: RequestKind,
        id: RequestId,
        date: NaiveDate,
    ) -> Result<Self, FilenameError> {
        let owner = owner.into();
        if owner.is_empty() || owner.contains(['-', '/']) || owner.starts_with(TMP_PREFIX) {
            return Err(FilenameError::BadUser(owner));
        }
        Ok(Self { owner, kind, id, date })
    }

    /// Encode as the canonical filename.
    pub fn encode(&self) -> String {
        format!(
            "{}-{}-{}-{:04}-{:02}-{:02}",
            self.owner,
            self.kind.token(),
            self.id,
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }

    /// Decode a canonical filename.
    pub fn decode(filename: &str) -> Result<Self, FilenameError> {
        let bad = || FilenameError::BadFileName(filename.to_string());
        if is_tmp_name(filename) {
            return Err(bad());
        }
        let caps = FILENAME_PATTERN.captures(filename).ok_or_else(bad)?;

        let kind: RequestKind = caps["kind"].parse().map_err(|_| bad())?;
        let id: u64 = caps["id"].parse().map_err(|_| bad())?;
        let year: i32 = caps["year"].parse().map_err(|_| bad())?;
        let month: u32 = caps["month"].parse().map_err(|_| bad())?;
        let day: u32 = caps["day"].parse().map_err(|_| bad())?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)?;

        let name = Self { owner: caps["user"].to_string(), kind, id: RequestId(id), date };
        // Paths are rebuilt from the decoded name, so only canonical spellings are usable.
        if name.encode() != filename {
            return Err(bad());
        }
        Ok(name)
    }
}

impl fmt::Display for RequestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Whether `name` (a bare filename) is a write-in-progress artifact.
pub fn is_tmp_name(name: &str) -> bool {
    name.starts_with(TMP_PREFIX)
}

/// Sibling temp filename used while writing `name`.
pub fn tmp_name(name: &str) -> String {
    format!("{TMP_PREFIX}{name}")
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
