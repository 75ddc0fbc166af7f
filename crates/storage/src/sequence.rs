// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request id allocation.
//!
//! One counter file per workspace holds the last id handed out, shared by
//! every request kind. Allocation holds an exclusive advisory lock on the
//! file for the whole read-increment-write, so members creating requests at
//! the same moment get distinct ids.

use crate::error::{io_at, QueueError};
use fs2::FileExt;
use std::fs::{self, OpenOptions, Permissions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tapeq_core::RequestId;

/// Counter files must be writable by every workspace member.
const COUNTER_MODE: u32 = 0o666;

/// The workspace's request id counter.
#[derive(Debug, Clone)]
pub struct SequenceFile {
    path: PathBuf,
}

impl SequenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create the counter at 0 unless it already exists. Returns whether it
    /// was created.
    pub fn create_if_missing(&self) -> Result<bool, QueueError> {
        let created = match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(mut file) => {
                writeln!(file, "0").map_err(io_at(&self.path))?;
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => false,
            Err(e) => return Err(io_at(&self.path)(e)),
        };
        fs::set_permissions(&self.path, Permissions::from_mode(COUNTER_MODE))
            .map_err(io_at(&self.path))?;
        Ok(created)
    }

    /// Last id handed out (0 if none yet).
    pub fn current(&self) -> Result<u64, QueueError> {
        let content = fs::read_to_string(&self.path).map_err(io_at(&self.path))?;
        self.parse(&content)
    }

    /// Allocate the next request id.
    pub fn next_id(&self) -> Result<RequestId, QueueError> {
        let io = io_at(&self.path);
        let mut file = OpenOptions::new().read(true).write(true).open(&self.path).map_err(io)?;
        // Released when `file` is dropped
        file.lock_exclusive().map_err(io_at(&self.path))?;

        let mut content = String::new();
        file.read_to_string(&mut content).map_err(io_at(&self.path))?;
        let last = self.parse(&content)?;
        let next = last.checked_add(1).ok_or_else(|| QueueError::BadCounter {
            path: self.path.clone(),
            content: content.trim().to_string(),
        })?;

        file.seek(SeekFrom::Start(0)).map_err(io_at(&self.path))?;
        file.set_len(0).map_err(io_at(&self.path))?;
        writeln!(file, "{next}").map_err(io_at(&self.path))?;
        file.sync_all().map_err(io_at(&self.path))?;

        tracing::debug!(id = next, path = %self.path.display(), "allocated request id");
        Ok(RequestId(next))
    }

    fn parse(&self, content: &str) -> Result<u64, QueueError> {
        content.trim().parse().map_err(|_| QueueError::BadCounter {
            path: self.path.clone(),
            content: content.trim().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
