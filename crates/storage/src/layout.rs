// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk layout of a workspace's request queue.
//!
//! ```text
//! <root>/.last_id
//! <root>/<status>/<filename>
//! <root>/<status>/archive/<bucket>/<filename>
//! ```

use std::path::{Path, PathBuf};
use tapeq_core::{RequestId, RequestStatus};

/// Name of the archive subtree inside each status directory.
pub const ARCHIVE_DIR: &str = "archive";

/// Name of the shared request id counter file.
pub const COUNTER_FILE: &str = ".last_id";

/// Paths under a queue's control root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueLayout {
    root: PathBuf,
}

impl QueueLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn status_dir(&self, status: RequestStatus) -> PathBuf {
        self.root.join(status.dir_name())
    }

    pub fn archive_root(&self, status: RequestStatus) -> PathBuf {
        self.status_dir(status).join(ARCHIVE_DIR)
    }

    /// Bucket directory for `id` in the archive of `status`.
    pub fn archive_dir(&self, status: RequestStatus, id: RequestId) -> PathBuf {
        self.archive_root(status).join(id.bucket().to_string())
    }

    /// Location of a request file.
    pub fn request_path(
        &self,
        filename: &str,
        id: RequestId,
        status: RequestStatus,
        archived: bool,
    ) -> PathBuf {
        if archived {
            self.archive_dir(status, id).join(filename)
        } else {
            self.status_dir(status).join(filename)
        }
    }

    pub fn counter_path(&self) -> PathBuf {
        self.root.join(COUNTER_FILE)
    }
}
