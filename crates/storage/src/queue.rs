// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request queue manager.
//!
//! Owns a workspace's status directories and is the only code that moves
//! request files between them.

use crate::error::{io_at, QueueError};
use crate::layout::QueueLayout;
use crate::request::Request;
use crate::scan::ScanFilter;
use crate::sequence::SequenceFile;
use chrono::NaiveDate;
use std::fs::{self, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tapeq_core::{
    is_tmp_name, Clock, RequestContent, RequestId, RequestName, RequestParams, RequestStatus,
    SystemClock,
};

/// World-writable with the sticky bit: members may add files but only touch their own.
const MEMBER_DIR_MODE: u32 = 0o1777;

/// A workspace's request queue, operated on behalf of one user.
#[derive(Debug, Clone)]
pub struct RequestQueue<C: Clock = SystemClock> {
    layout: QueueLayout,
    sequence: SequenceFile,
    user: String,
    clock: C,
}

impl RequestQueue<SystemClock> {
    pub fn new(root: impl Into<PathBuf>, user: impl Into<String>) -> Self {
        Self::with_clock(root, user, SystemClock)
    }
}

impl<C: Clock> RequestQueue<C> {
    pub fn with_clock(root: impl Into<PathBuf>, user: impl Into<String>, clock: C) -> Self {
        let layout = QueueLayout::new(root);
        let sequence = SequenceFile::new(layout.counter_path());
        Self { layout, sequence, user: user.into(), clock }
    }

    pub fn layout(&self) -> &QueueLayout {
        &self.layout
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    /// User new requests are created for.
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Create any missing status directories and the id counter.
    ///
    /// Existing directories are left as they are. Newly created NEW and
    /// WITHDRAWN directories are opened up to all workspace members.
    pub fn initialise(&self) -> Result<(), QueueError> {
        for status in RequestStatus::ALL {
            let dir = self.layout.status_dir(status);
            if dir.is_dir() {
                tracing::debug!(path = %dir.display(), "status directory already exists");
                continue;
            }
            fs::create_dir_all(&dir).map_err(io_at(&dir))?;
            if status.is_member_writable() {
                fs::set_permissions(&dir, Permissions::from_mode(MEMBER_DIR_MODE))
                    .map_err(io_at(&dir))?;
            }
            tracing::info!(%status, path = %dir.display(), "created status directory");
        }
        if self.sequence.create_if_missing()? {
            tracing::info!(path = %self.sequence.path().display(), "created request id counter");
        }
        self.check_initialised()
    }

    /// Fail with [`QueueError::NotInitialised`] unless every status
    /// directory and the counter exist.
    pub fn check_initialised(&self) -> Result<(), QueueError> {
        let dirs_present =
            RequestStatus::ALL.iter().all(|status| self.layout.status_dir(*status).is_dir());
        if dirs_present && self.sequence.exists() {
            Ok(())
        } else {
            Err(QueueError::NotInitialised(self.layout.root().to_path_buf()))
        }
    }

    /// Find the requests matching `filter`, ordered by ascending id.
    ///
    /// Temp files and names that do not parse as request filenames are
    /// skipped.
    pub fn scan(&self, filter: &ScanFilter) -> Result<Vec<Request<'_, C>>, QueueError> {
        self.check_initialised()?;

        let mut found = Vec::new();
        for &status in &filter.statuses {
            self.scan_dir(&self.layout.status_dir(status), status, false, filter, &mut found)?;

            if filter.include_archived {
                let archive_root = self.layout.archive_root(status);
                if !archive_root.is_dir() {
                    continue;
                }
                for bucket in read_dir_sorted(&archive_root)? {
                    if bucket.is_dir() {
                        self.scan_dir(&bucket, status, true, filter, &mut found)?;
                    }
                }
            }
        }
        found.sort_by_key(|req| (req.id(), req.status()));
        Ok(found)
    }

    fn scan_dir<'q>(
        &'q self,
        dir: &Path,
        status: RequestStatus,
        archived: bool,
        filter: &ScanFilter,
        found: &mut Vec<Request<'q, C>>,
    ) -> Result<(), QueueError> {
        for path in read_dir_sorted(dir)? {
            if !path.is_file() {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping non-UTF-8 filename");
                continue;
            };
            if is_tmp_name(filename) {
                continue;
            }
            let name = match RequestName::decode(filename) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unrecognised file");
                    continue;
                }
            };
            if filter.matches(&name) {
                found.push(Request::new(self, name, status, archived));
            }
        }
        Ok(())
    }

    /// Look up the single non-archived request with `id`, whoever owns it.
    pub fn get_by_id(&self, id: RequestId) -> Result<Request<'_, C>, QueueError> {
        let mut matches = self.scan(&ScanFilter::new().id(id))?;
        if matches.len() != 1 {
            return Err(QueueError::NotUnique { id, found: matches.len() });
        }
        Ok(matches.remove(0))
    }

    /// Allocate an id and write a NEW request owned by this queue's user.
    pub fn create_request(&self, params: RequestParams) -> Result<Request<'_, C>, QueueError> {
        self.check_initialised()?;

        // Reject unusable owners before an id is spent on them
        let mut name =
            RequestName::new(self.user.as_str(), params.kind(), RequestId(0), self.clock.today())?;
        name.id = self.sequence.next_id()?;

        let request = Request::new(self, name, RequestStatus::New, false);
        request.write(&RequestContent::new(params))?;
        tracing::info!(
            id = %request.id(),
            kind = %request.kind(),
            owner = %request.owner(),
            "created request"
        );
        Ok(request)
    }

    /// Move a request file from one status directory to another.
    ///
    /// The transition must be legal; the rename is what makes the new status
    /// visible to every other process.
    pub fn move_request(
        &self,
        name: &RequestName,
        from: RequestStatus,
        to: RequestStatus,
    ) -> Result<(), QueueError> {
        if !from.can_transition_to(to) {
            return Err(QueueError::IllegalTransition { id: name.id, from, to });
        }
        let filename = name.encode();
        let old_path = self.layout.request_path(&filename, name.id, from, false);
        let new_path = self.layout.request_path(&filename, name.id, to, false);
        fs::rename(&old_path, &new_path).map_err(io_at(&old_path))?;
        tracing::info!(id = %name.id, %from, %to, "request moved");
        Ok(())
    }

    /// Move a finished request into its status directory's archive bucket.
    pub fn archive_request(
        &self,
        name: &RequestName,
        status: RequestStatus,
    ) -> Result<(), QueueError> {
        if !status.is_finished() {
            return Err(QueueError::ArchiveNotAllowed {
                id: name.id,
                reason: format!("status {status} is not finished"),
            });
        }
        let filename = name.encode();
        let bucket = self.layout.archive_dir(status, name.id);
        fs::create_dir_all(&bucket).map_err(io_at(&bucket))?;
        let old_path = self.layout.request_path(&filename, name.id, status, false);
        let new_path = bucket.join(&filename);
        fs::rename(&old_path, &new_path).map_err(io_at(&old_path))?;
        tracing::info!(id = %name.id, %status, path = %new_path.display(), "request archived");
        Ok(())
    }

    /// Withdraw the request with `id`. Only NEW requests can be withdrawn.
    pub fn withdraw(&self, id: RequestId) -> Result<Request<'_, C>, QueueError> {
        let mut request = self.get_by_id(id)?;
        if request.status() != RequestStatus::New {
            return Err(QueueError::WithdrawalNotAllowed { id, status: request.status() });
        }
        request.set_status(RequestStatus::Withdrawn)?;
        Ok(request)
    }

    /// Archive every finished request created on or before `cutoff`.
    pub fn archive_finished_before(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<Request<'_, C>>, QueueError> {
        let candidates = self.scan(&ScanFilter::new().statuses(RequestStatus::FINISHED))?;
        let mut archived = Vec::new();
        for mut request in candidates {
            if request.date() <= cutoff {
                request.archive()?;
                archived.push(request);
            }
        }
        Ok(archived)
    }

    /// Remove temp files left behind by interrupted writes.
    ///
    /// Returns the removed paths.
    pub fn clean_stale_temp_files(&self) -> Result<Vec<PathBuf>, QueueError> {
        self.check_initialised()?;
        let mut removed = Vec::new();
        for status in RequestStatus::ALL {
            for path in read_dir_sorted(&self.layout.status_dir(status))? {
                let is_tmp =
                    path.file_name().and_then(|n| n.to_str()).is_some_and(is_tmp_name);
                if is_tmp && path.is_file() {
                    fs::remove_file(&path).map_err(io_at(&path))?;
                    tracing::info!(path = %path.display(), "removed stale temp file");
                    removed.push(path);
                }
            }
        }
        Ok(removed)
    }

    pub(crate) fn request_path(
        &self,
        name: &RequestName,
        status: RequestStatus,
        archived: bool,
    ) -> PathBuf {
        self.layout.request_path(&name.encode(), name.id, status, archived)
    }
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, QueueError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_at(dir))? {
        paths.push(entry.map_err(io_at(dir))?.path());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
