// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};
use tapeq_adapters::ServiceError;
use tapeq_core::{ContentError, FilenameError, RequestId, RequestStatus};
use thiserror::Error;

/// Errors that can occur in request queue operations
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("request queue is not initialised under {0}")]
    NotInitialised(PathBuf),
    #[error(transparent)]
    BadFileName(#[from] FilenameError),
    #[error("could not parse {path}: {source}")]
    BadFileContent {
        path: PathBuf,
        #[source]
        source: ContentError,
    },
    #[error("counter file {path} does not hold a request id: {content:?}")]
    BadCounter { path: PathBuf, content: String },
    #[error("withdraw only supported for status NEW; request {id} has status {status}")]
    WithdrawalNotAllowed { id: RequestId, status: RequestStatus },
    #[error("cannot archive request {id}: {reason}")]
    ArchiveNotAllowed { id: RequestId, reason: String },
    #[error("request {id} is archived and can no longer change")]
    Archived { id: RequestId },
    #[error("request {id} cannot move from {from} to {to}")]
    IllegalTransition { id: RequestId, from: RequestStatus, to: RequestStatus },
    #[error("request {id} has status {status}, expected {expected}")]
    WrongStatus { id: RequestId, status: RequestStatus, expected: RequestStatus },
    #[error("did not find exactly 1 request with id {id} (found {found})")]
    NotUnique { id: RequestId, found: usize },
    #[error("submission of request {id} failed: {source}")]
    Submit {
        id: RequestId,
        #[source]
        source: ServiceError,
    },
    #[error("status check of request {id} failed: {source}")]
    Check {
        id: RequestId,
        #[source]
        source: ServiceError,
    },
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Attach `path` to an I/O error.
pub(crate) fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> QueueError + '_ {
    move |source| QueueError::Io { path: path.to_path_buf(), source }
}
