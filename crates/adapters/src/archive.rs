// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Archive service adapter.
//!
//! The archive service performs the actual data movement to and from tape.
//! Every submit call returns the service's job handle (the request's
//! external id); `check` reports on a previously submitted job.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors reported by the archive service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("archive service rejected the request: {0}")]
    Rejected(String),
    #[error("archive service unavailable: {0}")]
    Unavailable(String),
    #[error("archive service I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of checking a submitted job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    /// `Some(true)` finished successfully, `Some(false)` failed,
    /// `None` still in progress
    pub succeeded: Option<bool>,
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn succeeded() -> Self {
        Self { succeeded: Some(true), message: None }
    }

    pub fn failed() -> Self {
        Self { succeeded: Some(false), message: None }
    }

    pub fn in_progress() -> Self {
        Self { succeeded: None, message: None }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Adapter for the remote archive service
#[async_trait]
pub trait ArchiveService: Send + Sync {
    /// Submit a job copying `path` to tape. Returns the job handle.
    async fn submit_migrate(&self, path: &Path) -> Result<String, ServiceError>;

    /// Submit a job restoring the migrated `orig_path` into `target`.
    async fn submit_retrieve(&self, orig_path: &Path, target: &Path)
        -> Result<String, ServiceError>;

    /// Submit a job deleting the offline copy of `orig_path`.
    async fn submit_delete(&self, orig_path: &Path) -> Result<String, ServiceError>;

    /// Report on a previously submitted job.
    async fn check(&self, external_id: &str) -> Result<CheckOutcome, ServiceError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ArchiveService, CheckOutcome, ServiceError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    /// Recorded archive service call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ServiceCall {
        SubmitMigrate { path: PathBuf },
        SubmitRetrieve { orig_path: PathBuf, target: PathBuf },
        SubmitDelete { orig_path: PathBuf },
        Check { external_id: String },
    }

    #[derive(Default)]
    struct FakeServiceState {
        calls: Vec<ServiceCall>,
        submitted: u64,
        submit_error: Option<String>,
        checks: VecDeque<Result<CheckOutcome, String>>,
    }

    /// Fake archive service for testing.
    ///
    /// Submissions succeed with handles `ext-1`, `ext-2`, ... unless
    /// [`fail_submissions`](Self::fail_submissions) is set. Checks pop
    /// scripted results and report "in progress" once the script runs out.
    #[derive(Clone, Default)]
    pub struct FakeArchiveService {
        inner: Arc<Mutex<FakeServiceState>>,
    }

    impl FakeArchiveService {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded calls
        pub fn calls(&self) -> Vec<ServiceCall> {
            self.inner.lock().calls.clone()
        }

        /// Make every subsequent submission fail with `message`
        pub fn fail_submissions(&self, message: impl Into<String>) {
            self.inner.lock().submit_error = Some(message.into());
        }

        /// Queue the result of the next check
        pub fn push_check(&self, outcome: CheckOutcome) {
            self.inner.lock().checks.push_back(Ok(outcome));
        }

        /// Queue a failure for the next check
        pub fn push_check_error(&self, message: impl Into<String>) {
            self.inner.lock().checks.push_back(Err(message.into()));
        }

        fn submit(&self, call: ServiceCall) -> Result<String, ServiceError> {
            let mut inner = self.inner.lock();
            inner.calls.push(call);
            if let Some(message) = &inner.submit_error {
                return Err(ServiceError::Rejected(message.clone()));
            }
            inner.submitted += 1;
            Ok(format!("ext-{}", inner.submitted))
        }
    }

    #[async_trait]
    impl ArchiveService for FakeArchiveService {
        async fn submit_migrate(&self, path: &Path) -> Result<String, ServiceError> {
            self.submit(ServiceCall::SubmitMigrate { path: path.to_path_buf() })
        }

        async fn submit_retrieve(
            &self,
            orig_path: &Path,
            target: &Path,
        ) -> Result<String, ServiceError> {
            self.submit(ServiceCall::SubmitRetrieve {
                orig_path: orig_path.to_path_buf(),
                target: target.to_path_buf(),
            })
        }

        async fn submit_delete(&self, orig_path: &Path) -> Result<String, ServiceError> {
            self.submit(ServiceCall::SubmitDelete { orig_path: orig_path.to_path_buf() })
        }

        async fn check(&self, external_id: &str) -> Result<CheckOutcome, ServiceError> {
            let mut inner = self.inner.lock();
            inner.calls.push(ServiceCall::Check { external_id: external_id.to_string() });
            match inner.checks.pop_front() {
                Some(Ok(outcome)) => Ok(outcome),
                Some(Err(message)) => Err(ServiceError::Unavailable(message)),
                None => Ok(CheckOutcome::in_progress()),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeArchiveService, ServiceCall};

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
