// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single request file and its state machine.

use crate::atomic::{write_atomic, CONTENT_MODE};
use crate::error::{io_at, QueueError};
use crate::queue::RequestQueue;
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use tapeq_adapters::{ArchiveService, CheckOutcome};
use tapeq_core::{
    Clock, ContentError, RequestContent, RequestId, RequestKind, RequestName, RequestParams,
    RequestStatus, SystemClock,
};

/// A request as found in (or just written to) its queue.
///
/// The status is where the file was when the handle was made. It is kept in
/// step with moves made through this handle, not with other processes.
#[derive(Debug, Clone)]
pub struct Request<'q, C: Clock = SystemClock> {
    queue: &'q RequestQueue<C>,
    name: RequestName,
    status: RequestStatus,
    archived: bool,
}

impl<'q, C: Clock> Request<'q, C> {
    pub(crate) fn new(
        queue: &'q RequestQueue<C>,
        name: RequestName,
        status: RequestStatus,
        archived: bool,
    ) -> Self {
        Self { queue, name, status, archived }
    }

    pub fn name(&self) -> &RequestName {
        &self.name
    }

    pub fn id(&self) -> RequestId {
        self.name.id
    }

    pub fn kind(&self) -> RequestKind {
        self.name.kind
    }

    pub fn owner(&self) -> &str {
        &self.name.owner
    }

    pub fn date(&self) -> NaiveDate {
        self.name.date
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn filename(&self) -> String {
        self.name.encode()
    }

    /// Current location of the request file.
    pub fn path(&self) -> PathBuf {
        self.queue.request_path(&self.name, self.status, self.archived)
    }

    /// Read and decode the request's content.
    pub fn read(&self) -> Result<RequestContent, QueueError> {
        let path = self.path();
        let text = std::fs::read_to_string(&path).map_err(io_at(&path))?;
        RequestContent::decode(self.kind(), &text)
            .map_err(|source| QueueError::BadFileContent { path, source })
    }

    /// Replace the request's content in place.
    pub fn write(&self, content: &RequestContent) -> Result<(), QueueError> {
        if self.archived {
            return Err(QueueError::Archived { id: self.id() });
        }
        let path = self.path();
        let bad_content = |source| QueueError::BadFileContent { path: path.clone(), source };
        if content.kind() != self.kind() {
            return Err(bad_content(ContentError::KindMismatch {
                expected: self.kind(),
                found: content.kind(),
            }));
        }
        let text = content.encode().map_err(bad_content)?;
        write_atomic(&path, text.as_bytes(), CONTENT_MODE).map_err(io_at(&path))
    }

    /// Move the request to another status directory.
    pub fn set_status(&mut self, to: RequestStatus) -> Result<(), QueueError> {
        if self.archived {
            return Err(QueueError::Archived { id: self.id() });
        }
        self.queue.move_request(&self.name, self.status, to)?;
        self.status = to;
        Ok(())
    }

    /// Claim a NEW request and hand it to the archive service.
    ///
    /// The request sits in SUBMITTING while the service is called, then lands
    /// in SUBMITTED with the service's handle recorded, or in FAILED with the
    /// rejection recorded as its message.
    pub async fn claim_and_submit<S>(&mut self, service: &S) -> Result<String, QueueError>
    where
        S: ArchiveService + ?Sized,
    {
        self.expect_status(RequestStatus::New)?;
        let mut content = self.read()?;
        self.set_status(RequestStatus::Submitting)?;

        let submitted = match &content.params {
            RequestParams::Migration { path } => service.submit_migrate(path).await,
            RequestParams::Retrieval { orig_path, new_path } => {
                let target = new_path.as_deref().unwrap_or(orig_path);
                service.submit_retrieve(orig_path, target).await
            }
            RequestParams::Deletion { orig_path } => service.submit_delete(orig_path).await,
        };

        match submitted {
            Ok(external_id) => {
                content.external_id = Some(external_id.clone());
                self.write(&content)?;
                self.set_status(RequestStatus::Submitted)?;
                tracing::info!(id = %self.id(), %external_id, "request submitted");
                Ok(external_id)
            }
            Err(source) => {
                content.message = Some(source.to_string());
                if let Err(e) =
                    self.write(&content).and_then(|()| self.set_status(RequestStatus::Failed))
                {
                    tracing::warn!(id = %self.id(), error = %e, "could not record failed submission");
                }
                Err(QueueError::Submit { id: self.id(), source })
            }
        }
    }

    /// Ask the archive service how a SUBMITTED request is doing and record
    /// the answer.
    ///
    /// Any message from the service is written before the request moves, so
    /// readers never see a finished request without it.
    pub async fn monitor<S>(&mut self, service: &S) -> Result<CheckOutcome, QueueError>
    where
        S: ArchiveService + ?Sized,
    {
        self.expect_status(RequestStatus::Submitted)?;
        let mut content = self.read()?;
        let Some(external_id) = content.external_id.clone() else {
            return Err(QueueError::BadFileContent {
                path: self.path(),
                source: ContentError::MissingField { kind: self.kind(), field: "external_id" },
            });
        };

        let outcome = service
            .check(&external_id)
            .await
            .map_err(|source| QueueError::Check { id: self.id(), source })?;

        if let Some(message) = &outcome.message {
            content.message = Some(message.clone());
            self.write(&content)?;
        }
        match outcome.succeeded {
            Some(true) => self.set_status(RequestStatus::Done)?,
            Some(false) => self.set_status(RequestStatus::Failed)?,
            None => tracing::debug!(id = %self.id(), %external_id, "request still in progress"),
        }
        Ok(outcome)
    }

    /// Move a finished request into its archive bucket.
    pub fn archive(&mut self) -> Result<(), QueueError> {
        if self.archived {
            return Err(QueueError::ArchiveNotAllowed {
                id: self.id(),
                reason: "already archived".to_string(),
            });
        }
        self.queue.archive_request(&self.name, self.status)?;
        self.archived = true;
        Ok(())
    }

    fn expect_status(&self, expected: RequestStatus) -> Result<(), QueueError> {
        if self.archived {
            return Err(QueueError::Archived { id: self.id() });
        }
        if self.status != expected {
            return Err(QueueError::WrongStatus { id: self.id(), status: self.status, expected });
        }
        Ok(())
    }
}

impl<C: Clock> fmt::Display for Request<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} request: user={} id={} date={} status={}",
            self.kind(),
            self.owner(),
            self.id(),
            self.date(),
            self.status
        )?;
        if self.archived {
            write!(f, " (archived)")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
