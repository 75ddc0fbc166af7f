// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request status and the legal-transition table.
//!
//! A request's status is the status directory that currently holds its
//! file. Every move between directories must be a transition listed in
//! [`RequestStatus::can_transition_to`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Created by a workspace member, waiting for the administrator batch
    New,
    /// Claimed by the batch, submission to the archive service in flight
    Submitting,
    /// Accepted by the archive service, waiting for completion
    Submitted,
    Done,
    Failed,
    /// Withdrawn by its owner before submission
    Withdrawn,
}

impl RequestStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [RequestStatus; 6] = [
        RequestStatus::New,
        RequestStatus::Submitting,
        RequestStatus::Submitted,
        RequestStatus::Done,
        RequestStatus::Failed,
        RequestStatus::Withdrawn,
    ];

    /// Terminal statuses; only these may be archived.
    pub const FINISHED: [RequestStatus; 3] =
        [RequestStatus::Done, RequestStatus::Failed, RequestStatus::Withdrawn];

    /// Statuses of requests that still have work ahead of them.
    pub const CURRENT: [RequestStatus; 3] =
        [RequestStatus::New, RequestStatus::Submitting, RequestStatus::Submitted];

    pub fn is_finished(self) -> bool {
        matches!(self, RequestStatus::Done | RequestStatus::Failed | RequestStatus::Withdrawn)
    }

    /// Whether a request may move directly from `self` to `next`.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        use RequestStatus::*;
        matches!(
            (self, next),
            (New, Submitting)
                | (New, Withdrawn)
                | (Submitting, Submitted)
                | (Submitting, Failed)
                | (Submitted, Done)
                | (Submitted, Failed)
        )
    }

    /// Status directories whose mode lets any workspace member drop files in.
    pub fn is_member_writable(self) -> bool {
        matches!(self, RequestStatus::New | RequestStatus::Withdrawn)
    }
}

crate::str_names! {
    /// Name of the status directory under the control root.
    RequestStatus::dir_name {
        New => "new",
        Submitting => "submitting",
        Submitted => "submitted",
        Done => "done",
        Failed => "failed",
        Withdrawn => "withdrawn",
    }
}

crate::str_names! {
    /// Upper-case name used in descriptions and listings.
    RequestStatus::name, display {
        New => "NEW",
        Submitting => "SUBMITTING",
        Submitted => "SUBMITTED",
        Done => "DONE",
        Failed => "FAILED",
        Withdrawn => "WITHDRAWN",
    }
}

/// Status name not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown request status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.dir_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
