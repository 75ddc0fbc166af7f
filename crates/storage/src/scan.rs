// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tapeq_core::{RequestId, RequestKind, RequestName, RequestStatus};

/// Selects requests during a queue scan.
///
/// The default matches every non-archived request of every owner, kind and
/// status.
#[derive(Debug, Clone)]
pub struct ScanFilter {
    pub(crate) statuses: Vec<RequestStatus>,
    kinds: Option<Vec<RequestKind>>,
    id: Option<RequestId>,
    owner: Option<String>,
    pub(crate) include_archived: bool,
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            statuses: RequestStatus::ALL.to_vec(),
            kinds: None,
            id: None,
            owner: None,
            include_archived: false,
        }
    }
}

impl ScanFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = RequestStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn kinds(mut self, kinds: impl IntoIterator<Item = RequestKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    pub fn id(mut self, id: RequestId) -> Self {
        self.id = Some(id);
        self
    }

    /// Only requests created by `owner`.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn include_archived(mut self, include: bool) -> Self {
        self.include_archived = include;
        self
    }

    pub(crate) fn matches(&self, name: &RequestName) -> bool {
        if self.id.is_some_and(|id| id != name.id) {
            return false;
        }
        if self.owner.as_deref().is_some_and(|owner| owner != name.owner) {
            return false;
        }
        if let Some(kinds) = &self.kinds {
            if !kinds.contains(&name.kind) {
                return false;
            }
        }
        true
    }
}
