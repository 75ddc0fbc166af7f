// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external collaborators: the archive service, workspace
//! resolution, and the operating system's notion of the current user.

pub mod archive;
pub mod manual;
pub mod user;
pub mod workspace;

pub use archive::{ArchiveService, CheckOutcome, ServiceError};
pub use manual::ManualArchiveService;
pub use user::{current_user, UserError};
pub use workspace::{administrator_status, AdminStatus, WorkspaceError, WorkspaceResolver};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use archive::{FakeArchiveService, ServiceCall};
