// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage layer for tape requests.
//!
//! The filesystem is the queue: each request is one file, and the status
//! directory holding that file is the request's status. Content is always
//! fully written before a file is moved, and a rename is the only way a
//! status change becomes visible to other processes.
//!
//! Operational constraint: one administrator batch runs against a workspace
//! at a time. Nothing here stops two batches from claiming the same request.

mod atomic;
mod error;
mod layout;
mod queue;
mod request;
mod scan;
mod sequence;

pub use error::QueueError;
pub use layout::{QueueLayout, ARCHIVE_DIR, COUNTER_FILE};
pub use queue::RequestQueue;
pub use request::Request;
pub use scan::ScanFilter;
pub use sequence::SequenceFile;
