// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tapeq-core: domain types for the tape request queue

pub mod macros;

pub mod clock;
pub mod content;
pub mod filename;
pub mod id;
pub mod kind;
pub mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use content::{ContentError, RequestContent, RequestParams};
pub use filename::{is_tmp_name, tmp_name, FilenameError, RequestName, TMP_PREFIX};
pub use id::{RequestId, BUCKET_SIZE};
pub use kind::RequestKind;
pub use status::RequestStatus;
