// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

pub use strategies::*;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for request identity and content.
pub mod strategies {
    use crate::{RequestContent, RequestId, RequestKind, RequestName, RequestParams};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::path::PathBuf;

    pub fn arb_kind() -> impl Strategy<Value = RequestKind> {
        prop_oneof![
            Just(RequestKind::Migration),
            Just(RequestKind::Retrieval),
            Just(RequestKind::Deletion),
        ]
    }

    /// Login names as they appear on the shared systems (no hyphens).
    pub fn arb_owner() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,11}"
    }

    pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (1970i32..=2099, 1u32..=365).prop_map(|(year, ordinal)| {
            NaiveDate::from_yo_opt(year, ordinal).unwrap_or_default()
        })
    }

    pub fn arb_request_name() -> impl Strategy<Value = RequestName> {
        (arb_owner(), arb_kind(), 1u64..=u64::MAX, arb_date())
            .prop_map(|(owner, kind, id, date)| RequestName { owner, kind, id: RequestId(id), date })
    }

    pub fn arb_path() -> impl Strategy<Value = PathBuf> {
        "/gws/[a-z]{1,8}/[a-z0-9_]{1,12}( dir)?".prop_map(PathBuf::from)
    }

    pub fn arb_params() -> impl Strategy<Value = RequestParams> {
        prop_oneof![
            arb_path().prop_map(RequestParams::migration),
            (arb_path(), proptest::option::of(arb_path()))
                .prop_map(|(orig, new)| RequestParams::retrieval(orig, new)),
            arb_path().prop_map(RequestParams::deletion),
        ]
    }

    pub fn arb_request_content() -> impl Strategy<Value = RequestContent> {
        (arb_params(), proptest::option::of("[0-9]{1,6}"), proptest::option::of(".{0,40}"))
            .prop_map(|(params, external_id, message)| RequestContent {
                external_id,
                message,
                ..RequestContent::new(params)
            })
    }
}
