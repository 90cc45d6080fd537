// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::contract::{Policy, POLICY};
use std::panic::{self, AssertUnwindSafe};

/// The five-element array most scenarios start from.
pub const SAMPLE: [i32; 5] = [10, 20, 30, 40, 50];

/// `[0, 1, ..., n-1]`.
pub fn ascending(n: usize) -> Vec<u32> {
    (0..n).map(|i| i as u32).collect()
}

/// Run `f`, returning the contract diagnostic if it failed one.
///
/// Only meaningful under [`Policy::Panic`]; under the abort policy a violation ends the
/// process before this returns, so the helper refuses to run.
pub fn catch_violation<R>(f: impl FnOnce() -> R) -> Option<String> {
    assert_eq!(
        POLICY,
        Policy::Panic,
        "catch_violation needs the catchable-contracts feature"
    );
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => None,
        Err(payload) => Some(
            payload
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
                .unwrap_or_default(),
        ),
    }
}
