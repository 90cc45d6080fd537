// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: invariant reports and debug-mode re-checks.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Invariant reports** (`SpanInvariants`, `validate`) that re-derive every view
//!    invariant from a live view. Tests and fuzz targets call these after arbitrary
//!    chains of operations.
//!
//! 2. **Runtime contracts** that panic in debug builds when the crate assembles a view
//!    from bad parts. Zero-cost in release, but catch arithmetic slips when tests run.
//!
//! Neither replaces [`crate::contract`], which validates caller input in every build.

mod types;
pub mod contracts;

pub use types::*;
