// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract-checking facility: "require the predicate, or stop".
//!
//! Every runtime precondition in the crate funnels through [`evaluate`], which turns a
//! false predicate into a [`Violation`]. What happens next is a build-time policy:
//!
//! | Build                                   | Policy            | Effect                          |
//! |-----------------------------------------|-------------------|---------------------------------|
//! | default                                 | [`Policy::Abort`] | diagnostic on stderr, `abort()` |
//! | `--features catchable-contracts`, tests | [`Policy::Panic`] | `panic!` with the diagnostic    |
//!
//! Aborting never unwinds back into the caller, so no code runs past a broken bounds
//! invariant. The panicking policy exists for harnesses that need to observe violations
//! (`#[should_panic]`, `catch_unwind`). Either way the check runs strictly before the
//! guarded access, so a violation never leaves a half-applied write behind.
//!
//! All diagnostics start with `Contract violation:`.

use crate::error::Violation;
use std::panic::Location;

/// What a failed contract does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Print the diagnostic and abort the process.
    Abort,
    /// Panic with the diagnostic; observable with `catch_unwind`.
    Panic,
}

/// The policy this build was compiled with.
#[cfg(any(test, feature = "catchable-contracts"))]
pub const POLICY: Policy = Policy::Panic;

/// The policy this build was compiled with.
#[cfg(not(any(test, feature = "catchable-contracts")))]
pub const POLICY: Policy = Policy::Abort;

/// Shared predicate evaluation: `Ok(())` when `condition` holds.
///
/// The violation is only built on failure.
#[inline]
pub fn evaluate(condition: bool, violation: impl FnOnce() -> Violation) -> Result<(), Violation> {
    if condition {
        Ok(())
    } else {
        Err(violation())
    }
}

/// Require `condition`, failing the contract otherwise.
#[inline]
#[track_caller]
pub fn require(condition: bool, violation: impl FnOnce() -> Violation) {
    if let Err(v) = evaluate(condition, violation) {
        fail(v);
    }
}

/// Unwrap a checked result, failing the contract on `Err`.
#[inline]
#[track_caller]
pub fn enforce<T>(result: Result<T, Violation>) -> T {
    match result {
        Ok(value) => value,
        Err(v) => fail(v),
    }
}

/// Fail the contract unconditionally.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fail(violation: Violation) -> ! {
    let location = Location::caller();
    match POLICY {
        Policy::Panic => panic!("Contract violation: {} at {}", violation, location),
        Policy::Abort => {
            eprintln!("Contract violation: {} at {}", violation, location);
            std::process::abort()
        }
    }
}
