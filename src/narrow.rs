// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked conversions between signed and unsigned counts.

use crate::contract;
use crate::error::Violation;

/// Convert a signed value to `usize`, rejecting negatives.
pub fn try_to_usize(value: isize) -> Result<usize, Violation> {
    usize::try_from(value).map_err(|_| Violation::NarrowingLoss {
        value: value as i128,
    })
}

/// Convert a `usize` to `isize`, rejecting values above `isize::MAX`.
pub fn try_to_isize(value: usize) -> Result<isize, Violation> {
    isize::try_from(value).map_err(|_| Violation::NarrowingLoss {
        value: value as i128,
    })
}

/// [`try_to_usize`], failing the contract on loss.
#[track_caller]
pub fn to_usize(value: isize) -> usize {
    contract::enforce(try_to_usize(value))
}

/// [`try_to_isize`], failing the contract on loss.
#[track_caller]
pub fn to_isize(value: usize) -> isize {
    contract::enforce(try_to_isize(value))
}

/// Clamp a position into `isize` for diagnostics.
///
/// Positions above `isize::MAX` never address a real element, so clamping keeps them
/// out of range.
#[inline]
pub(crate) fn saturating_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}
