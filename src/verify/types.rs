// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant reports for live views.
//!
//! A view built through the public API satisfies every invariant below by construction.
//! [`SpanInvariants::inspect`] re-derives them from the view's observable parts, which
//! is what tests and fuzz targets want after a long chain of sub-views and conversions.
//!
//! | Invariant              | Meaning                                         |
//! |------------------------|-------------------------------------------------|
//! | `data_present`         | `len > 0` implies a non-null data pointer        |
//! | `data_aligned`         | `len > 0` implies `ptr % align_of::<T>() == 0`  |
//! | `fixed_extent_agrees`  | `E::STATIC == Some(n)` implies `len == n`       |
//! | `byte_len_fits`        | `len * size_of::<T>()` fits in `isize`          |
//!
//! # Example
//!
//! ```
//! use checked_span::{verify::SpanInvariants, Span};
//!
//! let data = [1u32, 2, 3];
//! let report = SpanInvariants::inspect(&Span::from_array(&data).last(2));
//! assert!(report.holds());
//! assert_eq!(report.len, 2);
//! ```

use crate::error::Violation;
use crate::extent::Extent;
use crate::span::Span;
use std::mem;

/// Which view invariants a particular view satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanInvariants {
    /// Element count.
    pub len: usize,
    /// Data pointer address.
    pub addr: usize,
    pub align: usize,
    pub element_size: usize,
    /// The compile-time extent, if any.
    pub fixed_extent: Option<usize>,
    pub data_present: bool,
    pub data_aligned: bool,
    pub fixed_extent_agrees: bool,
    pub byte_len_fits: bool,
}

impl SpanInvariants {
    /// Describe the invariants of `span`.
    pub fn inspect<T, E: Extent>(span: &Span<'_, T, E>) -> Self {
        let len = span.len();
        let ptr = span.as_ptr();
        let empty = len == 0;
        let byte_len = len.checked_mul(mem::size_of::<T>());
        Self {
            len,
            addr: ptr as usize,
            align: mem::align_of::<T>(),
            element_size: mem::size_of::<T>(),
            fixed_extent: E::STATIC,
            data_present: empty || !ptr.is_null(),
            data_aligned: empty || ptr.align_offset(mem::align_of::<T>()) == 0,
            fixed_extent_agrees: E::STATIC.map_or(true, |n| n == len),
            byte_len_fits: byte_len.is_some_and(|b| isize::try_from(b).is_ok()),
        }
    }

    /// Whether every invariant holds.
    pub fn holds(&self) -> bool {
        self.data_present && self.data_aligned && self.fixed_extent_agrees && self.byte_len_fits
    }

    /// The first broken invariant, as the violation that would have rejected it.
    pub fn first_violation(&self) -> Option<Violation> {
        if !self.data_present {
            return Some(Violation::NullData { count: self.len });
        }
        if !self.data_aligned {
            return Some(Violation::MisalignedData {
                addr: self.addr,
                align: self.align,
            });
        }
        if let (false, Some(expected)) = (self.fixed_extent_agrees, self.fixed_extent) {
            return Some(Violation::ExtentMismatch {
                expected,
                actual: self.len,
            });
        }
        if !self.byte_len_fits {
            return Some(Violation::ByteLengthOverflow {
                count: self.len,
                element_size: self.element_size,
            });
        }
        None
    }

    /// Human-readable statements of the invariants checked.
    pub fn statements() -> &'static [&'static str] {
        &[
            "data_present: len > 0 ⇒ data ≠ null",
            "data_aligned: len > 0 ⇒ data % align_of T = 0",
            "fixed_extent_agrees: STATIC = some n ⇒ len = n",
            "byte_len_fits: len * size_of T ≤ isize::MAX",
        ]
    }
}

/// Validate a view, returning the first broken invariant.
pub fn validate<T, E: Extent>(span: &Span<'_, T, E>) -> Result<(), Violation> {
    match SpanInvariants::inspect(span).first_violation() {
        None => Ok(()),
        Some(v) => Err(v),
    }
}
