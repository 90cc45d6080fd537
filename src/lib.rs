// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounds-checked, non-owning views over contiguous memory.
//!
//! A [`Span`] is a pointer and an element count that travel together, validated on every
//! access. It replaces `(ptr, len)` and `(first, last)` pairs at function boundaries
//! with one value that knows its own bounds, and it never owns, allocates or frees.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  extent.rs  │────▶│   span/      │────▶│   bytes.rs   │
//! │ (Fixed<N>,  │     │ (Span,       │     │ (as_bytes,   │
//! │  Dynamic)   │     │  SpanMut)    │     │  writeable)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲              │         │
//! ┌─────────────┐       ▼         ▼
//! │   cast.rs   │  ┌──────────┐ ┌──────────────────────────┐
//! │ (ElementFrom│  │cursor.rs │ │        verify/           │
//! │  rules)     │  │ (Cursor, │ │ (SpanInvariants, debug   │
//! └─────────────┘  │  Iter)   │ │  re-checks)              │
//!                  └──────────┘ └──────────────────────────┘
//!        everything ──▶ contract.rs (require predicate, or stop)
//! ```
//!
//! # Extents
//!
//! | Extent       | Known        | `size_of::<Span<T, E>>()` |
//! |--------------|--------------|---------------------------|
//! | `Fixed<N>`   | compile time | one pointer               |
//! | `Dynamic`    | runtime      | pointer + `usize`         |
//!
//! # Contract policy
//!
//! Out-of-range indices, sub-views past the end, mismatched fixed extents and cursor
//! misuse all fail the contract. By default that prints a diagnostic and aborts; with
//! `--features catchable-contracts` (and in this crate's unit tests) it panics instead.
//! Every checked operation also has a `try_*` twin returning [`Violation`].
//!
//! # Usage
//!
//! ```
//! use checked_span::{as_bytes, Span, SpanMut};
//!
//! let mut data = [10, 20, 30, 40, 50];
//!
//! let span = Span::from_array(&data);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.first(2), [10, 20]);
//! assert_eq!(span.last(2), [40, 50]);
//! assert_eq!(as_bytes(span.subspan(1, 3)).len(), 3 * std::mem::size_of::<i32>());
//!
//! let mut writable = SpanMut::from_array(&mut data);
//! writable[0] = 99;
//! assert_eq!(data[0], 99);
//! ```

// Module declarations
#[allow(unsafe_code)]
mod byte;
#[allow(unsafe_code)]
mod bytes;
#[allow(unsafe_code)]
pub mod cast;
pub mod contract;
pub mod cursor;
pub mod error;
pub mod extent;
pub mod narrow;
#[allow(unsafe_code)]
pub mod span;
pub mod verify;

pub mod testing;

// Re-exports for public API
pub use byte::{Byte, Pod};
pub use bytes::{as_bytes, as_writeable_bytes};
pub use cast::{ElementFrom, ElementFromMut};
pub use cursor::{
    Cursor, CursorMut, Iter, RandomAccessCursor, RandomAccessCursorMut, ReverseCursor,
};
pub use error::Violation;
pub use extent::{extents_compatible, ByteExtent, Dynamic, Extent, ExtentFrom, Fixed};
pub use span::{make_span, make_span_mut, Span, SpanMut};
pub use verify::{validate, SpanInvariants};
