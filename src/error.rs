// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The single error type for every precondition a view can violate.
//!
//! Checked operations (`try_first`, `try_at`, `Extent::try_from_count`, ...) return it
//! directly. Their unchecked twins hand it to [`crate::contract`], which turns it into
//! an abort or a panic depending on the build policy.

use std::fmt;

/// A violated precondition on a span, extent, or cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Element access outside `[0, len)`.
    IndexOutOfRange { index: isize, len: usize },
    /// A fixed extent was built from a count that disagrees with it.
    ExtentMismatch { expected: usize, actual: usize },
    /// A signed element count was negative.
    NegativeCount { count: isize },
    /// A null data pointer was paired with a non-zero count.
    NullData { count: usize },
    /// A data pointer is not aligned for the element type.
    MisalignedData { addr: usize, align: usize },
    /// `first`/`last`/`subspan` arguments reach past the end of the view.
    SubviewOutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },
    /// The end pointer of a pointer range precedes the start pointer.
    PointerRangeReversed { first: usize, last: usize },
    /// The end pointer is not a whole number of elements past the start.
    PointerRangeMisaligned { bytes: usize, element_size: usize },
    /// An address handed to `index_of_ptr` lies outside the view.
    PointerOutOfRange {
        addr: usize,
        start: usize,
        size_bytes: usize,
    },
    /// A cursor moved or dereferenced outside `[0, len]` (or `[0, len)` for reads).
    CursorOutOfRange { index: isize, len: usize },
    /// A default-constructed cursor was dereferenced or moved.
    NullCursor,
    /// Two cursors bound to different span instances were ordered or subtracted.
    ForeignCursor,
    /// `count * size_of::<T>()` does not fit in `usize`.
    ByteLengthOverflow { count: usize, element_size: usize },
    /// A numeric conversion would change the value.
    NarrowingLoss { value: i128 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for span of length {}", index, len)
            }
            Violation::ExtentMismatch { expected, actual } => {
                write!(
                    f,
                    "fixed extent {} constructed from count {}",
                    expected, actual
                )
            }
            Violation::NegativeCount { count } => {
                write!(f, "element count {} is negative", count)
            }
            Violation::NullData { count } => {
                write!(f, "null data pointer with count {} > 0", count)
            }
            Violation::MisalignedData { addr, align } => {
                write!(f, "data pointer {:#x} is not {}-byte aligned", addr, align)
            }
            Violation::SubviewOutOfRange { offset, count, len } => {
                write!(
                    f,
                    "sub-view [{}, {}+{}) exceeds span of length {}",
                    offset, offset, count, len
                )
            }
            Violation::PointerRangeReversed { first, last } => {
                write!(
                    f,
                    "pointer range end {:#x} precedes start {:#x}",
                    last, first
                )
            }
            Violation::PointerRangeMisaligned {
                bytes,
                element_size,
            } => {
                write!(
                    f,
                    "pointer range of {} bytes is not a multiple of element size {}",
                    bytes, element_size
                )
            }
            Violation::PointerOutOfRange {
                addr,
                start,
                size_bytes,
            } => {
                write!(
                    f,
                    "address {:#x} outside span [{:#x}, {:#x}+{})",
                    addr, start, start, size_bytes
                )
            }
            Violation::CursorOutOfRange { index, len } => {
                write!(
                    f,
                    "cursor position {} outside span of length {}",
                    index, len
                )
            }
            Violation::NullCursor => write!(f, "cursor is not bound to a span"),
            Violation::ForeignCursor => {
                write!(f, "cursors are bound to different span instances")
            }
            Violation::ByteLengthOverflow {
                count,
                element_size,
            } => {
                write!(
                    f,
                    "{} elements of {} bytes overflow usize",
                    count, element_size
                )
            }
            Violation::NarrowingLoss { value } => {
                write!(f, "narrowing conversion of {} loses its value", value)
            }
        }
    }
}

impl std::error::Error for Violation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operands() {
        let v = Violation::IndexOutOfRange { index: -1, len: 5 };
        assert_eq!(v.to_string(), "index -1 out of range for span of length 5");

        let v = Violation::SubviewOutOfRange {
            offset: 3,
            count: 4,
            len: 5,
        };
        assert!(v.to_string().contains("exceeds span of length 5"));
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(Violation::NullCursor);
        assert_eq!(err.to_string(), "cursor is not bound to a span");
    }
}
