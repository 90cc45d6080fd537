// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode re-checks of the view invariants.
//!
//! The public operations already validate their arguments through
//! [`crate::contract`]. These checks run afterwards, on the parts a view is about to be
//! assembled from, and catch arithmetic slips inside the crate itself:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`).
//! 2. Independent of the contract policy: a failure here is a bug in this crate, never
//!    in the caller.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Check                     | Invariant                                           |
//! |---------------------------|-----------------------------------------------------|
//! | `check_span_well_formed`  | `len > 0` implies a non-null, aligned data pointer  |
//! | `check_subview_within`    | `offset + count <= parent_len`                      |
//! | `check_byte_view_law`     | `byte_len == element_len * size_of::<T>()`         |
//! | `check_fixed_extent`      | a fixed extent always reports its own count         |

// Views are at most one word for the pointer and one for the count.
const _: () = {
    assert!(std::mem::size_of::<crate::Fixed<64>>() == 0);
    assert!(std::mem::size_of::<crate::Dynamic>() == std::mem::size_of::<usize>());
};

/// Check the pointer half of a view about to be built.
///
/// # Panics (debug builds only)
/// Panics if `len > 0` and `ptr` is null or misaligned for `T`.
#[inline]
pub fn check_span_well_formed<T>(ptr: *const T, len: usize) {
    if len == 0 {
        return;
    }
    debug_assert!(
        !ptr.is_null(),
        "Contract violation: Span.WellFormed - null data with len {}",
        len
    );
    debug_assert!(
        ptr.align_offset(std::mem::align_of::<T>()) == 0,
        "Contract violation: Span.WellFormed - data {:p} misaligned for align {}",
        ptr,
        std::mem::align_of::<T>()
    );
}

/// Check that a sub-view lies inside its parent.
///
/// # Panics (debug builds only)
/// Panics if `offset > parent_len` or `offset + count > parent_len`.
#[inline]
pub fn check_subview_within(parent_len: usize, offset: usize, count: usize) {
    debug_assert!(
        offset <= parent_len && count <= parent_len - offset,
        "Contract violation: SubView.Within - [{}, {}+{}) escapes parent of length {}",
        offset,
        offset,
        count,
        parent_len
    );
}

/// Check the byte-view size law.
///
/// # Panics (debug builds only)
/// Panics if the byte count disagrees with the element count times the element size.
#[inline]
pub fn check_byte_view_law(element_len: usize, element_size: usize, byte_len: usize) {
    debug_assert!(
        element_len.checked_mul(element_size) == Some(byte_len),
        "Contract violation: ByteView.SizeLaw - {} elements of {} bytes viewed as {} bytes",
        element_len,
        element_size,
        byte_len
    );
}

/// Check that a statically known extent agrees with the reported length.
///
/// # Panics (debug builds only)
/// Panics if `fixed` is `Some(n)` and `n != len`.
#[inline]
pub fn check_fixed_extent(fixed: Option<usize>, len: usize) {
    if let Some(n) = fixed {
        debug_assert!(
            n == len,
            "Contract violation: Extent.Fixed - static extent {} reports length {}",
            n,
            len
        );
    }
}
