// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for checked-span bounds arithmetic.
//!
//! This standalone crate extracts the index, sub-view, cursor and byte-length
//! checks and proves that whatever they accept stays inside the parent view,
//! for every input.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no check overflows or underflows for any operand
//! 2. **Containment**: an accepted sub-view satisfies `offset + count <= len`
//! 3. **Composition**: a sub-view of an accepted sub-view stays in the original
//! 4. **Cursor range**: an accepted cursor step lands in `[0, len]`
//! 5. **Byte law**: an accepted byte length equals `count * size` exactly

/// Why a check rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    Index,
    SubView,
    Cursor,
    Overflow,
}

// ============================================================================
// BOUNDS CHECKS (copied from src/span/mod.rs and src/cursor.rs)
// ============================================================================

/// Signed element access: `0 <= index < len`.
pub fn check_signed_index(index: isize, len: usize) -> Result<usize, Rejected> {
    let index = usize::try_from(index).map_err(|_| Rejected::Index)?;
    if index < len {
        Ok(index)
    } else {
        Err(Rejected::Index)
    }
}

/// `subspan(offset, count)`, with `None` meaning "to the end". Returns the count.
pub fn check_subspan(offset: usize, count: Option<usize>, len: usize) -> Result<usize, Rejected> {
    if offset > len {
        return Err(Rejected::SubView);
    }
    let rest = len - offset;
    match count {
        None => Ok(rest),
        Some(count) if count <= rest => Ok(count),
        Some(_) => Err(Rejected::SubView),
    }
}

/// `last(count)`: returns the offset of the first kept element.
pub fn check_last(count: usize, len: usize) -> Result<usize, Rejected> {
    if count <= len {
        Ok(len - count)
    } else {
        Err(Rejected::SubView)
    }
}

/// Move a cursor at `index` by `n`, staying inside `[0, len]`.
pub fn step(index: usize, len: usize, n: isize) -> Result<usize, Rejected> {
    index
        .checked_add_signed(n)
        .filter(|&moved| moved <= len)
        .ok_or(Rejected::Cursor)
}

/// `count * element_size`, rejecting overflow.
pub fn byte_len(count: usize, element_size: usize) -> Result<usize, Rejected> {
    count.checked_mul(element_size).ok_or(Rejected::Overflow)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify an accepted signed index is a valid position.
    #[kani::proof]
    fn verify_signed_index_in_bounds() {
        let index: isize = kani::any();
        let len: usize = kani::any();

        match check_signed_index(index, len) {
            Ok(i) => {
                kani::assert(index >= 0, "negative index accepted");
                kani::assert(i < len, "accepted index must be below len");
                kani::assert(i as isize == index, "index must not change value");
            }
            Err(_) => kani::assert(index < 0 || index as usize >= len, "valid index rejected"),
        }
    }

    /// Verify check_subspan never panics and accepts exactly the contained windows.
    #[kani::proof]
    fn verify_subspan_containment() {
        let offset: usize = kani::any();
        let count: usize = kani::any();
        let len: usize = kani::any();

        match check_subspan(offset, Some(count), len) {
            Ok(n) => {
                kani::assert(n == count, "explicit count must be kept");
                kani::assert(offset <= len, "offset beyond len accepted");
                kani::assert(count <= len - offset, "window past the end accepted");
                kani::assert(offset.checked_add(count).is_some(), "window end overflows");
            }
            Err(_) => kani::assert(
                offset > len || count > len - offset,
                "contained window rejected",
            ),
        }
    }

    /// Verify "to the end" windows cover exactly the rest of the view.
    #[kani::proof]
    fn verify_subspan_to_end() {
        let offset: usize = kani::any();
        let len: usize = kani::any();

        if let Ok(n) = check_subspan(offset, None, len) {
            kani::assert(offset + n == len, "tail window must end at len");
        }
    }

    /// Verify a window of an accepted window lies in the original view.
    #[kani::proof]
    fn verify_subspan_composition() {
        let len: usize = kani::any();
        let (o1, c1): (usize, usize) = (kani::any(), kani::any());
        let (o2, c2): (usize, usize) = (kani::any(), kani::any());

        if let Ok(outer) = check_subspan(o1, Some(c1), len) {
            if let Ok(inner) = check_subspan(o2, Some(c2), outer) {
                let absolute = o1 + o2;
                kani::assert(absolute <= len, "nested offset escapes the view");
                kani::assert(inner <= len - absolute, "nested window escapes the view");
                kani::assert(
                    check_subspan(absolute, Some(inner), len) == Ok(inner),
                    "nested window must equal the direct window",
                );
            }
        }
    }

    /// Verify last(count) starts where the kept suffix starts.
    #[kani::proof]
    fn verify_last_offset() {
        let count: usize = kani::any();
        let len: usize = kani::any();

        if let Ok(offset) = check_last(count, len) {
            kani::assert(offset + count == len, "suffix must end at len");
        }
    }

    /// Verify cursor steps never leave [0, len] and never wrap.
    #[kani::proof]
    fn verify_cursor_step_in_range() {
        let len: usize = kani::any();
        let index: usize = kani::any_where(|&i| i <= len);
        let n: isize = kani::any();

        if let Ok(moved) = step(index, len, n) {
            kani::assert(moved <= len, "cursor stepped past the end");
            kani::assert(
                moved as i128 == index as i128 + n as i128,
                "cursor step must be exact",
            );
        }
    }

    /// Verify stepping forward then back returns to the start.
    #[kani::proof]
    fn verify_cursor_step_inverse() {
        let len: usize = kani::any();
        let index: usize = kani::any_where(|&i| i <= len);
        let n: isize = kani::any_where(|&n: &isize| n != isize::MIN);

        if let Ok(moved) = step(index, len, n) {
            kani::assert(step(moved, len, -n) == Ok(index), "step is not invertible");
        }
    }

    /// Verify byte lengths are exact products and overflow is always caught.
    #[kani::proof]
    fn verify_byte_len_exact() {
        let count: usize = kani::any();
        let size: usize = kani::any_where(|&s| s <= 64);

        match byte_len(count, size) {
            Ok(bytes) => kani::assert(
                bytes as u128 == count as u128 * size as u128,
                "byte length must be the exact product",
            ),
            Err(_) => kani::assert(
                count as u128 * size as u128 > usize::MAX as u128,
                "representable byte length rejected",
            ),
        }
    }
}

// ============================================================================
// REGULAR TESTS (run with cargo test)
// ============================================================================
