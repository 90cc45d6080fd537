// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The views themselves.
//!
//! Two kinds, mirroring `&[T]` and `&mut [T]`:
//!
//! - [`Span`]: shared, read-only, `Copy`.
//! - [`SpanMut`]: exclusive, the only way to write through a view; move-only, with
//!   [`SpanMut::reborrow`] for temporary sub-borrows and `From<SpanMut> for Span` for the
//!   mutable-to-const direction.
//!
//! Both are a raw data pointer plus an [`Extent`](crate::extent::Extent). With a
//! [`Fixed`](crate::extent::Fixed) extent that is one machine word.
//!
//! # Invariants (hold for every live view)
//!
//! - `len() > 0` implies the data pointer is non-null and aligned.
//! - every element access index `i` satisfies `i < len()`.
//! - a `Fixed<N>` view has `len() == N`.
//!
//! Safe constructors borrow from real storage, so the pointer is valid for `'a`. The
//! `unsafe` raw-pointer constructors check null, alignment and extent agreement, and leave
//! validity and lifetime to the caller.

mod compare;
mod convert;
mod exclusive;
mod shared;

pub use exclusive::SpanMut;
pub use shared::Span;

use crate::contract;
use crate::error::Violation;
use crate::narrow::saturating_isize;
use std::mem;

/// A shared view over a container's elements.
///
/// The "pass any contiguous container" helper: vectors, arrays, slices, boxed slices.
pub fn make_span<T, C>(container: &C) -> Span<'_, T>
where
    C: AsRef<[T]> + ?Sized,
{
    Span::from_slice(container.as_ref())
}

/// An exclusive view over a container's elements.
pub fn make_span_mut<T, C>(container: &mut C) -> SpanMut<'_, T>
where
    C: AsMut<[T]> + ?Sized,
{
    SpanMut::from_slice(container.as_mut())
}

// ============================================================================
// PRECONDITIONS SHARED BY BOTH VIEW KINDS
// ============================================================================

/// Element access: `index < len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Violation> {
    contract::evaluate(index < len, || Violation::IndexOutOfRange {
        index: saturating_isize(index),
        len,
    })
}

/// Signed element access: `0 <= index < len`.
#[inline]
pub(crate) fn check_signed_index(index: isize, len: usize) -> Result<usize, Violation> {
    let out = || Violation::IndexOutOfRange { index, len };
    let index = usize::try_from(index).map_err(|_| out())?;
    contract::evaluate(index < len, out)?;
    Ok(index)
}

/// `first(count)`: `count <= len`.
#[inline]
pub(crate) fn check_first(count: usize, len: usize) -> Result<(), Violation> {
    contract::evaluate(count <= len, || Violation::SubviewOutOfRange {
        offset: 0,
        count,
        len,
    })
}

/// `last(count)`: `count <= len`; returns the offset of the first kept element.
#[inline]
pub(crate) fn check_last(count: usize, len: usize) -> Result<usize, Violation> {
    contract::evaluate(count <= len, || Violation::SubviewOutOfRange {
        offset: len.saturating_sub(count),
        count,
        len,
    })?;
    Ok(len - count)
}

/// `subspan(offset, count)`: `offset <= len` and `offset + count <= len`.
///
/// `count == None` means "to the end"; returns the resulting count.
#[inline]
pub(crate) fn check_subspan(
    offset: usize,
    count: Option<usize>,
    len: usize,
) -> Result<usize, Violation> {
    let out = |count: usize| Violation::SubviewOutOfRange { offset, count, len };
    contract::evaluate(offset <= len, || out(count.unwrap_or(0)))?;
    let rest = len - offset;
    match count {
        None => Ok(rest),
        Some(count) => {
            contract::evaluate(count <= rest, || out(count))?;
            Ok(count)
        }
    }
}

/// Raw-pointer constructor preconditions: non-null and aligned whenever `count > 0`.
#[inline]
pub(crate) fn check_data<T>(ptr: *const T, count: usize) -> Result<(), Violation> {
    if count == 0 {
        return Ok(());
    }
    contract::evaluate(!ptr.is_null(), || Violation::NullData { count })?;
    let align = mem::align_of::<T>();
    contract::evaluate(ptr.align_offset(align) == 0, || Violation::MisalignedData {
        addr: ptr as usize,
        align,
    })
}

/// Element count between two pointers into the same allocation.
#[inline]
pub(crate) fn check_ptr_range<T>(first: *const T, last: *const T) -> Result<usize, Violation> {
    let (start, end) = (first as usize, last as usize);
    contract::evaluate(end >= start, || Violation::PointerRangeReversed {
        first: start,
        last: end,
    })?;
    let bytes = end - start;
    let element_size = mem::size_of::<T>();
    if element_size == 0 {
        contract::evaluate(bytes == 0, || Violation::PointerRangeMisaligned {
            bytes,
            element_size,
        })?;
        return Ok(0);
    }
    contract::evaluate(bytes % element_size == 0, || {
        Violation::PointerRangeMisaligned {
            bytes,
            element_size,
        }
    })?;
    Ok(bytes / element_size)
}

/// Offset of `ptr` within `[start, start + len)` elements.
#[inline]
pub(crate) fn check_ptr_within<T>(
    start: *const T,
    len: usize,
    ptr: *const T,
) -> Result<usize, Violation> {
    let element_size = mem::size_of::<T>();
    let (base, addr) = (start as usize, ptr as usize);
    let size_bytes = len * element_size;
    contract::evaluate(
        !start.is_null() && addr >= base && addr - base < size_bytes,
        || Violation::PointerOutOfRange {
            addr,
            start: base,
            size_bytes,
        },
    )?;
    Ok((addr - base) / element_size)
}
