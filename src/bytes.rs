// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reinterpreting a view's storage as raw bytes.
//!
//! Both functions return a borrow of the same memory; nothing is copied. The byte
//! extent is `len * size_of::<T>()` and stays static when the element extent was:
//!
//! ```
//! use checked_span::{as_bytes, Byte, ByteExtent, Fixed, Span};
//!
//! let words = [0x0102_0304u32, 0];
//! let bytes: Span<'_, Byte, ByteExtent<Fixed<2>, u32>> = as_bytes(Span::from_array(&words));
//! assert_eq!(bytes.len(), 8);
//! ```
//!
//! Writable bytes need a writable view; a read-only one does not build:
//!
//! ```compile_fail
//! use checked_span::{as_writeable_bytes, Span};
//!
//! let words = [1u32, 2];
//! let _ = as_writeable_bytes(Span::from_slice(&words));
//! ```

use crate::byte::{Byte, Pod};
use crate::contract;
use crate::extent::Extent;
use crate::span::{Span, SpanMut};
use crate::verify::contracts::check_byte_view_law;
use std::mem;

/// The bytes of `span`, read-only.
#[track_caller]
pub fn as_bytes<'a, T, E>(span: Span<'a, T, E>) -> Span<'a, Byte, E::Bytes<T>>
where
    T: Pod,
    E: Extent,
{
    let extent = contract::enforce(span.extent().try_to_bytes::<T>());
    check_byte_view_law(span.len(), mem::size_of::<T>(), extent.size());
    // SAFETY: `T: Pod` has no padding, so all `size_bytes()` bytes behind the view are
    // initialized, and `Byte` has alignment 1.
    unsafe { Span::from_parts(span.as_ptr().cast::<Byte>(), extent) }
}

/// The bytes of `span`, writable.
///
/// Any byte pattern written leaves valid `T` values behind because `T: Pod`.
#[track_caller]
pub fn as_writeable_bytes<'a, T, E>(
    mut span: SpanMut<'a, T, E>,
) -> SpanMut<'a, Byte, E::Bytes<T>>
where
    T: Pod,
    E: Extent,
{
    let extent = contract::enforce(span.extent().try_to_bytes::<T>());
    check_byte_view_law(span.len(), mem::size_of::<T>(), extent.size());
    // SAFETY: as for `as_bytes`, and the exclusive borrow moves from `span` to the
    // result.
    unsafe { SpanMut::from_parts(span.as_mut_ptr().cast::<Byte>(), extent) }
}
