// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Element-type compatibility between views.
//!
//! A `Span<T>` may be reinterpreted as a `Span<U>` over the same memory, with the same
//! element count, when `U: ElementFrom<T>`:
//!
//! | Rule                         | Example                              | Mutable |
//! |------------------------------|--------------------------------------|---------|
//! | identity                     | `T` from `T`                         | yes     |
//! | pointer conversion           | `*const P` from `*mut P` / `NonNull` | no      |
//! | same-size integer            | `u32` from `i32`, `usize` from `isize` | yes   |
//! | raw bytes                    | [`Byte`] from any [`Pod`]            | yes     |
//! | bytes back to octets         | `u8` from [`Byte`]                   | yes     |
//!
//! Shared-to-shared conversions need [`ElementFrom`]; exclusive views also need
//! [`ElementFromMut`], because writes must produce valid source values. Anything else is
//! a build error:
//!
//! ```compile_fail
//! use checked_span::Span;
//!
//! let floats = [1.0f32, 2.0];
//! let span = Span::from_slice(&floats);
//! let _ints: Span<'_, i32> = span.cast();
//! ```

use crate::byte::{Byte, Pod};
use std::ptr::NonNull;

/// `Self` may be read wherever a `Src` is stored.
///
/// # Safety
///
/// For every initialized `Src` value, its first `size_of::<Self>()` bytes must be a valid
/// `Self`, with `size_of::<Self>() <= size_of::<Src>()` and
/// `align_of::<Self>() <= align_of::<Src>()`.
pub unsafe trait ElementFrom<Src> {}

/// `Self` may be read and written wherever a `Src` is stored.
///
/// # Safety
///
/// In addition to [`ElementFrom`], every valid `Self` written over the first
/// `size_of::<Self>()` bytes of a `Src` must leave a valid `Src` behind.
pub unsafe trait ElementFromMut<Src>: ElementFrom<Src> {}

// SAFETY: identical types share layout and validity.
unsafe impl<T> ElementFrom<T> for T {}
// SAFETY: identical types share layout and validity.
unsafe impl<T> ElementFromMut<T> for T {}

// SAFETY: `*mut P` and `*const P` have the same layout and every value is valid for both.
unsafe impl<P: ?Sized> ElementFrom<*mut P> for *const P {}
// SAFETY: `NonNull<P>` is a transparent non-null `*const P`.
unsafe impl<P: ?Sized> ElementFrom<NonNull<P>> for *const P {}
// SAFETY: as above; a `*mut P` read from a `NonNull<P>` is simply non-null.
unsafe impl<P: ?Sized> ElementFrom<NonNull<P>> for *mut P {}

macro_rules! same_size_integers {
    ($($a:ty => $b:ty),* $(,)?) => {
        $(
            // SAFETY: same size and alignment, every bit pattern valid for both.
            unsafe impl ElementFrom<$a> for $b {}
            // SAFETY: as above.
            unsafe impl ElementFromMut<$a> for $b {}
            // SAFETY: as above.
            unsafe impl ElementFrom<$b> for $a {}
            // SAFETY: as above.
            unsafe impl ElementFromMut<$b> for $a {}
        )*
    };
}

same_size_integers!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

// SAFETY: `Pod` values are fully initialized, `Byte` has size and alignment 1.
unsafe impl<S: Pod> ElementFrom<S> for Byte {}
// SAFETY: `Pod` accepts every bit pattern, so arbitrary byte writes keep it valid.
unsafe impl<S: Pod> ElementFromMut<S> for Byte {}

// SAFETY: `Byte` is a transparent `u8`.
unsafe impl ElementFrom<Byte> for u8 {}
// SAFETY: every `u8` is a valid `Byte`.
unsafe impl ElementFromMut<Byte> for u8 {}

/// Build-time check of the layout half of the [`ElementFrom`] contract.
///
/// Evaluated when a cast is instantiated, so a bad manual impl cannot reinterpret
/// fewer bytes than it reads.
pub(crate) const fn assert_layout<Src, Dst>() {
    assert!(
        std::mem::size_of::<Dst>() <= std::mem::size_of::<Src>(),
        "element cast widens the element: reads would run past the source"
    );
    assert!(
        std::mem::align_of::<Dst>() <= std::mem::align_of::<Src>(),
        "element cast raises alignment"
    );
}
