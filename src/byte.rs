// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw storage bytes and the element types that may be viewed as them.
//!
//! [`Byte`] is one unit of untyped memory. It is deliberately not `u8`: it has no
//! `Display`, no character conversions and no arithmetic, so a byte-view can't be
//! mistaken for text or numbers without an explicit `to_u8`.
//!
//! [`Pod`] marks element types whose object representation is fully initialized and
//! where every bit pattern is a valid value. Only those may be reinterpreted as bytes.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

// Byte-views rely on one element per address with no alignment requirement.
const _: () = {
    assert!(std::mem::size_of::<Byte>() == 1);
    assert!(std::mem::align_of::<Byte>() == 1);
};

/// One byte of untyped storage.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Byte(u8);

impl Byte {
    /// Wrap a raw octet.
    pub const fn new(value: u8) -> Self {
        Byte(value)
    }

    /// The octet's integer value.
    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Byte({:#04x})", self.0)
    }
}

impl From<u8> for Byte {
    fn from(value: u8) -> Self {
        Byte(value)
    }
}

impl From<Byte> for u8 {
    fn from(byte: Byte) -> Self {
        byte.0
    }
}

impl BitAnd for Byte {
    type Output = Byte;
    fn bitand(self, rhs: Byte) -> Byte {
        Byte(self.0 & rhs.0)
    }
}

impl BitOr for Byte {
    type Output = Byte;
    fn bitor(self, rhs: Byte) -> Byte {
        Byte(self.0 | rhs.0)
    }
}

impl BitXor for Byte {
    type Output = Byte;
    fn bitxor(self, rhs: Byte) -> Byte {
        Byte(self.0 ^ rhs.0)
    }
}

impl Not for Byte {
    type Output = Byte;
    fn not(self) -> Byte {
        Byte(!self.0)
    }
}

impl BitAndAssign for Byte {
    fn bitand_assign(&mut self, rhs: Byte) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Byte {
    fn bitor_assign(&mut self, rhs: Byte) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Byte {
    fn bitxor_assign(&mut self, rhs: Byte) {
        self.0 ^= rhs.0;
    }
}

/// Plain old data: no padding, no invalid bit patterns, no drop glue.
///
/// # Safety
///
/// Implementors must guarantee that
/// - every byte of a value is initialized (no padding, no `MaybeUninit` fields), and
/// - any byte sequence of `size_of::<Self>()` bytes is a valid value.
///
/// `bool`, `char`, references and enums fail the second rule and must not implement it.
pub unsafe trait Pod: Copy + 'static {}

macro_rules! impl_pod {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitive numeric types have no padding and accept every bit pattern.
            unsafe impl Pod for $ty {}
        )*
    };
}

impl_pod!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// SAFETY: arrays are laid out without padding between elements.
unsafe impl<T: Pod, const N: usize> Pod for [T; N] {}
