// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extents: how many elements a view covers, known at compile time or at runtime.
//!
//! | Extent            | Storage        | `STATIC`                      |
//! |-------------------|----------------|-------------------------------|
//! | [`Fixed<N>`]      | zero-sized     | `Some(N)`                     |
//! | [`Dynamic`]       | one `usize`    | `None`                        |
//! | [`ByteExtent<E, T>`] | same as `E` | `E::STATIC * size_of::<T>()` |
//!
//! A `Span<T, Fixed<N>>` is therefore a single pointer, while `Span<T, Dynamic>` is a
//! pointer and a count.
//!
//! # Conversions
//!
//! [`ExtentFrom`] decides which extent may be built from which:
//!
//! - anything widens to [`Dynamic`];
//! - [`Dynamic`] narrows to [`Fixed<N>`] after a runtime check of the carried count;
//! - [`Fixed<M>`] to [`Fixed<N>`] only when `M == N`. A mismatch is a build error, raised
//!   when the conversion is instantiated:
//!
//! ```ignore
//! // error[E0080]: evaluation of constant value failed
//! //   fixed extents differ: the conversion can never succeed
//! let _ = <Fixed<4> as ExtentFrom<Fixed<3>>>::try_convert(Fixed::<3>);
//! ```

use crate::contract;
use crate::error::Violation;
use crate::narrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

mod sealed {
    pub trait Sealed {}
}

/// The element count of a view.
pub trait Extent: Copy + fmt::Debug + sealed::Sealed {
    /// The count when it is known at compile time.
    const STATIC: Option<usize>;

    /// The extent of a byte-view over elements of type `T` with this extent.
    type Bytes<T>: Extent;

    /// The element count.
    fn size(&self) -> usize;

    /// Build an extent describing `count` elements.
    fn try_from_count(count: usize) -> Result<Self, Violation>;

    /// The extent of the same memory measured in bytes of `T`-sized elements.
    fn try_to_bytes<T>(self) -> Result<Self::Bytes<T>, Violation>;

    /// [`Extent::try_from_count`], failing the contract on mismatch.
    #[track_caller]
    fn from_count(count: usize) -> Self {
        contract::enforce(Self::try_from_count(count))
    }
}

// ============================================================================
// FIXED EXTENT
// ============================================================================

/// An extent of exactly `N` elements, carried in the type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed<const N: usize>;

impl<const N: usize> sealed::Sealed for Fixed<N> {}

impl<const N: usize> Extent for Fixed<N> {
    const STATIC: Option<usize> = Some(N);

    type Bytes<T> = ByteExtent<Self, T>;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn try_from_count(count: usize) -> Result<Self, Violation> {
        contract::evaluate(count == N, || Violation::ExtentMismatch {
            expected: N,
            actual: count,
        })?;
        Ok(Fixed)
    }

    fn try_to_bytes<T>(self) -> Result<Self::Bytes<T>, Violation> {
        byte_len::<T>(N)?;
        Ok(ByteExtent::wrap(self))
    }
}

// ============================================================================
// DYNAMIC EXTENT
// ============================================================================

/// An extent carried at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dynamic {
    count: usize,
}

impl Dynamic {
    /// An extent of `count` elements.
    pub const fn new(count: usize) -> Self {
        Dynamic { count }
    }

    /// An extent from a signed count, rejecting negative values.
    pub fn try_from_signed(count: isize) -> Result<Self, Violation> {
        narrow::try_to_usize(count)
            .map(Dynamic::new)
            .map_err(|_| Violation::NegativeCount { count })
    }

    /// [`Dynamic::try_from_signed`], failing the contract on a negative count.
    #[track_caller]
    pub fn from_signed(count: isize) -> Self {
        contract::enforce(Self::try_from_signed(count))
    }
}

impl sealed::Sealed for Dynamic {}

impl Extent for Dynamic {
    const STATIC: Option<usize> = None;

    type Bytes<T> = Dynamic;

    #[inline]
    fn size(&self) -> usize {
        self.count
    }

    #[inline]
    fn try_from_count(count: usize) -> Result<Self, Violation> {
        Ok(Dynamic::new(count))
    }

    fn try_to_bytes<T>(self) -> Result<Self::Bytes<T>, Violation> {
        byte_len::<T>(self.count).map(Dynamic::new)
    }
}

// ============================================================================
// BYTE EXTENT
// ============================================================================

/// The extent of a byte-view over `E` elements of type `T`.
///
/// Keeps a statically known element count statically known after reinterpretation:
/// `ByteExtent<Fixed<4>, u32>::STATIC == Some(16)`.
pub struct ByteExtent<E, T> {
    elements: E,
    _element: PhantomData<fn() -> T>,
}

impl<E: Extent, T> ByteExtent<E, T> {
    fn wrap(elements: E) -> Self {
        ByteExtent {
            elements,
            _element: PhantomData,
        }
    }

    /// The element extent this byte extent was derived from.
    pub fn elements(&self) -> E {
        self.elements
    }
}

impl<E: Copy, T> Clone for ByteExtent<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Copy, T> Copy for ByteExtent<E, T> {}

impl<E: fmt::Debug, T> fmt::Debug for ByteExtent<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteExtent")
            .field("elements", &self.elements)
            .field("element_size", &mem::size_of::<T>())
            .finish()
    }
}

impl<E: PartialEq, T> PartialEq for ByteExtent<E, T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq, T> Eq for ByteExtent<E, T> {}

impl<E: Hash, T> Hash for ByteExtent<E, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<E: Extent, T> sealed::Sealed for ByteExtent<E, T> {}

impl<E: Extent, T> Extent for ByteExtent<E, T> {
    const STATIC: Option<usize> = match E::STATIC {
        Some(n) => Some(n * mem::size_of::<T>()),
        None => None,
    };

    type Bytes<U> = ByteExtent<Self, U>;

    #[inline]
    fn size(&self) -> usize {
        match Self::STATIC {
            Some(n) => n,
            None => self.elements.size() * mem::size_of::<T>(),
        }
    }

    fn try_from_count(count: usize) -> Result<Self, Violation> {
        let element_size = mem::size_of::<T>();
        if let Some(expected) = Self::STATIC {
            contract::evaluate(count == expected, || Violation::ExtentMismatch {
                expected,
                actual: count,
            })?;
        }
        let elements = if element_size == 0 {
            contract::evaluate(count == 0, || Violation::ExtentMismatch {
                expected: 0,
                actual: count,
            })?;
            E::try_from_count(E::STATIC.unwrap_or(0))?
        } else {
            contract::evaluate(count % element_size == 0, || {
                Violation::PointerRangeMisaligned {
                    bytes: count,
                    element_size,
                }
            })?;
            E::try_from_count(count / element_size)?
        };
        Ok(ByteExtent::wrap(elements))
    }

    fn try_to_bytes<U>(self) -> Result<Self::Bytes<U>, Violation> {
        byte_len::<U>(self.size())?;
        Ok(ByteExtent::wrap(self))
    }
}

/// `count * size_of::<T>()`, rejecting overflow.
pub(crate) fn byte_len<T>(count: usize) -> Result<usize, Violation> {
    let element_size = mem::size_of::<T>();
    count
        .checked_mul(element_size)
        .ok_or(Violation::ByteLengthOverflow {
            count,
            element_size,
        })
}

// ============================================================================
// EXTENT COMPATIBILITY
// ============================================================================

/// `Self` may be built from the extent `Src`.
///
/// Implemented exactly for the pairs that can ever succeed; the runtime part of the
/// check (dynamic to fixed) is done by [`ExtentFrom::try_convert`].
pub trait ExtentFrom<Src: Extent>: Extent {
    /// Convert, checking the count when `Src` is only known at runtime.
    fn try_convert(src: Src) -> Result<Self, Violation>;

    /// [`ExtentFrom::try_convert`], failing the contract on mismatch.
    #[track_caller]
    fn convert(src: Src) -> Self {
        contract::enforce(Self::try_convert(src))
    }
}

impl<Src: Extent> ExtentFrom<Src> for Dynamic {
    #[inline]
    fn try_convert(src: Src) -> Result<Self, Violation> {
        Ok(Dynamic::new(src.size()))
    }
}

impl<Src: Extent, const N: usize> ExtentFrom<Src> for Fixed<N> {
    #[inline]
    fn try_convert(src: Src) -> Result<Self, Violation> {
        const {
            if let Some(m) = Src::STATIC {
                assert!(m == N, "fixed extents differ: the conversion can never succeed");
            }
        }
        Self::try_from_count(src.size())
    }
}

impl<Src: Extent, E: Extent, T> ExtentFrom<Src> for ByteExtent<E, T> {
    #[inline]
    fn try_convert(src: Src) -> Result<Self, Violation> {
        const {
            if let (Some(m), Some(n)) = (Src::STATIC, Self::STATIC) {
                assert!(m == n, "fixed extents differ: the conversion can never succeed");
            }
        }
        Self::try_from_count(src.size())
    }
}

/// Whether a view with extent `Src` could ever be converted to one with extent `Dst`.
///
/// The const-evaluable form of the rule [`ExtentFrom`] enforces.
pub const fn extents_compatible<Src: Extent, Dst: Extent>() -> bool {
    match (Src::STATIC, Dst::STATIC) {
        (Some(m), Some(n)) => m == n,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_extent_is_zero_sized() {
        assert_eq!(mem::size_of::<Fixed<128>>(), 0);
        assert_eq!(mem::size_of::<ByteExtent<Fixed<4>, u64>>(), 0);
        assert_eq!(mem::size_of::<Dynamic>(), mem::size_of::<usize>());
    }

    #[test]
    fn fixed_accepts_only_its_count() {
        assert_eq!(Fixed::<5>::try_from_count(5), Ok(Fixed));
        assert_eq!(
            Fixed::<5>::try_from_count(4),
            Err(Violation::ExtentMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(Fixed::<5>::from_count(5).size(), 5);
    }

    #[test]
    #[should_panic(expected = "Contract violation: fixed extent 5 constructed from count 4")]
    fn fixed_from_wrong_count_fails_contract() {
        Fixed::<5>::from_count(4);
    }

    #[test]
    fn dynamic_rejects_negative_counts() {
        assert_eq!(Dynamic::try_from_signed(3), Ok(Dynamic::new(3)));
        assert_eq!(
            Dynamic::try_from_signed(-1),
            Err(Violation::NegativeCount { count: -1 })
        );
    }

    #[test]
    #[should_panic(expected = "Contract violation: element count -2 is negative")]
    fn dynamic_from_negative_fails_contract() {
        Dynamic::from_signed(-2);
    }

    #[test]
    fn byte_extent_scales_static_count() {
        assert_eq!(<ByteExtent<Fixed<4>, u32> as Extent>::STATIC, Some(16));
        assert_eq!(<ByteExtent<Dynamic, u32> as Extent>::STATIC, None);

        let bytes = Fixed::<3>.try_to_bytes::<u16>().unwrap();
        assert_eq!(bytes.size(), 6);

        let bytes = Dynamic::new(3).try_to_bytes::<u64>().unwrap();
        assert_eq!(bytes, Dynamic::new(24));
    }

    #[test]
    fn byte_extent_from_count_checks_multiple() {
        let e = ByteExtent::<Fixed<2>, u32>::try_from_count(8).unwrap();
        assert_eq!(e.size(), 8);
        assert!(ByteExtent::<Fixed<2>, u32>::try_from_count(7).is_err());
        assert!(ByteExtent::<Dynamic, u32>::try_from_count(6).is_err());
        assert_eq!(
            ByteExtent::<Dynamic, u32>::try_from_count(12)
                .unwrap()
                .elements(),
            Dynamic::new(3)
        );
    }

    #[test]
    fn byte_len_detects_overflow() {
        assert_eq!(byte_len::<u32>(4), Ok(16));
        assert!(matches!(
            byte_len::<u64>(usize::MAX),
            Err(Violation::ByteLengthOverflow { element_size: 8, .. })
        ));
    }

    #[test]
    fn conversions_widen_and_narrow() {
        let d = <Dynamic as ExtentFrom<Fixed<7>>>::convert(Fixed);
        assert_eq!(d.size(), 7);

        let f = <Fixed<7> as ExtentFrom<Dynamic>>::try_convert(Dynamic::new(7));
        assert_eq!(f, Ok(Fixed));

        let f = <Fixed<7> as ExtentFrom<Dynamic>>::try_convert(Dynamic::new(6));
        assert!(f.is_err());

        let same = <Fixed<7> as ExtentFrom<Fixed<7>>>::convert(Fixed);
        assert_eq!(same.size(), 7);
    }

    #[test]
    fn compatibility_predicate() {
        assert!(extents_compatible::<Fixed<3>, Fixed<3>>());
        assert!(!extents_compatible::<Fixed<3>, Fixed<4>>());
        assert!(extents_compatible::<Dynamic, Fixed<4>>());
        assert!(extents_compatible::<Fixed<4>, Dynamic>());
        assert!(extents_compatible::<ByteExtent<Fixed<2>, u16>, Fixed<4>>());
    }
}
