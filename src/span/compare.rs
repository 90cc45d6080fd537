// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Element-wise comparison, hashing and formatting.
//!
//! Views compare by content, never by address. Equality and ordering both accept any
//! pair of extents and any element pair with `PartialEq`/`PartialOrd`, so a
//! `Span<i32, Fixed<3>>` equals a `Span<i32>` over the same values and a `[i32; 3]`.
//! Views of different lengths are never equal. Ordering is lexicographic.

use super::{Span, SpanMut};
use crate::extent::Extent;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lexicographic comparison of two runs of possibly different element types.
fn lexicographic<T, U>(left: &[T], right: &[U]) -> Option<Ordering>
where
    T: PartialOrd<U>,
{
    for (l, r) in left.iter().zip(right) {
        match l.partial_cmp(r) {
            Some(Ordering::Equal) => {}
            decided => return decided,
        }
    }
    left.len().partial_cmp(&right.len())
}

macro_rules! view_comparisons {
    ($left:ident, $right:ident) => {
        impl<T, U, E1: Extent, E2: Extent> PartialEq<$right<'_, U, E2>> for $left<'_, T, E1>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$right<'_, U, E2>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T, U, E1: Extent, E2: Extent> PartialOrd<$right<'_, U, E2>> for $left<'_, T, E1>
        where
            T: PartialOrd<U>,
        {
            fn partial_cmp(&self, other: &$right<'_, U, E2>) -> Option<Ordering> {
                lexicographic(self.as_slice(), other.as_slice())
            }
        }
    };
}

view_comparisons!(Span, Span);
view_comparisons!(Span, SpanMut);
view_comparisons!(SpanMut, Span);
view_comparisons!(SpanMut, SpanMut);

macro_rules! storage_comparisons {
    ($view:ident) => {
        impl<T, U, E: Extent, const N: usize> PartialEq<[U; N]> for $view<'_, T, E>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &[U; N]) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T, U, E: Extent> PartialEq<[U]> for $view<'_, T, E>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &[U]) -> bool {
                self.as_slice() == other
            }
        }

        impl<T, U, E: Extent> PartialEq<&[U]> for $view<'_, T, E>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &&[U]) -> bool {
                self.as_slice() == *other
            }
        }

        impl<T, U, E: Extent> PartialEq<Vec<U>> for $view<'_, T, E>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &Vec<U>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T, U, E: Extent> PartialEq<$view<'_, U, E>> for Vec<T>
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$view<'_, U, E>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T, U, E: Extent, const N: usize> PartialEq<$view<'_, U, E>> for [T; N]
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$view<'_, U, E>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: Eq, E: Extent> Eq for $view<'_, T, E> {}

        impl<T: Ord, E: Extent> Ord for $view<'_, T, E> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_slice().cmp(other.as_slice())
            }
        }

        impl<T: Hash, E: Extent> Hash for $view<'_, T, E> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_slice().hash(state);
            }
        }

        impl<T: fmt::Debug, E: Extent> fmt::Debug for $view<'_, T, E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.as_slice()).finish()
            }
        }
    };
}

storage_comparisons!(Span);
storage_comparisons!(SpanMut);
