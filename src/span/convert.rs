// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `From`/`TryFrom` between views and the storage they borrow.
//!
//! Infallible where the target extent can always hold the source (arrays to fixed or
//! dynamic views, fixed to dynamic, writable to read-only). `TryFrom` where a runtime
//! length must match a fixed extent.

use super::{Span, SpanMut};
use crate::error::Violation;
use crate::extent::{Dynamic, Fixed};

impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T, Fixed<N>> {
    fn from(array: &'a [T; N]) -> Self {
        Span::from_array(array)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T, Dynamic> {
    fn from(array: &'a [T; N]) -> Self {
        Span::from_slice(array)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for Span<'a, T, Fixed<N>> {
    fn from(array: &'a mut [T; N]) -> Self {
        Span::from_array(array)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SpanMut<'a, T, Fixed<N>> {
    fn from(array: &'a mut [T; N]) -> Self {
        SpanMut::from_array(array)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SpanMut<'a, T, Dynamic> {
    fn from(array: &'a mut [T; N]) -> Self {
        SpanMut::from_slice(array)
    }
}

impl<'a, T> From<&'a [T]> for Span<'a, T, Dynamic> {
    fn from(items: &'a [T]) -> Self {
        Span::from_slice(items)
    }
}

impl<'a, T> From<&'a mut [T]> for SpanMut<'a, T, Dynamic> {
    fn from(items: &'a mut [T]) -> Self {
        SpanMut::from_slice(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Span<'a, T, Dynamic> {
    fn from(items: &'a Vec<T>) -> Self {
        Span::from_slice(items)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for SpanMut<'a, T, Dynamic> {
    fn from(items: &'a mut Vec<T>) -> Self {
        SpanMut::from_slice(items)
    }
}

impl<'a, T, E: crate::Extent> From<SpanMut<'a, T, E>> for Span<'a, T, E> {
    fn from(span: SpanMut<'a, T, E>) -> Self {
        span.into_span()
    }
}

impl<'a, T, const N: usize> From<Span<'a, T, Fixed<N>>> for Span<'a, T, Dynamic> {
    fn from(span: Span<'a, T, Fixed<N>>) -> Self {
        span.with_extent()
    }
}

impl<'a, T, const N: usize> From<SpanMut<'a, T, Fixed<N>>> for SpanMut<'a, T, Dynamic> {
    fn from(span: SpanMut<'a, T, Fixed<N>>) -> Self {
        span.with_extent()
    }
}

impl<'a, T, const N: usize> TryFrom<Span<'a, T, Dynamic>> for Span<'a, T, Fixed<N>> {
    type Error = Violation;

    fn try_from(span: Span<'a, T, Dynamic>) -> Result<Self, Violation> {
        span.try_with_extent()
    }
}

impl<'a, T, const N: usize> TryFrom<&'a [T]> for Span<'a, T, Fixed<N>> {
    type Error = Violation;

    fn try_from(items: &'a [T]) -> Result<Self, Violation> {
        Span::from_slice(items).try_with_extent()
    }
}

impl<'a, T, const N: usize> TryFrom<SpanMut<'a, T, Dynamic>> for SpanMut<'a, T, Fixed<N>> {
    type Error = Violation;

    fn try_from(span: SpanMut<'a, T, Dynamic>) -> Result<Self, Violation> {
        span.try_with_extent()
    }
}

impl<'a, T, const N: usize> TryFrom<&'a mut [T]> for SpanMut<'a, T, Fixed<N>> {
    type Error = Violation;

    fn try_from(items: &'a mut [T]) -> Result<Self, Violation> {
        SpanMut::from_slice(items).try_with_extent()
    }
}
