// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! [`SpanMut`]: the exclusive view, and the only path that writes.
//!
//! Sub-views consume the view they are taken from, like splitting a `&mut [T]`. Use
//! [`SpanMut::reborrow`] to keep the original:
//!
//! ```
//! use checked_span::SpanMut;
//!
//! let mut data = [1, 2, 3, 4];
//! let mut span = SpanMut::from_slice(&mut data);
//! span.reborrow().last(2)[0] = 30;
//! span[0] = 10;
//! assert_eq!(data, [10, 2, 30, 4]);
//! ```

use super::{
    check_data, check_first, check_index, check_last, check_ptr_range, check_signed_index,
    check_subspan, Span,
};
use crate::cast::{assert_layout, ElementFromMut};
use crate::contract;
use crate::cursor::{Cursor, CursorMut, Iter, ReverseCursor};
use crate::error::Violation;
use crate::extent::{byte_len, Dynamic, Extent, ExtentFrom, Fixed};
use crate::verify::contracts::{check_fixed_extent, check_span_well_formed, check_subview_within};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};
use std::{mem, slice};

/// A bounds-checked, non-owning, writable view of `E` elements of type `T`.
pub struct SpanMut<'a, T, E = Dynamic> {
    ptr: *mut T,
    extent: E,
    _borrow: PhantomData<&'a mut [T]>,
}

// SAFETY: a `SpanMut` grants exactly the access of a `&'a mut [T]`.
unsafe impl<T: Send, E: Send> Send for SpanMut<'_, T, E> {}
// SAFETY: as above.
unsafe impl<T: Sync, E: Sync> Sync for SpanMut<'_, T, E> {}

impl<'a, T> SpanMut<'a, T, Dynamic> {
    /// A writable view of nothing, with a null data pointer.
    pub const fn empty() -> Self {
        SpanMut {
            ptr: std::ptr::null_mut(),
            extent: Dynamic::new(0),
            _borrow: PhantomData,
        }
    }

    pub fn from_slice(items: &'a mut [T]) -> Self {
        SpanMut {
            extent: Dynamic::new(items.len()),
            ptr: items.as_mut_ptr(),
            _borrow: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> SpanMut<'a, T, Fixed<N>> {
    pub fn from_array(array: &'a mut [T; N]) -> Self {
        SpanMut {
            ptr: array.as_mut_ptr(),
            extent: Fixed,
            _borrow: PhantomData,
        }
    }
}

impl<'a, T, E: Extent> SpanMut<'a, T, E> {
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `extent.size()` elements, with no
    /// other access to them, for `'a`; non-null and aligned when that count is non-zero.
    pub(crate) unsafe fn from_parts(ptr: *mut T, extent: E) -> Self {
        check_span_well_formed(ptr.cast_const(), extent.size());
        check_fixed_extent(E::STATIC, extent.size());
        SpanMut {
            ptr,
            extent,
            _borrow: PhantomData,
        }
    }

    /// View `count` writable elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `count` elements, and nothing else may
    /// access them, for the whole of `'a`.
    pub unsafe fn try_from_raw_parts(ptr: *mut T, count: usize) -> Result<Self, Violation> {
        let extent = E::try_from_count(count)?;
        check_data(ptr.cast_const(), count)?;
        byte_len::<T>(count)?;
        // SAFETY: checked above, remaining obligations forwarded to the caller.
        Ok(unsafe { Self::from_parts(ptr, extent) })
    }

    /// # Safety
    ///
    /// As for [`SpanMut::try_from_raw_parts`].
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *mut T, count: usize) -> Self {
        // SAFETY: forwarded to the caller.
        contract::enforce(unsafe { Self::try_from_raw_parts(ptr, count) })
    }

    /// # Safety
    ///
    /// Both pointers must lie in (or one past) the same allocation, with every element in
    /// between exclusively borrowed for `'a`.
    pub unsafe fn try_from_ptr_range(range: Range<*mut T>) -> Result<Self, Violation> {
        let count = check_ptr_range(range.start.cast_const(), range.end.cast_const())?;
        // SAFETY: forwarded to the caller.
        unsafe { Self::try_from_raw_parts(range.start, count) }
    }

    /// # Safety
    ///
    /// As for [`SpanMut::try_from_ptr_range`].
    #[track_caller]
    pub unsafe fn from_ptr_range(range: Range<*mut T>) -> Self {
        // SAFETY: forwarded to the caller.
        contract::enforce(unsafe { Self::try_from_ptr_range(range) })
    }

    /// View any contiguous container whose elements `T` may be read and written as.
    pub fn try_from_container<C, S>(container: &'a mut C) -> Result<Self, Violation>
    where
        C: AsMut<[S]> + ?Sized,
        T: ElementFromMut<S>,
    {
        const { assert_layout::<S, T>() };
        let items = container.as_mut();
        let extent = E::try_from_count(items.len())?;
        // SAFETY: `T: ElementFromMut<S>` keeps every written `T` a valid `S`, and the
        // exclusive borrow of `container` lives for `'a`.
        Ok(unsafe { Self::from_parts(items.as_mut_ptr().cast::<T>(), extent) })
    }

    #[track_caller]
    pub fn from_container<C, S>(container: &'a mut C) -> Self
    where
        C: AsMut<[S]> + ?Sized,
        T: ElementFromMut<S>,
    {
        contract::enforce(Self::try_from_container(container))
    }

    /// A shorter-lived view of the same elements, leaving `self` usable afterwards.
    pub fn reborrow(&mut self) -> SpanMut<'_, T, E> {
        SpanMut {
            ptr: self.ptr,
            extent: self.extent,
            _borrow: PhantomData,
        }
    }

    /// A read-only view for as long as `self` is borrowed.
    pub fn as_span(&self) -> Span<'_, T, E> {
        // SAFETY: shared access derived from an exclusive one, for the borrow of `self`.
        unsafe { Span::from_parts(self.ptr.cast_const(), self.extent) }
    }

    /// Give up write access for the rest of `'a`.
    pub fn into_span(self) -> Span<'a, T, E> {
        // SAFETY: `self` is consumed, so nothing writes for the rest of `'a`.
        unsafe { Span::from_parts(self.ptr.cast_const(), self.extent) }
    }

    // ========================================================================
    // OBSERVERS
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.extent.size()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * mem::size_of::<T>()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.cast_const()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    #[inline]
    pub fn extent(&self) -> E {
        self.extent
    }

    pub fn as_slice(&self) -> &[T] {
        self.as_span().as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.reborrow().into_mut_slice()
    }

    /// The viewed elements as an ordinary mutable slice, for the rest of `'a`.
    pub fn into_mut_slice(self) -> &'a mut [T] {
        if self.is_empty() {
            return &mut [];
        }
        // SAFETY: a non-empty view has a non-null, aligned pointer to `len()` elements
        // exclusively borrowed for `'a`, and `self` is consumed.
        unsafe { slice::from_raw_parts_mut(self.ptr, self.len()) }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn try_at(&self, index: isize) -> Result<&T, Violation> {
        let index = check_signed_index(index, self.len())?;
        Ok(&self.as_slice()[index])
    }

    #[track_caller]
    pub fn at(&self, index: isize) -> &T {
        contract::enforce(self.try_at(index))
    }

    pub fn try_at_mut(&mut self, index: isize) -> Result<&mut T, Violation> {
        let index = check_signed_index(index, self.len())?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// The element at a signed `index`, for writing. The index is checked before any
    /// reference is formed.
    #[track_caller]
    pub fn at_mut(&mut self, index: isize) -> &mut T {
        contract::enforce(self.try_at_mut(index))
    }

    pub fn contains_ptr(&self, ptr: *const T) -> bool {
        self.as_span().contains_ptr(ptr)
    }

    pub fn try_index_of_ptr(&self, ptr: *const T) -> Result<usize, Violation> {
        self.as_span().try_index_of_ptr(ptr)
    }

    #[track_caller]
    pub fn index_of_ptr(&self, ptr: *const T) -> usize {
        contract::enforce(self.try_index_of_ptr(ptr))
    }

    // ========================================================================
    // SUB-VIEWS
    // ========================================================================

    fn derive<E2: Extent>(self, offset: usize, extent: E2) -> SpanMut<'a, T, E2> {
        check_subview_within(self.len(), offset, extent.size());
        // SAFETY: callers check `offset + extent.size() <= len()`, and `self` is consumed
        // so the exclusive borrow moves to the result.
        unsafe { SpanMut::from_parts(self.ptr.wrapping_add(offset), extent) }
    }

    pub fn try_first(self, count: usize) -> Result<SpanMut<'a, T>, Violation> {
        check_first(count, self.len())?;
        Ok(self.derive(0, Dynamic::new(count)))
    }

    #[track_caller]
    pub fn first(self, count: usize) -> SpanMut<'a, T> {
        contract::enforce(check_first(count, self.len()));
        self.derive(0, Dynamic::new(count))
    }

    #[track_caller]
    pub fn first_const<const N: usize>(self) -> SpanMut<'a, T, Fixed<N>> {
        const {
            if let Some(len) = E::STATIC {
                assert!(N <= len, "first_const count exceeds the fixed extent");
            }
        }
        contract::enforce(check_first(N, self.len()));
        self.derive(0, Fixed)
    }

    pub fn try_last(self, count: usize) -> Result<SpanMut<'a, T>, Violation> {
        let offset = check_last(count, self.len())?;
        Ok(self.derive(offset, Dynamic::new(count)))
    }

    #[track_caller]
    pub fn last(self, count: usize) -> SpanMut<'a, T> {
        let offset = contract::enforce(check_last(count, self.len()));
        self.derive(offset, Dynamic::new(count))
    }

    #[track_caller]
    pub fn last_const<const N: usize>(self) -> SpanMut<'a, T, Fixed<N>> {
        const {
            if let Some(len) = E::STATIC {
                assert!(N <= len, "last_const count exceeds the fixed extent");
            }
        }
        let offset = contract::enforce(check_last(N, self.len()));
        self.derive(offset, Fixed)
    }

    pub fn try_subspan(self, offset: usize, count: usize) -> Result<SpanMut<'a, T>, Violation> {
        let count = check_subspan(offset, Some(count), self.len())?;
        Ok(self.derive(offset, Dynamic::new(count)))
    }

    #[track_caller]
    pub fn subspan(self, offset: usize, count: usize) -> SpanMut<'a, T> {
        let count = contract::enforce(check_subspan(offset, Some(count), self.len()));
        self.derive(offset, Dynamic::new(count))
    }

    pub fn try_subspan_from(self, offset: usize) -> Result<SpanMut<'a, T>, Violation> {
        let count = check_subspan(offset, None, self.len())?;
        Ok(self.derive(offset, Dynamic::new(count)))
    }

    #[track_caller]
    pub fn subspan_from(self, offset: usize) -> SpanMut<'a, T> {
        let count = contract::enforce(check_subspan(offset, None, self.len()));
        self.derive(offset, Dynamic::new(count))
    }

    #[track_caller]
    pub fn subspan_const<const OFFSET: usize, const COUNT: usize>(
        self,
    ) -> SpanMut<'a, T, Fixed<COUNT>> {
        const {
            if let Some(len) = E::STATIC {
                assert!(OFFSET <= len, "subspan_const offset exceeds the fixed extent");
                assert!(
                    COUNT <= len - OFFSET,
                    "subspan_const range exceeds the fixed extent"
                );
            }
        }
        contract::enforce(check_subspan(OFFSET, Some(COUNT), self.len()));
        self.derive(OFFSET, Fixed)
    }

    #[track_caller]
    pub fn subspan_from_const<const OFFSET: usize>(self) -> SpanMut<'a, T> {
        const {
            if let Some(len) = E::STATIC {
                assert!(OFFSET <= len, "subspan_from_const offset exceeds the fixed extent");
            }
        }
        self.subspan_from(OFFSET)
    }

    pub fn try_split_at_mut(
        self,
        mid: usize,
    ) -> Result<(SpanMut<'a, T>, SpanMut<'a, T>), Violation> {
        let tail = check_subspan(mid, None, self.len())?;
        let ptr = self.ptr;
        // SAFETY: `[0, mid)` and `[mid, len)` are disjoint parts of the consumed view.
        let rest = unsafe { SpanMut::from_parts(ptr.wrapping_add(mid), Dynamic::new(tail)) };
        Ok((self.derive(0, Dynamic::new(mid)), rest))
    }

    /// Two disjoint writable views, `[0, mid)` and `[mid, len)`.
    #[track_caller]
    pub fn split_at_mut(self, mid: usize) -> (SpanMut<'a, T>, SpanMut<'a, T>) {
        contract::enforce(self.try_split_at_mut(mid))
    }

    // ========================================================================
    // CONVERSIONS
    // ========================================================================

    /// Reinterpret the elements as `U`, keeping the element count.
    pub fn cast_mut<U>(self) -> SpanMut<'a, U, E>
    where
        U: ElementFromMut<T>,
    {
        const { assert_layout::<T, U>() };
        // SAFETY: `U: ElementFromMut<T>` keeps both reads and writes valid, and the
        // element count stays in bounds for a `U` no larger than `T`.
        unsafe { SpanMut::from_parts(self.ptr.cast::<U>(), self.extent) }
    }

    pub fn try_with_extent<E2>(self) -> Result<SpanMut<'a, T, E2>, Violation>
    where
        E2: ExtentFrom<E>,
    {
        let extent = E2::try_convert(self.extent)?;
        // SAFETY: same pointer, same count, same exclusive borrow.
        Ok(unsafe { SpanMut::from_parts(self.ptr, extent) })
    }

    #[track_caller]
    pub fn with_extent<E2>(self) -> SpanMut<'a, T, E2>
    where
        E2: ExtentFrom<E>,
    {
        contract::enforce(self.try_with_extent())
    }

    pub fn try_convert<U, E2>(self) -> Result<SpanMut<'a, U, E2>, Violation>
    where
        U: ElementFromMut<T>,
        E2: ExtentFrom<E>,
    {
        self.cast_mut::<U>().try_with_extent()
    }

    #[track_caller]
    pub fn convert<U, E2>(self) -> SpanMut<'a, U, E2>
    where
        U: ElementFromMut<T>,
        E2: ExtentFrom<E>,
    {
        contract::enforce(self.try_convert())
    }

    // ========================================================================
    // CURSORS AND ITERATION
    // ========================================================================

    fn owner(&self) -> usize {
        self as *const Self as usize
    }

    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::bind(self.as_slice(), self.owner(), 0)
    }

    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::bind(self.as_slice(), self.owner(), self.len())
    }

    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.begin()
    }

    pub fn cend(&self) -> Cursor<'_, T> {
        self.end()
    }

    pub fn rbegin(&self) -> ReverseCursor<Cursor<'_, T>> {
        ReverseCursor::new(self.end())
    }

    pub fn rend(&self) -> ReverseCursor<Cursor<'_, T>> {
        ReverseCursor::new(self.begin())
    }

    pub fn crbegin(&self) -> ReverseCursor<Cursor<'_, T>> {
        self.rbegin()
    }

    pub fn crend(&self) -> ReverseCursor<Cursor<'_, T>> {
        self.rend()
    }

    /// Writable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let owner = self.owner();
        CursorMut::bind(self.as_mut_slice(), owner, 0)
    }

    /// Writable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let (owner, len) = (self.owner(), self.len());
        CursorMut::bind(self.as_mut_slice(), owner, len)
    }

    /// Writable cursor at the last element, walking backwards.
    pub fn rbegin_mut(&mut self) -> ReverseCursor<CursorMut<'_, T>> {
        ReverseCursor::new(self.end_mut())
    }

    pub fn rend_mut(&mut self) -> ReverseCursor<CursorMut<'_, T>> {
        ReverseCursor::new(self.begin_mut())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.begin(), self.end())
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[cfg(feature = "parallel")]
    pub fn par_iter_mut(&mut self) -> rayon::slice::IterMut<'_, T>
    where
        T: Send,
    {
        use rayon::prelude::*;
        self.as_mut_slice().par_iter_mut()
    }
}

impl<T, E: Extent> Index<usize> for SpanMut<'_, T, E> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        contract::enforce(check_index(index, self.len()));
        &self.as_slice()[index]
    }
}

impl<T, E: Extent> IndexMut<usize> for SpanMut<'_, T, E> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        contract::enforce(check_index(index, self.len()));
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T, E: Extent> IntoIterator for SpanMut<'a, T, E> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.into_mut_slice().iter_mut()
    }
}

impl<'s, T, E: Extent> IntoIterator for &'s mut SpanMut<'_, T, E> {
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;

    fn into_iter(self) -> slice::IterMut<'s, T> {
        self.iter_mut()
    }
}

impl<'s, T, E: Extent> IntoIterator for &'s SpanMut<'_, T, E> {
    type Item = &'s T;
    type IntoIter = Iter<'s, T>;

    fn into_iter(self) -> Iter<'s, T> {
        self.iter()
    }
}

impl<T> Default for SpanMut<'_, T, Dynamic> {
    fn default() -> Self {
        SpanMut::empty()
    }
}

impl<T> Default for SpanMut<'_, T, Fixed<0>> {
    fn default() -> Self {
        SpanMut {
            ptr: std::ptr::null_mut(),
            extent: Fixed,
            _borrow: PhantomData,
        }
    }
}
