// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! [`Span`]: the shared, read-only view.

use super::{
    check_data, check_first, check_index, check_last, check_ptr_range, check_ptr_within,
    check_signed_index, check_subspan,
};
use crate::cast::{assert_layout, ElementFrom};
use crate::contract;
use crate::cursor::{Cursor, Iter, ReverseCursor};
use crate::error::Violation;
use crate::extent::{byte_len, Dynamic, Extent, ExtentFrom, Fixed};
use crate::verify::contracts::{check_fixed_extent, check_span_well_formed, check_subview_within};
use std::marker::PhantomData;
use std::ops::{Index, Range};
use std::{mem, slice};

/// A bounds-checked, non-owning, read-only view of `E` elements of type `T`.
///
/// ```
/// use checked_span::Span;
///
/// let data = [10, 20, 30, 40, 50];
/// let span = Span::from_slice(&data);
///
/// assert_eq!(span.len(), 5);
/// assert_eq!(span.first(2), [10, 20]);
/// assert_eq!(span.subspan(1, 3), [20, 30, 40]);
/// assert_eq!(span.at(4), &50);
/// ```
pub struct Span<'a, T, E = Dynamic> {
    ptr: *const T,
    extent: E,
    _borrow: PhantomData<&'a [T]>,
}

impl<T, E: Copy> Clone for Span<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E: Copy> Copy for Span<'_, T, E> {}

// SAFETY: a `Span` grants exactly the access of a `&'a [T]`.
unsafe impl<T: Sync, E: Send> Send for Span<'_, T, E> {}
// SAFETY: as above.
unsafe impl<T: Sync, E: Sync> Sync for Span<'_, T, E> {}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl<'a, T> Span<'a, T, Dynamic> {
    /// A view of nothing, with a null data pointer.
    pub const fn empty() -> Self {
        Span {
            ptr: std::ptr::null(),
            extent: Dynamic::new(0),
            _borrow: PhantomData,
        }
    }

    /// Same as [`Span::empty`].
    pub const fn null() -> Self {
        Self::empty()
    }

    /// A view of a whole slice.
    pub const fn from_slice(items: &'a [T]) -> Self {
        Span {
            ptr: items.as_ptr(),
            extent: Dynamic::new(items.len()),
            _borrow: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Span<'a, T, Fixed<N>> {
    /// A view of a whole array, with the length carried in the type.
    pub const fn from_array(array: &'a [T; N]) -> Self {
        Span {
            ptr: array.as_slice().as_ptr(),
            extent: Fixed,
            _borrow: PhantomData,
        }
    }
}

impl<'a, T, E: Extent> Span<'a, T, E> {
    /// Assemble a view from parts that are already known to be valid for `'a`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `extent.size()` elements for `'a`, non-null and
    /// aligned when that count is non-zero.
    pub(crate) unsafe fn from_parts(ptr: *const T, extent: E) -> Self {
        check_span_well_formed(ptr, extent.size());
        check_fixed_extent(E::STATIC, extent.size());
        Span {
            ptr,
            extent,
            _borrow: PhantomData,
        }
    }

    /// View `count` elements starting at `ptr`.
    ///
    /// Rejects a null or misaligned `ptr` with a non-zero count, a count a fixed extent
    /// disagrees with, and a byte length that overflows.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `count` elements, and nothing may write to them,
    /// for the whole of `'a`.
    pub unsafe fn try_from_raw_parts(ptr: *const T, count: usize) -> Result<Self, Violation> {
        let extent = E::try_from_count(count)?;
        check_data(ptr, count)?;
        byte_len::<T>(count)?;
        // SAFETY: checked above, remaining obligations forwarded to the caller.
        Ok(unsafe { Self::from_parts(ptr, extent) })
    }

    /// [`Span::try_from_raw_parts`], failing the contract on a rejected argument.
    ///
    /// # Safety
    ///
    /// As for [`Span::try_from_raw_parts`].
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *const T, count: usize) -> Self {
        // SAFETY: forwarded to the caller.
        contract::enforce(unsafe { Self::try_from_raw_parts(ptr, count) })
    }

    /// View the elements in `[range.start, range.end)`.
    ///
    /// # Safety
    ///
    /// Both pointers must lie in (or one past) the same allocation, with every element in
    /// between valid for reads and unwritten for `'a`.
    pub unsafe fn try_from_ptr_range(range: Range<*const T>) -> Result<Self, Violation> {
        let count = check_ptr_range(range.start, range.end)?;
        // SAFETY: forwarded to the caller.
        unsafe { Self::try_from_raw_parts(range.start, count) }
    }

    /// # Safety
    ///
    /// As for [`Span::try_from_ptr_range`].
    #[track_caller]
    pub unsafe fn from_ptr_range(range: Range<*const T>) -> Self {
        // SAFETY: forwarded to the caller.
        contract::enforce(unsafe { Self::try_from_ptr_range(range) })
    }

    /// View any contiguous container whose elements `T` may be read from.
    pub fn try_from_container<C, S>(container: &'a C) -> Result<Self, Violation>
    where
        C: AsRef<[S]> + ?Sized,
        T: ElementFrom<S>,
    {
        const { assert_layout::<S, T>() };
        let items = container.as_ref();
        let extent = E::try_from_count(items.len())?;
        // SAFETY: `T: ElementFrom<S>` makes every `S` readable as a `T`, and the borrow
        // of `container` lives for `'a`.
        Ok(unsafe { Self::from_parts(items.as_ptr().cast::<T>(), extent) })
    }

    #[track_caller]
    pub fn from_container<C, S>(container: &'a C) -> Self
    where
        C: AsRef<[S]> + ?Sized,
        T: ElementFrom<S>,
    {
        contract::enforce(Self::try_from_container(container))
    }

    // ========================================================================
    // OBSERVERS
    // ========================================================================

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.extent.size()
    }

    /// Alias of [`Span::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes covered by the view.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * mem::size_of::<T>()
    }

    /// The data pointer. Null only for a view built from a null pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    #[inline]
    pub fn extent(&self) -> E {
        self.extent
    }

    /// The viewed elements as an ordinary slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        if self.is_empty() {
            return &[];
        }
        // SAFETY: a non-empty view has a non-null, aligned pointer to `len()` readable
        // elements borrowed for `'a`.
        unsafe { slice::from_raw_parts(self.ptr, self.len()) }
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

    /// The element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    pub fn try_at(&self, index: isize) -> Result<&'a T, Violation> {
        let index = check_signed_index(index, self.len())?;
        Ok(&self.as_slice()[index])
    }

    /// The element at a signed `index`, which must lie in `[0, len)`.
    #[track_caller]
    pub fn at(&self, index: isize) -> &'a T {
        contract::enforce(self.try_at(index))
    }

    /// Whether `ptr` addresses an element of this view.
    pub fn contains_ptr(&self, ptr: *const T) -> bool {
        check_ptr_within(self.ptr, self.len(), ptr).is_ok()
    }

    pub fn try_index_of_ptr(&self, ptr: *const T) -> Result<usize, Violation> {
        check_ptr_within(self.ptr, self.len(), ptr)
    }

    /// Element offset of `ptr`, which must address an element of this view.
    #[track_caller]
    pub fn index_of_ptr(&self, ptr: *const T) -> usize {
        contract::enforce(self.try_index_of_ptr(ptr))
    }

    // ========================================================================
    // SUB-VIEWS
    // ========================================================================

    fn derive<E2: Extent>(&self, offset: usize, extent: E2) -> Span<'a, T, E2> {
        check_subview_within(self.len(), offset, extent.size());
        // SAFETY: callers check `offset + extent.size() <= len()`, so the result lies
        // inside this view.
        unsafe { Span::from_parts(self.ptr.wrapping_add(offset), extent) }
    }

    pub fn try_first(&self, count: usize) -> Result<Span<'a, T>, Violation> {
        check_first(count, self.len())?;
        Ok(self.derive(0, Dynamic::new(count)))
    }

    /// The first `count` elements.
    #[track_caller]
    pub fn first(&self, count: usize) -> Span<'a, T> {
        contract::enforce(self.try_first(count))
    }

    /// The first `N` elements, as a fixed-extent view.
    ///
    /// Over a fixed-extent source an out-of-range `N` does not build.
    #[track_caller]
    pub fn first_const<const N: usize>(&self) -> Span<'a, T, Fixed<N>> {
        const {
            if let Some(len) = E::STATIC {
                assert!(N <= len, "first_const count exceeds the fixed extent");
            }
        }
        contract::enforce(check_first(N, self.len()));
        self.derive(0, Fixed)
    }

    pub fn try_last(&self, count: usize) -> Result<Span<'a, T>, Violation> {
        let offset = check_last(count, self.len())?;
        Ok(self.derive(offset, Dynamic::new(count)))
    }

    /// The last `count` elements.
    #[track_caller]
    pub fn last(&self, count: usize) -> Span<'a, T> {
        contract::enforce(self.try_last(count))
    }

    #[track_caller]
    pub fn last_const<const N: usize>(&self) -> Span<'a, T, Fixed<N>> {
        const {
            if let Some(len) = E::STATIC {
                assert!(N <= len, "last_const count exceeds the fixed extent");
            }
        }
        let offset = contract::enforce(check_last(N, self.len()));
        self.derive(offset, Fixed)
    }

    pub fn try_subspan(&self, offset: usize, count: usize) -> Result<Span<'a, T>, Violation> {
        let count = check_subspan(offset, Some(count), self.len())?;
        Ok(self.derive(offset, Dynamic::new(count)))
    }

    /// `count` elements starting at `offset`.
    #[track_caller]
    pub fn subspan(&self, offset: usize, count: usize) -> Span<'a, T> {
        contract::enforce(self.try_subspan(offset, count))
    }

    pub fn try_subspan_from(&self, offset: usize) -> Result<Span<'a, T>, Violation> {
        let count = check_subspan(offset, None, self.len())?;
        Ok(self.derive(offset, Dynamic::new(count)))
    }

    /// Everything from `offset` to the end.
    #[track_caller]
    pub fn subspan_from(&self, offset: usize) -> Span<'a, T> {
        contract::enforce(self.try_subspan_from(offset))
    }

    /// `COUNT` elements starting at `OFFSET`, as a fixed-extent view.
    #[track_caller]
    pub fn subspan_const<const OFFSET: usize, const COUNT: usize>(
        &self,
    ) -> Span<'a, T, Fixed<COUNT>> {
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
    pub fn subspan_from_const<const OFFSET: usize>(&self) -> Span<'a, T> {
        const {
            if let Some(len) = E::STATIC {
                assert!(OFFSET <= len, "subspan_from_const offset exceeds the fixed extent");
            }
        }
        self.subspan_from(OFFSET)
    }

    pub fn try_split_at(&self, mid: usize) -> Result<(Span<'a, T>, Span<'a, T>), Violation> {
        let tail = check_subspan(mid, None, self.len())?;
        Ok((
            self.derive(0, Dynamic::new(mid)),
            self.derive(mid, Dynamic::new(tail)),
        ))
    }

    /// `[0, mid)` and `[mid, len)`.
    #[track_caller]
    pub fn split_at(&self, mid: usize) -> (Span<'a, T>, Span<'a, T>) {
        contract::enforce(self.try_split_at(mid))
    }

    // ========================================================================
    // CONVERSIONS
    // ========================================================================

    /// Reinterpret the elements as `U`, keeping the element count.
    pub fn cast<U>(self) -> Span<'a, U, E>
    where
        U: ElementFrom<T>,
    {
        const { assert_layout::<T, U>() };
        // SAFETY: `U: ElementFrom<T>` makes each `T` readable as a `U` of no greater size
        // or alignment, so the same count stays in bounds.
        unsafe { Span::from_parts(self.ptr.cast::<U>(), self.extent) }
    }

    pub fn try_with_extent<E2>(self) -> Result<Span<'a, T, E2>, Violation>
    where
        E2: ExtentFrom<E>,
    {
        let extent = E2::try_convert(self.extent)?;
        // SAFETY: same pointer, same count.
        Ok(unsafe { Span::from_parts(self.ptr, extent) })
    }

    /// Change how the extent is carried; narrowing to a fixed extent checks the count.
    #[track_caller]
    pub fn with_extent<E2>(self) -> Span<'a, T, E2>
    where
        E2: ExtentFrom<E>,
    {
        contract::enforce(self.try_with_extent())
    }

    pub fn try_convert<U, E2>(self) -> Result<Span<'a, U, E2>, Violation>
    where
        U: ElementFrom<T>,
        E2: ExtentFrom<E>,
    {
        self.cast::<U>().try_with_extent()
    }

    /// [`Span::cast`] and [`Span::with_extent`] in one step.
    #[track_caller]
    pub fn convert<U, E2>(self) -> Span<'a, U, E2>
    where
        U: ElementFrom<T>,
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

    /// Cursor at the first element, bound to this span value.
    pub fn begin(&self) -> Cursor<'a, T> {
        Cursor::bind(self.as_slice(), self.owner(), 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<'a, T> {
        Cursor::bind(self.as_slice(), self.owner(), self.len())
    }

    pub fn cbegin(&self) -> Cursor<'a, T> {
        self.begin()
    }

    pub fn cend(&self) -> Cursor<'a, T> {
        self.end()
    }

    pub fn rbegin(&self) -> ReverseCursor<Cursor<'a, T>> {
        ReverseCursor::new(self.end())
    }

    pub fn rend(&self) -> ReverseCursor<Cursor<'a, T>> {
        ReverseCursor::new(self.begin())
    }

    pub fn crbegin(&self) -> ReverseCursor<Cursor<'a, T>> {
        self.rbegin()
    }

    pub fn crend(&self) -> ReverseCursor<Cursor<'a, T>> {
        self.rend()
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.begin(), self.end())
    }

    #[cfg(feature = "parallel")]
    pub fn par_iter(&self) -> rayon::slice::Iter<'a, T>
    where
        T: Sync,
    {
        use rayon::prelude::*;
        self.as_slice().par_iter()
    }
}

impl<T, E: Extent> Index<usize> for Span<'_, T, E> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        contract::enforce(check_index(index, self.len()));
        &self.as_slice()[index]
    }
}

impl<'a, T, E: Extent> IntoIterator for Span<'a, T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E: Extent> IntoIterator for &Span<'a, T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Default for Span<'_, T, Dynamic> {
    fn default() -> Self {
        Span::empty()
    }
}

impl<T> Default for Span<'_, T, Fixed<0>> {
    fn default() -> Self {
        Span {
            ptr: std::ptr::null(),
            extent: Fixed,
            _borrow: PhantomData,
        }
    }
}
