// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounds-checked random-access cursors.
//!
//! A cursor is a position bound to one particular span value and the storage that span
//! covers. Unlike a raw pointer it knows the length it moves within, so every step is
//! validated:
//!
//! | Operation                          | Requirement                          |
//! |------------------------------------|--------------------------------------|
//! | `get`                              | bound, `index < len`                 |
//! | `advance`, `retreat`, `+ n`, `- n` | result in `[0, len]`                 |
//! | `distance`, `a - b`, `<`, `>`      | both cursors from the same span      |
//! | `==`                               | none; different spans compare unequal |
//!
//! A default-constructed cursor is bound to nothing. It may be compared and assigned,
//! and any other use is a contract violation.
//!
//! [`Cursor`] reads, [`CursorMut`] writes and converts into a [`Cursor`] (never the
//! reverse). [`ReverseCursor`] turns any [`RandomAccessCursor`] around, and stays
//! writable over a [`RandomAccessCursorMut`]. [`Iter`] walks a
//! pair of cursors and is what `Span::iter` returns.

use crate::contract;
use crate::error::Violation;
use crate::narrow::saturating_isize;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Move `index` by `n`, staying inside `[0, len]`.
#[inline]
fn step(index: usize, len: usize, n: isize) -> Result<usize, Violation> {
    index
        .checked_add_signed(n)
        .filter(|&moved| moved <= len)
        .ok_or(Violation::CursorOutOfRange {
            index: saturating_isize(index).saturating_add(n),
            len,
        })
}

#[inline]
fn check_readable(index: usize, len: usize) -> Result<(), Violation> {
    contract::evaluate(index < len, || Violation::CursorOutOfRange {
        index: saturating_isize(index),
        len,
    })
}

/// Index of the element `delta` positions away, which must be readable.
#[inline]
fn readable_at(index: usize, len: usize, delta: isize) -> Result<usize, Violation> {
    let at = step(index, len, delta)?;
    check_readable(at, len)?;
    Ok(at)
}

#[inline]
fn negate(n: isize) -> Result<isize, Violation> {
    n.checked_neg().ok_or(Violation::NarrowingLoss {
        value: -(n as i128),
    })
}

/// What a cursor is bound to: the span value that handed it out, and that span's
/// storage. Two spans can occupy the same address one after the other, so the
/// address alone does not tell them apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Binding {
    owner: usize,
    base: usize,
    len: usize,
}

impl Binding {
    fn of<T>(items: &[T], owner: usize) -> Self {
        Binding {
            owner,
            base: items.as_ptr() as usize,
            len: items.len(),
        }
    }
}

// ============================================================================
// RANDOM-ACCESS CURSOR TRAITS
// ============================================================================

/// The operations [`ReverseCursor`] needs from the cursor it wraps.
///
/// Implemented by [`Cursor`], [`CursorMut`] and [`ReverseCursor`] itself.
pub trait RandomAccessCursor: PartialEq {
    /// What dereferencing yields.
    type Item<'c>
    where
        Self: 'c;

    /// The element `delta` positions away from the current one.
    fn try_get_at(&self, delta: isize) -> Result<Self::Item<'_>, Violation>;

    /// Move by `n` in place; the position is unchanged on error.
    fn try_shift(&mut self, n: isize) -> Result<(), Violation>;

    /// Signed distance from `origin` to `self`.
    fn try_distance(&self, origin: &Self) -> Result<isize, Violation>;

    /// The element at the current position.
    fn try_get(&self) -> Result<Self::Item<'_>, Violation> {
        self.try_get_at(0)
    }

    /// The cursor `n` positions further on.
    fn try_offset(mut self, n: isize) -> Result<Self, Violation>
    where
        Self: Sized,
    {
        self.try_shift(n)?;
        Ok(self)
    }

    #[track_caller]
    fn get(&self) -> Self::Item<'_> {
        contract::enforce(self.try_get())
    }

    #[track_caller]
    fn get_at(&self, delta: isize) -> Self::Item<'_> {
        contract::enforce(self.try_get_at(delta))
    }

    #[track_caller]
    fn offset(self, n: isize) -> Self
    where
        Self: Sized,
    {
        contract::enforce(self.try_offset(n))
    }

    #[track_caller]
    fn distance(&self, origin: &Self) -> isize {
        contract::enforce(self.try_distance(origin))
    }

    #[track_caller]
    fn advance(&mut self) {
        contract::enforce(self.try_shift(1));
    }

    #[track_caller]
    fn retreat(&mut self) {
        contract::enforce(self.try_shift(-1));
    }

    /// Advance, returning the position before the move.
    #[track_caller]
    fn post_advance(&mut self) -> Self
    where
        Self: Copy,
    {
        let before = *self;
        self.advance();
        before
    }

    /// Retreat, returning the position before the move.
    #[track_caller]
    fn post_retreat(&mut self) -> Self
    where
        Self: Copy,
    {
        let before = *self;
        self.retreat();
        before
    }
}

/// A cursor that can also write the element it points at.
pub trait RandomAccessCursorMut: RandomAccessCursor {
    type Target;

    fn try_get_mut_at(&mut self, delta: isize) -> Result<&mut Self::Target, Violation>;

    fn try_get_mut(&mut self) -> Result<&mut Self::Target, Violation> {
        self.try_get_mut_at(0)
    }

    #[track_caller]
    fn get_mut(&mut self) -> &mut Self::Target {
        contract::enforce(self.try_get_mut())
    }
}

// ============================================================================
// CURSOR
// ============================================================================

/// A read-only position within a span.
pub struct Cursor<'s, T> {
    items: Option<&'s [T]>,
    binding: Binding,
    index: usize,
}

impl<'s, T> Cursor<'s, T> {
    pub(crate) fn bind(items: &'s [T], owner: usize, index: usize) -> Self {
        Cursor {
            items: Some(items),
            binding: Binding::of(items, owner),
            index,
        }
    }

    /// Position from the start of the span.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the default, unbound cursor.
    pub fn is_null(&self) -> bool {
        self.items.is_none()
    }

    /// Whether both cursors were handed out by the same span value over the same
    /// storage.
    pub fn same_span(&self, other: &Self) -> bool {
        self.binding == other.binding
    }

    fn bound(&self) -> Result<&'s [T], Violation> {
        self.items.ok_or(Violation::NullCursor)
    }

    pub fn try_get(&self) -> Result<&'s T, Violation> {
        self.try_get_at(0)
    }

    /// The element under the cursor.
    #[track_caller]
    pub fn get(&self) -> &'s T {
        contract::enforce(self.try_get())
    }

    /// The element `delta` positions away, without moving.
    pub fn try_get_at(&self, delta: isize) -> Result<&'s T, Violation> {
        let items = self.bound()?;
        Ok(&items[readable_at(self.index, items.len(), delta)?])
    }

    pub fn try_offset(mut self, n: isize) -> Result<Self, Violation> {
        self.try_shift(n)?;
        Ok(self)
    }

    /// The cursor `n` positions away; the result must stay in `[0, len]`.
    #[track_caller]
    pub fn offset(self, n: isize) -> Self {
        contract::enforce(self.try_offset(n))
    }

    /// Move by `n` in place; the position is unchanged on error.
    pub fn try_shift(&mut self, n: isize) -> Result<(), Violation> {
        if n != 0 {
            self.index = step(self.index, self.bound()?.len(), n)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn advance(&mut self) {
        contract::enforce(self.try_shift(1));
    }

    #[track_caller]
    pub fn retreat(&mut self) {
        contract::enforce(self.try_shift(-1));
    }

    /// Advance, returning the position before the move.
    #[track_caller]
    pub fn post_advance(&mut self) -> Self {
        let before = *self;
        self.advance();
        before
    }

    /// Retreat, returning the position before the move.
    #[track_caller]
    pub fn post_retreat(&mut self) -> Self {
        let before = *self;
        self.retreat();
        before
    }

    pub fn try_distance(&self, origin: &Self) -> Result<isize, Violation> {
        contract::evaluate(self.same_span(origin), || Violation::ForeignCursor)?;
        Ok(saturating_isize(self.index) - saturating_isize(origin.index))
    }

    /// `self - origin`, for cursors from the same span.
    #[track_caller]
    pub fn distance(&self, origin: &Self) -> isize {
        contract::enforce(self.try_distance(origin))
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Cursor {
            items: None,
            binding: Binding::default(),
            index: 0,
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("owner", &format_args!("{:#x}", self.binding.owner))
            .field("index", &self.index)
            .field("len", &self.items.map(<[T]>::len))
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_span(other) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        contract::require(self.same_span(other), || Violation::ForeignCursor);
        Some(self.index.cmp(&other.index))
    }
}

impl<'s, T> RandomAccessCursor for Cursor<'s, T> {
    type Item<'c>
        = &'s T
    where
        Self: 'c;

    fn try_get_at(&self, delta: isize) -> Result<&'s T, Violation> {
        Cursor::try_get_at(self, delta)
    }

    fn try_shift(&mut self, n: isize) -> Result<(), Violation> {
        Cursor::try_shift(self, n)
    }

    fn try_distance(&self, origin: &Self) -> Result<isize, Violation> {
        Cursor::try_distance(self, origin)
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(self, n: isize) -> Self {
        self.offset(contract::enforce(negate(n)))
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, n: isize) {
        contract::enforce(self.try_shift(n));
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, n: isize) {
        contract::enforce(negate(n).and_then(|back| self.try_shift(back)));
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    #[track_caller]
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

// ============================================================================
// MUTABLE CURSOR
// ============================================================================

/// A writable position within a [`SpanMut`](crate::SpanMut).
///
/// Holds the span's exclusive borrow, so it cannot be copied. The postfix steps hand
/// back the element they moved off instead of a second cursor.
pub struct CursorMut<'s, T> {
    items: &'s mut [T],
    binding: Binding,
    index: usize,
}

impl<'s, T> CursorMut<'s, T> {
    pub(crate) fn bind(items: &'s mut [T], owner: usize, index: usize) -> Self {
        let binding = Binding::of(items, owner);
        CursorMut {
            items,
            binding,
            index,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn same_span(&self, other: &Self) -> bool {
        self.binding == other.binding
    }

    pub fn try_get(&self) -> Result<&T, Violation> {
        self.try_get_at(0)
    }

    #[track_caller]
    pub fn get(&self) -> &T {
        contract::enforce(self.try_get())
    }

    pub fn try_get_at(&self, delta: isize) -> Result<&T, Violation> {
        Ok(&self.items[readable_at(self.index, self.items.len(), delta)?])
    }

    pub fn try_get_mut(&mut self) -> Result<&mut T, Violation> {
        self.try_get_mut_at(0)
    }

    /// The element under the cursor, for writing.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        contract::enforce(self.try_get_mut())
    }

    pub fn try_get_mut_at(&mut self, delta: isize) -> Result<&mut T, Violation> {
        let at = readable_at(self.index, self.items.len(), delta)?;
        Ok(&mut self.items[at])
    }

    /// Move by `n` in place; the position is unchanged on error.
    pub fn try_shift(&mut self, n: isize) -> Result<(), Violation> {
        self.index = step(self.index, self.items.len(), n)?;
        Ok(())
    }

    pub fn try_offset(mut self, n: isize) -> Result<Self, Violation> {
        self.try_shift(n)?;
        Ok(self)
    }

    #[track_caller]
    pub fn offset(self, n: isize) -> Self {
        contract::enforce(self.try_offset(n))
    }

    #[track_caller]
    pub fn advance(&mut self) {
        contract::enforce(self.try_shift(1));
    }

    #[track_caller]
    pub fn retreat(&mut self) {
        contract::enforce(self.try_shift(-1));
    }

    /// Advance, returning the element the cursor was on.
    ///
    /// `*cursor.post_advance() = value` writes and moves in one step.
    #[track_caller]
    pub fn post_advance(&mut self) -> &mut T {
        let at = contract::enforce(readable_at(self.index, self.items.len(), 0));
        self.advance();
        &mut self.items[at]
    }

    /// Retreat, returning the element the cursor was on.
    #[track_caller]
    pub fn post_retreat(&mut self) -> &mut T {
        let at = contract::enforce(readable_at(self.index, self.items.len(), 0));
        self.retreat();
        &mut self.items[at]
    }

    pub fn try_distance(&self, origin: &Self) -> Result<isize, Violation> {
        contract::evaluate(self.same_span(origin), || Violation::ForeignCursor)?;
        Ok(saturating_isize(self.index) - saturating_isize(origin.index))
    }

    #[track_caller]
    pub fn distance(&self, origin: &Self) -> isize {
        contract::enforce(self.try_distance(origin))
    }

    /// Give up write access, keeping the position.
    pub fn into_const(self) -> Cursor<'s, T> {
        let CursorMut {
            items,
            binding,
            index,
        } = self;
        let items: &'s [T] = items;
        Cursor {
            items: Some(items),
            binding,
            index,
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("owner", &format_args!("{:#x}", self.binding.owner))
            .field("index", &self.index)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<'s, T> From<CursorMut<'s, T>> for Cursor<'s, T> {
    fn from(cursor: CursorMut<'s, T>) -> Self {
        cursor.into_const()
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_span(other) && self.index == other.index
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T> PartialOrd for CursorMut<'_, T> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        contract::require(self.same_span(other), || Violation::ForeignCursor);
        Some(self.index.cmp(&other.index))
    }
}

impl<T> RandomAccessCursor for CursorMut<'_, T> {
    type Item<'c>
        = &'c T
    where
        Self: 'c;

    fn try_get_at(&self, delta: isize) -> Result<&T, Violation> {
        CursorMut::try_get_at(self, delta)
    }

    fn try_shift(&mut self, n: isize) -> Result<(), Violation> {
        CursorMut::try_shift(self, n)
    }

    fn try_distance(&self, origin: &Self) -> Result<isize, Violation> {
        CursorMut::try_distance(self, origin)
    }
}

impl<T> RandomAccessCursorMut for CursorMut<'_, T> {
    type Target = T;

    fn try_get_mut_at(&mut self, delta: isize) -> Result<&mut T, Violation> {
        CursorMut::try_get_mut_at(self, delta)
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(self, n: isize) -> Self {
        self.offset(contract::enforce(negate(n)))
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, n: isize) {
        contract::enforce(self.try_shift(n));
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, n: isize) {
        contract::enforce(negate(n).and_then(|back| self.try_shift(back)));
    }
}

// ============================================================================
// REVERSE ADAPTOR
// ============================================================================

/// Walks a random-access cursor backwards.
///
/// Wraps the position one past the element it yields, so `ReverseCursor::new(end)`
/// yields the last element and `ReverseCursor::new(begin)` is the reverse end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseCursor<C> {
    base: C,
}

impl<C: RandomAccessCursor> ReverseCursor<C> {
    pub fn new(base: C) -> Self {
        ReverseCursor { base }
    }

    /// The underlying forward cursor.
    pub fn base(self) -> C {
        self.base
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for ReverseCursor<C> {
    type Item<'c>
        = C::Item<'c>
    where
        Self: 'c;

    fn try_get_at(&self, delta: isize) -> Result<C::Item<'_>, Violation> {
        self.base.try_get_at(negate(delta)? - 1)
    }

    fn try_shift(&mut self, n: isize) -> Result<(), Violation> {
        self.base.try_shift(negate(n)?)
    }

    fn try_distance(&self, origin: &Self) -> Result<isize, Violation> {
        origin.base.try_distance(&self.base)
    }
}

impl<C: RandomAccessCursorMut> RandomAccessCursorMut for ReverseCursor<C> {
    type Target = C::Target;

    fn try_get_mut_at(&mut self, delta: isize) -> Result<&mut C::Target, Violation> {
        self.base.try_get_mut_at(negate(delta)? - 1)
    }
}

impl<C: RandomAccessCursor + PartialOrd> PartialOrd for ReverseCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<C: RandomAccessCursor> Add<isize> for ReverseCursor<C> {
    type Output = Self;

    #[track_caller]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<C: RandomAccessCursor> Sub<isize> for ReverseCursor<C> {
    type Output = Self;

    #[track_caller]
    fn sub(self, n: isize) -> Self {
        self.offset(contract::enforce(negate(n)))
    }
}

impl<C: RandomAccessCursor> AddAssign<isize> for ReverseCursor<C> {
    #[track_caller]
    fn add_assign(&mut self, n: isize) {
        contract::enforce(self.try_shift(n));
    }
}

impl<C: RandomAccessCursor> SubAssign<isize> for ReverseCursor<C> {
    #[track_caller]
    fn sub_assign(&mut self, n: isize) {
        contract::enforce(negate(n).and_then(|back| self.try_shift(back)));
    }
}

impl<C: RandomAccessCursor> Sub for ReverseCursor<C> {
    type Output = isize;

    #[track_caller]
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

// ============================================================================
// ITERATOR
// ============================================================================

/// Iterator over a span, driven by a pair of cursors.
pub struct Iter<'s, T> {
    front: Cursor<'s, T>,
    back: Cursor<'s, T>,
}

impl<'s, T> Iter<'s, T> {
    pub(crate) fn new(front: Cursor<'s, T>, back: Cursor<'s, T>) -> Self {
        Iter { front, back }
    }

    fn remaining(&self) -> usize {
        self.back.index - self.front.index
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'s, T> Iterator for Iter<'s, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<&'s T> {
        if self.front == self.back {
            return None;
        }
        Some(self.front.post_advance().get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
