//! Sub-views: prefixes, suffixes, windows and splits.

use crate::common::{ascending, assert_window_of, SAMPLE};
use checked_span::{Fixed, Span, SpanMut, Violation};

#[test]
fn prefixes_and_suffixes() {
    let span = Span::from_array(&SAMPLE);
    assert_window_of(&span.first(2), &SAMPLE, 0);
    assert_window_of(&span.last(2), &SAMPLE, 3);
    assert_eq!(span.first(0).len(), 0);
    assert_eq!(span.last(5), span);
}

#[test]
fn windows() {
    let span = Span::from_array(&SAMPLE);
    let mid = span.try_subspan(1, 3).unwrap();
    assert_window_of(&mid, &SAMPLE, 1);
    assert_eq!(mid, [20, 30, 40]);
    assert_window_of(&span.subspan_from(2), &SAMPLE, 2);
    assert!(span.subspan_from(5).is_empty());
}

#[test]
fn static_sub_views_carry_their_size() {
    let span = Span::from_array(&SAMPLE);
    let head: Span<'_, i32, Fixed<2>> = span.first_const::<2>();
    let tail: Span<'_, i32, Fixed<2>> = span.last_const::<2>();
    let mid: Span<'_, i32, Fixed<3>> = span.subspan_const::<1, 3>();
    assert_eq!(head, [10, 20]);
    assert_eq!(tail, [40, 50]);
    assert_eq!(mid, [20, 30, 40]);
    assert_eq!(span.subspan_from_const::<3>(), [40, 50]);
}

#[test]
fn oversized_requests_are_rejected() {
    let span = Span::from_array(&SAMPLE);
    assert_eq!(
        span.try_first(6).err(),
        Some(Violation::SubviewOutOfRange {
            offset: 0,
            count: 6,
            len: 5
        })
    );
    assert!(span.try_last(6).is_err());
    assert!(span.try_subspan(6, 0).is_err());
    assert!(span.try_subspan(2, 4).is_err());
    assert!(span.try_subspan(usize::MAX, 2).is_err());
    assert!(span.try_subspan_from(6).is_err());
    assert!(span.try_split_at(6).is_err());
}

#[test]
fn composition_matches_direct_window() {
    let data = ascending(64);
    let span = Span::from_slice(&data);
    let nested = span.subspan(8, 40).subspan(4, 20).first(10).last(5);
    assert_eq!(nested, span.subspan(17, 5));
    assert_window_of(&nested, &data, 17);
}

#[test]
fn split_covers_the_whole_view() {
    let span = Span::from_array(&SAMPLE);
    let (left, right) = span.split_at(2);
    assert_eq!(left, [10, 20]);
    assert_eq!(right, [30, 40, 50]);
    assert_eq!(left.len() + right.len(), span.len());
}

#[test]
fn writable_sub_views() {
    let mut data = [0u8; 6];
    {
        let mut span = SpanMut::from_array(&mut data);
        span.reborrow().subspan(1, 2).as_mut_slice().fill(1);
        let (mut left, mut right) = span.split_at_mut(3);
        left[0] = 9;
        right[2] = 7;
        assert!(right.reborrow().try_first(4).is_err());
    }
    assert_eq!(data, [9, 1, 1, 0, 0, 7]);
}

#[test]
fn sub_views_of_empty_views() {
    let span = Span::<u64>::empty();
    assert!(span.first(0).is_empty());
    assert!(span.last(0).is_empty());
    assert!(span.subspan(0, 0).is_empty());
    assert!(span.try_first(1).is_err());
}
