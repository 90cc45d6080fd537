//! Cursors through the public API.

use crate::common::SAMPLE;
use checked_span::{
    Cursor, RandomAccessCursor, RandomAccessCursorMut, Span, SpanMut, Violation,
};

#[test]
fn walk_forward_from_begin_to_end() {
    let span = Span::from_array(&SAMPLE);
    let mut cursor = span.begin();
    let end = span.end();
    let mut seen = Vec::new();
    while cursor != end {
        seen.push(*cursor.get());
        cursor.advance();
    }
    assert_eq!(seen, SAMPLE);
    assert_eq!(end - span.begin(), 5);
}

#[test]
fn end_is_not_readable() {
    let span = Span::from_array(&SAMPLE);
    assert_eq!(
        span.end().try_get(),
        Err(Violation::CursorOutOfRange { index: 5, len: 5 })
    );
    assert!(span.end().try_offset(1).is_err());
    assert!(span.begin().try_offset(-1).is_err());
}

#[test]
fn random_access_arithmetic() {
    let span = Span::from_array(&SAMPLE);
    let third = span.begin() + 2;
    assert_eq!(*third.get(), 30);
    assert_eq!(*(third - 1).get(), 20);
    assert!(third > span.begin());
    assert_eq!(third.distance(&span.end()), -3);

    let mut c = third;
    c += 2;
    c -= 1;
    assert_eq!(c.index(), 3);
    assert_eq!(c.post_retreat().index(), 3);
    assert_eq!(c.index(), 2);
}

#[test]
fn reverse_walk() {
    let span = Span::from_array(&SAMPLE);
    let mut cursor = span.rbegin();
    let mut seen = Vec::new();
    while cursor != span.rend() {
        seen.push(*cursor.get());
        cursor.advance();
    }
    assert_eq!(seen, [50, 40, 30, 20, 10]);
    assert_eq!(span.rend() - span.rbegin(), 5);
    assert!(span.rend().try_get().is_err());
}

#[test]
fn cursors_from_other_spans() {
    let a = Span::from_array(&SAMPLE);
    let b = a;
    let from_a = a.begin();
    let from_b = b.begin();
    assert!(!from_a.same_span(&from_b));
    assert_ne!(from_a, from_b);
    assert_eq!(from_a.try_distance(&from_b), Err(Violation::ForeignCursor));
}

fn begin_of(items: &[i32]) -> Cursor<'_, i32> {
    let span = Span::from_slice(items);
    span.begin()
}

#[test]
fn cursors_from_views_built_in_separate_calls() {
    let first = [1, 2, 3];
    let second = [7, 8, 9, 10];
    let a = begin_of(&first);
    let b = begin_of(&second);
    assert!(!a.same_span(&b));
    assert_ne!(a, b);
    assert_eq!(a.try_distance(&b), Err(Violation::ForeignCursor));
    assert_eq!(b.try_distance(&a), Err(Violation::ForeignCursor));
}

#[test]
fn cursors_from_views_built_in_a_loop() {
    let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let mut begins = Vec::new();
    for row in &rows {
        let span = Span::from_slice(row.as_slice());
        begins.push(span.begin());
    }
    assert_ne!(begins[0], begins[1]);
    assert!(!begins[0].same_span(&begins[1]));
    assert_eq!(
        begins[1].try_distance(&begins[0]),
        Err(Violation::ForeignCursor)
    );
    assert_eq!(*begins[1].get(), 4);
}

#[test]
fn unbound_cursor() {
    let cursor: Cursor<'_, u8> = Cursor::default();
    assert!(cursor.is_null());
    assert_eq!(cursor, Cursor::default());
    assert_eq!(cursor.try_get(), Err(Violation::NullCursor));
    assert_eq!(cursor.try_offset(1), Err(Violation::NullCursor));
}

#[test]
fn writable_cursor() {
    let mut data = [0u8; 3];
    {
        let mut span = SpanMut::from_array(&mut data);
        let mut cursor = span.begin_mut();
        for value in 1..=3 {
            *cursor.get_mut() = value;
            cursor.advance();
        }
        assert!(cursor.try_get_mut().is_err());
        let read_only = cursor.into_const();
        assert_eq!(read_only.index(), 3);
    }
    assert_eq!(data, [1, 2, 3]);
}

#[test]
fn writable_cursor_arithmetic() {
    let mut data = [0i32; 5];
    let mut span = SpanMut::from_array(&mut data);
    let mut cursor = span.begin_mut() + 1;
    *cursor.post_advance() = 1;
    *cursor.post_advance() = 2;
    cursor -= 3;
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.try_get_at(2), Ok(&2));
    assert_eq!(cursor.distance(&cursor), 0);
    assert!(cursor.try_offset(-1).is_err());
    assert_eq!(data, [0, 1, 2, 0, 0]);
}

#[test]
fn writable_reverse_cursor() {
    let mut data = [0i32; 5];
    {
        let mut span = SpanMut::from_array(&mut data);
        let mut cursor = span.rbegin_mut();
        for value in SAMPLE {
            *cursor.get_mut() = value;
            cursor.advance();
        }
        assert!(cursor.try_get().is_err());
        assert_eq!(cursor.try_distance(&cursor), Ok(0));
    }
    assert_eq!(data, [50, 40, 30, 20, 10]);
}
