//! Element access, observers and pointer lookups.

use crate::common::SAMPLE;
use checked_span::{Span, SpanMut, Violation};

#[test]
fn observers_agree() {
    let span = Span::from_array(&SAMPLE);
    assert_eq!(span.len(), span.size());
    assert_eq!(span.size_bytes(), 5 * std::mem::size_of::<i32>());
    assert!(!span.is_empty());
    assert_eq!(span.as_slice(), &SAMPLE);
    assert_eq!(span.to_vec(), SAMPLE.to_vec());
}

#[test]
fn checked_access_in_range() {
    let span = Span::from_array(&SAMPLE);
    assert_eq!(span.try_at(0), Ok(&10));
    assert_eq!(span.try_at(4), Ok(&50));
    assert_eq!(span[2], 30);
    assert_eq!(span.get(3), Some(&40));
}

#[test]
fn checked_access_out_of_range() {
    let span = Span::from_array(&SAMPLE);
    assert_eq!(
        span.try_at(5),
        Err(Violation::IndexOutOfRange { index: 5, len: 5 })
    );
    assert_eq!(
        span.try_at(-1),
        Err(Violation::IndexOutOfRange { index: -1, len: 5 })
    );
    assert_eq!(span.get(5), None);
}

#[test]
fn empty_view_rejects_every_index() {
    let span = Span::<u8>::empty();
    assert!(span.try_at(0).is_err());
    assert_eq!(span.get(0), None);
    assert!(span.as_slice().is_empty());
}

#[test]
fn writes_reach_the_storage() {
    let mut data = [1, 2, 3];
    {
        let mut span = SpanMut::from_array(&mut data);
        *span.try_at_mut(0).unwrap() = 7;
        span[2] += 10;
        if let Some(v) = span.get_mut(1) {
            *v = 0;
        }
        assert_eq!(
            span.try_at_mut(3).err(),
            Some(Violation::IndexOutOfRange { index: 3, len: 3 })
        );
    }
    assert_eq!(data, [7, 0, 13]);
}

#[test]
fn iteration_visits_in_order() {
    let span = Span::from_array(&SAMPLE);
    let forward: Vec<i32> = span.iter().copied().collect();
    let backward: Vec<i32> = span.iter().rev().copied().collect();
    assert_eq!(forward, SAMPLE);
    assert_eq!(backward, [50, 40, 30, 20, 10]);
    assert_eq!(span.iter().len(), 5);

    let mut total = 0;
    for x in span {
        total += x;
    }
    assert_eq!(total, 150);
}

#[test]
fn mutable_iteration() {
    let mut data = vec![1u32, 2, 3];
    let mut span = SpanMut::from_slice(&mut data);
    for x in span.iter_mut() {
        *x *= 2;
    }
    for x in &mut span {
        *x += 1;
    }
    assert_eq!(span, [3, 5, 7]);
}

#[test]
fn pointer_lookup() {
    let span = Span::from_array(&SAMPLE);
    let third = &span.as_slice()[2] as *const i32;
    assert!(span.contains_ptr(third));
    assert_eq!(span.try_index_of_ptr(third), Ok(2));

    let outside = [0i32];
    assert!(!span.contains_ptr(outside.as_ptr()));
    assert!(matches!(
        span.try_index_of_ptr(outside.as_ptr()),
        Err(Violation::PointerOutOfRange { .. })
    ));
}

#[test]
fn shared_view_of_writable_view() {
    let mut data = [4u8, 5];
    let mut span = SpanMut::from_array(&mut data);
    assert_eq!(span.as_span(), [4, 5]);
    span.as_mut_slice()[0] = 9;
    let shared = span.into_span();
    assert_eq!(shared, [9, 5]);
}
