//! Constructors and the invariants they establish.

use crate::common::{assert_well_formed, SAMPLE};
use checked_span::{make_span, make_span_mut, Dynamic, Fixed, Span, SpanMut, Violation};
use std::mem;

#[test]
fn empty_view_is_null_and_zero_length() {
    let span: Span<'_, String> = Span::default();
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
    assert_eq!(span.size_bytes(), 0);
    assert!(span.as_ptr().is_null());
    assert_well_formed(&span);
}

#[test]
fn raw_parts_keep_pointer_and_count() {
    let data = vec![1.5f32, 2.5, 3.5];
    // SAFETY: `data` outlives the view and is not written while it exists.
    let span = unsafe { Span::<f32>::try_from_raw_parts(data.as_ptr(), 2) };
    let span = span.unwrap();
    assert_eq!(span.len(), 2);
    assert_eq!(span.as_ptr(), data.as_ptr());
    assert_eq!(span, [1.5, 2.5]);
}

#[test]
fn raw_parts_reject_null_with_count() {
    // SAFETY: rejected before any access.
    let result = unsafe { Span::<u8>::try_from_raw_parts(std::ptr::null(), 3) };
    assert_eq!(result.err(), Some(Violation::NullData { count: 3 }));
}

#[test]
fn negative_counts_are_rejected() {
    assert_eq!(Dynamic::try_from_signed(4), Ok(Dynamic::new(4)));
    assert_eq!(
        Dynamic::try_from_signed(-4),
        Err(Violation::NegativeCount { count: -4 })
    );
}

#[test]
fn fixed_extent_agreement() {
    let data = [0u8; 5];
    // SAFETY: `data` is five live bytes.
    let five = unsafe { Span::<u8, Fixed<5>>::try_from_raw_parts(data.as_ptr(), 5) };
    assert_eq!(five.map(|s| s.len()), Ok(5));
    // SAFETY: as above.
    let four = unsafe { Span::<u8, Fixed<5>>::try_from_raw_parts(data.as_ptr(), 4) };
    assert_eq!(
        four.err(),
        Some(Violation::ExtentMismatch {
            expected: 5,
            actual: 4
        })
    );
}

#[test]
fn pointer_ranges() {
    let data = [1u64, 2, 3, 4];
    let range = data.as_ptr_range();
    // SAFETY: the range covers `data`.
    let span = unsafe { Span::<u64>::try_from_ptr_range(range.clone()) }.unwrap();
    assert_eq!(span, data);

    let reversed = range.end..range.start;
    // SAFETY: rejected before any access.
    let err = unsafe { Span::<u64>::try_from_ptr_range(reversed) }.err();
    assert!(matches!(err, Some(Violation::PointerRangeReversed { .. })));
}

#[test]
fn arrays_build_fixed_views() {
    let span = Span::from_array(&SAMPLE);
    assert_eq!(span.extent(), Fixed::<5>);
    assert_eq!(span.len(), 5);
    assert_eq!(mem::size_of_val(&span), mem::size_of::<*const i32>());
}

#[test]
fn containers_build_dynamic_views() {
    let v = vec![1, 2, 3];
    let boxed: Box<[i32]> = v.clone().into_boxed_slice();
    assert_eq!(make_span(&v), [1, 2, 3]);
    assert_eq!(make_span(&*boxed), make_span(&v));
    assert_eq!(make_span(&SAMPLE).len(), 5);

    let mut w = vec![0u8; 2];
    make_span_mut(&mut w)[1] = 4;
    assert_eq!(w, [0, 4]);
}

#[test]
fn container_elements_may_be_reinterpreted() {
    let v: Vec<i16> = vec![-1, 2];
    let unsigned = Span::<u16>::from_container(&v);
    assert_eq!(unsigned, [u16::MAX, 2]);

    let mut w: Vec<u64> = vec![0, 0];
    let mut signed = SpanMut::<i64>::from_container(&mut w);
    signed[1] = -1;
    assert_eq!(w[1], u64::MAX);
}

#[test]
fn fixed_container_checks_length() {
    let v = vec![1, 2, 3];
    assert!(Span::<i32, Fixed<3>>::try_from_container(&v).is_ok());
    assert_eq!(
        Span::<i32, Fixed<2>>::try_from_container(&v).err(),
        Some(Violation::ExtentMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn copies_view_the_same_storage() {
    let span = Span::from_array(&SAMPLE);
    let copy = span;
    assert_eq!(copy.as_ptr(), span.as_ptr());
    assert_eq!(copy, span);
}
