//! Conversions between views, extents and element types.

use crate::common::SAMPLE;
use checked_span::{
    extents_compatible, Byte, ByteExtent, Dynamic, Fixed, Span, SpanMut, Violation,
};

#[test]
fn fixed_widens_to_dynamic() {
    let fixed = Span::from_array(&SAMPLE);
    let dynamic: Span<'_, i32> = fixed.into();
    assert_eq!(dynamic.extent(), Dynamic::new(5));
    assert_eq!(dynamic, fixed);
}

#[test]
fn dynamic_narrows_to_fixed_with_check() {
    let data = SAMPLE;
    let dynamic = Span::from_slice(&data[..]);
    let fixed = Span::<i32, Fixed<5>>::try_from(dynamic).unwrap();
    assert_eq!(fixed.as_ptr(), dynamic.as_ptr());

    let wrong = Span::<i32, Fixed<4>>::try_from(dynamic);
    assert_eq!(
        wrong.err(),
        Some(Violation::ExtentMismatch {
            expected: 4,
            actual: 5
        })
    );
    assert!(dynamic.try_with_extent::<Fixed<3>>().is_err());
}

#[test]
fn slices_and_vectors_convert() {
    let v = vec![1u8, 2, 3];
    let from_vec: Span<'_, u8> = (&v).into();
    let from_slice: Span<'_, u8> = v.as_slice().into();
    assert_eq!(from_vec, from_slice);
    assert!(Span::<u8, Fixed<3>>::try_from(v.as_slice()).is_ok());
    assert!(Span::<u8, Fixed<2>>::try_from(v.as_slice()).is_err());
}

#[test]
fn writable_converts_to_read_only() {
    let mut data = [1, 2, 3];
    let writable = SpanMut::from_array(&mut data);
    let ptr = writable.as_ptr();
    let read_only: Span<'_, i32, Fixed<3>> = writable.into();
    assert_eq!(read_only.as_ptr(), ptr);
    assert_eq!(read_only, [1, 2, 3]);
}

#[test]
fn writable_narrowing() {
    let mut data = vec![0i64; 4];
    let span = SpanMut::from_slice(&mut data);
    let mut fixed = SpanMut::<i64, Fixed<4>>::try_from(span).unwrap();
    fixed[3] = -2;
    assert_eq!(data[3], -2);
}

#[test]
fn element_casts_keep_count_and_address() {
    let signed = [-1i32, 1];
    let span = Span::from_array(&signed);
    let unsigned: Span<'_, u32, Fixed<2>> = span.cast();
    assert_eq!(unsigned, [u32::MAX, 1]);
    assert_eq!(unsigned.as_ptr().cast::<i32>(), span.as_ptr());

    let converted: Span<'_, u32> = span.convert();
    assert_eq!(converted.extent(), Dynamic::new(2));
}

#[test]
fn byte_elements_read_back_as_octets() {
    let octets = [Byte::new(1), Byte::new(2)];
    let span = Span::from_array(&octets);
    let raw: Span<'_, u8, Fixed<2>> = span.cast();
    assert_eq!(raw, [1u8, 2]);
}

#[test]
fn compatibility_is_const_evaluable() {
    const SAME: bool = extents_compatible::<Fixed<4>, Fixed<4>>();
    const DIFFERENT: bool = extents_compatible::<Fixed<4>, Fixed<3>>();
    assert!(SAME);
    assert!(!DIFFERENT);
    assert!(extents_compatible::<Dynamic, Fixed<3>>());
    assert!(extents_compatible::<Fixed<3>, Dynamic>());
    assert!(extents_compatible::<ByteExtent<Fixed<2>, u32>, Fixed<8>>());
}

#[test]
fn comparisons_ignore_extent_kind() {
    let a = [1, 2, 3];
    let b = vec![1, 2, 4];
    let fixed = Span::from_array(&a);
    let dynamic = Span::from_slice(&b);
    assert_ne!(fixed, dynamic);
    assert!(fixed < dynamic);
    assert_eq!(fixed, a);
    assert_eq!(dynamic, b);
    assert!(Span::from_slice(&a[..2]) < fixed);
}
