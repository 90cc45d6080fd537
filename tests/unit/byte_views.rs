//! Byte reinterpretation.

use crate::common::{assert_well_formed, SAMPLE};
use checked_span::{as_bytes, as_writeable_bytes, Byte, Span, SpanMut};
use std::mem;

#[test]
fn byte_length_is_element_length_times_size() {
    let span = Span::from_array(&SAMPLE);
    let bytes = as_bytes(span);
    assert_eq!(bytes.len(), 5 * mem::size_of::<i32>());
    assert_eq!(bytes.size_bytes(), span.size_bytes());
    assert_eq!(bytes.as_ptr().cast::<i32>(), span.as_ptr());
    assert_well_formed(&bytes);
}

#[test]
fn sub_view_bytes() {
    let span = Span::from_array(&SAMPLE);
    let bytes = as_bytes(span.subspan(1, 3));
    assert_eq!(bytes.len(), 12);
    let expected: Vec<u8> = SAMPLE[1..4].iter().flat_map(|v| v.to_ne_bytes()).collect();
    let actual: Vec<u8> = bytes.iter().map(|b| b.to_u8()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn writing_bytes_rewrites_elements() {
    let mut data = [0u16; 2];
    {
        let mut bytes = as_writeable_bytes(SpanMut::from_array(&mut data));
        bytes[0] = Byte::new(0xAB);
        bytes[1] = Byte::new(0xAB);
    }
    assert_eq!(data, [0xABAB, 0]);
}

#[test]
fn empty_view_has_empty_bytes() {
    let bytes = as_bytes(Span::<f64>::empty());
    assert_eq!(bytes.len(), 0);
    assert_well_formed(&bytes);
}
