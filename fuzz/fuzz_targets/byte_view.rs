// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for byte reinterpretation.
//!
//! Byte views of arbitrary windows must cover exactly `len * size_of::<T>()` bytes
//! at the window's address, and writes through a writeable byte view must show up
//! in the elements with native byte order.

#![no_main]

use arbitrary::Arbitrary;
use checked_span::{as_bytes, as_writeable_bytes, validate, Byte, Span, SpanMut};
use libfuzzer_sys::fuzz_target;
use std::mem;

#[derive(Debug, Arbitrary)]
struct ByteInput {
    data: Vec<u32>,
    offset: u8,
    count: u8,
    fill: u8,
}

fuzz_target!(|input: ByteInput| {
    let mut data = input.data;
    let (offset, count) = (input.offset as usize, input.count as usize);

    let span = Span::from_slice(&data);
    let Ok(window) = span.try_subspan(offset, count) else {
        assert!(offset > data.len() || count > data.len() - offset);
        return;
    };

    let bytes = as_bytes(window);
    assert!(validate(&bytes).is_ok());
    assert_eq!(bytes.len(), count * mem::size_of::<u32>());
    if count > 0 {
        assert_eq!(bytes.as_ptr().cast::<u32>(), window.as_ptr());
    }
    let expected: Vec<u8> = window.iter().flat_map(|v| v.to_ne_bytes()).collect();
    let actual: Vec<u8> = bytes.iter().map(|b| b.to_u8()).collect();
    assert_eq!(actual, expected);

    if let Ok(target) = SpanMut::from_slice(&mut data).try_subspan(offset, count) {
        let mut writeable = as_writeable_bytes(target);
        writeable.as_mut_slice().fill(Byte::new(input.fill));
    }
    let filled = u32::from_ne_bytes([input.fill; 4]);
    assert!(data[offset..offset + count].iter().all(|&v| v == filled));
});
