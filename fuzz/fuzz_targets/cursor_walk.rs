// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor movement.
//!
//! A forward and a reverse cursor take arbitrary signed steps. Every accepted step
//! must land in `[0, len]`, reads must succeed exactly below `len`, and the reverse
//! cursor must always read the element mirrored around the view.

#![no_main]

use arbitrary::Arbitrary;
use checked_span::{RandomAccessCursor, Span};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CursorInput {
    data: Vec<u32>,
    steps: Vec<i16>,
}

fuzz_target!(|input: CursorInput| {
    let span = Span::from_slice(&input.data);
    let len = span.len();
    let mut forward = span.begin();
    let mut reverse = span.rbegin();
    let mut position = 0isize;

    for &n in input.steps.iter().take(128) {
        let n = n as isize;
        let target = position + n;
        let in_range = target >= 0 && target as usize <= len;

        match forward.try_offset(n) {
            Ok(moved) => {
                assert!(in_range);
                assert_eq!(moved.index() as isize, target);
                assert_eq!(moved - forward, n);
                forward = moved;
            }
            Err(_) => {
                assert!(!in_range);
                continue;
            }
        }

        reverse = reverse.try_offset(n).expect("reverse cursor mirrors the forward range");
        position = target;

        let index = position as usize;
        match forward.try_get() {
            Ok(value) => {
                assert!(index < len);
                assert_eq!(*value, input.data[index]);
            }
            Err(_) => assert_eq!(index, len),
        }
        match reverse.try_get() {
            Ok(value) => assert_eq!(*value, input.data[len - 1 - index]),
            Err(_) => assert_eq!(index, len),
        }
        assert_eq!(reverse.distance(&span.rbegin()), position);
    }
});
