// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for chains of sub-view operations.
//!
//! Each step narrows the current view through a `try_*` operation. Accepted steps
//! must produce a well-formed view showing exactly the slice window the same
//! arithmetic selects; rejected steps must be the ones a slice would reject too.

#![no_main]

use arbitrary::Arbitrary;
use checked_span::{validate, Span};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    First(u8),
    Last(u8),
    Subspan(u8, u8),
    SubspanFrom(u8),
    SplitLeft(u8),
    SplitRight(u8),
    At(i16),
}

#[derive(Debug, Arbitrary)]
struct SubviewInput {
    data: Vec<u16>,
    ops: Vec<Op>,
}

fuzz_target!(|input: SubviewInput| {
    let data = &input.data;
    let mut span = Span::from_slice(data);
    // The current view as a range of `data`.
    let (mut start, mut len) = (0usize, data.len());

    for op in input.ops.iter().take(64) {
        let (result, window) = match *op {
            Op::First(n) => {
                let n = n as usize;
                (span.try_first(n), (n <= len).then_some((start, n)))
            }
            Op::Last(n) => {
                let n = n as usize;
                (span.try_last(n), (n <= len).then(|| (start + len - n, n)))
            }
            Op::Subspan(o, c) => {
                let (o, c) = (o as usize, c as usize);
                let fits = o <= len && c <= len - o;
                (span.try_subspan(o, c), fits.then_some((start + o, c)))
            }
            Op::SubspanFrom(o) => {
                let o = o as usize;
                (span.try_subspan_from(o), (o <= len).then(|| (start + o, len - o)))
            }
            Op::SplitLeft(m) => {
                let m = m as usize;
                (span.try_split_at(m).map(|(l, _)| l), (m <= len).then_some((start, m)))
            }
            Op::SplitRight(m) => {
                let m = m as usize;
                (span.try_split_at(m).map(|(_, r)| r), (m <= len).then(|| (start + m, len - m)))
            }
            Op::At(i) => {
                let expected = usize::try_from(i).ok().filter(|&i| i < len).map(|i| &data[start + i]);
                assert_eq!(span.try_at(i as isize).ok(), expected);
                continue;
            }
        };

        match (result, window) {
            (Ok(view), Some((s, l))) => {
                assert!(validate(&view).is_ok());
                assert_eq!(view.as_slice(), &data[s..s + l]);
                span = view;
                start = s;
                len = l;
            }
            (Err(_), None) => {}
            (result, window) => panic!("disagreement: {:?} vs {:?}", result.map(|v| v.len()), window),
        }
    }
});
