//! Shared test utilities and fixtures.

#![allow(dead_code)]

use checked_span::{validate, Extent, Span};

// Re-export canonical test utilities from checked_span::testing
pub use checked_span::testing::{ascending, SAMPLE};

/// Assert that a view satisfies every view invariant.
pub fn assert_well_formed<T, E: Extent>(span: &Span<'_, T, E>) {
    if let Err(v) = validate(span) {
        panic!("view invariant broken: {}", v);
    }
}

/// Assert that `view` shows exactly `expected[offset..offset + view.len()]`, in place.
pub fn assert_window_of<T: PartialEq + std::fmt::Debug, E: Extent>(
    view: &Span<'_, T, E>,
    expected: &[T],
    offset: usize,
) {
    assert_well_formed(view);
    assert_eq!(view.as_slice(), &expected[offset..offset + view.len()]);
    if !view.is_empty() {
        assert_eq!(view.as_ptr(), expected[offset..].as_ptr());
    }
}
