//! Shared fixtures for the cross-crate tests in `tests/`.

use std::{cell::Cell, rc::Rc};

use weft_core::Dense;

/// The values most dispatch tests reduce over.
#[must_use]
pub fn sample() -> Dense<f64> {
    Dense::from(vec![0.2, 0.9, 0.1])
}

/// Wraps `f` so every call increments `calls`.
pub fn counted<F>(calls: &Rc<Cell<usize>>, f: F) -> impl Fn(f64) -> f64 + 'static
where
    F: Fn(f64) -> f64 + 'static,
{
    let calls = Rc::clone(calls);
    move |x| {
        calls.set(calls.get() + 1);
        f(x)
    }
}
