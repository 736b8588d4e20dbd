use std::iter::FusedIterator;

use num_traits::{CheckedAdd, One, Zero};

use crate::{Phase, Recurrence};

/// The `(previous, next)` pair a Fibonacci recurrence carries between terms.
///
/// `next` is `None` once it no longer fits in `T`.
type State<T> = (T, Option<T>);

type Step<T> = fn(&State<T>) -> Option<(T, State<T>)>;

/// The first `bound` Fibonacci numbers, starting `1, 1, 2, 3, 5`.
///
/// Terms are computed lazily from the recurrence state, which starts at
/// `previous = 0, next = 1`. Each step yields `next` and advances to
/// `(next, previous + next)`.
///
/// Additions are checked. If a term does not fit in `T` the sequence ends
/// early and [`truncated()`](Fibonacci::truncated) reports it; with the
/// default `u64`, the first 93 terms are representable.
///
/// # Example
///
/// ```
/// use weft_seq::Fibonacci;
///
/// let terms: Vec<u64> = Fibonacci::new(10).collect();
/// assert_eq!(terms, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci<T = u64> {
    inner: Recurrence<State<T>, Step<T>>,
}

impl<T> Fibonacci<T>
where
    T: Clone + CheckedAdd + Zero + One,
{
    /// Creates a sequence of the first `bound` Fibonacci numbers.
    pub fn new(bound: usize) -> Self {
        let step: Step<T> = advance::<T>;
        Self {
            inner: Recurrence::new(bound, (T::zero(), Some(T::one())), step),
        }
    }

    /// Rewinds to the first term.
    pub fn restart(&mut self) {
        self.inner.restart();
    }
}

impl<T> Fibonacci<T> {
    /// Returns the number of terms requested.
    pub fn bound(&self) -> usize {
        self.inner.bound()
    }

    /// Returns the number of terms produced so far.
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.inner.phase()
    }

    /// Returns `true` if a term overflowed `T` before `bound` terms were produced.
    pub fn truncated(&self) -> bool {
        self.inner.truncated()
    }
}

fn advance<T>(state: &State<T>) -> Option<(T, State<T>)>
where
    T: Clone + CheckedAdd,
{
    let (previous, next) = state;
    let term = next.clone()?;
    let after = previous.checked_add(&term);
    Some((term.clone(), (term, after)))
}

impl<T> Iterator for Fibonacci<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedIterator for Fibonacci<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ten_terms() {
        let terms: Vec<u64> = Fibonacci::new(10).collect();
        assert_eq!(terms, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn zero_length_is_empty() {
        let mut fib = Fibonacci::<u64>::new(0);

        assert_eq!(fib.phase(), Phase::Done);
        assert_eq!(fib.next(), None);
    }

    #[test]
    fn independent_instances_agree() {
        let a: Vec<u32> = Fibonacci::new(20).collect();
        let b: Vec<u32> = Fibonacci::new(20).collect();

        assert_eq!(a, b);
        assert_eq!(a.last(), Some(&6765));
    }

    #[test]
    fn restart_reproduces_terms() {
        let mut fib = Fibonacci::<u64>::new(6);
        let first: Vec<_> = fib.by_ref().collect();
        assert_eq!(fib.phase(), Phase::Done);

        fib.restart();
        assert_eq!(fib.phase(), Phase::Start);
        assert_eq!(fib.collect::<Vec<_>>(), first);
    }

    #[test]
    fn largest_representable_terms() {
        let terms: Vec<u8> = Fibonacci::new(20).collect();

        // 233 is the last Fibonacci number below 256.
        assert_eq!(terms.last(), Some(&233));
        assert_eq!(terms.len(), 13);
    }

    #[test]
    fn overflow_truncates_instead_of_wrapping() {
        let mut fib = Fibonacci::<u8>::new(20);
        let count = fib.by_ref().count();

        assert_eq!(count, 13);
        assert!(fib.truncated());
        assert_eq!(fib.phase(), Phase::Done);
    }

    #[test]
    fn u64_holds_ninety_three_terms() {
        let mut fib = Fibonacci::<u64>::new(93);

        assert_eq!(fib.by_ref().last(), Some(12_200_160_415_121_876_738));
        assert!(!fib.truncated());
    }
}
