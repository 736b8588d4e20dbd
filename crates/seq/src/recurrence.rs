use std::iter::FusedIterator;

/// Where a [`Recurrence`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No terms have been produced yet.
    Start,
    /// At least one term has been produced and more may follow.
    Running,
    /// No further terms will be produced.
    Done,
}

/// A lazy, finite sequence produced by repeatedly stepping a state.
///
/// Each call to `next` passes the current state to `step`, which returns
/// the next term and the following state. The sequence ends after `bound`
/// terms, or earlier if `step` returns `None`.
///
/// The initial state is kept, so a recurrence can be replayed with
/// [`restart()`](Recurrence::restart) and two recurrences built from the
/// same inputs always yield the same terms.
///
/// # Example
///
/// ```
/// use weft_seq::Recurrence;
///
/// let powers = Recurrence::new(5, 1_u32, |&n| Some((n, n * 2)));
/// assert_eq!(powers.collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
/// ```
#[derive(Debug, Clone)]
pub struct Recurrence<S, F> {
    bound: usize,
    index: usize,
    initial: S,
    state: Option<S>,
    step: F,
}

impl<S: Clone, F> Recurrence<S, F> {
    /// Creates a recurrence of at most `bound` terms starting from `initial`.
    pub fn new<T>(bound: usize, initial: S, step: F) -> Self
    where
        F: Fn(&S) -> Option<(T, S)>,
    {
        Self {
            bound,
            index: 0,
            state: Some(initial.clone()),
            initial,
            step,
        }
    }

    /// Rewinds to the initial state.
    pub fn restart(&mut self) {
        self.index = 0;
        self.state = Some(self.initial.clone());
    }
}

impl<S, F> Recurrence<S, F> {
    /// Returns the maximum number of terms.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Returns the number of terms produced so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the current state, or `None` once the step has failed.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        if self.index >= self.bound || self.state.is_none() {
            Phase::Done
        } else if self.index == 0 {
            Phase::Start
        } else {
            Phase::Running
        }
    }

    /// Returns `true` if the step ended the sequence before `bound` terms.
    pub fn truncated(&self) -> bool {
        self.state.is_none() && self.index < self.bound
    }
}

impl<S, T, F> Iterator for Recurrence<S, F>
where
    F: Fn(&S) -> Option<(T, S)>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.bound {
            return None;
        }

        let state = self.state.as_ref()?;
        match (self.step)(state) {
            Some((term, next)) => {
                self.state = Some(next);
                self.index += 1;
                Some(term)
            }
            None => {
                log::debug!(
                    "recurrence stopped after {} of {} terms",
                    self.index,
                    self.bound
                );
                self.state = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_none() {
            return (0, Some(0));
        }
        (0, Some(self.bound - self.index))
    }
}

impl<S, T, F> FusedIterator for Recurrence<S, F> where F: Fn(&S) -> Option<(T, S)> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(n: &u8) -> Option<(u8, u8)> {
        let next = n.checked_sub(1)?;
        Some((*n, next))
    }

    #[test]
    fn stops_at_bound() {
        let seq = Recurrence::new(3, 10_u8, countdown);
        assert_eq!(seq.collect::<Vec<_>>(), vec![10, 9, 8]);
    }

    #[test]
    fn zero_bound_is_empty() {
        let mut seq = Recurrence::new(0, 10_u8, countdown);

        assert_eq!(seq.phase(), Phase::Done);
        assert_eq!(seq.next(), None);
        assert!(!seq.truncated());
    }

    #[test]
    fn phases_advance() {
        let mut seq = Recurrence::new(2, 5_u8, countdown);
        assert_eq!(seq.phase(), Phase::Start);

        seq.next();
        assert_eq!(seq.phase(), Phase::Running);

        seq.next();
        assert_eq!(seq.phase(), Phase::Done);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn failed_step_truncates() {
        let mut seq = Recurrence::new(10, 2_u8, countdown);

        assert_eq!(seq.by_ref().collect::<Vec<_>>(), vec![2, 1]);
        assert!(seq.truncated());
        assert_eq!(seq.phase(), Phase::Done);
        assert_eq!(seq.index(), 2);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn state_tracks_the_step() {
        let mut seq = Recurrence::new(5, 1_u8, countdown);
        assert_eq!(seq.state(), Some(&1));

        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.state(), Some(&0));

        assert_eq!(seq.next(), None);
        assert_eq!(seq.state(), None);
        assert!(seq.truncated());
    }

    #[test]
    fn restart_replays_the_sequence() {
        let mut seq = Recurrence::new(4, 7_u8, countdown);
        let first: Vec<_> = seq.by_ref().collect();

        seq.restart();
        let second: Vec<_> = seq.collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![7, 6, 5, 4]);
    }
}
