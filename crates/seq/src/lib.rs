//! Bounded, restartable sequence generators for Weft.
//!
//! - [`Recurrence`]: a lazy sequence of at most `bound` terms produced by
//!   stepping a state
//! - [`Fibonacci`]: the Fibonacci numbers as a bounded recurrence

mod fibonacci;
mod recurrence;

pub use fibonacci::Fibonacci;
pub use recurrence::{Phase, Recurrence};
