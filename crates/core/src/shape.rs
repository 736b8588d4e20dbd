//! Helpers for working with shapes and coordinate tuples.
//!
//! A shape is an ordered slice of extents, one per dimension. A coordinate
//! tuple (an "index") is valid for a shape when it has one coordinate per
//! dimension and each coordinate is below that dimension's extent.
//!
//! All layouts in this crate are row-major: the last axis varies fastest.

use crate::{IndexError, ShapeError};

/// Checks that `index` addresses an element of a container with `shape`.
///
/// # Errors
///
/// Returns [`IndexError::Rank`] if the number of coordinates differs from the
/// number of dimensions, or [`IndexError::OutOfRange`] for the first
/// coordinate that is not below its extent.
pub fn check(shape: &[usize], index: &[usize]) -> Result<(), IndexError> {
    if index.len() != shape.len() {
        return Err(IndexError::Rank {
            expected: shape.len(),
            actual: index.len(),
        });
    }

    for (axis, (&index, &extent)) in index.iter().zip(shape).enumerate() {
        if index >= extent {
            return Err(IndexError::OutOfRange {
                axis,
                index,
                extent,
            });
        }
    }

    Ok(())
}

/// Returns the number of elements a container with `shape` holds.
///
/// A rank-0 shape holds exactly one element.
///
/// # Errors
///
/// Returns [`ShapeError::TooLarge`] if the product overflows `usize`.
pub fn size(shape: &[usize]) -> Result<usize, ShapeError> {
    shape
        .iter()
        .try_fold(1_usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or_else(|| ShapeError::TooLarge(shape.to_vec()))
}

/// Returns the row-major offset of a validated index.
///
/// # Errors
///
/// Returns an [`IndexError`] if `index` is not valid for `shape`.
pub fn offset(shape: &[usize], index: &[usize]) -> Result<usize, IndexError> {
    check(shape, index)?;

    Ok(index
        .iter()
        .zip(shape)
        .fold(0, |acc, (&index, &extent)| acc * extent + index))
}

/// An iterator over every valid index of a shape, in row-major order.
///
/// Yields a single empty index for a rank-0 shape and nothing at all when
/// any extent is zero.
#[derive(Debug, Clone)]
pub struct Indices {
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Indices {
    /// Creates an iterator over the indices of `shape`.
    #[must_use]
    pub fn new(shape: &[usize]) -> Self {
        let next = if shape.contains(&0) {
            None
        } else {
            Some(vec![0; shape.len()])
        };

        Self {
            shape: shape.to_vec(),
            next,
        }
    }
}

impl Iterator for Indices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut next = current.clone();
        for axis in (0..next.len()).rev() {
            next[axis] += 1;
            if next[axis] < self.shape[axis] {
                self.next = Some(next);
                break;
            }
            next[axis] = 0;
        }

        Some(current)
    }
}

impl std::iter::FusedIterator for Indices {}
