use thiserror::Error;

use crate::{Container, ShapeError, transform::Transform};

/// A container combining two equally shaped containers element by element.
///
/// The transform receives a `(left, right)` pair and is called on every
/// read, like [`Mapped`](super::Mapped). Shapes are compared when the
/// adapter is built, so a mismatch is reported before any element is read.
///
/// Created by [`Container::zip_with()`] or [`Zipped::new()`].
#[derive(Debug, Clone)]
pub struct Zipped<L, R, F> {
    left: L,
    right: R,
    transform: F,
}

/// Errors that can occur when reading from a [`Zipped`] container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZipError<L, R, T> {
    #[error("left container: {0}")]
    Left(#[source] L),

    #[error("right container: {0}")]
    Right(#[source] R),

    #[error("transform failed: {0}")]
    Transform(#[source] T),
}

impl<L, R, F> Zipped<L, R, F>
where
    L: Container,
    R: Container,
{
    /// Combines `left` and `right` using `transform`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Mismatch`] if the shapes differ.
    pub fn new(left: L, right: R, transform: F) -> Result<Self, ShapeError> {
        if left.shape() != right.shape() {
            return Err(ShapeError::Mismatch {
                left: left.shape().to_vec(),
                right: right.shape().to_vec(),
            });
        }

        Ok(Self {
            left,
            right,
            transform,
        })
    }
}

impl<L, R, F> Zipped<L, R, F> {
    /// Returns the left container.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns the right container.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Consumes the adapter and returns both containers and the transform.
    pub fn into_parts(self) -> (L, R, F) {
        (self.left, self.right, self.transform)
    }
}

impl<L, R, F> Container for Zipped<L, R, F>
where
    L: Container,
    R: Container,
    F: Transform<(L::Elem, R::Elem)>,
{
    type Elem = F::Output;
    type Error = ZipError<L::Error, R::Error, F::Error>;

    fn shape(&self) -> &[usize] {
        self.left.shape()
    }

    fn get(&self, index: &[usize]) -> Result<Self::Elem, Self::Error> {
        let left = self.left.get(index).map_err(ZipError::Left)?;
        let right = self.right.get(index).map_err(ZipError::Right)?;
        self.transform
            .apply((left, right))
            .map_err(ZipError::Transform)
    }
}
