#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Container, ContainerMut, IndexError, ShapeError, shape};

/// Owned, row-major storage for an n-dimensional container.
///
/// `Dense` is the base container most adapters in this crate are built on.
/// Its shape is fixed at construction and always agrees with the number of
/// stored elements.
///
/// # Example
///
/// ```
/// use weft_core::{Container, ContainerMut, Dense};
///
/// let mut grid = Dense::new(&[2, 3], vec![0, 1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(grid.get(&[1, 2]), Ok(5));
///
/// grid.set(&[0, 0], 10).unwrap();
/// assert_eq!(grid.get(&[0, 0]), Ok(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "DenseParts<T>",
        bound(deserialize = "T: Deserialize<'de>")
    )
)]
pub struct Dense<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> Dense<T> {
    /// Creates a container with the given shape and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Length`] if `data` does not hold exactly as many
    /// elements as `shape` describes, or [`ShapeError::TooLarge`] if that
    /// count overflows `usize`.
    pub fn new(shape: &[usize], data: Vec<T>) -> Result<Self, ShapeError> {
        let expected = shape::size(shape)?;
        if data.len() != expected {
            return Err(ShapeError::Length {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }

        Ok(Self::from_parts(shape.to_vec(), data))
    }

    /// Creates a container by calling `f` with every index in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::TooLarge`] if the shape's size overflows `usize`.
    pub fn from_fn<F>(shape: &[usize], mut f: F) -> Result<Self, ShapeError>
    where
        F: FnMut(&[usize]) -> T,
    {
        let size = shape::size(shape)?;
        let mut data = Vec::with_capacity(size);
        data.extend(shape::Indices::new(shape).map(|index| f(&index)));

        Ok(Self::from_parts(shape.to_vec(), data))
    }

    /// Creates a container with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::TooLarge`] if the shape's size overflows `usize`.
    pub fn filled(shape: &[usize], value: T) -> Result<Self, ShapeError>
    where
        T: Clone,
    {
        let size = shape::size(shape)?;
        Ok(Self::from_parts(shape.to_vec(), vec![value; size]))
    }

    /// Builds a container from parts that are already known to agree.
    pub(crate) fn from_parts(shape: Vec<usize>, data: Vec<T>) -> Self {
        debug_assert_eq!(shape::size(&shape).ok(), Some(data.len()));
        Self { shape, data }
    }

    /// Returns the elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the container and returns its elements in row-major order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Creates a one-dimensional container.
impl<T> From<Vec<T>> for Dense<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_parts(vec![data.len()], data)
    }
}

impl<T: Clone> Container for Dense<T> {
    type Elem = T;
    type Error = IndexError;

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn get(&self, index: &[usize]) -> Result<T, IndexError> {
        let offset = shape::offset(&self.shape, index)?;
        Ok(self.data[offset].clone())
    }
}

impl<T: Clone> ContainerMut for Dense<T> {
    fn set(&mut self, index: &[usize], value: T) -> Result<(), IndexError> {
        let offset = shape::offset(&self.shape, index)?;
        self.data[offset] = value;
        Ok(())
    }
}

/// Unvalidated fields of a [`Dense`], checked on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DenseParts<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<DenseParts<T>> for Dense<T> {
    type Error = ShapeError;

    fn try_from(parts: DenseParts<T>) -> Result<Self, Self::Error> {
        Self::new(&parts.shape, parts.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_data() {
        assert_eq!(
            Dense::new(&[2, 2], vec![1, 2, 3]),
            Err(ShapeError::Length {
                shape: vec![2, 2],
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn from_fn_visits_every_index() {
        let grid = Dense::from_fn(&[2, 3], |index| index[0] * 10 + index[1]).unwrap();

        assert_eq!(grid.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.get(&[1, 1]), Ok(11));
    }

    #[test]
    fn filled_and_scalar_shapes() {
        let scalar = Dense::filled(&[], 4.5).unwrap();

        assert_eq!(scalar.ndim(), 0);
        assert_eq!(scalar.len(), 1);
        assert_eq!(scalar.get(&[]), Ok(4.5));
    }

    #[test]
    fn vec_converts_to_one_dimension() {
        let dense = Dense::from(vec!['a', 'b']);

        assert_eq!(dense.shape(), &[2]);
        assert_eq!(dense.get(&[1]), Ok('b'));
        assert_eq!(
            dense.get(&[2]),
            Err(IndexError::OutOfRange {
                axis: 0,
                index: 2,
                extent: 2,
            })
        );
    }

    #[test]
    fn set_out_of_range_leaves_data_untouched() {
        let mut dense = Dense::from(vec![1, 2]);

        assert!(dense.set(&[0, 0], 9).is_err());
        assert_eq!(dense.as_slice(), &[1, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_shape() {
        let ok: Dense<i32> = serde_json::from_str(r#"{"shape":[2],"data":[1,2]}"#).unwrap();
        assert_eq!(ok, Dense::from(vec![1, 2]));

        let bad = serde_json::from_str::<Dense<i32>>(r#"{"shape":[3],"data":[1,2]}"#);
        assert!(bad.is_err());
    }
}
