use crate::{
    Dense, ShapeError,
    adapter::{Labeled, Mapped, Zipped},
    shape::{self, Indices},
    transform::Transform,
};

/// The core trait for shaped, coordinate-indexed containers in Weft.
///
/// A `Container` reports its shape (one extent per dimension) and returns the
/// element at a coordinate tuple. Base storage such as [`Dense`] or an
/// `ndarray` array implements it directly; adapters wrap another container
/// and implement it by delegating.
///
/// ## Implementing `Container`
///
/// Implement [`shape()`] and [`get()`]. An index is valid when it has one
/// coordinate per dimension and each coordinate is below its extent;
/// [`shape::check`] performs exactly that validation. Invalid indices must
/// produce an error and are never clamped.
///
/// ## Adapting Containers
///
/// Containers can be wrapped with:
/// - [`Container::with_label()`] – Attach metadata without changing behavior.
/// - [`Container::map()`] – Transform each element lazily on access.
/// - [`Container::zip_with()`] – Combine two equally shaped containers.
///
/// Adapters never copy the base container's data.
///
/// [`shape()`]: Container::shape
/// [`get()`]: Container::get
pub trait Container {
    type Elem;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the extent of each dimension.
    fn shape(&self) -> &[usize];

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Each container defines its own `Error` type. Base containers fail with
    /// an [`IndexError`] when `index` is outside the shape; adapters may add
    /// failures of their own.
    ///
    /// [`IndexError`]: crate::IndexError
    fn get(&self, index: &[usize]) -> Result<Self::Elem, Self::Error>;

    /// Returns the number of dimensions.
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Returns the total number of elements.
    ///
    /// A shape whose size does not fit in a `usize` cannot be constructed by
    /// the containers in this crate, so saturating here only affects foreign
    /// implementations.
    fn len(&self) -> usize {
        shape::size(self.shape()).unwrap_or(usize::MAX)
    }

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.shape().contains(&0)
    }

    /// Returns a lazy iterator over every element in row-major order.
    ///
    /// Each item is the result of calling [`Container::get()`], so adapters
    /// that compute their elements do so as the iterator advances.
    fn elements(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements {
            container: self,
            indices: Indices::new(self.shape()),
        }
    }

    /// Copies every element into owned [`Dense`] storage.
    ///
    /// # Errors
    ///
    /// Returns the first error produced while reading elements.
    fn materialize(&self) -> Result<Dense<Self::Elem>, Self::Error>
    where
        Self: Sized,
    {
        let data = self.elements().collect::<Result<Vec<_>, _>>()?;
        Ok(Dense::from_parts(self.shape().to_vec(), data))
    }

    /// Wraps this container with a metadata label.
    ///
    /// # Example
    ///
    /// ```
    /// use weft_core::{Container, Dense};
    ///
    /// let labeled = Dense::from(vec![1, 2, 3]).with_label("counts");
    ///
    /// assert_eq!(labeled.label(), &"counts");
    /// assert_eq!(labeled.get(&[1]), Ok(2));
    /// ```
    fn with_label<M>(self, label: M) -> Labeled<Self, M>
    where
        Self: Sized,
    {
        Labeled::new(self, label)
    }

    /// Wraps this container so each element is transformed when read.
    ///
    /// The transform is not called until an element is accessed, and it is
    /// called again on every access.
    ///
    /// # Example
    ///
    /// ```
    /// use weft_core::{Container, Dense};
    ///
    /// let squares = Dense::from(vec![1, 2, 3]).map(|x: i32| x * x);
    ///
    /// assert_eq!(squares.get(&[2]), Ok(9));
    /// ```
    fn map<F>(self, transform: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Transform<Self::Elem>,
    {
        Mapped::new(self, transform)
    }

    /// Combines this container with another of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Mismatch`] if the two shapes differ.
    fn zip_with<Other, F>(
        self,
        other: Other,
        transform: F,
    ) -> Result<Zipped<Self, Other, F>, ShapeError>
    where
        Self: Sized,
        Other: Container,
        F: Transform<(Self::Elem, Other::Elem)>,
    {
        Zipped::new(self, other, transform)
    }
}

/// A container whose elements can be replaced in place.
pub trait ContainerMut: Container {
    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Container::get()`].
    fn set(&mut self, index: &[usize], value: Self::Elem) -> Result<(), Self::Error>;
}

impl<C: Container + ?Sized> Container for &C {
    type Elem = C::Elem;
    type Error = C::Error;

    fn shape(&self) -> &[usize] {
        (**self).shape()
    }

    fn get(&self, index: &[usize]) -> Result<Self::Elem, Self::Error> {
        (**self).get(index)
    }
}

impl<C: Container + ?Sized> Container for &mut C {
    type Elem = C::Elem;
    type Error = C::Error;

    fn shape(&self) -> &[usize] {
        (**self).shape()
    }

    fn get(&self, index: &[usize]) -> Result<Self::Elem, Self::Error> {
        (**self).get(index)
    }
}

impl<C: ContainerMut + ?Sized> ContainerMut for &mut C {
    fn set(&mut self, index: &[usize], value: Self::Elem) -> Result<(), Self::Error> {
        (**self).set(index, value)
    }
}

/// A row-major iterator over a container's elements.
///
/// Created by [`Container::elements()`].
pub struct Elements<'a, C> {
    container: &'a C,
    indices: Indices,
}

impl<C: Container> Iterator for Elements<'_, C> {
    type Item = Result<C::Elem, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(self.container.get(&index))
    }
}
