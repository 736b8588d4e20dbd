//! [`Container`] support for `ndarray` arrays.
//!
//! Any `ndarray` array, owned or a view, of any dimensionality can serve as
//! the base of an adapter. Elements are returned by clone.
//!
//! `ArrayBase` has inherent `shape`, `get`, and `map` methods that take
//! precedence over the trait methods, so call the adapter constructors with
//! their full path (`Mapped::new(array, f)` or `Container::map(array, f)`).

use ndarray::{ArrayBase, Data, DataMut, Dimension};

use crate::{Container, ContainerMut, IndexError, shape};

impl<A, S, D> Container for ArrayBase<S, D>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    type Elem = A;
    type Error = IndexError;

    fn shape(&self) -> &[usize] {
        ArrayBase::shape(self)
    }

    fn get(&self, index: &[usize]) -> Result<A, IndexError> {
        shape::check(ArrayBase::shape(self), index)?;
        let view = self.view().into_dyn();
        Ok(view[index].clone())
    }
}

impl<A, S, D> ContainerMut for ArrayBase<S, D>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: Dimension,
{
    fn set(&mut self, index: &[usize], value: A) -> Result<(), IndexError> {
        shape::check(ArrayBase::shape(self), index)?;
        let mut view = self.view_mut().into_dyn();
        view[index] = value;
        Ok(())
    }
}
