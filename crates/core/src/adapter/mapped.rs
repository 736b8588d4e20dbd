use thiserror::Error;

use crate::{Container, transform::Transform};

/// A container whose elements are a transform of a base container's
/// elements, computed on every read.
///
/// Nothing is cached: reading the same index twice calls the transform
/// twice. Reductions that only need an extreme value can avoid most of those
/// calls when the transform carries a capability tag.
///
/// `Mapped` is read-only. It never implements [`ContainerMut`] because a
/// transform has no inverse in general.
///
/// Created by [`Container::map()`] or [`Mapped::new()`].
///
/// [`ContainerMut`]: crate::ContainerMut
#[derive(Debug, Clone)]
pub struct Mapped<C, F> {
    base: C,
    transform: F,
}

/// Errors that can occur when reading from a [`Mapped`] container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError<B, T> {
    /// The base container failed, for example because the index was out of range.
    #[error(transparent)]
    Base(B),

    /// The transform failed on the base element.
    #[error("transform failed: {0}")]
    Transform(#[source] T),
}

impl<C, F> Mapped<C, F> {
    /// Wraps `base` so each element read passes through `transform`.
    ///
    /// The transform is not called here.
    pub fn new(base: C, transform: F) -> Self {
        Self { base, transform }
    }

    /// Returns the wrapped container.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Returns the transform.
    pub fn transform(&self) -> &F {
        &self.transform
    }

    /// Consumes the adapter and returns the wrapped container.
    pub fn into_base(self) -> C {
        self.base
    }

    /// Consumes the adapter and returns the container and transform.
    pub fn into_parts(self) -> (C, F) {
        (self.base, self.transform)
    }
}

impl<C, F> Mapped<C, F>
where
    C: Container,
    F: Transform<C::Elem>,
{
    /// Applies the transform to a value taken from the base container.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Transform`] if the transform fails.
    pub fn apply(&self, value: C::Elem) -> Result<F::Output, MapError<C::Error, F::Error>> {
        self.transform.apply(value).map_err(MapError::Transform)
    }
}

impl<C, F> Container for Mapped<C, F>
where
    C: Container,
    F: Transform<C::Elem>,
{
    type Elem = F::Output;
    type Error = MapError<C::Error, F::Error>;

    fn shape(&self) -> &[usize] {
        self.base.shape()
    }

    fn get(&self, index: &[usize]) -> Result<Self::Elem, Self::Error> {
        let value = self.base.get(index).map_err(MapError::Base)?;
        self.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;

    use crate::{Dense, Fallible, IndexError};

    use super::*;

    #[derive(Debug, Error, PartialEq)]
    #[error("cannot take the log of {0}")]
    struct NonPositive(f64);

    fn checked_ln(x: f64) -> Result<f64, NonPositive> {
        if x > 0.0 { Ok(x.ln()) } else { Err(NonPositive(x)) }
    }

    #[test]
    fn applies_transform_on_read() {
        let base = Dense::new(&[2, 2], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let mapped = (&base).map(f64::exp);

        assert_eq!(mapped.shape(), base.shape());

        for index in crate::shape::Indices::new(base.shape()) {
            let expected = base.get(&index).unwrap().exp();
            assert_relative_eq!(mapped.get(&index).unwrap(), expected);
        }
    }

    #[test]
    fn recomputes_every_read() {
        let calls = Cell::new(0);
        let mapped = Dense::from(vec![1, 2, 3]).map(|x: i32| {
            calls.set(calls.get() + 1);
            x * 10
        });

        assert_eq!(calls.get(), 0);

        assert_eq!(mapped.get(&[1]), Ok(20));
        assert_eq!(mapped.get(&[1]), Ok(20));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn out_of_range_is_a_base_error() {
        let mapped = Dense::from(vec![1, 2]).map(|x: i32| x + 1);

        assert_eq!(
            mapped.get(&[5]),
            Err(MapError::Base(IndexError::OutOfRange {
                axis: 0,
                index: 5,
                extent: 2,
            }))
        );
    }

    #[test]
    fn transform_failure_propagates_unchanged() {
        let mapped = Dense::from(vec![1.0, -1.0]).map(Fallible(checked_ln));

        assert_relative_eq!(mapped.get(&[0]).unwrap(), 0.0);

        let err = mapped.get(&[1]).unwrap_err();
        assert_eq!(err, MapError::Transform(NonPositive(-1.0)));
        assert_eq!(err.to_string(), "transform failed: cannot take the log of -1");
    }

    #[test]
    fn nested_maps_compose() {
        let mapped = Dense::from(vec![1, 2, 3])
            .map(|x: i32| x + 1)
            .map(|x: i32| x * x);

        let values: Vec<_> = mapped.elements().collect::<Result<_, _>>().unwrap();
        assert_eq!(values, vec![4, 9, 16]);
    }

    #[test]
    fn base_round_trips() {
        let base = Dense::from(vec![7, 8]);
        let mapped = base.clone().map(|x: i32| x - 1);

        assert_eq!(mapped.into_base(), base);
    }
}
