use crate::{Container, ContainerMut};

/// A container annotated with an arbitrary label.
///
/// Shape, reads, and writes all pass straight through to the base container.
/// The label is fixed at construction.
///
/// Created by [`Container::with_label()`] or [`Labeled::new()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Labeled<C, M> {
    base: C,
    label: M,
}

impl<C, M> Labeled<C, M> {
    /// Wraps `base` with `label`.
    pub fn new(base: C, label: M) -> Self {
        Self { base, label }
    }

    /// Returns the label.
    pub fn label(&self) -> &M {
        &self.label
    }

    /// Returns the wrapped container.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Consumes the adapter and returns the wrapped container.
    pub fn into_base(self) -> C {
        self.base
    }

    /// Consumes the adapter and returns the container and label.
    pub fn into_parts(self) -> (C, M) {
        (self.base, self.label)
    }
}

impl<C: Container, M> Container for Labeled<C, M> {
    type Elem = C::Elem;
    type Error = C::Error;

    fn shape(&self) -> &[usize] {
        self.base.shape()
    }

    fn get(&self, index: &[usize]) -> Result<Self::Elem, Self::Error> {
        self.base.get(index)
    }
}

impl<C: ContainerMut, M> ContainerMut for Labeled<C, M> {
    fn set(&mut self, index: &[usize], value: Self::Elem) -> Result<(), Self::Error> {
        self.base.set(index, value)
    }
}
