//! Element transforms and the capability tags that describe them.
//!
//! A [`Transform`] maps one element to another and may fail. Any closure or
//! function `Fn(T) -> U` is an infallible transform; wrap a function that
//! returns a `Result` in [`Fallible`] to propagate its errors.
//!
//! A [`Tag`] asserts an algebraic property of a transform. Tags never affect
//! what an adapter returns; reductions use them to pick a faster path that
//! is only valid when the property holds.

use std::{convert::Infallible, error::Error as StdError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A capability tag describing how a transform orders its outputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    /// `a <= b` implies `f(a) <= f(b)`.
    Increasing,
    /// `a <= b` implies `f(a) >= f(b)`.
    Decreasing,
    /// No ordering property is known.
    #[default]
    Unknown,
}

/// A function applied to each element of a container.
pub trait Transform<T> {
    type Output;
    type Error: StdError + Send + Sync + 'static;

    /// Applies the transform to a single value.
    ///
    /// # Errors
    ///
    /// Returns the transform's own error type; infallible transforms use
    /// [`Infallible`].
    fn apply(&self, value: T) -> Result<Self::Output, Self::Error>;

    /// Returns the tag this transform carries with it, if any.
    ///
    /// Only wrappers such as [`Tagged`] declare a tag. Other transforms are
    /// looked up by type in a tag registry.
    fn declared_tag(&self) -> Option<Tag> {
        None
    }
}

impl<T, U, F> Transform<T> for F
where
    F: Fn(T) -> U,
{
    type Output = U;
    type Error = Infallible;

    fn apply(&self, value: T) -> Result<U, Infallible> {
        Ok(self(value))
    }
}

/// A transform built from a function that returns a `Result`.
///
/// # Example
///
/// ```
/// use weft_core::{Container, Dense, Fallible, MapError};
///
/// let parsed = Dense::from(vec!["1", "x"]).map(Fallible(str::parse::<i32>));
///
/// assert_eq!(parsed.get(&[0]).unwrap(), 1);
/// assert!(matches!(parsed.get(&[1]), Err(MapError::Transform(_))));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<T, U, E, F> Transform<T> for Fallible<F>
where
    F: Fn(T) -> Result<U, E>,
    E: StdError + Send + Sync + 'static,
{
    type Output = U;
    type Error = E;

    fn apply(&self, value: T) -> Result<U, E> {
        (self.0)(value)
    }
}

/// A transform paired with an explicit capability tag.
///
/// Use this when the transform's type alone does not determine its
/// property, for example a closure that captures a scale factor whose sign
/// decides whether it is increasing or decreasing.
#[derive(Debug, Clone, Copy)]
pub struct Tagged<F> {
    transform: F,
    tag: Tag,
}

impl<F> Tagged<F> {
    /// Pairs `transform` with `tag`.
    ///
    /// The caller is responsible for the tag being true of the transform.
    pub fn new(transform: F, tag: Tag) -> Self {
        Self { transform, tag }
    }

    /// Marks `transform` as monotonically increasing.
    pub fn increasing(transform: F) -> Self {
        Self::new(transform, Tag::Increasing)
    }

    /// Marks `transform` as monotonically decreasing.
    pub fn decreasing(transform: F) -> Self {
        Self::new(transform, Tag::Decreasing)
    }

    /// Returns the declared tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns the wrapped transform.
    pub fn inner(&self) -> &F {
        &self.transform
    }

    /// Consumes the wrapper and returns the transform.
    pub fn into_inner(self) -> F {
        self.transform
    }
}

impl<T, F> Transform<T> for Tagged<F>
where
    F: Transform<T>,
{
    type Output = F::Output;
    type Error = F::Error;

    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        self.transform.apply(value)
    }

    fn declared_tag(&self) -> Option<Tag> {
        Some(self.tag)
    }
}
