//! Core traits and types for Weft, a library of lazy array adapters.
//!
//! This crate defines the shape/index protocol every container implements
//! and the adapters built on it:
//!
//! - [`Container`]: reports a shape and returns the element at an index
//! - [`ContainerMut`]: a container whose elements can be replaced
//! - [`Dense`]: owned row-major storage; `ndarray` arrays also implement
//!   [`Container`]
//! - [`Labeled`], [`Mapped`], [`Zipped`]: adapters that annotate, lazily
//!   transform, or combine containers without copying their data
//! - [`Transform`] and [`Tag`]: element functions and the capability tags
//!   that let reductions choose a specialized path

mod array;
mod container;
mod dense;
mod error;
mod transform;

pub mod adapter;
pub mod shape;

pub use adapter::{Labeled, MapError, Mapped, ZipError, Zipped};
pub use container::{Container, ContainerMut, Elements};
pub use dense::Dense;
pub use error::{IndexError, ShapeError};
pub use transform::{Fallible, Tag, Tagged, Transform};
