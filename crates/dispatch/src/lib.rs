//! Capability-tag dispatch for Weft containers.
//!
//! Transforms can be associated with a [`Tag`] in two ways: by wrapping them
//! in [`Tagged`], or by registering their type in a [`Registry`]. Reductions
//! over a [`Mapped`] container look the tag up and, when the transform is
//! monotonic, reduce the base container instead of transforming every
//! element.
//!
//! ```
//! use weft_core::{Container, Dense, Tag};
//! use weft_dispatch::{reduce_max, register};
//!
//! register(&f64::exp, Tag::Increasing).unwrap();
//!
//! let mapped = Dense::from(vec![0.2, 0.9, 0.1]).map(f64::exp);
//! assert_eq!(reduce_max(&mapped).unwrap(), 0.9_f64.exp());
//! ```
//!
//! [`Tag`]: weft_core::Tag
//! [`Tagged`]: weft_core::Tagged
//! [`Mapped`]: weft_core::Mapped

mod config;
mod registry;

pub mod reduce;

pub use config::Config;
pub use reduce::{
    Path, ReduceError, max_over, min_over, reduce_max, reduce_max_with, reduce_min,
    reduce_min_with,
};
pub use registry::{Registry, RegistryError, register, tag_of};
