//! Adapters that wrap a base container without copying its data.
//!
//! - [`Labeled`] attaches metadata and otherwise behaves exactly like its base.
//! - [`Mapped`] applies a [`Transform`] to each element when it is read.
//! - [`Zipped`] combines two equally shaped containers element by element.
//!
//! Adapters are usually created through the constructors on [`Container`].
//! Every adapter can give back the container it wraps.
//!
//! [`Transform`]: crate::Transform
//! [`Container`]: crate::Container

mod labeled;
mod mapped;
mod zipped;

pub use labeled::Labeled;
pub use mapped::{MapError, Mapped};
pub use zipped::{ZipError, Zipped};
