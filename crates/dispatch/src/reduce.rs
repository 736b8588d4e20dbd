//! Extreme-value reductions with tag-driven specialization.
//!
//! [`max_over`] and [`min_over`] scan any container. [`reduce_max`] and
//! [`reduce_min`] take a [`Mapped`] container and, when its transform is
//! tagged as monotonic, reduce the *base* container and transform a single
//! value instead of transforming every element:
//!
//! | Tag          | `reduce_max`            | `reduce_min`            |
//! |--------------|-------------------------|-------------------------|
//! | `Increasing` | `f(max(base))`          | `f(min(base))`          |
//! | `Decreasing` | `f(min(base))`          | `f(max(base))`          |
//! | `Unknown`    | scan of `f` over `base` | scan of `f` over `base` |
//!
//! Every path fails with [`ReduceError::Empty`] on an empty container.

use std::{any::type_name, cmp::Ordering};

use thiserror::Error;
use weft_core::{Container, MapError, Mapped, Tag, Transform};

use crate::Config;

/// Errors that can occur during a reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError<E> {
    /// The container has no elements.
    #[error("cannot reduce an empty container")]
    Empty,

    /// Two elements could not be compared, for example because one is NaN.
    #[error("encountered elements that cannot be ordered")]
    Unordered,

    /// Reading an element failed.
    #[error(transparent)]
    Container(E),
}

impl<E> ReduceError<E> {
    /// Transforms the container error, leaving the other variants unchanged.
    pub fn map_container<E2>(self, f: impl FnOnce(E) -> E2) -> ReduceError<E2> {
        match self {
            Self::Empty => ReduceError::Empty,
            Self::Unordered => ReduceError::Unordered,
            Self::Container(err) => ReduceError::Container(f(err)),
        }
    }
}

/// The algorithm a reduction over a [`Mapped`] container uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Transform every element and compare the results.
    Scan,
    /// Transform the base container's maximum.
    TransformOfMax,
    /// Transform the base container's minimum.
    TransformOfMin,
}

impl Path {
    /// Returns the path `reduce_max` takes for a transform with `tag`.
    #[must_use]
    pub fn for_max(tag: Tag) -> Self {
        match tag {
            Tag::Increasing => Self::TransformOfMax,
            Tag::Decreasing => Self::TransformOfMin,
            Tag::Unknown => Self::Scan,
        }
    }

    /// Returns the path `reduce_min` takes for a transform with `tag`.
    #[must_use]
    pub fn for_min(tag: Tag) -> Self {
        match tag {
            Tag::Increasing => Self::TransformOfMin,
            Tag::Decreasing => Self::TransformOfMax,
            Tag::Unknown => Self::Scan,
        }
    }
}

/// Returns the largest element of `container`.
///
/// Ties keep the first element in row-major order.
///
/// # Errors
///
/// Returns [`ReduceError::Empty`] for an empty container,
/// [`ReduceError::Unordered`] if two elements cannot be compared, or the
/// container's own error if reading fails.
pub fn max_over<C>(container: &C) -> Result<C::Elem, ReduceError<C::Error>>
where
    C: Container,
    C::Elem: PartialOrd,
{
    extreme(container, Ordering::Greater)
}

/// Returns the smallest element of `container`.
///
/// Ties keep the first element in row-major order.
///
/// # Errors
///
/// See [`max_over()`].
pub fn min_over<C>(container: &C) -> Result<C::Elem, ReduceError<C::Error>>
where
    C: Container,
    C::Elem: PartialOrd,
{
    extreme(container, Ordering::Less)
}

/// Returns the largest element of a mapped container, using the global
/// registry and honoring tags.
///
/// The base elements must be ordered so a tagged transform can be applied to
/// the base maximum. When they are not, for example points reduced by their
/// norm, call [`max_over()`] on the mapped container; it only compares
/// transformed values.
///
/// # Errors
///
/// Returns [`ReduceError::Empty`] for an empty container on every path, and
/// propagates base and transform errors unchanged.
pub fn reduce_max<C, F>(
    adapter: &Mapped<C, F>,
) -> Result<F::Output, ReduceError<MapError<C::Error, F::Error>>>
where
    C: Container,
    C::Elem: PartialOrd,
    F: Transform<C::Elem> + 'static,
    F::Output: PartialOrd,
{
    reduce_max_with(adapter, &Config::default())
}

/// Returns the smallest element of a mapped container, using the global
/// registry and honoring tags.
///
/// # Errors
///
/// See [`reduce_max()`].
pub fn reduce_min<C, F>(
    adapter: &Mapped<C, F>,
) -> Result<F::Output, ReduceError<MapError<C::Error, F::Error>>>
where
    C: Container,
    C::Elem: PartialOrd,
    F: Transform<C::Elem> + 'static,
    F::Output: PartialOrd,
{
    reduce_min_with(adapter, &Config::default())
}

/// Returns the largest element of a mapped container using `config`.
///
/// # Errors
///
/// See [`reduce_max()`].
pub fn reduce_max_with<C, F>(
    adapter: &Mapped<C, F>,
    config: &Config<'_>,
) -> Result<F::Output, ReduceError<MapError<C::Error, F::Error>>>
where
    C: Container,
    C::Elem: PartialOrd,
    F: Transform<C::Elem> + 'static,
    F::Output: PartialOrd,
{
    let path = Path::for_max(resolve_tag(adapter, config));
    log::debug!("max of `{}` via {path:?}", type_name::<F>());
    reduce(adapter, path, Ordering::Greater)
}

/// Returns the smallest element of a mapped container using `config`.
///
/// # Errors
///
/// See [`reduce_max()`].
pub fn reduce_min_with<C, F>(
    adapter: &Mapped<C, F>,
    config: &Config<'_>,
) -> Result<F::Output, ReduceError<MapError<C::Error, F::Error>>>
where
    C: Container,
    C::Elem: PartialOrd,
    F: Transform<C::Elem> + 'static,
    F::Output: PartialOrd,
{
    let path = Path::for_min(resolve_tag(adapter, config));
    log::debug!("min of `{}` via {path:?}", type_name::<F>());
    reduce(adapter, path, Ordering::Less)
}

fn resolve_tag<C, F>(adapter: &Mapped<C, F>, config: &Config<'_>) -> Tag
where
    C: Container,
    F: Transform<C::Elem> + 'static,
{
    if config.use_tags() {
        config.registry().tag_of::<C::Elem, F>(adapter.transform())
    } else {
        Tag::Unknown
    }
}

fn reduce<C, F>(
    adapter: &Mapped<C, F>,
    path: Path,
    keep: Ordering,
) -> Result<F::Output, ReduceError<MapError<C::Error, F::Error>>>
where
    C: Container,
    C::Elem: PartialOrd,
    F: Transform<C::Elem>,
    F::Output: PartialOrd,
{
    let base_extreme = match path {
        Path::Scan => return extreme(adapter, keep),
        Path::TransformOfMax => max_over(adapter.base()),
        Path::TransformOfMin => min_over(adapter.base()),
    };

    let value = base_extreme.map_err(|err| err.map_container(MapError::Base))?;
    adapter.apply(value).map_err(ReduceError::Container)
}

/// Scans `container` and keeps an element whenever it compares as `keep`
/// against the current best.
fn extreme<C>(container: &C, keep: Ordering) -> Result<C::Elem, ReduceError<C::Error>>
where
    C: Container,
    C::Elem: PartialOrd,
{
    let mut elements = container.elements();

    let mut best = match elements.next() {
        Some(first) => first.map_err(ReduceError::Container)?,
        None => return Err(ReduceError::Empty),
    };

    // NaN-like values are not equal to themselves.
    if best.partial_cmp(&best).is_none() {
        return Err(ReduceError::Unordered);
    }

    for element in elements {
        let element = element.map_err(ReduceError::Container)?;
        match element.partial_cmp(&best) {
            Some(ordering) if ordering == keep => best = element,
            Some(_) => {}
            None => return Err(ReduceError::Unordered),
        }
    }

    Ok(best)
}
