use std::{
    any::{TypeId, type_name},
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock},
};

use thiserror::Error;
use weft_core::{Tag, Transform};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// An append-only table of capability tags keyed by transform type.
///
/// A registration asserts a property of *every* value of the transform's
/// type. That is only sound for zero-sized types such as function items
/// (`f64::exp`) and closures that capture nothing, so other types are
/// rejected; pair those with their tag using [`Tagged`] instead.
///
/// Each closure expression has its own type, so a closure is only found if
/// the same closure value that was registered is later used as the
/// transform.
///
/// [`Tagged`]: weft_core::Tagged
#[derive(Debug, Default)]
pub struct Registry {
    tags: RwLock<HashMap<TypeId, Entry>>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    tag: Tag,
    name: &'static str,
}

/// Errors that can occur when registering a tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The transform type already has a different tag.
    #[error("`{name}` is already registered as {existing:?}, cannot register it as {requested:?}")]
    Conflict {
        name: &'static str,
        existing: Tag,
        requested: Tag,
    },

    /// The transform type carries state, so its instances may differ.
    #[error("`{name}` is not zero-sized; wrap it in `Tagged` instead of registering its type")]
    Stateful { name: &'static str },
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    #[must_use]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Associates the type of `transform` with `tag`.
    ///
    /// Registering the same tag again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Stateful`] if the transform type is not
    /// zero-sized, or [`RegistryError::Conflict`] if it is already
    /// registered with a different tag.
    pub fn register<F: 'static>(&self, _transform: &F, tag: Tag) -> Result<(), RegistryError> {
        let name = type_name::<F>();

        if size_of::<F>() != 0 {
            return Err(RegistryError::Stateful { name });
        }

        let mut tags = self.tags.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = tags.get(&TypeId::of::<F>()) {
            if existing.tag == tag {
                return Ok(());
            }
            log::warn!(
                "refusing to re-register `{name}` as {tag:?}; already {:?}",
                existing.tag
            );
            return Err(RegistryError::Conflict {
                name,
                existing: existing.tag,
                requested: tag,
            });
        }

        log::debug!("registered `{name}` as {tag:?}");
        tags.insert(TypeId::of::<F>(), Entry { tag, name });
        Ok(())
    }

    /// Returns the tag registered for the type of `transform`, if any.
    #[must_use]
    pub fn lookup<F: 'static>(&self, _transform: &F) -> Option<Tag> {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<F>())
            .map(|entry| entry.tag)
    }

    /// Resolves the tag used to dispatch on `transform`.
    ///
    /// A tag the transform declares itself wins; otherwise the registry is
    /// consulted, and unregistered transforms are [`Tag::Unknown`].
    #[must_use]
    pub fn tag_of<T, F>(&self, transform: &F) -> Tag
    where
        F: Transform<T> + 'static,
    {
        transform
            .declared_tag()
            .or_else(|| self.lookup(transform))
            .unwrap_or_default()
    }

    /// Returns the names of all registered transform types and their tags.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, Tag)> {
        let mut entries: Vec<_> = self
            .tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|entry| (entry.name, entry.tag))
            .collect();
        entries.sort_unstable_by_key(|&(name, _)| name);
        entries
    }
}

/// Associates the type of `transform` with `tag` in the global registry.
///
/// # Errors
///
/// See [`Registry::register()`].
pub fn register<F: 'static>(transform: &F, tag: Tag) -> Result<(), RegistryError> {
    Registry::global().register(transform, tag)
}

/// Resolves the tag of `transform` against the global registry.
///
/// A transform may accept more than one input type, so the element type is
/// named explicitly:
///
/// ```
/// use weft_core::{Container, Dense, Tag, Tagged};
/// use weft_dispatch::{register, tag_of};
///
/// register(&f64::ln_1p, Tag::Increasing).unwrap();
/// assert_eq!(tag_of::<f64, _>(&f64::ln_1p), Tag::Increasing);
///
/// let mapped = Dense::from(vec![1.0, 2.0]).map(Tagged::decreasing(|x: f64| -x));
/// assert_eq!(tag_of::<f64, _>(mapped.transform()), Tag::Decreasing);
/// ```
#[must_use]
pub fn tag_of<T, F>(transform: &F) -> Tag
where
    F: Transform<T> + 'static,
{
    Registry::global().tag_of(transform)
}
