use crate::Registry;

/// Configuration for tag-driven reductions.
///
/// Chooses the [`Registry`] consulted for transform tags and whether tags
/// are honored at all. With tags disabled every reduction takes the generic
/// scan, which is useful for checking a specialized path against it.
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    registry: &'a Registry,
    use_tags: bool,
}

impl Default for Config<'static> {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

impl<'a> Config<'a> {
    /// Creates a config that honors tags from `registry`.
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            use_tags: true,
        }
    }

    /// Returns a copy of this config with tag dispatch switched on or off.
    #[must_use]
    pub fn with_tags(self, use_tags: bool) -> Self {
        Self { use_tags, ..self }
    }

    /// Returns the registry consulted for tags.
    #[must_use]
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Returns `true` if tags may select a specialized path.
    #[must_use]
    pub fn use_tags(&self) -> bool {
        self.use_tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_global_registry_and_tags() {
        let config = Config::default();

        assert!(std::ptr::eq(config.registry(), Registry::global()));
        assert!(config.use_tags());
    }

    #[test]
    fn tags_can_be_disabled() {
        let registry = Registry::new();
        let config = Config::new(&registry).with_tags(false);

        assert!(!config.use_tags());
        assert!(std::ptr::eq(config.registry(), &registry));
    }
}
