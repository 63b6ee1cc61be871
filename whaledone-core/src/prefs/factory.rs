use std::collections::HashMap;

use async_trait::async_trait;
use tracing::info;

use super::repository::{PreferenceStore, StoreError};

/// Which preference backend to open, and how.
///
/// `backend` must match the [`StoreFactory::backend_name`] of a registered
/// factory. `connection_string` is handed to that factory as-is.
///
/// | backend  | connection_string examples   |
/// |----------|------------------------------|
/// | `memory` | ignored                      |
/// | `sqlite` | `whaledone.db`, `:memory:`   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: String,
    pub connection_string: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            connection_string: String::new(),
        }
    }
}

/// One per backend crate, registered with a [`StoreRegistry`] at startup.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the store. Migrations, if any, run here.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn PreferenceStore>, StoreError>;
}

/// [`StoreFactory`] instances keyed by backend name.
pub struct StoreRegistry {
    factories: HashMap<&'static str, Box<dyn StoreFactory>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A factory with the same name replaces the previous one.
    pub fn register(
        &mut self,
        factory: Box<dyn StoreFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Open a store through the factory named by `config.backend`.
    ///
    /// # Errors
    /// * [`StoreError::Configuration`] if no such backend is registered.
    /// * Whatever the factory itself returns.
    pub async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn PreferenceStore>, StoreError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                StoreError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        info!(backend = %config.backend, "opening preference store");
        factory.create(config).await
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}
