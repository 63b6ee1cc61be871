use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Preference not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Key/value storage for string preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when the key was never written.
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError>;

    /// Insert or overwrite.
    async fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError>;

    /// Returns [`StoreError::NotFound`] if the key is absent.
    async fn remove(
        &self,
        key: &str,
    ) -> Result<(), StoreError>;
}
