use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use whaledone_core::prefs::{PreferenceStore, StoreConfig, StoreError, StoreFactory};

use crate::repository::SqlitePreferenceStore;

/// Turn a bare path or `:memory:` into a sqlx URL. Strings that already
/// start with `sqlite:` pass through.
fn database_url(connection_string: &str) -> String {
    match connection_string {
        ":memory:" | "" => "sqlite::memory:".to_string(),
        s if s.starts_with("sqlite:") => s.to_string(),
        path => format!("sqlite:{path}?mode=rwc"),
    }
}

/// [`StoreFactory`] for SQLite.
///
/// ```rust,no_run
/// use whaledone_core::prefs::StoreRegistry;
/// use whaledone_store_sqlite::SqliteStoreFactory;
///
/// let mut registry = StoreRegistry::new();
/// registry.register(Box::new(SqliteStoreFactory));
/// ```
pub struct SqliteStoreFactory;

#[async_trait]
impl StoreFactory for SqliteStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Opens `config.connection_string` (a file path, created if missing,
    /// or `:memory:`) and runs migrations.
    async fn create(
        &self,
        config: &StoreConfig,
    ) -> Result<Box<dyn PreferenceStore>, StoreError> {
        let url = database_url(&config.connection_string);
        let mut options = SqlitePoolOptions::new();
        if url == "sqlite::memory:" {
            options = options.max_connections(1);
        }
        let pool = options
            .connect(&url)
            .await
            .map_err(|e| StoreError::Connection(format!("{url}: {e}")))?;

        let store = SqlitePreferenceStore::new_with_pool(pool);
        store.run_migrations().await?;
        info!(%url, "sqlite preference store ready");
        Ok(Box::new(store))
    }
}
