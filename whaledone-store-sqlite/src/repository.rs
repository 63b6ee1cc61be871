use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::debug;
use whaledone_core::{PreferenceStore, StoreError};

/// Preferences kept in a `preferences(key, value)` table.
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
}

impl SqlitePreferenceStore {
    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO preferences (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = CURRENT_TIMESTAMP",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        debug!(key, "preference saved");
        Ok(())
    }

    async fn remove(
        &self,
        key: &str,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlx::sqlite::SqlitePoolOptions;
    use whaledone_core::{Language, Preferences};

    use super::*;

    async fn setup_test_db() -> SqlitePreferenceStore {
        // One connection: every in-memory connection is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        let store = SqlitePreferenceStore::new_with_pool(pool);
        store
            .run_migrations()
            .await
            .expect("Failed to run migrations");
        store
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = setup_test_db().await;

        assert_eq!(store.get("whaledone_visited").await, Ok(None));
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = setup_test_db().await;

        store.set("whaledone_language", "en").await.unwrap();

        assert_eq!(
            store.get("whaledone_language").await,
            Ok(Some("en".to_string()))
        );
    }

    #[tokio::test]
    async fn set_upserts_existing_key() {
        let store = setup_test_db().await;

        store.set("whaledone_language", "en").await.unwrap();
        store.set("whaledone_language", "zh").await.unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM preferences")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(
            store.get("whaledone_language").await,
            Ok(Some("zh".to_string()))
        );
    }

    #[tokio::test]
    async fn remove_reports_missing_key() {
        let store = setup_test_db().await;
        store.set("k", "v").await.unwrap();

        assert_eq!(store.remove("k").await, Ok(()));
        assert_eq!(store.get("k").await, Ok(None));
        assert_eq!(
            store.remove("k").await,
            Err(StoreError::NotFound("k".to_string()))
        );
    }

    #[tokio::test]
    async fn typed_preferences_work_over_sqlite() {
        let prefs = Preferences::new(Box::new(setup_test_db().await));

        assert!(prefs.first_visit().await.unwrap());
        assert!(!prefs.first_visit().await.unwrap());

        prefs.set_language(Language::En).await.unwrap();
        assert_eq!(prefs.language().await.unwrap(), Language::En);
    }
}
