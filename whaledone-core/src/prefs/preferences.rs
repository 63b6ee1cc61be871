use tracing::{debug, warn};

use super::repository::{PreferenceStore, StoreError};
use crate::models::Language;

/// Set to `"true"` once the contacts screen has shown its welcome popup.
pub const VISITED_KEY: &str = "whaledone_visited";

/// Display language code, e.g. `"en"`.
pub const LANGUAGE_KEY: &str = "whaledone_language";

/// Typed access to the preference keys the app uses.
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub async fn has_visited(&self) -> Result<bool, StoreError> {
        Ok(self.store.get(VISITED_KEY).await?.as_deref() == Some("true"))
    }

    pub async fn mark_visited(&self) -> Result<(), StoreError> {
        self.store.set(VISITED_KEY, "true").await
    }

    /// True exactly once: the first call marks the visit.
    pub async fn first_visit(&self) -> Result<bool, StoreError> {
        if self.has_visited().await? {
            return Ok(false);
        }
        self.mark_visited().await?;
        debug!("first visit recorded");
        Ok(true)
    }

    /// Stored language, or the default when unset or unrecognised.
    pub async fn language(&self) -> Result<Language, StoreError> {
        let Some(code) = self.store.get(LANGUAGE_KEY).await? else {
            return Ok(Language::default());
        };
        Ok(Language::parse(&code).unwrap_or_else(|| {
            warn!(code, "unknown stored language, using default");
            Language::default()
        }))
    }

    pub async fn set_language(
        &self,
        language: Language,
    ) -> Result<(), StoreError> {
        self.store.set(LANGUAGE_KEY, language.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::prefs::memory::MemoryStore;

    fn prefs() -> Preferences {
        Preferences::new(Box::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn first_visit_is_reported_once() {
        let prefs = prefs();

        assert!(!prefs.has_visited().await.unwrap());
        assert!(prefs.first_visit().await.unwrap());
        assert!(!prefs.first_visit().await.unwrap());
        assert!(prefs.has_visited().await.unwrap());
    }

    #[tokio::test]
    async fn visited_flag_is_stored_as_true() {
        let store = MemoryStore::new();
        store.set(VISITED_KEY, "true").await.unwrap();
        let prefs = Preferences::new(Box::new(store));

        assert!(!prefs.first_visit().await.unwrap());
    }

    #[tokio::test]
    async fn language_defaults_to_korean() {
        assert_eq!(prefs().language().await.unwrap(), Language::Ko);
    }

    #[tokio::test]
    async fn language_round_trips() {
        let prefs = prefs();

        prefs.set_language(Language::Ja).await.unwrap();

        assert_eq!(prefs.language().await.unwrap(), Language::Ja);
    }

    #[tokio::test]
    async fn garbage_language_falls_back() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").await.unwrap();
        let prefs = Preferences::new(Box::new(store));

        assert_eq!(prefs.language().await.unwrap(), Language::Ko);
    }
}
