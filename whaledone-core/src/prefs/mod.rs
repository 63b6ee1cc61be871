//! Persisted user preferences.
//!
//! Only two things outlive a session: whether the user has seen the
//! first-visit contacts popup, and the chosen display language. Storage is
//! pluggable; see [`StoreRegistry`] for how a backend is picked at startup.

pub mod factory;
pub mod memory;
pub mod preferences;
pub mod repository;

pub use factory::{StoreConfig, StoreFactory, StoreRegistry};
pub use memory::{MemoryStore, MemoryStoreFactory};
pub use preferences::{LANGUAGE_KEY, Preferences, VISITED_KEY};
pub use repository::{PreferenceStore, StoreError};
