//! Application shell: screen routing, session state, event dispatch and the
//! OTP countdown driver, plus the logging and config plumbing around them.

pub mod app;
pub mod config;
pub mod events;
pub mod logging;
pub mod state;
pub mod timer;

use whaledone_core::prefs::{MemoryStoreFactory, StoreRegistry};
use whaledone_store_sqlite::SqliteStoreFactory;

/// Registry with every preference backend this build knows about.
pub fn build_registry() -> StoreRegistry {
    let mut registry = StoreRegistry::new();
    registry.register(Box::new(MemoryStoreFactory));
    registry.register(Box::new(SqliteStoreFactory));
    registry
}
