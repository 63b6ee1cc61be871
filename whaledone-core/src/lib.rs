pub mod compose;
pub mod contacts;
pub mod inbox;
pub mod insights;
pub mod models;
pub mod navigation;
pub mod notifications;
pub mod points;
pub mod prefs;
pub mod seed;
pub mod sent;
pub mod signup;

pub use models::*;
pub use navigation::{NavigationData, Screen};
pub use points::{INITIAL_POINTS, PointsError, UNLOCK_COST, Wallet};
pub use prefs::{PreferenceStore, Preferences, StoreError};
