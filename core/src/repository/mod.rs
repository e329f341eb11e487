pub mod activity;
pub mod daily_footprint;
pub mod file;
pub mod joined_actions;
mod json;
pub mod store;
pub mod traits;

// Re-export
pub use activity::{StoreActivityRepository, ACTIVITIES_KEY};
pub use daily_footprint::{StoreDailyFootprintRepository, DAILY_FOOTPRINT_KEY};
pub use file::FileKeyValueStore;
pub use joined_actions::{StoreJoinedActionRepository, JOINED_ACTIONS_KEY};
pub use store::{KeyValueStore, MemoryKeyValueStore, StoreError};
pub use traits::{ActivityRepository, DailyFootprintRepository, JoinedActionRepository};
