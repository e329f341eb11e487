use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::activity::{Activity, RecordedActivity};
use crate::repository::json::{load_array, save, Shape};
use crate::repository::store::KeyValueStore;
use crate::repository::traits::ActivityRepository;

pub const ACTIVITIES_KEY: &str = "activities";

pub struct StoreActivityRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreActivityRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // Raw entries are kept so that records this version cannot decode
    // survive a rewrite of the log.
    fn read_entries(&self) -> Result<Vec<Value>> {
        load_array(&self.store, ACTIVITIES_KEY)
    }
}

fn decode(entry: Value) -> Option<RecordedActivity> {
    match serde_json::from_value(entry) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(error = %e, "skipping unreadable activity record");
            None
        }
    }
}

/// Millisecond timestamp, bumped past `last` when the clock has not moved on.
fn next_id(last: Option<u64>) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    match last {
        Some(last) if last >= now => last + 1,
        _ => now,
    }
}

impl<S: KeyValueStore> ActivityRepository for StoreActivityRepository<S> {
    fn create(&self, activity: Activity, date: NaiveDate, carbon_kg: f64) -> Result<RecordedActivity> {
        let mut entries = self.read_entries()?;
        let last_id = entries
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_u64))
            .max();
        let record = RecordedActivity {
            id: next_id(last_id),
            date,
            activity,
            carbon_kg,
        };
        entries.push(serde_json::to_value(&record)?);
        save(&self.store, ACTIVITIES_KEY, &entries, Shape::Array)?;
        debug!(id = record.id, category = record.activity.category.as_str(), "recorded activity");
        Ok(record)
    }

    fn list(&self) -> Result<Vec<RecordedActivity>> {
        Ok(self.read_entries()?.into_iter().filter_map(decode).collect())
    }

    fn clear(&self) -> Result<()> {
        self.store.remove(ACTIVITIES_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::MemoryKeyValueStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_create_appends_in_order() {
        let store = MemoryKeyValueStore::new();
        let repo = StoreActivityRepository::new(&store);

        repo.create(Activity::food("vegan"), today(), 2.5).unwrap();
        repo.create(Activity::electricity("low"), today(), 5.0).unwrap();

        let activities = repo.list().unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].activity, Activity::food("vegan"));
        assert_eq!(activities[1].carbon_kg, 5.0);
        assert_eq!(activities[1].date, today());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let store = MemoryKeyValueStore::new();
        let repo = StoreActivityRepository::new(&store);

        let ids: Vec<u64> = (0..5)
            .map(|_| repo.create(Activity::food("mixed"), today(), 7.8).unwrap().id)
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_next_id_after_future_id() {
        let far_future = u64::MAX / 2;
        assert_eq!(next_id(Some(far_future)), far_future + 1);
        assert!(next_id(None) > 0);
    }

    #[test]
    fn test_unreadable_log_is_kept_aside() {
        let store = MemoryKeyValueStore::new();
        store.set(ACTIVITIES_KEY, "oops").unwrap();
        let repo = StoreActivityRepository::new(&store);
        assert!(repo.list().unwrap().is_empty());

        repo.create(Activity::food("meat"), today(), 11.5).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
        assert_eq!(store.get("activities_unreadable").unwrap().as_deref(), Some("oops"));

        repo.clear().unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_bad_record_does_not_hide_good_ones() {
        let store = MemoryKeyValueStore::new();
        store
            .set(
                ACTIVITIES_KEY,
                r#"[
                    {"id": 1, "date": "2025-01-14", "type": "food", "food": "vegan", "carbon_kg": 2.5},
                    {"id": 2, "date": "2025-01-14", "type": "transport", "transport": "car", "distance": 12},
                    {"id": 3, "date": "not a date", "type": "food", "food": "meat"}
                ]"#,
            )
            .unwrap();
        let repo = StoreActivityRepository::new(&store);

        let before = repo.list().unwrap();
        assert_eq!(before.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(before[1].activity.distance_km(), Some(12.0));

        let created = repo.create(Activity::food("meat"), today(), 11.5).unwrap();
        assert!(created.id > 3);

        let after = repo.list().unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0].activity, Activity::food("vegan"));
        assert_eq!(after[2].id, created.id);

        // The record that could not be decoded is still stored untouched.
        let raw: Vec<Value> = serde_json::from_str(&store.get(ACTIVITIES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw.len(), 4);
        assert_eq!(raw[2]["date"], "not a date");
        assert_eq!(store.get("activities_unreadable").unwrap(), None);
    }
}
