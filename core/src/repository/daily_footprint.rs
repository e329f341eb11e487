use anyhow::Result;
use chrono::NaiveDate;
use tracing::warn;

use crate::model::daily_footprint::DailyFootprint;
use crate::repository::json::{load_object, save, Shape};
use crate::repository::store::KeyValueStore;
use crate::repository::traits::DailyFootprintRepository;

pub const DAILY_FOOTPRINT_KEY: &str = "daily_footprint";

pub struct StoreDailyFootprintRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreDailyFootprintRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> DailyFootprintRepository for StoreDailyFootprintRepository<S> {
    /// Entries are read one by one; a bad date or amount drops only that entry.
    fn read(&self) -> Result<DailyFootprint> {
        let mut footprint = DailyFootprint::new();
        for (key, value) in load_object(&self.store, DAILY_FOOTPRINT_KEY)? {
            let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d").ok();
            let amount = value.as_f64().filter(|kg| kg.is_finite() && *kg >= 0.0);
            match (date, amount) {
                (Some(date), Some(kg)) => {
                    footprint.days.insert(date, kg);
                }
                _ => warn!(key = %key, value = %value, "dropping unreadable daily footprint entry"),
            }
        }
        Ok(footprint)
    }

    fn write(&self, footprint: &DailyFootprint) -> Result<()> {
        save(&self.store, DAILY_FOOTPRINT_KEY, footprint, Shape::Object)
    }

    fn clear(&self) -> Result<()> {
        self.store.remove(DAILY_FOOTPRINT_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::MemoryKeyValueStore;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_absent_is_empty() {
        let store = MemoryKeyValueStore::new();
        let repo = StoreDailyFootprintRepository::new(&store);
        assert!(repo.read().unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_blob_is_empty() {
        let store = MemoryKeyValueStore::new();
        store.set(DAILY_FOOTPRINT_KEY, "{not json").unwrap();
        let repo = StoreDailyFootprintRepository::new(&store);
        assert!(repo.read().unwrap().is_empty());
    }

    #[test]
    fn test_valid_days_survive_bad_entries() {
        let store = MemoryKeyValueStore::new();
        store
            .set(
                DAILY_FOOTPRINT_KEY,
                r#"{"2025-01-01": 10, "total": 3, "2025-01-02": "lots", "2025-01-03": -1, "2025-01-04": 4.2}"#,
            )
            .unwrap();
        let repo = StoreDailyFootprintRepository::new(&store);

        let footprint = repo.read().unwrap();
        assert_eq!(footprint.days.len(), 2);
        assert_eq!(footprint.get(day("2025-01-01")), 10.0);
        assert_eq!(footprint.get(day("2025-01-04")), 4.2);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryKeyValueStore::new();
        let repo = StoreDailyFootprintRepository::new(&store);
        let date = day("2025-01-01");

        let mut footprint = DailyFootprint::new();
        footprint.add(date, 4.2);
        repo.write(&footprint).unwrap();

        assert_eq!(repo.read().unwrap().get(date), 4.2);

        repo.clear().unwrap();
        assert_eq!(store.get(DAILY_FOOTPRINT_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_over_unreadable_blob_keeps_copy() {
        let store = MemoryKeyValueStore::new();
        store.set(DAILY_FOOTPRINT_KEY, r#"{"2025-01-01": 10"#).unwrap();
        let repo = StoreDailyFootprintRepository::new(&store);

        let mut footprint = repo.read().unwrap();
        footprint.add(day("2025-01-03"), 1.0);
        repo.write(&footprint).unwrap();

        assert_eq!(
            store.get("daily_footprint_unreadable").unwrap().as_deref(),
            Some(r#"{"2025-01-01": 10"#)
        );
    }
}
