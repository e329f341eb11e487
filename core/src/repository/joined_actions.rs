use std::collections::BTreeSet;

use anyhow::Result;
use tracing::warn;

use crate::repository::json::{load_array, save, Shape};
use crate::repository::store::KeyValueStore;
use crate::repository::traits::JoinedActionRepository;

pub const JOINED_ACTIONS_KEY: &str = "joined_actions";

pub struct StoreJoinedActionRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreJoinedActionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> JoinedActionRepository for StoreJoinedActionRepository<S> {
    fn list(&self) -> Result<BTreeSet<u32>> {
        let mut joined = BTreeSet::new();
        for entry in load_array(&self.store, JOINED_ACTIONS_KEY)? {
            match entry.as_u64().and_then(|id| u32::try_from(id).ok()) {
                Some(id) => {
                    joined.insert(id);
                }
                None => warn!(entry = %entry, "skipping unreadable joined action id"),
            }
        }
        Ok(joined)
    }

    fn add(&self, id: u32) -> Result<bool> {
        let mut joined = self.list()?;
        if !joined.insert(id) {
            return Ok(false);
        }
        save(&self.store, JOINED_ACTIONS_KEY, &joined, Shape::Array)?;
        Ok(true)
    }
}
