use std::collections::BTreeSet;

use anyhow::Result;
use chrono::NaiveDate;

use crate::model::activity::{Activity, RecordedActivity};
use crate::model::daily_footprint::DailyFootprint;

pub trait ActivityRepository {
    fn create(&self, activity: Activity, date: NaiveDate, carbon_kg: f64) -> Result<RecordedActivity>;
    fn list(&self) -> Result<Vec<RecordedActivity>>;
    fn clear(&self) -> Result<()>;
}

pub trait DailyFootprintRepository {
    fn read(&self) -> Result<DailyFootprint>;
    fn write(&self, footprint: &DailyFootprint) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub trait JoinedActionRepository {
    fn list(&self) -> Result<BTreeSet<u32>>;
    /// Returns `false` when the id was already present.
    fn add(&self, id: u32) -> Result<bool>;
}
