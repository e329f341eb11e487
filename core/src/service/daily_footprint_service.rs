use crate::model::daily_footprint::DailyFootprint;
use crate::repository::DailyFootprintRepository;
use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Running per-day totals on top of a [`DailyFootprintRepository`].
///
/// `update` is an unsynchronized read-modify-write: two writers sharing a
/// store can lose each other's additions.
pub struct DailyFootprintService<R: DailyFootprintRepository> {
    repo: R,
}

impl<R: DailyFootprintRepository> DailyFootprintService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn read(&self) -> Result<DailyFootprint> {
        self.repo.read()
    }

    pub fn total_for(&self, date: NaiveDate) -> Result<f64> {
        Ok(self.repo.read()?.get(date))
    }

    /// Adds `amount` kg to `date` and returns the day's new total.
    pub fn update(&self, date: NaiveDate, amount: f64) -> Result<f64> {
        let amount = if amount.is_finite() && amount >= 0.0 {
            amount
        } else {
            warn!(%date, amount, "ignoring negative or non-finite footprint amount");
            0.0
        };

        let mut footprint = self.repo.read()?;
        let total = footprint.add(date, amount);
        self.repo.write(&footprint)?;
        debug!(%date, amount, total, "updated daily footprint");
        Ok(total)
    }

    pub fn reset(&self) -> Result<()> {
        self.repo.clear()
    }
}
