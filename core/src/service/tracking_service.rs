use crate::model::activity::{Activity, RecordedActivity};
use crate::model::emission::EmissionFactors;
use crate::repository::{ActivityRepository, DailyFootprintRepository};
use crate::service::calculator::calculate_footprint;
use crate::service::daily_footprint_service::DailyFootprintService;
use crate::service::dto::TrackOutcome;
use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

/// Logs activities: calculate, append to the activity log, add to the day's total.
pub struct TrackingService<A: ActivityRepository, D: DailyFootprintRepository> {
    activities: A,
    daily: DailyFootprintService<D>,
    factors: EmissionFactors,
}

impl<A: ActivityRepository, D: DailyFootprintRepository> TrackingService<A, D> {
    pub fn new(activities: A, daily: DailyFootprintService<D>, factors: EmissionFactors) -> Self {
        Self {
            activities,
            daily,
            factors,
        }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn calculate(&self, activity: &Activity) -> f64 {
        calculate_footprint(activity, &self.factors)
    }

    /// Records `activity` against `today`, the day it was logged.
    pub fn track(&self, activity: Activity, today: NaiveDate) -> Result<TrackOutcome> {
        let carbon_kg = self.calculate(&activity);
        let recorded = self.activities.create(activity, today, carbon_kg)?;
        let day_total_kg = self.daily.update(today, carbon_kg)?;

        info!(
            id = recorded.id,
            category = recorded.activity.category.as_str(),
            carbon_kg,
            day_total_kg,
            "tracked activity"
        );

        Ok(TrackOutcome {
            activity: recorded,
            carbon_kg,
            day_total_kg,
        })
    }

    pub fn list_activities(&self) -> Result<Vec<RecordedActivity>> {
        self.activities.list()
    }

    pub fn activities(&self) -> &A {
        &self.activities
    }

    pub fn daily(&self) -> &DailyFootprintService<D> {
        &self.daily
    }

    /// Clears the activity log and every daily total.
    pub fn reset(&self) -> Result<()> {
        self.activities.clear()?;
        self.daily.reset()
    }
}
