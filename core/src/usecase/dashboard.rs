use crate::config::DEFAULT_DAILY_TARGET_KG;
use crate::model::daily_footprint::round2;
use crate::repository::{ActivityRepository, DailyFootprintRepository};
use crate::service::daily_footprint_service::DailyFootprintService;
use crate::service::dto::{DailyEntry, DashboardSummary, WeeklyFootprint};
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

const WEEK_DAYS: i64 = 7;

pub struct DashboardUseCase<'a, A: ActivityRepository, D: DailyFootprintRepository> {
    activities: &'a A,
    daily: &'a DailyFootprintService<D>,
    daily_target_kg: f64,
}

impl<'a, A: ActivityRepository, D: DailyFootprintRepository> DashboardUseCase<'a, A, D> {
    pub fn new(activities: &'a A, daily: &'a DailyFootprintService<D>) -> Self {
        Self {
            activities,
            daily,
            daily_target_kg: DEFAULT_DAILY_TARGET_KG,
        }
    }

    pub fn with_daily_target(mut self, daily_target_kg: f64) -> Self {
        self.daily_target_kg = daily_target_kg;
        self
    }

    pub fn summary(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let footprint = self.daily.read()?;
        let activities_count = self.activities.list()?.len();

        // Days with no entry count as zero.
        let week_total: f64 = (0..WEEK_DAYS)
            .map(|offset| footprint.get(today - Duration::days(offset)))
            .sum();

        let mut streak_days = 0;
        let mut day = today;
        while footprint.days.contains_key(&day) {
            streak_days += 1;
            day -= Duration::days(1);
        }

        let today_kg = footprint.get(today);
        Ok(DashboardSummary {
            today_kg,
            weekly_average_kg: round2(week_total / WEEK_DAYS as f64),
            total_kg: footprint.total(),
            activities_count,
            streak_days,
            daily_target_kg: self.daily_target_kg,
            within_target: today_kg <= self.daily_target_kg,
        })
    }

    /// Daily totals grouped by ISO week, newest week and newest day first.
    pub fn weekly_history(&self) -> Result<Vec<WeeklyFootprint>> {
        let footprint = self.daily.read()?;

        let mut weeks: BTreeMap<(i32, u32), Vec<(NaiveDate, f64)>> = BTreeMap::new();
        for (&date, &carbon_kg) in &footprint.days {
            let iso = date.iso_week();
            weeks.entry((iso.year(), iso.week())).or_default().push((date, carbon_kg));
        }

        let history = weeks
            .into_iter()
            .rev()
            .map(|((year, week), mut days)| {
                days.sort_by(|a, b| b.0.cmp(&a.0));
                let total_kg = round2(days.iter().map(|(_, kg)| kg).sum());
                WeeklyFootprint {
                    year,
                    week,
                    days: days
                        .into_iter()
                        .map(|(date, carbon_kg)| DailyEntry {
                            date: date.format("%Y-%m-%d").to_string(),
                            day_of_week: date.format("%a").to_string(),
                            carbon_kg,
                        })
                        .collect(),
                    total_kg,
                }
            })
            .collect();

        Ok(history)
    }
}
