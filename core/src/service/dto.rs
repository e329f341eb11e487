use serde::{Deserialize, Serialize};

use crate::model::activity::RecordedActivity;
use crate::model::community::EcoAction;

/// Result of logging one activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackOutcome {
    pub activity: RecordedActivity,
    pub carbon_kg: f64,
    pub day_total_kg: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EcoActionView {
    pub action: EcoAction,
    pub joined: bool,
    // Includes the local user once joined.
    pub participants: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub today_kg: f64,
    pub weekly_average_kg: f64,
    pub total_kg: f64,
    pub activities_count: usize,
    pub streak_days: u32,
    pub daily_target_kg: f64,
    // Today's total is at or below the target.
    pub within_target: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub date: String,        // YYYY-MM-DD
    pub day_of_week: String, // Mon, Tue...
    pub carbon_kg: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeeklyFootprint {
    pub year: i32,
    pub week: u32,
    pub days: Vec<DailyEntry>,
    pub total_kg: f64,
}
