use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accumulated kg CO2e per calendar day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct DailyFootprint {
    pub days: BTreeMap<NaiveDate, f64>, // Key: "YYYY-MM-DD"
}

impl DailyFootprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> f64 {
        self.days.get(&date).copied().unwrap_or(0.0)
    }

    /// Adds `amount` to the day's entry and returns the new total.
    pub fn add(&mut self, date: NaiveDate, amount: f64) -> f64 {
        let entry = self.days.entry(date).or_insert(0.0);
        *entry = round2(*entry + amount);
        *entry
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn total(&self) -> f64 {
        round2(self.days.values().sum())
    }
}
