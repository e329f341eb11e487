use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::model::activity::Category;

// kg CO2e per km
const TRANSPORT_FACTORS: &[(&str, f64)] = &[
    ("car", 0.21),
    ("bus", 0.08),
    ("bike", 0.0),
    ("walking", 0.0),
];

// kg CO2e per day
const ELECTRICITY_FACTORS: &[(&str, f64)] = &[("low", 5.0), ("medium", 10.0), ("high", 18.0)];

// kg CO2e per day
const FOOD_FACTORS: &[(&str, f64)] = &[
    ("vegan", 2.5),
    ("vegetarian", 4.2),
    ("mixed", 7.8),
    ("meat", 11.5),
];

/// Per-category lookup from sub-type name to emission factor.
///
/// Sub-types that are not in the table have a factor of zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    pub transport: BTreeMap<String, f64>,
    pub electricity: BTreeMap<String, f64>,
    pub food: BTreeMap<String, f64>,
}

/// Partial table read from `config.toml`; anything left out keeps its default.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FactorOverrides {
    #[serde(default)]
    pub transport: BTreeMap<String, f64>,
    #[serde(default)]
    pub electricity: BTreeMap<String, f64>,
    #[serde(default)]
    pub food: BTreeMap<String, f64>,
}

fn to_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            transport: to_map(TRANSPORT_FACTORS),
            electricity: to_map(ELECTRICITY_FACTORS),
            food: to_map(FOOD_FACTORS),
        }
    }
}

impl EmissionFactors {
    pub fn factor(&self, category: Category, sub_type: &str) -> f64 {
        let table = match category {
            Category::Transport => &self.transport,
            Category::Electricity => &self.electricity,
            Category::Food => &self.food,
            Category::Other => return 0.0,
        };
        table.get(sub_type).copied().unwrap_or(0.0)
    }

    pub fn with_overrides(mut self, overrides: FactorOverrides) -> Self {
        merge(&mut self.transport, overrides.transport, "transport");
        merge(&mut self.electricity, overrides.electricity, "electricity");
        merge(&mut self.food, overrides.food, "food");
        self
    }
}

fn merge(table: &mut BTreeMap<String, f64>, overrides: BTreeMap<String, f64>, category: &str) {
    for (sub_type, factor) in overrides {
        if !factor.is_finite() || factor < 0.0 {
            warn!(category, sub_type = %sub_type, factor, "ignoring invalid emission factor override");
            continue;
        }
        table.insert(sub_type, factor);
    }
}
