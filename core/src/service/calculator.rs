use tracing::warn;

use crate::model::activity::{Activity, Category};
use crate::model::daily_footprint::round2;
use crate::model::emission::EmissionFactors;

/// kg CO2e for one activity, rounded to two decimals.
///
/// Never fails. An unknown category or sub-type, or a missing or unparsable
/// distance, yields `0.0`, which callers cannot tell apart from a genuine zero.
pub fn calculate_footprint(activity: &Activity, factors: &EmissionFactors) -> f64 {
    let Some(sub_type) = activity.sub_type().filter(|s| !s.is_empty()) else {
        return 0.0;
    };

    let carbon = match activity.category {
        Category::Transport => match activity.distance_km() {
            Some(km) => factors.factor(Category::Transport, sub_type) * km,
            None => {
                if activity.distance.is_some() {
                    warn!(distance = ?activity.distance, "unusable distance, counting as zero");
                }
                0.0
            }
        },
        Category::Electricity | Category::Food => factors.factor(activity.category, sub_type),
        Category::Other => 0.0,
    };

    round2(carbon)
}
