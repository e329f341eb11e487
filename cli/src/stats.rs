use ecosteps_core::service::dto::DashboardSummary;

// Days in a row with at least one logged activity.
fn streak_label(days: u32) -> String {
    match days {
        0 => "no streak yet".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

pub fn show_summary(summary: &DashboardSummary) {
    println!("\x1b[1;32mYour carbon footprint\x1b[0m");
    println!("  Today:          {:>8.2} kg CO₂", summary.today_kg);
    println!("  7-day average:  {:>8.2} kg CO₂", summary.weekly_average_kg);
    println!("  All time:       {:>8.2} kg CO₂", summary.total_kg);
    println!("  Activities:     {:>8}", summary.activities_count);
    println!("  Streak:         {:>8}", streak_label(summary.streak_days));
    println!("  Daily target:   {:>8.2} kg CO₂ ({})", summary.daily_target_kg, target_label(summary));
}

fn target_label(summary: &DashboardSummary) -> &'static str {
    if summary.within_target {
        "on track"
    } else {
        "over target"
    }
}
