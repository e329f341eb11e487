use ecosteps_core::service::dto::WeeklyFootprint;
use ecosteps_core::{Category, RecordedActivity};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "CO₂ (kg)")]
    carbon: String,
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Details")]
    details: String,
    #[tabled(rename = "CO₂ (kg)")]
    carbon: String,
}

fn styled(table: &mut Table) {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
}

pub fn show_history(weeks: Vec<WeeklyFootprint>) {
    if weeks.is_empty() {
        println!("No footprint data yet. Track an activity to get started.");
        return;
    }

    for week in weeks {
        println!(
            "\n\x1b[1;36mWeek {}, {}\x1b[0m (Total: {:.2} kg CO₂)",
            week.week, week.year, week.total_kg
        );

        let rows: Vec<DayRow> = week
            .days
            .into_iter()
            .map(|d| DayRow {
                date: d.date,
                day: d.day_of_week,
                carbon: format!("{:.2}", d.carbon_kg),
            })
            .collect();

        let mut table = Table::new(rows);
        styled(&mut table);
        println!("{}", table);
    }
}

fn details(record: &RecordedActivity) -> String {
    let a = &record.activity;
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    match a.category {
        Category::Transport => format!("{}, {} km", or_dash(&a.transport), or_dash(&a.distance)),
        Category::Electricity => format!("{} usage", or_dash(&a.electricity)),
        Category::Food => format!("{} diet", or_dash(&a.food)),
        Category::Other => "-".to_string(),
    }
}

pub fn show_activities(activities: Vec<RecordedActivity>) {
    if activities.is_empty() {
        println!("No activities logged.");
        return;
    }

    let total: f64 = activities.iter().map(|a| a.carbon_kg).sum();
    let count = activities.len();

    let rows: Vec<ActivityRow> = activities
        .iter()
        .map(|record| ActivityRow {
            id: record.id,
            date: record.date.format("%Y-%m-%d").to_string(),
            category: record.activity.category.as_str().to_string(),
            details: details(record),
            carbon: format!("{:.2}", record.carbon_kg),
        })
        .collect();

    let mut table = Table::new(rows);
    styled(&mut table);
    println!("{}", table);
    println!("{} activities, {:.2} kg CO₂ in total", count, total);
}
