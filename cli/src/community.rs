use ecosteps_core::service::dto::EcoActionView;
use ecosteps_core::{community_points, leaderboard, Badge, Member};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Eco Points")]
    points: u32,
    #[tabled(rename = "CO₂ Reduced (kg)")]
    reduced: String,
}

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Participants")]
    participants: u32,
    #[tabled(rename = "Joined")]
    joined: String,
}

fn badge_icon(badge: Option<Badge>) -> &'static str {
    match badge {
        Some(Badge::Gold) => "🥇",
        Some(Badge::Silver) => "🥈",
        Some(Badge::Bronze) => "🥉",
        None => "",
    }
}

pub fn show_leaderboard(members: &[Member]) {
    let rows: Vec<RankRow> = leaderboard(members)
        .into_iter()
        .map(|r| RankRow {
            rank: format!("{} {}", r.position, badge_icon(r.badge)).trim_end().to_string(),
            name: format!("{} ({})", r.member.name, r.member.initials()),
            points: r.member.eco_points,
            reduced: format!("{:.1}", r.member.carbon_reduced_kg),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("Total community points: {}", community_points(members));
}

pub fn show_actions(actions: Vec<EcoActionView>) {
    let rows: Vec<ActionRow> = actions
        .into_iter()
        .map(|v| ActionRow {
            id: v.action.id,
            title: v.action.title,
            date: v.action.date.format("%a, %b %-d %Y").to_string(),
            location: v.action.location,
            participants: v.participants,
            joined: if v.joined { "✓".to_string() } else { String::new() },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
    println!("Join with: ecosteps join <ID>");
}
