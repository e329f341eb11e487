use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub eco_points: u32,
    pub carbon_reduced_kg: f64,
}

impl Member {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    TreePlanting,
    Cleanup,
    Education,
    Gardening,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EcoAction {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub kind: ActionKind,
    pub participants: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
}

impl Badge {
    pub fn for_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Badge::Gold),
            2 => Some(Badge::Silver),
            3 => Some(Badge::Bronze),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedMember {
    pub position: usize,
    pub badge: Option<Badge>,
    pub member: Member,
}

/// Ranks members by eco points, highest first. Ties keep their input order.
pub fn leaderboard(members: &[Member]) -> Vec<RankedMember> {
    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| b.eco_points.cmp(&a.eco_points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, member)| RankedMember {
            position: i + 1,
            badge: Badge::for_position(i + 1),
            member,
        })
        .collect()
}

/// Eco points summed over every member.
pub fn community_points(members: &[Member]) -> u64 {
    members.iter().map(|m| u64::from(m.eco_points)).sum()
}

fn member(id: u32, name: &str, email: &str, eco_points: u32, carbon_reduced_kg: f64) -> Member {
    Member {
        id,
        name: name.to_string(),
        email: email.to_string(),
        eco_points,
        carbon_reduced_kg,
    }
}

pub fn seed_members() -> Vec<Member> {
    vec![
        member(1, "Alice Green", "alice@example.com", 2450, 125.5),
        member(2, "Bob Nature", "bob@example.com", 2890, 150.2),
        member(3, "Carol Earth", "carol@example.com", 1920, 95.8),
        member(4, "David Forest", "david@example.com", 3210, 180.3),
        member(5, "Eva Ocean", "eva@example.com", 2650, 140.7),
    ]
}

fn action(
    id: u32,
    title: &str,
    description: &str,
    (y, m, d): (i32, u32, u32),
    location: &str,
    kind: ActionKind,
    participants: u32,
) -> EcoAction {
    EcoAction {
        id,
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        location: location.to_string(),
        kind,
        participants,
    }
}

pub fn seed_actions() -> Vec<EcoAction> {
    vec![
        action(
            1,
            "Community Tree Plantation Drive",
            "Join us in planting 500 trees in Central Park. Bring your family and friends!",
            (2025, 1, 15),
            "Central Park",
            ActionKind::TreePlanting,
            45,
        ),
        action(
            2,
            "Beach Cleanup & Recycling Workshop",
            "Help clean our beaches and learn about recycling techniques.",
            (2025, 1, 20),
            "Sunset Beach",
            ActionKind::Cleanup,
            32,
        ),
        action(
            3,
            "Solar Energy Information Session",
            "Learn about home solar panel installation and energy savings.",
            (2025, 1, 25),
            "Community Center",
            ActionKind::Education,
            28,
        ),
        action(
            4,
            "Organic Gardening Workshop",
            "Start your own sustainable garden with expert guidance.",
            (2025, 1, 30),
            "Green Gardens",
            ActionKind::Gardening,
            22,
        ),
    ]
}
