use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Electricity,
    Food,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Electricity => "electricity",
            Category::Food => "food",
            Category::Other => "other",
        }
    }
}

/// A submitted tracking entry, before it is recorded.
///
/// Sub-type fields stay as free text so that unrecognised values can be
/// carried through and score zero instead of failing to parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Activity {
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    // Raw user input, in km.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text_or_number"
    )]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

/// Distances were stored as text by the tracking form but may also be plain numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(km) => km.to_string(),
    }))
}

impl Activity {
    pub fn transport(mode: impl Into<String>, distance: impl Into<String>) -> Self {
        Self {
            category: Category::Transport,
            transport: Some(mode.into()),
            distance: Some(distance.into()),
            ..Self::default()
        }
    }

    pub fn electricity(usage: impl Into<String>) -> Self {
        Self {
            category: Category::Electricity,
            electricity: Some(usage.into()),
            ..Self::default()
        }
    }

    pub fn food(diet: impl Into<String>) -> Self {
        Self {
            category: Category::Food,
            food: Some(diet.into()),
            ..Self::default()
        }
    }

    /// Parsed distance, or `None` when missing, non-numeric, negative or not finite.
    pub fn distance_km(&self) -> Option<f64> {
        let km: f64 = self.distance.as_deref()?.trim().parse().ok()?;
        (km.is_finite() && km >= 0.0).then_some(km)
    }

    /// The sub-type field that matters for this activity's category.
    pub fn sub_type(&self) -> Option<&str> {
        match self.category {
            Category::Transport => self.transport.as_deref(),
            Category::Electricity => self.electricity.as_deref(),
            Category::Food => self.food.as_deref(),
            Category::Other => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordedActivity {
    pub id: u64,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(default)]
    pub carbon_kg: f64,
}
