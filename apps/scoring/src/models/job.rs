use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::null_as_default;

/// Match threshold applied when a stored profile carries none.
pub const DEFAULT_MIN_MATCH_SCORE: u32 = 40;

/// A job posting as stored by the tracker. Every field is optional on the wire
/// and falls back to an empty value, so partial postings still score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub posted_days_ago: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub apply_url: String,
}

/// User preferences the match scorer ranks postings against.
///
/// `role_keywords` and `skills` are comma-separated free text, exactly as the
/// settings form saves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub role_keywords: String,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_locations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_mode: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(deserialize_with = "lenient_score")]
    pub min_match_score: u32,
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            role_keywords: String::new(),
            preferred_locations: vec![],
            preferred_mode: vec![],
            experience_level: String::new(),
            skills: String::new(),
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
        }
    }
}

impl PreferenceProfile {
    /// Lowercased, trimmed, non-empty role keywords.
    pub fn keyword_list(&self) -> Vec<String> {
        split_csv(&self.role_keywords)
    }

    /// Lowercased, trimmed, non-empty skills.
    pub fn skill_list(&self) -> Vec<String> {
        split_csv(&self.skills)
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The settings form posts the threshold as a string; older saves carry a number.
/// A numeric 0 counts as unset, but the string `"0"` is a deliberate 0 from the
/// slider.
fn lenient_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n
            .as_u64()
            .filter(|n| *n != 0)
            .map(|n| n.min(100) as u32),
        Value::String(s) => s.trim().parse::<u32>().ok().map(|n| n.min(100)),
        _ => None,
    };
    Ok(parsed.unwrap_or(DEFAULT_MIN_MATCH_SCORE))
}
