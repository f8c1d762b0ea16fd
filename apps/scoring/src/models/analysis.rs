use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::null_as_default;
use crate::prep::{ChecklistRound, CompanyIntel, PlanDay, RoundInfo};

use crate::scoring::refine::{refine_score, Confidence, ConfidenceMap};

/// Skill areas recognised in a job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Core CS")]
    CoreCs,
    Languages,
    Web,
    Data,
    #[serde(rename = "Cloud/DevOps")]
    CloudDevOps,
    Testing,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::CoreCs,
        SkillCategory::Languages,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::CloudDevOps,
        SkillCategory::Testing,
        SkillCategory::Other,
    ];
}

/// Detected skills per category. Every category is present, possibly empty.
pub type SkillInventory = BTreeMap<SkillCategory, Vec<String>>;

/// Raw input of a readiness analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
}

/// A persisted readiness analysis.
///
/// `base_score` is written once when the analysis is created. Only
/// [`AnalysisRecord::apply_confidence`] moves `final_score`, and it always
/// recomputes from the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jd_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extracted_skills: SkillInventory,
    base_score: u32,
    final_score: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    skill_confidence_map: ConfidenceMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_intel: Option<CompanyIntel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub round_flow: Vec<RoundInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plan: Vec<PlanDay>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checklist: Vec<ChecklistRound>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub questions: Vec<String>,
}

impl AnalysisRecord {
    pub fn new(
        jd: &JobDescription,
        extracted_skills: SkillInventory,
        base_score: u32,
        suggestions: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            role: jd.role.clone(),
            company: jd.company.clone(),
            jd_text: jd.text.clone(),
            extracted_skills,
            base_score,
            final_score: base_score,
            skill_confidence_map: ConfidenceMap::new(),
            suggestions,
            company_intel: None,
            round_flow: Vec::new(),
            plan: Vec::new(),
            checklist: Vec::new(),
            questions: Vec::new(),
        }
    }

    pub fn base_score(&self) -> u32 {
        self.base_score
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    pub fn confidence(&self) -> &ConfidenceMap {
        &self.skill_confidence_map
    }

    /// Replaces the confidence map and recomputes the final score from the base.
    pub fn apply_confidence(&mut self, overrides: ConfidenceMap, now: DateTime<Utc>) {
        self.final_score = refine_score(self.base_score, &overrides);
        self.skill_confidence_map = overrides;
        self.updated_at = now;
    }

    /// Flips one skill between `know` and `practice`. A skill with no entry is
    /// treated as `practice`, so the first toggle marks it known.
    pub fn toggle_skill(&mut self, skill: &str, now: DateTime<Utc>) {
        let mut overrides = self.skill_confidence_map.clone();
        let current = overrides
            .get(skill)
            .copied()
            .unwrap_or(Confidence::Practice);
        overrides.insert(skill.to_string(), current.toggled());
        self.apply_confidence(overrides, now);
    }

    /// Skills the user still marked for practice.
    pub fn practice_skills(&self) -> Vec<&str> {
        self.skill_confidence_map
            .iter()
            .filter(|(_, c)| **c == Confidence::Practice)
            .map(|(skill, _)| skill.as_str())
            .collect()
    }

    /// Every detected skill, in category order.
    pub fn all_skills(&self) -> Vec<&str> {
        self.extracted_skills
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
