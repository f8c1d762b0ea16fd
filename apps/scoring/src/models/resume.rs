use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A resume as edited in the builder. Presentation-only fields (template,
/// colour theme, collapsed state) are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: ResumeSkills,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub live_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github_url: String,
}

/// Skills grouped by category. Older saves stored a flat list, which loads as
/// `technical`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillsRepr")]
pub struct ResumeSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

impl ResumeSkills {
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsRepr {
    Flat(Vec<String>),
    Grouped(GroupedSkills),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct GroupedSkills {
    #[serde(deserialize_with = "null_as_default")]
    technical: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    soft: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    tools: Vec<String>,
}

impl From<SkillsRepr> for ResumeSkills {
    fn from(repr: SkillsRepr) -> Self {
        match repr {
            SkillsRepr::Flat(technical) => ResumeSkills {
                technical,
                ..Default::default()
            },
            SkillsRepr::Grouped(g) => ResumeSkills {
                technical: g.technical,
                soft: g.soft,
                tools: g.tools,
            },
        }
    }
}
