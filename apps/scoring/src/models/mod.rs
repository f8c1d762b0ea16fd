pub mod analysis;
pub mod job;
pub mod resume;

use serde::{Deserialize, Deserializer};

pub use analysis::{AnalysisRecord, JobDescription, SkillCategory, SkillInventory};
pub use job::{JobPosting, PreferenceProfile, DEFAULT_MIN_MATCH_SCORE};
pub use resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, ResumeSkills,
};

/// Reads an explicit `null` as the field's default. The browser forms save
/// blank inputs as `null`, which would otherwise reject the whole record.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
