//! Interview preparation content derived from a job-description analysis.
//!
//! Everything here is a pure function of the detected skills and the company
//! name, so re-running an analysis always yields the same kit.

pub mod company;
pub mod plan;

pub use company::{company_intel, company_size, round_flow, CompanyIntel, CompanySize, RoundInfo};
pub use plan::{checklist, interview_questions, prep_plan, ChecklistRound, PlanDay, MAX_QUESTIONS};

use crate::models::SkillInventory;

fn has_skill(skills: &SkillInventory, name: &str) -> bool {
    skills.values().flatten().any(|skill| skill == name)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
