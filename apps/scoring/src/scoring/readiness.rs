//! Readiness scoring rates how well-specified a job-description analysis is.
//!
//! Skills are detected from fixed keyword tables, then a small rubric awards a
//! baseline plus points for skill breadth, company, role and JD length.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use super::{evaluate_rules, Rule, ScoreResult, Scorer, Verdict};
use crate::models::analysis::{AnalysisRecord, JobDescription, SkillCategory, SkillInventory};
use crate::prep::{checklist, company_intel, interview_questions, prep_plan, round_flow};

/// Points every analysis starts with.
pub const BASELINE_POINTS: u32 = 35;

pub const POINTS_PER_CATEGORY: u32 = 5;

pub const MAX_CATEGORY_POINTS: u32 = 30;

/// JD texts strictly longer than this (in UTF-16 units) earn the detail bonus.
pub const DETAILED_JD_CHARS: usize = 800;

/// Assigned to `Other` when no keyword is detected.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem Solving", "Basic Coding", "Projects"];

const SKILL_TABLE: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        &[
            "DSA",
            "Data Structures",
            "Algorithms",
            "OOP",
            "Object Oriented",
            "DBMS",
            "Database Management",
            "OS",
            "Operating Systems",
            "Networks",
            "Computer Networks",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "Java",
            "Python",
            "JavaScript",
            "TypeScript",
            "C++",
            "C#",
            "Golang",
            "Go",
            "Rust",
            "Ruby",
            "Swift",
            "Kotlin",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "React", "Next.js", "Node.js", "Express", "REST", "GraphQL", "HTML", "CSS", "Tailwind",
            "Redux", "Vue", "Angular",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "SQL",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "NoSQL",
            "Cassandra",
            "Elasticsearch",
        ],
    ),
    (
        SkillCategory::CloudDevOps,
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Linux",
            "Jenkins",
            "Terraform",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "Selenium",
            "Cypress",
            "Playwright",
            "Jest",
            "JUnit",
            "PyTest",
            "Mocha",
            "Chai",
        ],
    ),
];

/// Keywords that would match inside ordinary words need word boundaries.
const WORD_BOUNDED: &[&str] = &["Go"];

static SKILL_PATTERNS: LazyLock<Vec<(SkillCategory, &'static str, Regex)>> = LazyLock::new(|| {
    SKILL_TABLE
        .iter()
        .flat_map(|(category, skills)| skills.iter().map(move |skill| (*category, *skill)))
        .map(|(category, skill)| {
            let escaped = regex::escape(skill);
            let pattern = if WORD_BOUNDED.contains(&skill) {
                format!(r"(?i)\b{escaped}\b")
            } else {
                format!("(?i){escaped}")
            };
            let re = Regex::new(&pattern).expect("skill keywords are escaped literals");
            (category, skill, re)
        })
        .collect()
});

/// Detects known skills in `text`, grouped by category in table order.
pub fn extract_skills(text: &str) -> SkillInventory {
    let mut inventory: SkillInventory = SkillCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    let mut found_any = false;
    for (category, skill, re) in SKILL_PATTERNS.iter() {
        if re.is_match(text) {
            inventory
                .entry(*category)
                .or_default()
                .push(skill.to_string());
            found_any = true;
        }
    }

    if !found_any {
        inventory.insert(
            SkillCategory::Other,
            FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
        );
    }

    inventory
}

pub static READINESS_RULES: &[Rule<JobDescription, SkillInventory>] = &[
    Rule {
        id: "baseline",
        points: BASELINE_POINTS,
        suggestion: "",
        check: baseline,
    },
    Rule {
        id: "skill_breadth",
        points: MAX_CATEGORY_POINTS,
        suggestion: "Paste a job description that names concrete skills (+5 points per skill area)",
        check: skill_breadth,
    },
    Rule {
        id: "company",
        points: 10,
        suggestion: "Add the company name (+10 points)",
        check: has_company,
    },
    Rule {
        id: "role",
        points: 10,
        suggestion: "Add the role you are applying for (+10 points)",
        check: has_role,
    },
    Rule {
        id: "detailed_jd",
        points: 10,
        suggestion: "Paste the full job description, over 800 characters (+10 points)",
        check: detailed_jd,
    },
];

const MORE_SKILL_AREAS: &str =
    "Cover more skill areas in the job description (+5 points per area, up to +30)";

/// Stateless scorer: extracts skills from the JD, then applies
/// [`READINESS_RULES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessScorer;

impl ReadinessScorer {
    /// Scores against an already extracted inventory.
    pub fn evaluate_with(&self, jd: &JobDescription, skills: &SkillInventory) -> ScoreResult {
        let result = evaluate_rules(READINESS_RULES, jd, skills).into_ranked();
        debug!(
            score = result.score,
            company = %jd.company,
            role = %jd.role,
            "readiness scored"
        );
        result
    }
}

impl Scorer<JobDescription> for ReadinessScorer {
    fn evaluate(&self, jd: &JobDescription) -> ScoreResult {
        self.evaluate_with(jd, &extract_skills(&jd.text))
    }
}

/// Builds a fresh analysis record timestamped `now`, with its preparation
/// kit (company intel, rounds, plan, checklist and questions).
pub fn analyze_at(jd: &JobDescription, now: DateTime<Utc>) -> AnalysisRecord {
    let skills = extract_skills(&jd.text);
    let result = ReadinessScorer.evaluate_with(jd, &skills);

    let intel = company_intel(&jd.company);
    let round_flow = round_flow(intel.size, &skills);
    let plan = prep_plan(&skills);
    let checklist = checklist(&skills);
    let questions = interview_questions(&skills);

    let mut record = AnalysisRecord::new(jd, skills, result.score, result.suggestions, now);
    record.company_intel = Some(intel);
    record.round_flow = round_flow;
    record.plan = plan;
    record.checklist = checklist;
    record.questions = questions;
    record
}

pub fn analyze_job_description(text: &str, role: &str, company: &str) -> AnalysisRecord {
    let jd = JobDescription {
        text: text.to_string(),
        role: role.to_string(),
        company: company.to_string(),
    };
    analyze_at(&jd, Utc::now())
}

fn baseline(_: &JobDescription, _: &SkillInventory) -> Verdict {
    Verdict::Met
}

fn skill_breadth(_: &JobDescription, skills: &SkillInventory) -> Verdict {
    let categories = skills.values().filter(|list| !list.is_empty()).count() as u32;
    let points = categories * POINTS_PER_CATEGORY;

    if points >= MAX_CATEGORY_POINTS {
        Verdict::Met
    } else if points == 0 {
        Verdict::Unmet
    } else {
        Verdict::Partial {
            points,
            suggestion: MORE_SKILL_AREAS,
        }
    }
}

fn has_company(jd: &JobDescription, _: &SkillInventory) -> Verdict {
    if jd.company.trim().is_empty() {
        Verdict::Unmet
    } else {
        Verdict::Met
    }
}

fn has_role(jd: &JobDescription, _: &SkillInventory) -> Verdict {
    if jd.role.trim().is_empty() {
        Verdict::Unmet
    } else {
        Verdict::Met
    }
}

fn detailed_jd(jd: &JobDescription, _: &SkillInventory) -> Verdict {
    if jd.text.encode_utf16().count() > DETAILED_JD_CHARS {
        Verdict::Met
    } else {
        Verdict::Unmet
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
