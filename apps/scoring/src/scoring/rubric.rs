//! Resume rubric: a fixed eleven-point checklist over the resume builder's
//! document, producing a base score and up to four suggestions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{evaluate_rules, Rule, ScoreResult, Scorer, Verdict};
use crate::models::resume::ResumeDocument;

/// Summaries must be strictly longer than this many characters.
pub const SUMMARY_MIN_CHARS: usize = 50;

/// Skills needed across all three categories.
pub const MIN_SKILLS: usize = 5;

/// Points awarded for experience that lacks bullet formatting.
pub const EXPERIENCE_WITHOUT_BULLETS_POINTS: u32 = 10;

pub const BULLET_MARKERS: &[char] = &['•', '-', '\n'];

pub const ACTION_VERBS: &[&str] = &[
    "built",
    "led",
    "designed",
    "implemented",
    "developed",
    "created",
    "optimized",
    "managed",
    "improved",
];

const USE_BULLETS: &str = "Use bullet points in your experience description (+5 points)";

pub static RESUME_RULES: &[Rule<ResumeDocument>] = &[
    Rule {
        id: "full_name",
        points: 10,
        suggestion: "Add your full name (+10 points)",
        check: has_full_name,
    },
    Rule {
        id: "email",
        points: 10,
        suggestion: "Provide an email address (+10 points)",
        check: has_email,
    },
    Rule {
        id: "summary_length",
        points: 10,
        suggestion: "Write a summary of at least 50 characters (+10 points)",
        check: summary_long_enough,
    },
    Rule {
        id: "experience",
        points: 15,
        suggestion: "Add at least one experience entry (+15 points)",
        check: experience_with_bullets,
    },
    Rule {
        id: "education",
        points: 10,
        suggestion: "Add your educational background (+10 points)",
        check: has_education,
    },
    Rule {
        id: "skills",
        points: 10,
        suggestion: "Add at least 5 skills across categories (+10 points)",
        check: enough_skills,
    },
    Rule {
        id: "projects",
        points: 10,
        suggestion: "Add a project title to showcase your work (+10 points)",
        check: has_project,
    },
    Rule {
        id: "phone",
        points: 5,
        suggestion: "Add your phone number (+5 points)",
        check: has_phone,
    },
    Rule {
        id: "linkedin",
        points: 5,
        suggestion: "Add your LinkedIn profile link (+5 points)",
        check: has_linkedin,
    },
    Rule {
        id: "github",
        points: 5,
        suggestion: "Add your GitHub profile link (+5 points)",
        check: has_github,
    },
    Rule {
        id: "action_verbs",
        points: 10,
        suggestion: "Use strong action verbs (built, led, designed) in your summary (+10 points)",
        check: summary_has_action_verb,
    },
];

/// Base score and suggestions for one resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricScore {
    pub base_score: u32,
    pub suggestions: Vec<String>,
}

/// Stateless scorer over [`RESUME_RULES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RubricScorer;

impl Scorer<ResumeDocument> for RubricScorer {
    fn evaluate(&self, document: &ResumeDocument) -> ScoreResult {
        let result = evaluate_rules(RESUME_RULES, document, &()).into_ranked();
        debug!(
            score = result.score,
            open_suggestions = result.suggestions.len(),
            "resume scored"
        );
        result
    }
}

pub fn score_rubric(document: &ResumeDocument) -> RubricScore {
    let result = RubricScorer.evaluate(document);
    RubricScore {
        base_score: result.score,
        suggestions: result.suggestions,
    }
}

fn present(value: &str) -> Verdict {
    if value.is_empty() {
        Verdict::Unmet
    } else {
        Verdict::Met
    }
}

fn met_if(condition: bool) -> Verdict {
    if condition {
        Verdict::Met
    } else {
        Verdict::Unmet
    }
}

fn has_full_name(doc: &ResumeDocument, _: &()) -> Verdict {
    present(&doc.personal_info.full_name)
}

fn has_email(doc: &ResumeDocument, _: &()) -> Verdict {
    present(&doc.personal_info.email)
}

/// Length is measured in UTF-16 code units, as the browser editor counts it.
fn summary_long_enough(doc: &ResumeDocument, _: &()) -> Verdict {
    met_if(doc.summary.encode_utf16().count() > SUMMARY_MIN_CHARS)
}

/// Only entries naming a company count. Having such entries without any
/// bullet-formatted description earns partial credit.
fn experience_with_bullets(doc: &ResumeDocument, _: &()) -> Verdict {
    let mut active = doc
        .experience
        .iter()
        .filter(|exp| !exp.company.is_empty())
        .peekable();

    if active.peek().is_none() {
        return Verdict::Unmet;
    }

    if active.any(|exp| exp.description.contains(BULLET_MARKERS)) {
        Verdict::Met
    } else {
        Verdict::Partial {
            points: EXPERIENCE_WITHOUT_BULLETS_POINTS,
            suggestion: USE_BULLETS,
        }
    }
}

fn has_education(doc: &ResumeDocument, _: &()) -> Verdict {
    met_if(doc.education.iter().any(|edu| !edu.school.is_empty()))
}

fn enough_skills(doc: &ResumeDocument, _: &()) -> Verdict {
    met_if(doc.skills.total() >= MIN_SKILLS)
}

fn has_project(doc: &ResumeDocument, _: &()) -> Verdict {
    met_if(doc.projects.iter().any(|p| !p.name.is_empty()))
}

fn has_phone(doc: &ResumeDocument, _: &()) -> Verdict {
    present(&doc.personal_info.phone)
}

fn has_linkedin(doc: &ResumeDocument, _: &()) -> Verdict {
    present(&doc.personal_info.linkedin)
}

fn has_github(doc: &ResumeDocument, _: &()) -> Verdict {
    present(&doc.personal_info.github)
}

/// An empty summary is already covered by the length rule.
fn summary_has_action_verb(doc: &ResumeDocument, _: &()) -> Verdict {
    if doc.summary.is_empty() {
        return Verdict::Skipped;
    }
    let summary = doc.summary.to_lowercase();
    met_if(ACTION_VERBS.iter().any(|verb| summary.contains(verb)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeSkills,
    };
    use crate::scoring::{max_points, MAX_SCORE, MAX_SUGGESTIONS};
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn complete_resume() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+91 98450 00000".to_string(),
                location: "Pune".to_string(),
                github: "github.com/asha".to_string(),
                linkedin: "linkedin.com/in/asha".to_string(),
            },
            summary: "Backend engineer who built payment pipelines and led a team of four across two releases."
                .to_string(),
            education: vec![EducationEntry {
                school: "COEP".to_string(),
                degree: "B.Tech".to_string(),
                date: "2016 - 2020".to_string(),
            }],
            experience: vec![ExperienceEntry {
                company: "Ledgerly".to_string(),
                role: "Engineer".to_string(),
                date: "2020 - Present".to_string(),
                description: "- Cut settlement latency by 40%\n- Owned on-call rotation".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "Tally".to_string(),
                ..Default::default()
            }],
            skills: ResumeSkills {
                technical: strings(&["Rust", "Go", "SQL"]),
                soft: strings(&["Mentoring"]),
                tools: strings(&["Docker"]),
            },
        }
    }

    fn identity_only() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_rule_points_sum_to_max_score() {
        assert_eq!(max_points(RESUME_RULES), MAX_SCORE);
    }

    #[test]
    fn test_complete_resume_scores_hundred_without_suggestions() {
        let scored = score_rubric(&complete_resume());
        assert_eq!(scored.base_score, 100);
        assert!(scored.suggestions.is_empty());
    }

    #[test]
    fn test_name_and_email_only_surface_next_four_rules() {
        let scored = score_rubric(&identity_only());
        assert_eq!(scored.base_score, 20);
        assert_eq!(scored.suggestions.len(), 4);
        assert_eq!(
            scored.suggestions,
            vec![
                RESUME_RULES[2].suggestion,
                RESUME_RULES[3].suggestion,
                RESUME_RULES[4].suggestion,
                RESUME_RULES[5].suggestion,
            ]
        );
        assert!(!scored.suggestions[0].contains("name"));
        assert!(!scored.suggestions[0].contains("email"));
    }

    #[test]
    fn test_blank_resume_scores_zero_and_leads_with_identity() {
        let scored = score_rubric(&ResumeDocument::default());
        assert_eq!(scored.base_score, 0);
        assert_eq!(scored.suggestions[0], "Add your full name (+10 points)");
        assert_eq!(scored.suggestions[1], "Provide an email address (+10 points)");
        assert_eq!(scored.suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_experience_without_bullets_gets_partial_credit() {
        let mut doc = complete_resume();
        doc.experience[0].description = "Owned the settlement service end to end".to_string();
        let scored = score_rubric(&doc);
        assert_eq!(scored.base_score, 95);
        assert_eq!(scored.suggestions, vec![USE_BULLETS.to_string()]);
    }

    #[test]
    fn test_bullet_glyph_and_newline_count_as_bullets() {
        for description in ["• Shipped v2", "Shipped v2\nRan migrations"] {
            let mut doc = complete_resume();
            doc.experience[0].description = description.to_string();
            assert_eq!(score_rubric(&doc).base_score, 100, "{description:?}");
        }
    }

    #[test]
    fn test_experience_without_company_counts_as_missing() {
        let mut doc = complete_resume();
        doc.experience[0].company.clear();
        let scored = score_rubric(&doc);
        assert_eq!(scored.base_score, 85);
        assert_eq!(
            scored.suggestions,
            vec!["Add at least one experience entry (+15 points)".to_string()]
        );
    }

    #[test]
    fn test_bullets_on_companyless_entry_are_ignored() {
        let mut doc = complete_resume();
        doc.experience = vec![
            ExperienceEntry {
                company: "Ledgerly".to_string(),
                description: "Plain paragraph".to_string(),
                ..Default::default()
            },
            ExperienceEntry {
                company: String::new(),
                description: "- bullet".to_string(),
                ..Default::default()
            },
        ];
        assert_eq!(score_rubric(&doc).base_score, 95);
    }

    #[test]
    fn test_summary_must_exceed_fifty_chars() {
        let mut doc = complete_resume();
        doc.summary = "Built things. ".repeat(4)[..50].to_string();
        assert_eq!(doc.summary.chars().count(), 50);
        let scored = score_rubric(&doc);
        assert_eq!(scored.base_score, 90);
        assert_eq!(
            scored.suggestions,
            vec!["Write a summary of at least 50 characters (+10 points)".to_string()]
        );
    }

    #[test]
    fn test_summary_length_counts_utf16_units() {
        let mut doc = complete_resume();
        // 24 emoji are 48 UTF-16 units; with "built" the summary reaches 53.
        doc.summary = format!("built{}", "🚀".repeat(24));
        assert_eq!(doc.summary.chars().count(), 29);
        assert_eq!(score_rubric(&doc).base_score, 100);

        doc.summary = format!("built{}", "é".repeat(45));
        assert_eq!(score_rubric(&doc).base_score, 90);
    }

    #[test]
    fn test_summary_without_action_verb_suggests_verbs() {
        let mut doc = complete_resume();
        doc.summary = "Engineer focused on payments, reliability and calm on-call weeks.".to_string();
        let scored = score_rubric(&doc);
        assert_eq!(scored.base_score, 90);
        assert_eq!(scored.suggestions.len(), 1);
        assert!(scored.suggestions[0].contains("action verbs"));
    }

    #[test]
    fn test_empty_summary_skips_action_verb_rule() {
        let mut doc = complete_resume();
        doc.summary.clear();
        let scored = score_rubric(&doc);
        assert_eq!(scored.base_score, 80);
        assert_eq!(
            scored.suggestions,
            vec!["Write a summary of at least 50 characters (+10 points)".to_string()]
        );
    }

    #[test]
    fn test_action_verbs_match_case_insensitively() {
        let mut doc = complete_resume();
        doc.summary = "OPTIMIZED query planners for a decade of analytics workloads".to_string();
        assert_eq!(score_rubric(&doc).base_score, 100);
    }

    #[test]
    fn test_skill_threshold_counts_all_categories() {
        let mut doc = complete_resume();
        doc.skills = ResumeSkills {
            technical: strings(&["Rust", "Go"]),
            soft: strings(&["Mentoring"]),
            tools: strings(&["Git"]),
        };
        assert_eq!(score_rubric(&doc).base_score, 90);
        doc.skills.tools.push("Docker".to_string());
        assert_eq!(score_rubric(&doc).base_score, 100);
    }

    #[test]
    fn test_satisfied_rules_exclude_partial_credit() {
        let mut doc = complete_resume();
        doc.experience[0].description = "Plain paragraph".to_string();
        let result = RubricScorer.evaluate(&doc);
        assert!(!result.satisfied_rules.contains("experience"));
        assert!(result.satisfied_rules.contains("full_name"));
        assert_eq!(result.satisfied_rules.len(), RESUME_RULES.len() - 1);
    }

    fn arb_resume() -> impl Strategy<Value = ResumeDocument> {
        (
            any::<bool>(),
            any::<bool>(),
            "[a-z •\\-\n]{0,80}",
            prop::collection::vec(("[A-Za-z]{0,6}", "[a-z \\-\n]{0,20}"), 0..3),
            prop::collection::vec("[A-Za-z]{1,6}", 0..8),
        )
            .prop_map(|(name, email, summary, experience, skills)| ResumeDocument {
                personal_info: PersonalInfo {
                    full_name: if name { "N".to_string() } else { String::new() },
                    email: if email { "e@x".to_string() } else { String::new() },
                    ..Default::default()
                },
                summary,
                experience: experience
                    .into_iter()
                    .map(|(company, description)| ExperienceEntry {
                        company,
                        description,
                        ..Default::default()
                    })
                    .collect(),
                skills: ResumeSkills {
                    technical: skills,
                    ..Default::default()
                },
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn rubric_score_is_bounded(doc in arb_resume()) {
            let scored = score_rubric(&doc);
            prop_assert!(scored.base_score <= 100);
            prop_assert!(scored.suggestions.len() <= MAX_SUGGESTIONS);
        }

        #[test]
        fn rubric_is_deterministic(doc in arb_resume()) {
            prop_assert_eq!(score_rubric(&doc), score_rubric(&doc));
        }
    }
}
