use serde::{Deserialize, Serialize};

use super::{has_skill, strings};
use crate::models::{SkillCategory, SkillInventory};

/// Questions kept per analysis.
pub const MAX_QUESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: u32,
    pub focus: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round: String,
    pub items: Vec<String>,
}

const BASE_PLAN: &[(&str, &[&str])] = &[
    (
        "Foundations & Core CS",
        &[
            "Review OOP concepts",
            "Revise OS scheduling & memory management",
            "Network protocols (HTTP, TCP/IP)",
        ],
    ),
    (
        "Language Mastery",
        &[
            "Deep dive into primary language syntax",
            "Standard Library / Collections framework",
            "Memory management in your language",
        ],
    ),
    (
        "Data Structures & Algorithms",
        &[
            "Arrays, Linked Lists, Stacks, Queues",
            "Practice 3 Easy + 2 Medium problems",
            "Time Complexity Analysis",
        ],
    ),
    (
        "Advanced DSA",
        &[
            "Trees, Graphs, DP",
            "Practice 2 Medium + 1 Hard problem",
            "System Design basics",
        ],
    ),
    (
        "Project & Tech Stack",
        &["Review your resume projects", "Prepare 'Challenges Faced' stories"],
    ),
    (
        "Mock Interviews",
        &[
            "Peer mock interview",
            "Behavioral questions (STAR method)",
            "Whiteboard practice",
        ],
    ),
    (
        "Final Revision",
        &[
            "Review weak areas",
            "Formula sheets",
            "Cheatsheets",
            "Rest & Mindset",
        ],
    ),
];

const LANGUAGE_DAY: usize = 1;
const PROJECT_DAY: usize = 4;

/// Seven-day plan. Web, Data and Cloud/DevOps skills add stack-specific work
/// to the language and project days.
pub fn prep_plan(skills: &SkillInventory) -> Vec<PlanDay> {
    let mut plan: Vec<PlanDay> = BASE_PLAN
        .iter()
        .zip(1..)
        .map(|((focus, activities), day)| PlanDay {
            day,
            focus: focus.to_string(),
            activities: strings(activities),
        })
        .collect();

    let has = |category: SkillCategory| skills.get(&category).is_some_and(|list| !list.is_empty());

    if has(SkillCategory::Web) {
        let day = &mut plan[PROJECT_DAY];
        day.activities
            .push("Revise React/Node.js lifecycle & patterns".to_string());
        day.focus.push_str(" (Web)");
    }
    if has(SkillCategory::Data) {
        plan[LANGUAGE_DAY]
            .activities
            .push("SQL Queries & Normalization".to_string());
    }
    if has(SkillCategory::CloudDevOps) {
        plan[PROJECT_DAY]
            .activities
            .push("Docker & CI/CD basics".to_string());
    }

    plan
}

/// Per-round checklist; a few detected skills add topics to rounds 2 and 3.
pub fn checklist(skills: &SkillInventory) -> Vec<ChecklistRound> {
    let round1 = strings(&[
        "Quantitative Aptitude (Time & Work, Speed)",
        "Logical Reasoning",
        "Verbal Ability",
        "Basic Debugging",
    ]);
    let mut round2 = strings(&[
        "Array/String Manipulation",
        "HashMaps & Sets",
        "Object Oriented Design Patterns",
        "Basic SQL Queries",
    ]);
    let mut round3 = strings(&[
        "Project Architecture Deep Dive",
        "API Design",
        "Database Schema Design",
    ]);
    let round4 = strings(&[
        "Why this company?",
        "Strengths & Weaknesses",
        "Situation handling (Conflict)",
        "Salary expectations",
    ]);

    if has_skill(skills, "React") {
        round3.push("React Component Lifecycle & Hooks".to_string());
    }
    if has_skill(skills, "Node.js") {
        round3.push("Event Loop & Async/Await".to_string());
    }
    if has_skill(skills, "SQL") {
        round2.push("Joins, Indexing, Transactions".to_string());
    }
    if has_skill(skills, "AWS") {
        round3.push("Cloud Deployment & Scalability".to_string());
    }

    [
        ("Round 1: Aptitude / Basics", round1),
        ("Round 2: DSA + Core CS", round2),
        ("Round 3: Tech Interview", round3),
        ("Round 4: Managerial / HR", round4),
    ]
    .into_iter()
    .map(|(round, items)| ChecklistRound {
        round: round.to_string(),
        items,
    })
    .collect()
}

const OPENING_QUESTIONS: &[&str] = &[
    "Tell me about yourself.",
    "Explain one challenging project you worked on.",
    "What are ACID properties in databases?",
    "Explain the difference between Process and Thread.",
];

const SKILL_QUESTIONS: &[(&str, [&str; 2])] = &[
    (
        "React",
        [
            "Explain Virtual DOM and how it works.",
            "What is the difference between useMemo and useCallback?",
        ],
    ),
    (
        "Node.js",
        [
            "How does Node.js handle concurrency?",
            "Explain Middleware in Express.",
        ],
    ),
    (
        "Java",
        [
            "Explain the difference between Interface and Abstract Class.",
            "How does Garbage Collection work in Java?",
        ],
    ),
    (
        "Python",
        [
            "Explain Python decorators.",
            "What is the GIL (Global Interpreter Lock)?",
        ],
    ),
    (
        "SQL",
        [
            "Explain Indexing and when to use it.",
            "What is the difference between INNER and OUTER JOIN?",
        ],
    ),
    (
        "DSA",
        [
            "How would you optimize search in a sorted dataset?",
            "Detect a cycle in a linked list.",
        ],
    ),
];

const GENERIC_QUESTIONS: &[&str] = &[
    "Explain the CAP theorem.",
    "What happens when you type a URL in the browser?",
    "Explain Polymorphism with a real-world example.",
    "How do you handle API security?",
    "Explain SOLID principles.",
    "What is Dependency Injection?",
];

/// Opening questions, then two per detected headline skill, padded from the
/// generic pool and cut to [`MAX_QUESTIONS`].
pub fn interview_questions(skills: &SkillInventory) -> Vec<String> {
    let mut questions = strings(OPENING_QUESTIONS);

    for (skill, pair) in SKILL_QUESTIONS {
        if has_skill(skills, skill) {
            questions.extend(pair.iter().map(|q| q.to_string()));
        }
    }

    for generic in GENERIC_QUESTIONS {
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
        if !questions.iter().any(|q| q == generic) {
            questions.push(generic.to_string());
        }
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}
