use serde::{Deserialize, Serialize};

use super::has_skill;
use crate::models::SkillInventory;

const ENTERPRISES: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Meta",
    "Netflix",
    "Apple",
    "TCS",
    "Infosys",
    "Wipro",
    "Accenture",
    "IBM",
    "Oracle",
    "Salesforce",
    "Adobe",
    "Uber",
    "Intel",
    "Cisco",
    "Deloitte",
    "PwC",
    "KPMG",
    "EY",
];

const MID_SIZE: &[&str] = &[
    "Zoho",
    "Freshworks",
    "Zerodha",
    "Razorpay",
    "Swiggy",
    "Zomato",
    "Cred",
    "Meesho",
    "Flipkart",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Startup,
    #[serde(rename = "Mid-size")]
    MidSize,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub name: String,
    pub industry: String,
    pub size: CompanySize,
    pub focus: String,
    pub description: String,
}

/// One interview round, in the order a candidate meets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub order: u32,
    pub title: String,
    pub description: String,
    pub focus: String,
    pub why_it_matters: String,
}

/// Size bucket by case-insensitive substring match against known employers.
/// Unknown names, including an empty one, are startups.
pub fn company_size(name: &str) -> CompanySize {
    let lower = name.to_lowercase();
    let listed = |names: &[&str]| names.iter().any(|n| lower.contains(&n.to_lowercase()));

    if listed(ENTERPRISES) {
        CompanySize::Enterprise
    } else if listed(MID_SIZE) {
        CompanySize::MidSize
    } else {
        CompanySize::Startup
    }
}

pub fn company_intel(name: &str) -> CompanyIntel {
    let size = company_size(name);
    let (focus, description) = match size {
        CompanySize::Enterprise => (
            "DSA & Core CS Fundamentals",
            "Large organizations value strong problem-solving skills (DSA) and a solid grasp of computer science fundamentals over specific framework knowledge.",
        ),
        CompanySize::MidSize => (
            "Scalability & System Design",
            "Mid-sized growth companies look for engineers who can build scalable systems and have practical experience with modern stacks.",
        ),
        CompanySize::Startup => (
            "Product Building & Agility",
            "Startups prioritize valid product-building skills. They need you to be hands-on with the stack and able to ship features quickly.",
        ),
    };

    CompanyIntel {
        name: name.to_string(),
        industry: "Technology".to_string(),
        size,
        focus: focus.to_string(),
        description: description.to_string(),
    }
}

/// Four rounds: a screen, a technical deep dive, a design or pairing round
/// chosen by company size, then a managerial round. A JD that names DSA
/// gets an online coding assessment as the screen regardless of size.
pub fn round_flow(size: CompanySize, skills: &SkillInventory) -> Vec<RoundInfo> {
    let asks_dsa = ["DSA", "Data Structures", "Algorithms"]
        .iter()
        .any(|s| has_skill(skills, s));
    let enterprise = size == CompanySize::Enterprise;

    let screen = if enterprise || asks_dsa {
        (
            "Online Coding Assessment",
            "Timed algorithmic challenges on platform like HackerRank/CodeSignal.",
            "Arrays, Strings, HashMaps, Aptitude",
            "Filters candidates based on raw problem-solving speed and accuracy.",
        )
    } else {
        (
            "Practical Screening",
            "Take-home assignment or basic coding checks.",
            "Basic API creation, simple UI implementation",
            "Verifies you can actually write code and follow instructions.",
        )
    };

    let technical = if enterprise {
        (
            "Technical Round 1 (DSA)",
            "Deep dive into data structures and optimization.",
            "Trees, Graphs, DP, Time Complexity",
            "Tests your ability to write efficient, scalable code.",
        )
    } else {
        (
            "Technical Deep Dive",
            "Discussion on your stack proficiency and past projects.",
            "Framework internals (e.g., React hooks, Node event loop)",
            "Proves you understand the tools you use daily.",
        )
    };

    let design = match size {
        CompanySize::Enterprise => (
            "Technical Round 2 (Design/CS)",
            "System design basics (LLD) or OS/DBMS concepts.",
            "Class design, Database normalization, Schema",
            "Ensures you can design maintainable software, not just scripts.",
        ),
        CompanySize::MidSize => (
            "System Design / Architecture",
            "Designing a scalable feature or service.",
            "Load balancing, Caching, API Design",
            "Assess if you can build systems that grow with the user base.",
        ),
        CompanySize::Startup => (
            "Machine Coding / Pairing",
            "Live coding a feature with the interviewer.",
            "Debuggability, Code quality, Communication",
            "Simulates what it's like to work with you on a real task.",
        ),
    };

    let managerial = (
        "Managerial / Culture Fit",
        "Behavioral questions and team alignment.",
        "Ownership, conflicts, motivation",
        "Determines if you add value to the team culture.",
    );

    [screen, technical, design, managerial]
        .into_iter()
        .zip(1..)
        .map(|((title, description, focus, why), order)| RoundInfo {
            order,
            title: title.to_string(),
            description: description.to_string(),
            focus: focus.to_string(),
            why_it_matters: why.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillCategory;

    fn skills(category: SkillCategory, names: &[&str]) -> SkillInventory {
        let mut inventory = SkillInventory::new();
        inventory.insert(category, names.iter().map(|s| s.to_string()).collect());
        inventory
    }

    fn titles(rounds: &[RoundInfo]) -> Vec<&str> {
        rounds.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_company_size_buckets() {
        assert_eq!(company_size("Google India"), CompanySize::Enterprise);
        assert_eq!(company_size("infosys"), CompanySize::Enterprise);
        assert_eq!(company_size("Razorpay"), CompanySize::MidSize);
        assert_eq!(company_size("Tiny Labs"), CompanySize::Startup);
        assert_eq!(company_size(""), CompanySize::Startup);
    }

    #[test]
    fn test_short_enterprise_names_match_as_substrings() {
        // "EY" is listed, so any name containing "ey" is treated as enterprise.
        assert_eq!(company_size("Journey Foods"), CompanySize::Enterprise);
    }

    #[test]
    fn test_intel_text_follows_size() {
        let intel = company_intel("Swiggy");
        assert_eq!(intel.size, CompanySize::MidSize);
        assert_eq!(intel.focus, "Scalability & System Design");
        assert_eq!(intel.industry, "Technology");
        assert_eq!(intel.name, "Swiggy");
    }

    #[test]
    fn test_enterprise_round_flow() {
        let rounds = round_flow(CompanySize::Enterprise, &SkillInventory::new());
        assert_eq!(
            titles(&rounds),
            vec![
                "Online Coding Assessment",
                "Technical Round 1 (DSA)",
                "Technical Round 2 (Design/CS)",
                "Managerial / Culture Fit",
            ]
        );
        let orders: Vec<u32> = rounds.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_startup_without_dsa_gets_practical_screen() {
        let rounds = round_flow(CompanySize::Startup, &skills(SkillCategory::Web, &["React"]));
        assert_eq!(rounds[0].title, "Practical Screening");
        assert_eq!(rounds[2].title, "Machine Coding / Pairing");
    }

    #[test]
    fn test_dsa_in_jd_forces_coding_assessment() {
        let rounds = round_flow(CompanySize::MidSize, &skills(SkillCategory::CoreCs, &["Algorithms"]));
        assert_eq!(rounds[0].title, "Online Coding Assessment");
        assert_eq!(rounds[1].title, "Technical Deep Dive");
        assert_eq!(rounds[2].title, "System Design / Architecture");
    }

    #[test]
    fn test_size_serializes_like_stored_history() {
        assert_eq!(serde_json::to_string(&CompanySize::MidSize).unwrap(), "\"Mid-size\"");
        let round = &round_flow(CompanySize::Startup, &SkillInventory::new())[3];
        let value = serde_json::to_value(round).unwrap();
        assert_eq!(value["whyItMatters"], "Determines if you add value to the team culture.");
    }
}
