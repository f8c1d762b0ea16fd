//! Deterministic rubric scoring for job postings, resumes and job
//! descriptions, plus the tracker-side pieces that persist and rank results.

pub mod config;
pub mod errors;
pub mod models;
pub mod prep;
pub mod scoring;
pub mod store;
pub mod tracker;

pub use errors::StoreError;
pub use scoring::{refine_score, score_match, score_rubric, ScoreResult, Scorer};
