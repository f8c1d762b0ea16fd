// Caller-side collaborators of the scorers: the pieces of the job tracker and
// placement dashboard that load inputs, rank scored output and keep history.
// Scorers never depend on anything in here.

pub mod analyses;
pub mod digest;
pub mod filter;
pub mod history;
pub mod saved;
pub mod status;

pub use analyses::{latest_readiness_score, AnalysisHistory};
pub use digest::{build_digest, load_or_build_digest, reset_digest, DIGEST_SIZE};
pub use filter::{filter_and_sort, JobFilter, ScoredJob, SortOrder};
pub use history::{HistoryLog, HISTORY_LIMIT};
pub use saved::SavedJobs;
pub use status::{JobStatus, StatusBook, StatusUpdate};
