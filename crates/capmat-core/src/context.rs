//! Run Context: per-run identity and output settings shared by all stages.
use chrono::{DateTime, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunContext {
    /// Correlates every log line of one run.
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub out_dir: PathBuf,
    /// Discard per-release cache files and regenerate unconditionally.
    pub force_refresh: bool,
}

impl RunContext {
    pub fn new(out_dir: PathBuf, force_refresh: bool) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            out_dir,
            force_refresh,
        }
    }
}
