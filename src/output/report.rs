//! Analysis report data model

use serde::{Deserialize, Serialize};

/// Result of the feedback step, handled explicitly by the display layer
/// instead of propagating errors past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail")]
pub enum FeedbackOutcome {
    /// Suggestions returned by the completion service.
    Suggestions(String),
    /// No API key file present; feedback path disabled.
    NotConfigured,
    /// Feedback explicitly skipped by the user.
    Skipped,
    /// The service call failed; carries a user-visible description.
    Failed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub resume_source: String,
    pub job_source: String,
    pub resume_chars: usize,
    pub job_chars: usize,
    /// Raw cosine similarity in [-1, 1].
    pub similarity_score: f32,
    /// Similarity scaled to a percentage, rounded to two decimals.
    pub match_percent: f32,
    pub matched_skills: Vec<String>,
    pub feedback: FeedbackOutcome,
    pub embedding_model: String,
    pub processing_time_ms: u64,
}

/// Scale a cosine similarity to a display percentage rounded to two decimals.
pub fn match_percent(similarity: f32) -> f32 {
    (similarity * 10_000.0).round() / 100.0
}
