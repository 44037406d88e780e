//! Sequential analysis pipeline: normalize, score, match, request feedback

use crate::error::Result;
use crate::feedback::FeedbackClient;
use crate::output::report::{match_percent, AnalysisReport, FeedbackOutcome};
use crate::processing::embeddings::EmbeddingEngine;
use crate::processing::normalizer::normalize;
use crate::processing::skills::SkillMatcher;
use log::{debug, warn};
use std::time::Instant;

/// How the feedback step should run for one analysis.
pub enum FeedbackStep<'a> {
    /// Call the completion service with this client.
    Request(&'a FeedbackClient),
    /// No credential available; record that feedback is not configured.
    NotConfigured,
    /// User opted out of feedback.
    Skipped,
}

pub struct AnalysisEngine {
    embeddings: &'static EmbeddingEngine,
    skills: SkillMatcher,
}

impl AnalysisEngine {
    pub fn new(model_id: &str) -> Result<Self> {
        Ok(Self {
            embeddings: EmbeddingEngine::global(model_id)?,
            skills: SkillMatcher::new()?,
        })
    }

    /// Run the full pipeline over the raw resume and job-description text.
    ///
    /// Each step strictly waits for the previous one: normalization, then
    /// similarity scoring and skill matching over the normalized texts, then
    /// the feedback request over the raw texts. A feedback failure is
    /// converted into a `FeedbackOutcome::Failed` and never aborts the rest
    /// of the report.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_text: &str,
        resume_source: &str,
        job_source: &str,
        feedback: FeedbackStep<'_>,
    ) -> Result<AnalysisReport> {
        let start_time = Instant::now();

        let clean_resume = normalize(resume_text);
        let clean_job = normalize(job_text);
        debug!(
            "Normalized lengths: resume {} chars, job {} chars",
            clean_resume.len(),
            clean_job.len()
        );

        let similarity_score = self.embeddings.similarity(&clean_resume, &clean_job)?;
        let matched_skills = self.skills.matched(&clean_resume, &clean_job);

        let feedback_outcome = match feedback {
            FeedbackStep::Request(client) => {
                match client.generate_feedback(resume_text, job_text).await {
                    Ok(suggestions) => FeedbackOutcome::Suggestions(suggestions),
                    Err(e) => {
                        warn!("Feedback generation failed: {}", e);
                        FeedbackOutcome::Failed(e.to_string())
                    }
                }
            }
            FeedbackStep::NotConfigured => FeedbackOutcome::NotConfigured,
            FeedbackStep::Skipped => FeedbackOutcome::Skipped,
        };

        Ok(AnalysisReport {
            resume_source: resume_source.to_string(),
            job_source: job_source.to_string(),
            resume_chars: resume_text.chars().count(),
            job_chars: job_text.chars().count(),
            similarity_score,
            match_percent: match_percent(similarity_score),
            matched_skills,
            feedback: feedback_outcome,
            embedding_model: self.embeddings.model_id().to_string(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
