//! Report types and output formatting

pub mod formatter;
pub mod report;

pub use report::{AnalysisReport, FeedbackOutcome};
