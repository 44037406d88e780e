//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, FeedbackOutcome};
use colored::Colorize;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colored output
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "green" => text.green().bold().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.paint("Resume Analysis", "cyan"));
        out.push('\n');
        out.push_str(&format!("Resume: {}\n", report.resume_source));
        out.push_str(&format!("Job Description: {}\n\n", report.job_source));

        out.push_str(&self.paint(
            &format!("Match Score: {:.2}%", report.match_percent),
            "green",
        ));
        out.push('\n');

        out.push_str("\nMatched Skills:\n");
        if report.matched_skills.is_empty() {
            out.push_str("  No matched skills found.\n");
        } else {
            for skill in &report.matched_skills {
                out.push_str(&format!("  - {}\n", skill));
            }
        }

        out.push_str("\nSuggestions to Improve Resume:\n");
        match &report.feedback {
            FeedbackOutcome::Suggestions(text) => {
                out.push_str(text);
                out.push('\n');
            }
            FeedbackOutcome::NotConfigured => {
                out.push_str(&self.paint(
                    "  Feedback not configured: no API key file found.",
                    "yellow",
                ));
                out.push('\n');
            }
            FeedbackOutcome::Skipped => {
                out.push_str("  Feedback skipped.\n");
            }
            FeedbackOutcome::Failed(reason) => {
                out.push_str(&self.paint(
                    &format!("  Error generating feedback: {}", reason),
                    "red",
                ));
                out.push('\n');
            }
        }

        out.push_str(&format!(
            "\nModel: {} | Processing time: {}ms\n",
            report.embedding_model, report.processing_time_ms
        ));

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Analysis\n\n");
        out.push_str(&format!("- **Resume**: {}\n", report.resume_source));
        out.push_str(&format!("- **Job Description**: {}\n", report.job_source));
        out.push_str(&format!(
            "- **Embedding Model**: {}\n\n",
            report.embedding_model
        ));

        out.push_str(&format!("## Match Score: {:.2}%\n\n", report.match_percent));

        out.push_str("## Matched Skills\n\n");
        if report.matched_skills.is_empty() {
            out.push_str("No matched skills found.\n\n");
        } else {
            for skill in &report.matched_skills {
                out.push_str(&format!("- {}\n", skill));
            }
            out.push('\n');
        }

        out.push_str("## Suggestions\n\n");
        match &report.feedback {
            FeedbackOutcome::Suggestions(text) => {
                out.push_str(text);
                out.push('\n');
            }
            FeedbackOutcome::NotConfigured => {
                out.push_str("_Feedback not configured: no API key file found._\n");
            }
            FeedbackOutcome::Skipped => {
                out.push_str("_Feedback skipped._\n");
            }
            FeedbackOutcome::Failed(reason) => {
                out.push_str(&format!("_Error generating feedback: {}_\n", reason));
            }
        }

        Ok(out)
    }
}

/// Format a report with the formatter matching the requested output format.
pub fn format_report(
    report: &AnalysisReport,
    format: &OutputFormat,
    use_colors: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter::new(use_colors).format_report(report),
        OutputFormat::Json => JsonFormatter::new(true).format_report(report),
        OutputFormat::Markdown => MarkdownFormatter.format_report(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(feedback: FeedbackOutcome) -> AnalysisReport {
        AnalysisReport {
            resume_source: "resume.pdf".to_string(),
            job_source: "job.txt".to_string(),
            resume_chars: 1500,
            job_chars: 300,
            similarity_score: 0.7342,
            match_percent: 73.42,
            matched_skills: vec!["aws".to_string(), "python".to_string()],
            feedback,
            embedding_model: "minishlab/potion-base-8M".to_string(),
            processing_time_ms: 120,
        }
    }

    #[test]
    fn test_console_format_plain() {
        let report = sample_report(FeedbackOutcome::Suggestions("Add metrics.".to_string()));
        let out = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(out.contains("Match Score: 73.42%"));
        assert!(out.contains("- aws"));
        assert!(out.contains("- python"));
        assert!(out.contains("Add metrics."));
    }

    #[test]
    fn test_plain_console_output_has_no_ansi_escapes() {
        // The save path renders with colors off; the output must stay free
        // of escape codes even when color is forced on globally.
        colored::control::set_override(true);
        let report = sample_report(FeedbackOutcome::Failed("timeout".to_string()));
        let out = ConsoleFormatter::new(false).format_report(&report).unwrap();
        colored::control::unset_override();

        assert!(!out.contains('\u{1b}'));
        assert!(out.contains("Match Score: 73.42%"));
    }

    #[test]
    fn test_console_format_no_skills() {
        let mut report = sample_report(FeedbackOutcome::Skipped);
        report.matched_skills.clear();
        let out = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(out.contains("No matched skills found."));
    }

    #[test]
    fn test_console_format_not_configured() {
        let report = sample_report(FeedbackOutcome::NotConfigured);
        let out = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(out.contains("Feedback not configured"));
        // Score and skills still render when feedback is unavailable
        assert!(out.contains("Match Score: 73.42%"));
    }

    #[test]
    fn test_console_format_failed() {
        let report = sample_report(FeedbackOutcome::Failed("connection refused".to_string()));
        let out = ConsoleFormatter::new(false).format_report(&report).unwrap();

        assert!(out.contains("Error generating feedback: connection refused"));
    }

    #[test]
    fn test_json_format() {
        let report = sample_report(FeedbackOutcome::NotConfigured);
        let out = JsonFormatter::new(false).format_report(&report).unwrap();

        let parsed: AnalysisReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.match_percent, 73.42);
    }

    #[test]
    fn test_markdown_format() {
        let report = sample_report(FeedbackOutcome::Suggestions("Tailor the summary.".to_string()));
        let out = MarkdownFormatter.format_report(&report).unwrap();

        assert!(out.starts_with("# Resume Analysis"));
        assert!(out.contains("## Match Score: 73.42%"));
        assert!(out.contains("Tailor the summary."));
    }
}
