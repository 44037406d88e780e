//! Resume analyzer: compare a resume against a job description

mod cli;
mod config;
mod error;
mod feedback;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{AnalyzerError, Result};
use feedback::FeedbackClient;
use input::manager::InputManager;
use log::{error, info, warn};
use processing::analyzer::{AnalysisEngine, FeedbackStep};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            embedding,
            no_feedback,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| AnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"]).map_err(|e| {
                    AnalyzerError::InvalidInput(format!("Job description file: {}", e))
                })?;
            }

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(AnalyzerError::InvalidInput)?;

            // Extract resume text
            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            // Job description comes from a file or inline text
            let (job_content, job_source) = match (&job, &job_text) {
                (Some(job_path), None) => {
                    let text = input_manager.extract_text(job_path).await?;
                    (text, job_path.display().to_string())
                }
                (None, Some(text)) => (text.clone(), "<inline>".to_string()),
                _ => {
                    return Err(AnalyzerError::InvalidInput(
                        "Provide a job description with --job or --job-text".to_string(),
                    ));
                }
            };

            if job_content.trim().is_empty() {
                return Err(AnalyzerError::InvalidInput(
                    "Job description is empty".to_string(),
                ));
            }

            info!(
                "Extracted {} resume characters, {} job description characters",
                resume_text.len(),
                job_content.len()
            );

            // Read credential; a missing key file disables feedback only
            let feedback_client = if no_feedback {
                None
            } else {
                match config.read_api_key() {
                    Some(api_key) => Some(FeedbackClient::new(&config.feedback, api_key)?),
                    None => {
                        warn!(
                            "API key file '{}' not found; feedback disabled",
                            config.feedback.api_key_file.display()
                        );
                        None
                    }
                }
            };

            let feedback_step = match (&feedback_client, no_feedback) {
                (Some(client), _) => FeedbackStep::Request(client),
                (None, true) => FeedbackStep::Skipped,
                (None, false) => FeedbackStep::NotConfigured,
            };

            // Load the embedding model and run the pipeline
            let model_id = embedding
                .as_deref()
                .unwrap_or(&config.embedding.model_id);
            let engine = AnalysisEngine::new(model_id)?;

            let report = engine
                .analyze(
                    &resume_text,
                    &job_content,
                    &resume.display().to_string(),
                    &job_source,
                    feedback_step,
                )
                .await?;

            let formatted =
                output::formatter::format_report(&report, &output_format, config.output.color_output)?;
            println!("{}", formatted);

            if let Some(save_path) = save {
                // Saved copy is rendered without ANSI color escapes
                let file_output =
                    output::formatter::format_report(&report, &output_format, false)?;
                save_report(&save_path, &file_output)?;
                info!("Report saved to {}", save_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Embedding Model: {}", config.embedding.model_id);
                println!("Feedback Model: {}", config.feedback.model);
                println!("Feedback API: {}", config.feedback.api_base_url);
                println!("API Key File: {}", config.feedback.api_key_file.display());
                println!("Max Tokens: {}", config.feedback.max_tokens);
                println!("Temperature: {}", config.feedback.temperature);
                println!("Request Timeout: {}s", config.feedback.timeout_secs);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn save_report(path: &PathBuf, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}
