//! Integration tests for the resume analyzer

use resume_analyzer::input::manager::InputManager;
use resume_analyzer::output::report::match_percent;
use resume_analyzer::processing::embeddings::cosine_similarity;
use resume_analyzer::processing::normalizer::normalize;
use resume_analyzer::processing::skills::SkillMatcher;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("Docker"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let file = tempfile::Builder::new()
        .suffix(".xyz")
        .tempfile()
        .unwrap();

    let result = manager.extract_text(file.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_extraction_through_skill_matching() {
    // Extract both fixtures and run the normalize + match steps end to end.
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let clean_resume = normalize(&resume_text);
    let clean_job = normalize(&job_text);

    let matcher = SkillMatcher::new().unwrap();
    let matched = matcher.matched(&clean_resume, &clean_job);

    assert_eq!(
        matched,
        vec![
            "aws".to_string(),
            "docker".to_string(),
            "machine learning".to_string(),
            "python".to_string(),
            "sql".to_string(),
        ]
    );
}

#[test]
fn test_identical_text_scores_full_match() {
    // Identical embeddings must score 1.0 within floating-point tolerance,
    // which the display layer rounds to 100.00%.
    let embedding = vec![0.12, -0.5, 0.33, 0.81, -0.02];
    let score = cosine_similarity(&embedding, &embedding).unwrap();

    assert!((score - 1.0).abs() < 1e-6);
    assert_eq!(match_percent(score), 100.0);
}
