//! Integration tests for the resume parser

use resume_parser::config::InputConfig;
use resume_parser::input::InputManager;
use resume_parser::{parse_resume, ResumeParserError};
use std::path::Path;

#[tokio::test]
async fn test_parse_text_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .load_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let parsed = parse_resume(&text);

    assert_eq!(parsed.name.as_deref(), Some("John Doe"));
    assert_eq!(parsed.email.as_deref(), Some("john.doe@example.com"));
    assert_eq!(parsed.phone.as_deref(), Some("+1 415 555 0199"));

    assert_eq!(
        parsed.skills.technical,
        vec![
            "javascript", "typescript", "python", "java", "react", "node", "django", "sql",
            "postgresql", "aws", "docker", "kubernetes",
        ]
    );
    assert_eq!(parsed.skills.soft, vec!["communication", "teamwork"]);

    assert_eq!(parsed.experience.len(), 2);
    assert_eq!(parsed.experience[0].dates, vec!["January 2020"]);
    assert!(parsed.experience[0]
        .description
        .starts_with("Senior Software Engineer, Acme Corp January 2020 - Present - Led"));
    assert_eq!(parsed.experience[1].dates, vec!["Jun 2016", "Dec 2019"]);

    assert_eq!(
        parsed.achievements,
        vec![
            "Engineering Excellence Award, Acme Corp 2021",
            "the 2022 internal hackathon with a PostgreSQL query advisor",
            "the migration of 40 services to Kubernetes on AWS",
            "a React and Node.js design system used by six teams",
            "CI pipelines with Docker for every backend service",
        ]
    );

    assert!(parsed.raw_text.ends_with("..."));
    assert_eq!(parsed.raw_text.chars().count(), 503);
}

#[tokio::test]
async fn test_parse_markdown_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .load_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(!text.contains("**"));
    assert!(!text.contains("##"));

    let parsed = parse_resume(&text);
    assert_eq!(parsed.name.as_deref(), Some("John Doe"));
    assert_eq!(parsed.experience.len(), 1);
    assert_eq!(parsed.experience[0].dates, vec!["January 2020"]);
    assert_eq!(
        parsed.achievements,
        vec![
            "the migration of 40 services to Kubernetes on AWS",
            "a React and Node.js design system used by six teams",
        ]
    );
    assert!(parsed.skills.soft.contains(&"leadership".to_string()));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.load_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.load_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .load_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.load_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(ResumeParserError::UnsupportedType(_))));
}

#[tokio::test]
async fn test_extension_outside_allowed_list() {
    let config = InputConfig {
        allowed_extensions: vec!["pdf".to_string()],
        enable_cache: false,
    };
    let mut manager = InputManager::from_config(&config);
    let result = manager.load_text(Path::new("tests/fixtures/sample_resume.txt")).await;
    assert!(matches!(result, Err(ResumeParserError::UnsupportedType(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.load_text(Path::new("tests/fixtures/nonexistent.pdf")).await;
    assert!(matches!(result, Err(ResumeParserError::MissingFile(_))));
}

#[tokio::test]
async fn test_corrupt_pdf_is_decode_error() {
    let mut manager = InputManager::new();
    let result = manager.load_text(Path::new("tests/fixtures/not_really.pdf")).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ResumeParserError::Decode(_)));
    assert!(err.is_input_error());
    assert_eq!(manager.cache_size(), 0);
}
