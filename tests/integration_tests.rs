//! Integration tests for the ATS scorer

use ats_scorer::config::{Config, OutputFormat};
use ats_scorer::error::AtsScorerError;
use ats_scorer::input::DocumentLoader;
use ats_scorer::output::formatter::ReportGenerator;
use ats_scorer::output::report::{MatchReport, ReportMetadata};
use ats_scorer::processing::normalizer::normalize;
use ats_scorer::processing::{score, weave_plan, KeywordPlan, LogisticModel, ScoringEngine};
use std::collections::HashSet;
use std::path::Path;

const RESUME_TXT: &str = "tests/fixtures/sample_resume.txt";
const RESUME_MD: &str = "tests/fixtures/sample_resume.md";
const JOB_TXT: &str = "tests/fixtures/sample_job.txt";

async fn load(path: &str) -> String {
    DocumentLoader::new().load(Path::new(path)).await.unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = load(RESUME_TXT).await;
    assert!(text.contains("Jordan Lee"));
    assert!(text.contains("PostgreSQL"));
    assert!(text.contains("**Experience**"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = load(RESUME_MD).await;
    assert!(text.contains("Jordan Lee"));
    assert!(text.contains("Kubernetes"));
    // headings flattened, strong markers kept for section detection
    assert!(!text.contains("##"));
    assert!(text.lines().any(|line| line == "Skills"));
    assert!(text.lines().any(|line| line == "**Experience**"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut loader = DocumentLoader::new();
    let path = Path::new(RESUME_TXT);

    let first = loader.load(path).await.unwrap();
    assert_eq!(loader.cache_size(), 1);

    let second = loader.load(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(loader.cache_size(), 1);

    loader.clear_cache();
    assert_eq!(loader.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(AtsScorerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_missing_file() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/does_not_exist.txt")).await;
    assert!(matches!(result, Err(AtsScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_empty_job_text_rejected() {
    let mut loader = DocumentLoader::new();
    let result = loader.load_job(None, Some("   ")).await;
    assert!(matches!(result, Err(AtsScorerError::InvalidInput(msg)) if msg == "job description is required"));

    let job = loader.load_job(Some(Path::new(JOB_TXT)), None).await.unwrap();
    assert!(job.contains("Requirements"));
}

#[tokio::test]
async fn test_score_fixture_pair() {
    let resume = load(RESUME_TXT).await;
    let job = load(JOB_TXT).await;
    let result = score(&resume, &job);

    for keyword in ["python", "aws", "docker", "kubernetes"] {
        assert!(result.required.iter().any(|k| k == keyword), "{} not required", keyword);
        assert!(result.present_required.iter().any(|k| k == keyword), "{} not present", keyword);
    }
    assert!(result.preferred.iter().any(|k| k == "terraform"));
    assert!(result.missing_preferred.iter().any(|k| k == "terraform"));
    assert!(result.present_preferred.iter().any(|k| k == "kafka"));
    assert!(result.score <= 100 && result.base_score <= 100);
    assert!(result.base_score >= 50);
}

#[tokio::test]
async fn test_txt_and_markdown_resumes_agree_on_required_keywords() {
    let job = load(JOB_TXT).await;
    let from_txt = score(&load(RESUME_TXT).await, &job);
    let from_md = score(&load(RESUME_MD).await, &job);
    assert_eq!(from_txt.required, from_md.required);
    for keyword in ["python", "sql", "aws"] {
        assert!(from_md.present_required.iter().any(|k| k == keyword));
    }
}

#[test]
fn test_scenario_requirements_and_preferred_headers() {
    let result = score(
        "Experienced Python developer with SQL and AWS.",
        "Requirements: Python, SQL, AWS\nPreferred: Docker",
    );
    let required: HashSet<&str> = result.required.iter().map(String::as_str).collect();
    assert_eq!(required, HashSet::from(["python", "sql", "aws"]));
    assert!(result.missing_required.is_empty());
    assert_eq!(result.preferred, vec!["docker"]);
    assert_eq!(result.missing_preferred, vec!["docker"]);
    assert_eq!(result.base_score, 92);
}

#[test]
fn test_scenario_headerless_prose() {
    let jd = "Our analytics group builds dashboards in Tableau and pipelines in Python and Spark. \
              Day to day you would write SQL against Snowflake and orchestrate jobs with Airflow.";
    let plan = KeywordPlan::from_job(jd);
    assert!(plan.used_global_split);
    assert!(!plan.required.is_empty());
    assert!(!plan.preferred.is_empty());
}

#[test]
fn test_scenario_empty_resume() {
    let result = score("", "Requirements: Rust, Kafka\nNice to have: Terraform");
    assert!(result.present_required.is_empty());
    assert!(result.present_preferred.is_empty());
    assert_eq!(result.base_score, 0);
    assert!(result.model_score.is_finite());
    assert!(result.score <= 100);
}

#[test]
fn test_properties_over_varied_inputs() {
    let engine = ScoringEngine::default();
    let cases = [
        ("", ""),
        ("Rust", ""),
        ("", "Rust, Go"),
        ("C++ and C# on .NET", "Must have: C++, C#, .NET\nBonus: Node.js"),
        ("K8s, Amazon Web Services, Postgres", "Qualifications: Kubernetes, AWS, PostgreSQL"),
        ("résumé — naïve café ½", "Requirements – Python—SQL\u{2212}AWS"),
    ];
    for (resume, jd) in cases {
        let a = engine.score(resume, jd);
        let b = engine.score(resume, jd);
        assert_eq!(a, b);
        assert!(a.score <= 100 && a.base_score <= 100);
        assert!((0.0..=100.0).contains(&a.model_score));

        let present: HashSet<&String> = a.present_required.iter().collect();
        let missing: HashSet<&String> = a.missing_required.iter().collect();
        assert!(present.is_disjoint(&missing));
        assert_eq!(present.len() + missing.len(), a.required.len());

        let required: HashSet<String> = a.required.iter().map(|k| k.to_lowercase()).collect();
        assert!(a.preferred.iter().all(|k| !required.contains(&k.to_lowercase())));

        assert_eq!(normalize(&normalize(resume)), normalize(resume));
        assert_eq!(normalize(&normalize(jd)), normalize(jd));
    }
}

#[test]
fn test_synonyms_count_as_present() {
    let result = score(
        "K8s, Amazon Web Services, Postgres",
        "Qualifications: Kubernetes, AWS, PostgreSQL",
    );
    assert!(result.missing_required.is_empty(), "missing {:?}", result.missing_required);
}

#[test]
fn test_weave_plan_matches_scoring_vocabulary() {
    let plan = weave_plan("Python and SQL on AWS", "Python, SQL, AWS, Terraform, Kafka, Airflow");
    assert!(plan.must_weave.iter().any(|k| k == "python"));
    assert!(plan.jd_only.iter().any(|k| k == "terraform"));
    assert!(plan.low_overlap);
}

#[test]
fn test_engine_uses_configured_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    let model = LogisticModel {
        version: "lr-test".to_string(),
        weights: vec![0.0, 0.0, 0.0, 0.0],
        intercept: 0.0,
        ..LogisticModel::default()
    };
    std::fs::write(&model_path, serde_json::to_string(&model).unwrap()).unwrap();

    let mut config = Config::default();
    config.scoring.model_path = Some(model_path);
    let engine = ScoringEngine::new(&config).unwrap();

    let result = engine.score("Python", "Requirements: Python");
    assert_eq!(result.model_version, "lr-test");
    assert_eq!(result.model_score, 50.0);
}

#[test]
fn test_engine_rejects_bad_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.toml");
    std::fs::write(&model_path, "version = \"short\"\nweights = [1.0]\nintercept = 0.0\n").unwrap();

    let mut config = Config::default();
    config.scoring.model_path = Some(model_path);
    assert!(matches!(ScoringEngine::new(&config), Err(AtsScorerError::Configuration(_))));
}

#[test]
fn test_rendered_json_report() {
    let breakdown = score("Python, SQL", "Requirements: Python, SQL, Go");
    let report = MatchReport::new(breakdown, ReportMetadata::new(Some("cv.txt".into()), "inline".into()));
    let json = ReportGenerator::with_options(false, false, false, false)
        .generate_match(&report, OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["breakdown"]["missingRequired"], serde_json::json!(["go"]));
    assert_eq!(value["metadata"]["resumeFile"], "cv.txt");
}
