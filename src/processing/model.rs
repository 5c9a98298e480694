//! Frozen logistic-regression model over whole-text overlap features

use crate::error::{AtsScorerError, Result};
use crate::processing::ranker::rank;
use crate::processing::tokenizer::tokenize;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Number of features the model consumes, in [`MatchFeatures::as_array`] order
pub const FEATURE_COUNT: usize = 4;

/// Top-ranked JD keywords considered by `kw_ratio`
pub const MODEL_KEYWORD_LIMIT: usize = 10;

pub const DEFAULT_MODEL_VERSION: &str = "lr-v1";

const DEFAULT_FEATURE_SET: [&str; FEATURE_COUNT] = ["overlap_ratio", "resume_coverage", "length_diff", "kw_ratio"];
const DEFAULT_WEIGHTS: [f64; FEATURE_COUNT] = [2.64137283, 2.37778977, -0.18100524, 2.10916598];
const DEFAULT_INTERCEPT: f64 = -2.288096774813138;

/// Inputs to the logistic model, each in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFeatures {
    /// Shared unique tokens over unique JD tokens
    pub overlap_ratio: f64,
    /// Shared unique tokens over unique resume tokens
    pub resume_coverage: f64,
    /// Token-count difference relative to the longer text
    pub length_diff: f64,
    /// Share of the top JD keywords that appear as resume tokens
    pub kw_ratio: f64,
}

impl MatchFeatures {
    /// Compute features from raw texts. Independent of the bucketed keyword plan.
    pub fn compute(resume: &str, jd: &str) -> Self {
        let resume_tokens = tokenize(resume);
        let jd_tokens = tokenize(jd);
        let resume_set: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();
        let jd_set: HashSet<&str> = jd_tokens.iter().map(String::as_str).collect();

        let common = resume_set.intersection(&jd_set).count() as f64;
        let longer = resume_tokens.len().max(jd_tokens.len());
        let length_gap = resume_tokens.len().abs_diff(jd_tokens.len());

        let keywords = rank(jd, MODEL_KEYWORD_LIMIT);
        let keyword_hits = keywords.iter().filter(|k| resume_set.contains(k.as_str())).count();

        Self {
            overlap_ratio: common / guard(jd_set.len()),
            resume_coverage: common / guard(resume_set.len()),
            length_diff: length_gap as f64 / guard(longer),
            kw_ratio: keyword_hits as f64 / guard(keywords.len()),
        }
    }

    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [self.overlap_ratio, self.resume_coverage, self.length_diff, self.kw_ratio]
    }
}

fn guard(denominator: usize) -> f64 {
    denominator.max(1) as f64
}

/// Versioned logistic-regression artifact.
///
/// Weights are frozen; swapping the model means shipping a new file with a new
/// `version`, never retraining at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub version: String,
    #[serde(default = "default_feature_set")]
    pub feature_set: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

fn default_feature_set() -> Vec<String> {
    DEFAULT_FEATURE_SET.iter().map(|s| s.to_string()).collect()
}

impl Default for LogisticModel {
    fn default() -> Self {
        Self {
            version: DEFAULT_MODEL_VERSION.to_string(),
            feature_set: default_feature_set(),
            weights: DEFAULT_WEIGHTS.to_vec(),
            intercept: DEFAULT_INTERCEPT,
        }
    }
}

impl LogisticModel {
    /// Load a model artifact; `.json` files are read as JSON, anything else as TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let model: Self = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| AtsScorerError::Configuration(format!("Failed to parse model {}: {}", path.display(), e)))?
        } else {
            toml::from_str(&content)?
        };

        model.validate()?;
        debug!("Loaded scoring model {} from {}", model.version, path.display());
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(AtsScorerError::Configuration(format!(
                "Model {} has {} weights, expected {}",
                self.version,
                self.weights.len(),
                FEATURE_COUNT
            )));
        }
        if self.feature_set.len() != FEATURE_COUNT {
            return Err(AtsScorerError::Configuration(format!(
                "Model {} names {} features, expected {}",
                self.version,
                self.feature_set.len(),
                FEATURE_COUNT
            )));
        }
        if self.weights.iter().chain(std::iter::once(&self.intercept)).any(|w| !w.is_finite()) {
            return Err(AtsScorerError::Configuration(format!(
                "Model {} has non-finite coefficients",
                self.version
            )));
        }
        Ok(())
    }

    /// Sigmoid of the linear combination, in `(0, 1)`
    pub fn probability(&self, features: &MatchFeatures) -> f64 {
        let z = self.intercept
            + self
                .weights
                .iter()
                .zip(features.as_array())
                .map(|(w, f)| w * f)
                .sum::<f64>();
        1.0 / (1.0 + (-z).exp())
    }

    /// Model score on the 0-100 scale, unrounded
    pub fn score(&self, features: &MatchFeatures) -> f64 {
        100.0 * self.probability(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_model() {
        let model = LogisticModel::default();
        assert_eq!(model.version, "lr-v1");
        assert_eq!(model.weights.len(), FEATURE_COUNT);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_zero_features_give_intercept_probability() {
        let model = LogisticModel::default();
        let expected = 100.0 / (1.0 + (2.288096774813138f64).exp());
        assert!((model.score(&MatchFeatures::default()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounds() {
        let model = LogisticModel::default();
        let best = MatchFeatures {
            overlap_ratio: 1.0,
            resume_coverage: 1.0,
            length_diff: 0.0,
            kw_ratio: 1.0,
        };
        let s = model.score(&best);
        assert!(s > 90.0 && s < 100.0);
    }

    #[test]
    fn test_features_for_identical_texts() {
        let text = "Rust engineer with Kafka, Postgres and Kubernetes";
        let features = MatchFeatures::compute(text, text);
        assert_eq!(features.overlap_ratio, 1.0);
        assert_eq!(features.resume_coverage, 1.0);
        assert_eq!(features.length_diff, 0.0);
        // bigrams rank too but are never single resume tokens
        assert!(features.kw_ratio > 0.0);
    }

    #[test]
    fn test_features_empty_inputs() {
        let features = MatchFeatures::compute("", "");
        assert_eq!(features, MatchFeatures::default());

        let features = MatchFeatures::compute("", "python sql");
        assert_eq!(features.overlap_ratio, 0.0);
        assert_eq!(features.length_diff, 1.0);
        assert_eq!(features.kw_ratio, 0.0);
    }

    #[test]
    fn test_features_partial_overlap() {
        let features = MatchFeatures::compute("python golang", "python sql aws docker");
        assert_eq!(features.overlap_ratio, 0.25);
        assert_eq!(features.resume_coverage, 0.5);
        assert_eq!(features.length_diff, 0.5);
    }

    #[test]
    fn test_load_toml_model() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.toml");
        let mut model = LogisticModel::default();
        model.version = "lr-v2".to_string();
        model.weights = vec![1.0, 1.0, 0.0, 1.0];
        fs::write(&path, toml::to_string(&model).unwrap()).unwrap();

        let loaded = LogisticModel::from_file(&path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_load_json_model_without_feature_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, r#"{"version":"lr-json","weights":[0.5,0.5,0.0,0.5],"intercept":-1.0}"#).unwrap();

        let loaded = LogisticModel::from_file(&path).unwrap();
        assert_eq!(loaded.version, "lr-json");
        assert_eq!(loaded.feature_set.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_wrong_feature_count_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "version = \"bad\"\nweights = [1.0, 2.0]\nintercept = 0.0\n").unwrap();

        match LogisticModel::from_file(&path) {
            Err(AtsScorerError::Configuration(msg)) => assert!(msg.contains("2 weights")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_model_file_is_io_error() {
        let result = LogisticModel::from_file(Path::new("/nonexistent/model.toml"));
        assert!(matches!(result, Err(AtsScorerError::Io(_))));
    }
}
