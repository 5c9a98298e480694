//! Blended resume/JD match score

use crate::config::Config;
use crate::error::Result;
use crate::processing::matcher::{Matcher, Partition};
use crate::processing::model::{LogisticModel, MatchFeatures};
use crate::processing::normalizer::normalize;
use crate::processing::ranker::{KeywordCategory, KeywordPlan};
use crate::processing::sections::extract_skills_block;
use crate::processing::synonyms::{MatchMethod, SynonymResolver};
use log::debug;
use serde::{Deserialize, Serialize};

pub const REQUIRED_WEIGHT: f64 = 4.0;
pub const PREFERRED_WEIGHT: f64 = 1.0;
/// Extra credit when a present required keyword is also listed under Skills
pub const REQUIRED_SKILLS_BONUS: f64 = 1.0;
pub const PREFERRED_SKILLS_BONUS: f64 = 0.5;
pub const DEFAULT_MODEL_BLEND: f64 = 0.5;

/// Per-keyword outcome, for detailed reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDetail {
    pub keyword: String,
    pub category: KeywordCategory,
    pub method: Option<MatchMethod>,
    pub in_skills_block: bool,
}

/// Everything one scoring call produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Final blended score, 0-100
    pub score: u32,
    /// Weighted keyword coverage, 0-100
    pub base_score: u32,
    /// Logistic model output, 0-100, unrounded
    pub model_score: f64,
    pub required: Vec<String>,
    pub preferred: Vec<String>,
    pub present_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub present_preferred: Vec<String>,
    pub missing_preferred: Vec<String>,
    pub features: MatchFeatures,
    pub model_version: String,
    pub details: Vec<KeywordDetail>,
}

impl ScoreBreakdown {
    pub fn required_coverage(&self) -> f64 {
        coverage(self.present_required.len(), self.required.len())
    }

    pub fn preferred_coverage(&self) -> f64 {
        coverage(self.present_preferred.len(), self.preferred.len())
    }
}

fn coverage(present: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        present as f64 / total as f64
    }
}

/// Scores a resume against a job description.
///
/// Holds only immutable settings and the model, so one engine can be shared
/// across threads and calls.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    matcher: Matcher,
    model: LogisticModel,
    model_blend: f64,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::with_model(LogisticModel::default(), SynonymResolver::default(), DEFAULT_MODEL_BLEND)
    }
}

impl ScoringEngine {
    /// Build from configuration, loading the model artifact if one is configured
    pub fn new(config: &Config) -> Result<Self> {
        let model = match &config.scoring.model_path {
            Some(path) => LogisticModel::from_file(path)?,
            None => LogisticModel::default(),
        };
        let resolver = SynonymResolver::new(config.matching.fuzzy_threshold);
        Ok(Self::with_model(model, resolver, config.scoring.model_blend))
    }

    pub fn with_model(model: LogisticModel, resolver: SynonymResolver, model_blend: f64) -> Self {
        Self {
            matcher: Matcher::new(resolver),
            model,
            model_blend: model_blend.clamp(0.0, 1.0),
        }
    }

    pub fn model(&self) -> &LogisticModel {
        &self.model
    }

    pub fn model_blend(&self) -> f64 {
        self.model_blend
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn score(&self, resume: &str, jd: &str) -> ScoreBreakdown {
        let plan = KeywordPlan::from_job(jd);
        let resume_norm = normalize(resume);
        let skills_norm = normalize(&extract_skills_block(resume));

        let required = self.matcher.partition(&plan.required, &resume_norm);
        let preferred = self.matcher.partition(&plan.preferred, &resume_norm);

        let resolver = self.matcher.resolver();
        let in_skills = |k: &String| resolver.contains(&skills_norm, k);
        let required_bonus = required.present.iter().filter(|&k| in_skills(k)).count();
        let preferred_bonus = preferred.present.iter().filter(|&k| in_skills(k)).count();

        let total = (REQUIRED_WEIGHT * plan.required.len() as f64 + PREFERRED_WEIGHT * plan.preferred.len() as f64).max(1.0);
        let earned = REQUIRED_WEIGHT * required.present.len() as f64
            + PREFERRED_WEIGHT * preferred.present.len() as f64
            + REQUIRED_SKILLS_BONUS * required_bonus as f64
            + PREFERRED_SKILLS_BONUS * preferred_bonus as f64;
        let base_score = to_percent(100.0 * earned / total);

        let features = MatchFeatures::compute(resume, jd);
        let model_score = self.model.score(&features);
        let blended = (1.0 - self.model_blend) * base_score as f64 + self.model_blend * model_score;
        let score = to_percent(blended);

        debug!(
            "Scored {} required / {} preferred keywords: base {}, model {:.1}, final {}",
            plan.required.len(),
            plan.preferred.len(),
            base_score,
            model_score,
            score
        );

        let details = keyword_details(&required, KeywordCategory::Required, &in_skills)
            .chain(keyword_details(&preferred, KeywordCategory::Preferred, &in_skills))
            .collect();

        ScoreBreakdown {
            score,
            base_score,
            model_score,
            required: plan.required,
            preferred: plan.preferred,
            present_required: required.present,
            missing_required: required.missing,
            present_preferred: preferred.present,
            missing_preferred: preferred.missing,
            features,
            model_version: self.model.version.clone(),
            details,
        }
    }
}

fn keyword_details<'a>(
    partition: &'a Partition,
    category: KeywordCategory,
    in_skills: &'a dyn Fn(&String) -> bool,
) -> impl Iterator<Item = KeywordDetail> + 'a {
    partition.matches.iter().map(move |m| KeywordDetail {
        keyword: m.keyword.clone(),
        category,
        method: m.method,
        in_skills_block: m.is_present() && in_skills(&m.keyword),
    })
}

/// Round and clamp to the 0-100 scale; NaN maps to 0
fn to_percent(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

/// Score with default settings and the built-in model
pub fn score(resume: &str, jd: &str) -> ScoreBreakdown {
    ScoringEngine::default().score(resume, jd)
}
