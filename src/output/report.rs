//! Report structures wrapping engine results with run metadata

use crate::processing::ranker::KeywordPlan;
use crate::processing::scoring::ScoreBreakdown;
use crate::processing::weave::WeavePlan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score result plus the context it was produced in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub verdict: String,
    pub breakdown: ScoreBreakdown,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub plan: KeywordPlan,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaveReport {
    pub plan: WeavePlan,
    pub key_skills: Vec<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    /// Resume path, when a resume was involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<String>,
    /// Job description path, or `inline` for `--job-text`
    pub job_source: String,
}

impl ReportMetadata {
    pub fn new(resume_file: Option<String>, job_source: String) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file,
            job_source,
        }
    }
}

impl MatchReport {
    pub fn new(breakdown: ScoreBreakdown, metadata: ReportMetadata) -> Self {
        Self {
            verdict: verdict(&breakdown),
            breakdown,
            metadata,
        }
    }
}

impl KeywordReport {
    pub fn new(plan: KeywordPlan, metadata: ReportMetadata) -> Self {
        Self { plan, metadata }
    }
}

impl WeaveReport {
    pub fn new(plan: WeavePlan, metadata: ReportMetadata) -> Self {
        Self {
            key_skills: plan.key_skills_line(),
            plan,
            metadata,
        }
    }
}

/// One-line reading of the score
pub fn verdict(breakdown: &ScoreBreakdown) -> String {
    if breakdown.required.is_empty() && breakdown.preferred.is_empty() {
        return "No keywords could be extracted from the job description".to_string();
    }
    let missing = breakdown.missing_required.len();
    match breakdown.score {
        80..=100 if missing == 0 => "Strong match: every required keyword is covered".to_string(),
        80..=100 => format!("Strong match with {} required keyword(s) still missing", missing),
        60..=79 => format!("Good match; add {} missing required keyword(s) to improve", missing),
        40..=59 => format!("Partial match; {} required keyword(s) are missing", missing),
        _ => format!("Weak match; {} required keyword(s) are missing", missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scoring::score;

    #[test]
    fn test_verdict_for_empty_plan() {
        let breakdown = score("", "the and of");
        assert!(verdict(&breakdown).starts_with("No keywords"));
    }

    #[test]
    fn test_verdict_mentions_missing_count() {
        let breakdown = score("Python", "Requirements: Python, SQL, AWS");
        assert!(verdict(&breakdown).contains("2 required keyword(s)"));
    }

    #[test]
    fn test_weave_report_carries_key_skills() {
        let plan = WeavePlan {
            must_weave: vec!["rust".into()],
            jd_only: vec!["go".into()],
            low_overlap: true,
        };
        let report = WeaveReport::new(plan, ReportMetadata::new(None, "inline".into()));
        assert_eq!(report.key_skills, vec!["rust", "go (familiar)"]);
        assert!(!report.metadata.tool_version.is_empty());
    }
}
