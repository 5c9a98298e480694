//! Weave plan: which JD keywords a rewritten resume may claim and which it
//! may only mention as familiarity

use crate::processing::matcher::Matcher;
use crate::processing::normalizer::normalize;
use crate::processing::ranker::rank;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const WEAVE_RANK_LIMIT: usize = 40;
pub const MAX_MUST_WEAVE: usize = 25;
pub const MAX_JD_ONLY: usize = 20;
/// Overlap below this many supported keywords is always low
pub const LOW_OVERLAP_FLOOR: usize = 4;
pub const LOW_OVERLAP_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeavePlan {
    /// JD keywords the resume already supports
    pub must_weave: Vec<String>,
    /// JD keywords the resume gives no evidence for
    pub jd_only: Vec<String>,
    pub low_overlap: bool,
}

impl WeavePlan {
    pub fn build(matcher: &Matcher, resume: &str, jd: &str) -> Self {
        let candidates = rank(jd, WEAVE_RANK_LIMIT);
        let partition = matcher.partition(&candidates, &normalize(resume));

        let threshold = LOW_OVERLAP_FLOOR.max((candidates.len() as f64 * LOW_OVERLAP_SHARE).floor() as usize);
        let low_overlap = partition.present.len() < threshold;
        debug!(
            "Weave plan: {} of {} JD keywords supported (low overlap below {})",
            partition.present.len(),
            candidates.len(),
            threshold
        );

        let mut must_weave = partition.present;
        let mut jd_only = partition.missing;
        must_weave.truncate(MAX_MUST_WEAVE);
        jd_only.truncate(MAX_JD_ONLY);

        Self {
            must_weave,
            jd_only,
            low_overlap,
        }
    }

    /// Key-skills line: supported keywords as-is, unsupported ones marked
    /// `(familiar)`, case-insensitively deduplicated
    pub fn key_skills_line(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.must_weave
            .iter()
            .cloned()
            .chain(self.jd_only.iter().map(|k| format!("{} (familiar)", k)))
            .filter(|entry| seen.insert(entry.to_ascii_lowercase()))
            .collect()
    }
}

/// Weave plan with the default matcher
pub fn weave_plan(resume: &str, jd: &str) -> WeavePlan {
    WeavePlan::build(&Matcher::default(), resume, jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Backend engineer: Rust, Tokio, Kafka, Postgres, Redis, gRPC, Kubernetes, Terraform";

    #[test]
    fn test_plan_splits_supported_and_unsupported() {
        let plan = weave_plan("Rust and Kafka services on Postgres", JD);
        assert!(plan.must_weave.contains(&"rust".to_string()));
        assert!(plan.must_weave.contains(&"kafka".to_string()));
        assert!(plan.jd_only.contains(&"terraform".to_string()));
        for k in &plan.must_weave {
            assert!(!plan.jd_only.iter().any(|j| j.eq_ignore_ascii_case(k)));
        }
    }

    #[test]
    fn test_low_overlap_floor() {
        let plan = weave_plan("Rust", JD);
        assert!(plan.low_overlap);

        let plan = weave_plan("Rust Tokio Kafka Postgres Redis gRPC", JD);
        assert!(!plan.low_overlap);
    }

    #[test]
    fn test_caps() {
        let word = |i: u8| format!("z{}{}", (b'a' + i / 26) as char, (b'a' + i % 26) as char);
        let jd: String = (0..60).map(|i| format!("{}, ", word(i))).collect();
        let resume: String = (0..30).map(|i| format!("{} ", word(i))).collect();
        let plan = weave_plan(&resume, &jd);
        assert!(plan.must_weave.len() <= MAX_MUST_WEAVE);
        assert!(plan.jd_only.len() <= MAX_JD_ONLY);
    }

    #[test]
    fn test_empty_inputs() {
        let plan = weave_plan("", "");
        assert!(plan.must_weave.is_empty());
        assert!(plan.jd_only.is_empty());
        assert!(plan.low_overlap);
    }

    #[test]
    fn test_key_skills_line() {
        let plan = WeavePlan {
            must_weave: vec!["rust".into(), "kafka".into()],
            jd_only: vec!["terraform".into()],
            low_overlap: false,
        };
        assert_eq!(plan.key_skills_line(), vec!["rust", "kafka", "terraform (familiar)"]);
    }
}
