//! Keyword ranking and the required/preferred keyword plan
//!
//! This is the single keyword-extraction path: the scorer, the model features
//! and the weave planner all rank through [`rank`].

use crate::processing::lexicon::{has_tech_char, is_synonym_key};
use crate::processing::sections::{bucketize, JobBuckets};
use crate::processing::tokenizer::{bigrams, is_noise_bigram, is_noisy, tokenize};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-bucket ranking cap
pub const BUCKET_RANK_LIMIT: usize = 25;
/// Ranking cap when the JD had no recognizable headers
pub const GLOBAL_RANK_LIMIT: usize = 35;
/// Ranking cap for the backfill source
pub const BACKFILL_RANK_LIMIT: usize = 20;
/// A required list shorter than this gets backfilled
pub const REQUIRED_BACKFILL_BELOW: usize = 12;
pub const MAX_REQUIRED: usize = 15;
pub const MAX_PREFERRED: usize = 20;

/// Rank keyword candidates of `text`, most important first, at most `max`.
///
/// Candidates are tokens plus skill-ish bigrams. Bigrams never span a list
/// separator (`,` `;` `|` `•` or a line break), so `Python, SQL` yields no
/// `python sql` pair. Order: technical-looking candidates first, then by
/// descending frequency, then alphabetically.
pub fn rank(text: &str, max: usize) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for phrase in text.split(is_phrase_separator) {
        let tokens = tokenize(phrase);
        let pairs = bigrams(&tokens);
        candidates.extend(tokens);
        candidates.extend(pairs);
    }

    let mut freq: HashMap<String, usize> = HashMap::new();
    for candidate in candidates {
        *freq.entry(candidate).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = freq.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    // Stable partition keeps frequency order inside each group
    let (technical, plain): (Vec<String>, Vec<String>) =
        sorted.into_iter().map(|(term, _)| term).partition(|term| is_technical(term));

    let mut seen: HashSet<String> = HashSet::new();
    let mut ranked = Vec::new();
    for term in technical.into_iter().chain(plain) {
        if ranked.len() >= max {
            break;
        }
        let cleaned = term.trim();
        if is_noisy(cleaned) || is_noise_bigram(cleaned) {
            continue;
        }
        if seen.insert(cleaned.to_ascii_lowercase()) {
            ranked.push(cleaned.to_string());
        }
    }
    ranked
}

/// Tech punctuation or digits, a known synonym key, or a multi-word term
pub fn is_technical(term: &str) -> bool {
    has_tech_char(term) || is_synonym_key(term) || term.contains(' ')
}

fn is_phrase_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '|' | '•' | '\n' | '\r')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Required,
    Preferred,
    Unassigned,
}

/// Required and preferred keyword lists derived from a job description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordPlan {
    pub required: Vec<String>,
    pub preferred: Vec<String>,
    /// True when the JD had no usable headers and the global split was used
    pub used_global_split: bool,
}

impl KeywordPlan {
    pub fn from_job(job_text: &str) -> Self {
        let buckets = bucketize(job_text);
        Self::from_buckets(&buckets, job_text)
    }

    pub fn from_buckets(buckets: &JobBuckets, job_text: &str) -> Self {
        let mut required = rank(&buckets.required, BUCKET_RANK_LIMIT);
        let mut preferred = rank(&buckets.preferred, BUCKET_RANK_LIMIT);
        let mut used_global_split = false;

        if required.is_empty() && preferred.is_empty() {
            let global = rank(job_text, GLOBAL_RANK_LIMIT);
            let mid = MAX_REQUIRED.min(global.len() / 2);
            let end = (mid + MAX_PREFERRED).min(global.len());
            required = global[..mid].to_vec();
            preferred = global[mid..end].to_vec();
            used_global_split = true;
            debug!("No JD section headers found, split {} global keywords at {}", global.len(), mid);
        }

        if required.len() < REQUIRED_BACKFILL_BELOW {
            let source = if buckets.other.trim().is_empty() { job_text } else { buckets.other.as_str() };
            let taken: HashSet<String> = required
                .iter()
                .chain(preferred.iter())
                .map(|k| k.to_ascii_lowercase())
                .collect();
            let extra: Vec<String> = rank(source, BACKFILL_RANK_LIMIT)
                .into_iter()
                .filter(|k| !taken.contains(&k.to_ascii_lowercase()))
                .collect();
            debug!("Backfilling {} required keywords with up to {} more", required.len(), extra.len());
            required.extend(extra);
        }
        required.truncate(MAX_REQUIRED);

        let required_set: HashSet<String> = required.iter().map(|k| k.to_ascii_lowercase()).collect();
        preferred.retain(|k| !required_set.contains(&k.to_ascii_lowercase()));
        preferred.truncate(MAX_PREFERRED);

        Self {
            required,
            preferred,
            used_global_split,
        }
    }

    /// Which list `term` landed in, compared case-insensitively
    pub fn category_of(&self, term: &str) -> KeywordCategory {
        if self.required.iter().any(|k| k.eq_ignore_ascii_case(term)) {
            KeywordCategory::Required
        } else if self.preferred.iter().any(|k| k.eq_ignore_ascii_case(term)) {
            KeywordCategory::Preferred
        } else {
            KeywordCategory::Unassigned
        }
    }
}
