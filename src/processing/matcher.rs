//! Present/missing partition of keyword lists against a target text

use crate::processing::normalizer::normalize;
use crate::processing::synonyms::{
    exact_contains, is_word_boundary, variants, MatchMethod, SynonymResolver, WordEdge,
};
use aho_corasick::{AhoCorasick, MatchKind};
use log::warn;
use serde::{Deserialize, Serialize};

/// Outcome for one keyword against one target text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    /// `None` when the keyword was not found
    pub method: Option<MatchMethod>,
}

impl KeywordMatch {
    pub fn is_present(&self) -> bool {
        self.method.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub matches: Vec<KeywordMatch>,
}

/// Splits keyword lists into present/missing using the synonym resolver's rules.
///
/// The exact phase scans the target once with an Aho-Corasick automaton over
/// every variant of every keyword; only keywords without an exact hit pay for
/// the fuzzy stem test.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    resolver: SynonymResolver,
}

impl Matcher {
    pub fn new(resolver: SynonymResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &SynonymResolver {
        &self.resolver
    }

    /// Partition `keywords` against raw `target` text (normalized here)
    pub fn partition_text(&self, keywords: &[String], target: &str) -> Partition {
        self.partition(keywords, &normalize(target))
    }

    /// Partition `keywords` against already-normalized `target`, keeping list order
    pub fn partition(&self, keywords: &[String], target: &str) -> Partition {
        let exact = self.exact_hits(keywords, target);

        let mut partition = Partition::default();
        for (keyword, hit) in keywords.iter().zip(exact) {
            let method = if hit {
                Some(MatchMethod::Exact)
            } else if self.resolver.fuzzy_contains(target, keyword) {
                Some(MatchMethod::Fuzzy)
            } else {
                None
            };

            if method.is_some() {
                partition.present.push(keyword.clone());
            } else {
                partition.missing.push(keyword.clone());
            }
            partition.matches.push(KeywordMatch {
                keyword: keyword.clone(),
                method,
            });
        }
        partition
    }

    fn exact_hits(&self, keywords: &[String], target: &str) -> Vec<bool> {
        let mut hits = vec![false; keywords.len()];

        let mut patterns: Vec<String> = Vec::new();
        let mut owners: Vec<usize> = Vec::new();
        for (idx, keyword) in keywords.iter().enumerate() {
            for variant in variants(keyword) {
                patterns.push(variant);
                owners.push(idx);
            }
        }
        if patterns.is_empty() || target.is_empty() {
            return hits;
        }

        let automaton = match AhoCorasick::builder().match_kind(MatchKind::Standard).build(&patterns) {
            Ok(automaton) => automaton,
            Err(e) => {
                warn!("Falling back to per-keyword exact matching: {}", e);
                return keywords.iter().map(|k| exact_contains(target, k)).collect();
            }
        };

        for mat in automaton.find_overlapping_iter(target) {
            let owner = owners[mat.pattern().as_usize()];
            if !hits[owner] && is_word_boundary(target, mat.start(), mat.end(), WordEdge::Both) {
                hits[owner] = true;
            }
        }
        hits
    }
}
