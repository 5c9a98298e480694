//! Synonym-aware containment tests
//!
//! Every presence check in the engine goes through [`SynonymResolver::contains`]:
//! an exact whole-word hit on any registered spelling of the term, or a fuzzy
//! hit where enough of the term's word stems start a word in the text.

use crate::processing::lexicon::SYNONYMS;
use crate::processing::normalizer::normalize;
use serde::{Deserialize, Serialize};

/// Stem share required for a fuzzy hit unless configured otherwise
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Inflection suffixes stripped before prefix matching, longest first
const STEM_SUFFIXES: [&str; 4] = ["ing", "ed", "es", "s"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    /// A registered spelling occurs as a whole word
    Exact,
    /// Enough word stems of the term start words in the text
    Fuzzy,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynonymResolver {
    fuzzy_threshold: f64,
}

impl Default for SynonymResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}

impl SynonymResolver {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self {
            fuzzy_threshold: fuzzy_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    /// Presence test used throughout the engine. `text` must already be normalized.
    pub fn contains(&self, text: &str, term: &str) -> bool {
        self.match_method(text, term).is_some()
    }

    /// Like [`contains`](Self::contains) but reports which test succeeded;
    /// exact wins when both would.
    pub fn match_method(&self, text: &str, term: &str) -> Option<MatchMethod> {
        if exact_contains(text, term) {
            Some(MatchMethod::Exact)
        } else if self.fuzzy_contains(text, term) {
            Some(MatchMethod::Fuzzy)
        } else {
            None
        }
    }

    pub fn fuzzy_contains(&self, text: &str, term: &str) -> bool {
        let normalized = normalize(term);
        let stems: Vec<&str> = normalized.split_whitespace().map(stem).collect();
        if stems.is_empty() {
            return false;
        }

        let hits = stems.iter().filter(|s| find_word(text, s, WordEdge::Start)).count();
        hits as f64 / stems.len() as f64 >= self.fuzzy_threshold
    }
}

/// Normalized spellings accepted for `term`, the term itself first
pub fn variants(term: &str) -> Vec<String> {
    let canonical = normalize(term);
    let mut out = vec![canonical.clone()];
    if let Some(alternates) = SYNONYMS.get(canonical.as_str()) {
        for alt in alternates.iter() {
            let alt = normalize(alt);
            if !out.contains(&alt) {
                out.push(alt);
            }
        }
    }
    out.retain(|v| !v.is_empty());
    out
}

/// Whole-word hit on any variant of `term` inside normalized `text`
pub fn exact_contains(text: &str, term: &str) -> bool {
    variants(term).iter().any(|v| find_word(text, v, WordEdge::Both))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordEdge {
    /// Occurrence must start a word; it may run into more word characters
    Start,
    /// Occurrence must be a whole word
    Both,
}

/// Boundary-anchored substring search over every (possibly overlapping)
/// occurrence. Word characters are ASCII alphanumerics, so `react` is found in
/// `react.js` and `js` in `node.js`.
pub(crate) fn find_word(text: &str, needle: &str, edge: WordEdge) -> bool {
    let Some(first) = needle.chars().next() else {
        return false;
    };
    let mut from = 0;
    while let Some(offset) = text[from..].find(needle) {
        let start = from + offset;
        if is_word_boundary(text, start, start + needle.len(), edge) {
            return true;
        }
        from = start + first.len_utf8();
    }
    false
}

pub(crate) fn is_word_boundary(text: &str, start: usize, end: usize, edge: WordEdge) -> bool {
    let is_word = |c: char| c.is_ascii_alphanumeric();
    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word(c));
    let after_ok = match edge {
        WordEdge::Start => true,
        WordEdge::Both => text[end..].chars().next().map_or(true, |c| !is_word(c)),
    };
    before_ok && after_ok
}

/// Strip one inflection suffix, keeping at least one character
fn stem(token: &str) -> &str {
    STEM_SUFFIXES
        .iter()
        .find(|suffix| token.len() > suffix.len() && token.ends_with(*suffix))
        .map_or(token, |suffix| &token[..token.len() - suffix.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> String {
        normalize(text)
    }

    #[test]
    fn test_variants() {
        assert_eq!(variants("JavaScript"), vec!["javascript", "js"]);
        assert_eq!(variants("kafka"), vec!["kafka"]);
        let net = variants(".NET");
        assert_eq!(net[0], ".net");
        assert!(net.contains(&"dotnet".to_string()));
        assert!(net.contains(&"dot net".to_string()));
        assert!(variants("").is_empty());
    }

    #[test]
    fn test_exact_contains_uses_synonyms() {
        let text = norm("Built services on Amazon Web Services and K8s");
        assert!(exact_contains(&text, "aws"));
        assert!(exact_contains(&text, "Kubernetes"));
        assert!(!exact_contains(&text, "azure"));
    }

    #[test]
    fn test_exact_contains_respects_word_boundaries() {
        let text = norm("javascript developer");
        assert!(!exact_contains(&text, "java"));
        assert!(exact_contains(&text, "javascript"));

        let text = norm("Strong C++ and C# skills, some .NET");
        assert!(exact_contains(&text, "c++"));
        assert!(exact_contains(&text, "c#"));
        assert!(exact_contains(&text, ".net"));
    }

    #[test]
    fn test_overlapping_occurrences() {
        // the first "x.x" is glued to "y"; the overlapping second one is whole
        assert!(find_word("yx.x.x", "x.x", WordEdge::Both));
        assert!(!find_word("yx.xz", "x.x", WordEdge::Both));
    }

    #[test]
    fn test_exact_contains_inside_dotted_terms() {
        let text = norm("Frontend work in React.js");
        assert!(exact_contains(&text, "react"));
    }

    #[test]
    fn test_fuzzy_contains_inflections() {
        let resolver = SynonymResolver::default();
        let text = norm("Managed data pipelines and tested deployments");
        assert!(resolver.fuzzy_contains(&text, "data pipeline"));
        assert!(resolver.fuzzy_contains(&text, "testing"));
        assert!(!resolver.fuzzy_contains(&text, "kubernetes"));
    }

    #[test]
    fn test_fuzzy_contains_partial_multiword() {
        let resolver = SynonymResolver::default();
        let text = norm("distributed systems engineer");
        // two of three stems start a word in the text
        assert!(resolver.fuzzy_contains(&text, "distributed systems design"));
        assert!(!resolver.fuzzy_contains(&text, "cloud cost design"));
    }

    #[test]
    fn test_fuzzy_requires_word_start() {
        let resolver = SynonymResolver::default();
        let text = norm("subprocessing");
        assert!(!resolver.fuzzy_contains(&text, "processing"));
    }

    #[test]
    fn test_match_method_prefers_exact() {
        let resolver = SynonymResolver::default();
        let text = norm("Python scripting, dashboards");
        assert_eq!(resolver.match_method(&text, "python"), Some(MatchMethod::Exact));
        assert_eq!(resolver.match_method(&text, "dashboard"), Some(MatchMethod::Fuzzy));
        assert_eq!(resolver.match_method(&text, "golang"), None);
    }

    #[test]
    fn test_stem_never_empties_a_word() {
        assert_eq!(stem("ing"), "ing");
        assert_eq!(stem("s"), "s");
        assert_eq!(stem("testing"), "test");
        let resolver = SynonymResolver::new(1.0);
        assert!(!resolver.fuzzy_contains(&norm("anything at all"), "ing"));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(SynonymResolver::new(1.7).fuzzy_threshold(), 1.0);
        assert_eq!(SynonymResolver::new(-0.2).fuzzy_threshold(), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        let resolver = SynonymResolver::default();
        assert!(!resolver.contains("", "python"));
        assert!(!resolver.contains("python", ""));
        assert!(!resolver.contains("", ""));
    }
}
