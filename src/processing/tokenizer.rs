//! Keyword-candidate tokenization and skill-ish bigram extraction

use crate::processing::lexicon::{
    has_tech_char, is_synonym_key, DOMAIN_RE, EXCLUDED_TOKENS, GENERIC_NOUNS, NOISE_BIGRAMS,
    NUMBER_PLUS_RE, STOPWORDS,
};
use crate::processing::normalizer::normalize;

/// Longest token still considered a plausible keyword
pub const MAX_TOKEN_LEN: usize = 24;

/// Normalize `text` and return its keyword-candidate tokens in order.
///
/// Duplicates are kept so callers can count frequencies.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .map(strip_edge_punct)
        .filter(|tok| !is_noisy(tok))
        .map(str::to_string)
        .collect()
}

/// Adjacent token pairs that look like a skill (`machine learning` does not,
/// `react native` does because `react` is a known term)
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .filter_map(|pair| {
            let a = strip_edge_punct(&pair[0]);
            let b = strip_edge_punct(&pair[1]);
            if is_noisy(a) || is_noisy(b) {
                return None;
            }

            let joined = format!("{} {}", a, b);
            let skillish = has_tech_char(&joined) || is_synonym_key(a) || is_synonym_key(b);
            if !skillish || is_noise_bigram(&joined) {
                return None;
            }
            Some(joined)
        })
        .collect()
}

/// Trim `. , ; : ( )` from both ends; inner dots (`node.js`) survive, and so
/// does the leading dot of an allow-listed name such as `.net`
pub fn strip_edge_punct(token: &str) -> &str {
    let is_edge = |c: char| matches!(c, '.' | ',' | ';' | ':' | '(' | ')');
    let tail_trimmed = token.trim_end_matches(is_edge);
    let stripped = tail_trimmed.trim_start_matches(is_edge);

    let start = tail_trimmed.len() - stripped.len();
    if start > 0 && tail_trimmed.as_bytes()[start - 1] == b'.' {
        let dotted = &tail_trimmed[start - 1..];
        if is_allowed_dotted(dotted) {
            return dotted;
        }
    }
    stripped
}

/// Whether a candidate is too generic or malformed to be a keyword
pub fn is_noisy(token: &str) -> bool {
    if token.is_empty() {
        return true;
    }
    if STOPWORDS.contains(token) || EXCLUDED_TOKENS.contains(token) || GENERIC_NOUNS.contains(token) {
        return true;
    }
    if token.len() > MAX_TOKEN_LEN {
        return true;
    }
    if NUMBER_PLUS_RE.is_match(token) || DOMAIN_RE.is_match(token) {
        return true;
    }
    if token.contains('.') {
        return !is_allowed_dotted(token);
    }
    if token.contains('+') && token != "c++" {
        return true;
    }
    token.chars().all(|c| c.is_ascii_digit())
}

pub fn is_noise_bigram(candidate: &str) -> bool {
    NOISE_BIGRAMS.contains(candidate.to_ascii_lowercase().as_str())
}

/// Only `.net` and `*.js` names may carry a dot
fn is_allowed_dotted(token: &str) -> bool {
    token == ".net" || (token.len() > ".js".len() && token.ends_with(".js") && !token.starts_with('.'))
}
