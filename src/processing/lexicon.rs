//! Frozen word lists, noise patterns and the synonym table
//!
//! Everything here is built once on first use and only ever read afterwards,
//! so it is shared freely between concurrent scoring calls.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Common function words and resume/JD boilerplate
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "for", "to", "of", "in", "on", "at", "with", "by", "from",
        "as", "is", "are", "was", "were", "be", "being", "been",
        "your", "you", "we", "our", "they", "them", "their", "this", "that", "these", "those",
        "will", "can", "must", "should", "could", "may", "would",
        "i", "me", "my", "mine", "us",
        "job", "role", "roles", "team", "teams", "company", "organization", "position", "summary",
        "description",
        "responsibilities", "responsibility", "requirements", "requirement", "qualifications",
        "qualification",
        "about", "years", "year", "plus", "include", "including", "across",
        "work", "working", "worked", "design", "designed", "develop", "developed", "maintain",
        "maintained", "support", "supported", "provide", "provided",
        "good", "great", "excellent", "strong", "communication", "experience", "experienced",
        "familiarity", "knowledge", "understanding",
        "preferred", "bonus", "nice", "have", "has", "need", "needs",
    ]
    .into_iter()
    .collect()
});

/// Fragments that are never keywords on their own
pub static EXCLUDED_TOKENS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        ".", "-",
        "balance", "balances", "accurate", "accuracy", "account", "accounts",
        "corporate", "office", "corporate office",
        "key", "addition", "added", "used", "use", "using", "hands", "handson", "hands-on",
    ]
    .into_iter()
    .collect()
});

/// Nouns too common in job ads to discriminate between candidates
pub static GENERIC_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "customer", "clients", "stakeholders", "users", "business", "product", "services",
        "applications", "systems", "process", "processes", "tools", "solutions", "environment",
        "projects", "project", "platform", "platforms", "framework",
    ]
    .into_iter()
    .collect()
});

/// Known two-word noise combinations
pub static NOISE_BIGRAMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["corporate office", "balances accurate", "worked addition"].into_iter().collect());

/// Domain names such as `acme.com` or `socket.io`
pub static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-z0-9-]+\.(com|net|org|io|in|co|ai|dev|tech|gov|edu)\b").expect("invalid DOMAIN_RE")
});

/// Years-of-experience noise such as `10+`
pub static NUMBER_PLUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\+$").expect("invalid NUMBER_PLUS_RE"));

const SYNONYM_TABLE: &[(&str, &[&str])] = &[
    // languages & runtimes
    ("javascript", &["js"]),
    ("typescript", &["ts"]),
    ("python", &["py"]),
    ("java", &[]),
    ("c#", &["c sharp", "c-sharp", "csharp"]),
    ("c++", &["cpp"]),
    (".net", &["dotnet", ".net core", "net core", "net-core", "dot net"]),
    ("node.js", &["node", "nodejs"]),
    // front-end
    ("react", &["react.js", "reactjs"]),
    ("next.js", &["nextjs"]),
    ("vue.js", &["vue", "vuejs"]),
    ("angular", &["angularjs"]),
    // back-end & apis
    ("rest", &["rest api", "restful"]),
    ("graphql", &[]),
    ("microservices", &["micro-service", "micro service"]),
    // data
    ("postgresql", &["postgres", "psql"]),
    ("mysql", &[]),
    ("mongodb", &["mongo"]),
    ("sqlite", &[]),
    ("redis", &[]),
    ("elasticsearch", &["elastic", "es"]),
    // cloud & devops
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud"]),
    ("azure", &["microsoft azure"]),
    ("ci/cd", &["cicd", "continuous integration", "continuous delivery"]),
    ("docker", &[]),
    ("kubernetes", &["k8s"]),
    ("terraform", &[]),
    // ml/ai
    ("nlp", &["natural language processing"]),
    ("llm", &["large language model"]),
    // healthcare
    ("hipaa", &["hippa"]),
    ("icd-10", &["icd10", "icd 10"]),
    ("cpt", &[]),
    ("hcpcs", &[]),
    ("ehr", &["electronic health record"]),
    ("epic", &["epic clarity"]),
    ("cerner", &[]),
    // office tools
    ("microsoft excel", &["excel", "ms excel"]),
    ("microsoft word", &["word"]),
    // ats
    ("applicant tracking system", &["ats"]),
];

/// Canonical term -> accepted alternate spellings
pub static SYNONYMS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| SYNONYM_TABLE.iter().copied().collect());

pub fn is_synonym_key(term: &str) -> bool {
    SYNONYMS.contains_key(term)
}

/// Characters that make a candidate look like a technical term
pub fn has_tech_char(term: &str) -> bool {
    term.chars().any(|c| matches!(c, '+' | '.' | '#' | '/') || c.is_ascii_digit())
}
