//! Display casing for keywords

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static SPECIAL_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        (".net", ".NET"),
        ("node.js", "Node.js"),
        ("next.js", "Next.js"),
        ("react.js", "React.js"),
        ("vue.js", "Vue.js"),
        ("react", "React"),
        ("javascript", "JavaScript"),
        ("typescript", "TypeScript"),
        ("graphql", "GraphQL"),
        ("postgresql", "PostgreSQL"),
        ("mysql", "MySQL"),
        ("mongodb", "MongoDB"),
        ("microsoft excel", "Microsoft Excel"),
        ("microsoft word", "Microsoft Word"),
        ("epic clarity", "Epic Clarity"),
        ("cerner", "Cerner"),
        ("hipaa", "HIPAA"),
        ("icd-10", "ICD-10"),
        ("cpt", "CPT"),
        ("hcpcs", "HCPCS"),
        ("eob", "EOB"),
        ("era", "ERA"),
        ("ehr", "EHR"),
        ("aws", "AWS"),
        ("gcp", "GCP"),
        ("azure", "Azure"),
        ("sql", "SQL"),
        ("ci/cd", "CI/CD"),
        ("api", "API"),
        ("nlp", "NLP"),
        ("llm", "LLM"),
    ]
    .into_iter()
    .collect()
});

static ACRONYMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "api", "sql", "aws", "gcp", "hipaa", "cpt", "hcpcs", "eob", "era", "ehr", "nlp", "llm", "ci/cd",
        "gpu", "cpu", "sme",
    ]
    .into_iter()
    .collect()
});

/// Human-friendly casing: `node.js` -> `Node.js`, `ci/cd pipelines` -> `CI/CD Pipelines`
pub fn pretty_label(keyword: &str) -> String {
    let lower = keyword.trim().to_lowercase();
    if let Some(label) = SPECIAL_LABELS.get(lower.as_str()) {
        return label.to_string();
    }
    lower.split(' ').map(cap_token).collect::<Vec<_>>().join(" ")
}

/// Comma-joined labels, e.g. for pasting into a skills line
pub fn pretty_list(keywords: &[String]) -> String {
    keywords.iter().map(|k| pretty_label(k)).collect::<Vec<_>>().join(", ")
}

fn cap_token(token: &str) -> String {
    if let Some(label) = SPECIAL_LABELS.get(token) {
        return label.to_string();
    }
    if token.contains('/') {
        return token.split('/').map(cap_token).collect::<Vec<_>>().join("/");
    }
    if token.contains('-') {
        return token.split('-').map(cap_token).collect::<Vec<_>>().join("-");
    }
    if token.contains('.') {
        return token.split('.').map(capitalize).collect::<Vec<_>>().join(".");
    }
    if ACRONYMS.contains(token) {
        return token.to_uppercase();
    }
    capitalize(token)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
