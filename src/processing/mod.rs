//! Text processing and match scoring

pub mod lexicon;
pub mod matcher;
pub mod model;
pub mod normalizer;
pub mod ranker;
pub mod scoring;
pub mod sections;
pub mod synonyms;
pub mod tokenizer;
pub mod weave;

pub use matcher::{KeywordMatch, Matcher, Partition};
pub use model::{LogisticModel, MatchFeatures};
pub use ranker::{rank, KeywordCategory, KeywordPlan};
pub use scoring::{score, ScoreBreakdown, ScoringEngine};
pub use synonyms::{MatchMethod, SynonymResolver};
pub use weave::{weave_plan, WeavePlan};
