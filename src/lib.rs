//! ATS match-scoring library
//!
//! Turns a resume and a job description into a keyword gap analysis and a
//! 0-100 compatibility score. The engine in [`processing`] is pure and
//! synchronous; [`input`], [`output`] and [`config`] are the CLI boundary.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsScorerError, Result};
pub use processing::{score, ScoreBreakdown, ScoringEngine};
