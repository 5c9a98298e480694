//! Report rendering

pub mod formatter;
pub mod labels;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use labels::pretty_label;
pub use report::{KeywordReport, MatchReport, ReportMetadata, WeaveReport};
