//! Input loading
//! Handles file detection, text extraction, and job-text validation

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::{require_job_text, DocumentLoader};
