//! Document loading with per-path caching

use crate::error::{AtsScorerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownSource, PdfSource, PlainTextSource, TextSource};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct DocumentLoader {
    cache: HashMap<PathBuf, String>,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self { cache: HashMap::new() }
    }

    pub async fn load(&mut self, path: &Path) -> Result<String> {
        if let Some(cached) = self.cache.get(path) {
            debug!("Using cached text for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(AtsScorerError::InvalidInput(format!("File does not exist: {}", path.display())));
        }

        let file_type = FileType::from_path(path)?;
        info!("Reading {} file: {}", file_type, path.display());
        let text = match file_type {
            FileType::Pdf => PdfSource.read_text(path).await?,
            FileType::Text => PlainTextSource.read_text(path).await?,
            FileType::Markdown => MarkdownSource.read_text(path).await?,
            FileType::Unknown => {
                return Err(AtsScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {} (expected .pdf, .txt or .md)",
                    path.display()
                )));
            }
        };

        self.cache.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    /// Job description from a file or inline text; empty text is rejected
    pub async fn load_job(&mut self, file: Option<&Path>, inline: Option<&str>) -> Result<String> {
        let text = match (file, inline) {
            (Some(path), _) => self.load(path).await?,
            (None, Some(text)) => text.to_string(),
            (None, None) => String::new(),
        };
        require_job_text(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

pub fn require_job_text(text: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(AtsScorerError::InvalidInput("job description is required".to_string()));
    }
    Ok(text)
}
