//! Plain text from PDF, Markdown and text files
//!
//! Extraction only; no matching logic lives here.

use crate::error::{AtsScorerError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextSource {
    fn read_text(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfSource;

impl TextSource for PdfSource {
    async fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AtsScorerError::Extraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })
    }
}

pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    async fn read_text(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownSource;

impl TextSource for MarkdownSource {
    async fn read_text(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Flatten Markdown to one block per line.
///
/// Headings become bare lines, list items keep a `- ` bullet and strong text
/// keeps its `**` markers, so resume section detection sees the same shapes it
/// would in a plain text resume.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::Start(Tag::Strong) | Event::End(Tag::Strong) => out.push_str("**"),
            Event::Start(Tag::Item) => {
                end_line(&mut out);
                out.push_str("- ");
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => end_line(&mut out),
            Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => end_line(&mut out),
            Event::End(Tag::CodeBlock(_)) | Event::End(Tag::TableRow) | Event::End(Tag::TableHead) => end_line(&mut out),
            Event::End(Tag::TableCell) => out.push(' '),
            _ => {}
        }
    }

    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn end_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let md = "# Jane Doe\n\n## Skills\n\n- Rust\n- Kafka, `gRPC`\n\n**Experience**\n\nBuilt *things*.";
        assert_eq!(
            markdown_to_text(md),
            "Jane Doe\nSkills\n- Rust\n- Kafka, gRPC\n**Experience**\nBuilt things."
        );
    }

    #[test]
    fn test_markdown_soft_breaks() {
        assert_eq!(markdown_to_text("line one\nline two"), "line one\nline two");
        assert_eq!(markdown_to_text(""), "");
    }
}
