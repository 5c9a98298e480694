//! Output formatters: colored console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::{AtsScorerError, Result};
use crate::output::labels::{pretty_label, pretty_list};
use crate::output::report::{KeywordReport, MatchReport, WeaveReport};
use crate::processing::synonyms::MatchMethod;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Renders each report kind in one output format
pub trait OutputFormatter {
    fn format_match(&self, report: &MatchReport) -> Result<String>;
    fn format_keywords(&self, report: &KeywordReport) -> Result<String>;
    fn format_weave(&self, report: &WeaveReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_keyword_line(&self, label: &str, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return format!("  {} {}\n", label, self.colorize("none", Color::BrightBlack));
        }
        format!("  {} {}\n", label, self.colorize(&pretty_list(keywords), color))
    }

    fn method_tag(&self, method: Option<MatchMethod>) -> String {
        match method {
            Some(MatchMethod::Exact) => self.colorize("exact", Color::Green),
            Some(MatchMethod::Fuzzy) => self.colorize("fuzzy", Color::Yellow),
            None => self.colorize("missing", Color::Red),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let b = &report.breakdown;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS MATCH SCORE", 1));
        output.push_str(&format!(
            "Generated: {} | Model: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            b.model_version
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("Match Score: {}% {}\n", b.score, self.format_score_badge(b.score)));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.verdict, Color::Cyan)));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!("🔍 Keyword Coverage: {}%\n", b.base_score));
        output.push_str(&format!("📈 Model Estimate: {}%\n", b.model_score.round()));
        output.push_str(&format!(
            "🎯 Required: {}/{} ({:.0}%) | Preferred: {}/{} ({:.0}%)\n",
            b.present_required.len(),
            b.required.len(),
            b.required_coverage() * 100.0,
            b.present_preferred.len(),
            b.preferred.len(),
            b.preferred_coverage() * 100.0
        ));

        output.push_str(&self.format_header("Keywords", 3));
        output.push_str(&self.format_keyword_line("✅ Required present:", &b.present_required, Color::Green));
        output.push_str(&self.format_keyword_line("❌ Required missing:", &b.missing_required, Color::Red));
        output.push_str(&self.format_keyword_line("✅ Preferred present:", &b.present_preferred, Color::Green));
        output.push_str(&self.format_keyword_line("➖ Preferred missing:", &b.missing_preferred, Color::Yellow));

        if self.detailed {
            output.push_str(&self.format_header("Keyword Details", 3));
            for detail in &b.details {
                let skills = if detail.in_skills_block { " +skills" } else { "" };
                output.push_str(&format!(
                    "  {:<28} {:<10} {}{}\n",
                    pretty_label(&detail.keyword),
                    format!("{:?}", detail.category).to_lowercase(),
                    self.method_tag(detail.method),
                    skills
                ));
            }

            output.push_str(&self.format_header("Model Features", 3));
            let f = &b.features;
            output.push_str(&format!("  overlap ratio:   {:.3}\n", f.overlap_ratio));
            output.push_str(&format!("  resume coverage: {:.3}\n", f.resume_coverage));
            output.push_str(&format!("  length diff:     {:.3}\n", f.length_diff));
            output.push_str(&format!("  keyword ratio:   {:.3}\n", f.kw_ratio));
        }

        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        let plan = &report.plan;
        let mut output = String::new();

        output.push_str(&self.format_header("🔑 JOB DESCRIPTION KEYWORDS", 1));
        if plan.used_global_split {
            output.push_str(&self.colorize("No section headers found; keywords split by rank\n", Color::Yellow));
        }
        output.push_str(&self.format_header(&format!("Required ({})", plan.required.len()), 2));
        for (i, keyword) in plan.required.iter().enumerate() {
            output.push_str(&format!("  {:>2}. {}\n", i + 1, pretty_label(keyword)));
        }
        output.push_str(&self.format_header(&format!("Preferred ({})", plan.preferred.len()), 2));
        for (i, keyword) in plan.preferred.iter().enumerate() {
            output.push_str(&format!("  {:>2}. {}\n", i + 1, pretty_label(keyword)));
        }

        Ok(output)
    }

    fn format_weave(&self, report: &WeaveReport) -> Result<String> {
        let plan = &report.plan;
        let mut output = String::new();

        output.push_str(&self.format_header("🧵 WEAVE PLAN", 1));
        output.push_str(&self.format_keyword_line("✅ Weave into experience:", &plan.must_weave, Color::Green));
        output.push_str(&self.format_keyword_line("💡 Skills/projects only:", &plan.jd_only, Color::Yellow));
        if plan.low_overlap {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("⚠️  Low overlap: consider a practice project covering the JD-only keywords", Color::Red)
            ));
        }
        if !report.key_skills.is_empty() {
            output.push_str(&self.format_header("Key Skills line", 3));
            let line: Vec<String> = report.key_skills.iter().map(|k| pretty_label(k)).collect();
            output.push_str(&format!("  {}\n", line.join(", ")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_match(&self, report: &MatchReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_weave(&self, report: &WeaveReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u32) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn bullet_list(keywords: &[String]) -> String {
        if keywords.is_empty() {
            return "_None_\n".to_string();
        }
        keywords.iter().map(|k| format!("- {}\n", pretty_label(k))).collect()
    }

    fn metadata_line(&self, generated_at: &chrono::DateTime<chrono::Utc>, job_source: &str) -> String {
        if !self.include_metadata {
            return String::new();
        }
        let job = Path::new(job_source)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| job_source.to_string());
        format!(
            "**Generated:** {} | **Job:** `{}`\n\n",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            job
        )
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_match(&self, report: &MatchReport) -> Result<String> {
        let b = &report.breakdown;
        let mut output = String::new();

        output.push_str("# 📊 ATS Match Report\n\n");
        output.push_str(&self.metadata_line(&report.metadata.generated_at, &report.metadata.job_source));

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {}% {}\n\n",
            b.score,
            Self::markdown_score_badge(b.score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Score |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| 🔍 Keyword Coverage | {}% |\n", b.base_score));
        output.push_str(&format!("| 📈 Model Estimate ({}) | {}% |\n", b.model_version, b.model_score.round()));
        output.push_str(&format!(
            "| 🎯 Required Covered | {}/{} ({:.0}%) |\n",
            b.present_required.len(),
            b.required.len(),
            b.required_coverage() * 100.0
        ));
        output.push_str(&format!(
            "| ➕ Preferred Covered | {}/{} ({:.0}%) |\n\n",
            b.present_preferred.len(),
            b.preferred.len(),
            b.preferred_coverage() * 100.0
        ));

        output.push_str("## Missing Required Keywords\n\n");
        output.push_str(&Self::bullet_list(&b.missing_required));
        output.push_str("\n## Missing Preferred Keywords\n\n");
        output.push_str(&Self::bullet_list(&b.missing_preferred));
        output.push_str("\n## Present Keywords\n\n");
        let mut present = b.present_required.clone();
        present.extend(b.present_preferred.iter().cloned());
        output.push_str(&Self::bullet_list(&present));

        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        let mut output = String::new();
        output.push_str("# 🔑 Job Description Keywords\n\n");
        output.push_str(&self.metadata_line(&report.metadata.generated_at, &report.metadata.job_source));
        output.push_str("## Required\n\n");
        output.push_str(&Self::bullet_list(&report.plan.required));
        output.push_str("\n## Preferred\n\n");
        output.push_str(&Self::bullet_list(&report.plan.preferred));
        Ok(output)
    }

    fn format_weave(&self, report: &WeaveReport) -> Result<String> {
        let plan = &report.plan;
        let mut output = String::new();
        output.push_str("# 🧵 Weave Plan\n\n");
        output.push_str(&self.metadata_line(&report.metadata.generated_at, &report.metadata.job_source));
        if plan.low_overlap {
            output.push_str("> **Low overlap:** consider a practice project covering the JD-only keywords.\n\n");
        }
        output.push_str("## Weave Into Experience\n\n");
        output.push_str(&Self::bullet_list(&plan.must_weave));
        output.push_str("\n## Skills or Projects Only\n\n");
        output.push_str(&Self::bullet_list(&plan.jd_only));
        if !report.key_skills.is_empty() {
            output.push_str("\n## Key Skills\n\n");
            output.push_str(&pretty_list(&report.key_skills));
            output.push('\n');
        }
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_match(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_match(report)
    }

    pub fn generate_keywords(&self, report: &KeywordReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_keywords(report)
    }

    pub fn generate_weave(&self, report: &WeaveReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_weave(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)
        .map_err(|e| AtsScorerError::OutputFormatting(format!("Failed to write {}: {}", file_path.display(), e)))
}

/// Where `--save` writes: `target` itself, or a suggested file name inside it
/// when `target` is an existing directory
pub fn resolve_save_path(target: &Path, format: OutputFormat, resume_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_name, true))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}
