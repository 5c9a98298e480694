//! Job-description bucketing and resume skills-block extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static REQUIRED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(requirement|must[-\s]?have|qualifications|you\s+will\s+need|what\s+you\s+need)")
        .expect("invalid REQUIRED_HEADER")
});

static PREFERRED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(preferred|nice\s*to\s*have|good\s*to\s*have|bonus|plus)").expect("invalid PREFERRED_HEADER")
});

static SKILLS_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(skills|technical skills|tech skills|core skills)\b").expect("invalid SKILLS_HEADING")
});

/// `**Experience**` style heading that closes the skills block
static BOLD_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*.*\*\*$").expect("invalid BOLD_HEADING"));

/// Bare resume section heading (`Experience`, `EDUCATION:`) as found in PDF or plain text
static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(work\s+experience|professional\s+experience|experience|employment(\s+history)?|education|projects|certifications?|summary|profile|awards|publications)\s*:?$",
    )
    .expect("invalid SECTION_HEADING")
});

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•+]\s+").expect("invalid BULLET"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Required,
    Preferred,
    Other,
}

/// Raw JD lines grouped by the heading they appeared under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBuckets {
    pub required: String,
    pub preferred: String,
    pub other: String,
}

impl JobBuckets {
    fn push_line(&mut self, bucket: Bucket, line: &str) {
        let target = match bucket {
            Bucket::Required => &mut self.required,
            Bucket::Preferred => &mut self.preferred,
            Bucket::Other => &mut self.other,
        };
        if !target.is_empty() {
            target.push('\n');
        }
        target.push_str(line);
    }
}

/// Split a job description into required / preferred / other text.
///
/// Header lines switch the current bucket and their label is not kept. Text
/// after the first `:` of a header line (`Requirements: Python, SQL`) is the
/// first entry of the new bucket. A line that looks like both kinds of header
/// counts as a required header.
pub fn bucketize(job_text: &str) -> JobBuckets {
    let mut buckets = JobBuckets::default();
    let mut current = Bucket::Other;

    for raw in job_text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let header = if REQUIRED_HEADER.is_match(line) {
            Some(Bucket::Required)
        } else if PREFERRED_HEADER.is_match(line) {
            Some(Bucket::Preferred)
        } else {
            None
        };

        match header {
            Some(bucket) => {
                current = bucket;
                if let Some(inline) = inline_content(line) {
                    buckets.push_line(current, inline);
                }
            }
            None => buckets.push_line(current, line),
        }
    }

    buckets
}

fn inline_content(header_line: &str) -> Option<&str> {
    let (_, rest) = header_line.split_once(':')?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

/// Text listed under a resume's skills heading, space-joined.
///
/// Capture starts after a line beginning with a skills heading (text after its
/// `:` included) and stops at the next `**Bold**` line or bare section heading.
/// Bullet markers are dropped.
pub fn extract_skills_block(resume_text: &str) -> String {
    let mut capturing = false;
    let mut picked: Vec<&str> = Vec::new();

    for raw in resume_text.lines() {
        let line = raw.trim();
        if SKILLS_HEADING.is_match(line) {
            capturing = true;
            if let Some(inline) = inline_content(line) {
                picked.push(inline);
            }
            continue;
        }
        if !capturing || line.is_empty() {
            continue;
        }
        if BOLD_HEADING.is_match(line) || SECTION_HEADING.is_match(line) {
            break;
        }
        match BULLET.find(line) {
            Some(bullet) => picked.push(&line[bullet.end()..]),
            None => picked.push(line),
        }
    }

    picked.join(" ")
}
