//! Section attribution — labels every résumé line with the section it
//! belongs to, and extracts the professional-summary block.
//!
//! Labeling is a single forward pass that tracks the current section while
//! iterating lines once. A header line labels itself, which makes the
//! output identical to a nearest-header-above backward scan.

use crate::analysis::lexicon::SUMMARY_EXTRACTION_INDICATORS;

/// Label used before any header has been seen.
pub const DEFAULT_SECTION: &str = "Professional Experience";

/// How many lines below a summary header are considered part of the block.
const SUMMARY_MAX_LINES: usize = 5;

/// One section label per line of the résumé, in order.
pub fn label_sections(resume: &str) -> Vec<&'static str> {
    let mut current = DEFAULT_SECTION;
    resume
        .lines()
        .map(|line| {
            if let Some(header) = match_header(line) {
                current = header;
            }
            current
        })
        .collect()
}

/// Header keyword matching. Check order matters: a line mentioning both
/// WORK and EDUCATION is attributed to Work Experience.
fn match_header(line: &str) -> Option<&'static str> {
    let upper = line.to_uppercase();

    if upper.contains("EXPERIENCE") || upper.contains("EMPLOYMENT") || upper.contains("WORK") {
        Some("Work Experience")
    } else if upper.contains("EDUCATION") {
        Some("Education")
    } else if upper.contains("SKILLS") {
        Some("Skills")
    } else if upper.contains("PROJECT") {
        Some("Projects")
    } else if upper.contains("SUMMARY") || upper.contains("PROFILE") {
        Some("Professional Summary")
    } else if upper.contains("ACHIEVEMENT") || upper.contains("ACCOMPLISHMENT") {
        Some("Achievements")
    } else {
        None
    }
}

/// Extracts the professional-summary block as a verbatim slice of the
/// source text.
///
/// The block starts at the first non-empty line after a summary header and
/// ends before the first empty line or a line mentioning experience or
/// education. Returning a contiguous `&str` slice (rather than re-joining
/// trimmed lines) keeps the round-trip invariant: the caller can find and
/// replace this exact text in the original document.
pub fn extract_summary_block(resume: &str) -> Option<&str> {
    let mut spans = Vec::new();
    let mut offset = 0usize;
    for line in resume.split('\n') {
        spans.push((offset, line));
        offset += line.len() + 1;
    }

    for (i, (_, line)) in spans.iter().enumerate() {
        let lower = line.to_lowercase();
        if !SUMMARY_EXTRACTION_INDICATORS.iter().any(|w| lower.contains(w)) {
            continue;
        }

        let mut start: Option<usize> = None;
        let mut end = 0usize;
        let last = (i + 1 + SUMMARY_MAX_LINES).min(spans.len());
        for &(line_start, body) in &spans[i + 1..last] {
            let body_lower = body.to_lowercase();
            if body.trim().is_empty()
                || body_lower.contains("experience")
                || body_lower.contains("education")
            {
                break;
            }
            let leading = body.len() - body.trim_start().len();
            if start.is_none() {
                start = Some(line_start + leading);
            }
            end = line_start + body.trim_end().len();
        }

        return start.map(|s| &resume[s..end]);
    }

    None
}
