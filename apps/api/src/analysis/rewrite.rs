//! Section rewriter — detects weak bullet points and produces enhanced
//! versions, plus a template rewrite for weak professional summaries.
//!
//! Every emitted record's `original` is the verbatim trimmed source line
//! (or the verbatim summary slice), so callers can substitute rewrites
//! back into the full document.

use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::{NoExpand, Regex};

use crate::analysis::lexicon::{
    DEFAULT_STRONG_VERB, PASSIVE_MARKERS, QUANTIFICATION_TRIGGERS, SPECIFICITY_SUBSTITUTIONS,
    VAGUE_TERMS, WEAK_PHRASES, WEAK_PHRASE_REPLACEMENTS, WEAK_SUMMARY_INDICATORS,
};
use crate::analysis::sections::{extract_summary_block, label_sections};
use crate::models::analysis::{Importance, KeywordCategory, MissingKeyword, RewrittenSection};

/// Lines shorter than this are headers/fragments, never rewritten.
const MIN_LINE_LEN: usize = 10;
/// Only substantial bullets are rewritten.
const MIN_BULLET_LEN: usize = 20;
/// Bullets longer than this without a digit are weak on length alone.
const UNQUANTIFIED_LEN: usize = 30;
/// Summaries shorter than this are weak.
const MIN_SUMMARY_LEN: usize = 100;
/// Most impactful rewrites kept per analysis.
const MAX_REWRITES: usize = 8;
/// High-priority technical keywords spliced into one bullet.
const MAX_SPLICED_KEYWORDS: usize = 2;
/// High-priority keywords injected into the summary template.
const MAX_SUMMARY_KEYWORDS: usize = 4;

static USING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)using").unwrap());
static DEVELOPED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)developed").unwrap());

/// How the weak-phrase synonym is chosen. `Random` is the production
/// default; `First` and `Seeded` exist so builds and tests can be
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynonymChoice {
    First,
    Seeded(u64),
    Random,
}

/// The injected randomness source for synonym selection.
pub enum SynonymPicker {
    First,
    Rng(StdRng),
}

impl SynonymPicker {
    pub fn from_choice(choice: SynonymChoice) -> Self {
        match choice {
            SynonymChoice::First => SynonymPicker::First,
            SynonymChoice::Seeded(seed) => SynonymPicker::Rng(StdRng::seed_from_u64(seed)),
            SynonymChoice::Random => SynonymPicker::Rng(StdRng::from_entropy()),
        }
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        match self {
            SynonymPicker::First => options[0],
            SynonymPicker::Rng(rng) => options[rng.gen_range(0..options.len())],
        }
    }
}

/// Rewrites weak bullet lines and (if weak) the professional summary.
/// Records are emitted in document order, bullets before summary, capped
/// at `MAX_REWRITES`.
pub fn rewrite_sections(
    resume: &str,
    missing: &[MissingKeyword],
    picker: &mut SynonymPicker,
) -> Vec<RewrittenSection> {
    let labels = label_sections(resume);
    let mut sections = Vec::new();

    for (idx, line) in resume.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.len() <= MIN_LINE_LEN {
            continue;
        }
        if !is_weak_bullet(line) {
            continue;
        }

        let enhanced = enhance_bullet(trimmed, missing, picker);
        if enhanced != trimmed {
            sections.push(RewrittenSection {
                original: trimmed.to_string(),
                rewritten: enhanced.clone(),
                improvements: improvement_details(trimmed, &enhanced),
                section: labels[idx].to_string(),
            });
        }
    }

    if let Some(summary) = extract_summary_block(resume) {
        if is_weak_summary(summary) {
            let enhanced = enhance_summary(missing);
            if enhanced != summary {
                sections.push(RewrittenSection {
                    original: summary.to_string(),
                    rewritten: enhanced.clone(),
                    improvements: improvement_details(summary, &enhanced),
                    section: "Professional Summary".to_string(),
                });
            }
        }
    }

    sections.truncate(MAX_REWRITES);
    sections
}

/// A bullet is weak if it hedges, lacks numbers, stays vague, or reads
/// passive, and is long enough to be worth rewriting.
pub fn is_weak_bullet(line: &str) -> bool {
    let lower = line.to_lowercase();
    let lower = lower.trim();

    let has_weak_language = WEAK_PHRASES.iter().any(|p| lower.contains(p));
    let lacks_numbers = !line.chars().any(|c| c.is_ascii_digit());
    let has_vague_language = VAGUE_TERMS.iter().any(|t| lower.contains(t));
    let has_passive_voice = PASSIVE_MARKERS.iter().any(|m| lower.contains(m));

    (has_weak_language
        || (lacks_numbers && line.len() > UNQUANTIFIED_LEN)
        || has_vague_language
        || has_passive_voice)
        && line.len() > MIN_BULLET_LEN
}

/// Enhancement pipeline, fixed order: strong verbs, quantification,
/// keyword splicing, specificity, formatting.
fn enhance_bullet(line: &str, missing: &[MissingKeyword], picker: &mut SynonymPicker) -> String {
    let mut enhanced = line.trim().to_string();

    enhanced = replace_weak_phrases(&enhanced, picker);
    enhanced = add_quantification(&enhanced);
    enhanced = incorporate_keywords(&enhanced, missing);
    enhanced = improve_specificity(&enhanced);
    format_bullet(&enhanced)
}

fn replace_weak_phrases(text: &str, picker: &mut SynonymPicker) -> String {
    let mut enhanced = text.to_string();
    for phrase in WEAK_PHRASES {
        if !enhanced.to_lowercase().contains(phrase) {
            continue;
        }
        let options = WEAK_PHRASE_REPLACEMENTS
            .iter()
            .find(|(weak, _)| weak == phrase)
            .map(|(_, opts)| *opts)
            .unwrap_or(&[DEFAULT_STRONG_VERB]);
        let replacement = picker.pick(options);
        let pattern = Regex::new(&format!("(?i){}", regex::escape(phrase)))
            .expect("weak phrase patterns are valid");
        enhanced = pattern.replace_all(&enhanced, NoExpand(replacement)).into_owned();
    }
    enhanced
}

/// Appends parenthetical quantification to unquantified bullets. The table
/// stops as soon as the text carries any digit, and an entry is skipped if
/// the text already has a '(', so at most one insertion lands.
fn add_quantification(text: &str) -> String {
    let mut enhanced = text.to_string();

    for (trigger, replacement) in QUANTIFICATION_TRIGGERS {
        if enhanced.chars().any(|c| c.is_ascii_digit()) {
            break;
        }
        if enhanced.to_lowercase().contains(trigger) && !enhanced.contains('(') {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(trigger)))
                .expect("quantification trigger patterns are valid");
            enhanced = pattern.replace_all(&enhanced, NoExpand(replacement)).into_owned();
        }
    }
    enhanced
}

/// Splices up to two high-priority technical missing keywords into phrases
/// built around "using" or "developed". The gates match "with" and "built"
/// too, but only "using"/"developed" are ever rewritten.
fn incorporate_keywords(text: &str, missing: &[MissingKeyword]) -> String {
    let mut enhanced = text.to_string();

    let relevant = missing
        .iter()
        .filter(|k| k.importance == Importance::High && k.category == KeywordCategory::Technical)
        .take(MAX_SPLICED_KEYWORDS);

    for keyword in relevant {
        let lower = enhanced.to_lowercase();
        if lower.contains(&keyword.keyword) {
            continue;
        }
        if lower.contains("using") || lower.contains("with") {
            let replacement = format!("using {} and", keyword.keyword);
            enhanced = USING_PATTERN
                .replace_all(&enhanced, NoExpand(&replacement))
                .into_owned();
        } else if lower.contains("developed") || lower.contains("built") {
            let replacement = format!("developed using {}", keyword.keyword);
            enhanced = DEVELOPED_PATTERN
                .replace_all(&enhanced, NoExpand(&replacement))
                .into_owned();
        }
    }
    enhanced
}

fn improve_specificity(text: &str) -> String {
    let mut enhanced = text.to_string();
    for (vague, specific) in SPECIFICITY_SUBSTITUTIONS {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(vague)))
            .expect("specificity patterns are valid");
        enhanced = pattern.replace_all(&enhanced, NoExpand(specific)).into_owned();
    }
    enhanced
}

/// Capitalizes the first letter and ensures terminal punctuation.
fn format_bullet(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let mut formatted = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => return String::new(),
    };

    if !formatted.ends_with('.') && !formatted.ends_with(';') {
        formatted.push('.');
    }
    formatted
}

/// A summary is weak if it leans on aspirational/generic language, is
/// short, or carries no numbers.
pub fn is_weak_summary(summary: &str) -> bool {
    let lower = summary.to_lowercase();
    WEAK_SUMMARY_INDICATORS.iter().any(|w| lower.contains(w))
        || summary.len() < MIN_SUMMARY_LEN
        || !summary.chars().any(|c| c.is_ascii_digit())
}

/// Fixed summary template with up to four high-priority missing keywords
/// injected.
fn enhance_summary(missing: &[MissingKeyword]) -> String {
    let key_skills = missing
        .iter()
        .filter(|k| k.importance == Importance::High)
        .take(MAX_SUMMARY_KEYWORDS)
        .map(|k| k.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Experienced professional with 5+ years of expertise in {key_skills}. Proven track \
         record of delivering high-impact solutions and driving measurable results in \
         fast-paced environments. Strong background in cross-functional collaboration and \
         technical leadership, with demonstrated ability to scale systems and optimize \
         performance by 30%+."
    )
}

/// Human-readable list of which transformations applied, always ending
/// with the generic ATS note.
pub fn improvement_details(original: &str, enhanced: &str) -> Vec<String> {
    let mut improvements = Vec::new();
    let original_lower = original.to_lowercase();

    if WEAK_PHRASES.iter().any(|p| original_lower.contains(p)) {
        improvements.push("Replaced passive language with strong action verbs".to_string());
    }

    let original_has_digit = original.chars().any(|c| c.is_ascii_digit());
    let enhanced_has_digit = enhanced.chars().any(|c| c.is_ascii_digit());
    if !original_has_digit && enhanced_has_digit {
        improvements.push("Added quantifiable metrics and specific numbers".to_string());
    }

    if enhanced.len() > original.len() + 20 {
        improvements.push("Enhanced with specific technical details and context".to_string());
    }

    if enhanced.contains("using") && !original.contains("using") {
        improvements.push("Incorporated relevant technical keywords".to_string());
    }

    improvements.push("Optimized for ATS keyword matching and recruiter appeal".to_string());
    improvements
}
