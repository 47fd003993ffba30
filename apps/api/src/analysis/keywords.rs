//! Keyword extraction and missing-keyword detection.
//!
//! Extraction is a pure lexicon/length heuristic, not NLP: no stemming, no
//! embeddings. Known consequence: '+' is stripped during cleaning, so "c++"
//! degrades to a too-short token and vanishes. Downstream tie-breaks depend
//! on this exact behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::analysis::lexicon::{
    CRITICAL_SECTION_PHRASES, HIGH_VALUE_MARKERS, INDUSTRY_TERMS, SOFT_SKILLS, STOP_WORDS,
    TECHNICAL_PHRASES, TECHNICAL_TERMS,
};
use crate::models::analysis::{Importance, KeywordCategory, MissingKeyword};

/// Everything except word chars, whitespace, hyphen, and dot is noise.
/// Hyphen and dot survive so compound terms like "node.js" and "ci-cd" hold
/// together.
static NON_TOKEN_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.-]").unwrap());

/// How close (in bytes) a keyword must follow a critical-section phrase to
/// count as appearing in critical context.
const CRITICAL_CONTEXT_WINDOW: usize = 200;

/// Keywords kept per analysis, most critical first.
const MAX_MISSING_KEYWORDS: usize = 25;

/// Extracts significant keywords (single tokens plus matched 2/3-grams)
/// from free text. Deterministic and pure; the ordered set pins iteration
/// order, so every downstream tie-break is reproducible.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_TOKEN_CHARS.replace_all(&lowered, " ");

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(*w))
        .collect();

    let mut keywords = BTreeSet::new();

    for word in &words {
        if is_significant_keyword(word) {
            keywords.insert((*word).to_string());
        }
    }

    for pair in words.windows(2) {
        let phrase = format!("{} {}", pair[0], pair[1]);
        if is_significant_phrase(&phrase) {
            keywords.insert(phrase);
        }
    }

    for triple in words.windows(3) {
        let phrase = format!("{} {} {}", triple[0], triple[1], triple[2]);
        if is_significant_phrase(&phrase) {
            keywords.insert(phrase);
        }
    }

    keywords
}

fn is_significant_keyword(word: &str) -> bool {
    TECHNICAL_TERMS.contains(word)
        || SOFT_SKILLS.contains(word)
        || INDUSTRY_TERMS.contains(word)
        || word.len() > 4
}

fn is_significant_phrase(phrase: &str) -> bool {
    TECHNICAL_PHRASES.contains(&phrase)
        || phrase.contains("development")
        || phrase.contains("management")
        || phrase.contains("analysis")
}

/// Whole-word, case-insensitive occurrence count.
pub fn count_word_frequency(word: &str, text: &str) -> u32 {
    match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))) {
        Ok(re) => re.find_iter(text).count() as u32,
        Err(_) => 0,
    }
}

/// High-value keywords are included even at frequency 1.
pub fn is_high_value_keyword(word: &str) -> bool {
    TECHNICAL_TERMS.contains(word) || HIGH_VALUE_MARKERS.iter().any(|m| word.contains(m))
}

/// Buckets a keyword. Priority order: technical > soft > certification >
/// industry; industry is the default.
pub fn categorize_keyword(word: &str) -> KeywordCategory {
    if TECHNICAL_TERMS.contains(word)
        || word.contains("js")
        || word.contains("sql")
        || word.contains("api")
        || word.contains("framework")
        || word.contains("library")
    {
        return KeywordCategory::Technical;
    }

    if SOFT_SKILLS.contains(word)
        || word.contains("leadership")
        || word.contains("communication")
        || word.contains("management")
        || word.contains("collaboration")
    {
        return KeywordCategory::Soft;
    }

    if word.contains("certified")
        || word.contains("certificate")
        || word.contains("license")
        || word.contains("certification")
        || word.contains("aws")
        || word.contains("azure")
        || word.contains("google")
    {
        return KeywordCategory::Certification;
    }

    KeywordCategory::Industry
}

/// Importance assignment. The critical-context check uses the FIRST
/// occurrence of both the phrase and the word, so it is unsound for
/// repeated terms.
fn determine_importance(word: &str, frequency: u32, job_text: &str) -> Importance {
    let in_critical_context = CRITICAL_SECTION_PHRASES.iter().any(|phrase| {
        match (job_text.find(phrase), job_text.find(word)) {
            (Some(phrase_at), Some(word_at)) => {
                word_at > phrase_at && word_at < phrase_at + CRITICAL_CONTEXT_WINDOW
            }
            _ => false,
        }
    });

    let is_technical = TECHNICAL_TERMS.contains(word);

    if frequency >= 4 || in_critical_context || (is_technical && frequency >= 3) {
        return Importance::High;
    }

    if frequency >= 3 || is_technical || (SOFT_SKILLS.contains(word) && frequency >= 2) {
        return Importance::Medium;
    }

    Importance::Low
}

/// Finds job-description keywords absent from the résumé, prioritized by
/// importance then frequency (stable sort; ties keep lexicographic set
/// order), truncated to the top 25.
pub fn find_missing_keywords(
    resume_keywords: &BTreeSet<String>,
    job_keywords: &BTreeSet<String>,
    job_description: &str,
) -> Vec<MissingKeyword> {
    let job_text = job_description.to_lowercase();
    let mut missing = Vec::new();

    for word in job_keywords {
        if resume_keywords.contains(word) || word.len() <= 2 {
            continue;
        }

        let frequency = count_word_frequency(word, &job_text);

        // Keep only repeated or inherently high-value keywords.
        if frequency >= 2 || is_high_value_keyword(word) {
            missing.push(MissingKeyword {
                keyword: word.clone(),
                category: categorize_keyword(word),
                importance: determine_importance(word, frequency, &job_text),
                frequency,
            });
        }
    }

    missing.sort_by(|a, b| {
        b.importance
            .rank()
            .cmp(&a.importance.rank())
            .then(b.frequency.cmp(&a.frequency))
    });
    missing.truncate(MAX_MISSING_KEYWORDS);
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_drops_stop_words_and_short_tokens() {
        let kw = extract_keywords("the team and it is on an api");
        assert!(!kw.contains("the"));
        assert!(!kw.contains("and"));
        assert!(!kw.contains("it"));
        assert!(kw.contains("api"));
    }

    #[test]
    fn test_extract_keeps_lexicon_terms_and_long_words() {
        let kw = extract_keywords("deployed kubernetes microservices architecture");
        assert!(kw.contains("kubernetes"));
        assert!(kw.contains("microservices"));
        assert!(kw.contains("architecture"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "Built React dashboards with TypeScript and PostgreSQL for analytics teams.";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }

    #[test]
    fn test_extract_two_gram_technical_phrase() {
        let kw = extract_keywords("applied machine learning models in production");
        assert!(kw.contains("machine learning"));
    }

    #[test]
    fn test_extract_three_gram_technical_phrase() {
        let kw = extract_keywords("practiced test driven development daily");
        assert!(kw.contains("test driven development"));
    }

    #[test]
    fn test_extract_gram_with_management_substring() {
        let kw = extract_keywords("owned stakeholder management duties");
        assert!(kw.contains("stakeholder management"));
    }

    #[test]
    fn test_plus_sign_is_stripped_so_cpp_vanishes() {
        // "c++" cleans to "c", which is too short to keep. Accepted contract.
        let kw = extract_keywords("expert c++ developer");
        assert!(!kw.contains("c++"));
        assert!(!kw.contains("c"));
        assert!(kw.contains("developer"));
    }

    #[test]
    fn test_count_word_frequency_whole_word_only() {
        assert_eq!(count_word_frequency("java", "java javascript java"), 2);
        assert_eq!(count_word_frequency("go", "go golang going go"), 2);
    }

    #[test]
    fn test_count_word_frequency_case_insensitive() {
        assert_eq!(count_word_frequency("rust", "Rust RUST rust"), 3);
    }

    #[test]
    fn test_high_value_detection() {
        assert!(is_high_value_keyword("kubernetes"));
        assert!(is_high_value_keyword("required"));
        assert!(is_high_value_keyword("senior-level"));
        assert!(!is_high_value_keyword("weather"));
    }

    #[test]
    fn test_categorize_priority_order() {
        assert_eq!(categorize_keyword("kubernetes"), KeywordCategory::Technical);
        // "aws" is in the technical lexicon, so technical wins over the
        // certification substring rule.
        assert_eq!(categorize_keyword("aws"), KeywordCategory::Technical);
        assert_eq!(categorize_keyword("aws-certified"), KeywordCategory::Technical);
        assert_eq!(categorize_keyword("leadership"), KeywordCategory::Soft);
        assert_eq!(categorize_keyword("google-cloud"), KeywordCategory::Certification);
        assert_eq!(categorize_keyword("fintech"), KeywordCategory::Industry);
    }

    #[test]
    fn test_categorize_substring_heuristics() {
        assert_eq!(categorize_keyword("nextjs"), KeywordCategory::Technical);
        assert_eq!(categorize_keyword("postgresql"), KeywordCategory::Technical);
        assert_eq!(categorize_keyword("people-management"), KeywordCategory::Soft);
    }

    #[test]
    fn test_find_missing_requires_repeat_or_high_value() {
        let resume_kw = extract_keywords("generalist engineer");
        let job_kw = extract_keywords("wonderful wonderful opportunity awaits kubernetes");
        let jd = "wonderful wonderful opportunity awaits kubernetes. \
                  Requirements: skills for this role and team.";
        let missing = find_missing_keywords(&resume_kw, &job_kw, jd);

        // "wonderful" repeats; "kubernetes" is high-value at frequency 1;
        // "opportunity"/"awaits" appear once and are not high-value.
        let names: Vec<&str> = missing.iter().map(|k| k.keyword.as_str()).collect();
        assert!(names.contains(&"wonderful"));
        assert!(names.contains(&"kubernetes"));
        assert!(!names.contains(&"awaits"));
    }

    #[test]
    fn test_repeated_requirement_keyword_is_high_importance() {
        // Scenario: "Kubernetes" five times in a Requirements section,
        // absent from the résumé.
        let jd = "Requirements: Kubernetes expertise. Kubernetes deployments, \
                  Kubernetes operators, Kubernetes networking, Kubernetes security.";
        let resume_kw = extract_keywords("Python developer with Django experience");
        let job_kw = extract_keywords(jd);
        let missing = find_missing_keywords(&resume_kw, &job_kw, jd);

        let k8s = missing
            .iter()
            .find(|k| k.keyword == "kubernetes")
            .expect("kubernetes should be missing");
        assert_eq!(k8s.category, KeywordCategory::Technical);
        assert_eq!(k8s.importance, Importance::High);
        assert_eq!(k8s.frequency, 5);
    }

    #[test]
    fn test_technical_absent_once_is_medium() {
        let jd = "We also touch terraform occasionally in this role. \
                  Requirements exist; qualifications too; responsibilities as well. \
                  The position needs a candidate for our team with many skills.";
        let resume_kw = BTreeSet::new();
        let job_kw = extract_keywords(jd);
        let missing = find_missing_keywords(&resume_kw, &job_kw, jd);
        let tf = missing.iter().find(|k| k.keyword == "terraform").unwrap();
        // Frequency 1 and far from any critical-section phrase window, but
        // technical membership floors it at medium.
        assert!(matches!(tf.importance, Importance::Medium | Importance::High));
    }

    #[test]
    fn test_missing_sorted_by_importance_then_frequency() {
        let jd = "Requirements: kubernetes kubernetes kubernetes kubernetes. \
                  banana banana banana banana banana banana. cherry cherry.";
        let resume_kw = BTreeSet::new();
        let job_kw = extract_keywords(jd);
        let missing = find_missing_keywords(&resume_kw, &job_kw, jd);

        let ranks: Vec<u8> = missing.iter().map(|k| k.importance.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted, "not sorted by importance: {missing:?}");

        for pair in missing.windows(2) {
            if pair[0].importance == pair[1].importance {
                assert!(pair[0].frequency >= pair[1].frequency);
            }
        }
    }

    #[test]
    fn test_missing_truncated_to_25() {
        let jd_words: Vec<String> = (0..40)
            .map(|i| format!("specialword{i:02} specialword{i:02}"))
            .collect();
        let jd = format!(
            "Requirements qualifications responsibilities: {}",
            jd_words.join(" ")
        );
        let resume_kw = BTreeSet::new();
        let job_kw = extract_keywords(&jd);
        let missing = find_missing_keywords(&resume_kw, &job_kw, &jd);
        assert_eq!(missing.len(), 25);
    }

    #[test]
    fn test_keyword_present_in_resume_not_missing() {
        let jd = "Requirements: docker docker docker for this role and team skills.";
        let resume_kw = extract_keywords("I ship docker containers");
        let job_kw = extract_keywords(jd);
        let missing = find_missing_keywords(&resume_kw, &job_kw, jd);
        assert!(missing.iter().all(|k| k.keyword != "docker"));
    }
}
