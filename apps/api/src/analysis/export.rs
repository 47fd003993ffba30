//! Optimized-résumé builder — substitutes accepted rewrites back into the
//! source text and appends an optimization-notes footer.

use crate::models::analysis::{Importance, MissingKeyword, RewrittenSection};

/// High-priority keywords listed in the footer.
const MAX_FOOTER_KEYWORDS: usize = 10;

/// Replaces each rewritten section's `original` with its `rewritten` text
/// (first occurrence, literal match) and appends an OPTIMIZATION NOTES
/// footer naming up to ten high-priority missing keywords. Returns the
/// optimized text and how many sections were actually substituted.
///
/// Because every `original` is a verbatim substring of the analyzed résumé,
/// all replacements succeed when the caller passes the same résumé text the
/// analysis ran on.
pub fn build_optimized_resume(
    resume: &str,
    rewritten: &[RewrittenSection],
    missing: &[MissingKeyword],
) -> (String, usize) {
    let mut optimized = resume.to_string();
    let mut replaced = 0usize;

    for section in rewritten {
        if optimized.contains(&section.original) {
            optimized = optimized.replacen(&section.original, &section.rewritten, 1);
            replaced += 1;
        }
    }

    let high_priority: Vec<&str> = missing
        .iter()
        .filter(|k| k.importance == Importance::High)
        .take(MAX_FOOTER_KEYWORDS)
        .map(|k| k.keyword.as_str())
        .collect();

    if !high_priority.is_empty() {
        optimized.push_str("\n\n---\nOPTIMIZATION NOTES\n");
        optimized.push_str("Consider incorporating these high-priority keywords: ");
        optimized.push_str(&high_priority.join(", "));
        optimized.push('\n');
    }

    (optimized, replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::KeywordCategory;

    fn rewrite(original: &str, rewritten: &str) -> RewrittenSection {
        RewrittenSection {
            original: original.to_string(),
            rewritten: rewritten.to_string(),
            improvements: vec![],
            section: "Work Experience".to_string(),
        }
    }

    fn high(keyword: &str) -> MissingKeyword {
        MissingKeyword {
            keyword: keyword.to_string(),
            category: KeywordCategory::Technical,
            importance: Importance::High,
            frequency: 4,
        }
    }

    #[test]
    fn test_replaces_all_matching_sections() {
        let resume = "intro\nweak bullet one\nweak bullet two\noutro";
        let rewrites = [
            rewrite("weak bullet one", "Strong bullet one."),
            rewrite("weak bullet two", "Strong bullet two."),
        ];
        let (optimized, replaced) = build_optimized_resume(resume, &rewrites, &[]);
        assert_eq!(replaced, 2);
        assert!(optimized.contains("Strong bullet one."));
        assert!(optimized.contains("Strong bullet two."));
        assert!(!optimized.contains("weak bullet"));
    }

    #[test]
    fn test_footer_lists_high_priority_keywords() {
        let missing = [high("kubernetes"), high("terraform")];
        let (optimized, _) = build_optimized_resume("resume text", &[], &missing);
        assert!(optimized.contains("OPTIMIZATION NOTES"));
        assert!(optimized.contains("kubernetes, terraform"));
    }

    #[test]
    fn test_footer_omitted_without_high_priority() {
        let low = MissingKeyword {
            keyword: "fintech".to_string(),
            category: KeywordCategory::Industry,
            importance: Importance::Low,
            frequency: 2,
        };
        let (optimized, _) = build_optimized_resume("resume text", &[], &[low]);
        assert_eq!(optimized, "resume text");
    }

    #[test]
    fn test_footer_caps_at_ten_keywords() {
        let missing: Vec<MissingKeyword> =
            (0..15).map(|i| high(&format!("term{i:02}"))).collect();
        let (optimized, _) = build_optimized_resume("resume text", &[], &missing);
        assert!(optimized.contains("term09"));
        assert!(!optimized.contains("term10"));
    }

    #[test]
    fn test_unmatched_original_is_counted_out() {
        let rewrites = [rewrite("not present anywhere", "replacement")];
        let (optimized, replaced) = build_optimized_resume("resume text", &rewrites, &[]);
        assert_eq!(replaced, 0);
        assert_eq!(optimized, "resume text");
    }

    #[test]
    fn test_first_occurrence_only() {
        let resume = "dup line\ndup line";
        let rewrites = [rewrite("dup line", "new line")];
        let (optimized, replaced) = build_optimized_resume(resume, &rewrites, &[]);
        assert_eq!(replaced, 1);
        assert_eq!(optimized, "new line\ndup line");
    }
}
