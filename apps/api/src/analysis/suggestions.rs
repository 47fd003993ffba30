//! Suggestion generator — nine ordered rules over the missing-keyword list
//! and the document signals. Generation order is the display order.

use crate::analysis::signals::{
    count_weak_verbs, has_ats_formatting_issues, has_professional_summary,
    has_structured_skills_section, quantification_score,
};
use crate::models::analysis::{
    Importance, KeywordCategory, MissingKeyword, Priority, Suggestion, SuggestionType,
};

const MAX_SUGGESTIONS: usize = 10;

/// Thresholds for the keyword-gap rules.
const TECHNICAL_GAP_THRESHOLD: usize = 3;
const INDUSTRY_GAP_THRESHOLD: usize = 2;
/// Below this quantification score the résumé reads unmeasured.
const LOW_QUANTIFICATION: u32 = 3;
/// More weak verbs than this warrants a dedicated suggestion.
const WEAK_VERB_THRESHOLD: u32 = 3;

fn keyword_list(keywords: &[&MissingKeyword], limit: usize) -> String {
    keywords
        .iter()
        .take(limit)
        .map(|k| k.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn generate_suggestions(resume: &str, missing: &[MissingKeyword]) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // 1. Critical missing keywords.
    let high_priority: Vec<&MissingKeyword> = missing
        .iter()
        .filter(|k| k.importance == Importance::High)
        .collect();
    if !high_priority.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionType::Keywords,
            title: "Add Critical Missing Keywords".to_string(),
            description: format!(
                "Your resume is missing {} high-priority keywords that appear frequently in \
                 the job description. Focus on incorporating: {}. These should be naturally \
                 integrated into your experience descriptions and skills section.",
                high_priority.len(),
                keyword_list(&high_priority, 5)
            ),
            priority: Priority::High,
            section: None,
        });
    }

    // 2. Technical skills gap.
    let technical: Vec<&MissingKeyword> = missing
        .iter()
        .filter(|k| k.category == KeywordCategory::Technical)
        .collect();
    if technical.len() > TECHNICAL_GAP_THRESHOLD {
        suggestions.push(Suggestion {
            kind: SuggestionType::Keywords,
            title: "Expand Technical Skills Section".to_string(),
            description: format!(
                "Add a comprehensive technical skills section including: {}. Group skills by \
                 category (Programming Languages, Frameworks, Tools, etc.) for better \
                 readability.",
                keyword_list(&technical, 8)
            ),
            priority: Priority::High,
            section: Some("Technical Skills".to_string()),
        });
    }

    // 3. ATS formatting.
    if has_ats_formatting_issues(resume) {
        suggestions.push(Suggestion {
            kind: SuggestionType::Formatting,
            title: "Fix ATS Compatibility Issues".to_string(),
            description: "Your resume contains formatting that may cause ATS parsing errors. \
                          Use standard bullet points, avoid tables and columns, remove \
                          graphics, and use standard section headers like \"Work Experience\" \
                          and \"Education\"."
                .to_string(),
            priority: Priority::High,
            section: Some("Formatting".to_string()),
        });
    }

    // 4. Quantification.
    if quantification_score(resume) < LOW_QUANTIFICATION {
        suggestions.push(Suggestion {
            kind: SuggestionType::Content,
            title: "Add Quantifiable Achievements".to_string(),
            description: "Include specific numbers, percentages, and metrics to demonstrate \
                          impact. Examples: \"Increased sales by 25%\", \"Managed team of \
                          12\", \"Reduced processing time by 40%\", \"Handled 500+ customer \
                          inquiries daily\"."
                .to_string(),
            priority: Priority::High,
            section: Some("Work Experience".to_string()),
        });
    }

    // 5. Professional summary.
    if !has_professional_summary(resume) {
        suggestions.push(Suggestion {
            kind: SuggestionType::Structure,
            title: "Add Professional Summary".to_string(),
            description: "Include a compelling 3-4 line professional summary at the top \
                          highlighting your key qualifications, years of experience, and \
                          value proposition aligned with the target role."
                .to_string(),
            priority: Priority::Medium,
            section: Some("Professional Summary".to_string()),
        });
    }

    // 6. Weak action verbs.
    let weak_verb_count = count_weak_verbs(resume);
    if weak_verb_count > WEAK_VERB_THRESHOLD {
        suggestions.push(Suggestion {
            kind: SuggestionType::Content,
            title: "Strengthen Action Verbs".to_string(),
            description: format!(
                "Replace {weak_verb_count} instances of weak language with powerful action \
                 verbs. Instead of \"responsible for\" use \"led\", \"managed\", or \
                 \"oversaw\". Replace \"worked on\" with \"developed\", \"implemented\", or \
                 \"executed\"."
            ),
            priority: Priority::Medium,
            section: Some("Work Experience".to_string()),
        });
    }

    // 7. Skills section structure.
    if !has_structured_skills_section(resume) {
        suggestions.push(Suggestion {
            kind: SuggestionType::Structure,
            title: "Optimize Skills Section".to_string(),
            description: "Create a well-organized skills section with categories: Technical \
                          Skills, Programming Languages, Frameworks/Libraries, Tools & \
                          Platforms, and Soft Skills. This improves ATS parsing and recruiter \
                          scanning."
                .to_string(),
            priority: Priority::Medium,
            section: Some("Skills".to_string()),
        });
    }

    // 8. Industry terminology.
    let industry: Vec<&MissingKeyword> = missing
        .iter()
        .filter(|k| k.category == KeywordCategory::Industry)
        .collect();
    if industry.len() > INDUSTRY_GAP_THRESHOLD {
        suggestions.push(Suggestion {
            kind: SuggestionType::Keywords,
            title: "Include Industry Terminology".to_string(),
            description: format!(
                "Incorporate industry-specific terms: {}. This demonstrates domain knowledge \
                 and improves keyword matching.",
                keyword_list(&industry, 5)
            ),
            priority: Priority::Medium,
            section: Some("Experience".to_string()),
        });
    }

    // 9. Certifications.
    let certifications: Vec<&MissingKeyword> = missing
        .iter()
        .filter(|k| k.category == KeywordCategory::Certification)
        .collect();
    if !certifications.is_empty() {
        suggestions.push(Suggestion {
            kind: SuggestionType::Keywords,
            title: "Highlight Relevant Certifications".to_string(),
            description: format!(
                "If you have certifications in {}, make sure they're prominently displayed. \
                 If not, consider pursuing these certifications to strengthen your candidacy.",
                keyword_list(&certifications, 3)
            ),
            priority: Priority::Low,
            section: Some("Certifications".to_string()),
        });
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
