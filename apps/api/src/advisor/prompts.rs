//! Prompt templates for the advisor. The template embeds the résumé, job
//! description, optional prior analysis summary, and the user's question.

use crate::advisor::AnalysisContext;

/// Missing keywords named in the prompt's analysis summary.
const MAX_CONTEXT_KEYWORDS: usize = 5;

pub fn build_advisor_prompt(
    question: &str,
    resume: &str,
    job_description: &str,
    context: Option<&AnalysisContext>,
) -> String {
    let analysis_block = match context {
        Some(ctx) => {
            let keywords = ctx
                .missing_keywords
                .iter()
                .take(MAX_CONTEXT_KEYWORDS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "PREVIOUS ANALYSIS RESULTS:\n\
                 - Overall Score: {}%\n\
                 - ATS Compatibility: {}%\n\
                 - Missing Keywords: {}\n\n",
                ctx.overall_score, ctx.ats_compatibility, keywords
            )
        }
        None => String::new(),
    };

    format!(
        "You are a professional HR expert and resume optimization specialist. You have \
         access to:\n\n\
         RESUME CONTENT:\n{resume}\n\n\
         JOB DESCRIPTION:\n{job_description}\n\n\
         {analysis_block}\
         USER QUESTION: {question}\n\n\
         Please provide specific, actionable advice for improving this resume for the \
         target job. Focus on:\n\
         1. Concrete suggestions with examples\n\
         2. ATS optimization tips\n\
         3. Keyword integration strategies\n\
         4. Content enhancement recommendations\n\
         5. Formatting and structure improvements\n\n\
         Keep your response professional, detailed, and directly applicable to their \
         specific situation."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_inputs() {
        let prompt = build_advisor_prompt("How do I improve?", "MY RESUME", "THE JOB", None);
        assert!(prompt.contains("MY RESUME"));
        assert!(prompt.contains("THE JOB"));
        assert!(prompt.contains("USER QUESTION: How do I improve?"));
        assert!(!prompt.contains("PREVIOUS ANALYSIS RESULTS"));
    }

    #[test]
    fn test_prompt_includes_analysis_summary_when_present() {
        let ctx = AnalysisContext {
            overall_score: 72,
            ats_compatibility: 64,
            missing_keywords: vec!["kubernetes".to_string(), "terraform".to_string()],
        };
        let prompt = build_advisor_prompt("q", "r", "jd", Some(&ctx));
        assert!(prompt.contains("Overall Score: 72%"));
        assert!(prompt.contains("ATS Compatibility: 64%"));
        assert!(prompt.contains("kubernetes, terraform"));
    }

    #[test]
    fn test_prompt_caps_context_keywords_at_five() {
        let ctx = AnalysisContext {
            overall_score: 50,
            ats_compatibility: 50,
            missing_keywords: (0..8).map(|i| format!("term{i}")).collect(),
        };
        let prompt = build_advisor_prompt("q", "r", "jd", Some(&ctx));
        assert!(prompt.contains("term4"));
        assert!(!prompt.contains("term5"));
    }
}
