//! Analysis engine — a deterministic, rule-based pipeline from two text
//! blobs (résumé, job description) to one structured report.
//!
//! Every stage past validation is pure and total; the engine holds no
//! state between calls beyond the read-only lexicons, so concurrent calls
//! with independent inputs are safe. Checkpoint logging via `tracing` is
//! observability only, never required for correctness.

pub mod export;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
pub mod rewrite;
pub mod scoring;
pub mod sections;
pub mod signals;
pub mod suggestions;
pub mod validation;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use self::rewrite::{SynonymChoice, SynonymPicker};

/// Per-call engine options.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerOptions {
    pub synonym_choice: SynonymChoice,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            synonym_choice: SynonymChoice::Random,
        }
    }
}

impl AnalyzerOptions {
    /// Deterministic configuration: rewrites always pick the first synonym.
    pub fn deterministic() -> Self {
        Self {
            synonym_choice: SynonymChoice::First,
        }
    }
}

/// Runs the full analysis. Fails only on invalid input; all scoring stages
/// are total over validated text.
pub fn analyze(
    resume: &str,
    job_description: &str,
    options: &AnalyzerOptions,
) -> Result<AnalysisResult, AppError> {
    validation::validate(resume, job_description)?;

    let resume_keywords = keywords::extract_keywords(resume);
    let job_keywords = keywords::extract_keywords(job_description);
    debug!(
        resume_keywords = resume_keywords.len(),
        job_keywords = job_keywords.len(),
        "extracted keywords"
    );

    let missing_keywords =
        keywords::find_missing_keywords(&resume_keywords, &job_keywords, job_description);
    debug!(missing = missing_keywords.len(), "missing keywords detected");

    let suggestions = suggestions::generate_suggestions(resume, &missing_keywords);

    let mut picker = SynonymPicker::from_choice(options.synonym_choice);
    let rewritten_sections = rewrite::rewrite_sections(resume, &missing_keywords, &mut picker);
    debug!(rewrites = rewritten_sections.len(), "sections rewritten");

    let overall_score = scoring::overall_score(resume, &missing_keywords);
    let ats_compatibility = scoring::ats_compatibility(resume, &missing_keywords);
    let detailed_breakdown =
        scoring::detailed_breakdown(resume, &missing_keywords, job_keywords.len());
    let section_grades =
        scoring::section_grades(resume, detailed_breakdown.keyword_match_percentage);
    let ats_issues = scoring::ats_issues(resume);
    let next_steps = scoring::next_steps(resume, &missing_keywords, ats_compatibility);

    info!(overall_score, ats_compatibility, "analysis complete");

    Ok(AnalysisResult {
        missing_keywords,
        suggestions,
        rewritten_sections,
        overall_score,
        ats_compatibility,
        detailed_breakdown,
        section_grades,
        ats_issues,
        next_steps,
    })
}
