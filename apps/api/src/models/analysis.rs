//! Report data model — every type the analysis engine emits, plus the
//! request/response envelopes for the HTTP surface.
//!
//! One `AnalysisResult` is created per `analyze()` call, returned by value,
//! and never referenced by the engine afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned to a missing keyword. Priority order when a word could
/// fit several buckets: technical > soft > certification > industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Technical,
    Soft,
    Industry,
    Certification,
}

/// Importance of a missing keyword, assigned once and never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// Rank for sorting: high > medium > low.
    pub fn rank(self) -> u8 {
        match self {
            Importance::High => 3,
            Importance::Medium => 2,
            Importance::Low => 1,
        }
    }
}

/// A keyword present in the job description but absent from the résumé.
/// Unique by keyword text within one result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub keyword: String,
    pub category: KeywordCategory,
    pub importance: Importance,
    /// Whole-word occurrence count in the job description, always >= 1.
    pub frequency: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Formatting,
    Content,
    Structure,
    Keywords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One actionable improvement suggestion. Unordered except by generation
/// order, which doubles as the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// A rewritten résumé fragment.
///
/// INVARIANT: `original` is a byte-exact substring of the input résumé, so
/// the caller can string-replace it back into the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewrittenSection {
    pub original: String,
    pub rewritten: String,
    pub improvements: Vec<String>,
    pub section: String,
}

/// Six sub-scores, each an integer in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedBreakdown {
    pub keyword_match_percentage: u32,
    pub content_quality_score: u32,
    pub formatting_score: u32,
    pub structure_score: u32,
    pub quantification_level: u32,
    pub action_verb_strength: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Fixed cutoffs: >=90 A, >=80 B, >=70 C, >=60 D, else F.
    pub fn from_score(score: u32) -> Self {
        match score {
            90..=u32::MAX => LetterGrade::A,
            80..=89 => LetterGrade::B,
            70..=79 => LetterGrade::C,
            60..=69 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }
}

/// Per-section evaluation for the four sections of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionGrade {
    pub section: String,
    pub grade: LetterGrade,
    pub score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Warning,
    Minor,
}

/// A structured ATS parsing risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsIssue {
    #[serde(rename = "type")]
    pub severity: IssueSeverity,
    pub issue: String,
    pub impact: String,
    pub solution: String,
}

/// A prioritized action item. `priority` 1 is the most urgent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStep {
    pub priority: u32,
    pub action: String,
    pub description: String,
    pub estimated_impact: String,
    pub time_required: String,
}

/// The complete, immutable analysis report. Owned by the caller after
/// return; the engine retains no reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub missing_keywords: Vec<MissingKeyword>,
    pub suggestions: Vec<Suggestion>,
    pub rewritten_sections: Vec<RewrittenSection>,
    pub overall_score: u32,
    pub ats_compatibility: u32,
    pub detailed_breakdown: DetailedBreakdown,
    pub section_grades: Vec<SectionGrade>,
    pub ats_issues: Vec<AtsIssue>,
    pub next_steps: Vec<NextStep>,
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP envelopes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub resume: String,
    pub rewritten_sections: Vec<RewrittenSection>,
    pub missing_keywords: Vec<MissingKeyword>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub optimized_resume: String,
    /// How many rewritten sections were actually substituted back in.
    pub replaced_sections: usize,
}
