//! Scoring and grading — five independent pure computations, each starting
//! from a 100 baseline and subtracting fixed penalties, clamped to [0,100].
//! All functions are total over validated input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::lexicon::{REQUIRED_SECTIONS, STRONG_ACTION_VERBS};
use crate::analysis::rewrite::is_weak_summary;
use crate::analysis::sections::extract_summary_block;
use crate::analysis::signals::{
    count_weak_verbs, has_ats_formatting_issues, has_bullet_markers, has_professional_summary,
    has_structured_skills_section, missing_required_sections, quantification_score,
    technical_keyword_density, technical_term_count,
};
use crate::analysis::validation::has_contact_info;
use crate::models::analysis::{
    AtsIssue, DetailedBreakdown, Importance, IssueSeverity, LetterGrade, MissingKeyword, NextStep,
    SectionGrade,
};

// Overall-score penalties.
const HIGH_MISSING_PENALTY: i64 = 8;
const MEDIUM_MISSING_PENALTY: i64 = 4;
const FORMATTING_PENALTY: i64 = 15;
const NO_SUMMARY_PENALTY: i64 = 10;
const UNSTRUCTURED_SKILLS_PENALTY: i64 = 8;
const LOW_QUANTIFICATION_PENALTY: i64 = 12;
const MODERATE_QUANTIFICATION_PENALTY: i64 = 6;
const WEAK_VERB_PENALTY_CAP: i64 = 10;
const TOO_SHORT_PENALTY: i64 = 15;
const TOO_LONG_PENALTY: i64 = 5;
const MIN_RESUME_BODY: usize = 500;
const MAX_RESUME_BODY: usize = 4000;

// ATS-compatibility penalties.
const ATS_FORMATTING_PENALTY: i64 = 20;
const ATS_HIGH_MISSING_PENALTY: i64 = 6;
const ATS_MISSING_SECTION_PENALTY: i64 = 10;
const ATS_LOW_DENSITY_PENALTY: i64 = 15;
const ATS_NO_BULLETS_PENALTY: i64 = 10;
const MIN_TECHNICAL_DENSITY: f64 = 2.0;

// Structure-score penalties.
const STRUCTURE_MISSING_SECTION_PENALTY: i64 = 15;
const STRUCTURE_NO_SUMMARY_PENALTY: i64 = 10;
const STRUCTURE_NO_BULLETS_PENALTY: i64 = 15;

const MAX_NEXT_STEPS: usize = 5;

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "b.s", "m.s", "b.a", "m.a", "mba", "associate", "degree",
    "diploma",
];

fn clamp_score(score: i64) -> u32 {
    score.clamp(0, 100) as u32
}

fn count_by_importance(missing: &[MissingKeyword], importance: Importance) -> i64 {
    missing.iter().filter(|k| k.importance == importance).count() as i64
}

/// Overall résumé score against the target job.
pub fn overall_score(resume: &str, missing: &[MissingKeyword]) -> u32 {
    let mut score: i64 = 100;

    score -= count_by_importance(missing, Importance::High) * HIGH_MISSING_PENALTY;
    score -= count_by_importance(missing, Importance::Medium) * MEDIUM_MISSING_PENALTY;

    if has_ats_formatting_issues(resume) {
        score -= FORMATTING_PENALTY;
    }
    if !has_professional_summary(resume) {
        score -= NO_SUMMARY_PENALTY;
    }
    if !has_structured_skills_section(resume) {
        score -= UNSTRUCTURED_SKILLS_PENALTY;
    }

    let quantification = quantification_score(resume);
    if quantification < 3 {
        score -= LOW_QUANTIFICATION_PENALTY;
    } else if quantification < 6 {
        score -= MODERATE_QUANTIFICATION_PENALTY;
    }

    score -= (count_weak_verbs(resume) as i64 * 2).min(WEAK_VERB_PENALTY_CAP);

    if resume.len() < MIN_RESUME_BODY {
        score -= TOO_SHORT_PENALTY;
    } else if resume.len() > MAX_RESUME_BODY {
        score -= TOO_LONG_PENALTY;
    }

    clamp_score(score)
}

/// How well an ATS is likely to parse and rank the résumé.
pub fn ats_compatibility(resume: &str, missing: &[MissingKeyword]) -> u32 {
    let mut score: i64 = 100;

    if has_ats_formatting_issues(resume) {
        score -= ATS_FORMATTING_PENALTY;
    }

    score -= count_by_importance(missing, Importance::High) * ATS_HIGH_MISSING_PENALTY;
    score -= missing_required_sections(resume).len() as i64 * ATS_MISSING_SECTION_PENALTY;

    if technical_keyword_density(resume) < MIN_TECHNICAL_DENSITY {
        score -= ATS_LOW_DENSITY_PENALTY;
    }
    if !has_bullet_markers(resume) {
        score -= ATS_NO_BULLETS_PENALTY;
    }

    clamp_score(score)
}

/// Six sub-scores. `total_job_keywords` of zero yields a 100% keyword match
/// (nothing was asked for, nothing is missing).
pub fn detailed_breakdown(
    resume: &str,
    missing: &[MissingKeyword],
    total_job_keywords: usize,
) -> DetailedBreakdown {
    let keyword_match_percentage = if total_job_keywords == 0 {
        100
    } else {
        let matched = total_job_keywords.saturating_sub(missing.len());
        (matched as f64 / total_job_keywords as f64 * 100.0).round() as u32
    };

    let quantification_level = (quantification_score(resume) * 10).min(100);
    let action_verb_strength = 100u32.saturating_sub(count_weak_verbs(resume) * 8);
    let content_quality_score =
        ((quantification_level + action_verb_strength) as f64 / 2.0).round() as u32;

    let formatting_score = if has_ats_formatting_issues(resume) { 60 } else { 95 };

    let mut structure: i64 = 100;
    structure -=
        missing_required_sections(resume).len() as i64 * STRUCTURE_MISSING_SECTION_PENALTY;
    if !has_professional_summary(resume) {
        structure -= STRUCTURE_NO_SUMMARY_PENALTY;
    }
    if !has_bullet_markers(resume) {
        structure -= STRUCTURE_NO_BULLETS_PENALTY;
    }

    DetailedBreakdown {
        keyword_match_percentage,
        content_quality_score,
        formatting_score,
        structure_score: clamp_score(structure),
        quantification_level,
        action_verb_strength,
    }
}

/// Grades the four sections of interest. Summary is graded only when one
/// is present.
pub fn section_grades(resume: &str, keyword_match_percentage: u32) -> Vec<SectionGrade> {
    let mut grades = Vec::new();

    if has_professional_summary(resume) {
        grades.push(grade_summary(resume));
    }
    grades.push(grade_experience(resume, keyword_match_percentage));
    grades.push(grade_skills(resume));
    grades.push(grade_education(resume));

    grades
}

fn make_grade(
    section: &str,
    score: i64,
    issues: Vec<String>,
    strengths: Vec<String>,
) -> SectionGrade {
    let score = clamp_score(score);
    SectionGrade {
        section: section.to_string(),
        grade: LetterGrade::from_score(score),
        score,
        issues,
        strengths,
    }
}

fn grade_summary(resume: &str) -> SectionGrade {
    let summary = extract_summary_block(resume).unwrap_or_default();
    let mut score: i64 = 100;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    if summary.len() < 100 {
        score -= 25;
        issues.push("Summary is too brief to convey your value proposition".to_string());
    } else {
        strengths.push("Substantial summary with room for specifics".to_string());
    }

    if !summary.chars().any(|c| c.is_ascii_digit()) {
        score -= 20;
        issues.push("No measurable results mentioned in the summary".to_string());
    } else {
        strengths.push("Summary includes quantified results".to_string());
    }

    if is_weak_summary(summary) {
        score -= 20;
        issues.push("Relies on generic or aspirational language".to_string());
    } else {
        strengths.push("Confident, specific framing".to_string());
    }

    make_grade("Professional Summary", score, issues, strengths)
}

fn grade_experience(resume: &str, keyword_match_percentage: u32) -> SectionGrade {
    let lower = resume.to_lowercase();
    let mut score: i64 = 100;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    let quantification = quantification_score(resume);
    if quantification < 3 {
        score -= 30;
        issues.push("Almost no quantified achievements".to_string());
    } else if quantification < 6 {
        score -= 15;
        issues.push("Few quantified achievements".to_string());
    } else {
        strengths.push("Achievements are backed by numbers".to_string());
    }

    let weak_verbs = count_weak_verbs(resume) as i64;
    let strong_verbs = STRONG_ACTION_VERBS.iter().filter(|v| lower.contains(*v)).count();
    if weak_verbs > 0 {
        score -= (weak_verbs * 8).min(30);
        issues.push(format!("{weak_verbs} weak phrases dilute your impact"));
    } else if strong_verbs >= 3 {
        strengths.push("Strong action verbs throughout".to_string());
    }

    if keyword_match_percentage < 50 {
        score -= 25;
        issues.push("Experience rarely mentions the job's keywords".to_string());
    } else if keyword_match_percentage < 75 {
        score -= 10;
        issues.push("Experience covers only part of the job's keywords".to_string());
    } else {
        strengths.push("Experience aligns well with the job's language".to_string());
    }

    make_grade("Work Experience", score, issues, strengths)
}

fn grade_skills(resume: &str) -> SectionGrade {
    let lower = resume.to_lowercase();
    let mut score: i64 = 100;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    if !lower.contains("skills") {
        score -= 40;
        issues.push("No dedicated skills section found".to_string());
    } else {
        strengths.push("Skills section present".to_string());
    }

    if !has_structured_skills_section(resume) {
        score -= 20;
        issues.push("Skills are not grouped by category".to_string());
    } else {
        strengths.push("Skills are grouped for easy scanning".to_string());
    }

    if technical_term_count(resume) < 5 {
        score -= 20;
        issues.push("Few recognizable technical skills listed".to_string());
    } else {
        strengths.push("Broad technical vocabulary".to_string());
    }

    make_grade("Skills", score, issues, strengths)
}

fn grade_education(resume: &str) -> SectionGrade {
    let lower = resume.to_lowercase();
    let mut score: i64 = 100;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    if !lower.contains("education") {
        score -= 50;
        issues.push("No education section found".to_string());
    } else {
        strengths.push("Education section present".to_string());
    }

    if !DEGREE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        score -= 20;
        issues.push("No degree or credential named".to_string());
    } else {
        strengths.push("Credential clearly stated".to_string());
    }

    if !YEAR_PATTERN.is_match(resume) {
        score -= 15;
        issues.push("No dates found; recruiters expect a timeline".to_string());
    } else {
        strengths.push("Timeline is visible".to_string());
    }

    make_grade("Education", score, issues, strengths)
}

/// Rule-based ATS issue detector. Emits zero or more structured issues in
/// fixed order.
pub fn ats_issues(resume: &str) -> Vec<AtsIssue> {
    let mut issues = Vec::new();

    if resume.contains('|') {
        issues.push(AtsIssue {
            severity: IssueSeverity::Critical,
            issue: "Pipe characters (|) found".to_string(),
            impact: "Many ATS parsers split fields on pipes and scramble your content"
                .to_string(),
            solution: "Replace pipes with commas or line breaks".to_string(),
        });
    }

    if resume.contains('→') {
        issues.push(AtsIssue {
            severity: IssueSeverity::Critical,
            issue: "Arrow symbols (→) found".to_string(),
            impact: "Arrow glyphs are dropped or mangled during parsing".to_string(),
            solution: "Replace arrows with plain text such as \"to\" or a hyphen".to_string(),
        });
    }

    if !has_bullet_markers(resume) {
        issues.push(AtsIssue {
            severity: IssueSeverity::Warning,
            issue: "No bullet points found".to_string(),
            impact: "Dense paragraphs are hard for both parsers and recruiters to scan"
                .to_string(),
            solution: "Break achievements into bullet points using - or •".to_string(),
        });
    }

    for section in REQUIRED_SECTIONS {
        if !resume.to_lowercase().contains(section) {
            issues.push(AtsIssue {
                severity: IssueSeverity::Warning,
                issue: format!("No \"{section}\" section header found"),
                impact: "ATS software maps content by standard headers; unlabeled content may \
                         be skipped"
                    .to_string(),
                solution: format!("Add a clearly labeled {section} section"),
            });
        }
    }

    if !has_contact_info(resume) {
        issues.push(AtsIssue {
            severity: IssueSeverity::Critical,
            issue: "No contact information detected".to_string(),
            impact: "Recruiters cannot reach you if the ATS extracts no contact details"
                .to_string(),
            solution: "Add an email address and phone number near the top".to_string(),
        });
    }

    if resume.contains('\t') {
        issues.push(AtsIssue {
            severity: IssueSeverity::Minor,
            issue: "Tab characters found".to_string(),
            impact: "Tab-based alignment collapses unpredictably in ATS plain-text views"
                .to_string(),
            solution: "Use spaces or line breaks instead of tabs".to_string(),
        });
    }

    issues
}

/// Up to five prioritized action items, numbered in fixed trigger order.
pub fn next_steps(resume: &str, missing: &[MissingKeyword], ats_score: u32) -> Vec<NextStep> {
    let mut steps = Vec::new();
    let mut priority = 1u32;

    if missing.iter().any(|k| k.importance == Importance::High) {
        steps.push(NextStep {
            priority,
            action: "Add critical missing keywords".to_string(),
            description: "Work the high-priority keywords from the job description into your \
                          experience bullets and skills section."
                .to_string(),
            estimated_impact: "+15-25 points".to_string(),
            time_required: "30-45 minutes".to_string(),
        });
        priority += 1;
    }

    if ats_score < 80 {
        steps.push(NextStep {
            priority,
            action: "Fix ATS formatting issues".to_string(),
            description: "Remove special characters, use standard section headers, and format \
                          achievements as bullet points."
                .to_string(),
            estimated_impact: "+10-20 points".to_string(),
            time_required: "20-30 minutes".to_string(),
        });
        priority += 1;
    }

    if quantification_score(resume) < 5 {
        steps.push(NextStep {
            priority,
            action: "Quantify your achievements".to_string(),
            description: "Attach numbers, percentages, or dollar amounts to your strongest \
                          bullet points."
                .to_string(),
            estimated_impact: "+10-15 points".to_string(),
            time_required: "45-60 minutes".to_string(),
        });
        priority += 1;
    }

    if count_weak_verbs(resume) > 3 {
        steps.push(NextStep {
            priority,
            action: "Replace weak language".to_string(),
            description: "Swap hedging phrases like \"responsible for\" and \"worked on\" for \
                          strong action verbs."
                .to_string(),
            estimated_impact: "+5-10 points".to_string(),
            time_required: "15-20 minutes".to_string(),
        });
        priority += 1;
    }

    if !has_professional_summary(resume) {
        steps.push(NextStep {
            priority,
            action: "Add a professional summary".to_string(),
            description: "Open with 3-4 lines stating your experience, specialty, and the \
                          value you bring to this role."
                .to_string(),
            estimated_impact: "+5-10 points".to_string(),
            time_required: "15-25 minutes".to_string(),
        });
    }

    steps.truncate(MAX_NEXT_STEPS);
    steps
}
