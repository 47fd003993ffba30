//! Input validation — the only stage allowed to fail an analysis.
//!
//! Runs before any scoring; on failure the call aborts with no partial
//! result. Everything downstream assumes validated, non-empty input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

const MIN_RESUME_LEN: usize = 200;
const MIN_JOB_DESCRIPTION_LEN: usize = 150;
const MIN_JOB_INDICATORS: usize = 3;

/// Words at least one of which a real résumé is expected to contain.
const RESUME_INDICATORS: &[&str] = &[
    "experience", "education", "skills", "work", "employment", "summary", "objective",
];

/// Words a job description is expected to contain at least three of.
const JOB_INDICATORS: &[&str] = &[
    "requirements", "qualifications", "responsibilities", "experience", "skills", "role",
    "position", "candidate", "team", "ability",
];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

/// Validates both inputs, failing fast on the résumé first.
pub fn validate(resume: &str, job_description: &str) -> Result<(), AppError> {
    validate_resume(resume)?;
    validate_job_description(job_description)?;
    Ok(())
}

fn validate_resume(resume: &str) -> Result<(), AppError> {
    if resume.len() < MIN_RESUME_LEN {
        return Err(AppError::InvalidResume(format!(
            "resume must be at least {MIN_RESUME_LEN} characters, got {}",
            resume.len()
        )));
    }

    let lower = resume.to_lowercase();
    if !RESUME_INDICATORS.iter().any(|w| lower.contains(w)) {
        return Err(AppError::InvalidResume(
            "text does not look like a resume: no section such as experience, education, or skills"
                .to_string(),
        ));
    }

    if !has_contact_info(resume) {
        return Err(AppError::InvalidResume(
            "no contact information found: add an email address or phone number".to_string(),
        ));
    }

    Ok(())
}

fn validate_job_description(job_description: &str) -> Result<(), AppError> {
    if job_description.len() < MIN_JOB_DESCRIPTION_LEN {
        return Err(AppError::InvalidJobDescription(format!(
            "job description must be at least {MIN_JOB_DESCRIPTION_LEN} characters, got {}",
            job_description.len()
        )));
    }

    let lower = job_description.to_lowercase();
    let distinct_indicators = JOB_INDICATORS.iter().filter(|w| lower.contains(*w)).count();
    if distinct_indicators < MIN_JOB_INDICATORS {
        return Err(AppError::InvalidJobDescription(format!(
            "text does not look like a job description: found {distinct_indicators} of the \
             {MIN_JOB_INDICATORS} expected signals (requirements, qualifications, \
             responsibilities, ...)"
        )));
    }

    Ok(())
}

/// Email-like pattern, phone-like pattern, or the literal words
/// "phone"/"email" all count as contact information.
pub fn has_contact_info(text: &str) -> bool {
    let lower = text.to_lowercase();
    EMAIL_PATTERN.is_match(text)
        || PHONE_PATTERN.is_match(text)
        || lower.contains("phone")
        || lower.contains("email")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_RESUME: &str = "\
John Doe\n\
Email: john.doe@example.com\n\
\n\
PROFESSIONAL SUMMARY\n\
Software engineer with 8 years of experience building distributed systems.\n\
\n\
WORK EXPERIENCE\n\
Senior Engineer, Acme Corp (2019-2024)\n\
- Led migration of 40+ services to Kubernetes, reducing deploy time by 60%\n\
\n\
EDUCATION\n\
B.S. Computer Science, State University, 2015\n\
\n\
SKILLS\n\
Rust, Python, PostgreSQL, Docker";

    const VALID_JD: &str = "\
Senior Backend Engineer\n\
\n\
Requirements: 5+ years backend experience. Strong skills in Rust and SQL.\n\
Responsibilities: design services, mentor the team, own reliability goals.\n\
Qualifications: B.S. in CS or equivalent practical experience.";

    #[test]
    fn test_valid_pair_passes() {
        assert!(validate(VALID_RESUME, VALID_JD).is_ok());
    }

    #[test]
    fn test_short_resume_rejected() {
        // Scenario: resume under 200 chars fails with InvalidResume.
        let err = validate("Experience: some. Email: a@b.co", VALID_JD).unwrap_err();
        assert!(matches!(err, AppError::InvalidResume(_)));
    }

    #[test]
    fn test_resume_without_indicators_rejected() {
        let text = format!("Email: a@b.co {}", "lorem ipsum dolor sit amet ".repeat(10));
        let err = validate(&text, VALID_JD).unwrap_err();
        assert!(matches!(err, AppError::InvalidResume(_)));
    }

    #[test]
    fn test_resume_without_contact_rejected() {
        let text = format!("experience education skills {}", "filler words here ".repeat(15));
        let err = validate(&text, VALID_JD).unwrap_err();
        assert!(matches!(err, AppError::InvalidResume(_)));
    }

    #[test]
    fn test_literal_word_phone_counts_as_contact() {
        let text = format!(
            "experience education skills phone on request {}",
            "filler words here ".repeat(15)
        );
        assert!(validate(&text, VALID_JD).is_ok());
    }

    #[test]
    fn test_jd_without_indicator_words_rejected() {
        // Scenario: small talk repeated past the length floor still fails.
        let jd = "Good morning, weather is nice today. ".repeat(20);
        assert!(jd.len() >= 150);
        let err = validate(VALID_RESUME, &jd).unwrap_err();
        assert!(matches!(err, AppError::InvalidJobDescription(_)));
    }

    #[test]
    fn test_short_jd_rejected() {
        let err = validate(VALID_RESUME, "Requirements: skills, role.").unwrap_err();
        assert!(matches!(err, AppError::InvalidJobDescription(_)));
    }

    #[test]
    fn test_jd_needs_three_distinct_indicators() {
        let jd = format!("We have many requirements for this job. {}", "x".repeat(150));
        let err = validate(VALID_RESUME, &jd).unwrap_err();
        assert!(matches!(err, AppError::InvalidJobDescription(_)));
    }

    #[test]
    fn test_email_pattern_detection() {
        assert!(has_contact_info("reach me at jane_smith+jobs@mail.example.org"));
        assert!(!has_contact_info("no contact details in this text at all"));
    }

    #[test]
    fn test_phone_pattern_detection() {
        assert!(has_contact_info("call (555) 123-4567 anytime"));
        assert!(has_contact_info("call 555.123.4567"));
    }
}
