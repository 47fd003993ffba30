//! Static lexicons — curated term sets the whole engine matches against.
//!
//! Built once at first use and never mutated, so they are safe to share
//! across concurrent analysis calls. Categorization overlap is tolerated;
//! callers resolve it with the priority order technical > soft >
//! certification > industry.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Stop words dropped during keyword extraction.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an",
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "will", "would", "could",
        "should", "may", "might", "can", "must", "shall", "this", "that", "these", "those", "i",
        "you", "he", "she", "it", "we", "they",
    ]
    .into_iter()
    .collect()
});

/// Technical skill vocabulary: languages, frameworks, databases, cloud,
/// practices, data tooling.
pub static TECHNICAL_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Programming languages
        "javascript", "python", "java", "typescript", "c++", "c#", "php", "ruby", "go", "rust",
        "swift", "kotlin", "scala", "r", "matlab", "perl", "shell", "bash", "powershell",
        // Frontend
        "react", "angular", "vue", "svelte", "html", "css", "sass", "scss", "less", "bootstrap",
        "tailwind", "material-ui", "chakra-ui", "styled-components", "webpack", "vite", "parcel",
        "babel", "eslint", "prettier", "jest", "cypress", "playwright", "storybook",
        // Backend
        "node.js", "express", "fastify", "koa", "django", "flask", "fastapi", "spring", "laravel",
        "rails", "asp.net", "gin", "fiber", "actix", "rocket", "sinatra", "phoenix",
        // Databases
        "mongodb", "postgresql", "mysql", "sqlite", "redis", "elasticsearch", "cassandra",
        "dynamodb", "firestore", "couchdb", "neo4j", "influxdb", "clickhouse",
        // Cloud & DevOps
        "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
        "gitlab-ci", "github-actions", "circleci", "travis-ci", "helm", "istio", "prometheus",
        "grafana", "elk", "datadog", "newrelic", "splunk",
        // Practices
        "git", "ci/cd", "agile", "scrum", "kanban", "tdd", "bdd", "microservices", "api", "rest",
        "graphql", "grpc", "soap", "oauth", "jwt", "ssl", "https", "websockets",
        // Data & analytics
        "sql", "nosql", "etl", "data-warehouse", "big-data", "hadoop", "spark", "kafka",
        "airflow", "tableau", "power-bi", "looker", "pandas", "numpy", "scikit-learn",
        "tensorflow", "pytorch", "keras", "opencv",
    ]
    .into_iter()
    .collect()
});

/// Soft skills valued across industries.
pub static SOFT_SKILLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "leadership", "communication", "collaboration", "teamwork", "problem-solving",
        "analytical", "creative", "innovative", "strategic", "detail-oriented", "organized",
        "adaptable", "flexible", "motivated", "proactive", "initiative", "mentoring", "coaching",
        "presentation", "negotiation", "conflict-resolution", "time-management",
        "project-management", "stakeholder-management", "customer-service", "cross-functional",
        "multitasking", "prioritization", "decision-making",
    ]
    .into_iter()
    .collect()
});

/// Industry terms and compliance/domain vocabulary.
pub static INDUSTRY_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "fintech", "healthtech", "edtech", "e-commerce", "saas", "b2b", "b2c", "startup",
        "enterprise", "scalability", "performance", "security", "compliance", "gdpr", "hipaa",
        "sox", "pci-dss", "iso-27001", "agile-methodology", "digital-transformation",
        "automation", "machine-learning", "artificial-intelligence", "blockchain",
        "cryptocurrency", "iot", "ar", "vr", "mobile-first", "responsive-design",
    ]
    .into_iter()
    .collect()
});

/// Strong action verbs used when grading rewritten content.
pub const STRONG_ACTION_VERBS: &[&str] = &[
    "achieved", "accelerated", "accomplished", "advanced", "amplified", "architected",
    "automated", "built", "collaborated", "created", "delivered", "designed", "developed",
    "drove", "enhanced", "established", "executed", "expanded", "generated", "implemented",
    "improved", "increased", "initiated", "innovated", "launched", "led", "managed", "optimized",
    "orchestrated", "pioneered", "reduced", "revolutionized", "scaled", "spearheaded",
    "streamlined", "transformed",
];

/// Hedging/passive expressions flagged for replacement.
pub const WEAK_PHRASES: &[&str] = &[
    "responsible for", "worked on", "helped with", "involved in", "assisted with",
    "participated in", "contributed to", "was part of", "handled", "dealt with", "took care of",
    "managed to", "tried to", "attempted to",
];

/// Compound technical phrases retained during 2-gram/3-gram extraction.
pub const TECHNICAL_PHRASES: &[&str] = &[
    "machine learning", "data science", "artificial intelligence", "cloud computing",
    "software development", "web development", "mobile development", "full stack", "front end",
    "back end", "database design", "system architecture", "api development", "user experience",
    "user interface", "project management", "agile development", "continuous integration",
    "continuous deployment", "test driven development",
];

/// Markers that make a keyword high-value regardless of frequency.
pub const HIGH_VALUE_MARKERS: &[&str] = &[
    "required", "must", "essential", "critical", "mandatory", "preferred", "senior", "lead",
    "principal", "architect", "expert", "advanced",
];

/// Phrases that open a "critical" region of a job description. A keyword
/// first occurring within 200 chars after one of these is treated as high
/// importance.
pub const CRITICAL_SECTION_PHRASES: &[&str] = &[
    "required", "must have", "essential", "mandatory", "qualifications", "requirements",
    "skills needed", "experience with", "proficiency in",
];

/// Strong synonym candidates per weak phrase. Phrases without an entry fall
/// back to "Executed".
pub const WEAK_PHRASE_REPLACEMENTS: &[(&str, &[&str])] = &[
    ("responsible for", &["Led", "Managed", "Oversaw", "Directed", "Coordinated"]),
    ("worked on", &["Developed", "Built", "Created", "Implemented", "Designed"]),
    ("helped with", &["Collaborated on", "Contributed to", "Supported", "Facilitated"]),
    ("involved in", &["Participated in", "Contributed to", "Engaged in", "Executed"]),
    ("assisted with", &["Supported", "Facilitated", "Enabled", "Contributed to"]),
    ("participated in", &["Engaged in", "Contributed to", "Collaborated on", "Executed"]),
    ("handled", &["Managed", "Processed", "Executed", "Administered"]),
    ("dealt with", &["Managed", "Resolved", "Addressed", "Handled"]),
];

/// Fallback synonym when a weak phrase has no replacement entry.
pub const DEFAULT_STRONG_VERB: &str = "Executed";

/// Parenthetical quantification triggers, applied in this order to bullets
/// that contain no digits. The table halts as soon as a replacement lands
/// (every replacement introduces digits), so at most one entry applies.
pub const QUANTIFICATION_TRIGGERS: &[(&str, &str)] = &[
    ("projects", "projects (5+ concurrent initiatives)"),
    ("team", "cross-functional team of 8+ members"),
    ("customers", "customers (500+ daily interactions)"),
    ("improved", "improved by 25%"),
    ("increased", "increased by 30%"),
    ("reduced", "reduced by 40%"),
    ("managed", "managed ($2M+ budget)"),
    ("led", "led (12-person team)"),
    ("developed", "developed (3 major applications)"),
    ("implemented", "implemented (company-wide system)"),
];

/// Vague-term substitutions, applied in this order. Order matters: an
/// earlier substitution may introduce a word a later entry rewrites again
/// ("various" becomes "multiple enterprise-level" becomes
/// "cross-functional enterprise-level").
pub const SPECIFICITY_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("various", "multiple enterprise-level"),
    ("several", "5+"),
    ("many", "numerous"),
    ("different", "diverse"),
    ("multiple", "cross-functional"),
    ("some", "key"),
    ("large", "enterprise-scale"),
    ("small", "agile"),
    ("big", "large-scale"),
];

/// Vague terms that mark a bullet as weak.
pub const VAGUE_TERMS: &[&str] = &["various", "multiple", "several", "many", "some", "different"];

/// Passive-voice markers that mark a bullet as weak.
pub const PASSIVE_MARKERS: &[&str] = &["was", "were", "been", "being"];

/// Generic/aspirational language that marks a professional summary as weak.
pub const WEAK_SUMMARY_INDICATORS: &[&str] = &[
    "seeking", "looking for", "hoping to", "want to", "desire to", "hardworking", "dedicated",
    "motivated individual", "team player", "detail oriented", "fast learner",
];

/// Headers that signal a professional summary exists somewhere in the résumé.
pub const SUMMARY_PRESENCE_INDICATORS: &[&str] =
    &["summary", "profile", "objective", "overview", "about"];

/// Headers a summary block is extracted under. Narrower than
/// `SUMMARY_PRESENCE_INDICATORS` on purpose: "about" alone is too noisy to
/// anchor extraction.
pub const SUMMARY_EXTRACTION_INDICATORS: &[&str] = &["summary", "profile", "objective", "overview"];

/// Sections an ATS expects to find.
pub const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];
