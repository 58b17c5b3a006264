//! Token Classifier: decides whether a token extracted from a JD is an actionable technical skill.
//!
//! Pure and deterministic: the same token always classifies the same way.
//! Rules run as an ordered cascade; the first rule that decides wins, and later
//! rules assume the earlier rejections already happened.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Static vocabularies
// ────────────────────────────────────────────────────────────────────────────

/// Generic action words, soft skills, buzzwords, vague tech nouns and filler.
/// Matched against the whole normalized token.
#[rustfmt::skip]
const NON_TECHNICAL_WORDS: &[&str] = &[
    // Generic action words
    "experience", "years", "building", "relevant", "technical", "field",
    "equivalent", "practical", "degree", "completed", "prior", "joining",
    "process", "obtaining", "bachelor", "computer", "engineering",
    "track", "record", "setting", "direction", "team", "driving",
    "consensus", "successful", "cross", "functional", "partnerships",
    "maintainable", "testable", "code", "bases", "including", "design",
    "unit", "testing", "techniques", "least", "one", "large", "scale",
    "product", "production", "supporting", "millions", "active", "users",
    "shipped", "complex", "applications", "targeting", "using", "native",
    "languages", "frameworks", "multithreading", "mobile", "memory",
    "management", "preferred", "qualifications", "requirements",
    "work", "your", "build", "checkout", "payments", "platform",
    "discord", "fullstack", "full", "stack", "developer", "software",
    "must", "should", "currently", "has", "will", "able", "ability",
    "strong", "good", "excellent", "demonstrated", "proven", "solid",
    // Buzzwords and soft skills
    "scalability", "scalable", "flexibility", "flexible", "reliability", "reliable",
    "availability", "available", "maintainability", "productivity", "productive",
    "efficiency", "efficient", "performance", "optimization", "optimized",
    "integration", "collaboration", "collaborative", "innovation", "innovative",
    "creativity", "creative", "leadership", "strategy", "strategic",
    "planning", "execution", "delivery", "success", "growth",
    "impact", "impactful", "value", "excellence", "commitment",
    "dedication", "dedicated", "passion", "passionate", "background", "knowledge",
    "expertise", "proficiency", "proficient", "capability", "competency",
    "competent", "skill", "skills", "qualification", "requirement", "advanced",
    "expert", "experienced", "senior", "junior", "lead", "principal",
    // Generic tech words (not specific enough)
    "application", "system", "systems", "service", "services",
    "tool", "tools", "solution", "solutions", "feature", "features",
    "component", "components", "module", "modules", "library", "libraries",
    "project", "projects", "user", "client", "clients",
    "server", "servers", "data", "database", "databases", "framework",
    "architecture", "infrastructure", "environment", "development",
    "implementation", "deployment", "maintenance", "support",
    // Common phrases
    "problem", "solving", "critical", "thinking", "attention", "detail",
    "communication", "written", "verbal", "interpersonal", "organizational",
    "time", "prioritization", "multitasking", "adaptability", "learning",
    "self", "motivated", "initiative", "ownership", "accountability",
    "responsibility", "others", "matters", "clinical", "various", "multiple",
    "several", "different", "general", "specific", "particular",
];

/// Phrase-level filler: any token containing one of these is a phrase, not a skill.
const FILLER_PHRASES: &[&str] = &[
    "experience",
    "years of",
    "ability to",
    "strong",
    "working",
    "knowledge of",
    "understanding of",
    "familiarity with",
];

/// Suffixes typical of abstract nouns and adjectives ("teamwork-ness", "leadership").
const SOFT_SUFFIXES: &[&str] = &[
    "ness", "ship", "ment", "tion", "sion", "ance", "ence", "ity", "ful", "ive", "able", "ible",
];

/// Technical terms that survive the soft-suffix rule (substring match).
const SUFFIX_EXCEPTIONS: &[&str] = &[
    "authentication",
    "authorization",
    "implementation",
    "configuration",
    "automation",
    "development",
    "deployment",
    "testing",
    "programming",
    "debugging",
    "responsive",
    // react-native, cloud-native
    "native",
];

const STOP_WORDS: &[&str] = &[
    "to", "of", "in", "for", "with", "and", "or", "the", "a", "an", "at", "on",
];

/// Word fragments that show up inside technology names (JavaScript, Firebase, Airflow, ...).
const TECH_FRAGMENTS: &[&str] = &[
    "script", "base", "flow", "ware", "sys", "sql", "web", "net", "cloud", "api", "dev", "ops",
    "bot", "app", "proto", "graph",
];

const KNOWN_TECHNOLOGIES: &[&str] = &[
    "python", "java", "ruby", "rust", "swift", "kotlin", "scala", "perl", "php", "bash", "react",
    "angular", "vue", "node", "django", "flask", "spring", "docker", "kubernetes", "mongo",
    "redis", "postgres",
];

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Per-token verdict, returned by the classify endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenVerdict {
    pub token: String,
    pub is_technical: bool,
}

/// Returns true iff `token` should be treated as an actionable technical skill.
pub fn is_technical_skill(token: &str) -> bool {
    let trimmed = token.trim();
    let normalized = trimmed.to_lowercase();

    if normalized.chars().count() < 2 {
        return false;
    }
    if NON_TECHNICAL_WORDS.contains(&normalized.as_str()) {
        return false;
    }
    if normalized.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if FILLER_PHRASES.iter().any(|p| normalized.contains(p)) {
        return false;
    }
    if has_soft_suffix(&normalized) {
        return false;
    }
    if is_filler_phrase(&normalized) {
        return false;
    }

    has_technical_signal(trimmed, &normalized)
}

/// Classifies every token, keeping input order.
pub fn classify_tokens(tokens: &[String]) -> Vec<TokenVerdict> {
    tokens
        .iter()
        .map(|token| TokenVerdict {
            token: token.clone(),
            is_technical: is_technical_skill(token),
        })
        .collect()
}

fn has_soft_suffix(normalized: &str) -> bool {
    SOFT_SUFFIXES.iter().any(|s| normalized.ends_with(s))
        && !SUFFIX_EXCEPTIONS.iter().any(|ex| normalized.contains(ex))
}

/// More than two words with at least one stop-word reads as a sentence fragment.
fn is_filler_phrase(normalized: &str) -> bool {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    words.len() > 2 && words.iter().any(|w| STOP_WORDS.contains(w))
}

/// `trimmed` keeps the original casing for the acronym check; everything else is case-insensitive.
fn has_technical_signal(trimmed: &str, normalized: &str) -> bool {
    let has_digit = normalized.chars().any(|c| c.is_ascii_digit());
    let has_symbol = normalized.contains(['.', '-', '+', '#']);

    has_digit
        || has_symbol
        || is_acronym(trimmed)
        || TECH_FRAGMENTS.iter().any(|f| normalized.contains(f))
        || KNOWN_TECHNOLOGIES.iter().any(|t| normalized.contains(t))
}

/// 2–5 uppercase ASCII letters: AWS, GCP, HTML, CSS.
fn is_acronym(token: &str) -> bool {
    (2..=5).contains(&token.len()) && token.chars().all(|c| c.is_ascii_uppercase())
}
