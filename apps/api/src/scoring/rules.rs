//! Scoring rules — the keyword lists and markers the checks match against.
//!
//! Every check is data-driven: extending a list here widens coverage without
//! touching the check logic in `engine`. Tokens are literals, not patterns;
//! they are regex-escaped and compiled into one case-insensitive alternation
//! per category at startup.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker counted by the bullet-usage check. Extraction pipelines sometimes
/// produce mojibake for U+2022, so deployments can override this to match
/// whatever glyph theirs emits.
pub const DEFAULT_BULLET_MARKER: &str = "•";

/// Bullet occurrences must exceed this count to earn the readability points.
pub const DEFAULT_BULLET_THRESHOLD: usize = 5;

/// A résumé section the engine looks for, with the tokens that count as
/// evidence of its presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRule {
    pub name: String,
    pub keywords: Vec<String>,
}

impl SectionRule {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Configurable inputs to the scoring engine. `Default` carries the stock
/// rule set; callers with different conventions build their own.
///
/// Every keyword list must be non-empty and the bullet marker must be a
/// non-empty string; `CompiledRules::compile` rejects degenerate rule sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Expected sections, checked in order. Feedback for a missing section
    /// names it by `SectionRule::name`.
    pub sections: Vec<SectionRule>,
    pub github_keywords: Vec<String>,
    pub other_platform_keywords: Vec<String>,
    pub informal_words: Vec<String>,
    pub bullet_marker: String,
    pub bullet_threshold: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionRule::new("Contact Information", &["phone", "email", "contact"]),
                SectionRule::new("Education", &["education", "university", "degree"]),
                SectionRule::new(
                    "Work Experience",
                    &["experience", "work history", "employment"],
                ),
                SectionRule::new("Skills", &["skills", "abilities", "competencies"]),
                SectionRule::new(
                    "Achievements/Certifications",
                    &["certifications", "awards", "achievements"],
                ),
            ],
            github_keywords: to_strings(&["github"]),
            other_platform_keywords: to_strings(&[
                "gitlab",
                "bitbucket",
                "codeforces",
                "hackerrank",
                "leetcode",
            ]),
            informal_words: to_strings(&["hey", "hi", "hello", "gonna", "wanna"]),
            bullet_marker: DEFAULT_BULLET_MARKER.to_string(),
            bullet_threshold: DEFAULT_BULLET_THRESHOLD,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Compiled form
// ────────────────────────────────────────────────────────────────────────────

/// A section rule with its keyword list compiled into a matcher.
#[derive(Debug)]
pub struct CompiledSection {
    pub name: String,
    pub pattern: Regex,
}

/// Rules compiled into case-insensitive matchers. Built once at startup and
/// shared by every evaluation.
#[derive(Debug)]
pub struct CompiledRules {
    pub sections: Vec<CompiledSection>,
    pub github: Regex,
    pub other_platforms: Regex,
    pub informal: Regex,
    pub word_token: Regex,
    pub education_section: Regex,
    pub year: Regex,
    pub bullet_marker: String,
    pub bullet_threshold: usize,
}

impl CompiledRules {
    pub fn compile(rules: &ScoringRules) -> Result<Self> {
        if rules.bullet_marker.is_empty() {
            bail!("bullet_marker must not be empty");
        }

        let sections = rules
            .sections
            .iter()
            .map(|s| {
                Ok(CompiledSection {
                    name: s.name.clone(),
                    pattern: keyword_regex(&s.keywords)
                        .with_context(|| format!("section '{}'", s.name))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            sections,
            github: keyword_regex(&rules.github_keywords).context("github keywords")?,
            other_platforms: keyword_regex(&rules.other_platform_keywords)
                .context("platform keywords")?,
            informal: keyword_regex(&rules.informal_words).context("informal words")?,
            word_token: Regex::new(r"\b\w+\b")?,
            // The education block runs from the first "education" mention to
            // the next blank line (or end of text).
            education_section: Regex::new(r"(?i)education[\s\S]*?(?:\n\n|\z)")?,
            year: Regex::new(r"\b(?:19|20)\d{2}\b")?,
            bullet_marker: rules.bullet_marker.clone(),
            bullet_threshold: rules.bullet_threshold,
        })
    }
}

/// Joins literal keywords into one case-insensitive alternation.
fn keyword_regex(keywords: &[String]) -> Result<Regex> {
    if keywords.is_empty() {
        bail!("keyword list must not be empty");
    }
    let escaped: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    Ok(Regex::new(&format!("(?i)(?:{})", escaped.join("|")))?)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
