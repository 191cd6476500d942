//! Rule-based résumé scoring — the default `ResumeScorer` backend.
//!
//! Runs a fixed battery of additive checks over extracted text: length,
//! section coverage, readability, coding-platform links, tone, organization,
//! then an experience estimate from the education block. Raw points can sum
//! past 100, so the final score clamps into the 0–100 range.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, swapped at startup.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scoring::experience::estimate_experience;
use crate::scoring::rules::{CompiledRules, ScoringRules};

// ────────────────────────────────────────────────────────────────────────────
// Check weights and thresholds
// ────────────────────────────────────────────────────────────────────────────

const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 600;
/// Paragraph breaks ("\n\n") must exceed this count.
const PARAGRAPH_BREAKS_REQUIRED: usize = 3;
/// Line breaks must exceed this count for the organization check.
const LINE_BREAKS_REQUIRED: usize = 10;

const LENGTH_IDEAL_POINTS: u32 = 15;
const LENGTH_LONG_POINTS: u32 = 10;
const LENGTH_SHORT_POINTS: u32 = 5;
const SECTION_POINTS: u32 = 10;
const BULLET_POINTS: u32 = 10;
const PARAGRAPH_POINTS: u32 = 5;
const PLATFORM_POINTS: u32 = 5;
const TONE_POINTS: u32 = 10;
const ORGANIZATION_POINTS: u32 = 10;

const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Full evaluation of one résumé text.
///
/// `passing_year` and `experience_years` stay `None` (serialized as `null`)
/// when no education block or usable year exists; the score never depends on
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: u32,
    pub experience_years: Option<i32>,
    pub passing_year: Option<i32>,
    /// Advisory notes, one per failed check, in check order.
    pub feedback: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The résumé scorer trait. Implement this to swap scoring backends without
/// touching the endpoint, handler, or caller code.
///
/// Evaluation is total: every text maps to some score, and the same text with
/// the same `current_year` always maps to the same `Evaluation`.
pub trait ResumeScorer: Send + Sync {
    fn evaluate(&self, text: &str, current_year: i32) -> Evaluation;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic scorer driven by a compiled `ScoringRules` set.
pub struct RuleScorer {
    rules: CompiledRules,
}

impl RuleScorer {
    pub fn new(rules: &ScoringRules) -> Result<Self> {
        Ok(Self {
            rules: CompiledRules::compile(rules)?,
        })
    }
}

impl ResumeScorer for RuleScorer {
    fn evaluate(&self, text: &str, current_year: i32) -> Evaluation {
        run_checks(text, &self.rules, current_year)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Check battery
// ────────────────────────────────────────────────────────────────────────────

fn run_checks(text: &str, rules: &CompiledRules, current_year: i32) -> Evaluation {
    let mut score: u32 = 0;
    let mut feedback: Vec<String> = Vec::new();

    // Length band
    let word_count = text.split_whitespace().count();
    if (MIN_WORDS..=MAX_WORDS).contains(&word_count) {
        score += LENGTH_IDEAL_POINTS;
    } else if word_count > MAX_WORDS {
        score += LENGTH_LONG_POINTS;
        feedback.push("The resume is too long. Consider shortening it.".to_string());
    } else {
        score += LENGTH_SHORT_POINTS;
        feedback
            .push("The resume is too short. Consider adding more relevant details.".to_string());
    }

    // Section coverage
    for section in &rules.sections {
        if section.pattern.is_match(text) {
            score += SECTION_POINTS;
        } else {
            feedback.push(format!(
                "Missing key section: {}. Please include this.",
                section.name
            ));
        }
    }

    // Readability: bullet markers and paragraph breaks
    if text.matches(rules.bullet_marker.as_str()).count() > rules.bullet_threshold {
        score += BULLET_POINTS;
    } else {
        feedback.push("Consider using bullet points for better readability.".to_string());
    }
    if text.matches("\n\n").count() > PARAGRAPH_BREAKS_REQUIRED {
        score += PARAGRAPH_POINTS;
    } else {
        feedback.push("Use more paragraph breaks for better structure.".to_string());
    }

    // Coding platform links. GitHub alone earns the base points, a second
    // platform doubles them; other platforms without GitHub earn the base
    // points plus a nudge toward GitHub.
    let has_github = rules.github.is_match(text);
    let has_other_platform = rules.other_platforms.is_match(text);
    if has_github {
        score += PLATFORM_POINTS;
        if has_other_platform {
            score += PLATFORM_POINTS;
        }
    } else if has_other_platform {
        score += PLATFORM_POINTS;
        feedback.push("Consider including a GitHub link to showcase your code.".to_string());
    } else {
        feedback.push(
            "Consider adding coding platform profiles (GitHub, Codeforces, etc.).".to_string(),
        );
    }

    // Professional tone
    if !rules.informal.is_match(text) {
        score += TONE_POINTS;
    } else {
        feedback.push(
            "Remove informal language (e.g., 'hey', 'gonna') for a more professional tone."
                .to_string(),
        );
    }

    // Organization: enough line structure to suggest headings
    if text.matches('\n').count() > LINE_BREAKS_REQUIRED && rules.word_token.is_match(text) {
        score += ORGANIZATION_POINTS;
    } else {
        feedback.push(
            "Improve the overall organization. Ensure there are enough sections and clear headings."
                .to_string(),
        );
    }

    // Passing year and experience estimate (informational, never scored)
    let estimate = estimate_experience(text, rules, current_year);
    if let Some(note) = estimate.feedback {
        feedback.push(note);
    }

    Evaluation {
        score: score.min(MAX_SCORE),
        experience_years: estimate.experience_years,
        passing_year: estimate.passing_year,
        feedback,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::rules::SectionRule;

    fn scorer() -> RuleScorer {
        RuleScorer::new(&ScoringRules::default()).expect("default rules compile")
    }

    /// Builds a résumé that earns every check: in-band length, all five
    /// sections, heavy bullet usage, paragraph breaks, two platform links,
    /// formal tone, clear line structure, and a dated education block.
    fn strong_resume() -> String {
        let mut text = String::from(
            "Jordan Doe\n\
             Contact: jordan.doe@example.com, phone 555-0100\n\n\
             Education\n\
             State University, B.S. Computer Science, degree awarded 2019\n\n\
             Work Experience\n\
             Employment at Acme Corp as a backend developer.\n",
        );
        for n in 1..=30 {
            text.push_str(&format!(
                "• Built service number {n} used by many teams, cutting latency 40%.\n"
            ));
        }
        text.push_str(
            "\nSkills\n\
             Rust, Go, SQL, Kafka, and tuning competencies for large clusters.\n\n\
             Awards\n\
             Certifications: AWS Developer Associate, 2021 cohort.\n\n\
             Links\n\
             Code samples on github and contest record on leetcode.\n",
        );
        text
    }

    #[test]
    fn test_perfect_resume_clamps_to_100() {
        // Raw points sum to 110 here; the cap keeps the score at 100.
        let evaluation = scorer().evaluate(&strong_resume(), 2024);
        assert_eq!(evaluation.score, 100);
        assert!(
            evaluation.feedback.is_empty(),
            "unexpected feedback: {:?}",
            evaluation.feedback
        );
        assert_eq!(evaluation.passing_year, Some(2019));
        assert_eq!(evaluation.experience_years, Some(5));
    }

    #[test]
    fn test_empty_text_scores_floor() {
        let evaluation = scorer().evaluate("", 2024);
        // Short-length consolation plus tone points; nothing informal in "".
        assert_eq!(evaluation.score, 15);
        assert_eq!(evaluation.feedback.len(), 10);
        assert_eq!(evaluation.passing_year, None);
        assert_eq!(evaluation.experience_years, None);
    }

    #[test]
    fn test_feedback_order_is_stable() {
        let evaluation = scorer().evaluate("", 2024);
        let expected = vec![
            "The resume is too short. Consider adding more relevant details.",
            "Missing key section: Contact Information. Please include this.",
            "Missing key section: Education. Please include this.",
            "Missing key section: Work Experience. Please include this.",
            "Missing key section: Skills. Please include this.",
            "Missing key section: Achievements/Certifications. Please include this.",
            "Consider using bullet points for better readability.",
            "Use more paragraph breaks for better structure.",
            "Consider adding coding platform profiles (GitHub, Codeforces, etc.).",
            "Improve the overall organization. Ensure there are enough sections and clear headings.",
        ];
        assert_eq!(evaluation.feedback, expected);
    }

    #[test]
    fn test_adding_a_section_never_lowers_score() {
        let without =
            "Contact email listed\nEducation degree 2019\nExperience at Acme\nAwards won\n";
        let with = format!("{without}Skills: Rust\n");
        let base = scorer().evaluate(without, 2024);
        let extended = scorer().evaluate(&with, 2024);
        assert!(extended.score >= base.score);
        assert_eq!(extended.score, base.score + SECTION_POINTS);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let text = strong_resume();
        let first = scorer().evaluate(&text, 2024);
        let second = scorer().evaluate(&text, 2024);
        assert_eq!(first, second);
    }

    #[test]
    fn test_score_is_bounded_for_oversized_input() {
        let text = strong_resume().repeat(10);
        let evaluation = scorer().evaluate(&text, 2024);
        assert!(evaluation.score <= 100);
    }

    #[test]
    fn test_length_band_points_and_feedback() {
        let in_band = scorer().evaluate(&"word ".repeat(300), 2024);
        assert!(!in_band.feedback.iter().any(|f| f.contains("too ")));

        let short = scorer().evaluate(&"word ".repeat(299), 2024);
        assert!(short.feedback.iter().any(|f| f.contains("too short")));
        assert_eq!(in_band.score, short.score + LENGTH_IDEAL_POINTS - LENGTH_SHORT_POINTS);

        let long = scorer().evaluate(&"word ".repeat(601), 2024);
        assert!(long.feedback.iter().any(|f| f.contains("too long")));
        assert_eq!(in_band.score, long.score + LENGTH_IDEAL_POINTS - LENGTH_LONG_POINTS);
    }

    #[test]
    fn test_bullet_threshold_is_strict() {
        let at_threshold = scorer().evaluate(&"• ".repeat(5), 2024);
        assert!(at_threshold
            .feedback
            .iter()
            .any(|f| f.contains("bullet points")));

        let above_threshold = scorer().evaluate(&"• ".repeat(6), 2024);
        assert!(!above_threshold
            .feedback
            .iter()
            .any(|f| f.contains("bullet points")));
        assert_eq!(above_threshold.score, at_threshold.score + BULLET_POINTS);
    }

    #[test]
    fn test_paragraph_break_threshold_is_strict() {
        let at_threshold = scorer().evaluate(&"\n\n".repeat(3), 2024);
        let above_threshold = scorer().evaluate(&"\n\n".repeat(4), 2024);
        assert_eq!(above_threshold.score, at_threshold.score + PARAGRAPH_POINTS);
        assert!(!above_threshold
            .feedback
            .iter()
            .any(|f| f.contains("paragraph breaks")));
    }

    #[test]
    fn test_platform_tiers() {
        let both = scorer().evaluate("Profiles: github and leetcode", 2024);
        let github_only = scorer().evaluate("Profiles: github", 2024);
        let other_only = scorer().evaluate("Profiles: leetcode", 2024);
        let none = scorer().evaluate("Profiles: none", 2024);

        assert_eq!(both.score, github_only.score + PLATFORM_POINTS);
        assert_eq!(github_only.score, none.score + PLATFORM_POINTS);
        assert_eq!(other_only.score, github_only.score);

        assert!(!github_only.feedback.iter().any(|f| f.contains("GitHub")));
        assert!(other_only
            .feedback
            .iter()
            .any(|f| f.contains("Consider including a GitHub link")));
        assert!(none
            .feedback
            .iter()
            .any(|f| f.contains("coding platform profiles")));
    }

    #[test]
    fn test_informal_language_costs_tone_points() {
        let informal = scorer().evaluate("hey team, gonna build more", 2024);
        let formal = scorer().evaluate("Dear team, we build more", 2024);
        assert_eq!(formal.score, informal.score + TONE_POINTS);
        assert!(informal
            .feedback
            .iter()
            .any(|f| f.contains("informal language")));
    }

    #[test]
    fn test_informal_tokens_match_inside_longer_words() {
        // Token matching is substring-based: "high" trips the "hi" rule.
        let evaluation = scorer().evaluate("Set a high bar for quality", 2024);
        assert!(evaluation
            .feedback
            .iter()
            .any(|f| f.contains("informal language")));
    }

    #[test]
    fn test_organization_requires_lines_and_words() {
        let lined = scorer().evaluate(&"line\n".repeat(11), 2024);
        assert!(!lined.feedback.iter().any(|f| f.contains("organization")));

        let blank = scorer().evaluate(&"\n".repeat(11), 2024);
        assert!(blank.feedback.iter().any(|f| f.contains("organization")));

        let too_few = scorer().evaluate(&"line\n".repeat(10), 2024);
        assert!(too_few.feedback.iter().any(|f| f.contains("organization")));
    }

    #[test]
    fn test_education_years_flow_into_evaluation() {
        let text = "Education\nB.Tech 2019, M.Tech 2015\n\nExperience 2023";
        let evaluation = scorer().evaluate(text, 2024);
        assert_eq!(evaluation.passing_year, Some(2019));
        assert_eq!(evaluation.experience_years, Some(5));
    }

    #[test]
    fn test_missing_passing_year_note_comes_last() {
        let evaluation = scorer().evaluate("Education listed only", 2024);
        let last = evaluation.feedback.last().expect("feedback present");
        assert!(last.contains("passing year"));
    }

    #[test]
    fn test_absent_years_serialize_as_null() {
        let evaluation = scorer().evaluate("", 2024);
        let value = serde_json::to_value(&evaluation).expect("serializes");
        assert!(value.get("passing_year").expect("key present").is_null());
        assert!(value.get("experience_years").expect("key present").is_null());
        assert!(value["feedback"].is_array());
    }

    #[test]
    fn test_custom_bullet_marker_is_honored() {
        let mut rules = ScoringRules::default();
        rules.bullet_marker = "- ".to_string();
        rules.bullet_threshold = 2;
        let custom = RuleScorer::new(&rules).expect("custom rules compile");

        let text = "- one\n- two\n- three\n";
        let with_custom = custom.evaluate(text, 2024);
        let with_default = scorer().evaluate(text, 2024);
        assert_eq!(with_custom.score, with_default.score + BULLET_POINTS);
    }

    #[test]
    fn test_custom_section_rules_drive_feedback() {
        let mut rules = ScoringRules::default();
        rules.sections = vec![SectionRule::new("Publications", &["publications"])];
        let custom = RuleScorer::new(&rules).expect("custom rules compile");

        let missing = custom.evaluate("No papers to report", 2024);
        assert!(missing
            .feedback
            .iter()
            .any(|f| f == "Missing key section: Publications. Please include this."));

        let present = custom.evaluate("Publications: two journal papers", 2024);
        assert_eq!(present.score, missing.score + SECTION_POINTS);
    }
}
