use crate::scoring::rules::CompiledRules;

/// Graduation year and experience estimate pulled out of the education block.
///
/// All fields stay `None` when the text has no education block; `feedback`
/// carries the advisory note when the block exists but holds no usable year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEstimate {
    pub passing_year: Option<i32>,
    pub experience_years: Option<i32>,
    pub feedback: Option<String>,
}

impl ExperienceEstimate {
    fn empty() -> Self {
        Self {
            passing_year: None,
            experience_years: None,
            feedback: None,
        }
    }
}

/// Estimates years of experience from the education block.
///
/// The block runs from the first "education" mention to the next blank line.
/// The latest four-digit year inside it (1900–2099) counts as the passing
/// year; experience is the distance to `current_year`, floored at zero so a
/// listed future graduation reads as zero experience rather than negative.
pub fn estimate_experience(
    text: &str,
    rules: &CompiledRules,
    current_year: i32,
) -> ExperienceEstimate {
    let Some(block) = rules.education_section.find(text) else {
        return ExperienceEstimate::empty();
    };

    let latest_year = rules
        .year
        .find_iter(block.as_str())
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .max();

    match latest_year {
        Some(passing_year) => ExperienceEstimate {
            passing_year: Some(passing_year),
            experience_years: Some((current_year - passing_year).max(0)),
            feedback: None,
        },
        None => ExperienceEstimate {
            passing_year: None,
            experience_years: None,
            feedback: Some(
                "Could not find a clear passing year. Make sure to include this information."
                    .to_string(),
            ),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
