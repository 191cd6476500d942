// Résumé scoring engine.
// Pure text-in, evaluation-out; extraction and storage live elsewhere.

pub mod engine;
pub mod experience;
pub mod rules;

pub use engine::{Evaluation, ResumeScorer, RuleScorer};
pub use rules::ScoringRules;
