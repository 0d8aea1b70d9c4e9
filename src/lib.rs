//! Café Persona
//!
//! Scoring engine for the "what café item are you" questionnaire:
//! - Bounded five-axis trait vectors with per-step clamping
//! - An override rule that preempts distance search
//! - Weighted nearest-target classification with deterministic ties
//! - URL-safe answer tokens for storage-free share links

pub mod content;
pub mod error;
pub mod scoring;
pub mod share;

// Re-exports for convenience
pub use content::{ContentManager, QuizContent};
pub use error::{ContentError, ScoringError, UnknownCategoryKey};
pub use scoring::{
    build_vector, clamp, classify, is_override, AnswerSet, Axis, AxisWeights, CategoryKey, CategoryProfile,
    ChoiceDelta, Classifier, OverrideRule, Question, QuizOption, TraitVector,
};
pub use share::{decode, encode, Resolution, ResolutionSource, ShareLink};
