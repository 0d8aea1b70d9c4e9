//! Scoring Module
//!
//! Answer folding, the override rule and nearest-target classification.

mod answers;
mod builder;
mod category;
pub mod classifier;
pub mod override_rule;
mod question;
mod vector;

pub use answers::AnswerSet;
pub use builder::build_vector;
pub use category::{CategoryKey, CategoryProfile, DEFAULT_CATEGORY, OVERRIDE_CATEGORY};
pub use classifier::{classify, weighted_distance, AxisWeights, Classifier};
pub use override_rule::{is_override, OverrideRule};
pub use question::{Question, QuizOption};
pub use vector::{clamp, Axis, ChoiceDelta, TraitVector, AXIS_MAX, AXIS_MIN};
