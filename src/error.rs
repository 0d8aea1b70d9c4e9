//! Error types for scoring and content configuration.

use thiserror::Error;

use crate::scoring::{Axis, CategoryKey};

/// Failures raised by classification.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    /// Every configured profile is the override category (or there are none).
    #[error("No eligible category profiles: candidate set is empty once {override_key} is excluded")]
    EmptyCandidateSet {
        override_key: CategoryKey,
    },

    /// Distance weights must be finite and strictly positive.
    #[error("Invalid weight for axis {axis}: {value}")]
    InvalidWeight {
        axis: Axis,
        value: f64,
    },
}

/// Problems found while validating quiz content.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContentError {
    #[error("Questionnaire has no questions")]
    NoQuestions,

    #[error("Question '{question_id}' has {count} options (expected 2-3)")]
    OptionCount {
        question_id: String,
        count: usize,
    },

    #[error("Duplicate question id '{question_id}'")]
    DuplicateQuestion {
        question_id: String,
    },

    #[error("Duplicate option id '{option_id}' in question '{question_id}'")]
    DuplicateOption {
        question_id: String,
        option_id: String,
    },

    #[error("Duplicate profile for category {key}")]
    DuplicateProfile {
        key: CategoryKey,
    },

    #[error("No profile for override category {override_key}")]
    MissingOverrideProfile {
        override_key: CategoryKey,
    },

    #[error("No ordinary profiles besides override category {override_key}")]
    NoOrdinaryProfiles {
        override_key: CategoryKey,
    },

    #[error("Profile {key} target {axis}={value} is outside [0, 10]")]
    TargetOutOfRange {
        key: CategoryKey,
        axis: Axis,
        value: f64,
    },
}

/// A category key that is not part of the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown category key: '{0}'")]
pub struct UnknownCategoryKey(pub String);
