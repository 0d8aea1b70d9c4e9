//! Quiz content: the question table, category targets and scoring tunables.
//!
//! Content is authored as JSON and treated as immutable once loaded. The
//! scoring functions receive it explicitly; nothing here is global.

mod manager;

pub use manager::ContentManager;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ContentError, ScoringError};
use crate::scoring::{
    build_vector, AnswerSet, Axis, AxisWeights, CategoryKey, CategoryProfile, Classifier, OverrideRule, Question,
    TraitVector, AXIS_MAX, AXIS_MIN, DEFAULT_CATEGORY, OVERRIDE_CATEGORY,
};
use crate::share::ShareLink;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 3;

const BUILTIN_CONTENT: &str = include_str!("../../content/default_quiz.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizContent {
    pub questions: Vec<Question>,
    pub profiles: Vec<CategoryProfile>,
    #[serde(default)]
    pub weights: AxisWeights,
    #[serde(default)]
    pub override_rule: OverrideRule,
    #[serde(default = "default_override_key")]
    pub override_key: CategoryKey,
    #[serde(default = "default_result_key")]
    pub default_key: CategoryKey,
}

fn default_override_key() -> CategoryKey {
    OVERRIDE_CATEGORY
}

fn default_result_key() -> CategoryKey {
    DEFAULT_CATEGORY
}

impl QuizContent {
    /// The questionnaire bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parse and validate content JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(ContentError::DuplicateQuestion { question_id: question.id.clone() });
            }
            let count = question.options.len();
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                return Err(ContentError::OptionCount { question_id: question.id.clone(), count });
            }
            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(ContentError::DuplicateOption {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }
        }

        let mut keys = HashSet::new();
        for profile in &self.profiles {
            if !keys.insert(profile.key) {
                return Err(ContentError::DuplicateProfile { key: profile.key });
            }
            check_target(profile.key, &profile.target)?;
        }
        if !keys.contains(&self.override_key) {
            return Err(ContentError::MissingOverrideProfile { override_key: self.override_key });
        }
        if keys.len() < 2 {
            return Err(ContentError::NoOrdinaryProfiles { override_key: self.override_key });
        }
        Ok(())
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.override_key)
            .with_weights(self.weights)
            .with_rule(self.override_rule.clone())
    }

    pub fn build_vector(&self, answers: &AnswerSet) -> TraitVector {
        build_vector(answers, &self.questions)
    }

    /// Build the vector and classify it in one pass.
    pub fn score(&self, answers: &AnswerSet) -> Result<CategoryKey, ScoringError> {
        self.classifier().classify(&self.build_vector(answers), &self.profiles)
    }

    /// Score the answers and package the result as a share link.
    pub fn share_link(&self, answers: &AnswerSet) -> Result<ShareLink, ScoringError> {
        let key = self.score(answers)?;
        Ok(ShareLink::new(key, answers))
    }
}

fn check_target(key: CategoryKey, target: &TraitVector) -> Result<(), ContentError> {
    for axis in Axis::ALL {
        let value = target.get(axis);
        if !(AXIS_MIN..=AXIS_MAX).contains(&value) {
            return Err(ContentError::TargetOutOfRange { key, axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ChoiceDelta, QuizOption};

    fn minimal() -> QuizContent {
        QuizContent {
            questions: vec![Question::new("q1", "Pick one", vec![
                QuizOption::new("a", "A", ChoiceDelta::new().with(Axis::Energy, 3.0)),
                QuizOption::new("b", "B", ChoiceDelta::new().with(Axis::Social, 3.0)),
            ])],
            profiles: vec![
                CategoryProfile::new(CategoryKey::Espresso, TraitVector::zero().with(Axis::Energy, 3.0)),
                CategoryProfile::new(CategoryKey::Cappuccino, TraitVector::zero().with(Axis::Social, 3.0)),
                CategoryProfile::new(CategoryKey::SecretChair, TraitVector::zero()),
            ],
            weights: AxisWeights::default(),
            override_rule: OverrideRule::default(),
            override_key: OVERRIDE_CATEGORY,
            default_key: DEFAULT_CATEGORY,
        }
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let content = QuizContent::builtin().unwrap();
        assert_eq!(content.questions.len(), 8);
        assert_eq!(content.profiles.len(), CategoryKey::ALL.len());
        assert_eq!(content.override_key, CategoryKey::SecretChair);
        assert_eq!(content.default_key, CategoryKey::MatchaLatte);
        assert_eq!(content.weights, AxisWeights::default());
    }

    #[test]
    fn test_score_uses_content_configuration() {
        let content = minimal();
        let a: AnswerSet = [("q1", "a")].into_iter().collect();
        let b: AnswerSet = [("q1", "b")].into_iter().collect();
        assert_eq!(content.score(&a).unwrap(), CategoryKey::Espresso);
        assert_eq!(content.score(&b).unwrap(), CategoryKey::Cappuccino);
    }

    #[test]
    fn test_option_count_bounds() {
        let mut content = minimal();
        content.questions[0].options.truncate(1);
        assert_eq!(
            content.validate(),
            Err(ContentError::OptionCount { question_id: "q1".to_string(), count: 1 })
        );

        let mut content = minimal();
        for id in ["c", "d"] {
            content.questions[0].options.push(QuizOption::new(id, id, ChoiceDelta::new()));
        }
        assert!(matches!(content.validate(), Err(ContentError::OptionCount { count: 4, .. })));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut content = minimal();
        content.questions.push(content.questions[0].clone());
        assert!(matches!(content.validate(), Err(ContentError::DuplicateQuestion { .. })));

        let mut content = minimal();
        content.questions[0].options[1].id = "a".to_string();
        assert!(matches!(content.validate(), Err(ContentError::DuplicateOption { .. })));

        let mut content = minimal();
        content.profiles.push(content.profiles[0].clone());
        assert_eq!(content.validate(), Err(ContentError::DuplicateProfile { key: CategoryKey::Espresso }));
    }

    #[test]
    fn test_profile_set_must_have_override_and_ordinary_entries() {
        let mut content = minimal();
        content.profiles.retain(|p| p.key != CategoryKey::SecretChair);
        assert!(matches!(content.validate(), Err(ContentError::MissingOverrideProfile { .. })));

        let mut content = minimal();
        content.profiles.retain(|p| p.key == CategoryKey::SecretChair);
        assert!(matches!(content.validate(), Err(ContentError::NoOrdinaryProfiles { .. })));
    }

    #[test]
    fn test_out_of_range_target_is_rejected() {
        let mut content = minimal();
        content.profiles[1].target.chaos = 11.0;
        assert_eq!(
            content.validate(),
            Err(ContentError::TargetOutOfRange { key: CategoryKey::Cappuccino, axis: Axis::Chaos, value: 11.0 })
        );
    }

    #[test]
    fn test_tunables_default_when_omitted() {
        let json = r#"{
            "questions": [{"id": "q1", "prompt": "?", "options": [
                {"id": "a", "label": "A", "delta": {"energy": 2}},
                {"id": "b", "label": "B"}
            ]}],
            "profiles": [
                {"key": "chai", "target": {"energy": 2}},
                {"key": "secret_chair", "target": {}}
            ]
        }"#;
        let content = QuizContent::from_json(json).unwrap();
        assert_eq!(content.override_rule, OverrideRule::default());
        assert_eq!(content.override_key, CategoryKey::SecretChair);
        assert!(content.questions[0].options[1].delta.is_empty());
    }

    #[test]
    fn test_from_json_reports_validation_errors() {
        let json = r#"{"questions": [], "profiles": []}"#;
        let err = QuizContent::from_json(json).unwrap_err();
        assert_eq!(err.downcast_ref::<ContentError>(), Some(&ContentError::NoQuestions));
    }
}
