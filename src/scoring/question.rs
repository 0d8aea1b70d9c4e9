use serde::{Deserialize, Serialize};

use super::vector::ChoiceDelta;

/// A selectable answer. The label is display text and never read by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub delta: ChoiceDelta,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, delta: ChoiceDelta) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            delta,
        }
    }
}

/// One questionnaire item with its ordered options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
