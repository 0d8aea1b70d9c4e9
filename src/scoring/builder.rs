//! Folds an answer set into a trait vector.

use tracing::debug;

use super::answers::AnswerSet;
use super::question::Question;
use super::vector::{ChoiceDelta, TraitVector};

/// Build the respondent's trait vector.
///
/// Questions are visited in configuration order and the vector is clamped
/// after every applied option, so saturation is sticky: once an axis hits a
/// bound, further pushes in that direction are lost while pushes back move
/// from the bound. Unanswered questions and unknown option ids contribute
/// nothing.
pub fn build_vector(answers: &AnswerSet, questions: &[Question]) -> TraitVector {
    questions
        .iter()
        .fold(TraitVector::zero(), |vector, question| match chosen_delta(answers, question) {
            Some(delta) => vector.apply(delta),
            None => vector,
        })
}

fn chosen_delta<'a>(answers: &AnswerSet, question: &'a Question) -> Option<&'a ChoiceDelta> {
    let option_id = answers.get(&question.id)?;
    match question.option(option_id) {
        Some(option) => Some(&option.delta),
        None => {
            debug!(question = %question.id, option = %option_id, "ignoring answer for unknown option");
            None
        }
    }
}
