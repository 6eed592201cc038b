//! The correctness predicate and aggregate scorer.
//!
//! Both the quiz scorer and the results view call [`is_correct`]; keeping a
//! single predicate guarantees the displayed marks and the counted score
//! cannot diverge.

use crate::model::{Answer, Question};

/// Whether `answer` is correct for `question`.
///
/// Pure and total: blank or malformed answers are incorrect, never an error.
/// Open-ended questions use loose matching: bidirectional case-insensitive
/// substring containment, not exact or semantic comparison.
#[must_use]
pub fn is_correct(question: &Question, answer: &Answer) -> bool {
    match question {
        Question::MultipleChoice(q) => answer
            .choice_index()
            .is_some_and(|chosen| chosen == q.answer_index()),
        Question::TrueFalse(q) => !answer.is_blank() && answer.is_true() == q.answer(),
        Question::OpenEnded(q) => {
            let user = answer.as_str().trim().to_lowercase();
            let model = q.answer().trim().to_lowercase();
            !user.is_empty() && !model.is_empty() && (model.contains(&user) || user.contains(&model))
        }
    }
}

/// Count of correct answers across the session.
///
/// `answers` is index-aligned with `questions`; a missing trailing entry
/// counts as unanswered.
#[must_use]
pub fn score_quiz(questions: &[Question], answers: &[Answer]) -> u32 {
    let blank = Answer::empty();
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| is_correct(question, answers.get(*index).unwrap_or(&blank)))
        .count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}
