use thiserror::Error;

use crate::model::ParseQuizTypeError;
use crate::model::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuizType(#[from] ParseQuizTypeError),
}
