mod answer;
mod document;
mod question;
mod quiz_type;

pub use answer::Answer;
pub use document::{DocumentId, UploadedDocument};
pub use question::{
    MCQ_OPTION_COUNT, MultipleChoiceQuestion, OpenEndedQuestion, Question, QuestionError,
    TrueFalseQuestion,
};
pub use quiz_type::{ParseQuizTypeError, QuizType};
