use thiserror::Error;

use crate::model::quiz_type::QuizType;

/// Multiple-choice questions always carry exactly this many options.
pub const MCQ_OPTION_COUNT: usize = 4;

//
// ─── QUESTION VARIANTS ─────────────────────────────────────────────────────────
//

/// Free-text question with a model answer used only for loose matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEndedQuestion {
    prompt: String,
    answer: String,
}

impl OpenEndedQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    /// An empty model answer is allowed; it simply never matches.
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        Ok(Self {
            prompt,
            answer: answer.into(),
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Four options, one of which is correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceQuestion {
    prompt: String,
    options: Vec<String>,
    answer_index: usize,
}

impl MultipleChoiceQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank,
    /// `QuestionError::OptionCount` unless exactly four options are given,
    /// and `QuestionError::AnswerIndexOutOfRange` for an index outside them.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() != MCQ_OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                expected: MCQ_OPTION_COUNT,
                got: options.len(),
            });
        }
        if answer_index >= options.len() {
            return Err(QuestionError::AnswerIndexOutOfRange {
                index: answer_index,
                count: options.len(),
            });
        }
        Ok(Self {
            prompt,
            options,
            answer_index,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.answer_index]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseQuestion {
    prompt: String,
    answer: bool,
}

impl TrueFalseQuestion {
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    pub fn new(prompt: impl Into<String>, answer: bool) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        Ok(Self { prompt, answer })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> bool {
        self.answer
    }
}

//
// ─── QUESTION SUM TYPE ─────────────────────────────────────────────────────────
//

/// A generated question. Constructing a variant goes through the typed
/// constructors above, so an in-memory question always satisfies its shape
/// invariants; consumers match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    OpenEnded(OpenEndedQuestion),
    MultipleChoice(MultipleChoiceQuestion),
    TrueFalse(TrueFalseQuestion),
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Question::OpenEnded(q) => q.prompt(),
            Question::MultipleChoice(q) => q.prompt(),
            Question::TrueFalse(q) => q.prompt(),
        }
    }

    /// The quiz type this question belongs to.
    #[must_use]
    pub fn quiz_type(&self) -> QuizType {
        match self {
            Question::OpenEnded(_) => QuizType::OpenEnded,
            Question::MultipleChoice(_) => QuizType::MultipleChoice,
            Question::TrueFalse(_) => QuizType::TrueFalse,
        }
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("expected exactly {expected} options, got {got}")]
    OptionCount { expected: usize, got: usize },

    #[error("answer index {index} is out of range for {count} options")]
    AnswerIndexOutOfRange { index: usize, count: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
