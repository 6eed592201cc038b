use chrono::{DateTime, Duration, Utc};

use quiz_core::model::{Answer, Question, QuizType};
use quiz_core::score::score_quiz;

use crate::error::SessionError;

/// Lifecycle stage of one quiz attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Quiz,
    Results,
}

/// What happens to the uploaded-document reference when the user restarts.
///
/// Both behaviors exist in the wild; the composition root picks one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Keep the reference so the next quiz reuses the same PDF.
    #[default]
    KeepDocument,
    /// Drop the reference; the user uploads again.
    ClearDocument,
}

/// The single mutable session object.
///
/// Only the flow controller holds write access; child views receive
/// callbacks. The transition methods below are the entire mutation surface,
/// and a wrong-stage call returns a typed error rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    stage: Stage,
    quiz_type: QuizType,
    topic: String,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    score: u32,
    error: Option<String>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Setup,
            quiz_type: QuizType::OpenEnded,
            topic: String::new(),
            questions: Vec::new(),
            answers: Vec::new(),
            score: 0,
            error: None,
            started_at: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn quiz_type(&self) -> QuizType {
        self.quiz_type
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Wall-clock time from submit to finish, once both ends exist.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Setup → Quiz. Clears any previous questions, answers, score, and
    /// error before the generation request goes out.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongStage` unless the session is in setup.
    pub fn begin(
        &mut self,
        quiz_type: QuizType,
        topic: String,
        at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.expect_stage(Stage::Setup)?;
        self.stage = Stage::Quiz;
        self.quiz_type = quiz_type;
        self.topic = topic;
        self.questions.clear();
        self.answers.clear();
        self.score = 0;
        self.error = None;
        self.started_at = Some(at);
        self.completed_at = None;
        Ok(())
    }

    /// The generation request succeeded: store the questions and one blank
    /// answer slot per question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongStage` unless the session is in the quiz
    /// stage.
    pub fn questions_loaded(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        self.expect_stage(Stage::Quiz)?;
        self.answers = vec![Answer::empty(); questions.len()];
        self.questions = questions;
        self.error = None;
        Ok(())
    }

    /// The generation request failed: enter the error sub-state. The session
    /// stays in the quiz stage with no questions; the view offers a single
    /// retry path back to setup.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongStage` unless the session is in the quiz
    /// stage.
    pub fn generation_failed(
        &mut self,
        message: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.expect_stage(Stage::Quiz)?;
        self.questions.clear();
        self.answers.clear();
        self.error = Some(message.into());
        Ok(())
    }

    /// Quiz → Results. Stores the final answers and the aggregate score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongStage` unless the session is in the quiz
    /// stage, and `SessionError::AnswerCountMismatch` when the answer list
    /// is not index-aligned with the questions.
    pub fn complete(
        &mut self,
        answers: Vec<Answer>,
        at: DateTime<Utc>,
    ) -> Result<u32, SessionError> {
        self.expect_stage(Stage::Quiz)?;
        if answers.len() != self.questions.len() {
            return Err(SessionError::AnswerCountMismatch {
                questions: self.questions.len(),
                answers: answers.len(),
            });
        }
        self.score = score_quiz(&self.questions, &answers);
        self.answers = answers;
        self.stage = Stage::Results;
        self.completed_at = Some(at);
        Ok(self.score)
    }

    /// Back to a fresh setup stage. Allowed from any stage: the results view
    /// restarts here and the error sub-state's retry lands here too.
    /// Whether the uploaded-document reference survives is the controller's
    /// [`RestartPolicy`], not the session's concern.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    fn expect_stage(&self, expected: Stage) -> Result<(), SessionError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SessionError::WrongStage {
                expected,
                actual: self.stage,
            })
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::TrueFalseQuestion;
    use quiz_core::time::fixed_now;

    fn true_false(prompt: &str, answer: bool) -> Question {
        Question::TrueFalse(TrueFalseQuestion::new(prompt, answer).unwrap())
    }

    #[test]
    fn begin_clears_previous_attempt() {
        let mut session = QuizSession::new();
        session
            .begin(QuizType::TrueFalse, "rivers".into(), fixed_now())
            .unwrap();
        session
            .questions_loaded(vec![true_false("Q1", true)])
            .unwrap();
        session
            .complete(vec![Answer::new("true")], fixed_now())
            .unwrap();
        assert_eq!(session.score(), 1);

        session.restart();
        session
            .begin(QuizType::OpenEnded, String::new(), fixed_now())
            .unwrap();
        assert_eq!(session.stage(), Stage::Quiz);
        assert!(session.questions().is_empty());
        assert!(session.answers().is_empty());
        assert_eq!(session.score(), 0);
        assert!(session.error().is_none());
    }

    #[test]
    fn questions_loaded_aligns_blank_answers() {
        let mut session = QuizSession::new();
        session
            .begin(QuizType::TrueFalse, String::new(), fixed_now())
            .unwrap();
        session
            .questions_loaded(vec![true_false("Q1", true), true_false("Q2", false)])
            .unwrap();
        assert_eq!(session.answers().len(), 2);
        assert!(session.answers().iter().all(Answer::is_blank));
    }

    #[test]
    fn generation_failure_enters_error_substate() {
        let mut session = QuizSession::new();
        session
            .begin(QuizType::MultipleChoice, String::new(), fixed_now())
            .unwrap();
        session.generation_failed("An error occurred.").unwrap();

        assert_eq!(session.stage(), Stage::Quiz);
        assert_eq!(session.error(), Some("An error occurred."));
        assert!(session.questions().is_empty());

        session.restart();
        assert_eq!(session.stage(), Stage::Setup);
        assert!(session.error().is_none());
    }

    #[test]
    fn complete_scores_and_stamps_duration() {
        let mut session = QuizSession::new();
        let start = fixed_now();
        session
            .begin(QuizType::TrueFalse, String::new(), start)
            .unwrap();
        session
            .questions_loaded(vec![true_false("Q1", true), true_false("Q2", false)])
            .unwrap();

        let end = start + Duration::seconds(90);
        let score = session
            .complete(vec![Answer::new("true"), Answer::new("true")], end)
            .unwrap();

        assert_eq!(score, 1);
        assert_eq!(session.stage(), Stage::Results);
        assert_eq!(session.duration(), Some(Duration::seconds(90)));
    }

    #[test]
    fn complete_rejects_misaligned_answers() {
        let mut session = QuizSession::new();
        session
            .begin(QuizType::TrueFalse, String::new(), fixed_now())
            .unwrap();
        session
            .questions_loaded(vec![true_false("Q1", true)])
            .unwrap();

        let err = session.complete(Vec::new(), fixed_now()).unwrap_err();
        assert_eq!(
            err,
            SessionError::AnswerCountMismatch {
                questions: 1,
                answers: 0
            }
        );
    }

    #[test]
    fn wrong_stage_calls_are_typed_errors() {
        let mut session = QuizSession::new();
        let err = session.questions_loaded(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SessionError::WrongStage {
                expected: Stage::Quiz,
                actual: Stage::Setup
            }
        );

        session
            .begin(QuizType::OpenEnded, String::new(), fixed_now())
            .unwrap();
        let err = session
            .begin(QuizType::OpenEnded, String::new(), fixed_now())
            .unwrap_err();
        assert!(matches!(err, SessionError::WrongStage { .. }));
    }
}
