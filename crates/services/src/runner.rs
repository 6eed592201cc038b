use quiz_core::model::Answer;

/// Outcome of a forward step through the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerStep {
    /// Moved to the next question.
    Advanced,
    /// The last question was answered; the full answer list is handed to the
    /// completion callback.
    Finished(Vec<Answer>),
    /// The blank-answer gate refused to advance.
    Blocked,
}

/// Steps through questions one at a time, collecting one answer per index.
///
/// Forward navigation is gated on a non-blank current answer; backward
/// navigation is unguarded. Writing an answer touches only the current slot,
/// so going back never loses earlier input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRunner {
    current: usize,
    answers: Vec<Answer>,
}

impl QuizRunner {
    /// A runner over `total` questions, all initially unanswered. A zero
    /// total produces an empty runner on which no transition is possible.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            answers: vec![Answer::empty(); total],
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.is_empty() && self.current == self.answers.len() - 1
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn current_answer(&self) -> &Answer {
        static BLANK: Answer = Answer::empty();
        self.answers.get(self.current).unwrap_or(&BLANK)
    }

    /// Write the answer for the current question, leaving every other slot
    /// untouched. Re-selecting the same value is a no-op in effect.
    pub fn set_answer(&mut self, value: impl Into<Answer>) {
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = value.into();
        }
    }

    /// Whether the forward gate is open: the current answer is non-blank.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_empty() && !self.current_answer().is_blank()
    }

    /// Advance, or finish on the last question. Never advances past a blank
    /// answer and never finishes an empty runner.
    pub fn next(&mut self) -> RunnerStep {
        if !self.can_advance() {
            return RunnerStep::Blocked;
        }
        if self.is_last() {
            return RunnerStep::Finished(self.answers.clone());
        }
        self.current += 1;
        RunnerStep::Advanced
    }

    /// Step back one question. Returns false at the first question.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
