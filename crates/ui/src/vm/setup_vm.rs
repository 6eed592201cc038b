use quiz_core::model::{DocumentId, QuizType};

/// Everything the setup form hands the flow controller on submit.
///
/// The form performs no network call of its own; generation belongs to the
/// flow controller.
#[derive(Clone, Debug, PartialEq)]
pub struct SetupSubmission {
    pub quiz_type: QuizType,
    pub topic: String,
    pub count: u32,
    pub doc_id: DocumentId,
}

/// The submit gate: a quiz type is chosen, the question count parsed as a
/// positive integer, a document reference exists, and no generation request
/// is in flight.
#[must_use]
pub fn can_submit(
    quiz_type: Option<QuizType>,
    count: Option<u32>,
    has_document: bool,
    generating: bool,
) -> bool {
    quiz_type.is_some() && count.is_some_and(|n| n > 0) && has_document && !generating
}
