use async_trait::async_trait;

use quiz_core::model::{DocumentId, Question, QuizType, UploadedDocument};

use crate::error::ApiError;

/// Boundary to the remote upload/generation service.
///
/// The UI only ever talks to this trait; the HTTP implementation lives in
/// [`crate::api::HttpQuizBackend`] and tests substitute in-process fakes.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Send a PDF for indexing and return the backend-issued document
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or a non-success backend status.
    async fn upload_pdf(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedDocument, ApiError>;

    /// Request `count` questions of `quiz_type` about `topic` (empty topic
    /// means "the whole document") from the given uploaded document.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure, a non-success backend status,
    /// or a malformed question record in the response.
    async fn generate(
        &self,
        quiz_type: QuizType,
        topic: &str,
        count: u32,
        doc_id: &DocumentId,
    ) -> Result<Vec<Question>, ApiError>;
}
