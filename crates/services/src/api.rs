use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use url::Url;

use quiz_core::model::{
    DocumentId, MultipleChoiceQuestion, OpenEndedQuestion, Question, QuizType, TrueFalseQuestion,
    UploadedDocument,
};

use crate::backend::QuizBackend;
use crate::error::ApiError;

/// Default backend base URL when neither flag nor environment override it.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::BaseUrl` when the value is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// HTTP implementation of [`QuizBackend`] against the REST backend.
#[derive(Clone)]
pub struct HttpQuizBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpQuizBackend {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl QuizBackend for HttpQuizBackend {
    async fn upload_pdf(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedDocument, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.endpoint("upload-pdf"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body: UploadResponse = response.json().await?;
        decode_upload(body, filename)
    }

    async fn generate(
        &self,
        quiz_type: QuizType,
        topic: &str,
        count: u32,
        doc_id: &DocumentId,
    ) -> Result<Vec<Question>, ApiError> {
        let payload = GenerateRequest {
            query: topic,
            qs: count,
            doc_id: doc_id.as_str(),
        };

        let response = self
            .client
            .post(self.config.endpoint(quiz_type.as_str()))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        decode_generate(quiz_type, body)
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    query: &'a str,
    qs: u32,
    doc_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    status: String,
    #[serde(default)]
    doc_id: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    status: String,
    #[serde(default)]
    questions: Vec<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenEndedDto {
    question: String,
    #[serde(default)]
    answer: String,
}

#[derive(Debug, Deserialize)]
struct MultipleChoiceDto {
    question: String,
    options: Vec<String>,
    #[serde(rename = "answerIndex")]
    answer_index: usize,
}

#[derive(Debug, Deserialize)]
struct TrueFalseDto {
    question: String,
    answer: bool,
}

fn backend_failure(error: Option<String>, fallback: &str) -> ApiError {
    ApiError::Backend(error.unwrap_or_else(|| fallback.to_string()))
}

fn decode_upload(body: UploadResponse, local_name: &str) -> Result<UploadedDocument, ApiError> {
    if body.status != "success" {
        return Err(backend_failure(body.error, "Upload failed"));
    }
    let id = body.doc_id.ok_or(ApiError::MissingDocId)?;
    Ok(UploadedDocument {
        id: DocumentId::new(id),
        filename: body.filename.unwrap_or_else(|| local_name.to_string()),
    })
}

/// Validate the generation response at the boundary: an absent `questions`
/// field decodes as an empty list, a malformed record is a typed error.
fn decode_generate(
    quiz_type: QuizType,
    body: GenerateResponse,
) -> Result<Vec<Question>, ApiError> {
    if body.status != "success" {
        return Err(backend_failure(body.error, "Failed to fetch questions"));
    }

    body.questions
        .into_iter()
        .map(|value| decode_question(quiz_type, value))
        .collect()
}

fn decode_question(
    quiz_type: QuizType,
    value: serde_json::Value,
) -> Result<Question, ApiError> {
    match quiz_type {
        QuizType::OpenEnded => {
            let dto: OpenEndedDto = serde_json::from_value(value)?;
            Ok(Question::OpenEnded(OpenEndedQuestion::new(
                dto.question,
                dto.answer,
            )?))
        }
        QuizType::MultipleChoice => {
            let dto: MultipleChoiceDto = serde_json::from_value(value)?;
            Ok(Question::MultipleChoice(MultipleChoiceQuestion::new(
                dto.question,
                dto.options,
                dto.answer_index,
            )?))
        }
        QuizType::TrueFalse => {
            let dto: TrueFalseDto = serde_json::from_value(value)?;
            Ok(Question::TrueFalse(TrueFalseQuestion::new(
                dto.question,
                dto.answer,
            )?))
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
