use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use mentor_core::model::{Flashcard, Question, Resource, SessionInput};

use crate::config::ServerConfig;
use crate::error::GenerationError;

/// Client for the four study-aid endpoints.
///
/// Every call is one `multipart/form-data` POST with an optional `pdf` bytes
/// part and/or a `url` text part; there are no retries and no timeouts. Each
/// flow is independent, so callers may run several requests concurrently on
/// one service.
#[derive(Clone)]
pub struct GenerationService {
    client: Client,
    config: ServerConfig,
}

impl GenerationService {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns `GenerationError` for transport failures, non-2xx statuses,
    /// server-embedded errors, or an empty payload.
    pub async fn generate_summary(
        &self,
        input: &SessionInput,
    ) -> Result<String, GenerationError> {
        let body: SummaryEnvelope = self.post_study_aid("/generate_summary", input).await?;
        body.summary.ok_or(GenerationError::EmptyResponse)
    }

    /// # Errors
    ///
    /// Same failure modes as [`GenerationService::generate_summary`].
    pub async fn generate_quiz(
        &self,
        input: &SessionInput,
    ) -> Result<Vec<Question>, GenerationError> {
        let body: QuizEnvelope = self.post_study_aid("/generate_quiz", input).await?;
        body.quiz.ok_or(GenerationError::EmptyResponse)
    }

    /// # Errors
    ///
    /// Same failure modes as [`GenerationService::generate_summary`].
    pub async fn generate_flashcards(
        &self,
        input: &SessionInput,
    ) -> Result<Vec<Flashcard>, GenerationError> {
        let body: FlashcardsEnvelope = self.post_study_aid("/generate_flashcards", input).await?;
        body.flashcards.ok_or(GenerationError::EmptyResponse)
    }

    /// # Errors
    ///
    /// Same failure modes as [`GenerationService::generate_summary`].
    pub async fn generate_resources(
        &self,
        input: &SessionInput,
    ) -> Result<Vec<Resource>, GenerationError> {
        let body: ResourcesEnvelope = self
            .post_study_aid("/generate_educational_resources", input)
            .await?;
        body.resources.ok_or(GenerationError::EmptyResponse)
    }

    /// Shared request shape for all four flows.
    async fn post_study_aid<T: DeserializeOwned>(
        &self,
        path: &str,
        input: &SessionInput,
    ) -> Result<T, GenerationError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, has_file = input.file.is_some(), "posting generation request");

        let response = self
            .client
            .post(url)
            .multipart(multipart_form(input)?)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), path, "generation request failed");
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ErrorEnvelope<T> = response.json().await?;
        if let Some(message) = body.error {
            return Err(GenerationError::Server(message));
        }
        Ok(body.payload)
    }
}

/// Build the request body: `pdf` bytes part if a file is selected, `url`
/// text part if the URL field is non-blank. Both may be present; the server
/// prefers the file.
fn multipart_form(input: &SessionInput) -> Result<Form, GenerationError> {
    let mut form = Form::new();
    if let Some(file) = input.file.as_ref() {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str("application/pdf")?;
        form = form.part("pdf", part);
    }
    if let Some(url) = input.trimmed_url() {
        form = form.text("url", url.to_string());
    }
    Ok(form)
}

/// 2xx bodies either carry the payload or an `error` string.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope<T> {
    error: Option<String>,
    #[serde(flatten)]
    payload: T,
}

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuizEnvelope {
    quiz: Option<Vec<Question>>,
}

#[derive(Debug, Deserialize)]
struct FlashcardsEnvelope {
    flashcards: Option<Vec<Flashcard>>,
}

#[derive(Debug, Deserialize)]
struct ResourcesEnvelope {
    resources: Option<Vec<Resource>>,
}
