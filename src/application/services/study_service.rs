use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{Document, Flashcard, QuizItem, Summary};

use super::completion_parser::{parse_flashcards, parse_quiz};
use super::prompts::StudyAid;

/// Extracts an uploaded document, asks the model for a study aid and shapes
/// the completion into records. Holds no per-request state.
pub struct StudyService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
}

impl<F, L> StudyService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    #[tracing::instrument(skip(self, data, document), fields(filename = %document.filename))]
    pub async fn summarize(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Summary, StudyServiceError> {
        let completion = self.generate(StudyAid::Summary, data, document).await?;
        let summary = Summary::from_completion(&completion);

        tracing::info!(chars = summary.as_str().len(), "Summary generated");
        Ok(summary)
    }

    #[tracing::instrument(skip(self, data, document), fields(filename = %document.filename))]
    pub async fn flashcards(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<Flashcard>, StudyServiceError> {
        let completion = self.generate(StudyAid::Flashcards, data, document).await?;
        let flashcards = parse_flashcards(&completion);

        tracing::info!(count = flashcards.len(), "Flashcards parsed");
        Ok(flashcards)
    }

    #[tracing::instrument(skip(self, data, document), fields(filename = %document.filename))]
    pub async fn quiz(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<QuizItem>, StudyServiceError> {
        let completion = self.generate(StudyAid::Quiz, data, document).await?;
        let quiz = parse_quiz(&completion);

        tracing::info!(count = quiz.len(), "Quiz parsed");
        Ok(quiz)
    }

    async fn generate(
        &self,
        aid: StudyAid,
        data: &[u8],
        document: &Document,
    ) -> Result<String, StudyServiceError> {
        let material = self.file_loader.extract_text(data, document).await?;

        tracing::debug!(
            format = document.format.as_str(),
            bytes = document.size_bytes,
            chars = material.len(),
            "Text extracted"
        );

        let completion = self
            .llm_client
            .complete(aid.system_prompt(), &aid.user_prompt(&material))
            .await?;

        tracing::debug!(
            aid = aid.as_str(),
            chars = completion.len(),
            "Completion received"
        );

        Ok(completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StudyServiceError {
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
