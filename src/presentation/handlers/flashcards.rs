use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::Flashcard;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_upload;

#[derive(Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn flashcards_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<FlashcardsResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let upload = read_upload(multipart).await?;

    let flashcards = state
        .study_service
        .flashcards(&upload.data, &upload.document)
        .await?;

    Ok(Json(FlashcardsResponse { flashcards }))
}
