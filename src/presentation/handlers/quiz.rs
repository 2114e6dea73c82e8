use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::QuizItem;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_upload;

#[derive(Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizItem>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn quiz_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<QuizResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let upload = read_upload(multipart).await?;

    let quiz = state
        .study_service
        .quiz(&upload.data, &upload.document)
        .await?;

    Ok(Json(QuizResponse { quiz }))
}
