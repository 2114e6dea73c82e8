use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::Summary;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_upload;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: Summary,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<SummaryResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let upload = read_upload(multipart).await?;

    let summary = state
        .study_service
        .summarize(&upload.data, &upload.document)
        .await?;

    Ok(Json(SummaryResponse { summary }))
}
