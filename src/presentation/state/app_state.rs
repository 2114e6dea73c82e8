use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::StudyService;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub study_service: Arc<StudyService<F, L>>,
    pub max_upload_bytes: usize,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            study_service: Arc::clone(&self.study_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
