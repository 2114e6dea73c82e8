use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

/// Decodes uploads as UTF-8, falling back to Latin-1 so any byte sequence
/// yields text.
pub struct PlainTextAdapter;

impl PlainTextAdapter {
    pub fn decode(data: &[u8]) -> String {
        match std::str::from_utf8(data) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::debug!(
                    valid_up_to = e.valid_up_to(),
                    "Upload is not UTF-8, decoding as Latin-1"
                );
                data.iter().copied().map(char::from).collect()
            }
        }
    }
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Text {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        Ok(Self::decode(data))
    }
}
