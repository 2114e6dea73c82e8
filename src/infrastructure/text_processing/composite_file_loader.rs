use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF, DOCX and plain-text adapters, one per format.
    pub fn with_default_adapters() -> Self {
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx_adapter: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (DocumentFormat::Pdf, pdf_adapter),
            (DocumentFormat::Docx, docx_adapter),
            (DocumentFormat::Text, text_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            FileLoaderError::UnsupportedFormat(document.format.as_str().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
