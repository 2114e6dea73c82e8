use std::sync::Arc;

use study_helper::application::ports::{FileLoader, FileLoaderError};
use study_helper::domain::{Document, DocumentFormat};
use study_helper::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

#[tokio::test]
async fn given_pdf_upload_when_loading_then_delegates_to_pdf_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();
    let pdf_bytes = include_bytes!("../../fixtures/sample.pdf");
    let document = Document::from_upload("Sample.PDF".to_string(), pdf_bytes.len() as u64);

    let result = loader.extract_text(pdf_bytes, &document).await;

    assert!(result.unwrap().contains("Photosynthesis"));
}

#[tokio::test]
async fn given_unknown_extension_when_loading_then_decodes_as_text() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = b"Markdown notes\n# Heading";
    let document = Document::from_upload("notes.md".to_string(), data.len() as u64);

    let result = loader.extract_text(data, &document).await;

    assert_eq!(result.unwrap(), "Markdown notes\n# Heading");
}

#[tokio::test]
async fn given_unregistered_format_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(DocumentFormat::Text, text_adapter)]);
    let document = Document::from_upload("essay.docx".to_string(), 4);

    let result = loader.extract_text(b"data", &document).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
