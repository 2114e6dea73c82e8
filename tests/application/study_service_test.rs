use std::sync::Arc;

use study_helper::application::ports::{FileLoader, FileLoaderError};
use study_helper::application::services::{
    FLASHCARDS_SYSTEM_PROMPT, QUIZ_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT, StudyService,
    StudyServiceError,
};
use study_helper::domain::{Document, DocumentFormat, Flashcard};
use study_helper::infrastructure::llm::MockLlmClient;
use study_helper::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

const MATERIAL: &[u8] = b"Mitochondria are the powerhouse of the cell.";

fn text_document() -> Document {
    Document::from_upload("notes.txt".to_string(), MATERIAL.len() as u64)
}

fn service(llm: Arc<MockLlmClient>) -> StudyService<CompositeFileLoader, MockLlmClient> {
    StudyService::new(Arc::new(CompositeFileLoader::with_default_adapters()), llm)
}

#[tokio::test]
async fn given_padded_completion_when_summarizing_then_returns_trimmed_summary() {
    let llm = Arc::new(MockLlmClient::with_response(
        "\n\n  Cells get energy from mitochondria.  \n",
    ));

    let summary = service(Arc::clone(&llm))
        .summarize(MATERIAL, &text_document())
        .await
        .unwrap();

    assert_eq!(summary.as_str(), "Cells get energy from mitochondria.");
}

#[tokio::test]
async fn given_text_upload_when_summarizing_then_sends_summary_prompts() {
    let llm = Arc::new(MockLlmClient::with_response("ok"));

    service(Arc::clone(&llm))
        .summarize(MATERIAL, &text_document())
        .await
        .unwrap();

    let calls = llm.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, SUMMARY_SYSTEM_PROMPT);
    assert_eq!(
        calls[0].1,
        "Summarize the following study material in a concise paragraph:\nMitochondria are the powerhouse of the cell."
    );
}

#[tokio::test]
async fn given_flashcard_completion_when_generating_flashcards_then_parses_cards() {
    let llm = Arc::new(MockLlmClient::with_response(
        "Q: Powerhouse of the cell?\nA: Mitochondria\n---\nnot a card\n---\n",
    ));

    let cards = service(Arc::clone(&llm))
        .flashcards(MATERIAL, &text_document())
        .await
        .unwrap();

    assert_eq!(
        cards,
        vec![Flashcard::new("Powerhouse of the cell?", "Mitochondria")]
    );

    let calls = llm.calls();
    assert_eq!(calls[0].0, FLASHCARDS_SYSTEM_PROMPT);
    assert!(calls[0].1.starts_with("Generate a list of flashcards"));
    assert!(calls[0].1.contains("Format each as: Q: <question>\nA: <answer>\n---\n"));
    assert!(calls[0].1.ends_with("Mitochondria are the powerhouse of the cell."));
}

#[tokio::test]
async fn given_quiz_completion_when_generating_quiz_then_parses_items() {
    let llm = Arc::new(MockLlmClient::with_response(
        "Q: What produces ATP?\nA. Nucleus\nB. Mitochondria\nC. Ribosome\nD. Golgi\nAnswer: B\n---",
    ));

    let quiz = service(Arc::clone(&llm))
        .quiz(MATERIAL, &text_document())
        .await
        .unwrap();

    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz[0].options.len(), 4);
    assert_eq!(quiz[0].answer, "B");

    let calls = llm.calls();
    assert_eq!(calls[0].0, QUIZ_SYSTEM_PROMPT);
    assert!(calls[0].1.starts_with("Generate 5 quiz questions with 4 options each"));
    assert!(calls[0].1.contains("Answer: <correct option letter>\n---\n"));
}

#[tokio::test]
async fn given_unparseable_completion_when_generating_quiz_then_returns_empty_list() {
    let llm = Arc::new(MockLlmClient::with_response("I could not think of any questions."));

    let quiz = service(llm).quiz(MATERIAL, &text_document()).await.unwrap();

    assert!(quiz.is_empty());
}

#[tokio::test]
async fn given_failing_upstream_when_summarizing_then_returns_completion_error() {
    let llm = Arc::new(MockLlmClient::failing("HTTP 401 Unauthorized: bad key"));

    let result = service(llm).summarize(MATERIAL, &text_document()).await;

    assert!(matches!(result, Err(StudyServiceError::Completion(_))));
}

#[tokio::test]
async fn given_corrupt_docx_when_generating_flashcards_then_skips_upstream() {
    let llm = Arc::new(MockLlmClient::with_response("Q: a\nA: b"));
    let document = Document::from_upload("notes.docx".to_string(), 9);

    let result = service(Arc::clone(&llm))
        .flashcards(b"not a zip", &document)
        .await;

    assert!(matches!(
        result,
        Err(StudyServiceError::Extraction(FileLoaderError::ExtractionFailed(_)))
    ));
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn given_loader_without_adapter_when_summarizing_then_returns_unsupported_format() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(DocumentFormat::Text, text_adapter)]);
    let llm = Arc::new(MockLlmClient::with_response("unused"));
    let service = StudyService::new(Arc::new(loader), llm);
    let document = Document::from_upload("slides.pdf".to_string(), 3);

    let result = service.summarize(b"pdf", &document).await;

    assert!(matches!(
        result,
        Err(StudyServiceError::Extraction(FileLoaderError::UnsupportedFormat(_)))
    ));
}
