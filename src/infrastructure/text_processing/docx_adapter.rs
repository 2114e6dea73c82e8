use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const DOCUMENT_PART: &str = "word/document.xml";

/// Reads Word `.docx` uploads. Only top-level body paragraphs are collected
/// (table cells, headers and footers are not), joined by single spaces.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_paragraphs(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX archive: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        body_paragraphs(&xml)
    }
}

/// Position of an open element relative to the text that counts.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    Body,
    Paragraph,
    Hyperlink,
    Run,
    Text,
    Other,
}

impl Scope {
    fn of(name: &[u8], parent: Option<Scope>) -> Self {
        match (name, parent) {
            (b"w:body", _) => Self::Body,
            (b"w:p", Some(Self::Body)) => Self::Paragraph,
            (b"w:hyperlink", Some(Self::Paragraph)) => Self::Hyperlink,
            (b"w:r", Some(Self::Paragraph | Self::Hyperlink)) => Self::Run,
            (b"w:t", Some(Self::Run)) => Self::Text,
            _ => Self::Other,
        }
    }
}

/// Walks WordprocessingML and returns the text of each `w:p` that is a direct
/// child of `w:body`, in document order. Empty paragraphs are kept as "".
///
/// Only runs directly under the paragraph or under one of its hyperlinks are
/// read, and only their direct children. Drawings, text boxes, alternate
/// content, tracked insertions and content controls contribute nothing.
pub fn body_paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut scopes: Vec<Scope> = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event().map_err(malformed_xml)? {
            Event::Start(e) => {
                let parent = scopes.last().copied();
                let scope = Scope::of(e.name().as_ref(), parent);
                if scope == Scope::Paragraph {
                    current = Some(String::new());
                }
                if parent == Some(Scope::Run) {
                    push_to(&mut current, run_marker_text(&e));
                }
                scopes.push(scope);
            }
            Event::End(_) => {
                if scopes.pop() == Some(Scope::Paragraph) {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Empty(e) => {
                let parent = scopes.last().copied();
                if Scope::of(e.name().as_ref(), parent) == Scope::Paragraph {
                    paragraphs.push(String::new());
                } else if parent == Some(Scope::Run) {
                    push_to(&mut current, run_marker_text(&e));
                }
            }
            Event::Text(t) if scopes.last() == Some(&Scope::Text) => {
                let text = t.unescape().map_err(malformed_xml)?;
                push_to(&mut current, &text);
            }
            Event::CData(c) if scopes.last() == Some(&Scope::Text) => {
                push_to(&mut current, &String::from_utf8_lossy(&c));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Text rendered for a non-`w:t` child of a run. Page and column breaks
/// render as nothing; only text-wrapping breaks become newlines.
fn run_marker_text(element: &BytesStart) -> &'static str {
    match element.name().as_ref() {
        b"w:tab" | b"w:ptab" => "\t",
        b"w:cr" => "\n",
        b"w:noBreakHyphen" => "-",
        b"w:br" => match element.try_get_attribute("w:type").ok().flatten() {
            Some(kind) if kind.value.as_ref() != b"textWrapping".as_slice() => "",
            _ => "\n",
        },
        _ => "",
    }
}

fn push_to(current: &mut Option<String>, text: &str) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push_str(text);
    }
}

fn malformed_xml(e: impl std::fmt::Display) -> FileLoaderError {
    FileLoaderError::ExtractionFailed(format!("malformed {DOCUMENT_PART}: {e}"))
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data, document), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_str().to_string(),
            ));
        }

        let data_owned = data.to_vec();

        let paragraphs = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_paragraphs(&data_owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("DOCX extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join(" "))
    }
}
