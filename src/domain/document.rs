/// An uploaded study document, described by what the handlers know before
/// any bytes are parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub format: DocumentFormat,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Detects the format from the filename suffix, ignoring case.
    /// Anything that is not `.pdf` or `.docx` is treated as text.
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Self::Pdf
        } else if lower.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
        }
    }
}

impl Document {
    pub fn new(filename: String, format: DocumentFormat, size_bytes: u64) -> Self {
        Self {
            filename,
            format,
            size_bytes,
        }
    }

    pub fn from_upload(filename: String, size_bytes: u64) -> Self {
        let format = DocumentFormat::from_filename(&filename);
        Self::new(filename, format, size_bytes)
    }
}
