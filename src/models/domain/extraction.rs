use thiserror::Error;

/// Why an input produced no usable text. The display string of each variant
/// is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error("No readable text found in the PDF.")]
    NoPdfText,

    #[error("Could not read the PDF file.")]
    UnreadablePdf,

    #[error("Failed to fetch the webpage. Check the URL.")]
    FetchFailed,

    #[error("No text found on the page.")]
    NoPageText,

    #[error("No text provided.")]
    EmptyInput,
}

/// Result of running an extractor over a raw input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extraction {
    Text(String),
    Failed(ExtractionFailure),
}

impl Extraction {
    /// Wraps extracted text, treating blank text as the given failure.
    pub fn from_text(text: String, when_empty: ExtractionFailure) -> Self {
        if text.trim().is_empty() {
            Extraction::Failed(when_empty)
        } else {
            Extraction::Text(text)
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Extraction::Text(text) => Some(text),
            Extraction::Failed(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Extraction::Text(_))
    }

    /// Applies `f` to the text, keeping failures untouched. An empty result
    /// becomes `when_empty`.
    pub fn map_text(self, when_empty: ExtractionFailure, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Extraction::Text(text) => Extraction::from_text(f(&text), when_empty),
            failed => failed,
        }
    }
}
