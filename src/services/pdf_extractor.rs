//! Text extraction from uploaded PDF documents.

use crate::models::domain::{Extraction, ExtractionFailure};

/// Pulls visible text out of a PDF in page order.
///
/// `pdf-extract` lays glyphs out by position: glyphs set close together stay
/// in one word, and a horizontal gap wider than a fraction of the font size
/// becomes a space.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, bytes: &[u8]) -> Extraction {
        let raw = match pdf_extract::extract_text_from_mem(bytes) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to parse uploaded PDF ({} bytes): {}", bytes.len(), e);
                return Extraction::Failed(ExtractionFailure::UnreadablePdf);
            }
        };

        let text = clean_lines(&raw);
        log::info!(
            "Extracted {} lines of text from a {} byte PDF",
            text.lines().count(),
            bytes.len()
        );

        Extraction::from_text(text, ExtractionFailure::NoPdfText)
    }
}

fn clean_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.trim().trim_matches(|c| c == '\u{0}' || c == '\u{feff}'))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
