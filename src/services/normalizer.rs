use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN is a valid regex pattern"));

/// Collapses whitespace and caps text length before it reaches a prompt.
///
/// This is the only place a character cap is applied; extractors hand their
/// raw output here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNormalizer {
    max_chars: usize,
}

impl TextNormalizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn normalize(&self, text: &str) -> String {
        let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");

        let cut = collapsed
            .char_indices()
            .nth(self.max_chars)
            .map(|(index, _)| index);

        match cut {
            // cutting may leave a trailing space
            Some(cut) => collapsed[..cut].trim_end().to_string(),
            None => collapsed.into_owned(),
        }
    }
}
