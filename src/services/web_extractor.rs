//! Paragraph text extraction from web pages.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::models::domain::{Extraction, ExtractionFailure};

static PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("paragraph selector is valid"));

pub struct WebExtractor {
    client: Client,
    timeout: Duration,
}

impl WebExtractor {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tutor-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `source` and returns the text of its `<p>` elements.
    ///
    /// Every transport problem, including a non-2xx status, is reported as
    /// `FetchFailed`; nothing is propagated.
    pub async fn extract(&self, source: &str) -> Extraction {
        let url = match Url::parse(source.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => url,
            Ok(url) => {
                log::warn!("Refusing to fetch URL with scheme '{}'", url.scheme());
                return Extraction::Failed(ExtractionFailure::FetchFailed);
            }
            Err(e) => {
                log::warn!("Invalid URL '{}': {}", source, e);
                return Extraction::Failed(ExtractionFailure::FetchFailed);
            }
        };

        let response = match self.client.get(url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Failed to fetch {}: {}", url, e);
                return Extraction::Failed(ExtractionFailure::FetchFailed);
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("Fetching {} returned status {}", url, status);
            return Extraction::Failed(ExtractionFailure::FetchFailed);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Failed to read body of {}: {}", url, e);
                return Extraction::Failed(ExtractionFailure::FetchFailed);
            }
        };

        let text = paragraph_text(&body);
        log::info!(
            "Extracted {} characters of paragraph text from {}",
            text.chars().count(),
            url
        );

        Extraction::from_text(text, ExtractionFailure::NoPageText)
    }
}

/// Joins the text content of every `<p>` element with newlines.
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH)
        .map(|paragraph| paragraph.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
