use serde_json::Value;

use crate::{
    constants::prompts::GENERATION_FALLBACK,
    models::domain::{
        ArtifactKind, Extraction, ExtractionFailure, GeneratedArtifact, RawInput, StudyMaterials,
    },
    services::{
        model_service::{InferenceError, ModelService},
        normalizer::TextNormalizer,
        pdf_extractor::PdfExtractor,
        response_unwrapper::unwrap_response,
        web_extractor::WebExtractor,
    },
};

/// Runs the extract → normalize → generate pipeline for one interaction.
pub struct TutorService {
    normalizer: TextNormalizer,
    pdf_extractor: PdfExtractor,
    web_extractor: WebExtractor,
    model_service: ModelService,
}

impl TutorService {
    pub fn new(
        normalizer: TextNormalizer,
        web_extractor: WebExtractor,
        model_service: ModelService,
    ) -> Self {
        Self {
            normalizer,
            pdf_extractor: PdfExtractor::new(),
            web_extractor,
            model_service,
        }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Extracts and normalizes text from a single raw input.
    pub async fn extract(&self, input: RawInput) -> Extraction {
        let mode = input.mode();

        let (extraction, when_empty) = match input {
            RawInput::Text(text) => (
                Extraction::from_text(text, ExtractionFailure::EmptyInput),
                ExtractionFailure::EmptyInput,
            ),
            RawInput::Url(url) => (
                self.web_extractor.extract(&url).await,
                ExtractionFailure::NoPageText,
            ),
            RawInput::Pdf(bytes) => {
                let extractor = self.pdf_extractor;
                let extraction =
                    match tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await {
                        Ok(extraction) => extraction,
                        Err(e) => {
                            log::error!("PDF extraction task failed: {}", e);
                            Extraction::Failed(ExtractionFailure::UnreadablePdf)
                        }
                    };
                (extraction, ExtractionFailure::NoPdfText)
            }
        };

        let extraction = extraction.map_text(when_empty, |text| self.normalizer.normalize(text));

        match &extraction {
            Extraction::Text(text) => log::info!(
                "Extracted {} characters from {} input",
                text.chars().count(),
                mode
            ),
            Extraction::Failed(reason) => {
                log::info!("Extraction from {} input failed: {}", mode, reason)
            }
        }

        extraction
    }

    /// Produces the summary and quiz for an extraction.
    ///
    /// A failed extraction short-circuits: both artifacts carry the failure
    /// message and the inference endpoint is not called. Otherwise the two
    /// calls run concurrently and each falls back independently.
    pub async fn generate(&self, extraction: &Extraction) -> StudyMaterials {
        let text = match extraction {
            Extraction::Text(text) => self.normalizer.normalize(text),
            Extraction::Failed(reason) => return Self::failure_materials(*reason),
        };

        if text.is_empty() {
            return Self::failure_materials(ExtractionFailure::EmptyInput);
        }

        let (summary, quiz) = futures::join!(
            self.model_service.summarize(&text),
            self.model_service.quiz(&text)
        );

        StudyMaterials::new(
            to_artifact(ArtifactKind::Summary, summary),
            to_artifact(ArtifactKind::Quiz, quiz),
        )
    }

    /// Extraction and generation in one step.
    pub async fn process(&self, input: RawInput) -> (Extraction, StudyMaterials) {
        let extraction = self.extract(input).await;
        let materials = self.generate(&extraction).await;
        (extraction, materials)
    }

    fn failure_materials(reason: ExtractionFailure) -> StudyMaterials {
        log::info!("Skipping generation: {}", reason);
        StudyMaterials::new(
            GeneratedArtifact::notice(ArtifactKind::Summary, reason.to_string()),
            GeneratedArtifact::notice(ArtifactKind::Quiz, reason.to_string()),
        )
    }
}

fn to_artifact(kind: ArtifactKind, result: Result<Value, InferenceError>) -> GeneratedArtifact {
    match result {
        Ok(response) => {
            let content = unwrap_response(&response);
            if content == GENERATION_FALLBACK {
                GeneratedArtifact::fallback(kind)
            } else {
                GeneratedArtifact::generated(kind, content)
            }
        }
        Err(e) => {
            log::error!("{:?} generation failed: {}", kind, e);
            GeneratedArtifact::fallback(kind)
        }
    }
}
