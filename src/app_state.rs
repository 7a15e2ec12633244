use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        model_service::{HuggingFaceClient, InferenceClient, ModelService},
        normalizer::TextNormalizer,
        tutor_service::TutorService,
        web_extractor::WebExtractor,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<TutorService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the state with the production Hugging Face client. The client
    /// is created here once and shared by every request.
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;

        let client = Arc::new(HuggingFaceClient::new(&config));
        log::info!("Using inference model '{}'", client.model());

        Self::with_inference_client(config, client)
    }

    /// Builds the state around an already constructed inference client.
    pub fn with_inference_client(
        config: Config,
        client: Arc<dyn InferenceClient>,
    ) -> AppResult<Self> {
        let model_service = ModelService::new(
            client,
            Duration::from_secs(config.inference_timeout_secs),
            config.inference_max_retries,
        );
        let web_extractor = WebExtractor::new(Duration::from_secs(config.fetch_timeout_secs))?;
        let normalizer = TextNormalizer::new(config.text_char_limit);

        let tutor_service = Arc::new(TutorService::new(normalizer, web_extractor, model_service));

        Ok(Self {
            tutor_service,
            config: Arc::new(config),
        })
    }
}
