use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        ai_service::AiService,
        completion_service::{CompletionClient, OpenAiCompletionClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub ai_service: Arc<AiService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    /// Builds the state around any completion backend.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        log::info!("Using completion model {}", config.openai_model);

        Self {
            ai_service: Arc::new(AiService::new(client)),
            config: Arc::new(config),
        }
    }
}
