use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ColorPalette, GeneratedQuestion, QuizAnalysis, QuizQuestion},
        dto::request::{
            AiRole, BlogWriterRequest, ChatRequest, QuizGenerationRequest, QuizResultRequest,
            RoleAiRequest,
        },
    },
    services::{
        completion_service::{CompletionClient, CompletionRequest},
        response_normalizer::{decode, decode_list, normalize, NormalizedResponse},
    },
};

/// Runs feature requests through prompt building, completion and normalization.
pub struct AiService {
    client: Arc<dyn CompletionClient>,
}

impl AiService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn run(&self, request: CompletionRequest) -> AppResult<NormalizedResponse> {
        let mode = request.output_mode;
        let result = self.client.complete(&request).await?;
        log::debug!(
            "Completion returned {} bytes for {:?} output",
            result.raw_text.len(),
            mode
        );
        normalize(result, mode)
    }

    pub async fn write_blog(&self, request: &BlogWriterRequest) -> AppResult<String> {
        let completion = CompletionRequest::try_from(request)?;
        Ok(self.run(completion).await?.into_text())
    }

    pub async fn chat(&self, request: &ChatRequest) -> AppResult<String> {
        let completion = CompletionRequest::try_from(request)?;
        Ok(self.run(completion).await?.into_text())
    }

    /// Color replies are checked against the palette shape and returned as compact JSON text.
    pub async fn role_reply(&self, request: &RoleAiRequest) -> AppResult<String> {
        let completion = CompletionRequest::try_from(request)?;
        let response = self.run(completion).await?;

        match request.role {
            AiRole::Color => {
                let palette: ColorPalette = decode(response.into_json()?)?;
                serde_json::to_string(&palette)
                    .map_err(|e| AppError::SchemaMismatchError(e.to_string()))
            }
            AiRole::Translate | AiRole::Emoji | AiRole::Custom => Ok(response.into_text()),
        }
    }

    pub async fn generate_quiz(
        &self,
        request: &QuizGenerationRequest,
    ) -> AppResult<Vec<QuizQuestion>> {
        let completion = CompletionRequest::try_from(request)?;
        let response = self.run(completion).await?;
        let generated: Vec<GeneratedQuestion> = decode_list(response.into_json()?)?;

        if generated.len() != request.count as usize {
            log::warn!(
                "Asked for {} questions about '{}' but the model returned {}",
                request.count,
                request.genre,
                generated.len()
            );
        }

        Ok(generated
            .into_iter()
            .zip(1..)
            .map(|(question, id)| question.into_question(id))
            .collect())
    }

    pub async fn analyse_result(&self, request: &QuizResultRequest) -> AppResult<QuizAnalysis> {
        let completion = CompletionRequest::try_from(request)?;
        decode(self.run(completion).await?.into_json()?)
    }
}
