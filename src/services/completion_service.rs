use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret as _;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

pub const TEXT_TEMPERATURE: f32 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    CurrencySanitizedText,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Canonical prompt handed to the completion service.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: Option<f32>,
    pub output_mode: OutputMode,
    /// Earlier chat turns, sent between the system and user messages.
    pub history: Vec<ChatMessage>,
}

impl CompletionRequest {
    pub fn new(
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        output_mode: OutputMode,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: None,
            output_mode,
            history: Vec::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        if !self.system_prompt.trim().is_empty() {
            messages.push(ChatMessage::new(ChatRole::System, self.system_prompt.as_str()));
        }
        messages.extend(self.history.iter().cloned());
        messages.push(ChatMessage::new(ChatRole::User, self.user_prompt.as_str()));
        messages
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionResult {
    pub raw_text: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResult>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionReply {
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

/// Chat-completion client for OpenAI-compatible APIs.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Option<Duration>,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            timeout: config.completion_timeout_secs.map(Duration::from_secs),
        }
    }

    async fn send(&self, request: &CompletionRequest) -> AppResult<CompletionResult> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: request.messages(),
            temperature: request.temperature,
        };

        let reply: ChatCompletionReply = self.client.chat().create_byot(body).await?;

        Ok(CompletionResult {
            raw_text: reply.into_text(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResult> {
        log::debug!(
            "Sending completion request: model={}, mode={:?}, messages={}",
            self.model,
            request.output_mode,
            request.messages().len()
        );

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(request))
                .await
                .map_err(|_| {
                    AppError::CompletionServiceError(format!(
                        "completion timed out after {}s",
                        limit.as_secs()
                    ))
                })?,
            None => self.send(request).await,
        };

        if let Err(e) = &result {
            log::error!("Completion request failed: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_put_system_history_then_user() {
        let request = CompletionRequest::new("Be brief.", "And now?", OutputMode::Text)
            .with_history(vec![
                ChatMessage::new(ChatRole::User, "Hi"),
                ChatMessage::new(ChatRole::Assistant, "Hello!"),
            ]);

        let roles: Vec<ChatRole> = request.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::System,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User
            ]
        );
        assert_eq!(request.messages().last().unwrap().content, "And now?");
    }

    #[test]
    fn blank_system_prompt_is_omitted() {
        let request = CompletionRequest::new("  ", "Hi", OutputMode::Text);

        let messages = request.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::User);
    }

    #[test]
    fn body_omits_unset_temperature() {
        let request = CompletionRequest::new("sys", "user", OutputMode::Json);
        let body = ChatCompletionBody {
            model: "gpt-4o",
            messages: request.messages(),
            temperature: request.temperature,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "user");
    }

    #[test]
    fn body_carries_text_temperature() {
        let request = CompletionRequest::new("sys", "user", OutputMode::Text)
            .with_temperature(TEXT_TEMPERATURE);
        let body = ChatCompletionBody {
            model: "gpt-4o",
            messages: request.messages(),
            temperature: request.temperature,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn reply_without_content_is_empty_text() {
        let reply: ChatCompletionReply = serde_json::from_str(
            r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.into_text(), "");

        let empty: ChatCompletionReply = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.into_text(), "");
    }

    #[test]
    fn reply_takes_first_choice() {
        let reply: ChatCompletionReply = serde_json::from_str(
            r#"{"id": "x", "choices": [{"message": {"content": "first"}}, {"message": {"content": "second"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.into_text(), "first");
    }

    #[actix_rt::test]
    async fn unreachable_service_is_completion_error() {
        let client = OpenAiCompletionClient::new(&Config::test_config());
        let request = CompletionRequest::new("sys", "hello", OutputMode::Text);

        let result = client.complete(&request).await;
        assert!(matches!(result, Err(AppError::CompletionServiceError(_))));
    }
}
