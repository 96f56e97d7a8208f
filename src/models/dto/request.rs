use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Audience, QuizAnswerRecord, Tone};
use crate::services::completion_service::ChatMessage;

pub const DEFAULT_BLOG_LENGTH: u32 = 500;

fn default_blog_length() -> u32 {
    DEFAULT_BLOG_LENGTH
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogWriterRequest {
    #[serde(default)]
    #[validate(custom(function = "non_blank"), length(max = 300))]
    pub topic: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default = "default_blog_length")]
    #[validate(range(min = 100, max = 3000))]
    pub length: u32,

    #[serde(default)]
    #[validate(length(max = 1000))]
    pub keywords: String,

    #[serde(default)]
    pub audience: Audience,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 50))]
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiRole {
    Translate,
    Emoji,
    Color,
    Custom,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleAiRequest {
    pub role: AiRole,

    #[serde(default)]
    #[validate(custom(function = "non_blank"), length(max = 10000))]
    pub prompt: String,

    #[serde(default)]
    #[validate(length(max = 10000))]
    pub system_message: String,

    /// Target language for the translator when no system message is given.
    #[serde(default)]
    #[validate(custom(function = "non_blank"), length(max = 50))]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizGenerationRequest {
    #[validate(range(min = 1, max = 20))]
    pub count: u32,

    #[serde(default)]
    #[validate(custom(function = "non_blank"), length(max = 100))]
    pub genre: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultRequest {
    #[validate(nested)]
    pub answers: Vec<QuizAnswerRecord>,
    pub total_questions: u32,
    pub correct_answers: u32,
    #[validate(range(max = 100))]
    pub score: u32,
}

/// Answers for the built-in quiz, indexed by question; `null` means skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizSubmissionRequest {
    pub answers: Vec<Option<i32>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SeoAnalysisRequest {
    #[validate(custom(function = "non_blank"))]
    pub content: String,

    #[serde(default)]
    pub keywords: String,
}
