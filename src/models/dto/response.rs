use serde::Serialize;

use crate::models::domain::{GradeReport, QuizAnalysis, QuizQuestion};

#[derive(Debug, Serialize)]
pub struct BlogWriterResponse {
    pub content: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub success: bool,
    pub data: QuizAnalysis,
}

#[derive(Debug, Serialize)]
pub struct QuizSubmissionResponse {
    pub success: bool,
    pub result: GradeReport,
    pub data: QuizAnalysis,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
}
