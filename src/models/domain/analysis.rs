use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const LETTER_GRADES: [&str; 5] = ["A", "B", "C", "D", "F"];

/// Feedback object the grading prompt asks the model to return.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnalysis {
    #[validate(nested)]
    pub analysis: AnalysisSummary,
    #[validate(nested)]
    pub detailed_feedback: DetailedFeedback,
    #[serde(default)]
    #[validate(nested)]
    pub question_analysis: Vec<QuestionFeedback>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[validate(range(min = 0.0, max = 100.0))]
    pub overall_score: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub percentage: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DetailedFeedback {
    #[validate(custom(function = "validate_letter_grade"))]
    pub grade: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(default)]
    pub next_steps: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFeedback {
    pub question_id: u32,
    pub user_answer: i32,
    pub correct_answer: i32,
    pub is_correct: bool,
    #[serde(default)]
    pub feedback: String,
}

fn validate_letter_grade(grade: &str) -> Result<(), ValidationError> {
    if LETTER_GRADES.contains(&grade.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("letter_grade"))
    }
}
