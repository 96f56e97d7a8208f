use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sentinel stored in `user_answer` when a question was skipped.
pub const UNANSWERED: i32 = -1;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswerRecord {
    pub question_id: u32,
    /// Choice index, or `UNANSWERED`.
    #[validate(range(min = -1, max = 3))]
    pub user_answer: i32,
    #[validate(range(min = 0, max = 3))]
    pub correct_answer: i32,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

impl QuizAnswerRecord {
    pub fn is_unanswered(&self) -> bool {
        self.user_answer == UNANSWERED
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub records: Vec<QuizAnswerRecord>,
    pub correct_count: usize,
    pub score_percent: u32,
}

impl GradeReport {
    pub fn total_questions(&self) -> usize {
        self.records.len()
    }
}
