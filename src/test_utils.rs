#[cfg(test)]
pub mod fixtures {
    use crate::models::{
        domain::{quiz_answer::UNANSWERED, Audience, QuizAnswerRecord, QuizQuestion, Tone},
        dto::request::{BlogWriterRequest, QuizResultRequest},
    };

    const TWO_COLORS: &str = r##"{"colors": [
        {"name": "Coral", "css_code": "#FF7F50", "description": "Lively and warm"},
        {"name": "Peach", "css_code": "#FFDAB9", "description": "Soft pastel"}
    ]}"##;

    const THREE_COLORS: &str = r##"{"colors": [
        {"name": "Coral", "css_code": "#FF7F50", "description": "Lively and warm"},
        {"name": "Peach", "css_code": "#FFDAB9", "description": "Soft pastel"},
        {"name": "Rose", "css_code": "#FF6B6B", "description": "Vivid pink"}
    ]}"##;

    const ANALYSIS: &str = r#"{
        "analysis": {
            "overallScore": 67,
            "percentage": 67,
            "strengths": ["Core features"],
            "weaknesses": ["Pricing"],
            "recommendations": ["Review the Pro plan"]
        },
        "detailedFeedback": {
            "grade": "C",
            "message": "Good start",
            "nextSteps": "Retake the quiz"
        },
        "questionAnalysis": [
            {"questionId": 1, "userAnswer": 2, "correctAnswer": 2, "isCorrect": true, "feedback": "Right"}
        ]
    }"#;

    /// Creates a blog request with the given form values
    pub fn blog_request(
        topic: &str,
        tone: Tone,
        length: u32,
        keywords: &str,
        audience: Audience,
    ) -> BlogWriterRequest {
        BlogWriterRequest {
            topic: topic.to_string(),
            tone,
            length,
            keywords: keywords.to_string(),
            audience,
        }
    }

    /// Creates one four-choice question per entry, answered by that index
    pub fn questions_with_answers(answers: &[i32]) -> Vec<QuizQuestion> {
        answers
            .iter()
            .enumerate()
            .map(|(i, answer)| QuizQuestion {
                id: i as u32 + 1,
                question: format!("Question {}", i + 1),
                choices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                answer: *answer,
                explanation: format!("Choice {} is right", answer + 1),
            })
            .collect()
    }

    /// Creates a grading request with one record per question up to `total`
    pub fn result_request(total: u32, correct: u32, score: u32) -> QuizResultRequest {
        let answers = (0..total)
            .map(|i| QuizAnswerRecord {
                question_id: i + 1,
                user_answer: if i < correct { 0 } else { UNANSWERED },
                correct_answer: 0,
                is_correct: i < correct,
                explanation: String::new(),
            })
            .collect();

        QuizResultRequest {
            answers,
            total_questions: total,
            correct_answers: correct,
            score,
        }
    }

    /// Model output for the color generator with two or three swatches
    pub fn color_json(count: usize) -> &'static str {
        if count == 2 {
            TWO_COLORS
        } else {
            THREE_COLORS
        }
    }

    /// Model output for a well formed quiz analysis
    pub fn analysis_json() -> &'static str {
        ANALYSIS
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents the pipeline failure status
    pub fn assert_failure_status(status: StatusCode) {
        assert_eq!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Expected failure status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_questions_with_answers() {
        let questions = questions_with_answers(&[1, 2, 0]);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[2].answer, 0);
        assert_eq!(questions[1].choices.len(), 4);
    }

    #[test]
    fn test_fixtures_result_request() {
        let request = result_request(3, 2, 67);
        assert_eq!(request.answers.len(), 3);
        assert_eq!(request.answers.iter().filter(|a| a.is_correct).count(), 2);
    }

    #[test]
    fn test_fixtures_model_outputs_are_json() {
        for raw in [color_json(2), color_json(3), analysis_json()] {
            assert!(serde_json::from_str::<serde_json::Value>(raw).is_ok());
        }
    }
}
