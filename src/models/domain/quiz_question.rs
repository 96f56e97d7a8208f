use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const CHOICE_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    #[validate(length(equal = 4))]
    pub choices: Vec<String>,
    #[validate(range(min = 0, max = 3))]
    pub answer: i32,
    #[serde(default)]
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_valid_choice(&self, index: i32) -> bool {
        index >= 0 && (index as usize) < self.choices.len()
    }
}

/// A single question as the model is asked to produce it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct GeneratedQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(equal = 4))]
    pub choices: Vec<String>,
    #[validate(range(min = 0, max = 3))]
    pub answer: i32,
    #[serde(default)]
    pub explanation: String,
}

impl GeneratedQuestion {
    pub fn into_question(self, id: u32) -> QuizQuestion {
        QuizQuestion {
            id,
            question: self.question,
            choices: self.choices,
            answer: self.answer,
            explanation: self.explanation,
        }
    }
}

fn seed(
    id: u32,
    question: &str,
    choices: [&str; CHOICE_COUNT],
    answer: i32,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id,
        question: question.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        answer,
        explanation: explanation.to_string(),
    }
}

/// The built-in Cursor AI quiz served by `/api/quiz/questions`.
pub fn seed_questions() -> Vec<QuizQuestion> {
    vec![
        seed(
            1,
            "What is the main purpose of Cursor AI?",
            [
                "Image editing",
                "Code completion and development assistance",
                "Music generation",
                "Video editing",
            ],
            1,
            "Cursor AI is an AI coding tool that helps developers build software faster and more efficiently.",
        ),
        seed(
            2,
            "Which of these is NOT a main benefit of a Cursor Pro subscription?",
            [
                "500 fast premium requests",
                "Unlimited slow premium requests",
                "10 o1-mini uses per day",
                "Unlimited video editing",
            ],
            3,
            "Video editing is not part of the Cursor Pro benefits.",
        ),
        seed(
            3,
            "Which technology does Cursor use to understand a codebase?",
            [
                "A custom retrieval model",
                "Image recognition",
                "Speech recognition",
                "3D rendering",
            ],
            0,
            "Cursor understands a codebase through a custom retrieval model.",
        ),
        seed(
            4,
            "What does a student need to use Cursor Pro free for a year?",
            [
                "Student email verification or proof of enrollment",
                "A YouTube subscription",
                "A Twitter follow",
                "A Facebook like",
            ],
            0,
            "A student email (.edu) verification or proof of enrollment is required.",
        ),
        seed(
            5,
            "Which of these is NOT a main feature of Cursor?",
            [
                "Real-time chat support",
                "Smart code rewrites",
                "Image and document input",
                "Music recommendations",
            ],
            3,
            "Music recommendations are not a Cursor feature.",
        ),
    ]
}
