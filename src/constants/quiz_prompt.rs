pub const JSON_ONLY_INSTRUCTION: &str = "Always respond with JSON only. No prose, no markdown fences.";

pub const QUIZ_GENERATION_EXAMPLE: &str = r#"[
  {
    "question": "Question text",
    "choices": ["Choice 1", "Choice 2", "Choice 3", "Choice 4"],
    "answer": 0,
    "explanation": "Why the answer is correct"
  }
]"#;

pub const QUIZ_GRADER_ROLE: &str =
    "You are an expert at analysing Cursor AI quiz results and giving constructive feedback.";

/// Shape of the analysis object. `{score}` and `{percentage}` are filled in
/// by the prompt builder.
pub const QUIZ_ANALYSIS_TEMPLATE: &str = r#"{
  "analysis": {
    "overallScore": {score},
    "percentage": {percentage},
    "strengths": ["strength 1", "strength 2"],
    "weaknesses": ["area to improve 1", "area to improve 2"],
    "recommendations": ["recommendation 1", "recommendation 2"]
  },
  "detailedFeedback": {
    "grade": "A|B|C|D|F",
    "message": "Overall feedback message",
    "nextSteps": "Suggested next steps"
  },
  "questionAnalysis": [
    {
      "questionId": 1,
      "userAnswer": 1,
      "correctAnswer": 1,
      "isCorrect": true,
      "feedback": "Specific feedback for this question"
    }
  ]
}"#;
