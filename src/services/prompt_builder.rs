//! Maps feature requests onto a canonical [`CompletionRequest`].
//!
//! Every conversion validates its input first, so a request that fails here
//! never reaches the completion service.

use once_cell::sync::Lazy;
use validator::Validate;

use crate::{
    constants::{
        prompts::{
            translator_system_message, BLOG_NO_DOLLAR_RULES, BLOG_WRITER_ROLE,
            COLOR_SYSTEM_MESSAGE, DEFAULT_TRANSLATION_LANGUAGE, EMOJI_SYSTEM_MESSAGE,
        },
        quiz_prompt::{
            JSON_ONLY_INSTRUCTION, QUIZ_ANALYSIS_TEMPLATE, QUIZ_GENERATION_EXAMPLE,
            QUIZ_GRADER_ROLE,
        },
    },
    errors::{AppError, AppResult},
    models::{
        domain::{quiz_answer::UNANSWERED, GeneratedQuestion, LengthBand, QuizAnswerRecord},
        dto::request::{
            AiRole, BlogWriterRequest, ChatRequest, QuizGenerationRequest, QuizResultRequest,
            RoleAiRequest,
        },
    },
    services::{
        completion_service::{ChatRole, CompletionRequest, OutputMode, TEXT_TEMPERATURE},
        grading_service::score_percent,
    },
};

static GENERATED_QUESTION_SCHEMA: Lazy<String> = Lazy::new(|| {
    serde_json::to_string_pretty(&schemars::schema_for!(GeneratedQuestion)).unwrap_or_default()
});

/// Splits a comma separated keyword field, trimming entries and dropping blanks.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn keyword_clause(keywords: &[String]) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }
    Some(format!(
        "Naturally work in the following keywords: {}.",
        keywords.join(", ")
    ))
}

fn numbered(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl TryFrom<&BlogWriterRequest> for CompletionRequest {
    type Error = AppError;

    fn try_from(request: &BlogWriterRequest) -> AppResult<Self> {
        request.validate()?;

        let mut guidelines = vec![
            "Make the title effective for SEO and place it at the top of the post.".to_string(),
            "Write in markdown without any HTML tags.".to_string(),
            "Use subheadings that fit the topic.".to_string(),
            format!("Aim for roughly {} words.", request.length),
            request.tone.description().to_string(),
            request.audience.description().to_string(),
            LengthBand::for_length(request.length).instruction().to_string(),
        ];
        if let Some(clause) = keyword_clause(&parse_keywords(&request.keywords)) {
            guidelines.push(clause);
        }
        guidelines.push("Open with an introduction that grabs the reader's interest.".to_string());
        guidelines.push(
            "In the conclusion, summarize the key points and give the reader a call to action."
                .to_string(),
        );
        guidelines.push("Keep the whole post easy and engaging to read.".to_string());
        guidelines.extend(BLOG_NO_DOLLAR_RULES.iter().map(|rule| rule.to_string()));

        let system_prompt = format!(
            "{}\n\nFollow these guidelines:\n{}",
            BLOG_WRITER_ROLE,
            numbered(&guidelines)
        );
        let user_prompt = format!(
            "Please write a blog post about \"{}\".",
            request.topic.trim()
        );

        Ok(
            CompletionRequest::new(system_prompt, user_prompt, OutputMode::CurrencySanitizedText)
                .with_temperature(TEXT_TEMPERATURE),
        )
    }
}

impl TryFrom<&RoleAiRequest> for CompletionRequest {
    type Error = AppError;

    fn try_from(request: &RoleAiRequest) -> AppResult<Self> {
        request.validate()?;

        let system_prompt = if !request.system_message.trim().is_empty() {
            request.system_message.clone()
        } else {
            match request.role {
                AiRole::Custom => {
                    return Err(AppError::ValidationError(
                        "systemMessage is required for the custom role".to_string(),
                    ))
                }
                AiRole::Translate => translator_system_message(
                    request
                        .language
                        .as_deref()
                        .map(str::trim)
                        .unwrap_or(DEFAULT_TRANSLATION_LANGUAGE),
                ),
                AiRole::Emoji => EMOJI_SYSTEM_MESSAGE.to_string(),
                AiRole::Color => COLOR_SYSTEM_MESSAGE.to_string(),
            }
        };

        let output_mode = match request.role {
            AiRole::Color => OutputMode::Json,
            AiRole::Translate | AiRole::Emoji | AiRole::Custom => OutputMode::Text,
        };

        Ok(
            CompletionRequest::new(system_prompt, request.prompt.clone(), output_mode)
                .with_temperature(TEXT_TEMPERATURE),
        )
    }
}

impl TryFrom<&ChatRequest> for CompletionRequest {
    type Error = AppError;

    fn try_from(request: &ChatRequest) -> AppResult<Self> {
        request.validate()?;

        if request.messages.iter().any(|m| m.role == ChatRole::System) {
            return Err(AppError::ValidationError(
                "system messages cannot be sent to the chat endpoint".to_string(),
            ));
        }

        let (last, history) = request
            .messages
            .split_last()
            .ok_or_else(|| AppError::ValidationError("messages must not be empty".to_string()))?;

        if last.role != ChatRole::User || last.content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "the last message must be a non-empty user message".to_string(),
            ));
        }

        Ok(CompletionRequest::new("", last.content.clone(), OutputMode::Text)
            .with_history(history.to_vec())
            .with_temperature(TEXT_TEMPERATURE))
    }
}

impl TryFrom<&QuizGenerationRequest> for CompletionRequest {
    type Error = AppError;

    fn try_from(request: &QuizGenerationRequest) -> AppResult<Self> {
        request.validate()?;

        let genre = request.genre.trim();
        let system_prompt = format!(
            "You are a quiz author. Create exactly {count} four-option multiple-choice questions \
             in the genre \"{genre}\".\n\
             Return them as a JSON array shaped like this example:\n{example}\n\
             Each item must satisfy this JSON Schema:\n{schema}\n\
             \"answer\" is the zero-based index (0-3) of the correct choice.\n{json_only}",
            count = request.count,
            genre = genre,
            example = QUIZ_GENERATION_EXAMPLE,
            schema = GENERATED_QUESTION_SCHEMA.as_str(),
            json_only = JSON_ONLY_INSTRUCTION,
        );
        let user_prompt = format!(
            "Genre: {}. Number of questions: {}.",
            genre, request.count
        );

        Ok(CompletionRequest::new(
            system_prompt,
            user_prompt,
            OutputMode::Json,
        ))
    }
}

fn describe_choice(answer: i32) -> String {
    if answer == UNANSWERED {
        "unanswered".to_string()
    } else {
        format!("choice {}", i64::from(answer) + 1)
    }
}

fn describe_record(position: usize, record: &QuizAnswerRecord) -> String {
    format!(
        "{}. Question {}: user answer {}, correct answer {}, {}",
        position,
        record.question_id,
        describe_choice(record.user_answer),
        describe_choice(record.correct_answer),
        if record.is_correct { "correct" } else { "incorrect" }
    )
}

/// The totals must agree with the answer records they summarize.
fn check_result_totals(request: &QuizResultRequest) -> AppResult<()> {
    if request.answers.len() != request.total_questions as usize {
        return Err(AppError::ValidationError(format!(
            "totalQuestions ({}) does not match the {} answer records",
            request.total_questions,
            request.answers.len()
        )));
    }

    if let Some(record) = request
        .answers
        .iter()
        .find(|r| r.is_correct != (r.user_answer == r.correct_answer))
    {
        return Err(AppError::ValidationError(format!(
            "isCorrect of question {} contradicts its answers",
            record.question_id
        )));
    }

    let marked = request.answers.iter().filter(|r| r.is_correct).count();
    if marked != request.correct_answers as usize {
        return Err(AppError::ValidationError(format!(
            "correctAnswers ({}) does not match the {} records marked correct",
            request.correct_answers, marked
        )));
    }

    Ok(())
}

impl TryFrom<&QuizResultRequest> for CompletionRequest {
    type Error = AppError;

    fn try_from(request: &QuizResultRequest) -> AppResult<Self> {
        request.validate()?;

        let total = request.total_questions as usize;
        let correct = request.correct_answers as usize;
        let percentage = score_percent(correct, total)?;
        check_result_totals(request)?;

        let shape = QUIZ_ANALYSIS_TEMPLATE
            .replace("{score}", &request.score.to_string())
            .replace("{percentage}", &percentage.to_string());
        let system_prompt = format!(
            "{}\n{}\nAnalyse the quiz result you are given and respond with a JSON object in exactly this shape:\n{}",
            QUIZ_GRADER_ROLE, JSON_ONLY_INSTRUCTION, shape
        );

        let answer_lines: Vec<String> = request
            .answers
            .iter()
            .enumerate()
            .map(|(i, record)| describe_record(i + 1, record))
            .collect();
        let user_prompt = format!(
            "Total questions: {}\nCorrect answers: {}\nScore: {} points ({}%)\n\nAnswers per question:\n{}",
            total,
            correct,
            request.score,
            percentage,
            answer_lines.join("\n")
        );

        Ok(CompletionRequest::new(
            system_prompt,
            user_prompt,
            OutputMode::Json,
        ))
    }
}
