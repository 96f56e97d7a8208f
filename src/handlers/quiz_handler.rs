use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::{
        domain::quiz_question::seed_questions,
        dto::{
            request::{QuizGenerationRequest, QuizResultRequest, QuizSubmissionRequest},
            response::{QuizQuestionsResponse, QuizResultResponse, QuizSubmissionResponse},
        },
    },
    services::{grading_service, http_helpers::ApiFailure},
};

const GENERATION_FAILURE: &str = "An error occurred while generating the quiz.";
const RESULT_FAILURE: &str = "An error occurred while processing the quiz result.";

#[post("/api/openai-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<QuizGenerationRequest>,
) -> Result<HttpResponse, ApiFailure> {
    let questions = state
        .ai_service
        .generate_quiz(&request)
        .await
        .map_err(ApiFailure::flagged(GENERATION_FAILURE))?;

    log::info!(
        "[{}] Generated {} questions about '{}'",
        get_request_id(&req).unwrap_or_default(),
        questions.len(),
        request.genre
    );

    Ok(HttpResponse::Ok().json(QuizQuestionsResponse {
        success: true,
        questions,
    }))
}

#[post("/api/quiz-result")]
async fn analyse_result(
    state: web::Data<AppState>,
    request: web::Json<QuizResultRequest>,
) -> Result<HttpResponse, ApiFailure> {
    let data = state
        .ai_service
        .analyse_result(&request)
        .await
        .map_err(ApiFailure::flagged(RESULT_FAILURE))?;

    Ok(HttpResponse::Ok().json(QuizResultResponse {
        success: true,
        data,
    }))
}

#[get("/api/quiz/questions")]
async fn get_questions() -> HttpResponse {
    HttpResponse::Ok().json(QuizQuestionsResponse {
        success: true,
        questions: seed_questions(),
    })
}

/// Grades the answers against the built-in quiz, then asks the model for an analysis.
#[post("/api/quiz/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<QuizSubmissionRequest>,
) -> Result<HttpResponse, ApiFailure> {
    let to_failure = ApiFailure::flagged(RESULT_FAILURE);

    let report = grading_service::grade(&seed_questions(), &request.answers).map_err(&to_failure)?;
    log::info!(
        "[{}] Quiz submitted: {}/{} correct ({}%)",
        get_request_id(&req).unwrap_or_default(),
        report.correct_count,
        report.total_questions(),
        report.score_percent
    );

    let data = state
        .ai_service
        .analyse_result(&QuizResultRequest::from(&report))
        .await
        .map_err(to_failure)?;

    Ok(HttpResponse::Ok().json(QuizSubmissionResponse {
        success: true,
        result: report,
        data,
    }))
}
