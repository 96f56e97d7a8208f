use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    middleware::get_request_id,
    models::dto::{
        request::{BlogWriterRequest, ChatRequest, RoleAiRequest, SeoAnalysisRequest},
        response::{BlogWriterResponse, MessageResponse},
    },
    services::{http_helpers::ApiFailure, markdown, seo_service},
};

const BLOG_FAILURE: &str = "An error occurred while generating the blog post.";
const CHAT_FAILURE: &str = "An error occurred while generating the chatbot response.";
const ROLE_FAILURE: &str = "An error occurred while generating the AI response.";
const SEO_FAILURE: &str = "An error occurred while analyzing the content.";

fn request_id(req: &HttpRequest) -> String {
    get_request_id(req).unwrap_or_else(|| "-".to_string())
}

#[post("/api/blog-writer")]
async fn write_blog(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<BlogWriterRequest>,
) -> Result<HttpResponse, ApiFailure> {
    log::info!(
        "[{}] Writing a {:?} blog post about '{}'",
        request_id(&req),
        request.tone,
        request.topic
    );

    let content = state
        .ai_service
        .write_blog(&request)
        .await
        .map_err(ApiFailure::plain(BLOG_FAILURE))?;
    let html = markdown::render(&content);

    Ok(HttpResponse::Ok().json(BlogWriterResponse { content, html }))
}

#[post("/api/chat")]
async fn chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiFailure> {
    log::info!(
        "[{}] Chat turn with {} messages",
        request_id(&req),
        request.messages.len()
    );

    let message = state
        .ai_service
        .chat(&request)
        .await
        .map_err(ApiFailure::plain(CHAT_FAILURE))?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

#[post("/api/role-ai")]
async fn role_ai(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<RoleAiRequest>,
) -> Result<HttpResponse, ApiFailure> {
    log::info!("[{}] Role reply as {:?}", request_id(&req), request.role);

    let message = state
        .ai_service
        .role_reply(&request)
        .await
        .map_err(ApiFailure::plain(ROLE_FAILURE))?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

#[post("/api/seo-analysis")]
async fn seo_analysis(
    req: HttpRequest,
    request: web::Json<SeoAnalysisRequest>,
) -> Result<HttpResponse, ApiFailure> {
    let to_failure = ApiFailure::plain(SEO_FAILURE);
    request.validate().map_err(|e| to_failure(e.into()))?;

    let report = seo_service::analyze(&request.content, &request.keywords).map_err(to_failure)?;
    log::info!("[{}] SEO score {}", request_id(&req), report.score);

    Ok(HttpResponse::Ok().json(report))
}
