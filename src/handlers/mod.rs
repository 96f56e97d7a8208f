pub mod ai_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::services::http_helpers::json_config;

pub use ai_handler::{chat, role_ai, seo_analysis, write_blog};
pub use health_handler::{health_check, health_check_live};
pub use quiz_handler::{analyse_result, generate_quiz, get_questions, submit_quiz};

/// Registers every route plus the shared JSON extractor config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(health_check_live)
        .service(write_blog)
        .service(chat)
        .service(role_ai)
        .service(seo_analysis)
        .service(generate_quiz)
        .service(analyse_result)
        .service(get_questions)
        .service(submit_quiz);
}
