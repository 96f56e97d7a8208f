use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{errors::AppError, models::dto::response::ErrorResponse};

pub const UNPARSEABLE_OUTPUT_MESSAGE: &str = "AI response could not be parsed.";
pub const INVALID_BODY_MESSAGE: &str = "The request body could not be read.";

const MAX_JSON_BODY_BYTES: usize = 256 * 1024;

/// Endpoint-level failure: keeps the cause for logging, exposes only a generic message.
#[derive(Debug, Error)]
#[error("{message} ({cause})")]
pub struct ApiFailure {
    cause: AppError,
    message: &'static str,
    flagged: bool,
}

impl ApiFailure {
    /// Maps an error to a `{error}` body.
    pub fn plain(message: &'static str) -> impl Fn(AppError) -> ApiFailure {
        move |cause| ApiFailure {
            cause,
            message,
            flagged: false,
        }
    }

    /// Maps an error to a `{success: false, error}` body.
    pub fn flagged(message: &'static str) -> impl Fn(AppError) -> ApiFailure {
        move |cause| ApiFailure {
            cause,
            message,
            flagged: true,
        }
    }

    pub fn cause(&self) -> &AppError {
        &self.cause
    }

    pub fn public_message(&self) -> &'static str {
        if self.cause.is_unparseable_output() {
            UNPARSEABLE_OUTPUT_MESSAGE
        } else {
            self.message
        }
    }
}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!(
            "{} [{}]: {}",
            self.message,
            self.cause.error_code(),
            self.cause
        );

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: self.flagged.then_some(false),
            error: self.public_message().to_string(),
        })
    }
}

fn is_quiz_route(req: &HttpRequest) -> bool {
    req.path().contains("quiz")
}

/// JSON extractor settings; unreadable bodies fail with the same envelope as the endpoint.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, req| {
            let cause = AppError::ValidationError(err.to_string());
            let failure = if is_quiz_route(req) {
                ApiFailure::flagged(INVALID_BODY_MESSAGE)(cause)
            } else {
                ApiFailure::plain(INVALID_BODY_MESSAGE)(cause)
            };
            failure.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(failure: ApiFailure) -> serde_json::Value {
        let response = failure.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn plain_failure_hides_the_cause() {
        let failure = ApiFailure::plain("Blog generation failed.")(
            AppError::CompletionServiceError("api key rejected".into()),
        );

        let json = body_json(failure).await;

        assert_eq!(json["error"], "Blog generation failed.");
        assert!(json.get("success").is_none());
    }

    #[actix_rt::test]
    async fn flagged_failure_reports_success_false() {
        let failure =
            ApiFailure::flagged("Quiz failed.")(AppError::InvalidArgumentError("empty".into()));

        let json = body_json(failure).await;

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Quiz failed.");
    }

    #[actix_rt::test]
    async fn unparseable_output_has_its_own_message() {
        let malformed =
            ApiFailure::flagged("Quiz failed.")(AppError::MalformedModelOutputError("eof".into()));
        let mismatched =
            ApiFailure::plain("Role failed.")(AppError::SchemaMismatchError("colors".into()));

        assert_eq!(body_json(malformed).await["error"], UNPARSEABLE_OUTPUT_MESSAGE);
        assert_eq!(body_json(mismatched).await["error"], UNPARSEABLE_OUTPUT_MESSAGE);
    }

    #[test]
    fn failure_keeps_its_cause() {
        let failure = ApiFailure::plain("x")(AppError::ValidationError("topic".into()));
        assert_eq!(failure.cause(), &AppError::ValidationError("topic".into()));
        assert_eq!(failure.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
