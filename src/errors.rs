use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Completion service error: {0}")]
    CompletionServiceError(String),

    #[error("Malformed model output: {0}")]
    MalformedModelOutputError(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatchError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::CompletionServiceError(_) => "COMPLETION_SERVICE_ERROR",
            AppError::MalformedModelOutputError(_) => "MALFORMED_MODEL_OUTPUT",
            AppError::SchemaMismatchError(_) => "SCHEMA_MISMATCH",
            AppError::InvalidArgumentError(_) => "INVALID_ARGUMENT",
            AppError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// True when the model answered but its output could not be used.
    pub fn is_unparseable_output(&self) -> bool {
        matches!(
            self,
            AppError::MalformedModelOutputError(_) | AppError::SchemaMismatchError(_)
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::CompletionServiceError(err.to_string())
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
