pub mod ai_service;
pub mod completion_service;
pub mod grading_service;
pub mod http_helpers;
pub mod markdown;
pub mod prompt_builder;
pub mod response_normalizer;
pub mod seo_service;
