use std::borrow::Cow;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    services::completion_service::{CompletionResult, OutputMode},
};

// A run of dollar signs is consumed whole so a second pass has nothing left to strip.
static CURRENCY_TOKEN: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"\$+(\d+)").expect("CURRENCY_TOKEN is a valid regex pattern"));

#[derive(Clone, Debug, PartialEq)]
pub enum NormalizedResponse {
    Text(String),
    Json(serde_json::Value),
}

impl NormalizedResponse {
    pub fn into_text(self) -> String {
        match self {
            NormalizedResponse::Text(text) => text,
            NormalizedResponse::Json(value) => value.to_string(),
        }
    }

    pub fn into_json(self) -> AppResult<serde_json::Value> {
        match self {
            NormalizedResponse::Json(value) => Ok(value),
            NormalizedResponse::Text(_) => Err(AppError::InvalidArgumentError(
                "expected a JSON response but the request was in text mode".to_string(),
            )),
        }
    }
}

/// Drops the `$` from every `$<digits>` token.
pub fn sanitize_currency(text: &str) -> Cow<'_, str> {
    CURRENCY_TOKEN.replace_all(text, "${1}")
}

pub fn normalize(result: CompletionResult, mode: OutputMode) -> AppResult<NormalizedResponse> {
    match mode {
        OutputMode::Text => Ok(NormalizedResponse::Text(result.raw_text)),
        OutputMode::CurrencySanitizedText => Ok(NormalizedResponse::Text(
            sanitize_currency(&result.raw_text).into_owned(),
        )),
        OutputMode::Json => serde_json::from_str(&result.raw_text)
            .map(NormalizedResponse::Json)
            .map_err(|e| {
                log::warn!(
                    "Model output is not valid JSON ({}): {:.200}",
                    e,
                    result.raw_text
                );
                AppError::MalformedModelOutputError(e.to_string())
            }),
    }
}

/// Decodes parsed model JSON into its documented shape and checks its constraints.
pub fn decode<T>(value: serde_json::Value) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let decoded: T = serde_json::from_value(value)
        .map_err(|e| AppError::SchemaMismatchError(e.to_string()))?;
    decoded
        .validate()
        .map_err(|e| AppError::SchemaMismatchError(e.to_string()))?;
    Ok(decoded)
}

/// Like [`decode`] for a top-level JSON array of items.
pub fn decode_list<T>(value: serde_json::Value) -> AppResult<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    let items: Vec<T> = serde_json::from_value(value)
        .map_err(|e| AppError::SchemaMismatchError(e.to_string()))?;
    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|e| {
            AppError::SchemaMismatchError(format!("item {}: {}", index, e))
        })?;
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{ColorPalette, GeneratedQuestion};
    use serde_json::json;

    fn raw(text: &str) -> CompletionResult {
        CompletionResult {
            raw_text: text.to_string(),
        }
    }

    #[test]
    fn sanitize_strips_dollar_before_digits() {
        assert_eq!(sanitize_currency("It costs $123 today"), "It costs 123 today");
        assert_eq!(sanitize_currency("$2 and $30"), "2 and 30");
        assert_eq!(sanitize_currency("$$5"), "5");
    }

    #[test]
    fn sanitize_leaves_other_dollars_alone() {
        assert_eq!(sanitize_currency("price in $ USD"), "price in $ USD");
        assert_eq!(sanitize_currency("$abc"), "$abc");
        assert_eq!(sanitize_currency("no currency"), "no currency");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = [
            "It costs $123",
            "$$$42 then $ 7 and $x9",
            "a$1b$$2c$",
            "",
            "$",
            "$$",
            "100$ and $100",
        ];

        for sample in samples {
            let once = sanitize_currency(sample).into_owned();
            let twice = sanitize_currency(&once).into_owned();
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn text_mode_passes_through() {
        let normalized = normalize(raw("Hello $5"), OutputMode::Text).unwrap();
        assert_eq!(normalized, NormalizedResponse::Text("Hello $5".to_string()));

        let empty = normalize(raw(""), OutputMode::Text).unwrap();
        assert_eq!(empty, NormalizedResponse::Text(String::new()));
    }

    #[test]
    fn currency_mode_sanitizes() {
        let normalized = normalize(raw("Budget: $500"), OutputMode::CurrencySanitizedText).unwrap();
        assert_eq!(normalized.into_text(), "Budget: 500");
    }

    #[test]
    fn json_mode_parses_valid_json() {
        let normalized = normalize(raw(r#" {"a": [1, 2]} "#), OutputMode::Json).unwrap();
        assert_eq!(normalized.into_json().unwrap(), json!({"a": [1, 2]}));
    }

    #[test]
    fn json_mode_rejects_malformed_json() {
        let result = normalize(raw("{not json"), OutputMode::Json);
        assert!(matches!(result, Err(AppError::MalformedModelOutputError(_))));

        let empty = normalize(raw(""), OutputMode::Json);
        assert!(matches!(empty, Err(AppError::MalformedModelOutputError(_))));
    }

    #[test]
    fn into_json_on_text_is_an_error() {
        let result = NormalizedResponse::Text("hi".to_string()).into_json();
        assert!(matches!(result, Err(AppError::InvalidArgumentError(_))));
    }

    #[test]
    fn decode_reports_schema_mismatch() {
        let two_colors = json!({
            "colors": [
                {"name": "Coral", "css_code": "#FF7F50", "description": "warm"},
                {"name": "Peach", "css_code": "#FFDAB9", "description": "soft"}
            ]
        });
        let result = decode::<ColorPalette>(two_colors);
        assert!(matches!(result, Err(AppError::SchemaMismatchError(_))));

        let wrong_shape = decode::<ColorPalette>(json!(["red", "green", "blue"]));
        assert!(matches!(wrong_shape, Err(AppError::SchemaMismatchError(_))));
    }

    #[test]
    fn decode_list_validates_every_item() {
        let questions = json!([
            {"question": "Q1", "choices": ["a", "b", "c", "d"], "answer": 0},
            {"question": "Q2", "choices": ["a", "b", "c"], "answer": 1}
        ]);

        let result = decode_list::<GeneratedQuestion>(questions);
        match result {
            Err(AppError::SchemaMismatchError(message)) => assert!(message.starts_with("item 1")),
            other => panic!("expected schema mismatch, got {:?}", other),
        }
    }

    #[test]
    fn decode_list_accepts_valid_items() {
        let questions = json!([
            {"question": "Q1", "choices": ["a", "b", "c", "d"], "answer": 3, "explanation": "d"}
        ]);

        let decoded = decode_list::<GeneratedQuestion>(questions).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].answer, 3);
    }
}
