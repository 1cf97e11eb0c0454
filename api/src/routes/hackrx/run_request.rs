use serde::Deserialize;
use serde_json::Value;

use crate::error_handler::{AppError, AppResult};

/// Request payload for `POST /hackrx/run`.
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    /// Document reference (usually a URL).
    pub documents: String,
    /// Questions to answer, in order.
    pub questions: Vec<String>,
}

impl RunRequest {
    /// Parses and validates a raw body.
    ///
    /// # Errors
    /// - [`AppError::InvalidJson`] if the body is not JSON, not an object, or `{}`
    /// - [`AppError::InvalidFields`] if `documents` is not a non-empty string or
    ///   `questions` is not a non-empty array of strings
    pub fn parse(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;
        match &value {
            Value::Object(map) if !map.is_empty() => {}
            _ => return Err(AppError::InvalidJson),
        }

        let req: RunRequest = serde_json::from_value(value).map_err(|_| AppError::InvalidFields)?;
        if req.documents.is_empty() || req.questions.is_empty() {
            return Err(AppError::InvalidFields);
        }
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> AppResult<RunRequest> {
        RunRequest::parse(raw.as_bytes())
    }

    #[test]
    fn accepts_valid_payload() {
        let req = parse(r#"{"documents":"https://x/p.pdf","questions":["a","b"]}"#).unwrap();
        assert_eq!(req.documents, "https://x/p.pdf");
        assert_eq!(req.questions, vec!["a", "b"]);
    }

    #[test]
    fn unparseable_or_empty_body_is_invalid_json() {
        for raw in ["", "not json", "{", "[]", "\"s\"", "null", "{}"] {
            assert!(
                matches!(parse(raw), Err(AppError::InvalidJson)),
                "expected InvalidJson for {raw:?}"
            );
        }
    }

    #[test]
    fn bad_fields_are_rejected() {
        let cases = [
            r#"{"questions":["a"]}"#,
            r#"{"documents":"","questions":["a"]}"#,
            r#"{"documents":42,"questions":["a"]}"#,
            r#"{"documents":"d"}"#,
            r#"{"documents":"d","questions":"a"}"#,
            r#"{"documents":"d","questions":[]}"#,
            r#"{"documents":"d","questions":["a",1]}"#,
        ];
        for raw in cases {
            assert!(
                matches!(parse(raw), Err(AppError::InvalidFields)),
                "expected InvalidFields for {raw}"
            );
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req = parse(r#"{"documents":"d","questions":["q"],"extra":true}"#).unwrap();
        assert_eq!(req.questions.len(), 1);
    }
}
