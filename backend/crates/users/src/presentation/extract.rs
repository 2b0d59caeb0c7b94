//! Request body extractor
//!
//! Yields the body as a raw JSON object so validators can check which keys
//! are present. A body that is empty or not sent as JSON is an empty object.
//! Arrays become objects keyed by index.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header};
use serde_json::Value;

use crate::application::validate::JsonObject;
use crate::error::UsersError;

/// JSON object body
#[derive(Debug, Clone)]
pub struct JsonBody(pub JsonObject);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = UsersError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_content_type(req.headers()) {
            return Ok(JsonBody(JsonObject::new()));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                UsersError::BodyTooLarge
            } else {
                UsersError::UnreadableBody(rejection)
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(JsonObject::new()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(UsersError::MalformedBody)?;
        into_object(value).map(JsonBody)
    }
}

/// `application/json` or any `application/*+json`, parameters ignored
fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

fn into_object(value: Value) -> Result<JsonObject, UsersError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect()),
        // Scalars fail here with a type error
        other => serde_json::from_value(other).map_err(UsersError::MalformedBody),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(json_content_type(&headers("application/json")));
        assert!(json_content_type(&headers("application/json; charset=utf-8")));
        assert!(json_content_type(&headers("Application/JSON")));
        assert!(json_content_type(&headers("application/merge-patch+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!json_content_type(&HeaderMap::new()));
        assert!(!json_content_type(&headers("text/plain")));
        assert!(!json_content_type(&headers("application/x-www-form-urlencoded")));
        assert!(!json_content_type(&headers("text/json")));
    }

    #[test]
    fn test_array_becomes_index_keyed_object() {
        assert!(into_object(json!([])).unwrap().is_empty());

        let object = into_object(json!(["Alice", 2])).unwrap();
        assert_eq!(object.get("0"), Some(&json!("Alice")));
        assert_eq!(object.get("1"), Some(&json!(2)));
    }

    #[test]
    fn test_scalar_is_malformed() {
        for value in [json!("Alice"), json!(3), json!(null), json!(true)] {
            let err = into_object(value).unwrap_err();
            assert!(matches!(err, UsersError::MalformedBody(_)));
        }
    }
}
