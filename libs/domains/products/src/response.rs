use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ProductError, ProductResult};

/// Response descriptor produced by every handler: status, headers and a
/// pre-serialized body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

impl ApiResponse {
    /// Serialize `payload` as the body, with `content-type: application/json`
    pub fn json<T: Serialize>(status_code: StatusCode, payload: &T) -> ProductResult<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ProductError::Internal(format!("response serialization: {}", e)))?;

        Ok(Self {
            status_code,
            headers: json_headers(),
            body,
        })
    }

    pub fn from_value(status_code: StatusCode, body: Value) -> Self {
        Self {
            status_code,
            headers: json_headers(),
            body: body.to_string(),
        }
    }

    /// Empty body; the content-type header is kept.
    pub fn empty(status_code: StatusCode) -> Self {
        Self {
            status_code,
            headers: json_headers(),
            body: String::new(),
        }
    }

    pub fn without_headers(mut self) -> Self {
        self.headers.clear();
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        // Built by hand: a `String` response would add text/plain
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status_code;
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_sets_content_type() {
        let response = ApiResponse::json(StatusCode::OK, &json!({ "a": 1 })).unwrap();
        assert_eq!(response.headers[CONTENT_TYPE], "application/json");
        assert_eq!(response.body, r#"{"a":1}"#);
    }

    #[test]
    fn test_empty_keeps_header() {
        let response = ApiResponse::empty(StatusCode::NO_CONTENT);
        assert_eq!(response.body, "");
        assert_eq!(response.headers.len(), 1);
    }

    #[test]
    fn test_into_response_adds_no_headers() {
        let response = ApiResponse::json(StatusCode::OK, &Vec::<u8>::new())
            .unwrap()
            .without_headers()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }
}
