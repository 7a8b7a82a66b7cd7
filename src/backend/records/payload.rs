/**
 * Request Payload Extraction
 *
 * Update and delete requests may carry their payload in several places.
 * [`RecordForm`] collects them and merges field by field in this order:
 *
 * 1. JSON body (`Content-Type: application/json`)
 * 2. Form body (`Content-Type: application/x-www-form-urlencoded`)
 * 3. Query string
 * 4. `X-Record-Id` / `X-Record-Name` / `X-Record-Surname` headers
 *
 * A field set by an earlier source is never overridden by a later one.
 *
 * [`ResponseFormat`] picks between JSON and an HTML fragment from the
 * `HX-Request` header.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    Form, Json,
};

use crate::shared::record::{RecordId, RecordPayload};

pub const HEADER_RECORD_ID: &str = "x-record-id";
pub const HEADER_RECORD_NAME: &str = "x-record-name";
pub const HEADER_RECORD_SURNAME: &str = "x-record-surname";
pub const HEADER_HX_REQUEST: &str = "hx-request";

/// Update/delete payload merged from every request part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm(pub RecordPayload);

impl<S> FromRequest<S> for RecordForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<RecordPayload>::try_from_uri(req.uri())
            .map(|Query(payload)| payload)
            .unwrap_or_default();
        let from_headers = payload_from_headers(req.headers());

        let from_body = match BodyKind::of(req.headers()) {
            BodyKind::Json => match Json::<RecordPayload>::from_request(req, state).await {
                Ok(Json(payload)) => payload,
                Err(rejection) => {
                    tracing::debug!("Ignoring unreadable JSON payload: {}", rejection.body_text());
                    RecordPayload::default()
                }
            },
            BodyKind::Form => match Form::<RecordPayload>::from_request(req, state).await {
                Ok(Form(payload)) => payload,
                Err(rejection) => {
                    tracing::debug!("Ignoring unreadable form payload: {}", rejection.body_text());
                    RecordPayload::default()
                }
            },
            BodyKind::Other => RecordPayload::default(),
        };

        Ok(Self(from_body.or(from_query).or(from_headers)))
    }
}

enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            Self::Json
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            Self::Form
        } else {
            Self::Other
        }
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn payload_from_headers(headers: &HeaderMap) -> RecordPayload {
    RecordPayload {
        id: header_text(headers, HEADER_RECORD_ID).map(RecordId::Text),
        name: header_text(headers, HEADER_RECORD_NAME),
        surname: header_text(headers, HEADER_RECORD_SURNAME),
    }
}

/// How the caller wants the response rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    /// HTML-over-the-wire request (`HX-Request` header present)
    Html,
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if parts.headers.contains_key(HEADER_HX_REQUEST) {
            Ok(Self::Html)
        } else {
            Ok(Self::Json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use pretty_assertions::assert_eq;

    async fn extract(request: Request) -> RecordPayload {
        RecordForm::from_request(request, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn test_json_body() {
        let request = http::Request::builder()
            .method("PUT")
            .uri("/api/test")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id": 4, "name": "Ada"}"#))
            .unwrap();

        let payload = extract(request).await;
        assert_eq!(payload.record_id().unwrap(), 4);
        assert_eq!(payload.name.as_deref(), Some("Ada"));
        assert_eq!(payload.surname, None);
    }

    #[tokio::test]
    async fn test_form_body() {
        let request = http::Request::builder()
            .method("PUT")
            .uri("/api/test")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("id=5&surname=Hopper"))
            .unwrap();

        let payload = extract(request).await;
        assert_eq!(payload.record_id().unwrap(), 5);
        assert_eq!(payload.surname.as_deref(), Some("Hopper"));
    }

    #[tokio::test]
    async fn test_query_and_headers_fill_missing_fields() {
        let request = http::Request::builder()
            .method("DELETE")
            .uri("/api/test?id=8")
            .header("X-Record-Id", "9")
            .header("X-Record-Name", "Grace")
            .body(Body::empty())
            .unwrap();

        let payload = extract(request).await;
        assert_eq!(payload.record_id().unwrap(), 8);
        assert_eq!(payload.name.as_deref(), Some("Grace"));
    }

    #[tokio::test]
    async fn test_unreadable_json_falls_back_to_headers() {
        let request = http::Request::builder()
            .method("DELETE")
            .uri("/api/test")
            .header(CONTENT_TYPE, "application/json")
            .header("X-Record-Id", "3")
            .body(Body::from("{not json"))
            .unwrap();

        assert_eq!(extract(request).await.record_id().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_response_format() {
        let request = http::Request::builder().header("HX-Request", "true").body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        assert_eq!(
            ResponseFormat::from_request_parts(&mut parts, &()).await.unwrap(),
            ResponseFormat::Html
        );

        let (mut parts, _) = http::Request::builder().body(()).unwrap().into_parts();
        assert_eq!(
            ResponseFormat::from_request_parts(&mut parts, &()).await.unwrap(),
            ResponseFormat::Json
        );
    }
}
