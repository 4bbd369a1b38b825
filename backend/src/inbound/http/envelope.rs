//! JSON envelope rendered for every API response.
//!
//! A finished chain is returned from a handler as-is: [`Outcome`] implements
//! [`Responder`], so the boundary layer only picks the transport status and
//! serialises `{ code, message, data }`. Domain [`Error`](crate::domain::Error)
//! values reuse [`Envelope`] through their `ResponseError` impl.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::domain::{Outcome, ResultCategory, ResultCode, TRACE_ID_HEADER, TraceId};

/// Message substituted for server-side failures before they leave the process.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Response body shared by successes, failures and transport errors.
///
/// # Examples
/// ```
/// use blog::domain::ResultCode;
/// use blog::inbound::http::envelope::Envelope;
///
/// let body = Envelope::new(ResultCode::ok(), "Success", Some(7));
/// let json = serde_json::to_value(&body).expect("serialise envelope");
/// assert_eq!(json["code"], "S-1");
/// assert_eq!(json["data"], 7);
/// assert!(json.get("traceId").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Status code of the finished chain.
    pub code: ResultCode,
    /// Human-readable description.
    pub message: String,
    /// Payload; `null` for failures and payload-less successes.
    pub data: Option<T>,
    /// Request correlation identifier, present on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured context for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T> Envelope<T> {
    /// Envelope without trace id or details.
    pub fn new(code: ResultCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            trace_id: None,
            details: None,
        }
    }
}

/// Transport status for a result code.
///
/// Successes map to `200`. A failure whose numeric suffix is a 4xx or 5xx
/// status maps to that status; every other failure maps to `400`.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use blog::domain::ResultCode;
/// use blog::inbound::http::envelope::status_for;
///
/// assert_eq!(status_for(&ResultCode::ok()), StatusCode::OK);
/// assert_eq!(status_for(&ResultCode::not_found()), StatusCode::NOT_FOUND);
/// assert_eq!(status_for(&ResultCode::failure(7)), StatusCode::BAD_REQUEST);
/// ```
#[must_use]
pub fn status_for(code: &ResultCode) -> StatusCode {
    if code.category() == ResultCategory::Success {
        return StatusCode::OK;
    }
    code.number()
        .filter(|n| (400..600).contains(n))
        .and_then(|n| StatusCode::from_u16(n).ok())
        .unwrap_or(StatusCode::BAD_REQUEST)
}

pub(crate) fn insert_trace_header(builder: &mut actix_web::HttpResponseBuilder, id: Option<&str>) {
    if let Some(id) = id {
        builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
    }
}

impl<T: Serialize> Responder for Outcome<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status = status_for(self.code());
        let envelope = match self {
            Outcome::Success(success) => {
                let (code, message, data) = success.into_parts();
                Envelope::new(code, message, data)
            }
            Outcome::Failure(failure) => {
                let message = if status.is_server_error() {
                    error!(code = %failure.code(), reason = failure.message(), "chain failed");
                    REDACTED_MESSAGE.to_owned()
                } else {
                    failure.message().to_owned()
                };
                Envelope {
                    code: failure.code().clone(),
                    message,
                    data: None,
                    trace_id: TraceId::current().map(|id| id.to_string()),
                    details: None,
                }
            }
        };

        let mut builder = HttpResponse::build(status);
        insert_trace_header(&mut builder, envelope.trace_id.as_deref());
        builder.json(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Failure;
    use actix_web::test::TestRequest;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use uuid::Uuid;

    async fn render<T: Serialize>(outcome: Outcome<T>) -> (StatusCode, Value) {
        let req = TestRequest::default().to_http_request();
        let response = outcome.respond_to(&req);
        let status = response.status();
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        let body = serde_json::from_slice(&bytes).expect("envelope JSON");
        (status, body)
    }

    #[rstest]
    #[case("S-1", StatusCode::OK)]
    #[case("S-201", StatusCode::OK)]
    #[case("F-400", StatusCode::BAD_REQUEST)]
    #[case("F-403", StatusCode::FORBIDDEN)]
    #[case("F-404", StatusCode::NOT_FOUND)]
    #[case("F-409", StatusCode::CONFLICT)]
    #[case("F-503", StatusCode::SERVICE_UNAVAILABLE)]
    #[case("F-1", StatusCode::BAD_REQUEST)]
    #[case("F-302", StatusCode::BAD_REQUEST)]
    #[case("E-X", StatusCode::BAD_REQUEST)]
    fn status_follows_code(#[case] raw: &str, #[case] expected: StatusCode) {
        let code = ResultCode::new(raw).expect("valid code");
        assert_eq!(status_for(&code), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn success_renders_payload() {
        let (status, body) =
            render(Outcome::success(ResultCode::ok(), "article 1 was found", 1_u8)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "S-1");
        assert_eq!(body["message"], "article 1 was found");
        assert_eq!(body["data"], 1);
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_success_renders_null_data() {
        let (status, body) = render(Outcome::<u8>::produce_empty()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Success");
        assert!(body["data"].is_null());
    }

    #[rstest]
    #[actix_web::test]
    async fn failure_renders_null_data_and_trace_id() {
        let trace_id = TraceId::from(Uuid::nil());
        let outcome: Outcome<u8> = Failure::forbidden("you may not modify article 1").into();

        let req = TestRequest::default().to_http_request();
        let response = TraceId::scope(trace_id, async move { outcome.respond_to(&req) }).await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("ascii header")
            .to_owned();
        assert_eq!(header, trace_id.to_string());
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let body: Envelope<u8> = serde_json::from_slice(&bytes).expect("envelope JSON");
        assert_eq!(body.code, ResultCode::forbidden());
        assert_eq!(body.message, "you may not modify article 1");
        assert_eq!(body.data, None);
        assert_eq!(body.trace_id, Some(trace_id.to_string()));
    }

    #[rstest]
    #[actix_web::test]
    async fn server_failures_are_redacted() {
        let outcome: Outcome<u8> = Failure::internal("article storage failed").into();

        let (status, body) = render(outcome).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "F-500");
        assert_eq!(body["message"], REDACTED_MESSAGE);
    }
}
