//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting handlers
//! return it with `?`. Errors render the same [`Envelope`] as finished chains,
//! so clients see one body shape whichever path produced the response.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};

use super::envelope::{Envelope, REDACTED_MESSAGE, insert_trace_header, status_for};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn envelope_for(error: &Error) -> Envelope<()> {
    let internal = matches!(error.code(), ErrorCode::InternalError);
    Envelope {
        code: error.code().result_code(),
        message: if internal {
            REDACTED_MESSAGE.to_owned()
        } else {
            error.message().to_owned()
        },
        data: None,
        trace_id: error.trace_id().map(str::to_owned),
        details: if internal {
            None
        } else {
            error.details().cloned()
        },
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(&self.code().result_code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(error = %self, "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        insert_trace_header(&mut builder, self.trace_id());
        builder.json(envelope_for(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Render JSON body rejections through the envelope instead of plain text.
///
/// Registered with [`actix_web::web::JsonConfig::error_handler`].
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = req.path(), "rejected JSON payload");
    Error::invalid_request("request body is not valid JSON")
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}
