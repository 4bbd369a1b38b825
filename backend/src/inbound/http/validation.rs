//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies are parsed into domain field types before a chain starts;
//! rejections become `F-400` envelopes whose `details` name the field.

use serde_json::json;

use crate::domain::{ArticleId, ArticleValidationError, Content, Error, Subject};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    TooLong,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankField => "blank_field",
            ErrorCode::TooLong => "too_long",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const SUBJECT: FieldName = FieldName::new("subject");
pub(crate) const CONTENT: FieldName = FieldName::new("content");
pub(crate) const ARTICLE_ID: FieldName = FieldName::new("id");

fn field_error(field: FieldName, message: impl Into<String>, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ErrorCode::MissingField,
    )
}

fn article_field_error(field: FieldName, err: ArticleValidationError) -> Error {
    let code = match err {
        ArticleValidationError::SubjectTooLong { .. } => ErrorCode::TooLong,
        ArticleValidationError::ZeroId => ErrorCode::InvalidId,
        ArticleValidationError::BlankSubject | ArticleValidationError::BlankContent => {
            ErrorCode::BlankField
        }
    };
    field_error(field, err.to_string(), code)
}

/// Parse a path segment into a positive article identifier.
pub(crate) fn parse_article_id(raw: &str) -> Result<ArticleId, Error> {
    let invalid = || {
        Error::invalid_request("article id must be a positive integer").with_details(json!({
            "field": ARTICLE_ID.as_str(),
            "value": raw,
            "code": ErrorCode::InvalidId.as_str(),
        }))
    };
    let value: u64 = raw.parse().map_err(|_| invalid())?;
    ArticleId::new(value).map_err(|_| invalid())
}

pub(crate) fn parse_subject(value: String) -> Result<Subject, Error> {
    Subject::new(value).map_err(|err| article_field_error(SUBJECT, err))
}

pub(crate) fn parse_content(value: String) -> Result<Content, Error> {
    Content::new(value).map_err(|err| article_field_error(CONTENT, err))
}

pub(crate) fn parse_optional_subject(value: Option<String>) -> Result<Option<Subject>, Error> {
    value.map(parse_subject).transpose()
}

pub(crate) fn parse_optional_content(value: Option<String>) -> Result<Option<Content>, Error> {
    value.map(parse_content).transpose()
}
