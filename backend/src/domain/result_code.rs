//! Opaque status codes carried by every [`Outcome`](super::Outcome).
//!
//! Codes look like `S-1` or `F-404`. The leading character names the
//! category; the remainder is free-form and only interpreted by inbound
//! adapters when choosing a transport status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Leading character marking a code in the success category.
pub const SUCCESS_MARKER: char = 'S';

/// Validation errors returned by [`ResultCode::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultCodeValidationError {
    /// The code was empty once trimmed.
    #[error("result code must not be empty")]
    Empty,
    /// The code contained surrounding or embedded whitespace.
    #[error("result code must not contain whitespace")]
    Whitespace,
}

/// Category derived from the leading character of a [`ResultCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCategory {
    /// Codes starting with [`SUCCESS_MARKER`].
    Success,
    /// Every other code.
    Failure,
}

/// Structured status code such as `S-1` or `F-404`.
///
/// ## Invariants
/// - Non-empty and free of whitespace.
///
/// # Examples
/// ```
/// use blog::domain::{ResultCategory, ResultCode};
///
/// let code = ResultCode::new("F-404").expect("valid code");
/// assert_eq!(code.category(), ResultCategory::Failure);
/// assert_eq!(code.as_ref(), "F-404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResultCode(String);

impl ResultCode {
    /// Validate and construct a code from caller input.
    pub fn new(code: impl Into<String>) -> Result<Self, ResultCodeValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ResultCodeValidationError::Empty);
        }
        if code.chars().any(char::is_whitespace) {
            return Err(ResultCodeValidationError::Whitespace);
        }
        Ok(Self(code))
    }

    /// Success code `S-<n>`.
    #[must_use]
    pub fn success(n: u16) -> Self {
        Self(format!("{SUCCESS_MARKER}-{n}"))
    }

    /// Failure code `F-<n>`.
    #[must_use]
    pub fn failure(n: u16) -> Self {
        Self(format!("F-{n}"))
    }

    /// Default success code used to seed chains.
    #[must_use]
    pub fn ok() -> Self {
        Self::success(1)
    }

    /// `F-400`: request content was rejected.
    #[must_use]
    pub fn invalid_request() -> Self {
        Self::failure(400)
    }

    /// `F-401`: no authenticated identity.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::failure(401)
    }

    /// `F-403`: the actor may not perform the action.
    #[must_use]
    pub fn forbidden() -> Self {
        Self::failure(403)
    }

    /// `F-404`: the referenced entity does not exist.
    #[must_use]
    pub fn not_found() -> Self {
        Self::failure(404)
    }

    /// `F-500`: unexpected internal state.
    #[must_use]
    pub fn internal() -> Self {
        Self::failure(500)
    }

    /// Category implied by the leading character.
    #[must_use]
    pub fn category(&self) -> ResultCategory {
        if self.0.starts_with(SUCCESS_MARKER) {
            ResultCategory::Success
        } else {
            ResultCategory::Failure
        }
    }

    /// Numeric suffix after the first `-`, if it parses.
    ///
    /// ```
    /// use blog::domain::ResultCode;
    ///
    /// assert_eq!(ResultCode::not_found().number(), Some(404));
    /// assert_eq!(ResultCode::new("F-Custom").expect("valid").number(), None);
    /// ```
    #[must_use]
    pub fn number(&self) -> Option<u16> {
        self.0
            .split_once('-')
            .and_then(|(_, suffix)| suffix.parse().ok())
    }
}

impl AsRef<str> for ResultCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ResultCode> for String {
    fn from(value: ResultCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for ResultCode {
    type Error = ResultCodeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResultCode {
    type Error = ResultCodeValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
