//! Chained outcome pipeline.
//!
//! An [`Outcome`] is either a [`Success`] carrying a code, a message and an
//! optional payload, or a [`Failure`] carrying only a code and a message.
//! Handlers seed a chain with [`Outcome::produce_empty`], attach dependent
//! steps with [`Outcome::then`], and project the final payload with
//! [`Outcome::map_to_response`]. The first failing step ends the chain:
//! later steps are never invoked and the failure reaches the caller
//! unchanged.
//!
//! ```
//! use blog::domain::{Outcome, ResultCode};
//!
//! let outcome = Outcome::<u32>::produce_empty()
//!     .then(|_| Outcome::success(ResultCode::ok(), "found", 5))
//!     .then_payload(|n| {
//!         if n > 3 {
//!             Outcome::fail(ResultCode::forbidden(), "too big")
//!         } else {
//!             Outcome::success(ResultCode::ok(), "fine", n)
//!         }
//!     })
//!     .then(|_| -> Outcome<u32> { unreachable!("skipped after failure") });
//!
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.code(), &ResultCode::forbidden());
//! assert_eq!(outcome.message(), "too big");
//! ```

use tracing::{error, warn};

use super::result_code::{ResultCategory, ResultCode};

/// Message attached to [`Outcome::produce_empty`].
pub const EMPTY_SUCCESS_MESSAGE: &str = "Success";

/// Errors raised by the rejecting constructor [`Outcome::try_of`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// A failure-category code was supplied together with a payload.
    #[error("failure code {code} must not carry a payload")]
    PayloadOnFailure { code: ResultCode },
}

/// Successful step result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<T> {
    code: ResultCode,
    message: String,
    payload: Option<T>,
}

impl<T> Success<T> {
    /// Build a success value.
    #[must_use]
    pub fn new(code: ResultCode, message: impl Into<String>, payload: Option<T>) -> Self {
        Self {
            code,
            message: message.into(),
            payload,
        }
    }

    /// Status code of this success.
    #[must_use]
    pub const fn code(&self) -> &ResultCode {
        &self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Borrow the payload, if the producing step returned one.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Take the payload, discarding code and message.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Split into code, message and payload.
    #[must_use]
    pub fn into_parts(self) -> (ResultCode, String, Option<T>) {
        (self.code, self.message, self.payload)
    }
}

/// Failed step result. There is no payload slot, so a failure can be
/// re-targeted at any payload type without conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct Failure {
    code: ResultCode,
    message: String,
}

impl Failure {
    /// Build a failure value.
    #[must_use]
    pub fn new(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// `F-400` failure.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ResultCode::invalid_request(), message)
    }

    /// `F-401` failure.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ResultCode::unauthorized(), message)
    }

    /// `F-403` failure.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ResultCode::forbidden(), message)
    }

    /// `F-404` failure.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ResultCode::not_found(), message)
    }

    /// `F-500` failure.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ResultCode::internal(), message)
    }

    /// Status code of this failure.
    #[must_use]
    pub const fn code(&self) -> &ResultCode {
        &self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Either a [`Success`] or a [`Failure`].
///
/// ## Invariants
/// - A failure never carries a payload.
/// - Once a chain holds a failure, [`Outcome::then`],
///   [`Outcome::then_payload`] and [`Outcome::map_to_response`] pass it
///   through without invoking their closures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome must be inspected or rendered"]
pub enum Outcome<T> {
    /// The chain is still on the success track.
    Success(Success<T>),
    /// A step failed; the rest of the chain is skipped.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Classify by the code's category.
    ///
    /// Success-category codes produce a success carrying `payload`. Any other
    /// code produces a failure; a payload supplied alongside a failure code is
    /// dropped and logged. Use [`Outcome::try_of`] to reject that case instead.
    ///
    /// ```
    /// use blog::domain::{Outcome, ResultCode};
    ///
    /// let ok = Outcome::of(ResultCode::ok(), "done", Some(7));
    /// assert_eq!(ok.payload(), Some(&7));
    ///
    /// let failed = Outcome::of(ResultCode::not_found(), "missing", Some(7));
    /// assert!(failed.is_failure());
    /// assert_eq!(failed.payload(), None);
    /// ```
    pub fn of(code: ResultCode, message: impl Into<String>, payload: Option<T>) -> Self {
        match code.category() {
            ResultCategory::Success => Self::Success(Success::new(code, message, payload)),
            ResultCategory::Failure => {
                if payload.is_some() {
                    warn!(code = %code, "dropping payload supplied with a failure code");
                }
                Self::Failure(Failure::new(code, message))
            }
        }
    }

    /// Classify by the code's category, rejecting a failure code paired with
    /// a payload.
    pub fn try_of(
        code: ResultCode,
        message: impl Into<String>,
        payload: Option<T>,
    ) -> Result<Self, OutcomeError> {
        if code.category() == ResultCategory::Failure && payload.is_some() {
            return Err(OutcomeError::PayloadOnFailure { code });
        }
        Ok(Self::of(code, message, payload))
    }

    /// Seed value for a chain: a payload-less `S-1` success.
    pub fn produce_empty() -> Self {
        Self::Success(Success::new(ResultCode::ok(), EMPTY_SUCCESS_MESSAGE, None))
    }

    /// Success carrying `payload`.
    pub fn success(code: ResultCode, message: impl Into<String>, payload: T) -> Self {
        Self::Success(Success::new(code, message, Some(payload)))
    }

    /// Failure with the given code and message.
    pub fn fail(code: ResultCode, message: impl Into<String>) -> Self {
        Self::Failure(Failure::new(code, message))
    }

    /// Run `step` on the current success and return whatever it produces.
    ///
    /// On a failure the step is not invoked and the failure is returned as an
    /// `Outcome<U>`.
    pub fn then<U, F>(self, step: F) -> Outcome<U>
    where
        F: FnOnce(Success<T>) -> Outcome<U>,
    {
        match self {
            Self::Success(success) => step(success),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Like [`Outcome::then`], but hands the step the payload itself.
    ///
    /// A success without a payload cannot feed the step; it becomes an
    /// `F-500` failure rather than a panic.
    pub fn then_payload<U, F>(self, step: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.then(|success| {
            let code = success.code.clone();
            match success.into_payload() {
                Some(payload) => step(payload),
                None => {
                    error!(code = %code, "chain step requires a payload but none was produced");
                    Outcome::Failure(Failure::internal("missing payload"))
                }
            }
        })
    }

    /// Project the payload into a response shape, preserving code and message.
    ///
    /// A failure, or a success without a payload, passes through without
    /// invoking `projector`.
    pub fn map_to_response<R, F>(self, projector: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(Success {
                code,
                message,
                payload,
            }) => Outcome::Success(Success {
                code,
                message,
                payload: payload.map(projector),
            }),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Whether the chain is still on the success track.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether a step has failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Status code of the held value.
    #[must_use]
    pub const fn code(&self) -> &ResultCode {
        match self {
            Self::Success(success) => success.code(),
            Self::Failure(failure) => failure.code(),
        }
    }

    /// Message of the held value.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(success) => success.message(),
            Self::Failure(failure) => failure.message(),
        }
    }

    /// Borrow the payload; always `None` for a failure.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(success) => success.payload(),
            Self::Failure(_) => None,
        }
    }

    /// Take the payload; always `None` for a failure.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Success(success) => success.into_payload(),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a standard [`Result`] so `?` can be used at boundaries.
    pub fn into_result(self) -> Result<Success<T>, Failure> {
        match self {
            Self::Success(success) => Ok(success),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(value: Failure) -> Self {
        Self::Failure(value)
    }
}

impl<T> From<Success<T>> for Outcome<T> {
    fn from(value: Success<T>) -> Self {
        Self::Success(value)
    }
}

impl<T> From<Result<Success<T>, Failure>> for Outcome<T> {
    fn from(value: Result<Success<T>, Failure>) -> Self {
        match value {
            Ok(success) => Self::Success(success),
            Err(failure) => Self::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests;
