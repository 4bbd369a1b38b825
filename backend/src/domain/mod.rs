//! Domain primitives, services and ports.
//!
//! Purpose: keep the article use-cases and the outcome pipeline free of
//! transport and storage concerns. Inbound adapters chain service calls
//! through [`Outcome`]; outbound adapters implement the traits in [`ports`].
//!
//! Public surface:
//! - Outcome / Success / Failure: the chained result pipeline.
//! - ResultCode: opaque `S-`/`F-` status codes.
//! - Article / Member: aggregates with validated field types.
//! - ArticleService / MemberService: outcome producers.
//! - Error / ErrorCode: failures raised outside a chain.

pub mod article;
pub mod article_service;
pub mod auth;
pub mod error;
pub mod member;
pub mod member_service;
pub mod outcome;
pub mod ports;
pub mod result_code;
pub mod trace_id;

pub use self::article::{
    Article, ArticleDraft, ArticleId, ArticleValidationError, Content, SUBJECT_MAX, Subject,
};
pub use self::article_service::ArticleService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::member::{Member, MemberId, MemberValidationError, USERNAME_MAX, Username};
pub use self::member_service::MemberService;
pub use self::outcome::{EMPTY_SUCCESS_MESSAGE, Failure, Outcome, OutcomeError, Success};
pub use self::result_code::{ResultCategory, ResultCode, ResultCodeValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
