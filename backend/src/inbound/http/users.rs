//! Session API handlers.
//!
//! ```text
//! POST /api/v1/login {"username":"user1","password":"1234"}
//! POST /api/v1/logout
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{
    Error, LoginCredentials, LoginValidationError, MemberValidationError, Outcome, ResultCode,
    Username,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// `data` of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: Username,
}

/// Authenticate a member and establish a session.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<Outcome<LoginResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let username = state.login.authenticate(&credentials)?;
    session.persist_member(&username)?;
    info!(member = %username, "member logged in");
    Ok(Outcome::success(
        ResultCode::ok(),
        format!("{username} logged in"),
        LoginResponse { username },
    ))
}

/// End the current session; succeeds whether or not one existed.
#[post("/logout")]
pub async fn logout(session: SessionContext) -> Outcome<()> {
    session.clear();
    Outcome::produce_empty()
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let message = err.to_string();
    let (field, code) = match err {
        LoginValidationError::Username(MemberValidationError::EmptyUsername) => {
            ("username", "empty_username")
        }
        LoginValidationError::Username(MemberValidationError::UsernameTooLong { .. }) => {
            ("username", "username_too_long")
        }
        LoginValidationError::Username(_) => ("username", "invalid_username"),
        LoginValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}
