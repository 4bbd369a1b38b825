//! Member lookups, registration and credential checks.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::ports::{LoginService, MemberRepository, MemberRepositoryError};
use crate::domain::{Error, Failure, LoginCredentials, Member, Outcome, ResultCode, Username};

/// Code reported when a username is already taken.
pub const DUPLICATE_MEMBER_CODE: u16 = 409;

/// Member service over a repository port.
#[derive(Clone)]
pub struct MemberService {
    members: Arc<dyn MemberRepository>,
}

impl MemberService {
    /// Create a service from its repository.
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    /// Resolve the member behind an authenticated username; `F-404` when the
    /// member no longer exists.
    pub fn find_by_username(&self, username: &Username) -> Outcome<Member> {
        match self.members.find_by_username(username) {
            Ok(Some(member)) => Outcome::success(
                ResultCode::ok(),
                format!("member {username} was found"),
                member,
            ),
            Ok(None) => Outcome::fail(
                ResultCode::not_found(),
                format!("member {username} does not exist"),
            ),
            Err(err) => {
                error!(error = %err, "member repository failed");
                Failure::internal("member storage failed").into()
            }
        }
    }

    /// Register a member; `F-409` when the username is taken.
    pub fn join(&self, username: Username, password: impl Into<String>) -> Outcome<Member> {
        let password = password.into();
        if password.is_empty() {
            return Outcome::fail(ResultCode::invalid_request(), "password must not be empty");
        }
        match self.members.insert(username, password) {
            Ok(member) => {
                info!(member = %member.username(), "member joined");
                Outcome::success(
                    ResultCode::ok(),
                    format!("member {} joined", member.username()),
                    member,
                )
            }
            Err(MemberRepositoryError::Duplicate { username }) => Outcome::fail(
                ResultCode::failure(DUPLICATE_MEMBER_CODE),
                format!("member {username} already exists"),
            ),
            Err(err) => {
                error!(error = %err, "member repository failed");
                Failure::internal("member storage failed").into()
            }
        }
    }
}

impl LoginService for MemberService {
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<Username, Error> {
        let member = self
            .members
            .find_by_username(credentials.username())
            .map_err(|err| {
                error!(error = %err, "member repository failed during login");
                Error::internal("member storage failed")
            })?;
        match member {
            Some(member) if member.password_matches(credentials.password()) => {
                Ok(member.username().clone())
            }
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}
