//! Driving port for login.
//!
//! The login handler checks credentials through this port without knowing
//! where members are stored.

use crate::domain::{Error, LoginCredentials, Username};

/// Credential check behind `POST /api/v1/login`.
#[cfg_attr(test, mockall::automock)]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated username.
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<Username, Error>;
}
