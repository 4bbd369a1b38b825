//! Driven port for member persistence.

use crate::domain::{Member, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by member repository adapters.
    pub enum MemberRepositoryError {
        /// The backing store could not be read or written.
        Storage { message: String } => "member storage failed: {message}",
        /// A member with the same username already exists.
        Duplicate { username: String } => "member {username} already exists",
    }
}

/// Port for registering and looking up members.
#[cfg_attr(test, mockall::automock)]
pub trait MemberRepository: Send + Sync {
    /// Register a member under a freshly assigned identifier.
    fn insert(
        &self,
        username: Username,
        password: String,
    ) -> Result<Member, MemberRepositoryError>;

    /// Fetch a member by login name.
    fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Member>, MemberRepositoryError>;
}
