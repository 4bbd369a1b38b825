//! Member (article author) data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

/// Validation errors returned by member constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberValidationError {
    /// Username was blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Username exceeded [`USERNAME_MAX`] characters.
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    /// Username contained characters outside the allowed set.
    #[error("username may only contain letters, numbers, '_', '-' or '.'")]
    UsernameInvalidCharacters,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Stable numeric member identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login name identifying a member.
///
/// ## Invariants
/// - Trimmed, non-empty, at most [`USERNAME_MAX`] characters.
/// - Only ASCII letters, digits, `_`, `-` and `.`.
///
/// # Examples
/// ```
/// use blog::domain::Username;
///
/// let name = Username::new("  user1 ").expect("valid username");
/// assert_eq!(name.as_ref(), "user1");
/// assert!(Username::new("not allowed!").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a username, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, MemberValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MemberValidationError::EmptyUsername);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(MemberValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');
        if !trimmed.chars().all(allowed) {
            return Err(MemberValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = MemberValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered member able to author articles.
#[derive(Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    username: Username,
    password: Zeroizing<String>,
}

impl Member {
    /// Build a member; the password must not be empty.
    pub fn new(
        id: MemberId,
        username: Username,
        password: impl Into<String>,
    ) -> Result<Self, MemberValidationError> {
        let password = Zeroizing::new(password.into());
        if password.is_empty() {
            return Err(MemberValidationError::EmptyPassword);
        }
        Ok(Self {
            id,
            username,
            password,
        })
    }

    /// Member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Login name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Compare a candidate password with the stored one.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_str() == candidate
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
