//! Article data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::Username;

/// Maximum allowed length for an article subject.
pub const SUBJECT_MAX: usize = 200;

/// Validation errors returned by article field constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArticleValidationError {
    /// Article identifiers start at 1.
    #[error("article id must be positive")]
    ZeroId,
    /// Subject was blank once trimmed.
    #[error("subject must not be blank")]
    BlankSubject,
    /// Subject exceeded [`SUBJECT_MAX`] characters.
    #[error("subject must be at most {max} characters")]
    SubjectTooLong { max: usize },
    /// Content was blank once trimmed.
    #[error("content must not be blank")]
    BlankContent,
}

/// Positive article identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ArticleId(u64);

impl ArticleId {
    /// Validate a raw identifier.
    pub fn new(raw: u64) -> Result<Self, ArticleValidationError> {
        if raw == 0 {
            return Err(ArticleValidationError::ZeroId);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl TryFrom<u64> for ArticleId {
    type Error = ArticleValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-blank article title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Validate a subject. Surrounding whitespace is trimmed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ArticleValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ArticleValidationError::BlankSubject);
        }
        if trimmed.chars().count() > SUBJECT_MAX {
            return Err(ArticleValidationError::SubjectTooLong { max: SUBJECT_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Subject> for String {
    fn from(value: Subject) -> Self {
        value.0
    }
}

impl TryFrom<String> for Subject {
    type Error = ArticleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-blank article body. Inner whitespace and line breaks are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Content(String);

impl Content {
    /// Validate article content.
    pub fn new(raw: impl Into<String>) -> Result<Self, ArticleValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ArticleValidationError::BlankContent);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for Content {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Content> for String {
    fn from(value: Content) -> Self {
        value.0
    }
}

impl TryFrom<String> for Content {
    type Error = ArticleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated article fields awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub author: Username,
    pub subject: Subject,
    pub content: Content,
    pub created_at: DateTime<Utc>,
}

/// Stored article.
///
/// Serialises as camelCase JSON:
/// `{"id":1,"author":"user1","subject":"..","content":"..","createdAt":"..","modifiedAt":".."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    id: ArticleId,
    author: Username,
    subject: Subject,
    content: Content,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Article {
    /// Materialise a draft under the identifier chosen by the repository.
    #[must_use]
    pub fn from_draft(id: ArticleId, draft: ArticleDraft) -> Self {
        let ArticleDraft {
            author,
            subject,
            content,
            created_at,
        } = draft;
        Self {
            id,
            author,
            subject,
            content,
            created_at,
            modified_at: created_at,
        }
    }

    /// Identifier assigned by the repository.
    #[must_use]
    pub const fn id(&self) -> ArticleId {
        self.id
    }

    /// Username of the member who wrote the article.
    #[must_use]
    pub const fn author(&self) -> &Username {
        &self.author
    }

    /// Current title.
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Current body.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// When the article was written.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the article was last changed; equals `created_at` until the first revision.
    #[must_use]
    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Whether `username` wrote this article.
    #[must_use]
    pub fn is_authored_by(&self, username: &Username) -> bool {
        &self.author == username
    }

    /// Replace the provided fields and stamp the modification time.
    pub fn revise(
        &mut self,
        subject: Option<Subject>,
        content: Option<Content>,
        at: DateTime<Utc>,
    ) {
        if let Some(subject) = subject {
            self.subject = subject;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.modified_at = at;
    }
}
