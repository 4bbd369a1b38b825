//! Process settings loaded via OrthoConfig.
//!
//! Values come from `BLOG_*` environment variables, an optional config file
//! and command-line flags, in increasing precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

use blog::domain::{MemberValidationError, Username};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while interpreting settings values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A seed entry was not of the form `username:password`.
    #[error("seed member '{entry}' must be written as username:password")]
    MalformedSeed { entry: String },
    /// A seed entry named an invalid username.
    #[error("seed member '{entry}' has an invalid username: {source}")]
    InvalidSeedUsername {
        entry: String,
        #[source]
        source: MemberValidationError,
    },
}

/// Member registered at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedMember {
    pub username: Username,
    pub password: Zeroizing<String>,
}

impl std::fmt::Debug for SeedMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedMember")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Comma-separated `username:password` pairs joined at startup.
    pub seed_members: Option<String>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Parse the seed member list; blank entries are skipped.
    pub fn seed_members(&self) -> Result<Vec<SeedMember>, SettingsError> {
        let Some(raw) = self.seed_members.as_deref() else {
            return Ok(Vec::new());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (name, password) =
                    entry
                        .split_once(':')
                        .ok_or_else(|| SettingsError::MalformedSeed {
                            entry: entry.to_owned(),
                        })?;
                if password.is_empty() {
                    return Err(SettingsError::MalformedSeed {
                        entry: entry.to_owned(),
                    });
                }
                let username =
                    Username::new(name).map_err(|source| SettingsError::InvalidSeedUsername {
                        entry: entry.to_owned(),
                        source,
                    })?;
                Ok(SeedMember {
                    username,
                    password: Zeroizing::new(password.to_owned()),
                })
            })
            .collect()
    }
}
