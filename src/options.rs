use crate::origin::OriginParseError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a rejected request is surfaced to the host framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub enum RejectionMode {
    /// Return [`InvalidCrossOriginRequest`](crate::InvalidCrossOriginRequest) as an error.
    RaiseError,
    /// Short-circuit with a `403 text/plain` response.
    #[default]
    RespondForbidden,
}

impl RejectionMode {
    pub const RAISE_ERROR: &'static str = "raise_error";
    pub const RESPOND_FORBIDDEN: &'static str = "respond_forbidden";

    pub fn as_str(self) -> &'static str {
        match self {
            RejectionMode::RaiseError => Self::RAISE_ERROR,
            RejectionMode::RespondForbidden => Self::RESPOND_FORBIDDEN,
        }
    }
}

impl fmt::Display for RejectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RejectionMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            Self::RAISE_ERROR => Ok(RejectionMode::RaiseError),
            Self::RESPOND_FORBIDDEN => Ok(RejectionMode::RespondForbidden),
            other => Err(ConfigError::InvalidMode(other.to_owned())),
        }
    }
}

impl TryFrom<String> for RejectionMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Operator-supplied options consumed once by [`OriginGuard::new`](crate::OriginGuard::new).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GuardOptions {
    /// Origins allowed through regardless of `Sec-Fetch-Site`.
    pub trusted_origins: Vec<String>,
    pub rejection_mode: RejectionMode,
}

impl GuardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trusted_origin(mut self, origin: impl Into<String>) -> Self {
        self.trusted_origins.push(origin.into());
        self
    }

    pub fn trusted_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_origins
            .extend(origins.into_iter().map(Into::into));
        self
    }

    pub fn rejection_mode(mut self, mode: RejectionMode) -> Self {
        self.rejection_mode = mode;
        self
    }
}

/// Configuration problems detected while building an [`OriginGuard`](crate::OriginGuard).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("trusted origin '{origin}' must use the http or https scheme")]
    InvalidScheme { origin: String },
    #[error("trusted origin '{origin}' has no host")]
    MissingHost { origin: String },
    #[error("trusted origin '{origin}' must not contain a path")]
    PathNotAllowed { origin: String },
    #[error("trusted origin '{origin}' must not contain a query")]
    QueryNotAllowed { origin: String },
    #[error("trusted origin '{origin}' must not contain a fragment")]
    FragmentNotAllowed { origin: String },
    #[error("trusted origin '{origin}' is malformed")]
    MalformedOrigin {
        origin: String,
        #[source]
        source: OriginParseError,
    },
    #[error(
        "rejection mode '{0}' is not recognized; expected 'raise_error' or 'respond_forbidden'"
    )]
    InvalidMode(String),
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
