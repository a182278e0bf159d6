use crate::constants::scheme;
use crate::options::ConfigError;
use crate::origin::{MAX_ORIGIN_LENGTH, OriginParseError, OriginParts, normalize_origin};
use crate::uri::UriParts;
use indexmap::IndexSet;

/// Validate an operator-supplied trusted origin and return its canonical form.
///
/// Checks run in a fixed order: scheme, host, path, query, fragment. A root
/// path (`/`) is accepted and dropped from the canonical form.
pub fn validate_trusted_origin(value: &str) -> Result<String, ConfigError> {
    if value.len() > MAX_ORIGIN_LENGTH {
        return Err(ConfigError::MalformedOrigin {
            origin: value.to_owned(),
            source: OriginParseError::TooLong {
                length: value.len(),
                max: MAX_ORIGIN_LENGTH,
            },
        });
    }

    let uri = UriParts::split(value);

    let scheme = match uri.scheme {
        Some(name @ (scheme::HTTP | scheme::HTTPS)) => name,
        _ => {
            return Err(ConfigError::InvalidScheme {
                origin: value.to_owned(),
            });
        }
    };

    let (host, port) = match uri.host_and_port() {
        Ok(Some((host, port))) if !host.is_empty() => (host, port),
        Ok(_) => {
            return Err(ConfigError::MissingHost {
                origin: value.to_owned(),
            });
        }
        Err(source) => {
            return Err(ConfigError::MalformedOrigin {
                origin: value.to_owned(),
                source,
            });
        }
    };

    if !matches!(uri.path, "" | "/") {
        return Err(ConfigError::PathNotAllowed {
            origin: value.to_owned(),
        });
    }
    if uri.query.is_some() {
        return Err(ConfigError::QueryNotAllowed {
            origin: value.to_owned(),
        });
    }
    if uri.fragment.is_some() {
        return Err(ConfigError::FragmentNotAllowed {
            origin: value.to_owned(),
        });
    }

    Ok(OriginParts { scheme, host, port }.canonical())
}

/// Immutable set of canonical trusted origins, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedOrigins {
    origins: IndexSet<String>,
}

impl TrustedOrigins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set, failing on the first entry that does not validate.
    pub fn try_from_iter<I, S>(values: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = values
            .into_iter()
            .map(|value| validate_trusted_origin(value.as_ref()))
            .collect::<Result<IndexSet<_>, _>>()?;

        Ok(Self { origins })
    }

    /// Membership test for an already canonical origin string.
    pub fn contains(&self, canonical: &str) -> bool {
        self.origins.contains(canonical)
    }

    /// Membership test for a raw request `Origin` header value.
    pub fn contains_header_origin(&self, origin: &str) -> bool {
        !self.origins.is_empty() && self.contains(&normalize_origin(origin))
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a TrustedOrigins {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.origins.iter()
    }
}

#[cfg(test)]
#[path = "trusted_origins_test.rs"]
mod trusted_origins_test;
