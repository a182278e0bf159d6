use crate::origin::OriginParseError;
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

/// Component grammar from RFC 3986, Appendix B. Every group is optional, so
/// the expression matches any input.
const COMPONENT_PATTERN: &str = r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#((?s:.*)))?$";

const SCHEME_GROUP: usize = 1;
const AUTHORITY_GROUP: usize = 2;
const PATH_GROUP: usize = 3;
const QUERY_GROUP: usize = 4;
const FRAGMENT_GROUP: usize = 5;

static COMPONENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(COMPONENT_PATTERN).expect("URI component pattern must compile"));

/// Borrowed view of the syntactic components of a URI reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    pub(crate) scheme: Option<&'a str>,
    pub(crate) authority: Option<&'a str>,
    pub(crate) path: &'a str,
    pub(crate) query: Option<&'a str>,
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    pub(crate) fn split(value: &'a str) -> Self {
        let mut caps = COMPONENTS.create_captures();
        COMPONENTS.captures(value, &mut caps);

        let group = |index: usize| caps.get_group(index).map(|span| &value[span.range()]);

        Self {
            scheme: group(SCHEME_GROUP),
            authority: group(AUTHORITY_GROUP),
            path: group(PATH_GROUP).unwrap_or(""),
            query: group(QUERY_GROUP),
            fragment: group(FRAGMENT_GROUP),
        }
    }

    /// Host and port of the authority, with any userinfo dropped.
    ///
    /// Returns `Ok(None)` when the reference has no authority at all.
    pub(crate) fn host_and_port(&self) -> Result<Option<(&'a str, Option<u16>)>, OriginParseError> {
        match self.authority {
            Some(authority) => split_authority(authority).map(Some),
            None => Ok(None),
        }
    }
}

fn split_authority(authority: &str) -> Result<(&str, Option<u16>), OriginParseError> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, rest)| rest);

    if host_port.starts_with('[') {
        let Some(end) = host_port.find(']') else {
            return Err(OriginParseError::InvalidHost);
        };
        let (host, rest) = host_port.split_at(end + 1);
        return match rest {
            "" => Ok((host, None)),
            _ => match rest.strip_prefix(':') {
                Some(port) => Ok((host, parse_port(port)?)),
                None => Err(OriginParseError::InvalidHost),
            },
        };
    }

    match host_port.split_once(':') {
        Some((_, port)) if port.contains(':') => Err(OriginParseError::InvalidHost),
        Some((host, port)) => Ok((host, parse_port(port)?)),
        None => Ok((host_port, None)),
    }
}

fn parse_port(port: &str) -> Result<Option<u16>, OriginParseError> {
    if port.is_empty() {
        return Ok(None);
    }

    if !port.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(OriginParseError::InvalidPort(port.to_owned()));
    }

    port.parse::<u16>()
        .map(Some)
        .map_err(|_| OriginParseError::InvalidPort(port.to_owned()))
}

#[cfg(test)]
#[path = "uri_test.rs"]
mod uri_test;
