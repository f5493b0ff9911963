//! Splitting candidate URLs into protocol, host and route.
//!
//! This is deliberately not a general URL parser. It only answers the
//! questions admission needs: is there a `://`, is the protocol one we
//! accept, and which part of the string is the host.

use std::fmt;

use crate::domain::entities::Protocol;

/// Errors that can occur while splitting a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlParseError {
    #[error("{0:?} is not a valid url")]
    InvalidUrl(String),

    #[error("{0:?} is not a valid protocol (http, https, ftp)")]
    UnsupportedProtocol(String),
}

/// The three parts of a parsed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPieces {
    pub protocol: Protocol,
    pub host: String,
    /// Everything after the first `/` following the host, query included.
    /// Empty when the URL has no path.
    pub route: String,
}

impl fmt::Display for UrlPieces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.protocol, self.host)?;
        if !self.route.is_empty() {
            write!(f, "/{}", self.route)?;
        }
        Ok(())
    }
}

/// Splits `input` into protocol, host and route.
///
/// # Rules
///
/// 1. The input must be non-empty and contain `://`
/// 2. Everything before the first `://` is the protocol, which must be
///    `http`, `https` or `ftp` (case-sensitive)
/// 3. The remainder is split on its first `/` into host and route
///
/// # Errors
///
/// Returns [`UrlParseError::InvalidUrl`] for empty input or input without `://`.
/// Returns [`UrlParseError::UnsupportedProtocol`] for any other protocol.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_parser::parse_url;
///
/// let pieces = parse_url("https://www.apple.com/test/one").unwrap();
/// assert_eq!(pieces.host, "www.apple.com");
/// assert_eq!(pieces.route, "test/one");
/// ```
pub fn parse_url(input: &str) -> Result<UrlPieces, UrlParseError> {
    let Some((protocol, remainder)) = input.split_once("://") else {
        tracing::debug!(url = input, "URL has no protocol separator");
        return Err(UrlParseError::InvalidUrl(input.to_string()));
    };

    let protocol: Protocol = protocol.parse().map_err(|_| {
        tracing::debug!(url = input, protocol, "URL has unsupported protocol");
        UrlParseError::UnsupportedProtocol(protocol.to_string())
    })?;

    let (host, route) = remainder.split_once('/').unwrap_or((remainder, ""));

    Ok(UrlPieces {
        protocol,
        host: host.to_string(),
        route: route.to_string(),
    })
}

/// Returns only the protocol of `input`.
pub fn url_protocol(input: &str) -> Result<Protocol, UrlParseError> {
    parse_url(input).map(|p| p.protocol)
}

/// Returns only the host of `input`.
pub fn url_host(input: &str) -> Result<String, UrlParseError> {
    parse_url(input).map(|p| p.host)
}

/// Returns only the route of `input`.
pub fn url_route(input: &str) -> Result<String, UrlParseError> {
    parse_url(input).map(|p| p.route)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_URLS: &[(&str, Protocol, &str, &str)] = &[
        ("https://www.freecodecamp.org/", Protocol::Https, "www.freecodecamp.org", ""),
        ("https://www.freecodecamp.org/learn", Protocol::Https, "www.freecodecamp.org", "learn"),
        ("https://www.apple.com/test/one", Protocol::Https, "www.apple.com", "test/one"),
        ("https://www.amazon.com/test/one/two", Protocol::Https, "www.amazon.com", "test/one/two"),
        ("https://www.google.com/test?one=two", Protocol::Https, "www.google.com", "test?one=two"),
        ("http://www.grayfarms.org/news/", Protocol::Http, "www.grayfarms.org", "news/"),
        ("ftp://www.gentoo.org/", Protocol::Ftp, "www.gentoo.org", ""),
    ];

    #[test]
    fn test_parse_good_urls() {
        for (url, protocol, host, route) in GOOD_URLS {
            let pieces = parse_url(url).unwrap();
            assert_eq!(pieces.protocol, *protocol, "protocol of {url}");
            assert_eq!(pieces.host, *host, "host of {url}");
            assert_eq!(pieces.route, *route, "route of {url}");
        }
    }

    #[test]
    fn test_parse_without_path() {
        let pieces = parse_url("http://example.com").unwrap();
        assert_eq!(pieces.host, "example.com");
        assert_eq!(pieces.route, "");
    }

    #[test]
    fn test_display_rebuilds_structure() {
        for (url, ..) in GOOD_URLS {
            let pieces = parse_url(url).unwrap();
            let rebuilt = pieces.to_string();
            assert_eq!(parse_url(&rebuilt).unwrap(), pieces);
        }
        assert_eq!(
            parse_url("https://www.apple.com/test/one").unwrap().to_string(),
            "https://www.apple.com/test/one"
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let url = "https://www.netflix.com/test/one/two/three";
        assert_eq!(parse_url(url), parse_url(url));
    }

    #[test]
    fn test_missing_separator_is_invalid_url() {
        for input in ["", "test", "100", "https//www.netflix.com/", "https:/www.google.com/"] {
            assert!(
                matches!(parse_url(input), Err(UrlParseError::InvalidUrl(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_protocol() {
        for input in [
            "xyz://www.freecodecamp.org/",
            "abc://www.apple.com/",
            "123://www.amazon.com/",
            "HTTPS://www.google.com/",
        ] {
            assert!(
                matches!(parse_url(input), Err(UrlParseError::UnsupportedProtocol(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_splits_on_first_separator() {
        let pieces = parse_url("https://host.example/redirect?to=http://other/").unwrap();
        assert_eq!(pieces.host, "host.example");
        assert_eq!(pieces.route, "redirect?to=http://other/");
    }

    #[test]
    fn test_component_helpers() {
        let url = "https://www.apple.com/test/one";
        assert_eq!(url_protocol(url).unwrap(), Protocol::Https);
        assert_eq!(url_host(url).unwrap(), "www.apple.com");
        assert_eq!(url_route(url).unwrap(), "test/one");
        assert!(url_host("ftp:/broken").is_err());
    }
}
