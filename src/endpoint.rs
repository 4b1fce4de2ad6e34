//! Endpoint normalization for `Host`-style header values.

use url::Url;

use crate::error::{HttpUtilError, Result};

/// Parse a `Host`-style header value into a normalized `scheme://host:port`
/// URL with no path.
///
/// The scheme must start with `http`. A missing port is filled in from the
/// scheme default: 443 for `https`, 80 otherwise. The `url` crate elides a
/// port equal to the scheme default when serializing, so check
/// [`Url::port_or_known_default`] rather than the string form.
pub fn parse_endpoint(host_header: &str) -> Result<Url> {
    let parsed = Url::parse(host_header)?;
    let scheme = parsed.scheme();

    if !scheme.starts_with("http") {
        return Err(HttpUtilError::invalid_endpoint(
            host_header,
            format!("expected an http scheme, got `{}`", scheme),
        ));
    }

    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty() && *host != "/")
        .ok_or_else(|| HttpUtilError::invalid_endpoint(host_header, "missing host"))?;

    let port = parsed
        .port()
        .unwrap_or(if scheme == "https" { 443 } else { 80 });

    let endpoint = Url::parse(&format!("{}://{}:{}", scheme, host, port))?;
    Ok(endpoint)
}

/// Return a copy of `endpoint` with its host replaced by `host`.
/// All other components are left unchanged.
pub fn replace_host(endpoint: &Url, host: &str) -> Result<Url> {
    let mut replaced = endpoint.clone();
    replaced
        .set_host(Some(host))
        .map_err(|_| HttpUtilError::invalid_endpoint(host, "not a valid host"))?;
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_http() {
        let endpoint = parse_endpoint("http://example.com").unwrap();
        assert_eq!(endpoint.host_str(), Some("example.com"));
        assert_eq!(endpoint.port_or_known_default(), Some(80));
    }

    #[test]
    fn default_port_https() {
        let endpoint = parse_endpoint("https://example.com").unwrap();
        assert_eq!(endpoint.host_str(), Some("example.com"));
        assert_eq!(endpoint.port_or_known_default(), Some(443));
    }

    #[test]
    fn explicit_port_preserved() {
        let endpoint = parse_endpoint("http://example.com:8080").unwrap();
        assert_eq!(endpoint.port(), Some(8080));
    }

    #[test]
    fn path_is_dropped() {
        let endpoint = parse_endpoint("https://example.com/bucket/key").unwrap();
        assert_eq!(endpoint.path(), "/");
    }

    #[test]
    fn non_http_scheme_rejected() {
        let err = parse_endpoint("ftp://x").unwrap_err();
        assert!(matches!(err, HttpUtilError::InvalidEndpoint { .. }));
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_endpoint("not a url").is_err());
    }

    #[test]
    fn replace_host_keeps_other_components() {
        let original = Url::parse("http://old.com:80/path?q=1").unwrap();
        let replaced = replace_host(&original, "new.com").unwrap();
        assert_eq!(replaced.host_str(), Some("new.com"));
        assert_eq!(replaced.path(), "/path");
        assert_eq!(replaced.query(), Some("q=1"));
        assert_eq!(replaced.scheme(), "http");
    }

    #[test]
    fn replace_host_rejects_invalid_host() {
        let original = Url::parse("http://old.com/").unwrap();
        assert!(replace_host(&original, "not a host").is_err());
    }
}
