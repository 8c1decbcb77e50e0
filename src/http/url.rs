//! URL decomposition for the convenience entry points.

use crate::net::error::Error;

/// A URL of the form `scheme://host[:port][/path]`, decomposed into the
/// fields a request needs.
///
/// Only the `http` and `https` schemes are recognized. The fields borrow from
/// the input string; nothing is copied.
///
/// # Examples
///
/// ```rust
/// use libhttpc::http::url::Url;
///
/// let url = Url::parse("https://example.com:8443").unwrap();
/// assert!(url.secure);
/// assert_eq!(url.host, "example.com");
/// assert_eq!(url.port, 8443);
/// assert_eq!(url.path, "/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url<'a> {
    /// `true` for `https`. See the note on
    /// [`Client::secure`](crate::http::client::Client::secure): the flag is
    /// carried, not enforced.
    pub secure: bool,
    /// Hostname or literal address.
    pub host: &'a str,
    /// Explicit port, or the scheme default (80/443).
    pub port: u16,
    /// Absolute path, `/` when the URL has none.
    pub path: &'a str,
}

impl<'a> Url<'a> {
    /// Decompose a URL string.
    ///
    /// Fails with [`Error::UnsupportedScheme`] for any scheme other than
    /// `http`/`https`, and with [`Error::InvalidPort`] when a port substring
    /// is present but is not a positive integer.
    pub fn parse(url: &'a str) -> Result<Self, Error> {
        let (rest, secure, default_port) = if let Some(rest) = url.strip_prefix("http://") {
            (rest, false, 80)
        } else if let Some(rest) = url.strip_prefix("https://") {
            (rest, true, 443)
        } else {
            return Err(Error::UnsupportedScheme);
        };

        // The path begins at the first '/' after the scheme; absent means "/".
        let path_at = rest.find('/').unwrap_or(rest.len());
        let (authority, path) = rest.split_at(path_at);
        let path = if path.is_empty() { "/" } else { path };

        // A colon separates the port only when it sits before the path
        // boundary; a colon inside the path is not a port separator.
        let (host, port) = match authority.find(':') {
            Some(colon) => {
                let port = authority[colon + 1..]
                    .parse::<u16>()
                    .ok()
                    .filter(|&port| port > 0)
                    .ok_or(Error::InvalidPort)?;
                (&authority[..colon], port)
            }
            None => (authority, default_port),
        };

        Ok(Url {
            secure,
            host,
            port,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_with_path() {
        let url = Url::parse("http://host/path").unwrap();
        assert_eq!(
            url,
            Url {
                secure: false,
                host: "host",
                port: 80,
                path: "/path",
            }
        );
    }

    #[test]
    fn https_with_port_and_no_path() {
        let url = Url::parse("https://host:8443").unwrap();
        assert_eq!(
            url,
            Url {
                secure: true,
                host: "host",
                port: 8443,
                path: "/",
            }
        );
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(Url::parse("ftp://host"), Err(Error::UnsupportedScheme));
        assert_eq!(Url::parse("host/path"), Err(Error::UnsupportedScheme));
    }

    #[test]
    fn colon_in_path_is_not_a_port() {
        let url = Url::parse("http://host/a:b").unwrap();
        assert_eq!(url.host, "host");
        assert_eq!(url.port, 80);
        assert_eq!(url.path, "/a:b");
    }

    #[test]
    fn rejects_bad_ports() {
        assert_eq!(Url::parse("http://host:x/path"), Err(Error::InvalidPort));
        assert_eq!(Url::parse("http://host:0"), Err(Error::InvalidPort));
        assert_eq!(Url::parse("http://host:"), Err(Error::InvalidPort));
        assert_eq!(Url::parse("http://host:70000"), Err(Error::InvalidPort));
    }

    #[test]
    fn empty_path_normalizes() {
        assert_eq!(Url::parse("http://host").unwrap().path, "/");
        assert_eq!(Url::parse("http://host:81").unwrap().path, "/");
    }
}
