//! Per-request state owned on behalf of the caller.

use heapless::{String, Vec};

use super::client::{Event, MAX_BODY_LEN, MAX_HEADERS_LEN, MAX_HOST_LEN, MAX_PATH_LEN};
use crate::net::error::Error;

/// Everything a single in-flight request owns: destination, payload and the
/// caller's callback.
///
/// The record is created once per request, owned exclusively by the driver
/// and dropped exactly once at the terminal transition. `headers` and `body`
/// are consume-on-use: they are taken the moment they are written to the
/// wire and never touched again.
pub(crate) struct Request<F> {
    pub(crate) host: String<MAX_HOST_LEN>,
    pub(crate) port: u16,
    pub(crate) secure: bool,
    pub(crate) path: String<MAX_PATH_LEN>,
    /// Raw header block, written verbatim after the standard headers.
    pub(crate) headers: Option<String<MAX_HEADERS_LEN>>,
    pub(crate) body: Option<Vec<u8, MAX_BODY_LEN>>,
    callback: F,
}

impl<F> Request<F>
where
    F: FnMut(Event<'_>),
{
    pub(crate) fn new(
        hostname: &str,
        port: u16,
        secure: bool,
        path: &str,
        body: Option<&[u8]>,
        headers: &str,
        callback: F,
    ) -> Result<Self, Error> {
        let body = match body {
            Some(bytes) => Some(Vec::from_slice(bytes).map_err(|_| Error::RequestTooLarge)?),
            None => None,
        };
        Ok(Self {
            host: String::try_from(hostname).map_err(|_| Error::RequestTooLarge)?,
            port,
            secure,
            path: String::try_from(path).map_err(|_| Error::RequestTooLarge)?,
            headers: Some(String::try_from(headers).map_err(|_| Error::RequestTooLarge)?),
            body,
            callback,
        })
    }

    /// Hand an event to the caller.
    pub(crate) fn notify(&mut self, event: Event<'_>) {
        (self.callback)(event);
    }
}
