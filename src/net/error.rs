//! Common error types for client operations

/// A common error type for HTTP client operations.
///
/// This enum covers both the synchronous failures reported when a request is
/// being put together (no request is issued in that case) and the internal
/// classifications of connection-fatal conditions. Fatal conditions are never
/// surfaced to the caller directly; they are reported through the terminal
/// callback event after teardown. The type is designed to be simple and
/// portable for `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The URL scheme is neither `http` nor `https`.
    UnsupportedScheme,
    /// The URL carries a port that is not a positive integer.
    InvalidPort,
    /// A request field exceeds its fixed capacity.
    RequestTooLarge,
    /// The hostname could not be resolved.
    ResolveFailed,
    /// The response does not begin with a valid HTTP/1.x status line.
    MalformedStatusLine,
    /// An append would have grown the receive buffer past its ceiling.
    BufferOverflow,
    /// The transport reported a failure.
    TransportError,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::UnsupportedScheme => defmt::write!(f, "UnsupportedScheme"),
            Error::InvalidPort => defmt::write!(f, "InvalidPort"),
            Error::RequestTooLarge => defmt::write!(f, "RequestTooLarge"),
            Error::ResolveFailed => defmt::write!(f, "ResolveFailed"),
            Error::MalformedStatusLine => defmt::write!(f, "MalformedStatusLine"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            Error::TransportError => defmt::write!(f, "TransportError"),
        }
    }
}
