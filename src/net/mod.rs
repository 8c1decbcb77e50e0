//! A network abstraction layer for embedded HTTP clients
//!
//! This module defines the traits through which the client consumes the
//! platform's TCP/IP stack and DNS resolver. Both collaborators are
//! event-driven: operations begin here and complete later, when the platform
//! injects the corresponding event back into the
//! [`Client`](crate::http::client::Client) that started them. No trait method
//! is allowed to block.

#![deny(unsafe_code)]

/// Common error types for client operations
pub mod error;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Resolution, Resolver, Transport};
}

use core::net::IpAddr;

/// Outcome of submitting a hostname to a [`Resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The address was already known (cached entry, or the hostname was a
    /// literal address). The client proceeds to connect synchronously,
    /// without waiting for a resolver event.
    Ready(IpAddr),
    /// Resolution is in flight. The platform reports the outcome later via
    /// [`Client::resolved`](crate::http::client::Client::resolved).
    Pending,
}

/// An asynchronous, single-shot hostname resolver.
pub trait Resolver {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Begin resolving a hostname.
    ///
    /// Returns [`Resolution::Ready`] when the answer is available
    /// immediately, [`Resolution::Pending`] when a lookup was started. An
    /// error is treated by the client like a failed resolution.
    fn resolve(&mut self, hostname: &str) -> Result<Resolution, Self::Error>;
}

/// An event-driven TCP transport.
///
/// One instance backs at most one connection. Connection establishment,
/// inbound data, send completion and loss of the connection are all reported
/// by the platform through the corresponding
/// [`Client`](crate::http::client::Client) methods; the trait itself only
/// initiates operations.
pub trait Transport {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Begin opening a connection to `addr:port`.
    ///
    /// Completion is signaled by the platform calling
    /// [`Client::connected`](crate::http::client::Client::connected).
    fn connect(&mut self, addr: IpAddr, port: u16) -> Result<(), Self::Error>;
    /// Queue bytes for transmission.
    ///
    /// The platform signals the data having left the send buffer via
    /// [`Client::send_complete`](crate::http::client::Client::send_complete).
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
    /// Tear the connection down. Must be idempotent, and must tolerate being
    /// called when no connection was ever opened.
    fn close(&mut self);
}
