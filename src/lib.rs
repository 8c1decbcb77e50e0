//! # libhttpc - Event-driven HTTP client for constrained devices
//!
//! A non-blocking HTTP/1.x client for resource-constrained networked
//! devices. The client issues GET/POST requests over a raw TCP stack,
//! resolves hostnames, and streams the response back to the caller through a
//! callback, all without ever blocking the caller's execution context. It
//! runs in a small, fixed memory budget and needs no threads and no heap.
//!
//! ## Features
//!
//! - **Event-driven core**: every operation advances inside a short event
//!   injection from the platform's network stack and returns; suspension is
//!   just returning from the handler
//! - **Incremental parsing**: status line, header block, plain and chunked
//!   bodies are decoded no matter how the network fragments them
//! - **Bounded memory**: all request fields and the receive buffer live in
//!   fixed-capacity storage with hard ceilings
//! - **Strict callback contract**: at most one header event, body fragments
//!   in order, exactly one terminal notification on every path
//! - **Stack agnostic**: the TCP transport and DNS resolver are consumed
//!   through the [`net`] traits and can be backed by any platform
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libhttpc = "0.1.0"
//! ```
//!
//! ### Issuing a request
//!
//! ```rust,no_run
//! use libhttpc::http::client::{Client, Event};
//! use libhttpc::net::{Resolution, Resolver, Transport};
//! # use core::net::{IpAddr, Ipv4Addr};
//! # struct StackTransport;
//! # impl Transport for StackTransport {
//! #     type Error = ();
//! #     fn connect(&mut self, _addr: IpAddr, _port: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn close(&mut self) {}
//! # }
//! # struct StackResolver;
//! # impl Resolver for StackResolver {
//! #     type Error = ();
//! #     fn resolve(&mut self, _hostname: &str) -> Result<Resolution, Self::Error> {
//! #         Ok(Resolution::Ready(IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))))
//! #     }
//! # }
//!
//! let transport = StackTransport;
//! let mut resolver = StackResolver;
//!
//! let mut client = Client::get(transport, "http://example.com/data", "", |event| match event {
//!     Event::Header { status, .. } => { /* response started */ }
//!     Event::Body { fragment } => { /* stream the fragment */ }
//!     Event::Disconnect | Event::DnsFailure => { /* request over */ }
//! })
//! .unwrap();
//!
//! client.start(&mut resolver);
//! ```
//!
//! The platform's stack then feeds its events back into the client
//! ([`connected`](http::client::Client::connected),
//! [`data_received`](http::client::Client::data_received),
//! [`disconnected`](http::client::Client::disconnected), ...) until the
//! terminal event is delivered.
//!
//! ## Limitations
//!
//! - The `secure` flag is carried but the core applies no TLS; `https` URLs
//!   select port 443 and otherwise get whatever the injected transport
//!   provides. A TLS-capable [`net::Transport`] is the supported way to get
//!   encryption.
//! - Plain (non-chunked) bodies are relayed without `Content-Length`
//!   accounting; a truncated response is indistinguishable from a complete
//!   one until the disconnect event.
//! - No redirects, no authentication, no keep-alive, no caching, no
//!   compression negotiation.
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network abstraction layer: the transport and resolver collaborator
/// traits the client is driven through.
pub mod net;

/// The HTTP/1.x client: URL handling, request construction, response
/// parsing and the connection driver.
pub mod http;
