//! HTTP/1.x client protocol implementation.
//!
//! This module provides an event-driven HTTP client designed for embedded
//! systems and `no_std` environments. It focuses on predictable memory usage,
//! tolerance of arbitrary network fragmentation, and strict callback
//! ordering guarantees.
//!
//! # Features
//!
//! - GET and POST with caller-supplied headers
//! - Streaming response delivery: status/header block first, then body
//!   fragments as they arrive
//! - Chunked transfer-encoding decoding tolerant of any split point
//! - Hard ceiling on receive buffering
//! - One terminal notification per request, on every path
//!
//! # Usage
//!
//! The main entry points are [`client::Client::get`],
//! [`client::Client::post`] and the raw [`client::Client::request`], which
//! work with any pair of [`crate::net::Transport`] and
//! [`crate::net::Resolver`] collaborators. The platform's network stack
//! drives the exchange by injecting its events into the client; see the
//! [`client`] module for the full lifecycle.
//!
//! Every request closes its connection (`Connection: close`); there is no
//! keep-alive, redirect handling, authentication or caching.

#![deny(unsafe_code)]

/// HTTP client implementation and supporting types.
///
/// Contains the main [`Client`](client::Client) driver and the
/// [`Event`](client::Event) type delivered to the caller's callback.
pub mod client;

/// URL decomposition for the convenience entry points.
pub mod url;

pub(crate) mod buffer;
pub(crate) mod parser;
pub(crate) mod request;
