//! Event-driven HTTP client implementation and supporting types.

use core::fmt::Write as _;
use core::net::IpAddr;

use heapless::String;

use super::buffer::RecvBuffer;
use super::parser::Parser;
use super::request::Request;
use super::url::Url;
use crate::net::error::Error;
use crate::net::{Resolution, Resolver, Transport};

pub use super::buffer::RECV_CEILING;

/// Maximum hostname length accepted by [`Client::request`].
pub const MAX_HOST_LEN: usize = 128;
/// Maximum request path length.
pub const MAX_PATH_LEN: usize = 256;
/// Maximum length of the caller-supplied header block.
pub const MAX_HEADERS_LEN: usize = 512;
/// Maximum request body length.
pub const MAX_BODY_LEN: usize = 1024;

/// Serialized request line plus headers. Sized so that maximal host, path
/// and header block still fit alongside the fixed headers.
const MAX_REQUEST_HEAD: usize = 1024;

const USER_AGENT: &str = "libhttpc";

/// A parsed piece of the response, handed to the caller's callback.
///
/// For one request the caller observes at most one `Header`, then zero or
/// more `Body` fragments, then exactly one `Disconnect`; or, if resolution
/// fails, exactly one `DnsFailure` and nothing else. Fragments carry no alignment guarantee: a
/// payload spanning several deliveries arrives as several `Body` events, and
/// several chunks may arrive inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// The status line and header block are complete.
    Header {
        /// Numeric status code from the status line.
        status: u16,
        /// The raw header text, status line included, through the first CRLF
        /// of the terminator.
        headers: &'a str,
    },
    /// A fragment of the response body.
    Body {
        /// Raw payload bytes; may contain embedded NUL bytes, so the slice
        /// length is authoritative.
        fragment: &'a [u8],
    },
    /// Terminal: the connection is down and no further events follow. Emitted
    /// on normal end-of-response as well as on transport and parse failures;
    /// a caller that never saw a `Header` knows it got no response at all.
    Disconnect,
    /// Terminal: the hostname did not resolve. No connection was opened and
    /// no other event was or will be emitted.
    DnsFailure,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Event<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Event::Header { status, .. } => defmt::write!(f, "Header({})", status),
            Event::Body { fragment } => defmt::write!(f, "Body({} bytes)", fragment.len()),
            Event::Disconnect => defmt::write!(f, "Disconnect"),
            Event::DnsFailure => defmt::write!(f, "DnsFailure"),
        }
    }
}

/// Connection lifecycle. `Closed` is terminal and reachable from every other
/// state; entering it is the only place resources are released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Resolving,
    Connecting,
    SendingRequest,
    ReceivingResponse,
    Closed,
}

/// An event-driven HTTP/1.x client for a single request.
///
/// One `Client` handles exactly one request/response exchange and owns
/// everything involved in it: the transport, the request record, the receive
/// buffer and the parser state. The platform drives it by injecting
/// transport and resolver events ([`connected`](Self::connected),
/// [`data_received`](Self::data_received), ...); each injection runs to
/// completion and returns, so the caller's execution context never blocks.
/// Injections on a closed client are no-ops.
///
/// Independent requests run as independent `Client` values sharing nothing.
///
/// # Examples
///
/// ```rust,no_run
/// use libhttpc::http::client::{Client, Event};
/// use libhttpc::net::{Resolution, Resolver, Transport};
/// # use core::net::IpAddr;
/// # struct StackTransport;
/// # impl Transport for StackTransport {
/// #     type Error = ();
/// #     fn connect(&mut self, _addr: IpAddr, _port: u16) -> Result<(), Self::Error> { Ok(()) }
/// #     fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
/// #     fn close(&mut self) {}
/// # }
/// # struct StackResolver;
/// # impl Resolver for StackResolver {
/// #     type Error = ();
/// #     fn resolve(&mut self, _hostname: &str) -> Result<Resolution, Self::Error> {
/// #         Ok(Resolution::Pending)
/// #     }
/// # }
///
/// let transport = StackTransport;
/// let mut resolver = StackResolver;
///
/// let mut client = Client::get(transport, "http://example.com/data", "", |event| match event {
///     Event::Header { status, .. } => { /* response started */ }
///     Event::Body { fragment } => { /* stream the fragment */ }
///     Event::Disconnect | Event::DnsFailure => { /* request over */ }
/// })
/// .unwrap();
///
/// client.start(&mut resolver);
/// // The platform's network stack now feeds events back in, e.g.:
/// // client.resolved(Some(addr));
/// // client.connected();
/// // client.data_received(&delivery);
/// // client.disconnected();
/// ```
pub struct Client<T, F> {
    state: State,
    transport: T,
    request: Request<F>,
    buffer: RecvBuffer,
    parser: Parser,
}

impl<T, F> Client<T, F>
where
    T: Transport,
    F: FnMut(Event<'_>),
{
    /// Issue a GET request against a URL.
    ///
    /// Convenience wrapper over [`Client::request`]; the URL is decomposed
    /// with [`Url::parse`]. Fails synchronously (issuing nothing) on URL or
    /// capacity errors.
    pub fn get(transport: T, url: &str, headers: &str, callback: F) -> Result<Self, Error> {
        let url = Url::parse(url)?;
        Self::request(
            transport, url.host, url.port, url.secure, url.path, None, headers, callback,
        )
    }

    /// Issue a POST request against a URL, with a body.
    pub fn post(
        transport: T,
        url: &str,
        body: &[u8],
        headers: &str,
        callback: F,
    ) -> Result<Self, Error> {
        let url = Url::parse(url)?;
        Self::request(
            transport,
            url.host,
            url.port,
            url.secure,
            url.path,
            Some(body),
            headers,
            callback,
        )
    }

    /// Raw entry point: build a client for one request.
    ///
    /// The method is implied by the body: `POST` when one is supplied, `GET`
    /// otherwise. `headers` is a raw block of `Name: value\r\n` lines written
    /// to the wire verbatim; pass `""` for none. Nothing happens on the
    /// network until [`start`](Self::start) is called.
    pub fn request(
        transport: T,
        hostname: &str,
        port: u16,
        secure: bool,
        path: &str,
        body: Option<&[u8]>,
        headers: &str,
        callback: F,
    ) -> Result<Self, Error> {
        let request = Request::new(hostname, port, secure, path, body, headers, callback)?;
        Ok(Self {
            state: State::Resolving,
            transport,
            request,
            buffer: RecvBuffer::new(),
            parser: Parser::new(),
        })
    }

    /// Submit the hostname to the resolver and begin the exchange.
    ///
    /// A [`Resolution::Ready`] answer (cached entry or literal address) flows
    /// into the connect logic synchronously; [`Resolution::Pending`] suspends
    /// until the platform calls [`resolved`](Self::resolved). A resolver
    /// error is reported like a failed resolution, through the terminal
    /// [`Event::DnsFailure`].
    pub fn start<R: Resolver>(&mut self, resolver: &mut R) {
        if self.state != State::Resolving {
            return;
        }
        match resolver.resolve(self.request.host.as_str()) {
            Ok(Resolution::Ready(addr)) => self.resolved(Some(addr)),
            Ok(Resolution::Pending) => {}
            Err(_) => self.resolved(None),
        }
    }

    /// Inject the outcome of a pending resolution.
    ///
    /// `None` means the lookup failed: the single terminal
    /// [`Event::DnsFailure`] is emitted and everything is released without a
    /// connection ever being opened.
    pub fn resolved(&mut self, addr: Option<IpAddr>) {
        if self.state != State::Resolving {
            return;
        }
        match addr {
            None => self.finish(Event::DnsFailure),
            Some(addr) => {
                self.state = State::Connecting;
                if self.transport.connect(addr, self.request.port).is_err() {
                    self.finish(Event::Disconnect);
                }
            }
        }
    }

    /// Inject connection establishment: serialize and transmit the request
    /// head.
    ///
    /// The caller-supplied header block is released the moment it is
    /// written. Without a body the client moves straight to receiving;
    /// with one it waits for the next [`send_complete`](Self::send_complete)
    /// to transmit it.
    pub fn connected(&mut self) {
        if self.state != State::Connecting {
            return;
        }
        self.state = State::SendingRequest;
        if self.send_head().is_err() {
            self.finish(Event::Disconnect);
            return;
        }
        if self.request.body.is_none() {
            self.state = State::ReceivingResponse;
        }
    }

    /// Inject send-buffer availability: transmit the body, if one is still
    /// pending, and release it.
    pub fn send_complete(&mut self) {
        if self.state != State::SendingRequest {
            return;
        }
        match self.request.body.take() {
            Some(body) => {
                if self.transport.write(&body).is_err() {
                    self.finish(Event::Disconnect);
                    return;
                }
                self.state = State::ReceivingResponse;
            }
            None => self.state = State::ReceivingResponse,
        }
    }

    /// Inject an inbound data delivery.
    ///
    /// Bytes are appended to the receive buffer and parsed as far as they
    /// go; every complete element is dispatched to the callback before this
    /// method returns. Growing past the buffer ceiling or a malformed status
    /// line fails the connection: the transport is closed and the terminal
    /// [`Event::Disconnect`] is emitted.
    pub fn data_received(&mut self, data: &[u8]) {
        if !matches!(
            self.state,
            State::SendingRequest | State::ReceivingResponse
        ) {
            return;
        }
        if self.buffer.append(data).is_err() {
            self.finish(Event::Disconnect);
            return;
        }
        let Self {
            parser,
            buffer,
            request,
            ..
        } = self;
        if parser
            .advance(buffer, &mut |event| request.notify(event))
            .is_err()
        {
            self.finish(Event::Disconnect);
        }
    }

    /// Inject end-of-stream from the peer: normal teardown.
    pub fn disconnected(&mut self) {
        self.finish(Event::Disconnect);
    }

    /// Inject a transport failure. Routed through the same teardown as a
    /// normal disconnect; the caller is not told the difference.
    pub fn transport_error(&mut self) {
        self.finish(Event::Disconnect);
    }

    /// Whether the exchange is over and the client can be dropped.
    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// The security flag the request was issued with.
    ///
    /// The flag is accepted and carried end-to-end, but the core applies no
    /// encryption: it only selects port 443 by default for `https` URLs. A
    /// platform that needs TLS must inject a [`Transport`] that performs it.
    pub fn secure(&self) -> bool {
        self.request.secure
    }

    /// The single terminal transition. Reachable from every non-terminal
    /// state and guarded so it runs at most once: emits the terminal event,
    /// closes the transport (when one was opened) and releases everything
    /// the request owned.
    fn finish(&mut self, event: Event<'static>) {
        if self.state == State::Closed {
            return;
        }
        let opened = self.state != State::Resolving;
        self.state = State::Closed;
        if opened {
            self.transport.close();
        }
        self.request.notify(event);
        self.request.headers = None;
        self.request.body = None;
        self.buffer.clear();
    }

    /// Serialize the request line and headers and hand them to the transport
    /// in one write.
    fn send_head(&mut self) -> Result<(), Error> {
        let method = if self.request.body.is_some() {
            "POST"
        } else {
            "GET"
        };
        // Consume-on-use: the header block is gone once serialized.
        let headers = self.request.headers.take().unwrap_or_default();
        let mut head: String<MAX_REQUEST_HEAD> = String::new();
        write!(
            head,
            "{} {} HTTP/1.1\r\nHost: {}:{}\r\nConnection: close\r\nUser-Agent: {}\r\n{}",
            method, self.request.path, self.request.host, self.request.port, USER_AGENT, headers,
        )
        .map_err(|_| Error::RequestTooLarge)?;
        if let Some(body) = &self.request.body {
            write!(head, "Content-Length: {}\r\n", body.len())
                .map_err(|_| Error::RequestTooLarge)?;
        }
        write!(head, "\r\n").map_err(|_| Error::RequestTooLarge)?;
        self.transport
            .write(head.as_bytes())
            .map_err(|_| Error::TransportError)
    }
}

impl<T, F> core::fmt::Debug for Client<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Client")
            .field("state", &self.state)
            .field("host", &self.request.host.as_str())
            .field("port", &self.request.port)
            .finish_non_exhaustive()
    }
}
