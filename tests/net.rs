use std::cell::RefCell;
use std::env;
use std::io::Read as _;
use std::net::{IpAddr, TcpStream, ToSocketAddrs as _};
use std::rc::Rc;

use dotenvy::dotenv;
use libhttpc::http::client::{Client, Event};
use libhttpc::http::url::Url;
use libhttpc::net::{Resolution, Resolver, Transport};

/// Transport over a blocking `TcpStream`. The test loop plays the role of
/// the platform's network stack, feeding completion events back into the
/// client after each blocking call returns.
#[derive(Clone, Default)]
struct NetTransport(Rc<RefCell<Option<TcpStream>>>);

impl Transport for NetTransport {
    type Error = std::io::Error;

    fn connect(&mut self, addr: IpAddr, port: u16) -> Result<(), Self::Error> {
        let stream = TcpStream::connect((addr, port))?;
        *self.0.borrow_mut() = Some(stream);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        use std::io::Write as _;
        match self.0.borrow_mut().as_mut() {
            Some(stream) => {
                stream.write_all(data)?;
                stream.flush()
            }
            None => Err(std::io::Error::other("not connected")),
        }
    }

    fn close(&mut self) {
        if let Some(stream) = self.0.borrow_mut().take() {
            let _ = stream.shutdown(std::net::Shutdown::Both);
        }
    }
}

struct NetResolver;

impl Resolver for NetResolver {
    type Error = std::io::Error;

    fn resolve(&mut self, hostname: &str) -> Result<Resolution, Self::Error> {
        let mut addrs = (hostname, 0u16).to_socket_addrs()?;
        match addrs.next() {
            Some(addr) => Ok(Resolution::Ready(addr.ip())),
            None => Err(std::io::Error::other("no address records")),
        }
    }
}

#[test]
fn test_http_get() {
    dotenv().ok();
    // Opt-in: point TEST_HTTP_URL at a live endpoint (e.g.
    // http://httpbin.org/get) to exercise the client against a real stack.
    let Ok(url) = env::var("TEST_HTTP_URL") else {
        return;
    };
    Url::parse(&url).expect("TEST_HTTP_URL must be an http(s) URL");

    let transport = NetTransport::default();
    let stream = Rc::clone(&transport.0);
    let status = Rc::new(RefCell::new(None));
    let done = Rc::new(RefCell::new(false));

    let sink = {
        let status = Rc::clone(&status);
        let done = Rc::clone(&done);
        move |event: Event<'_>| match event {
            Event::Header { status: code, .. } => *status.borrow_mut() = Some(code),
            Event::Body { .. } => {}
            Event::Disconnect | Event::DnsFailure => *done.borrow_mut() = true,
        }
    };

    let mut client = Client::get(transport, &url, "", sink).expect("failed to build request");
    client.start(&mut NetResolver);
    assert!(stream.borrow().is_some(), "connect failed");
    client.connected();
    client.send_complete();

    let mut buf = [0u8; 1024];
    while !client.is_closed() {
        let n = match stream.borrow_mut().as_mut() {
            Some(stream) => stream.read(&mut buf).unwrap_or(0),
            None => 0,
        };
        if n == 0 {
            client.disconnected();
        } else {
            client.data_received(&buf[..n]);
        }
    }

    assert_eq!(*status.borrow(), Some(200));
    assert!(*done.borrow());
}
