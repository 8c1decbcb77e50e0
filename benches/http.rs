use std::cell::Cell;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};

use criterion::Criterion;
use rand::Rng as _;

use libhttpc::http::client::{Client, Event};
use libhttpc::net::{Resolution, Resolver, Transport};

struct NullTransport;

impl Transport for NullTransport {
    type Error = ();
    fn connect(&mut self, _addr: IpAddr, _port: u16) -> Result<(), Self::Error> {
        Ok(())
    }
    fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn close(&mut self) {}
}

struct FixedResolver;

impl Resolver for FixedResolver {
    type Error = ();
    fn resolve(&mut self, _hostname: &str) -> Result<Resolution, Self::Error> {
        Ok(Resolution::Ready(IpAddr::V4(Ipv4Addr::LOCALHOST)))
    }
}

/// Build a chunked response carrying `total` payload bytes in random-sized
/// chunks.
fn chunked_response(total: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut response =
        Vec::from(&b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n"[..]);
    let mut remaining = total;
    while remaining > 0 {
        let size = rng.gen_range(1..=remaining.min(256));
        response.extend_from_slice(format!("{size:x}\r\n").as_bytes());
        response.extend(std::iter::repeat(b'x').take(size));
        response.extend_from_slice(b"\r\n");
        remaining -= size;
    }
    response.extend_from_slice(b"0\r\n\r\n");
    response
}

/// Feed a prebuilt response through a fresh client in MTU-sized deliveries
/// and count the body bytes that come out.
fn run_exchange(response: &[u8]) -> usize {
    let total = Cell::new(0usize);
    let mut client = Client::get(NullTransport, "http://bench.local/", "", |event| {
        if let Event::Body { fragment } = event {
            total.set(total.get() + fragment.len());
        }
    })
    .unwrap();
    client.start(&mut FixedResolver);
    client.connected();
    client.send_complete();
    for piece in response.chunks(512) {
        client.data_received(piece);
    }
    client.disconnected();
    drop(client);
    total.get()
}

pub fn bench_chunked_decode(c: &mut Criterion) {
    let response = chunked_response(64 * 1024);
    c.bench_function("chunked_decode_64k", |b| {
        b.iter(|| black_box(run_exchange(&response)))
    });
}

pub fn bench_plain_relay(c: &mut Criterion) {
    let mut response = Vec::from(&b"HTTP/1.1 200 OK\r\n\r\n"[..]);
    response.extend(std::iter::repeat(b'x').take(64 * 1024));
    c.bench_function("plain_relay_64k", |b| {
        b.iter(|| black_box(run_exchange(&response)))
    });
}
