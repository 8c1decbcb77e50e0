use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(benches, http::bench_chunked_decode, http::bench_plain_relay);
criterion_main!(benches);
