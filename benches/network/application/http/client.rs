use criterion::{BatchSize, Criterion, Throughput};
use ctrhttp::network::application::http::{Client, Config, Options, ParamMap, headers};
use ctrhttp::network::error::Error;
use ctrhttp::network::{Chunk, Method, ProxySelector, RequestContext, Transport};
use std::hint::black_box;
use std::rc::Rc;

const BODY_SIZE: usize = 1024 * 1024;

/// In-memory service that serves one fixed body and accepts everything.
#[derive(Debug, Clone)]
struct MemoryTransport {
    body: Rc<Vec<u8>>,
}

struct MemoryContext {
    body: Rc<Vec<u8>>,
    offset: usize,
}

impl Transport for MemoryTransport {
    type Context = MemoryContext;

    fn initialize(&mut self, _post_buffer_size: usize) -> Result<(), Error> {
        Ok(())
    }

    fn terminate(&mut self) {}

    fn open_context(
        &mut self,
        _method: Method,
        _url: &str,
        _proxy: ProxySelector,
    ) -> Result<MemoryContext, Error> {
        Ok(MemoryContext {
            body: Rc::clone(&self.body),
            offset: 0,
        })
    }
}

impl RequestContext for MemoryContext {
    fn set_tls_verification(&mut self, _enabled: bool) -> Result<(), Error> {
        Ok(())
    }

    fn add_header_field(&mut self, _name: &str, _value: &str) -> Result<(), Error> {
        Ok(())
    }

    fn set_keep_alive(&mut self, _enabled: bool) -> Result<(), Error> {
        Ok(())
    }

    fn attach_raw_body(&mut self, words: &[u32], _length: usize) -> Result<(), Error> {
        black_box(words);
        Ok(())
    }

    fn attach_form_field(&mut self, name: &str, value: &str) -> Result<(), Error> {
        black_box((name, value));
        Ok(())
    }

    fn begin_request(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn status_code(&mut self) -> Result<u32, Error> {
        Ok(200)
    }

    fn download_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk, Error> {
        let remaining = &self.body[self.offset..];
        let written = remaining.len().min(buf.len());
        buf[..written].copy_from_slice(&remaining[..written]);
        self.offset += written;
        Ok(Chunk {
            written,
            pending: self.offset < self.body.len(),
        })
    }

    fn response_header(&mut self, _name: &str, _buf: &mut [u8]) -> Result<usize, Error> {
        Ok(0)
    }

    fn close(self) -> Result<(), Error> {
        Ok(())
    }
}

fn transport() -> MemoryTransport {
    MemoryTransport {
        body: Rc::new((0..BODY_SIZE).map(|i| i as u8).collect()),
    }
}

pub fn bench_body_download(c: &mut Criterion) {
    let mut group = c.benchmark_group("http_body_download");
    group.throughput(Throughput::Bytes(BODY_SIZE as u64));

    for chunk_size in [0x400, 0x1000, 0x4000] {
        let config = Config {
            download_chunk_size: chunk_size,
            ..Config::default()
        };
        let mut client = Client::with_config(transport(), config);
        group.bench_function(format!("chunk_{chunk_size}"), |b| {
            b.iter_batched(
                || client.get("http://bench.local/blob", &Options::default()),
                |mut response| black_box(response.body().len()),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

pub fn bench_raw_post(c: &mut Criterion) {
    let payload: Vec<u8> = (0..64 * 1024 + 3).map(|i| i as u8).collect();
    let mut client = Client::new(transport());

    let mut group = c.benchmark_group("http_raw_post");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("post_64k", |b| {
        b.iter(|| {
            let response = client.post("http://bench.local/upload", &payload, &Options::default());
            black_box(response.status())
        })
    });
    group.finish();
}

pub fn bench_form_post(c: &mut Criterion) {
    let mut params = ParamMap::new();
    for i in 0..16 {
        headers::insert(&mut params, &format!("field{i}"), "value");
    }
    let mut client = Client::new(transport());

    c.bench_function("http_form_post_16_fields", |b| {
        b.iter(|| {
            let response = client.post("http://bench.local/form", &params, &Options::default());
            black_box(response.status())
        })
    });
}
