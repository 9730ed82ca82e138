//! Scripted fake of the platform HTTP service for testing the client

#![allow(dead_code)]

use ctrhttp::network::error::Error;
use ctrhttp::network::{Chunk, Method, ProxySelector, RequestContext, Transport};
use std::cell::RefCell;
use std::rc::Rc;

/// One call made against the fake service, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Initialize(usize),
    Terminate,
    Open {
        method: Method,
        url: String,
        proxy: ProxySelector,
    },
    SetTlsVerification(bool),
    AddHeader(String, String),
    SetKeepAlive(bool),
    AttachRaw { words: Vec<u32>, length: usize },
    AttachForm(String, String),
    Begin,
    Status,
    Download,
    Header(String),
    Close,
}

/// How the fake service behaves.
pub struct Script {
    /// Calls matching this predicate fail with [`Script::error`].
    pub fail_when: Option<Box<dyn Fn(&Call) -> bool>>,
    pub error: Error,
    pub status: u32,
    pub body: Vec<u8>,
    /// Upper bound on bytes handed out per download call.
    pub chunk_limit: usize,
    /// Fail downloads once this many body bytes have been handed out.
    pub download_fails_after: Option<usize>,
    pub response_headers: Vec<(String, String)>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            fail_when: None,
            error: Error::Platform(-1),
            status: 200,
            body: Vec::new(),
            chunk_limit: usize::MAX,
            download_fails_after: None,
            response_headers: Vec::new(),
        }
    }
}

struct State {
    script: Script,
    calls: Vec<Call>,
}

impl State {
    fn record(&mut self, call: Call) -> Result<(), Error> {
        let failed = self
            .script
            .fail_when
            .as_ref()
            .is_some_and(|fail_when| fail_when(&call));
        self.calls.push(call);
        if failed { Err(self.script.error) } else { Ok(()) }
    }
}

/// Fake service; clones share one call log.
#[derive(Clone)]
pub struct MockTransport {
    state: Rc<RefCell<State>>,
}

impl MockTransport {
    pub fn new(script: Script) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                script,
                calls: Vec::new(),
            })),
        }
    }

    /// Fake service that succeeds every call and serves `body` with `status`.
    pub fn serving(status: u32, body: &[u8]) -> Self {
        Self::new(Script {
            status,
            body: body.to_vec(),
            ..Script::default()
        })
    }

    /// Fake service that fails every call matching `fail_when`.
    pub fn failing(fail_when: impl Fn(&Call) -> bool + 'static) -> Self {
        Self::new(Script {
            fail_when: Some(Box::new(fail_when)),
            ..Script::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.state.borrow().calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear(&self) {
        self.state.borrow_mut().calls.clear();
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.state.borrow().calls)
            .finish()
    }
}

impl Transport for MockTransport {
    type Context = MockContext;

    fn initialize(&mut self, post_buffer_size: usize) -> Result<(), Error> {
        self.state
            .borrow_mut()
            .record(Call::Initialize(post_buffer_size))
    }

    fn terminate(&mut self) {
        let _ = self.state.borrow_mut().record(Call::Terminate);
    }

    fn open_context(
        &mut self,
        method: Method,
        url: &str,
        proxy: ProxySelector,
    ) -> Result<MockContext, Error> {
        self.state.borrow_mut().record(Call::Open {
            method,
            url: url.to_string(),
            proxy,
        })?;
        Ok(MockContext {
            state: Rc::clone(&self.state),
            offset: 0,
        })
    }
}

/// Context handed out by [`MockTransport`].
pub struct MockContext {
    state: Rc<RefCell<State>>,
    offset: usize,
}

impl MockContext {
    fn record(&self, call: Call) -> Result<(), Error> {
        self.state.borrow_mut().record(call)
    }
}

impl RequestContext for MockContext {
    fn set_tls_verification(&mut self, enabled: bool) -> Result<(), Error> {
        self.record(Call::SetTlsVerification(enabled))
    }

    fn add_header_field(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.record(Call::AddHeader(name.to_string(), value.to_string()))
    }

    fn set_keep_alive(&mut self, enabled: bool) -> Result<(), Error> {
        self.record(Call::SetKeepAlive(enabled))
    }

    fn attach_raw_body(&mut self, words: &[u32], length: usize) -> Result<(), Error> {
        self.record(Call::AttachRaw {
            words: words.to_vec(),
            length,
        })
    }

    fn attach_form_field(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.record(Call::AttachForm(name.to_string(), value.to_string()))
    }

    fn begin_request(&mut self) -> Result<(), Error> {
        self.record(Call::Begin)
    }

    fn status_code(&mut self) -> Result<u32, Error> {
        self.record(Call::Status)?;
        Ok(self.state.borrow().script.status)
    }

    fn download_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk, Error> {
        self.record(Call::Download)?;
        let state = self.state.borrow();
        let script = &state.script;
        if script
            .download_fails_after
            .is_some_and(|limit| self.offset >= limit)
        {
            return Err(Error::ConnectionClosed);
        }
        let remaining = &script.body[self.offset..];
        let written = remaining.len().min(buf.len()).min(script.chunk_limit);
        buf[..written].copy_from_slice(&remaining[..written]);
        self.offset += written;
        Ok(Chunk {
            written,
            pending: self.offset < script.body.len(),
        })
    }

    fn response_header(&mut self, name: &str, buf: &mut [u8]) -> Result<usize, Error> {
        self.record(Call::Header(name.to_string()))?;
        let state = self.state.borrow();
        let (_, value) = state
            .script
            .response_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .ok_or(Error::ProtocolError)?;
        let written = value.len().min(buf.len());
        buf[..written].copy_from_slice(&value.as_bytes()[..written]);
        Ok(value.len())
    }

    fn close(self) -> Result<(), Error> {
        self.record(Call::Close)
    }
}
