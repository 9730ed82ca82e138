//! A transport abstraction layer for the platform HTTP service
//!
//! Handheld console system software exposes HTTP as a procedural service:
//! a request context is opened for a method and URL, configured one call at a
//! time, sent, and then drained through a streaming download call. This
//! module models that service as two traits so the HTTP layer in
//! [`application::http`] can drive any implementation of it, native or fake.
//!
//! - [`Transport`] is the process-wide service: lifecycle and context opening.
//! - [`RequestContext`] is one opened context and every per-context operation.
//!
//! All calls are synchronous and block the calling thread until the platform
//! completes or fails them.

#![deny(unsafe_code)]

/// Common error types for transport operations
pub mod error;

/// Application layer protocol implementations
pub mod application;

use error::Error;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{RequestContext, Transport};
}

/// HTTP request methods supported by the platform service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method token as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// Which proxy slot the platform should route a context through.
///
/// The value is passed to the platform unchanged; `0` selects the system
/// default proxy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProxySelector(pub u32);

impl ProxySelector {
    /// The system default proxy configuration.
    pub const SYSTEM_DEFAULT: ProxySelector = ProxySelector(0);
}

/// The outcome of one streaming download call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Number of bytes written at the start of the caller's buffer.
    pub written: usize,
    /// `true` while the platform still has body data pending.
    pub pending: bool,
}

/// The process-wide platform HTTP service.
///
/// [`initialize`](Transport::initialize) and [`terminate`](Transport::terminate)
/// must bracket all other use exactly once per process. The HTTP layer never
/// calls them on its own.
pub trait Transport {
    /// The context handle type this service opens.
    type Context: RequestContext;

    /// Start the service, reserving `post_buffer_size` bytes for request bodies.
    fn initialize(&mut self, post_buffer_size: usize) -> Result<(), Error>;

    /// Stop the service.
    fn terminate(&mut self);

    /// Open a request context for `method` and `url`.
    fn open_context(
        &mut self,
        method: Method,
        url: &str,
        proxy: ProxySelector,
    ) -> Result<Self::Context, Error>;
}

/// One opened request context.
///
/// The handle is released by [`close`](RequestContext::close), which consumes
/// it, so a context can be closed at most once.
pub trait RequestContext {
    /// Enable or disable TLS certificate verification.
    fn set_tls_verification(&mut self, enabled: bool) -> Result<(), Error>;

    /// Register one request header field.
    fn add_header_field(&mut self, name: &str, value: &str) -> Result<(), Error>;

    /// Enable or disable connection keep-alive.
    fn set_keep_alive(&mut self, enabled: bool) -> Result<(), Error>;

    /// Attach a raw request body.
    ///
    /// `words` holds the body packed into native-endian `u32` words, zero
    /// padded to a word boundary; only the first `length` bytes are body.
    fn attach_raw_body(&mut self, words: &[u32], length: usize) -> Result<(), Error>;

    /// Attach one ASCII form field to the request body.
    fn attach_form_field(&mut self, name: &str, value: &str) -> Result<(), Error>;

    /// Send the request.
    fn begin_request(&mut self) -> Result<(), Error>;

    /// Read the response status code.
    fn status_code(&mut self) -> Result<u32, Error>;

    /// Download the next piece of the response body into `buf`.
    fn download_chunk(&mut self, buf: &mut [u8]) -> Result<Chunk, Error>;

    /// Read one named response header into `buf`.
    ///
    /// Returns the full length of the value. When it exceeds `buf.len()`
    /// only the first `buf.len()` bytes are written.
    fn response_header(&mut self, name: &str, buf: &mut [u8]) -> Result<usize, Error>;

    /// Release the context.
    fn close(self) -> Result<(), Error>;
}
