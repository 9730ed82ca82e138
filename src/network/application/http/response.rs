//! The result of a request and lazy access to what the server sent.

use super::config::Limits;
use super::step::{Failure, StepFailure};
use crate::network::RequestContext;
use crate::network::error::Error;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::str::Utf8Error;
use serde::Deserialize;

/// A response header value read through [`Response::try_header`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderValue {
    /// The value, cut to the configured header buffer size.
    pub value: String,
    /// `true` when the server's value was longer than the buffer.
    pub truncated: bool,
}

/// The response to one request.
///
/// A response owns the request context it was produced with, including when a
/// step failed part way through preparation. The context is closed exactly
/// once: by [`release`](Response::release) or, failing that, when the
/// response is dropped.
///
/// Transport-level failures are reported by [`has_failed`](Response::has_failed)
/// and [`failed_step`](Response::failed_step). The HTTP status is not an
/// error at this level; a `404` from a completed exchange is a success.
///
/// The body is downloaded on first access to [`body`](Response::body) and
/// cached. The download blocks until the platform reports no more pending
/// data; there is no timeout at this layer.
pub struct Response<C: RequestContext> {
    status: u32,
    outcome: Result<(), Failure>,
    context: Option<C>,
    body: Option<Vec<u8>>,
    body_text: Option<String>,
    download_error: Option<Error>,
    limits: Limits,
}

impl<C: RequestContext> Response<C> {
    pub(crate) fn new(limits: Limits) -> Self {
        Self {
            status: 0,
            outcome: Ok(()),
            context: None,
            body: None,
            body_text: None,
            download_error: None,
            limits,
        }
    }

    /// Take ownership of an opened context and hand back a borrow of it.
    pub(crate) fn adopt(&mut self, context: C) -> &mut C {
        self.context.insert(context)
    }

    pub(crate) fn set_status(&mut self, status: u32) {
        self.status = status;
    }

    pub(crate) fn fail(&mut self, failure: Failure) {
        self.outcome = Err(failure);
    }

    /// HTTP status code, or `0` if the request never got that far.
    pub fn status(&self) -> u32 {
        self.status
    }

    /// Whether a transport or preparation step failed.
    pub fn has_failed(&self) -> bool {
        self.outcome.is_err()
    }

    /// The failing step and its error, if any.
    pub fn failure(&self) -> Option<&Failure> {
        self.outcome.as_ref().err()
    }

    /// The step that failed, if any.
    pub fn failed_step(&self) -> Option<StepFailure> {
        self.failure().map(|failure| failure.step)
    }

    /// The transport error of the failing step, if any.
    pub fn error(&self) -> Option<Error> {
        self.failure().map(|failure| failure.error)
    }

    /// The error that ended the body download early, if any.
    ///
    /// The bytes received before the error are still returned by
    /// [`body`](Response::body).
    pub fn download_error(&self) -> Option<Error> {
        self.download_error
    }

    /// Whether the context has been released (or was never opened).
    pub fn is_released(&self) -> bool {
        self.context.is_none()
    }

    /// The response body.
    ///
    /// The first call downloads the whole body chunk by chunk; later calls
    /// return the same bytes without touching the transport. After the
    /// context is released this returns an empty slice.
    pub fn body(&mut self) -> &[u8] {
        let Some(context) = self.context.as_mut() else {
            return &[];
        };
        if self.body.is_none() {
            let (bytes, error) = download(context, self.limits.download_chunk_size);
            self.download_error = error;
            self.body = Some(bytes);
        }
        self.body.as_deref().unwrap_or(&[])
    }

    /// The response body as text.
    ///
    /// Computed once from [`body`](Response::body). No charset is negotiated;
    /// the bytes are read as UTF-8, with invalid sequences replaced by
    /// `U+FFFD`. Valid input, including embedded NUL bytes, is kept byte for
    /// byte.
    pub fn body_text(&mut self) -> &str {
        if self.context.is_none() {
            return "";
        }
        if self.body_text.is_none() {
            let text = String::from_utf8_lossy(self.body()).into_owned();
            self.body_text = Some(text);
        }
        self.body_text.as_deref().unwrap_or("")
    }

    /// The response body as text, failing on invalid UTF-8.
    ///
    /// Unlike [`body_text`](Response::body_text) nothing is replaced, so a
    /// successful result is always the body byte for byte.
    pub fn body_str(&mut self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.body())
    }

    /// Deserialize the JSON body into `T`.
    pub fn json<'de, T: Deserialize<'de>>(&'de mut self) -> Result<T, Error> {
        let (value, _) =
            serde_json_core::from_slice::<T>(self.body()).map_err(|_| Error::ProtocolError)?;
        Ok(value)
    }

    /// Read a response header.
    ///
    /// Each call queries the transport again. Returns an empty string when the
    /// header is absent, the read fails, or the context is released. Values
    /// longer than the configured header buffer (4 KiB by default) are cut
    /// to that length without notice; use [`try_header`](Response::try_header)
    /// to detect it.
    pub fn header(&mut self, name: &str) -> String {
        self.try_header(name)
            .map(|header| header.value)
            .unwrap_or_default()
    }

    /// Read a response header, reporting errors and truncation.
    pub fn try_header(&mut self, name: &str) -> Result<HeaderValue, Error> {
        let context = self.context.as_mut().ok_or(Error::NotOpen)?;
        let mut buf = vec![0u8; self.limits.header_buffer_size];
        let length = context.response_header(name, &mut buf)?;
        let written = length.min(buf.len());
        Ok(HeaderValue {
            value: String::from_utf8_lossy(&buf[..written]).into_owned(),
            truncated: length > buf.len(),
        })
    }

    /// Close the request context.
    ///
    /// Safe to call any number of times; only the first call reaches the
    /// transport and reports its result.
    pub fn release(&mut self) -> Result<(), Error> {
        match self.context.take() {
            Some(context) => {
                debug!("releasing request context");
                context.close()
            }
            None => Ok(()),
        }
    }
}

impl<C: RequestContext> Drop for Response<C> {
    fn drop(&mut self) {
        if let Err(error) = self.release() {
            warn!("closing request context failed: {}", error);
        }
    }
}

impl<C: RequestContext> core::fmt::Debug for Response<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("outcome", &self.outcome)
            .field("released", &self.is_released())
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

/// Drain the body, appending chunks in order until nothing is pending.
fn download<C: RequestContext>(context: &mut C, chunk_size: usize) -> (Vec<u8>, Option<Error>) {
    let mut body = Vec::new();
    let mut chunk = vec![0u8; chunk_size];
    loop {
        match context.download_chunk(&mut chunk) {
            Ok(received) => {
                let written = received.written.min(chunk.len());
                body.extend_from_slice(&chunk[..written]);
                if !received.pending {
                    debug!("downloaded {} body bytes", body.len());
                    return (body, None);
                }
            }
            Err(error) => {
                warn!("body download failed after {} bytes: {}", body.len(), error);
                return (body, Some(error));
            }
        }
    }
}
