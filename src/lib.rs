//! # ctrhttp - HTTP for handheld console homebrew
//!
//! A minimal HTTP client layered over the HTTP context service provided by a
//! handheld console's system software. It lets an application issue
//! `GET`/`POST`/`PUT`/`DELETE` requests, attach headers and bodies, and read
//! the status, headers and body of the response, without driving the
//! platform's opaque context handle and step-by-step call sequence by hand.
//!
//! ## Features
//!
//! - **Transport abstraction**: the platform service is reached through the
//!   [`network::Transport`] and [`network::RequestContext`] traits, so the
//!   client runs against native bindings or a test double alike
//! - **Fail-fast preparation**: the first failing platform call is reported
//!   as a named [`StepFailure`](network::application::http::StepFailure)
//! - **Scoped contexts**: every response owns its context and closes it
//!   exactly once
//! - **Lazy bodies**: the body is downloaded on first access and cached
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ctrhttp = "0.1.0"
//! ```
//!
//! ### Basic GET Example
//!
//! ```rust,no_run
//! use ctrhttp::network::application::http::{Client, Options};
//! # use ctrhttp::network::{Chunk, Method, ProxySelector, RequestContext, Transport};
//! # use ctrhttp::network::error::Error;
//! # struct PlatformContext;
//! # impl RequestContext for PlatformContext {
//! #     fn set_tls_verification(&mut self, _: bool) -> Result<(), Error> { Ok(()) }
//! #     fn add_header_field(&mut self, _: &str, _: &str) -> Result<(), Error> { Ok(()) }
//! #     fn set_keep_alive(&mut self, _: bool) -> Result<(), Error> { Ok(()) }
//! #     fn attach_raw_body(&mut self, _: &[u32], _: usize) -> Result<(), Error> { Ok(()) }
//! #     fn attach_form_field(&mut self, _: &str, _: &str) -> Result<(), Error> { Ok(()) }
//! #     fn begin_request(&mut self) -> Result<(), Error> { Ok(()) }
//! #     fn status_code(&mut self) -> Result<u32, Error> { Ok(200) }
//! #     fn download_chunk(&mut self, _: &mut [u8]) -> Result<Chunk, Error> {
//! #         Ok(Chunk { written: 0, pending: false })
//! #     }
//! #     fn response_header(&mut self, _: &str, _: &mut [u8]) -> Result<usize, Error> { Ok(0) }
//! #     fn close(self) -> Result<(), Error> { Ok(()) }
//! # }
//! # struct PlatformTransport;
//! # impl Transport for PlatformTransport {
//! #     type Context = PlatformContext;
//! #     fn initialize(&mut self, _: usize) -> Result<(), Error> { Ok(()) }
//! #     fn terminate(&mut self) {}
//! #     fn open_context(&mut self, _: Method, _: &str, _: ProxySelector) -> Result<PlatformContext, Error> {
//! #         Ok(PlatformContext)
//! #     }
//! # }
//!
//! let mut client = Client::new(PlatformTransport);
//! client.initialize().unwrap();
//!
//! let mut response = client.get("http://example.com/", &Options::default());
//! if !response.has_failed() {
//!     let status = response.status();
//!     let text = response.body_text();
//! }
//!
//! client.terminate();
//! ```
//!
//! ## Platform Support
//!
//! The crate needs `core` and `alloc`. It is intended for console homebrew
//! targets but builds anywhere Rust does.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

#[macro_use]
mod fmt;

/// Transport abstraction layer and the protocols built on it.
///
/// This module defines the traits the platform HTTP service is reached
/// through and the HTTP client that drives them.
pub mod network;
