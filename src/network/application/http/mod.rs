//! HTTP over the platform request context service.
//!
//! The platform already handles connections, TLS and streaming. What this
//! module adds is the request lifecycle on top of it: the ordered steps a
//! context goes through before it can be sent, a uniform fail-fast policy
//! across those steps, and a [`Response`] that owns the context and pulls
//! the body and headers lazily.
//!
//! # Request lifecycle
//!
//! ```text
//! open ─▶ disable TLS verify? ─▶ User-Agent ─▶ caller headers? ─▶ keep-alive flag
//!      ─▶ Connection: Keep-Alive? ─▶ body (raw | form)? ─▶ begin ─▶ status
//! ```
//!
//! Every arrow is a platform call that can fail. The first failure stops the
//! sequence and is recorded on the response as a [`StepFailure`]; the
//! context opened so far stays with the response and is closed when the
//! response is released or dropped.
//!
//! # Features
//!
//! - `GET`, `POST`, `PUT` and `DELETE`
//! - Raw byte bodies and ASCII form bodies
//! - Fixed-capacity header maps, including a basic-auth helper
//! - Lazy, cached body download; per-call header reads
//! - Runtime [`Config`] with build-time defaults, loadable from JSON
//!
//! # Limitations
//!
//! There is no retry, redirect following, caching or timeout at this layer.
//! The body download blocks until the platform reports completion.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ctrhttp::network::application::http::{Client, Options, ParamMap, headers};
//!
//! let mut client = Client::new(platform_transport);
//! client.initialize()?;
//!
//! let mut params = ParamMap::new();
//! headers::insert(&mut params, "name", "value");
//! let mut response = client.post("https://example.com/form", &params, &Options::default());
//!
//! if let Some(step) = response.failed_step() {
//!     // report `step`
//! } else {
//!     let content_type = response.header("Content-Type");
//!     let body = response.body();
//! }
//! ```

/// Request bodies.
pub mod body;

/// The request orchestrators.
pub mod client;

/// Build-time defaults and runtime configuration.
pub mod config;

/// Header and form parameter maps.
pub mod headers;

/// Response handling.
pub mod response;

/// Request step names and failure records.
pub mod step;

mod execute;
mod prepare;


pub use body::Body;
pub use client::{Client, Options};
pub use config::Config;
pub use headers::{HeaderMap, ParamMap};
pub use response::{HeaderValue, Response};
pub use step::{Failure, StepFailure};
