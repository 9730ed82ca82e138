//! # Application Layer Protocols
//!
//! Protocol clients built on top of the [`Transport`](crate::network::Transport)
//! and [`RequestContext`](crate::network::RequestContext) traits.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: request lifecycle over the platform HTTP context service
//!
//! ## Design Principles
//!
//! - **Transport Agnostic**: Work with any [`Transport`](crate::network::Transport) implementation
//! - **No-std Compatible**: Only `core` and `alloc` are required
//! - **Fail Fast**: The first failing platform call stops the sequence and is reported
//!
//! ## Usage Pattern
//!
//! 1. Implement or obtain a transport for your platform
//! 2. Wrap it with the protocol client
//! 3. Use protocol-specific methods for communication
//!
//! ```rust,ignore
//! let mut client = Client::new(platform_transport);
//! client.initialize()?;
//! let mut response = client.get("http://example.com/", &Options::default());
//! if !response.has_failed() {
//!     let text = response.body_text();
//! }
//! ```

/// HTTP client implementation.
///
/// Drives a platform request context through preparation, body attachment and
/// execution, and exposes the result as a lazily populated response.
pub mod http;
