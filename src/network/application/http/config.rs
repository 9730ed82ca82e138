//! Build-time defaults and runtime configuration for the HTTP client.

use crate::network::error::Error;
use heapless::String;
use serde::Deserialize;

/// Default size in bytes of the platform's POST/PUT body buffer (2 MiB).
pub const DEFAULT_POST_PUT_BUFFER_SIZE: usize = 2 * 1024 * 1024;

/// User agent sent with every request.
pub const USER_AGENT: &str = "ctrhttp/0.1.0";

/// Size in bytes of the buffer a single response header is read into.
///
/// Header values longer than this are truncated; see
/// [`Response::header`](super::Response::header).
pub const HEADER_BUFFER_SIZE: usize = 4 * 1024;

/// Size in bytes of each body download chunk.
pub const DOWNLOAD_BUFFER_SIZE: usize = 0x1000;

/// Maximum length of a configured user agent.
pub const MAX_USER_AGENT_LEN: usize = 128;

/// Client configuration.
///
/// Every field defaults to its build-time constant. A configuration can also
/// be read from JSON; absent fields keep their defaults:
///
/// ```rust
/// use ctrhttp::network::application::http::Config;
///
/// let json = r#"{"user_agent":"homebrew/2.0","download_chunk_size":512}"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.user_agent.as_str(), "homebrew/2.0");
/// assert_eq!(config.download_chunk_size, 512);
/// assert_eq!(config.header_buffer_size, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bytes the platform reserves for request bodies when initialized.
    pub post_buffer_size: usize,
    /// Value of the `User-Agent` header.
    pub user_agent: String<MAX_USER_AGENT_LEN>,
    /// Capacity of the response header read buffer.
    pub header_buffer_size: usize,
    /// Size of each body download chunk.
    pub download_chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        let mut user_agent = String::new();
        // USER_AGENT is shorter than MAX_USER_AGENT_LEN.
        let _ = user_agent.push_str(USER_AGENT);
        Self {
            post_buffer_size: DEFAULT_POST_PUT_BUFFER_SIZE,
            user_agent,
            header_buffer_size: HEADER_BUFFER_SIZE,
            download_chunk_size: DOWNLOAD_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON object and validate it.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let (config, _) =
            serde_json_core::from_str::<Config>(json).map_err(|_| Error::InvalidConfig)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes of zero and an empty user agent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.post_buffer_size == 0
            || self.header_buffer_size == 0
            || self.download_chunk_size == 0
            || self.user_agent.is_empty()
        {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }

    pub(crate) fn limits(&self) -> Limits {
        Limits {
            header_buffer_size: self.header_buffer_size.max(1),
            download_chunk_size: self.download_chunk_size.max(1),
        }
    }
}

/// Buffer sizes a response needs after the request is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Limits {
    pub(crate) header_buffer_size: usize,
    pub(crate) download_chunk_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Config::default().limits()
    }
}
