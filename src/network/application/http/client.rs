use super::body::{self, Body};
use super::config::Config;
use super::execute;
use super::headers::HeaderMap;
use super::prepare::{self, Setup, Target};
use super::response::Response;
use super::step::Failure;
use crate::network::error::Error;
use crate::network::{Method, ProxySelector, Transport};

/// Per-request options.
///
/// # Examples
///
/// ```rust
/// use ctrhttp::network::application::http::{HeaderMap, Options, headers};
///
/// let mut extra = HeaderMap::new();
/// headers::insert(&mut extra, "Accept", "text/plain");
///
/// let options = Options {
///     headers: Some(&extra),
///     keep_alive: false,
///     ..Options::default()
/// };
/// assert!(options.disable_tls_verification);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    /// Extra request headers, applied after the user agent.
    pub headers: Option<&'a HeaderMap>,
    /// Proxy slot to route the request through.
    pub proxy: ProxySelector,
    /// Skip TLS certificate verification. Defaults to `true`.
    pub disable_tls_verification: bool,
    /// Keep the connection alive and send `Connection: Keep-Alive`. Defaults to `true`.
    pub keep_alive: bool,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            headers: None,
            proxy: ProxySelector::SYSTEM_DEFAULT,
            disable_tls_verification: true,
            keep_alive: true,
        }
    }
}

/// An HTTP client over a platform [`Transport`].
///
/// Each request opens its own context, so responses are independent of each
/// other and of the client. Requests never fail with an `Err`; inspect
/// [`Response::has_failed`] before trusting the status or body.
///
/// # Examples
///
/// ```rust,ignore
/// let mut client = Client::new(transport);
/// client.initialize()?;
///
/// let mut response = client.get("http://example.com/", &Options::default());
/// if !response.has_failed() && response.status() == 200 {
///     let body = response.body_text();
/// }
///
/// client.terminate();
/// ```
#[derive(Debug)]
pub struct Client<T: Transport> {
    transport: T,
    config: Config,
}

impl<T: Transport> Client<T> {
    /// Create a client with the default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Config::default())
    }

    /// Create a client with `config`.
    pub fn with_config(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The underlying transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Start the platform service with the configured POST/PUT buffer size.
    ///
    /// Do not call this if the service was already started elsewhere.
    pub fn initialize(&mut self) -> Result<(), Error> {
        self.transport.initialize(self.config.post_buffer_size)
    }

    /// Stop the platform service.
    pub fn terminate(&mut self) {
        self.transport.terminate()
    }

    /// Perform a `GET` request.
    pub fn get(&mut self, url: &str, options: &Options<'_>) -> Response<T::Context> {
        self.request(Method::Get, url, None, options)
    }

    /// Perform a `POST` request with a raw or form body.
    pub fn post<'b>(
        &mut self,
        url: &str,
        body: impl Into<Body<'b>>,
        options: &Options<'_>,
    ) -> Response<T::Context> {
        self.request(Method::Post, url, Some(body.into()), options)
    }

    /// Perform a `PUT` request with a raw or form body.
    pub fn put<'b>(
        &mut self,
        url: &str,
        body: impl Into<Body<'b>>,
        options: &Options<'_>,
    ) -> Response<T::Context> {
        self.request(Method::Put, url, Some(body.into()), options)
    }

    /// Perform a `DELETE` request.
    pub fn delete(&mut self, url: &str, options: &Options<'_>) -> Response<T::Context> {
        self.request(Method::Delete, url, None, options)
    }

    /// Perform a request.
    ///
    /// The context is prepared, the body (if any) attached, and the request
    /// sent, in that order. A body is only attached for methods that carry
    /// one ([`Method::has_body`]); for `GET` and `DELETE` it is ignored.
    ///
    /// The first failure stops the sequence and is recorded on the returned
    /// response together with whatever context had been opened.
    pub fn request(
        &mut self,
        method: Method,
        url: &str,
        body: Option<Body<'_>>,
        options: &Options<'_>,
    ) -> Response<T::Context> {
        let mut response = Response::new(self.config.limits());
        if let Err(failure) = self.exchange(&mut response, method, url, body, options) {
            response.fail(failure);
        }
        response
    }

    fn exchange(
        &mut self,
        response: &mut Response<T::Context>,
        method: Method,
        url: &str,
        body: Option<Body<'_>>,
        options: &Options<'_>,
    ) -> Result<(), Failure> {
        let target = Target {
            method,
            url,
            proxy: options.proxy,
        };
        let setup = Setup {
            user_agent: &self.config.user_agent,
            headers: options.headers,
            disable_tls_verification: options.disable_tls_verification,
            keep_alive: options.keep_alive,
        };

        let context = response.adopt(prepare::open(&mut self.transport, &target)?);
        prepare::configure(context, &setup)?;
        match body {
            Some(body) if method.has_body() => body::attach(context, &body)?,
            Some(_) => debug!("ignoring body on {}", method),
            None => {}
        }
        let status = execute::execute(context)?;
        response.set_status(status);
        Ok(())
    }
}
