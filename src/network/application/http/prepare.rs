//! Context preparation: opening a context and configuring it for sending.

use super::headers::{self, HeaderMap};
use super::step::{Failure, Step, StepFailure, always, run_steps};
use crate::network::error::Error;
use crate::network::{Method, ProxySelector, RequestContext, Transport};

/// What to open a context for.
pub(crate) struct Target<'a> {
    pub(crate) method: Method,
    pub(crate) url: &'a str,
    pub(crate) proxy: ProxySelector,
}

/// How to configure an opened context.
pub(crate) struct Setup<'a> {
    pub(crate) user_agent: &'a str,
    pub(crate) headers: Option<&'a HeaderMap>,
    pub(crate) disable_tls_verification: bool,
    pub(crate) keep_alive: bool,
}

/// Open a context for `target`.
pub(crate) fn open<T: Transport>(
    transport: &mut T,
    target: &Target<'_>,
) -> Result<T::Context, Failure> {
    debug!("opening {} {}", target.method, target.url);
    transport
        .open_context(target.method, target.url, target.proxy)
        .map_err(Failure::at(StepFailure::OpenContext))
}

/// Run the configuration steps on an opened context.
///
/// On failure the context is left as far as it got; it stays with the caller
/// and still has to be closed.
pub(crate) fn configure<C: RequestContext>(
    context: &mut C,
    setup: &Setup<'_>,
) -> Result<(), Failure> {
    run_steps(context, setup, &steps())
}

fn steps<'a, C: RequestContext>() -> [Step<C, Setup<'a>>; 5] {
    [
        Step {
            name: StepFailure::DisableTlsVerify,
            applies: |setup: &Setup<'a>| setup.disable_tls_verification,
            run: disable_tls_verification::<C>,
        },
        Step {
            name: StepFailure::SetUserAgent,
            applies: always,
            run: set_user_agent::<C>,
        },
        Step {
            name: StepFailure::SetCustomHeader,
            applies: |setup: &Setup<'a>| setup.headers.is_some(),
            run: set_custom_headers::<C>,
        },
        Step {
            name: StepFailure::SetKeepAlive,
            applies: always,
            run: set_keep_alive::<C>,
        },
        Step {
            name: StepFailure::SetKeepAliveHeader,
            applies: |setup: &Setup<'a>| setup.keep_alive,
            run: set_keep_alive_header::<C>,
        },
    ]
}

fn disable_tls_verification<C: RequestContext>(
    context: &mut C,
    _: &Setup<'_>,
) -> Result<(), Error> {
    context.set_tls_verification(false)
}

fn set_user_agent<C: RequestContext>(context: &mut C, setup: &Setup<'_>) -> Result<(), Error> {
    context.add_header_field("User-Agent", setup.user_agent)
}

fn set_custom_headers<C: RequestContext>(context: &mut C, setup: &Setup<'_>) -> Result<(), Error> {
    match setup.headers {
        Some(map) => headers::inject(context, map),
        None => Ok(()),
    }
}

fn set_keep_alive<C: RequestContext>(context: &mut C, setup: &Setup<'_>) -> Result<(), Error> {
    context.set_keep_alive(setup.keep_alive)
}

fn set_keep_alive_header<C: RequestContext>(context: &mut C, _: &Setup<'_>) -> Result<(), Error> {
    context.add_header_field("Connection", "Keep-Alive")
}
