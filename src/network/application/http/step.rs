//! Named request steps and the driver that runs them in order.

use crate::network::error::Error;
use core::fmt;

/// Every step of a request that can fail.
///
/// Steps are attempted in a fixed order and the first failure aborts the rest
/// of the request, so a failed [`Response`](super::Response) carries exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepFailure {
    /// Opening the request context.
    OpenContext,
    /// Disabling TLS certificate verification.
    DisableTlsVerify,
    /// Setting the keep-alive flag.
    SetKeepAlive,
    /// Adding the `Connection: Keep-Alive` header.
    SetKeepAliveHeader,
    /// Adding the `User-Agent` header.
    SetUserAgent,
    /// Adding one of the caller's headers.
    SetCustomHeader,
    /// Sending the request.
    BeginRequest,
    /// Reading the response status code.
    GetStatus,
    /// Attaching a raw body.
    AttachRawBody,
    /// Attaching a form field.
    AttachFormParam,
}

impl StepFailure {
    /// Stable name of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepFailure::OpenContext => "context-open",
            StepFailure::DisableTlsVerify => "disable-tls-verify",
            StepFailure::SetKeepAlive => "set-keep-alive",
            StepFailure::SetKeepAliveHeader => "set-keep-alive-header",
            StepFailure::SetUserAgent => "set-user-agent",
            StepFailure::SetCustomHeader => "set-custom-header",
            StepFailure::BeginRequest => "begin-request",
            StepFailure::GetStatus => "get-status",
            StepFailure::AttachRawBody => "attach-raw-body",
            StepFailure::AttachFormParam => "attach-form-param",
        }
    }
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StepFailure {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// The first failing step of a request and the transport error it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    /// Which step failed.
    pub step: StepFailure,
    /// What the transport reported.
    pub error: Error,
}

impl Failure {
    /// Create a failure record.
    pub fn new(step: StepFailure, error: Error) -> Self {
        Self { step, error }
    }

    /// Adapter for `map_err` that tags a transport error with `step`.
    pub(crate) fn at(step: StepFailure) -> impl FnOnce(Error) -> Failure {
        move |error| {
            warn!("step {} failed: {}", step, error);
            Failure::new(step, error)
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Failure {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} ({})", self.step, self.error)
    }
}

/// One entry of an ordered step list.
///
/// `applies` decides from the arguments whether the step runs at all; a
/// skipped step never touches the context.
pub(crate) struct Step<C, A> {
    pub(crate) name: StepFailure,
    pub(crate) applies: fn(&A) -> bool,
    pub(crate) run: fn(&mut C, &A) -> Result<(), Error>,
}

pub(crate) fn always<A>(_: &A) -> bool {
    true
}

/// Run `steps` in order against `context`, stopping at the first error.
pub(crate) fn run_steps<C, A>(
    context: &mut C,
    args: &A,
    steps: &[Step<C, A>],
) -> Result<(), Failure> {
    for step in steps {
        if !(step.applies)(args) {
            trace!("skipping step {}", step.name);
            continue;
        }
        (step.run)(context, args).map_err(Failure::at(step.name))?;
    }
    Ok(())
}
