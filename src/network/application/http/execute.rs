//! Sending a prepared request.

use super::step::{Failure, StepFailure};
use crate::network::RequestContext;

/// Send the request and read its status code.
///
/// The body is not downloaded here; [`Response`](super::Response) pulls it
/// on first access.
pub(crate) fn execute<C: RequestContext>(context: &mut C) -> Result<u32, Failure> {
    context
        .begin_request()
        .map_err(Failure::at(StepFailure::BeginRequest))?;
    let status = context
        .status_code()
        .map_err(Failure::at(StepFailure::GetStatus))?;
    debug!("status {}", status);
    Ok(status)
}
