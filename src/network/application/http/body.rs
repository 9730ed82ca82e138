//! Request bodies and how they are attached to a context.

use super::headers::ParamMap;
use super::step::{Failure, StepFailure};
use crate::network::RequestContext;
use alloc::string::String;
use alloc::vec::Vec;

/// A request body.
///
/// The platform accepts either an opaque byte buffer or a list of ASCII form
/// fields, never both on the same request.
///
/// ```rust
/// use ctrhttp::network::application::http::{Body, ParamMap, headers};
///
/// let raw: Body = b"\x00\x01\x02".into();
/// let text: Body = "plain text".into();
///
/// let mut params = ParamMap::new();
/// headers::insert(&mut params, "name", "value");
/// let form: Body = (&params).into();
/// # let _ = (raw, text, form);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    /// Raw bytes sent as-is.
    Raw(&'a [u8]),
    /// ASCII form fields.
    Form(&'a ParamMap),
}

impl<'a> From<&'a [u8]> for Body<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Body::Raw(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Body<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Body::Raw(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Body<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Body::Raw(bytes)
    }
}

impl<'a> From<&'a str> for Body<'a> {
    fn from(text: &'a str) -> Self {
        Body::Raw(text.as_bytes())
    }
}

impl<'a> From<&'a String> for Body<'a> {
    fn from(text: &'a String) -> Self {
        Body::Raw(text.as_bytes())
    }
}

impl<'a> From<&'a ParamMap> for Body<'a> {
    fn from(params: &'a ParamMap) -> Self {
        Body::Form(params)
    }
}

/// Attach `body` to a prepared context.
pub(crate) fn attach<C: RequestContext>(context: &mut C, body: &Body<'_>) -> Result<(), Failure> {
    match body {
        Body::Raw(bytes) => attach_raw(context, bytes),
        Body::Form(params) => attach_form(context, params),
    }
}

fn attach_raw<C: RequestContext>(context: &mut C, bytes: &[u8]) -> Result<(), Failure> {
    debug!("attaching {} byte raw body", bytes.len());
    let words = to_words(bytes);
    context
        .attach_raw_body(&words, bytes.len())
        .map_err(Failure::at(StepFailure::AttachRawBody))
}

fn attach_form<C: RequestContext>(context: &mut C, params: &ParamMap) -> Result<(), Failure> {
    debug!("attaching {} form fields", params.len());
    for (name, value) in params {
        context
            .attach_form_field(name, value)
            .map_err(Failure::at(StepFailure::AttachFormParam))?;
    }
    Ok(())
}

/// Pack `bytes` into native-endian words, zero padding the last one.
///
/// The platform reads raw bodies through a word pointer, so the body is
/// copied into word-aligned storage; the byte length passed alongside keeps
/// the padding out of the request.
pub(crate) fn to_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_ne_bytes(word)
        })
        .collect()
}
