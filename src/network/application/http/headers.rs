//! Request header and form parameter maps.
//!
//! Both maps are heap-backed [`BTreeMap`]s with no bound on entry count or
//! value length. Iteration is in name order, so the order the platform sees
//! headers and form fields is deterministic.

use crate::network::RequestContext;
use crate::network::error::Error;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use base64ct::{Base64, Encoding};

/// Header name to value mapping applied to a request.
pub type HeaderMap = BTreeMap<String, String>;

/// Form field name to value mapping sent as an ASCII form body.
pub type ParamMap = HeaderMap;

/// Insert `name: value` into `map`, replacing an existing entry of that name.
///
/// ```rust
/// use ctrhttp::network::application::http::{HeaderMap, headers};
///
/// let mut map = HeaderMap::new();
/// headers::insert(&mut map, "Accept", "application/json");
/// assert_eq!(map.len(), 1);
/// ```
pub fn insert(map: &mut HeaderMap, name: &str, value: &str) {
    map.insert(name.to_string(), value.to_string());
}

/// Insert an `Authorization: Basic` header built from `user` and `password`.
pub fn basic_auth(map: &mut HeaderMap, user: &str, password: &str) {
    let credentials = format!("{user}:{password}");
    let encoded = Base64::encode_string(credentials.as_bytes());
    insert(map, "Authorization", &format!("Basic {encoded}"));
}

/// Insert an `Authorization: Bearer` header carrying `token`.
pub fn bearer_auth(map: &mut HeaderMap, token: &str) {
    insert(map, "Authorization", &format!("Bearer {token}"));
}

/// Add every entry of `headers` to `context`, stopping at the first failure.
pub(crate) fn inject<C: RequestContext>(
    context: &mut C,
    headers: &HeaderMap,
) -> Result<(), Error> {
    for (name, value) in headers {
        context.add_header_field(name, value)?;
    }
    Ok(())
}
