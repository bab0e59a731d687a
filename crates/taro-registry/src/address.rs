//! Best-effort decomposition of registry addresses
//!
//! `zookeeper://127.0.0.1:2181` yields scheme `zookeeper` and port `2181`.
//! Nothing is ever rejected here: parts that cannot be extracted are simply
//! absent, and the caller stores the address verbatim either way.

use taro_common::PROTOCOL_SEPARATOR;
use tracing::debug;

/// Parts of an address that can feed field inference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressParts<'a> {
    /// Text before the first `://`, when it is not at the start
    pub scheme: Option<&'a str>,
    /// Numeric text after the last `:`
    pub port: Option<i32>,
}

impl<'a> AddressParts<'a> {
    /// Extract the scheme and port candidates of `address`.
    ///
    /// Without a scheme separator (or with one at position 0) neither part
    /// is derived. The port is taken after the *last* colon, so an address
    /// like `zookeeper://host` yields no port.
    pub fn parse(address: &'a str) -> Self {
        let Some(i) = address.find(PROTOCOL_SEPARATOR).filter(|&i| i > 0) else {
            debug!(address, "No scheme in registry address, skipping inference");
            return Self::default();
        };

        let port = address
            .rfind(':')
            .filter(|&i| i > 0)
            .and_then(|i| parse_port(&address[i + 1..]));
        if port.is_none() {
            debug!(address, "No numeric port in registry address");
        }

        Self {
            scheme: Some(&address[..i]),
            port,
        }
    }
}

/// Digits only, fitting an `i32`. Anything else yields `None`.
fn parse_port(text: &str) -> Option<i32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
