//! Query string assembly for web service URLs.
//!
//! Values are percent-encoded with the RFC 3986 unreserved set, so a space
//! becomes `%20` and a comma `%2C`. Absent values are still emitted as
//! `name=`; the service has always received them that way.

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Ordered query builder. The API key is always the first parameter.
#[derive(Debug)]
pub struct QueryUrl {
    url: String,
}

impl QueryUrl {
    pub fn new(base_url: &str, path: &str, zws_id: &str) -> Self {
        Self {
            url: format!("{base_url}/{path}?zws-id={}", encode(zws_id)),
        }
    }

    pub fn param<V: Display>(mut self, name: &str, value: Option<V>) -> Self {
        let value = value.map(|v| encode(&v.to_string())).unwrap_or_default();
        self.url.push('&');
        self.url.push_str(name);
        self.url.push('=');
        self.url.push_str(&value);
        self
    }

    pub fn finish(self) -> String {
        self.url
    }
}
