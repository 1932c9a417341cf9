//! Plain-data view of a completed HTTP exchange.
//!
//! # Design
//! `Transport` reduces every round-trip to an `HttpResponse` before
//! classifying it, so classification can be exercised with canned values
//! and no network.

/// An HTTP response described as plain data.
///
/// The body is buffered in full and kept as raw bytes; decoding is left to
/// the XML parser, which honors the document's declared encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
