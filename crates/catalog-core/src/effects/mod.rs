/// Raw outcome of a GET: status plus body bytes.
///
/// `body` is `None` when the transport did not read one (non-2xx responses)
/// or the server sent none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    pub fn status_only(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transports.
///
/// `MediaList` calls `get` from a background thread and blocks on it, so
/// implementations may do blocking I/O. Retries and timeouts belong here.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, crate::error::TransportError>;
}

#[cfg(feature = "http")]
pub mod http;
