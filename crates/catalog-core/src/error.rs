//! Load and decode errors.

use thiserror::Error;

/// Failure below the HTTP layer: DNS, connect, TLS, timeout, body read.
#[derive(Debug, Error)]
#[error("transport failure: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Why a single media item could not be turned into a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidItemReason {
    #[error("no source variant with a url for the active format")]
    MissingUrl,
    #[error("no mime type on the selected source")]
    MissingMimeType,
    #[error("duration missing or not a number")]
    MissingDuration,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("document has no \"categories\" array")]
    MalformedDocument,

    #[error("category is missing base url \"{field}\"")]
    MissingBaseUrl { field: &'static str },

    #[error("category base url \"{field}\" is not an absolute url: {source}")]
    InvalidBaseUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("media item {index} ({item}) is invalid: {reason}")]
    InvalidMediaItem {
        index: usize,
        item: String,
        reason: InvalidItemReason,
    },
}

/// Everything that can end a load without a tree.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("http status {0}")]
    HttpStatus(u16),

    #[error("empty response body")]
    EmptyResponse,

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn transport_error_keeps_cause() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.to_string(), "transport failure: connection refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_item_names_the_item() {
        let err = DecodeError::InvalidMediaItem {
            index: 3,
            item: "Big Buck Bunny".into(),
            reason: InvalidItemReason::MissingDuration,
        };
        assert_eq!(
            err.to_string(),
            "media item 3 (Big Buck Bunny) is invalid: duration missing or not a number"
        );
    }

    #[test]
    fn load_error_wraps_decode_error() {
        let err: LoadError = DecodeError::MalformedDocument.into();
        assert!(matches!(err, LoadError::Decode(DecodeError::MalformedDocument)));
    }
}
