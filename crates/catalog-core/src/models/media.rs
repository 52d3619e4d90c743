//! Playable media descriptors and their classification types.

use serde::Serialize;

use super::track::TextTrack;

/// Encoded rendition family. Selects both the `"type"` tag matched in an
/// item's `"sources"` and the category key holding that rendition's base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    #[default]
    Hls,
    Dash,
    Mp4,
}

impl VideoFormat {
    /// Tag as it appears in the feed (`"hls"`, `"dash"`, `"mp4"`).
    pub fn key(self) -> &'static str {
        match self {
            VideoFormat::Hls => "hls",
            VideoFormat::Dash => "dash",
            VideoFormat::Mp4 => "mp4",
        }
    }
}

/// How the receiver should treat the stream. Feed items are always on-demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    #[default]
    Buffered,
}

/// Image reference with nominal display dimensions.
///
/// Width and height are layout hints fixed per image slot, not measured
/// from the image itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// Display metadata for a single media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaMetadata {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub studio: Option<String>,
    pub poster_url: Option<String>,
    /// Thumbnail first, then poster, when present.
    pub images: Vec<ImageRef>,
}

/// Everything a receiver needs to play one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaDescriptor {
    pub content_url: String,
    /// Same value as `content_url`; older receivers read this field instead.
    pub content_id: String,
    pub content_type: String,
    pub stream_type: StreamType,
    /// Seconds.
    pub duration: f64,
    pub metadata: MediaMetadata,
    pub text_tracks: Option<Vec<TextTrack>>,
}

impl MediaDescriptor {
    pub fn track(&self, id: i64) -> Option<&TextTrack> {
        self.text_tracks
            .as_deref()
            .and_then(|tracks| tracks.iter().find(|t| t.id == id))
    }
}
