//! Side-stream tracks (captions, subtitles, chapters) attached to an item.

use serde::Serialize;

/// Content type of every text track in the feed.
pub const TEXT_TRACK_CONTENT_TYPE: &str = "text/vtt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Text,
    Video,
    #[default]
    Unknown,
}

impl TrackKind {
    /// Exact, case-sensitive match on the feed's lowercase tags.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("audio") => TrackKind::Audio,
            Some("text") => TrackKind::Text,
            Some("video") => TrackKind::Video,
            _ => TrackKind::Unknown,
        }
    }
}

/// Only meaningful when the track kind is `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTrackSubtype {
    Captions,
    Chapters,
    Descriptions,
    Metadata,
    Subtitles,
    #[default]
    Unknown,
}

impl TextTrackSubtype {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("captions") => TextTrackSubtype::Captions,
            Some("chapters") => TextTrackSubtype::Chapters,
            Some("descriptions") => TextTrackSubtype::Descriptions,
            Some("metadata") => TextTrackSubtype::Metadata,
            Some("subtitles") => TextTrackSubtype::Subtitles,
            _ => TextTrackSubtype::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextTrack {
    /// Unique within its media item only.
    pub id: i64,
    /// Resolved track URL.
    pub content_id: Option<String>,
    pub content_type: String,
    pub kind: TrackKind,
    pub subtype: TextTrackSubtype,
    pub name: Option<String>,
    pub language: Option<String>,
}
