//! Feed decoder — category document to `MediaTree`.
//!
//! Pure transform: no I/O, no shared state. The first category that carries a
//! `"videos"` array is decoded and scanning stops there; later categories are
//! ignored. Non-object entries in any array are skipped, but a malformed
//! object aborts the whole decode.

use serde_json::Value;
use url::Url;

use crate::error::{DecodeError, InvalidItemReason};
use crate::keys;
use crate::models::{
    ImageRef, JsonExt, MediaDescriptor, MediaMetadata, MediaTree, StreamType, TextTrack,
    TextTrackSubtype, TrackKind, TreeNode, VideoFormat, TEXT_TRACK_CONTENT_TYPE,
};
use crate::urls;

/// Decode raw feed bytes, selecting HLS sources.
pub fn decode_slice(bytes: &[u8]) -> Result<MediaTree, DecodeError> {
    let document: Value = serde_json::from_slice(bytes)?;
    decode_tree(&document)
}

/// Decode a parsed feed, selecting HLS sources.
pub fn decode_tree(document: &Value) -> Result<MediaTree, DecodeError> {
    decode_tree_for(document, VideoFormat::Hls)
}

/// Decode a parsed feed, selecting sources tagged with `format`.
pub fn decode_tree_for(document: &Value, format: VideoFormat) -> Result<MediaTree, DecodeError> {
    let mut tree = MediaTree::new();

    let categories = document
        .array_field(keys::CATEGORIES)
        .ok_or(DecodeError::MalformedDocument)?;

    for category in categories.iter().filter(|c| c.is_object()) {
        let Some(videos) = category.array_field(keys::VIDEOS) else {
            continue;
        };

        tree.set_title(category.str_field(keys::CATEGORY_NAME).map(String::from));
        let bases = BaseUrls::from_category(category, format)?;

        for (index, item) in videos.iter().enumerate() {
            if !item.is_object() {
                log::debug!("catalog: skipping non-object video entry {}", index);
                continue;
            }
            let media = decode_item(index, item, format, &bases)?;
            let title = media.metadata.title.clone();
            let thumbnail = media.metadata.images.first().cloned();
            tree.push_to_root(TreeNode::leaf(title, thumbnail, media));
        }
        break;
    }

    Ok(tree)
}

/// Base URLs declared on the selected category.
struct BaseUrls {
    media: Url,
    images: Url,
    tracks: Url,
}

impl BaseUrls {
    fn from_category(category: &Value, format: VideoFormat) -> Result<Self, DecodeError> {
        Ok(Self {
            media: base_url(category, format.key())?,
            images: base_url(category, keys::IMAGES_BASE)?,
            tracks: base_url(category, keys::TRACKS_BASE)?,
        })
    }
}

fn base_url(category: &Value, field: &'static str) -> Result<Url, DecodeError> {
    let raw = category
        .str_field(field)
        .ok_or(DecodeError::MissingBaseUrl { field })?;
    Url::parse(raw).map_err(|source| DecodeError::InvalidBaseUrl { field, source })
}

fn decode_item(
    index: usize,
    item: &Value,
    format: VideoFormat,
    bases: &BaseUrls,
) -> Result<MediaDescriptor, DecodeError> {
    let mut metadata = MediaMetadata {
        title: item.str_field(keys::TITLE).map(String::from),
        subtitle: item.str_field(keys::SUBTITLE).map(String::from),
        studio: item.str_field(keys::STUDIO).map(String::from),
        ..MediaMetadata::default()
    };

    let (mime, url) = match select_source(item, format) {
        Some(source) => (
            source.str_field(keys::SOURCE_MIME),
            source
                .str_field(keys::SOURCE_URL)
                .and_then(|u| urls::resolve(u, &bases.media)),
        ),
        None => (None, None),
    };

    let thumbnail = item
        .str_field(keys::THUMBNAIL)
        .and_then(|v| urls::resolve(v, &bases.images));
    let poster = item
        .str_field(keys::POSTER)
        .and_then(|v| urls::resolve(v, &bases.images));

    if let Some(url) = &thumbnail {
        let (w, h) = keys::THUMBNAIL_SIZE;
        metadata.images.push(ImageRef::new(url.clone(), w, h));
    }
    if let Some(url) = &poster {
        let (w, h) = keys::POSTER_SIZE;
        metadata.images.push(ImageRef::new(url.clone(), w, h));
        metadata.poster_url = Some(url.clone());
    }

    let tracks: Vec<TextTrack> = item
        .objects(keys::TRACKS)
        .into_iter()
        .map(|track| decode_track(track, &bases.tracks))
        .collect();
    let text_tracks = if tracks.is_empty() { None } else { Some(tracks) };

    let invalid = |reason: InvalidItemReason| DecodeError::InvalidMediaItem {
        index,
        item: metadata
            .title
            .clone()
            .unwrap_or_else(|| "untitled".to_string()),
        reason,
    };
    let url = url.ok_or_else(|| invalid(InvalidItemReason::MissingUrl))?;
    let mime = mime.ok_or_else(|| invalid(InvalidItemReason::MissingMimeType))?;
    let duration = item
        .f64_field(keys::DURATION)
        .ok_or_else(|| invalid(InvalidItemReason::MissingDuration))?;

    Ok(MediaDescriptor {
        content_id: url.clone(),
        content_url: url,
        content_type: mime.to_string(),
        stream_type: StreamType::Buffered,
        duration,
        metadata,
        text_tracks,
    })
}

/// First source whose `"type"` equals the format tag, in array order.
fn select_source(item: &Value, format: VideoFormat) -> Option<&Value> {
    item.objects(keys::SOURCES)
        .into_iter()
        .find(|source| source.str_field(keys::SOURCE_TYPE) == Some(format.key()))
}

fn decode_track(track: &Value, base: &Url) -> TextTrack {
    TextTrack {
        id: track.i64_or_str(keys::TRACK_ID).unwrap_or(0),
        content_id: track
            .str_field(keys::TRACK_CONTENT_ID)
            .and_then(|v| urls::resolve(v, base)),
        content_type: TEXT_TRACK_CONTENT_TYPE.to_string(),
        kind: TrackKind::from_tag(track.str_field(keys::TRACK_TYPE)),
        subtype: TextTrackSubtype::from_tag(track.str_field(keys::TRACK_SUBTYPE)),
        name: track.str_field(keys::TRACK_NAME).map(String::from),
        language: track.str_field(keys::TRACK_LANGUAGE).map(String::from),
    }
}
