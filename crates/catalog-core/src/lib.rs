//! catalog-core — media catalog feeds as trees of playable media.
//!
//! A feed is a JSON document of categories, each declaring base URLs and a
//! list of videos. Loading one yields a `MediaTree` whose leaves carry
//! `MediaDescriptor`s ready to hand to a receiver.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: Models (MediaTree arena, descriptors, tracks)
//! Layer 1: Decoder (feed JSON -> MediaTree, pure)
//! Layer 2: Effects (HTTP transport)
//! Layer 3: MediaList (one load in flight, listener notifications)
//! ```

pub mod decoder;
pub mod effects;
pub mod error;
pub mod keys;
pub mod media_list;
pub mod models;
pub mod urls;

pub use decoder::{decode_slice, decode_tree, decode_tree_for};
pub use effects::{HttpResponse, Transport};
pub use error::{DecodeError, InvalidItemReason, LoadError, TransportError};
pub use media_list::{MediaList, MediaListListener};
pub use models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Two categories shaped like a production feed. Only the first one with
    /// videos is ever decoded.
    fn sample_feed() -> serde_json::Value {
        json!({
            "categories": [{
                "name": "Movies",
                "hls": "https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/hls/",
                "dash": "https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/dash/",
                "mp4": "https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/mp4/",
                "images": "https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/images/",
                "tracks": "https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/tracks/",
                "videos": [
                    {
                        "subtitle": "By Blender Foundation",
                        "sources": [
                            {"type": "dash", "mime": "application/dash+xml", "url": "BigBuckBunny.mpd"},
                            {"type": "hls", "mime": "application/x-mpegurl", "url": "BigBuckBunny.m3u8"},
                            {"type": "mp4", "mime": "videos/mp4", "url": "BigBuckBunny.mp4"}
                        ],
                        "image-480x270": "480x270/BigBuckBunny.jpg",
                        "image-780x1200": "780x1200/BigBuckBunny-780x1200.jpg",
                        "title": "Big Buck Bunny",
                        "studio": "Blender Foundation",
                        "duration": 596,
                        "tracks": [{
                            "id": "1",
                            "type": "text",
                            "subtype": "captions",
                            "contentId": "bbb-en.vtt",
                            "name": "English",
                            "language": "en-US"
                        }]
                    },
                    {
                        "subtitle": "By Blender Foundation",
                        "sources": [
                            {"type": "hls", "mime": "application/x-mpegurl", "url": "ElephantsDream.m3u8"}
                        ],
                        "image-480x270": "480x270/ElephantsDream.jpg",
                        "image-780x1200": "780x1200/ElephantsDream-780x1200.jpg",
                        "title": "Elephant Dream",
                        "studio": "Blender Foundation",
                        "duration": 653.5,
                        "tracks": [
                            {"id": 1, "type": "text", "subtype": "subtitles", "contentId": "ed-en.vtt", "language": "en"},
                            {"id": 2, "type": "text", "subtype": "subtitles", "contentId": "https://other.example/ed-fr.vtt", "language": "fr"}
                        ]
                    }
                ]
            }, {
                "name": "Shorts",
                "hls": "http://shorts/",
                "images": "http://shorts/img/",
                "tracks": "http://shorts/trk/",
                "videos": [{
                    "title": "Never decoded",
                    "duration": 1,
                    "sources": [{"type": "hls", "mime": "application/x-mpegurl", "url": "x.m3u8"}]
                }]
            }]
        })
    }

    #[test]
    fn decodes_sample_feed() {
        let tree = decode_tree(&sample_feed()).unwrap();
        assert_eq!(tree.title(), Some("Movies"));

        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 2);

        let bbb = leaves[0].media().unwrap();
        assert_eq!(leaves[0].title(), Some("Big Buck Bunny"));
        assert_eq!(
            bbb.content_url,
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/hls/BigBuckBunny.m3u8"
        );
        assert_eq!(bbb.content_type, "application/x-mpegurl");
        assert_eq!(bbb.duration, 596.0);
        assert_eq!(bbb.metadata.studio.as_deref(), Some("Blender Foundation"));
        assert_eq!(
            bbb.metadata.poster_url.as_deref(),
            Some("https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/images/780x1200/BigBuckBunny-780x1200.jpg")
        );

        let tracks = bbb.text_tracks.as_ref().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, 1);
        assert_eq!(tracks[0].kind, TrackKind::Text);
        assert_eq!(tracks[0].subtype, TextTrackSubtype::Captions);
        assert_eq!(
            tracks[0].content_id.as_deref(),
            Some("https://commondatastorage.googleapis.com/gtv-videos-bucket/CastVideos/tracks/bbb-en.vtt")
        );

        let ed = leaves[1].media().unwrap();
        assert_eq!(ed.duration, 653.5);
        assert_eq!(
            ed.track(2).unwrap().content_id.as_deref(),
            Some("https://other.example/ed-fr.vtt")
        );
    }

    #[test]
    fn sample_feed_in_other_formats() {
        let tree = decode_tree_for(&sample_feed(), VideoFormat::Dash);
        // Elephant Dream has no dash rendition, so the whole decode fails.
        assert!(matches!(
            tree,
            Err(DecodeError::InvalidMediaItem { index: 1, .. })
        ));

        let mut feed = sample_feed();
        feed["categories"][0]["videos"]
            .as_array_mut()
            .unwrap()
            .truncate(1);
        let tree = decode_tree_for(&feed, VideoFormat::Mp4).unwrap();
        let media = tree.leaves()[0].media().unwrap();
        assert_eq!(media.content_type, "videos/mp4");
        assert!(media.content_url.ends_with("/mp4/BigBuckBunny.mp4"));
    }

    #[test]
    fn minimal_document_example() {
        let bytes = br#"{"categories":[{"name":"Movies","videos":[{"title":"A","duration":10,
            "sources":[{"type":"hls","mime":"application/x-mpegurl","url":"a.m3u8"}]}],
            "hls":"http://cdn/","images":"http://img/","tracks":"http://trk/"}]}"#;
        let tree = decode_slice(bytes).unwrap();
        assert_eq!(tree.children(tree.root()).count(), 1);

        let media = tree.leaves()[0].media().unwrap();
        assert_eq!(media.content_url, "http://cdn/a.m3u8");
        assert_eq!(media.content_type, "application/x-mpegurl");
        assert_eq!(media.duration, 10.0);
        assert!(media.text_tracks.is_none());
    }

    #[test]
    fn minimal_document_without_sources_fails() {
        let bytes = br#"{"categories":[{"name":"Movies","videos":[{"title":"A","duration":10}],
            "hls":"http://cdn/","images":"http://img/","tracks":"http://trk/"}]}"#;
        assert!(matches!(
            decode_slice(bytes),
            Err(DecodeError::InvalidMediaItem { .. })
        ));
    }

    #[test]
    fn tree_serializes_for_hosts() {
        let tree = decode_tree(&sample_feed()).unwrap();
        let value = serde_json::to_value(&tree).unwrap();

        assert_eq!(value["title"], "Movies");
        assert_eq!(value["nodes"][0]["children"], json!([1, 2]));
        assert_eq!(value["nodes"][1]["parent"], 0);
        assert_eq!(value["nodes"][1]["media"]["stream_type"], "buffered");
        assert_eq!(
            value["nodes"][1]["media"]["text_tracks"][0]["subtype"],
            "captions"
        );
        assert_eq!(value["nodes"][1]["image"]["width"], 480);
    }
}
