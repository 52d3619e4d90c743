//! Catalog data models.
//!
//! The decoded feed is a `MediaTree`: an arena of nodes where leaves carry a
//! `MediaDescriptor`. Classification types (`TrackKind`, `VideoFormat`, ...)
//! are string enums that serialize to the same lowercase tags the feed uses.

pub mod json_ext;
pub mod media;
pub mod track;
pub mod tree;

pub use json_ext::JsonExt;
pub use media::{ImageRef, MediaDescriptor, MediaMetadata, StreamType, VideoFormat};
pub use track::{TextTrack, TextTrackSubtype, TrackKind, TEXT_TRACK_CONTENT_TYPE};
pub use tree::{MediaTree, NodeId, TreeNode};
