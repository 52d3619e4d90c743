//! Feed key conventions.
//!
//! Field names as they appear in the category feed document. Grouped by the
//! object they live on.

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

pub const CATEGORIES: &str = "categories";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub const CATEGORY_NAME: &str = "name";
pub const VIDEOS: &str = "videos";
/// Base URL for thumbnails and posters.
pub const IMAGES_BASE: &str = "images";
/// Base URL for text tracks.
pub const TRACKS_BASE: &str = "tracks";

// ---------------------------------------------------------------------------
// Video item
// ---------------------------------------------------------------------------

pub const TITLE: &str = "title";
pub const SUBTITLE: &str = "subtitle";
pub const STUDIO: &str = "studio";
pub const DURATION: &str = "duration";
pub const THUMBNAIL: &str = "image-480x270";
pub const POSTER: &str = "image-780x1200";
pub const SOURCES: &str = "sources";
pub const TRACKS: &str = "tracks";

// ---------------------------------------------------------------------------
// Source variant
// ---------------------------------------------------------------------------

pub const SOURCE_TYPE: &str = "type";
pub const SOURCE_MIME: &str = "mime";
pub const SOURCE_URL: &str = "url";

// ---------------------------------------------------------------------------
// Text track
// ---------------------------------------------------------------------------

pub const TRACK_ID: &str = "id";
pub const TRACK_NAME: &str = "name";
pub const TRACK_TYPE: &str = "type";
pub const TRACK_SUBTYPE: &str = "subtype";
pub const TRACK_CONTENT_ID: &str = "contentId";
pub const TRACK_LANGUAGE: &str = "language";

// ---------------------------------------------------------------------------
// Image slots (nominal display size, width x height)
// ---------------------------------------------------------------------------

pub const THUMBNAIL_SIZE: (u32, u32) = (480, 720);
pub const POSTER_SIZE: (u32, u32) = (780, 1200);
