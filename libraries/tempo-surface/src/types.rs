//! Core types for surface rendering

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tempo_links::AssetLink;

/// Sentinel a controller reports for an unset position or duration
///
/// Normalized to 0 before timing is computed.
pub const TIME_UNSET: i64 = i64::MIN;

/// Title shown when no item is loaded or the title is unknown
pub const NOT_PLAYING_TITLE: &str = "Not playing";

/// Subtitle shown when no artist is known
pub const PLACEHOLDER_SUBTITLE: &str = "Tempo";

// Extras keys carried on a controller media item. The playback service
// writes these; the renderer only reads them.

/// Raw song id
pub const EXTRA_SONG_ID: &str = "id";
/// Raw album id
pub const EXTRA_ALBUM_ID: &str = "albumId";
/// Raw artist id
pub const EXTRA_ARTIST_ID: &str = "artistId";
/// Cover art identifier for the artwork fetcher
pub const EXTRA_COVER_ART_ID: &str = "coverArtId";
/// Pre-built song deep link
pub const EXTRA_LINK_SONG: &str = "assetLinkSong";
/// Pre-built album deep link
pub const EXTRA_LINK_ALBUM: &str = "assetLinkAlbum";
/// Pre-built artist deep link
pub const EXTRA_LINK_ARTIST: &str = "assetLinkArtist";
/// Fallback title when the item carries none
pub const EXTRA_TITLE: &str = "title";
/// Fallback artist when the item carries none
pub const EXTRA_ARTIST: &str = "artist";
/// Fallback album when the item carries none
pub const EXTRA_ALBUM: &str = "album";

/// Repeat mode reported by the player controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    #[default]
    Off,

    /// Loop the entire queue
    All,

    /// Loop the current track only
    One,
}

/// Current media item read off an acquired controller
///
/// `title`/`artist`/`album` come from the item metadata proper; the
/// extras map carries the raw ids, cover id, and optional pre-built deep
/// links the playback service attached, plus fallback display fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Item title, if set on the metadata
    pub title: Option<String>,

    /// Item artist, if set on the metadata
    pub artist: Option<String>,

    /// Item album, if set on the metadata
    pub album: Option<String>,

    /// Service-attached extras (see the `EXTRA_*` keys)
    pub extras: HashMap<String, String>,
}

/// Immutable point-in-time copy of playback state for one render cycle
///
/// Recomputed on every controller-state change, never persisted. Empty
/// `title`/`artist` render as [`NOT_PLAYING_TITLE`] /
/// [`PLACEHOLDER_SUBTITLE`] at descriptor-build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track title, possibly empty
    pub title: String,

    /// Artist name, possibly empty
    pub artist: String,

    /// Album name, possibly empty
    pub album: String,

    /// Cover art identifier for the artwork fetcher
    pub cover_art_id: Option<String>,

    /// Whether playback is active
    pub playing: bool,

    /// Whether shuffle is enabled
    pub shuffle: bool,

    /// Repeat mode
    pub repeat: RepeatMode,

    /// Playback position in milliseconds
    pub position_ms: i64,

    /// Track duration in milliseconds, 0 when unknown
    pub duration_ms: i64,

    /// Deep link to the playing song
    pub song_link: Option<AssetLink>,

    /// Deep link to its album
    pub album_link: Option<AssetLink>,

    /// Deep link to its artist
    pub artist_link: Option<AssetLink>,
}
