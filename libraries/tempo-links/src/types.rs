//! Core types for asset deep links

use serde::{Deserialize, Serialize};

/// Kind of asset a deep link points at
///
/// The single source of truth for both link directions: `build` and
/// `parse` share this enumeration, so adding a kind is a one-place change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A single song
    Song,

    /// An album
    Album,

    /// An artist
    Artist,

    /// A playlist
    Playlist,

    /// A genre
    Genre,

    /// A release year
    Year,
}

impl AssetKind {
    /// Every supported kind, in canonical order
    pub const ALL: [AssetKind; 6] = [
        AssetKind::Song,
        AssetKind::Album,
        AssetKind::Artist,
        AssetKind::Playlist,
        AssetKind::Genre,
        AssetKind::Year,
    ];

    /// Canonical wire form of the kind, as it appears in the URI path
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Song => "song",
            AssetKind::Album => "album",
            AssetKind::Artist => "artist",
            AssetKind::Playlist => "playlist",
            AssetKind::Genre => "genre",
            AssetKind::Year => "year",
        }
    }

    /// Resolve a raw kind string to a supported kind
    ///
    /// Returns `None` for anything outside the closed enumeration.
    /// Matching is exact: kind strings are lowercase on the wire.
    pub fn from_raw(raw: &str) -> Option<AssetKind> {
        match raw {
            "song" => Some(AssetKind::Song),
            "album" => Some(AssetKind::Album),
            "artist" => Some(AssetKind::Artist),
            "playlist" => Some(AssetKind::Playlist),
            "genre" => Some(AssetKind::Genre),
            "year" => Some(AssetKind::Year),
            _ => None,
        }
    }

    /// Human-readable label for this kind
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Song => "Song",
            AssetKind::Album => "Album",
            AssetKind::Artist => "Artist",
            AssetKind::Playlist => "Playlist",
            AssetKind::Genre => "Genre",
            AssetKind::Year => "Year",
        }
    }
}

/// Human-readable label for a raw kind string
///
/// Falls back to `"Link"` for an unrecognized kind. Parsing never surfaces
/// an unrecognized kind, so the fallback only matters for raw strings that
/// bypassed the codec.
pub fn label_for_raw(raw: &str) -> &'static str {
    AssetKind::from_raw(raw).map_or("Link", AssetKind::label)
}

/// A typed deep link to one Tempo asset
///
/// Immutable value: `uri` is always the canonical form built from
/// `(kind, id)`, and parsing that uri yields back an equal `(kind, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLink {
    /// Kind of the linked asset
    pub kind: AssetKind,

    /// Opaque non-empty asset identifier
    pub id: String,

    /// Canonical `tempo://asset/{kind}/{id}` form
    pub uri: String,
}
