//! Tempo - Asset Deep Links
//!
//! Typed, versionless deep links identifying one Tempo asset
//! (song, album, artist, playlist, genre, year).
//!
//! This crate provides:
//! - A closed [`AssetKind`] enumeration shared by both link directions
//! - Fail-closed build/parse of `tempo://asset/{kind}/{id}` URIs
//! - Display labels per kind, with a defensive fallback
//! - Idempotent link tinting on text spans ([`LinkSpan`])
//!
//! Build and parse never raise: malformed or unsupported input yields
//! `None`, so callers branch on presence rather than handle errors.
//!
//! # Example
//!
//! ```rust
//! use tempo_links::{build, parse_str, AssetKind};
//!
//! let link = build(AssetKind::Album, "al-300").unwrap();
//! assert_eq!(link.uri, "tempo://asset/album/al-300");
//!
//! let parsed = parse_str(&link.uri).unwrap();
//! assert_eq!(parsed, link);
//!
//! assert!(parse_str("http://asset/album/al-300").is_none());
//! ```

mod appearance;
mod codec;
mod types;

pub use appearance::{apply_link_appearance, clear_link_appearance, Color, LinkSpan};
pub use codec::{build, build_link, build_uri, parse_str, parse_url, AUTHORITY, SCHEME};
pub use types::{label_for_raw, AssetKind, AssetLink};
