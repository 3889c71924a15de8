//! Build and parse `tempo://asset/{kind}/{id}` deep links
//!
//! Both directions fail closed: malformed or unsupported input yields
//! `None`. Callers never see a parse error.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::types::{AssetKind, AssetLink};

/// URI scheme of every asset deep link
pub const SCHEME: &str = "tempo";

/// URI authority of every asset deep link
pub const AUTHORITY: &str = "asset";

/// Bytes percent-encoded when an id is embedded as a path segment.
///
/// Superset of what the URL parser itself encodes in a path, so a built
/// uri survives a parse byte-for-byte.
const SEGMENT_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'\\');

/// Canonical uri form for a kind and id
///
/// The id is percent-encoded as a single path segment. This is the raw
/// serializer; prefer [`build`] or [`build_link`], which validate.
pub fn build_uri(kind: AssetKind, id: &str) -> String {
    format!(
        "{SCHEME}://{AUTHORITY}/{}/{}",
        kind.as_str(),
        utf8_percent_encode(id, SEGMENT_ENCODE)
    )
}

/// Build the canonical uri string for a raw kind and id
///
/// Returns `None` when the kind is empty or unsupported, the id is empty,
/// or the built uri does not survive its own parse.
pub fn build_link(kind_raw: &str, id: &str) -> Option<String> {
    let kind = AssetKind::from_raw(kind_raw)?;
    build(kind, id).map(|link| link.uri)
}

/// Build a validated [`AssetLink`] for a kind and id
///
/// The built uri is re-parsed before being returned, so the round-trip
/// invariant is checked structurally rather than assumed. Ids that cannot
/// survive a path segment (for example `..`) yield `None`.
pub fn build(kind: AssetKind, id: &str) -> Option<AssetLink> {
    if id.is_empty() {
        return None;
    }
    let link = parse_str(&build_uri(kind, id))?;
    if link.kind != kind || link.id != id {
        return None;
    }
    Some(link)
}

/// Parse a deep-link string into an [`AssetLink`]
pub fn parse_str(raw: &str) -> Option<AssetLink> {
    let url = Url::parse(raw).ok()?;
    parse_url(&url)
}

/// Parse an already-parsed URL into an [`AssetLink`]
///
/// Fails on a wrong scheme or authority (compared case-insensitively),
/// anything but exactly two path segments, an empty kind or id, an
/// unsupported kind, or an id that does not decode as UTF-8.
pub fn parse_url(url: &Url) -> Option<AssetLink> {
    if !url.scheme().eq_ignore_ascii_case(SCHEME) {
        return None;
    }
    if !url.host_str()?.eq_ignore_ascii_case(AUTHORITY) {
        return None;
    }

    let mut segments = url.path_segments()?;
    let kind_raw = segments.next()?;
    let id_raw = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let kind = AssetKind::from_raw(kind_raw)?;
    let id = percent_decode_str(id_raw).decode_utf8().ok()?.into_owned();
    if id.is_empty() {
        return None;
    }

    Some(AssetLink {
        kind,
        id,
        uri: url.as_str().to_string(),
    })
}
