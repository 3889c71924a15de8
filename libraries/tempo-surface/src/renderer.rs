//! Surface renderer - projects one playback snapshot onto every live
//! surface instance
//!
//! Per push cycle: compute timing once, then per freshly-enumerated
//! instance resolve the tier, build the tier's view, attach deep-link
//! tap targets, and push. The instance enumeration at push time is
//! authoritative, never the one at request time: instances may appear,
//! disappear, or resize while an artwork fetch is in flight, and a late
//! delivery to a vanished instance must be a harmless no-op.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tempo_links::{build, parse_str, AssetKind, AssetLink, Color};
use tracing::{debug, warn};

use crate::host::{ArtworkFetcher, ControllerHandle, PlayerConnector, SurfaceHost};
use crate::layout::{resolve_tier, LayoutThresholds};
use crate::timing::{compute_timing, TimingInfo};
use crate::types::{
    PlaybackSnapshot, EXTRA_ALBUM, EXTRA_ALBUM_ID, EXTRA_ARTIST, EXTRA_ARTIST_ID,
    EXTRA_COVER_ART_ID, EXTRA_LINK_ALBUM, EXTRA_LINK_ARTIST, EXTRA_LINK_SONG, EXTRA_SONG_ID,
    EXTRA_TITLE, NOT_PLAYING_TITLE, PLACEHOLDER_SUBTITLE, TIME_UNSET,
};
use crate::views::{ArtworkImage, SurfaceView};

/// Pixel bound requested for surface artwork
///
/// Surfaces cap the bitmap payload they accept; fetching above this is
/// wasted work and risks a rejected push.
pub const SAFE_ART_SIZE: u32 = 512;

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Tier thresholds for layout resolution
    pub thresholds: LayoutThresholds,

    /// Accent color applied to link-tinted spans
    pub accent_color: Color,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            thresholds: LayoutThresholds::default(),
            accent_color: 0xFF_33_B5_E5,
        }
    }
}

/// Projects playback snapshots onto the host's live surface instances
///
/// Holds no long-lived mutable state: every cycle re-derives everything
/// from the snapshot and the current instance set, bounding staleness to
/// one cycle. There is no cancel operation; a superseding push simply
/// overwrites older content at the host.
pub struct SurfaceRenderer {
    host: Arc<dyn SurfaceHost>,
    artwork: Arc<dyn ArtworkFetcher>,
    config: SurfaceConfig,
}

impl SurfaceRenderer {
    /// Create a renderer over the given collaborators
    pub fn new(
        host: Arc<dyn SurfaceHost>,
        artwork: Arc<dyn ArtworkFetcher>,
        config: SurfaceConfig,
    ) -> Self {
        Self {
            host,
            artwork,
            config,
        }
    }

    /// Push a snapshot with artwork the caller already resolved
    ///
    /// Synchronous: used when the artwork is already resident (or known
    /// to be absent) and no fetch should be issued.
    pub fn push_with_artwork(&self, snapshot: &PlaybackSnapshot, artwork: Option<ArtworkImage>) {
        let timing = compute_timing(snapshot.position_ms, snapshot.duration_ms);
        self.push_views(snapshot, &timing, artwork);
    }

    /// Resolve the snapshot's cover art, then push
    ///
    /// Issues exactly one artwork fetch, bounded to [`SAFE_ART_SIZE`].
    /// A failed fetch is terminal for this cycle - the push still
    /// happens, with no artwork, never with a stale image. Instances are
    /// enumerated after the fetch completes, not before it starts.
    pub async fn push_resolving_artwork(&self, snapshot: &PlaybackSnapshot) {
        let timing = compute_timing(snapshot.position_ms, snapshot.duration_ms);

        let artwork = match snapshot.cover_art_id.as_deref() {
            Some(cover_art_id) if !cover_art_id.is_empty() => {
                match self.artwork.fetch(cover_art_id, SAFE_ART_SIZE).await {
                    Ok(image) => Some(image),
                    Err(error) => {
                        warn!(%error, cover_art_id, "Artwork fetch failed, pushing without artwork");
                        None
                    }
                }
            }
            _ => None,
        };

        self.push_views(snapshot, &timing, artwork);
    }

    /// Read the live controller once and render the result
    ///
    /// Acquires a handle, reads metadata/flags/position off it once, and
    /// releases it (the handle drops) before any artwork work starts.
    /// Acquisition failure is swallowed: no crash, no partial push, no
    /// stale surface left mid-update.
    pub async fn refresh_from_controller(&self, connector: &dyn PlayerConnector) {
        let snapshot = match connector.connect().await {
            Ok(handle) => snapshot_from_handle(handle.as_ref()),
            Err(error) => {
                warn!(%error, "Controller unavailable, skipping surface refresh");
                return;
            }
        };
        self.push_resolving_artwork(&snapshot).await;
    }

    /// Paint every live instance with the empty "nothing playing" state
    pub fn push_placeholder(&self) {
        let instances = self.host.instances();
        debug!(instances = instances.len(), "Pushing placeholder state");
        for instance in instances {
            let tier = resolve_tier(instance.min_height_dp, &self.config.thresholds);
            self.push_one(instance.id, SurfaceView::placeholder(tier));
        }
    }

    // One full fan-out: enumerate now, build per tier, attach links, push.
    fn push_views(
        &self,
        snapshot: &PlaybackSnapshot,
        timing: &TimingInfo,
        artwork: Option<ArtworkImage>,
    ) {
        let instances = self.host.instances();
        if instances.is_empty() {
            debug!("No live surface instances");
            return;
        }

        let title = non_empty_or(&snapshot.title, NOT_PLAYING_TITLE);
        let artist = non_empty_or(&snapshot.artist, PLACEHOLDER_SUBTITLE);

        debug!(
            instances = instances.len(),
            playing = snapshot.playing,
            title = %title,
            "Pushing playback state to surfaces"
        );

        for instance in instances {
            let tier = resolve_tier(instance.min_height_dp, &self.config.thresholds);
            let mut view = SurfaceView::populate(
                tier,
                title,
                artist,
                &snapshot.album,
                artwork.clone(),
                snapshot.playing,
                snapshot.shuffle,
                snapshot.repeat,
                timing,
            );
            view.attach_links(
                self.config.accent_color,
                snapshot.song_link.clone(),
                snapshot.album_link.clone(),
                snapshot.artist_link.clone(),
            );
            self.push_one(instance.id, view);
        }
    }

    // A push can race an instance vanishing; that is a no-op, not an error.
    fn push_one(&self, instance_id: i32, view: SurfaceView) {
        if let Err(error) = self.host.push(instance_id, view) {
            debug!(instance = instance_id, %error, "Push skipped vanished instance");
        }
    }
}

// Build a snapshot from one read of an acquired controller handle.
fn snapshot_from_handle(handle: &dyn ControllerHandle) -> PlaybackSnapshot {
    let item = handle.current_item().unwrap_or_default();
    let extras = &item.extras;

    let title = field_or_extra(item.title.as_deref(), extras, EXTRA_TITLE);
    let artist = field_or_extra(item.artist.as_deref(), extras, EXTRA_ARTIST);
    let album = field_or_extra(item.album.as_deref(), extras, EXTRA_ALBUM);

    PlaybackSnapshot {
        title,
        artist,
        album,
        cover_art_id: extras.get(EXTRA_COVER_ART_ID).cloned(),
        playing: handle.is_playing(),
        shuffle: handle.shuffle_enabled(),
        repeat: handle.repeat_mode(),
        position_ms: known_time(handle.position_ms()),
        duration_ms: known_time(handle.duration_ms()),
        song_link: link_from_extras(extras, EXTRA_LINK_SONG, AssetKind::Song, EXTRA_SONG_ID),
        album_link: link_from_extras(extras, EXTRA_LINK_ALBUM, AssetKind::Album, EXTRA_ALBUM_ID),
        artist_link: link_from_extras(extras, EXTRA_LINK_ARTIST, AssetKind::Artist, EXTRA_ARTIST_ID),
    }
}

// An embedded link is authoritative; a link is derived from the raw id
// only when no usable embedded one exists.
fn link_from_extras(
    extras: &HashMap<String, String>,
    link_key: &str,
    kind: AssetKind,
    id_key: &str,
) -> Option<AssetLink> {
    extras
        .get(link_key)
        .and_then(|raw| parse_str(raw))
        .or_else(|| extras.get(id_key).and_then(|id| build(kind, id)))
}

fn field_or_extra(field: Option<&str>, extras: &HashMap<String, String>, key: &str) -> String {
    field
        .map(str::to_string)
        .or_else(|| extras.get(key).cloned())
        .unwrap_or_default()
}

fn known_time(ms: i64) -> i64 {
    if ms == TIME_UNSET {
        0
    } else {
        ms
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
