//! View descriptors pushed to the surface host
//!
//! A [`SurfaceView`] is a fully-built, tier-appropriate description of
//! one surface's content for one render cycle. Fields a tier cannot
//! render stay empty; capability grows monotonically from Compact to
//! Expanded.

use serde::{Deserialize, Serialize};
use tempo_links::{apply_link_appearance, AssetLink, Color, LinkSpan};

use crate::layout::LayoutTier;
use crate::timing::TimingInfo;
use crate::types::RepeatMode;

/// Text color spans carry before any link tinting
pub const DEFAULT_TEXT_COLOR: Color = 0xFF_FF_FF_FF;

/// Artwork delivered by the fetcher, already bounded to a safe size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkImage {
    /// Raw image bytes
    pub data: Vec<u8>,

    /// MIME type (e.g. "image/jpeg", "image/png")
    pub mime_type: String,
}

impl ArtworkImage {
    /// Create artwork from raw bytes
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }
}

/// Surface region a tap target binds to
///
/// Hosts ignore regions their layout does not render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapRegion {
    /// The title text, linking to the song
    Title,

    /// The artist text
    Artist,

    /// The album text
    Album,
}

/// A tap target binding a surface region to a deep link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapTarget {
    /// Region the target covers
    pub region: TapRegion,

    /// Link opened on tap
    pub link: AssetLink,
}

/// Fully-built view content for one surface instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceView {
    /// Tier this view was built for
    pub tier: LayoutTier,

    /// Title span (never empty: placeholder text substitutes)
    pub title: LinkSpan,

    /// Artist span (never empty: placeholder text substitutes)
    pub artist: LinkSpan,

    /// Album span, present from Large up when an album is known
    pub album: Option<LinkSpan>,

    /// Artwork, present from Medium up when resolved
    pub artwork: Option<ArtworkImage>,

    /// Whether playback is active
    pub playing: bool,

    /// Whether shuffle is enabled
    pub shuffle: bool,

    /// Repeat mode
    pub repeat: RepeatMode,

    /// Elapsed text, present from Large up when timing is known
    pub elapsed_text: Option<String>,

    /// Total text, present from Large up when the duration is known
    pub total_text: Option<String>,

    /// Progress in `[0, PROGRESS_MAX]`, 0 below Medium
    pub progress: u32,

    /// Deep-link tap targets for this cycle
    pub tap_targets: Vec<TapTarget>,
}

impl SurfaceView {
    /// Build a tier-appropriate view from normalized playback content
    ///
    /// `title` and `artist` must already be non-empty (the renderer
    /// substitutes placeholders first). Tap targets start empty; attach
    /// them with [`SurfaceView::attach_links`].
    #[allow(clippy::too_many_arguments)]
    pub fn populate(
        tier: LayoutTier,
        title: &str,
        artist: &str,
        album: &str,
        artwork: Option<ArtworkImage>,
        playing: bool,
        shuffle: bool,
        repeat: RepeatMode,
        timing: &TimingInfo,
    ) -> Self {
        Self {
            tier,
            title: LinkSpan::new(title, DEFAULT_TEXT_COLOR),
            artist: LinkSpan::new(artist, DEFAULT_TEXT_COLOR),
            album: (tier >= LayoutTier::Large && !album.is_empty())
                .then(|| LinkSpan::new(album, DEFAULT_TEXT_COLOR)),
            artwork: if tier >= LayoutTier::Medium { artwork } else { None },
            playing,
            shuffle,
            repeat,
            elapsed_text: (tier >= LayoutTier::Large)
                .then(|| timing.elapsed_text.clone())
                .flatten(),
            total_text: (tier >= LayoutTier::Large)
                .then(|| timing.total_text.clone())
                .flatten(),
            progress: if tier >= LayoutTier::Medium { timing.progress } else { 0 },
            tap_targets: Vec::new(),
        }
    }

    /// Build the empty "nothing playing" view for a tier
    pub fn placeholder(tier: LayoutTier) -> Self {
        Self::populate(
            tier,
            crate::types::NOT_PLAYING_TITLE,
            crate::types::PLACEHOLDER_SUBTITLE,
            "",
            None,
            false,
            false,
            RepeatMode::Off,
            &crate::timing::compute_timing(0, 0),
        )
    }

    /// Attach deep links as tap targets and tint the linked spans
    ///
    /// A target is attached for every present link, whatever the tier;
    /// hosts ignore regions they do not render. Spans are tinted through
    /// the idempotent link-appearance toggle, so their pre-link color
    /// stays recoverable.
    pub fn attach_links(
        &mut self,
        accent: Color,
        song: Option<AssetLink>,
        album: Option<AssetLink>,
        artist: Option<AssetLink>,
    ) {
        if let Some(link) = song {
            apply_link_appearance(&mut self.title, accent);
            self.tap_targets.push(TapTarget {
                region: TapRegion::Title,
                link,
            });
        }
        if let Some(link) = artist {
            apply_link_appearance(&mut self.artist, accent);
            self.tap_targets.push(TapTarget {
                region: TapRegion::Artist,
                link,
            });
        }
        if let Some(link) = album {
            if let Some(span) = &mut self.album {
                apply_link_appearance(span, accent);
            }
            self.tap_targets.push(TapTarget {
                region: TapRegion::Album,
                link,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::compute_timing;
    use tempo_links::build;
    use tempo_links::AssetKind;

    fn timing() -> TimingInfo {
        compute_timing(30_000, 180_000)
    }

    #[test]
    fn compact_omits_artwork_album_and_timing() {
        let view = SurfaceView::populate(
            LayoutTier::Compact,
            "Song",
            "Artist",
            "Album",
            Some(ArtworkImage::new(vec![1, 2], "image/png")),
            true,
            false,
            RepeatMode::Off,
            &timing(),
        );
        assert_eq!(view.artwork, None);
        assert_eq!(view.album, None);
        assert_eq!(view.elapsed_text, None);
        assert_eq!(view.progress, 0);
        assert_eq!(view.title.text, "Song");
    }

    #[test]
    fn medium_carries_artwork_and_progress_only() {
        let view = SurfaceView::populate(
            LayoutTier::Medium,
            "Song",
            "Artist",
            "Album",
            Some(ArtworkImage::new(vec![1], "image/jpeg")),
            true,
            false,
            RepeatMode::Off,
            &timing(),
        );
        assert!(view.artwork.is_some());
        assert!(view.progress > 0);
        assert_eq!(view.album, None);
        assert_eq!(view.total_text, None);
    }

    #[test]
    fn expanded_carries_everything() {
        let view = SurfaceView::populate(
            LayoutTier::Expanded,
            "Song",
            "Artist",
            "Album",
            Some(ArtworkImage::new(vec![1], "image/jpeg")),
            true,
            true,
            RepeatMode::All,
            &timing(),
        );
        assert!(view.artwork.is_some());
        assert_eq!(view.album.as_ref().map(|s| s.text.as_str()), Some("Album"));
        assert_eq!(view.elapsed_text.as_deref(), Some("0:30"));
        assert_eq!(view.total_text.as_deref(), Some("3:00"));
        assert!(view.shuffle);
        assert_eq!(view.repeat, RepeatMode::All);
    }

    #[test]
    fn empty_album_never_produces_a_span() {
        let view = SurfaceView::populate(
            LayoutTier::Expanded,
            "Song",
            "Artist",
            "",
            None,
            false,
            false,
            RepeatMode::Off,
            &timing(),
        );
        assert_eq!(view.album, None);
    }

    #[test]
    fn attach_links_tints_spans_and_adds_targets() {
        let accent: Color = 0xFF_33_B5_E5;
        let mut view = SurfaceView::populate(
            LayoutTier::Expanded,
            "Song",
            "Artist",
            "Album",
            None,
            true,
            false,
            RepeatMode::Off,
            &timing(),
        );
        view.attach_links(
            accent,
            build(AssetKind::Song, "tr-1"),
            build(AssetKind::Album, "al-1"),
            build(AssetKind::Artist, "ar-1"),
        );

        assert_eq!(view.tap_targets.len(), 3);
        assert_eq!(view.title.color, accent);
        assert_eq!(view.title.original_color, Some(DEFAULT_TEXT_COLOR));
        assert_eq!(view.artist.color, accent);
        assert_eq!(view.album.as_ref().map(|s| s.color), Some(accent));
    }

    #[test]
    fn attach_links_with_no_links_changes_nothing() {
        let mut view = SurfaceView::placeholder(LayoutTier::Compact);
        view.attach_links(0xFF_33_B5_E5, None, None, None);
        assert!(view.tap_targets.is_empty());
        assert_eq!(view.title.color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn placeholder_uses_empty_state_text() {
        let view = SurfaceView::placeholder(LayoutTier::Large);
        assert_eq!(view.title.text, crate::types::NOT_PLAYING_TITLE);
        assert_eq!(view.artist.text, crate::types::PLACEHOLDER_SUBTITLE);
        assert_eq!(view.artwork, None);
        assert_eq!(view.elapsed_text, None);
        assert!(!view.playing);
    }
}
