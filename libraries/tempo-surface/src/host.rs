//! Collaborator seams consumed by the renderer
//!
//! The host owns the surfaces and the executors; the renderer only
//! enumerates, reads, and pushes through these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{MediaItem, RepeatMode};
use crate::views::{ArtworkImage, SurfaceView};

/// One live ambient surface instance, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceInstance {
    /// Host-assigned opaque identity
    pub id: i32,

    /// Reported minimum-height footprint in dp, 0 when unknown
    pub min_height_dp: u32,
}

/// Host owning the ambient surface instances
///
/// Instances appear, disappear, and resize at the host's discretion;
/// the renderer never creates or destroys them. Enumeration reflects the
/// live set at call time, which is why the renderer re-enumerates at the
/// latest possible point of every cycle.
pub trait SurfaceHost: Send + Sync {
    /// Enumerate the currently live surface instances
    fn instances(&self) -> Vec<SurfaceInstance>;

    /// Push a fully-built view to one instance
    ///
    /// # Errors
    /// May fail for an instance that vanished since enumeration; the
    /// renderer treats that as a harmless no-op.
    fn push(&self, instance_id: i32, view: SurfaceView) -> Result<()>;
}

/// Asynchronous artwork resolution by cover identifier
#[async_trait]
pub trait ArtworkFetcher: Send + Sync {
    /// Fetch artwork bounded to `target_size_px` on its longest edge
    ///
    /// # Errors
    /// Returns an error when the artwork cannot be fetched or decoded;
    /// the renderer degrades to an artwork-less push.
    async fn fetch(&self, cover_art_id: &str, target_size_px: u32) -> Result<ArtworkImage>;
}

/// Read-only view of an acquired player controller
///
/// All reads are cheap and infallible. Releasing the controller maps to
/// dropping the handle.
pub trait ControllerHandle: Send {
    /// Currently loaded media item, if any
    fn current_item(&self) -> Option<MediaItem>;

    /// Whether playback is active
    fn is_playing(&self) -> bool;

    /// Whether shuffle is enabled
    fn shuffle_enabled(&self) -> bool;

    /// Current repeat mode
    fn repeat_mode(&self) -> RepeatMode;

    /// Current position in ms, or [`crate::types::TIME_UNSET`]
    fn position_ms(&self) -> i64;

    /// Current duration in ms, or [`crate::types::TIME_UNSET`]
    fn duration_ms(&self) -> i64;
}

/// Asynchronous controller acquisition by session token
#[async_trait]
pub trait PlayerConnector: Send + Sync {
    /// Acquire a handle to the live player controller
    ///
    /// # Errors
    /// Returns an error when no controller session is reachable; the
    /// renderer logs and skips the refresh.
    async fn connect(&self) -> Result<Box<dyn ControllerHandle>>;
}
