//! Tempo - Ambient Playback Surfaces
//!
//! Projects a live playback state onto persistent, size-variable
//! home-screen surfaces.
//!
//! This crate provides:
//! - [`compute_timing`] - elapsed/total text and a bounded progress ratio
//! - [`resolve_tier`] - four discrete rendering tiers from a surface's
//!   reported footprint
//! - [`SurfaceView`] - the tier-appropriate view descriptor pushed to the
//!   host, with deep-link tap targets attached
//! - [`SurfaceRenderer`] - the orchestrator tying it together
//!
//! # Architecture
//!
//! The renderer owns no executor and no long-lived mutable state. Artwork
//! fetches and controller acquisition run on collaborator-managed
//! executors behind the [`ArtworkFetcher`] and [`PlayerConnector`] seams;
//! everything the renderer does itself is synchronous and non-blocking.
//! Each push cycle re-derives everything from one [`PlaybackSnapshot`]
//! and a fresh enumeration of live surface instances, so a late artwork
//! completion can never deliver to a stale instance set.
//!
//! Every failure path degrades the rendered result (no artwork,
//! placeholder text) instead of propagating an error: nothing in this
//! crate is fatal to the hosting process.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tempo_surface::{SurfaceConfig, SurfaceHost, ArtworkFetcher, SurfaceRenderer};
//!
//! # fn collaborators() -> (Arc<dyn SurfaceHost>, Arc<dyn ArtworkFetcher>) { unimplemented!() }
//! let (host, artwork) = collaborators();
//! let renderer = SurfaceRenderer::new(host, artwork, SurfaceConfig::default());
//!
//! // Nothing is playing yet: paint every surface with the empty state.
//! renderer.push_placeholder();
//! ```

mod error;
mod host;
mod layout;
mod renderer;
mod timing;
pub mod types;
mod views;

pub use error::{Result, SurfaceError};
pub use host::{ArtworkFetcher, ControllerHandle, PlayerConnector, SurfaceHost, SurfaceInstance};
pub use layout::{resolve_tier, LayoutThresholds, LayoutTier};
pub use renderer::{SurfaceConfig, SurfaceRenderer, SAFE_ART_SIZE};
pub use timing::{compute_timing, readable_duration, TimingInfo, PROGRESS_MAX};
pub use types::{MediaItem, PlaybackSnapshot, RepeatMode, TIME_UNSET};
pub use views::{ArtworkImage, SurfaceView, TapRegion, TapTarget, DEFAULT_TEXT_COLOR};
