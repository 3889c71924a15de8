//! Layout tier resolution
//!
//! A surface reports a minimum-height footprint; three ascending
//! thresholds map it to one of four discrete rendering tiers.

use serde::{Deserialize, Serialize};

/// Discrete rendering footprint of a surface
///
/// Capability grows with the tier; ordering follows capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayoutTier {
    /// Title and artist only
    Compact,

    /// Adds artwork and a progress bar
    Medium,

    /// Adds album and elapsed/total timing
    Large,

    /// Adds shuffle and repeat indicators
    Expanded,
}

/// Minimum-height thresholds separating the tiers, in dp
///
/// Configuration-supplied; defaults align to host grid cell heights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutThresholds {
    /// At or above this height, at least Medium
    pub medium_min_height_dp: u32,

    /// At or above this height, at least Large
    pub large_min_height_dp: u32,

    /// At or above this height, Expanded
    pub expanded_min_height_dp: u32,
}

impl Default for LayoutThresholds {
    fn default() -> Self {
        Self {
            medium_min_height_dp: 110,
            large_min_height_dp: 180,
            expanded_min_height_dp: 250,
        }
    }
}

/// Resolve a reported footprint to a tier
///
/// Thresholds are evaluated from largest to smallest; the first match
/// wins. An unknown (zero) footprint resolves to Compact, the smallest
/// capability, regardless of the threshold values: fail small, not big.
pub fn resolve_tier(min_height_dp: u32, thresholds: &LayoutThresholds) -> LayoutTier {
    if min_height_dp == 0 {
        return LayoutTier::Compact;
    }
    if min_height_dp >= thresholds.expanded_min_height_dp {
        LayoutTier::Expanded
    } else if min_height_dp >= thresholds.large_min_height_dp {
        LayoutTier::Large
    } else if min_height_dp >= thresholds.medium_min_height_dp {
        LayoutTier::Medium
    } else {
        LayoutTier::Compact
    }
}
