//! Link tinting for text spans
//!
//! A span tagged as a link is tinted with an accent color; clearing the
//! tag restores the exact color the span had before it was first tinted,
//! never a recomputed default. The pre-tint color lives on the span value
//! itself so the toggle stays idempotent across repeated cycles.

use serde::{Deserialize, Serialize};

/// Packed ARGB color
pub type Color = u32;

/// A piece of display text with its current color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpan {
    /// Text content
    pub text: String,

    /// Current display color
    pub color: Color,

    /// Color the span had before it was first tinted as a link
    ///
    /// `None` while the span is not link-tinted.
    pub original_color: Option<Color>,
}

impl LinkSpan {
    /// Create an untinted span
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            original_color: None,
        }
    }
}

/// Tint a span with the link accent color
///
/// Records the span's current color the first time only; repeated calls
/// keep the original recorded, so a later clear restores the true
/// pre-link color.
pub fn apply_link_appearance(span: &mut LinkSpan, accent: Color) {
    if span.original_color.is_none() {
        span.original_color = Some(span.color);
    }
    span.color = accent;
}

/// Remove link tinting from a span
///
/// Restores exactly the recorded pre-tint color and drops the tag.
/// A span that was never tinted is left untouched.
pub fn clear_link_appearance(span: &mut LinkSpan) {
    if let Some(original) = span.original_color.take() {
        span.color = original;
    }
}
