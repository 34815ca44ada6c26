//! Interaction core for a dynamic crop overlay drawn atop a
//! zoomable/pannable image viewport.
//!
//! The overlay rectangle is resized by dragging its handles, moved by
//! dragging its interior, and left alone during multi-touch gestures on the
//! image. When the overlay is pinned against a container edge while the
//! image is zoomed in, interior drags pan the image instead of pushing the
//! overlay out of bounds, and after release the rectangle animates back to
//! the nearest valid position.
//!
//! Rendering, gesture recognition and the pan/zoom transform math live in
//! the embedding host; this crate talks to them through the
//! [`transform::TransformHost`] and [`transform::OverlayHost`] capability
//! traits.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod overlay;
pub mod transform;

pub use config::{AspectRatio, ConfigError, OverlayConfig};
pub use geometry::{RectF, SizeF, Vec2};
pub use overlay::{DynamicOverlayState, MoveCommit, PointerChange, TouchRegion};
pub use transform::{OverlayHost, TransformHost};
