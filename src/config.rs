use serde::Deserialize;
use thiserror::Error;

use crate::geometry::SizeF;

/// Aspect ratio setting carried by the configuration.
///
/// The dynamic overlay resizes freely, so the ratio is not enforced during
/// handle drags; it is kept here because hosts share one configuration
/// between the dynamic and fixed-ratio overlay modes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AspectRatio {
    pub value: f32,
}

impl AspectRatio {
    /// Follow the source image's own ratio.
    pub const ORIGINAL: Self = Self { value: -1.0 };

    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::ORIGINAL
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("min_overlay_size {min} exceeds container {axis} {extent}")]
    MinOverlayExceedsContainer {
        min: f32,
        axis: &'static str,
        extent: f32,
    },
}

/// Construction-time settings for a dynamic overlay session.
///
/// `handle_size`, `min_overlay_size` and `container_size` drive the overlay
/// geometry directly; the remaining fields parametrize the external
/// transform engine and are carried so one configuration describes the whole
/// cropper. `rotatable` stays `false` while cropping: free rotation of the
/// image is disabled in this overlay mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Pixel threshold for handle hit-testing.
    pub handle_size: f32,
    /// Minimum width and height the overlay can be shrunk to.
    pub min_overlay_size: f32,
    /// Size of the source bitmap.
    pub image_size: SizeF,
    /// Size of the viewport the overlay must stay inside.
    pub container_size: SizeF,
    pub aspect_ratio: AspectRatio,
    pub max_zoom: f32,
    /// Enables velocity-based post-release motion in the transform engine.
    pub fling: bool,
    pub zoomable: bool,
    pub pannable: bool,
    pub rotatable: bool,
    /// Limits pan to the parent bounds to avoid empty space at the edges.
    pub limit_pan: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            handle_size: 30.0,
            min_overlay_size: 64.0,
            image_size: SizeF::default(),
            container_size: SizeF::default(),
            aspect_ratio: AspectRatio::ORIGINAL,
            max_zoom: 5.0,
            fling: false,
            zoomable: true,
            pannable: true,
            rotatable: false,
            limit_pan: false,
        }
    }
}

impl OverlayConfig {
    /// Opt-in consistency check for host-supplied configuration.
    ///
    /// The overlay itself never validates: all geometry paths clamp instead
    /// of rejecting. Hosts that load configuration from files can call this
    /// to surface mistakes early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("handle_size", self.handle_size),
            ("min_overlay_size", self.min_overlay_size),
            ("container_size.width", self.container_size.width),
            ("container_size.height", self.container_size.height),
            ("image_size.width", self.image_size.width),
            ("image_size.height", self.image_size.height),
            ("max_zoom", self.max_zoom),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.min_overlay_size > self.container_size.width {
            return Err(ConfigError::MinOverlayExceedsContainer {
                min: self.min_overlay_size,
                axis: "width",
                extent: self.container_size.width,
            });
        }
        if self.min_overlay_size > self.container_size.height {
            return Err(ConfigError::MinOverlayExceedsContainer {
                min: self.min_overlay_size,
                axis: "height",
                extent: self.container_size.height,
            });
        }
        Ok(())
    }
}
