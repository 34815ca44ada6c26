use crate::config::OverlayConfig;
use crate::geometry::{RectF, Vec2};
use crate::transform::{OverlayHost, TransformHost};

use super::{
    anchor_offset, classify_touch, fit_rect_to_bounds, resolve_move_commit, update_overlay_rect,
    MoveCommit, TouchRegion,
};

/// One pointer event as delivered by the external dispatcher.
///
/// `delta` is the position change since the previous event regardless of
/// consumption, mirroring the dispatcher's change-ignoring-consumed
/// accessor. The overlay marks the change consumed on moves whenever a
/// region is active so the same gesture is not also interpreted as an image
/// pan upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerChange {
    pub position: Vec2,
    pub delta: Vec2,
    consumed: bool,
}

impl PointerChange {
    pub const fn new(position: Vec2, delta: Vec2) -> Self {
        Self {
            position,
            delta,
            consumed: false,
        }
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// State machine for the dynamic crop overlay.
///
/// The overlay rectangle can be moved by dragging its interior or resized
/// by dragging a handle; multi-touch gestures on the image fall through to
/// the transform engine only while no region is active. After release the
/// rectangle animates back to the nearest valid position inside the
/// container.
///
/// Events for one overlay instance arrive strictly in order and are never
/// processed concurrently; each handler commits before the next event runs,
/// so the session fields need no locking.
#[derive(Debug)]
pub struct DynamicOverlayState {
    config: OverlayConfig,
    rect_bounds: RectF,
    overlay_rect: RectF,
    // Snapshot from first down; move math is relative to this plus the live
    // pointer position, not the continuously-mutating overlay_rect.
    rect_temp: RectF,
    touch_region: TouchRegion,
    anchor_offset: Vec2,
    down_position: Vec2,
}

impl DynamicOverlayState {
    /// The overlay starts covering the whole container; callers that want a
    /// smaller initial selection commit one via the host before first use.
    pub fn new(config: OverlayConfig) -> Self {
        let rect_bounds = RectF::from_size(config.container_size);
        Self {
            config,
            rect_bounds,
            overlay_rect: rect_bounds,
            rect_temp: RectF::ZERO,
            touch_region: TouchRegion::None,
            anchor_offset: Vec2::ZERO,
            down_position: Vec2::ZERO,
        }
    }

    pub const fn overlay_rect(&self) -> RectF {
        self.overlay_rect
    }

    pub const fn touch_region(&self) -> TouchRegion {
        self.touch_region
    }

    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Touch-down: supersedes any in-flight snap-back, snapshots the
    /// rectangle and classifies the region for the rest of the gesture.
    pub fn on_down<O: OverlayHost>(&mut self, change: &PointerChange, overlay: &mut O) {
        if let Some(live) = overlay.cancel_overlay_animation() {
            // The gesture starts from what is on screen, not from the
            // superseded animation target.
            self.overlay_rect = live;
        }

        self.rect_temp = self.overlay_rect;
        self.down_position = change.position;
        self.touch_region = classify_touch(change.position, self.overlay_rect, self.config.handle_size);
        self.anchor_offset = anchor_offset(self.touch_region, self.rect_temp, change.position);

        tracing::debug!(region = ?self.touch_region, position = ?change.position, "overlay touch down");
    }

    /// Move: computes the candidate rectangle, runs the pan-coupling check
    /// and commits the result. Consumes the change whenever a region is
    /// active.
    pub fn on_move<T: TransformHost, O: OverlayHost>(
        &mut self,
        change: &mut PointerChange,
        transform: &mut T,
        overlay: &mut O,
    ) {
        let candidate = update_overlay_rect(
            self.anchor_offset,
            self.touch_region,
            self.config.min_overlay_size,
            self.rect_temp,
            self.overlay_rect,
            change.position,
            self.down_position,
        );

        let commit = resolve_move_commit(
            self.touch_region,
            candidate,
            change.delta,
            self.config.container_size,
            transform.pan(),
            transform.pan_bounds(),
            transform.zoom(),
        );

        match commit {
            MoveCommit::Rect(rect) => {
                self.snap_overlay_rect(rect, overlay);
            }
            MoveCommit::RedirectPanX { rect, pan_x } => {
                tracing::trace!(pan_x, "overlay pinned; redirecting move into x pan");
                self.snap_overlay_rect(rect, overlay);
                transform.snap_pan_x_to(pan_x);
            }
            MoveCommit::RedirectPanY { rect, pan_y } => {
                tracing::trace!(pan_y, "overlay pinned; redirecting move into y pan");
                self.snap_overlay_rect(rect, overlay);
                transform.snap_pan_y_to(pan_y);
            }
        }

        if self.touch_region != TouchRegion::None {
            change.consume();
        }
    }

    /// Release: clears the region and requests an animated snap-back to the
    /// nearest valid rectangle.
    ///
    /// The corrected rectangle becomes the logical value immediately; the
    /// animation is cosmetic and is superseded by the next touch-down if it
    /// has not settled by then.
    pub fn on_up<O: OverlayHost>(&mut self, _change: &PointerChange, overlay: &mut O) {
        self.touch_region = TouchRegion::None;
        self.rect_temp = fit_rect_to_bounds(self.rect_bounds, self.overlay_rect);
        self.overlay_rect = self.rect_temp;
        tracing::debug!(target = ?self.rect_temp, "overlay released; animating to bounds");
        overlay.animate_overlay_rect_to(self.rect_temp);
    }

    /// Multi-touch gesture on the image. Forwarded to the transform engine
    /// only while no region is active; a handle drag in progress wins over
    /// multi-touch. Rotation is always forwarded as zero: free rotation of
    /// the image is disabled in this overlay mode.
    pub fn on_gesture<T: TransformHost>(
        &mut self,
        centroid: Vec2,
        pan_change: Vec2,
        zoom_change: f32,
        _rotation_change: f32,
        transform: &mut T,
    ) {
        if self.touch_region == TouchRegion::None {
            transform.update_transform(centroid, zoom_change, pan_change, 0.0);
        }
    }

    /// Reserved for subclass-style specialization by embedding hosts.
    pub fn on_gesture_start(&mut self) {}

    /// Reserved for subclass-style specialization by embedding hosts.
    pub fn on_gesture_end(&mut self) {}

    /// Double-tap: animated reset of the image transform to the given
    /// targets. `on_animation_end` is invoked once the reset request has
    /// been issued; hosts that animate asynchronously defer their own
    /// completion work to the animation clock.
    pub fn on_double_tap<T: TransformHost>(
        &mut self,
        pan: Vec2,
        zoom: f32,
        rotation: f32,
        transform: &mut T,
        on_animation_end: impl FnOnce(),
    ) {
        if self.config.fling {
            transform.reset_tracking();
        }
        transform.reset_with_animation(pan, zoom, rotation);
        on_animation_end();
    }

    fn snap_overlay_rect<O: OverlayHost>(&mut self, rect: RectF, overlay: &mut O) {
        self.overlay_rect = rect;
        overlay.snap_overlay_rect_to(rect);
    }
}
