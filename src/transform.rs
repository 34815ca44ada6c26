//! Capability interfaces onto the external pan/zoom engine and the overlay
//! animation host.
//!
//! The overlay state machine never owns transform math or animation clocks;
//! it reads and commands them through these traits so the interaction logic
//! stays testable with plain mocks.

use crate::geometry::{RectF, Vec2};

/// Read/command surface of the image viewport's transform engine.
///
/// `pan_bounds` is the engine's pan limit for the current zoom, per axis;
/// the pan-coupling policy compares the current pan magnitude against it to
/// decide whether there is headroom left to slide the image.
pub trait TransformHost {
    fn zoom(&self) -> f32;

    fn pan(&self) -> Vec2;

    fn pan_bounds(&self) -> Vec2;

    /// Applies a multi-touch gesture increment (pinch/pan/rotate).
    fn update_transform(
        &mut self,
        centroid: Vec2,
        zoom_change: f32,
        pan_change: Vec2,
        rotation_change: f32,
    );

    /// Immediate (non-animated) pan assignment on the X axis.
    fn snap_pan_x_to(&mut self, x: f32);

    /// Immediate (non-animated) pan assignment on the Y axis.
    fn snap_pan_y_to(&mut self, y: f32);

    /// Animated reset of pan/zoom/rotation toward the given targets.
    fn reset_with_animation(&mut self, pan: Vec2, zoom: f32, rotation: f32);

    /// Clears accumulated fling velocity.
    fn reset_tracking(&mut self);
}

/// Owner of the rendered overlay rectangle and its animation clock.
pub trait OverlayHost {
    /// Immediate assignment, used on every committed move event.
    fn snap_overlay_rect_to(&mut self, rect: RectF);

    /// Time-interpolated transition toward `rect`, used for the
    /// post-release snap-back.
    fn animate_overlay_rect_to(&mut self, rect: RectF);

    /// Cancels an in-flight overlay animation. Returns the rectangle's
    /// value at the moment of cancellation when an animation was running,
    /// `None` when the overlay was already settled. A new touch-down calls
    /// this so its snapshot reflects what is on screen, not the superseded
    /// animation target.
    fn cancel_overlay_animation(&mut self) -> Option<RectF>;
}
