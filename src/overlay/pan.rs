use crate::geometry::{RectF, SizeF, Vec2};

use super::TouchRegion;

/// Outcome of the pan-coupling check for one move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveCommit {
    /// No container edge is involved; commit the candidate as-is.
    Rect(RectF),
    /// The overlay is pinned at a vertical container edge: commit `rect`
    /// with the X translation cancelled and snap `pan_x` immediately so the
    /// image slides beneath the stationary overlay.
    RedirectPanX { rect: RectF, pan_x: f32 },
    /// Same redirection on the Y axis.
    RedirectPanY { rect: RectF, pan_y: f32 },
}

/// Decides whether an `Inside` move should pan the image instead of pushing
/// the overlay past a container edge.
///
/// Only applies when the image is zoomed in (`zoom > 1`) and there is pan
/// headroom left on the blocked axis. The four directional branches are
/// checked in fixed priority order (right, left, top, bottom) and the first
/// match wins, so at most one axis redirects per move event.
pub fn resolve_move_commit(
    region: TouchRegion,
    candidate: RectF,
    delta: Vec2,
    container_size: SizeF,
    pan: Vec2,
    pan_bounds: Vec2,
    zoom: f32,
) -> MoveCommit {
    let pan_required = region == TouchRegion::Inside && zoom > 1.0;

    if pan_required && -pan.x < pan_bounds.x && candidate.right() >= container_size.width {
        // Overlay moving right
        MoveCommit::RedirectPanX {
            rect: candidate.translate(-delta.x, 0.0),
            pan_x: pan.x - delta.x * zoom,
        }
    } else if pan_required && pan.x < pan_bounds.x && candidate.left() <= 0.0 {
        // Overlay moving left
        MoveCommit::RedirectPanX {
            rect: candidate.translate(-delta.x, 0.0),
            pan_x: pan.x - delta.x * zoom,
        }
    } else if pan_required && pan.y < pan_bounds.y && candidate.top() <= 0.0 {
        // Overlay moving top
        MoveCommit::RedirectPanY {
            rect: candidate.translate(0.0, -delta.y),
            pan_y: pan.y - delta.y * zoom,
        }
    } else if pan_required && -pan.y < pan_bounds.y && candidate.bottom() >= container_size.height {
        // Overlay moving bottom
        MoveCommit::RedirectPanY {
            rect: candidate.translate(0.0, -delta.y),
            pan_y: pan.y - delta.y * zoom,
        }
    } else {
        MoveCommit::Rect(candidate)
    }
}
