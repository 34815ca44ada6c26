use crate::geometry::RectF;

/// Nearest valid rectangle fully inside `bounds`, used for the post-release
/// snap-back.
///
/// The order is load-bearing: dimensions are clamped first, then the
/// left/top deficit is corrected, then the right/bottom excess, so a
/// rectangle pinned against two opposite edges resolves without
/// oscillation. The result is always contained in `bounds`.
pub fn fit_rect_to_bounds(bounds: RectF, rect: RectF) -> RectF {
    let width = rect.width.min(bounds.width);
    let height = rect.height.min(bounds.height);
    let mut fitted = RectF::new(rect.x, rect.y, width, height);

    if fitted.left() < bounds.left() {
        fitted = fitted.translate(bounds.left() - fitted.left(), 0.0);
    }
    if fitted.top() < bounds.top() {
        fitted = fitted.translate(0.0, bounds.top() - fitted.top());
    }
    if fitted.right() > bounds.right() {
        fitted = fitted.translate(bounds.right() - fitted.right(), 0.0);
    }
    if fitted.bottom() > bounds.bottom() {
        fitted = fitted.translate(0.0, bounds.bottom() - fitted.bottom());
    }

    fitted
}
