use crate::geometry::{RectF, Vec2};

use super::TouchRegion;

/// Computes the candidate overlay rectangle for a move event.
///
/// All arithmetic is relative to `rect_temp`, the snapshot taken at
/// touch-down, plus the live pointer position; working from the snapshot
/// instead of the continuously-mutating rect avoids drift across move
/// events. The result is a candidate only: the caller runs the pan-coupling
/// check before committing it.
///
/// For handle regions the touched edge(s) follow `position + anchor_offset`
/// while the opposite edge(s) stay fixed, and a touched edge that would
/// cross the opposite edge minus `min_size` is pinned at that minimum-size
/// boundary, so width and height never drop below `min_size`.
pub fn update_overlay_rect(
    anchor_offset: Vec2,
    region: TouchRegion,
    min_size: f32,
    rect_temp: RectF,
    overlay_rect: RectF,
    position: Vec2,
    down_position: Vec2,
) -> RectF {
    match region {
        TouchRegion::None => overlay_rect,
        TouchRegion::Inside => {
            let drag = position - down_position;
            rect_temp.translate(drag.x, drag.y)
        }
        _ => {
            let mut left = rect_temp.left();
            let mut top = rect_temp.top();
            let mut right = rect_temp.right();
            let mut bottom = rect_temp.bottom();

            if region.moves_left_edge() {
                left = (position.x + anchor_offset.x).min(right - min_size);
            }
            if region.moves_right_edge() {
                right = (position.x + anchor_offset.x).max(left + min_size);
            }
            if region.moves_top_edge() {
                top = (position.y + anchor_offset.y).min(bottom - min_size);
            }
            if region.moves_bottom_edge() {
                bottom = (position.y + anchor_offset.y).max(top + min_size);
            }

            RectF::from_edges(left, top, right, bottom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f32 = 50.0;

    fn update(region: TouchRegion, temp: RectF, position: Vec2, down: Vec2) -> RectF {
        let offset = super::super::anchor_offset(region, temp, down);
        update_overlay_rect(offset, region, MIN, temp, temp, position, down)
    }

    #[test]
    fn inside_translates_snapshot_by_cumulative_movement() {
        let temp = RectF::new(100.0, 100.0, 200.0, 200.0);
        let moved = update(
            TouchRegion::Inside,
            temp,
            Vec2::new(180.0, 130.0),
            Vec2::new(130.0, 80.0),
        );
        assert_eq!(moved, RectF::new(150.0, 150.0, 200.0, 200.0));
    }

    #[test]
    fn none_returns_live_rect_unchanged() {
        let temp = RectF::new(0.0, 0.0, 100.0, 100.0);
        let live = RectF::new(5.0, 5.0, 100.0, 100.0);
        let result = update_overlay_rect(
            Vec2::ZERO,
            TouchRegion::None,
            MIN,
            temp,
            live,
            Vec2::new(500.0, 500.0),
            Vec2::new(400.0, 400.0),
        );
        assert_eq!(result, live);
    }

    #[test]
    fn bottom_right_drag_clamps_to_min_size_with_top_left_fixed() {
        // Container-sized overlay dragged far past the opposite corner.
        let temp = RectF::new(0.0, 0.0, 1000.0, 1000.0);
        let down = Vec2::new(1000.0, 1000.0);
        let shrunk = update(TouchRegion::BottomRight, temp, Vec2::new(40.0, 40.0), down);
        assert_eq!(shrunk, RectF::new(0.0, 0.0, MIN, MIN));
    }

    #[test]
    fn top_left_drag_holds_bottom_right_fixed() {
        let temp = RectF::new(100.0, 100.0, 200.0, 200.0);
        let down = Vec2::new(100.0, 100.0);
        let resized = update(TouchRegion::TopLeft, temp, Vec2::new(60.0, 140.0), down);
        assert_eq!(resized, RectF::from_edges(60.0, 140.0, 300.0, 300.0));
    }

    #[test]
    fn edge_handle_moves_a_single_axis() {
        let temp = RectF::new(100.0, 100.0, 200.0, 200.0);
        let down = Vec2::new(300.0, 200.0);
        // Vertical movement must not affect a Right-edge drag.
        let resized = update(TouchRegion::Right, temp, Vec2::new(350.0, 500.0), down);
        assert_eq!(resized, RectF::new(100.0, 100.0, 250.0, 200.0));

        let down = Vec2::new(200.0, 100.0);
        let resized = update(TouchRegion::Top, temp, Vec2::new(500.0, 130.0), down);
        assert_eq!(resized, RectF::from_edges(100.0, 130.0, 300.0, 300.0));
    }

    #[test]
    fn anchor_offset_prevents_edge_jump_on_first_move() {
        let temp = RectF::new(100.0, 100.0, 200.0, 200.0);
        // Touch 6px left of the right edge; a 1px move should produce a 1px
        // resize, not a 6px jump of the edge to the pointer.
        let down = Vec2::new(294.0, 200.0);
        let resized = update(TouchRegion::Right, temp, Vec2::new(295.0, 200.0), down);
        assert_eq!(resized.right(), 301.0);
    }

    #[test]
    fn size_never_drops_below_min_across_a_move_sequence() {
        let temp = RectF::new(0.0, 0.0, 400.0, 400.0);
        let down = Vec2::new(400.0, 400.0);
        let offset = super::super::anchor_offset(TouchRegion::BottomRight, temp, down);
        let positions = [
            Vec2::new(350.0, 390.0),
            Vec2::new(120.0, 45.0),
            Vec2::new(-500.0, -500.0),
            Vec2::new(30.0, 770.0),
            Vec2::new(0.0, 0.0),
        ];
        for position in positions {
            let rect = update_overlay_rect(
                offset,
                TouchRegion::BottomRight,
                MIN,
                temp,
                temp,
                position,
                down,
            );
            assert!(rect.width >= MIN, "width {} below min at {position:?}", rect.width);
            assert!(
                rect.height >= MIN,
                "height {} below min at {position:?}",
                rect.height
            );
        }
    }
}
