use crate::geometry::{RectF, Vec2};

use super::TouchRegion;

/// Classifies a pointer position against the overlay rectangle.
///
/// Corners win over edges when the threshold zones overlap; edges are only
/// matched between their corners, so every position maps to exactly one
/// region. Pure function, called once per gesture at touch-down.
pub fn classify_touch(position: Vec2, rect: RectF, threshold: f32) -> TouchRegion {
    let corners = [
        (TouchRegion::TopLeft, Vec2::new(rect.left(), rect.top())),
        (TouchRegion::TopRight, Vec2::new(rect.right(), rect.top())),
        (TouchRegion::BottomLeft, Vec2::new(rect.left(), rect.bottom())),
        (
            TouchRegion::BottomRight,
            Vec2::new(rect.right(), rect.bottom()),
        ),
    ];
    for (region, corner) in corners {
        if (position.x - corner.x).abs() <= threshold && (position.y - corner.y).abs() <= threshold
        {
            return region;
        }
    }

    let within_x = position.x >= rect.left() && position.x <= rect.right();
    let within_y = position.y >= rect.top() && position.y <= rect.bottom();
    if within_x && (position.y - rect.top()).abs() <= threshold {
        return TouchRegion::Top;
    }
    if within_x && (position.y - rect.bottom()).abs() <= threshold {
        return TouchRegion::Bottom;
    }
    if within_y && (position.x - rect.left()).abs() <= threshold {
        return TouchRegion::Left;
    }
    if within_y && (position.x - rect.right()).abs() <= threshold {
        return TouchRegion::Right;
    }

    if rect.contains(position) {
        TouchRegion::Inside
    } else {
        TouchRegion::None
    }
}

/// Vector from the touch-down position to the edge(s) controlled by
/// `region`, added back when computing the new edge position so the edge
/// does not jump to the pointer on the first move event.
///
/// Zero on an axis the region does not control, and zero entirely for
/// `Inside` and `None`.
pub fn anchor_offset(region: TouchRegion, rect: RectF, position: Vec2) -> Vec2 {
    let x = if region.moves_left_edge() {
        rect.left() - position.x
    } else if region.moves_right_edge() {
        rect.right() - position.x
    } else {
        0.0
    };
    let y = if region.moves_top_edge() {
        rect.top() - position.y
    } else if region.moves_bottom_edge() {
        rect.bottom() - position.y
    } else {
        0.0
    };
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> RectF {
        RectF::new(100.0, 100.0, 200.0, 200.0)
    }

    #[test]
    fn classify_finds_all_four_corners() {
        assert_eq!(
            classify_touch(Vec2::new(102.0, 98.0), rect(), 10.0),
            TouchRegion::TopLeft
        );
        assert_eq!(
            classify_touch(Vec2::new(305.0, 104.0), rect(), 10.0),
            TouchRegion::TopRight
        );
        assert_eq!(
            classify_touch(Vec2::new(95.0, 295.0), rect(), 10.0),
            TouchRegion::BottomLeft
        );
        assert_eq!(
            classify_touch(Vec2::new(300.0, 300.0), rect(), 10.0),
            TouchRegion::BottomRight
        );
    }

    #[test]
    fn classify_finds_edges_between_corners() {
        assert_eq!(
            classify_touch(Vec2::new(200.0, 104.0), rect(), 10.0),
            TouchRegion::Top
        );
        assert_eq!(
            classify_touch(Vec2::new(200.0, 296.0), rect(), 10.0),
            TouchRegion::Bottom
        );
        assert_eq!(
            classify_touch(Vec2::new(96.0, 200.0), rect(), 10.0),
            TouchRegion::Left
        );
        assert_eq!(
            classify_touch(Vec2::new(304.0, 200.0), rect(), 10.0),
            TouchRegion::Right
        );
    }

    #[test]
    fn classify_corner_wins_when_corner_and_edge_zones_overlap() {
        // Inside both the TopLeft corner zone and the Top edge band.
        assert_eq!(
            classify_touch(Vec2::new(108.0, 102.0), rect(), 10.0),
            TouchRegion::TopLeft
        );
    }

    #[test]
    fn classify_interior_and_outside() {
        assert_eq!(
            classify_touch(Vec2::new(200.0, 200.0), rect(), 10.0),
            TouchRegion::Inside
        );
        assert_eq!(
            classify_touch(Vec2::new(400.0, 400.0), rect(), 10.0),
            TouchRegion::None
        );
        assert_eq!(
            classify_touch(Vec2::new(50.0, 200.0), rect(), 10.0),
            TouchRegion::None
        );
    }

    #[test]
    fn classify_returns_exactly_one_region_over_a_position_grid() {
        // Totality: sampling the plane around the rect never panics and the
        // result set stays within the ten known regions.
        let mut seen_inside = false;
        let mut seen_none = false;
        for grid_x in 0..50 {
            for grid_y in 0..50 {
                let position = Vec2::new(grid_x as f32 * 10.0, grid_y as f32 * 10.0);
                match classify_touch(position, rect(), 10.0) {
                    TouchRegion::Inside => seen_inside = true,
                    TouchRegion::None => seen_none = true,
                    _ => {}
                }
            }
        }
        assert!(seen_inside);
        assert!(seen_none);
    }

    #[test]
    fn anchor_offset_points_from_touch_to_controlled_corner() {
        let offset = anchor_offset(TouchRegion::TopLeft, rect(), Vec2::new(104.0, 96.0));
        assert_eq!(offset, Vec2::new(-4.0, 4.0));

        let offset = anchor_offset(TouchRegion::BottomRight, rect(), Vec2::new(296.0, 305.0));
        assert_eq!(offset, Vec2::new(4.0, -5.0));
    }

    #[test]
    fn anchor_offset_is_single_axis_for_edge_regions() {
        let offset = anchor_offset(TouchRegion::Right, rect(), Vec2::new(296.0, 180.0));
        assert_eq!(offset, Vec2::new(4.0, 0.0));

        let offset = anchor_offset(TouchRegion::Top, rect(), Vec2::new(180.0, 104.0));
        assert_eq!(offset, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn anchor_offset_is_zero_for_inside_and_none() {
        assert_eq!(
            anchor_offset(TouchRegion::Inside, rect(), Vec2::new(150.0, 150.0)),
            Vec2::ZERO
        );
        assert_eq!(
            anchor_offset(TouchRegion::None, rect(), Vec2::new(10.0, 10.0)),
            Vec2::ZERO
        );
    }
}
