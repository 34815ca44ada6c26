//! Overlay interaction core: touch-region classification, handle-anchored
//! resize/move arithmetic, pan coupling at the container edges and the
//! post-release bounds correction.

mod fit;
mod pan;
mod region;
mod state;
mod update;

pub use fit::fit_rect_to_bounds;
pub use pan::{resolve_move_commit, MoveCommit};
pub use region::{anchor_offset, classify_touch};
pub use state::{DynamicOverlayState, PointerChange};
pub use update::update_overlay_rect;

/// Interaction zone hit by the pointer at touch-down.
///
/// Classified once per gesture and held fixed until the next independent
/// touch-down. Corner and edge anchors resize the overlay by moving the
/// touched edge(s) while the opposite edge(s) stay fixed; `Inside` moves the
/// whole rectangle; `None` leaves the overlay alone so multi-touch gestures
/// fall through to the image transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchRegion {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Inside,
    #[default]
    None,
}

impl TouchRegion {
    pub const fn is_handle(self) -> bool {
        !matches!(self, Self::Inside | Self::None)
    }

    pub(crate) const fn moves_left_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft | Self::Left)
    }

    pub(crate) const fn moves_right_edge(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight | Self::Right)
    }

    pub(crate) const fn moves_top_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight | Self::Top)
    }

    pub(crate) const fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight | Self::Bottom)
    }
}
