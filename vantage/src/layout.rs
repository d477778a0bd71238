//! Split-screen layout presets
//!
//! Region tables for the common local-multiplayer splits. Every region is
//! relative and top-left anchored, so one table serves any surface size.
//!
//! # Example
//! ```
//! use vantage::{SplitLayout, SurfaceSize};
//!
//! let surface = SurfaceSize::new(960.0, 540.0);
//! for (player, vp) in SplitLayout::Quad.viewports().iter().enumerate() {
//!     let rect = vp.resolve_rect(surface);
//!     assert_eq!((rect.width, rect.height), (480.0, 270.0), "player {player}");
//! }
//! ```

use glam::Vec2;
use smallvec::{SmallVec, smallvec};

use crate::viewport::Viewport;

/// How the surface is divided between simultaneous views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitLayout {
    /// One full-surface view
    #[default]
    Full,
    /// Two views side by side (left, right)
    SplitHorizontal,
    /// Two views stacked (top, bottom)
    SplitVertical,
    /// Four quarter views in reading order
    Quad,
}

impl SplitLayout {
    /// Number of views this layout provides
    pub fn player_count(&self) -> usize {
        match self {
            SplitLayout::Full => 1,
            SplitLayout::SplitHorizontal | SplitLayout::SplitVertical => 2,
            SplitLayout::Quad => 4,
        }
    }

    /// Smallest layout that fits `players` views.
    ///
    /// Two players get the side-by-side split; zero still returns
    /// [`SplitLayout::Full`] and anything past four returns
    /// [`SplitLayout::Quad`]. Callers with exotic counts build their own
    /// region tables.
    pub fn for_players(players: usize) -> Self {
        match players {
            0 | 1 => SplitLayout::Full,
            2 => SplitLayout::SplitHorizontal,
            _ => SplitLayout::Quad,
        }
    }

    /// Region table, one viewport per player in player order
    pub fn viewports(&self) -> SmallVec<[Viewport; 4]> {
        match self {
            SplitLayout::Full => smallvec![Viewport::default()],
            SplitLayout::SplitHorizontal => smallvec![
                region(0.0, 0.0, 0.5, 1.0),
                region(0.5, 0.0, 0.5, 1.0),
            ],
            SplitLayout::SplitVertical => smallvec![
                region(0.0, 0.0, 1.0, 0.5),
                region(0.0, 0.5, 1.0, 0.5),
            ],
            SplitLayout::Quad => smallvec![
                region(0.0, 0.0, 0.5, 0.5),
                region(0.5, 0.0, 0.5, 0.5),
                region(0.0, 0.5, 0.5, 0.5),
                region(0.5, 0.5, 0.5, 0.5),
            ],
        }
    }
}

/// Relative top-left-anchored region
fn region(x: f32, y: f32, width: f32, height: f32) -> Viewport {
    Viewport {
        offset: Vec2::new(x, y),
        size: Vec2::new(width, height),
        ..Viewport::default()
    }
}
