//! Anchored viewport regions
//!
//! A [`Viewport`] describes a rectangular screen region as an offset/size
//! pair, interpreted in either normalized or pixel units and measured from
//! one of the four surface corners. It resolves to absolute pixel rectangles
//! on demand, answers pointer containment for picking, and maps pointer
//! positions into normalized device coordinates.

use glam::Vec2;

use crate::rect::{Rect, SurfaceSize};
use crate::target::ViewportTarget;

/// How offset and size are interpreted against the surface.
///
/// Discriminants are the stable wire codes carried by
/// [`ViewportData`](crate::data::ViewportData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum SizeMode {
    /// Offset and size are fractions of the surface dimensions (1.0 spans
    /// the full surface)
    #[default]
    Relative = 200,
    /// Offset and size are pixels
    Absolute = 201,
}

impl SizeMode {
    pub fn from_u32(value: u32) -> Self {
        match value {
            200 => SizeMode::Relative,
            201 => SizeMode::Absolute,
            _ => SizeMode::Relative,
        }
    }
}

/// Which surface corner the offset is measured from.
///
/// Discriminants are the stable wire codes carried by
/// [`ViewportData`](crate::data::ViewportData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Anchor {
    /// Offset grows right and down from the top-left corner
    #[default]
    TopLeft = 301,
    /// Offset grows left and down from the top-right corner
    TopRight = 302,
    /// Offset grows right and up from the bottom-left corner
    BottomLeft = 303,
    /// Offset grows left and up from the bottom-right corner
    BottomRight = 304,
}

impl Anchor {
    pub fn from_u32(value: u32) -> Self {
        match value {
            301 => Anchor::TopLeft,
            302 => Anchor::TopRight,
            303 => Anchor::BottomLeft,
            304 => Anchor::BottomRight,
            _ => Anchor::TopLeft,
        }
    }
}

/// Rectangular screen region for rendering and picking.
///
/// Plain value type: owners mutate the fields directly and every query
/// recomputes from the current fields and the surface size passed in, so a
/// window resize needs no notification. Defaults describe the full surface
/// (offset `(0, 0)`, size `(1, 1)`, [`SizeMode::Relative`],
/// [`Anchor::TopLeft`]).
///
/// # Example
/// ```
/// use glam::Vec2;
/// use vantage::{Anchor, SurfaceSize, Viewport};
///
/// // Right half of the surface, measured from the top-right corner
/// let mut vp = Viewport::default();
/// vp.size = Vec2::new(0.5, 1.0);
/// vp.anchor = Anchor::TopRight;
///
/// let rect = vp.resolve_rect(SurfaceSize::new(800.0, 600.0));
/// assert_eq!((rect.x, rect.y, rect.width, rect.height), (400.0, 0.0, 400.0, 600.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance from the anchor corner, in units set by `mode`
    pub offset: Vec2,
    /// Region extent, in units set by `mode`
    pub size: Vec2,
    /// Unit interpretation for `offset` and `size`
    pub mode: SizeMode,
    /// Corner the offset is measured from
    pub anchor: Anchor,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(SizeMode::Relative)
    }
}

impl Viewport {
    /// Full-coverage region in the given mode.
    ///
    /// Note the size starts at `(1, 1)` regardless of mode; callers using
    /// [`SizeMode::Absolute`] set pixel dimensions themselves.
    pub fn new(mode: SizeMode) -> Self {
        Self {
            offset: Vec2::ZERO,
            size: Vec2::ONE,
            mode,
            anchor: Anchor::TopLeft,
        }
    }

    /// Aspect ratio of the configured size (`size.x / size.y`).
    ///
    /// Computed from the raw size in both modes, so under
    /// [`SizeMode::Relative`] this is the ratio of covered fractions, not of
    /// on-screen pixels; multiply by [`SurfaceSize::aspect_ratio`] for the
    /// pixel ratio. Not guarded: a zero-height size yields a non-finite
    /// value rather than a panic.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.size.x / self.size.y
    }

    /// Check if the region has positive extent on both axes.
    ///
    /// Containment and coordinate mapping only produce finite results for
    /// valid regions; nothing in this type enforces validity.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Offset and size in pixels for the given surface.
    ///
    /// Relative values scale component-wise by the surface dimensions;
    /// absolute values pass through unchanged.
    #[inline]
    pub fn resolve(&self, surface: SurfaceSize) -> (Vec2, Vec2) {
        match self.mode {
            SizeMode::Relative => {
                let scale = Vec2::new(surface.width, surface.height);
                (self.offset * scale, self.size * scale)
            }
            SizeMode::Absolute => (self.offset, self.size),
        }
    }

    /// Absolute pixel rectangle in pointer space (origin top-left, y down).
    ///
    /// This is the one place anchoring is unfolded; every other query
    /// derives from this rectangle and adjusts conventions locally.
    pub fn resolve_rect(&self, surface: SurfaceSize) -> Rect {
        let (offset, size) = self.resolve(surface);
        let x = match self.anchor {
            Anchor::TopLeft | Anchor::BottomLeft => offset.x,
            Anchor::TopRight | Anchor::BottomRight => surface.width - size.x - offset.x,
        };
        let y = match self.anchor {
            Anchor::TopLeft | Anchor::TopRight => offset.y,
            Anchor::BottomLeft | Anchor::BottomRight => surface.height - offset.y - size.y,
        };
        Rect::new(x, y, size.x, size.y)
    }

    /// Absolute pixel rectangle in backend space (origin bottom-left, y up).
    ///
    /// The convention [`ViewportTarget`] consumes.
    #[inline]
    pub fn resolve_rect_gl(&self, surface: SurfaceSize) -> Rect {
        self.resolve_rect(surface).flip_y(surface.height)
    }

    /// Pointer containment test for picking.
    ///
    /// `point` is in surface pixels with origin top-left (the usual pointer
    /// convention). All four bounds are strict, so a point exactly on an
    /// edge is outside; adjacent split-screen regions never both claim a
    /// point on their shared edge.
    pub fn contains(&self, surface: SurfaceSize, point: Vec2) -> bool {
        let rect = self.resolve_rect(surface);
        point.x > rect.x
            && point.x < rect.x + rect.width
            && point.y > rect.y
            && point.y < rect.y + rect.height
    }

    /// Map a pointer position into normalized device coordinates.
    ///
    /// `point` is in surface pixels with origin top-left. Inside the region
    /// both axes land in `[-1, 1]` with y up: the region's top edge maps to
    /// `+1`, the bottom edge to `-1`. Points outside extrapolate beyond the
    /// range; nothing is clamped. Returns a fresh vector each call.
    pub fn normalized(&self, surface: SurfaceSize, point: Vec2) -> Vec2 {
        let rect = self.resolve_rect(surface);
        Vec2::new(
            2.0 * (point.x - rect.x) / rect.width - 1.0,
            -(2.0 * (point.y - rect.y) / rect.height) + 1.0,
        )
    }

    /// Apply the region to a backend as paired viewport and scissor state.
    ///
    /// Both receive the same backend-space rectangle, so draws and clears
    /// are confined to the region. Previous target state is not saved;
    /// callers wanting it back reapply it themselves.
    pub fn apply(&self, target: &mut dyn ViewportTarget, surface: SurfaceSize) {
        let rect = self.resolve_rect_gl(surface);
        target.set_viewport(rect);
        target.set_scissor(rect);
    }
}
