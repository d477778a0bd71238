//! wgpu adapter for vantage viewport regions
//!
//! [`PassRegion`] implements [`ViewportTarget`] for a live
//! [`wgpu::RenderPass`]. The core crate hands out bottom-left-origin
//! rectangles; wgpu measures viewport and scissor from the top-left corner,
//! so the adapter flips y against the render target height and pairs every
//! viewport with a matching scissor.
//!
//! wgpu validates both rectangles against the attachment bounds, so
//! out-of-bounds input is clamped and fully degenerate input is skipped,
//! each with a warning, rather than failing the pass.

use tracing::warn;
use vantage::{Rect, SurfaceSize, Viewport, ViewportTarget};

/// [`ViewportTarget`] backed by a wgpu render pass.
///
/// Holds the render target size so rectangles can be flipped and clamped.
/// Construct one per pass, apply regions through it, drop it before ending
/// the pass.
///
/// # Example
/// ```ignore
/// let mut region = PassRegion::new(&mut render_pass, SurfaceSize::new(1920.0, 1080.0));
/// player_viewport.apply(&mut region, SurfaceSize::new(1920.0, 1080.0));
/// ```
pub struct PassRegion<'p, 'e> {
    pass: &'p mut wgpu::RenderPass<'e>,
    target: SurfaceSize,
}

impl<'p, 'e> PassRegion<'p, 'e> {
    pub fn new(pass: &'p mut wgpu::RenderPass<'e>, target: SurfaceSize) -> Self {
        Self { pass, target }
    }
}

impl ViewportTarget for PassRegion<'_, '_> {
    fn set_viewport(&mut self, rect: Rect) {
        if let Some(rect) = to_wgpu_rect(rect, self.target) {
            self.pass
                .set_viewport(rect.x, rect.y, rect.width, rect.height, 0.0, 1.0);
        }
    }

    fn set_scissor(&mut self, rect: Rect) {
        if let Some(rect) = to_wgpu_rect(rect, self.target) {
            let (x, y, width, height) = to_scissor_rect(rect, self.target);
            self.pass.set_scissor_rect(x, y, width, height);
        }
    }
}

/// Apply a viewport to a render pass in one call
pub fn apply_viewport(
    pass: &mut wgpu::RenderPass<'_>,
    viewport: &Viewport,
    target: SurfaceSize,
) {
    let mut region = PassRegion::new(pass, target);
    viewport.apply(&mut region, target);
}

/// Flip a bottom-left-origin rectangle to wgpu's top-left convention and
/// clamp it to the target bounds.
///
/// Returns `None` when nothing of the rectangle survives clamping.
/// In-bounds rectangles pass through unchanged apart from the flip.
pub fn to_wgpu_rect(rect: Rect, target: SurfaceSize) -> Option<Rect> {
    let flipped = rect.flip_y(target.height);
    let x0 = flipped.x.max(0.0);
    let y0 = flipped.y.max(0.0);
    let x1 = (flipped.x + flipped.width).min(target.width);
    let y1 = (flipped.y + flipped.height).min(target.height);

    if x1 <= x0 || y1 <= y0 {
        warn!(
            "viewport: rect {:?} outside {}x{} target, skipping",
            rect, target.width, target.height
        );
        return None;
    }

    let clamped = Rect::new(x0, y0, x1 - x0, y1 - y0);
    if clamped != flipped {
        warn!(
            "viewport: rect {:?} clamped to {:?} to fit {}x{} target",
            rect, clamped, target.width, target.height
        );
    }
    Some(clamped)
}

/// Round a clamped top-left rectangle to whole-pixel scissor coordinates.
///
/// The origin floors and the far edge ceils so the scissor covers the whole
/// rectangle; the result never extends past the target.
pub fn to_scissor_rect(rect: Rect, target: SurfaceSize) -> (u32, u32, u32, u32) {
    let x0 = rect.x.floor().max(0.0) as u32;
    let y0 = rect.y.floor().max(0.0) as u32;
    let x1 = (rect.x + rect.width).ceil().min(target.width) as u32;
    let y1 = (rect.y + rect.height).ceil().min(target.height) as u32;
    (x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
}
