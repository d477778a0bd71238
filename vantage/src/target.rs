//! Backend seam for applying resolved viewport state

use crate::rect::Rect;

/// Receiver of viewport and scissor rectangles.
///
/// Rectangles arrive in surface pixels with the origin at the bottom-left
/// corner, the convention `glViewport`/`glScissor` expect. Backends with a
/// top-left native convention convert locally; `vantage-wgpu` shows the
/// required flip.
///
/// Implementations are not expected to save or restore previous state.
pub trait ViewportTarget {
    /// Set the rectangle subsequent draws are mapped into
    fn set_viewport(&mut self, rect: Rect);

    /// Set the clipping rectangle for subsequent draws and clears
    fn set_scissor(&mut self, rect: Rect);
}
