//! Scale-mode fitting of fixed-resolution content into a window
//!
//! When a render target and the window disagree on size, the blit placement
//! follows one of three rules: stretch to fill, aspect-preserving fit, or
//! integer pixel-perfect scaling. [`fit_rect`] computes the placement
//! rectangle; feed it to an absolute-mode viewport or convert it for a
//! backend directly.

use serde::{Deserialize, Serialize};

use crate::rect::{Rect, SurfaceSize};

/// Scaling mode for placing content into a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Stretch to fill the window, ignoring aspect ratio
    Stretch,
    /// Keep aspect ratio and fill as much of the window as possible,
    /// centering with letterbox or pillarbox bars
    Fit,
    /// Integer scaling for pixel-perfect output; centered, may leave bars on
    /// all sides
    #[default]
    PixelPerfect,
}

/// Compute where `content` lands inside `window` under `mode`.
///
/// The result is a top-left-origin pixel rectangle. [`ScaleMode::PixelPerfect`]
/// never scales below 1x, so a window smaller than the content yields a
/// rectangle extending past the window edges.
pub fn fit_rect(mode: ScaleMode, content: SurfaceSize, window: SurfaceSize) -> Rect {
    match mode {
        ScaleMode::Stretch => Rect::new(0.0, 0.0, window.width, window.height),
        ScaleMode::Fit => {
            let scale_x = window.width / content.width;
            let scale_y = window.height / content.height;
            centered(content, window, scale_x.min(scale_y))
        }
        ScaleMode::PixelPerfect => {
            // Largest integer scale that fits both dimensions
            let scale_x = (window.width / content.width).floor();
            let scale_y = (window.height / content.height).floor();
            let scale = scale_x.min(scale_y).max(1.0); // At least 1x
            centered(content, window, scale)
        }
    }
}

/// Scale content and center it in the window (letterbox/pillarbox)
fn centered(content: SurfaceSize, window: SurfaceSize, scale: f32) -> Rect {
    let width = content.width * scale;
    let height = content.height * scale;
    Rect::new(
        (window.width - width) / 2.0,
        (window.height - height) / 2.0,
        width,
        height,
    )
}
