//! Pixel rectangles and drawing surface dimensions

/// Axis-aligned rectangle in surface pixels.
///
/// Carries no vertical convention of its own: producers state whether `y` is
/// measured from the top or the bottom edge, and [`Rect::flip_y`] converts
/// between the two. Fractional coordinates are allowed; backends that need
/// whole pixels round at the last step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the origin corner (pixels from the left edge)
    pub x: f32,
    /// Y coordinate of the origin corner (convention set by the producer)
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Re-measure `y` from the opposite surface edge.
    ///
    /// Converts a top-left-origin rectangle to bottom-left origin and back;
    /// applying it twice with the same height returns the original rectangle.
    #[inline]
    pub fn flip_y(self, surface_height: f32) -> Self {
        Self {
            y: surface_height - self.y - self.height,
            ..self
        }
    }

    /// Check if the rectangle has positive extent on both axes
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Drawing surface dimensions in pixels.
///
/// Passed into every resolve call so viewports always see the current size;
/// nothing in this crate caches it across resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Surface width in pixels
    pub width: f32,
    /// Surface height in pixels
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Calculate aspect ratio (width / height)
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0.0 {
            1.0 // Avoid division by zero
        } else {
            self.width / self.height
        }
    }
}

impl From<(u32, u32)> for SurfaceSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

impl From<(f32, f32)> for SurfaceSize {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}
