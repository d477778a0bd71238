//! Shared test utilities for integration and unit tests

use crate::rect::Rect;
use crate::target::ViewportTarget;

/// Test backend that records every rectangle it receives
#[derive(Debug, Default)]
pub struct TestTarget {
    /// Viewport rectangles in application order
    pub viewports: Vec<Rect>,
    /// Scissor rectangles in application order
    pub scissors: Vec<Rect>,
}

impl TestTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently applied viewport rectangle
    pub fn last_viewport(&self) -> Option<Rect> {
        self.viewports.last().copied()
    }

    /// Most recently applied scissor rectangle
    pub fn last_scissor(&self) -> Option<Rect> {
        self.scissors.last().copied()
    }
}

impl ViewportTarget for TestTarget {
    fn set_viewport(&mut self, rect: Rect) {
        self.viewports.push(rect);
    }

    fn set_scissor(&mut self, rect: Rect) {
        self.scissors.push(rect);
    }
}
