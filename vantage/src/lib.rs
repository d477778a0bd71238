//! Anchored viewport regions for 3D renderers
//!
//! A [`Viewport`] names a rectangular screen region by an offset/size pair,
//! interpreted in either normalized or pixel units and measured from any of
//! the four surface corners. The crate resolves regions to absolute pixel
//! rectangles for a rendering backend (paired viewport and scissor state),
//! answers pointer containment for picking, maps pointer positions into
//! normalized device coordinates, and persists region state as a stable JSON
//! record.
//!
//! Regions are plain values: nothing is cached, so surface resizes need no
//! notifications. Backends plug in through the [`ViewportTarget`] trait; the
//! companion `vantage-wgpu` crate adapts a live `wgpu::RenderPass`.
//!
//! # Modules
//!
//! - [`viewport`] - the region value type and its geometry queries
//! - [`rect`] - pixel rectangles and surface dimensions
//! - [`data`] - wire records and JSON helpers
//! - [`presets`] - named preset store with file persistence
//! - [`layout`] - split-screen region tables
//! - [`fit`] - stretch/fit/pixel-perfect window fitting
//! - [`target`] - the backend seam

pub mod data;
pub mod fit;
pub mod layout;
pub mod presets;
pub mod rect;
pub mod target;
pub mod test_utils;
pub mod viewport;

// Re-export the region type and its vocabulary
pub use viewport::{Anchor, SizeMode, Viewport};

// Re-export commonly used geometry items
pub use rect::{Rect, SurfaceSize};

// Re-export persistence and layout helpers
pub use data::ViewportData;
pub use fit::{ScaleMode, fit_rect};
pub use layout::SplitLayout;
pub use presets::{PresetError, PresetLibrary};
pub use target::ViewportTarget;
