//! Wire format for viewport state
//!
//! [`ViewportData`] is the flat record a [`Viewport`] serializes to: offset
//! and size as two-element arrays, mode and anchor as their numeric codes
//! (200/201 for size modes, 301-304 for anchors). The codes are frozen;
//! persisted scenes depend on them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::viewport::{Anchor, SizeMode, Viewport};

/// Serializable viewport record.
///
/// Mode and anchor are raw codes rather than the typed enums so that
/// out-of-range values found in stored data survive a round-trip untouched.
/// The typed model normalizes unknown codes to the defaults, but only at the
/// point a record is applied to a [`Viewport`].
///
/// Every field carries a default matching [`Viewport::default`], so partial
/// records deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportData {
    /// Offset as `[x, y]`
    #[serde(default = "default_offset")]
    pub offset: [f32; 2],
    /// Size as `[x, y]`
    #[serde(default = "default_size")]
    pub size: [f32; 2],
    /// [`SizeMode`] wire code
    #[serde(default = "default_mode")]
    pub mode: u32,
    /// [`Anchor`] wire code
    #[serde(default = "default_anchor")]
    pub anchor: u32,
}

fn default_offset() -> [f32; 2] {
    [0.0, 0.0]
}

fn default_size() -> [f32; 2] {
    [1.0, 1.0]
}

fn default_mode() -> u32 {
    SizeMode::Relative as u32
}

fn default_anchor() -> u32 {
    Anchor::TopLeft as u32
}

impl Default for ViewportData {
    fn default() -> Self {
        Viewport::default().to_data()
    }
}

impl ViewportData {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Viewport {
    /// Snapshot the configuration as a wire record.
    ///
    /// Only offset, size, mode and anchor are captured; resolved rectangles
    /// are derived state and never persisted.
    pub fn to_data(&self) -> ViewportData {
        ViewportData {
            offset: self.offset.to_array(),
            size: self.size.to_array(),
            mode: self.mode as u32,
            anchor: self.anchor as u32,
        }
    }

    /// Overwrite offset, size, mode and anchor from a wire record.
    ///
    /// Values are taken as stored, without range checks; unknown mode and
    /// anchor codes fall back to the defaults.
    pub fn apply_data(&mut self, data: &ViewportData) {
        self.offset = Vec2::from_array(data.offset);
        self.size = Vec2::from_array(data.size);
        self.mode = SizeMode::from_u32(data.mode);
        self.anchor = Anchor::from_u32(data.anchor);
    }

    /// Construct a viewport from a wire record
    pub fn from_data(data: &ViewportData) -> Self {
        let mut viewport = Viewport::default();
        viewport.apply_data(data);
        viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let mut vp = Viewport::default();
        vp.offset = Vec2::new(0.25, 0.5);
        vp.size = Vec2::new(0.5, 0.5);
        vp.mode = SizeMode::Relative;
        vp.anchor = Anchor::BottomRight;

        let value = serde_json::to_value(vp.to_data()).unwrap();
        assert_eq!(
            value,
            json!({
                "offset": [0.25, 0.5],
                "size": [0.5, 0.5],
                "mode": 200,
                "anchor": 304,
            })
        );
    }

    #[test]
    fn test_round_trip_preserves_viewport() {
        let mut vp = Viewport::default();
        vp.offset = Vec2::new(16.0, 24.0);
        vp.size = Vec2::new(320.0, 180.0);
        vp.mode = SizeMode::Absolute;
        vp.anchor = Anchor::TopRight;

        let json = vp.to_data().to_json().unwrap();
        let restored = Viewport::from_data(&ViewportData::from_json(&json).unwrap());
        assert_eq!(restored, vp);
    }

    #[test]
    fn test_default_data_matches_default_viewport() {
        let data = ViewportData::default();
        assert_eq!(data.offset, [0.0, 0.0]);
        assert_eq!(data.size, [1.0, 1.0]);
        assert_eq!(data.mode, 200);
        assert_eq!(data.anchor, 301);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let data = ViewportData::from_json(r#"{"size": [0.5, 1.0]}"#).unwrap();
        assert_eq!(data.offset, [0.0, 0.0]);
        assert_eq!(data.size, [0.5, 1.0]);
        assert_eq!(data.mode, 200);
        assert_eq!(data.anchor, 301);

        let empty = ViewportData::from_json("{}").unwrap();
        assert_eq!(empty, ViewportData::default());
    }

    #[test]
    fn test_unknown_codes_survive_raw_round_trip() {
        // The record carries codes verbatim even when they are out of range
        let data = ViewportData {
            offset: [0.0, 0.0],
            size: [1.0, 1.0],
            mode: 999,
            anchor: 42,
        };
        let restored = ViewportData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(restored.mode, 999);
        assert_eq!(restored.anchor, 42);
    }

    #[test]
    fn test_unknown_codes_normalize_when_applied() {
        let data = ViewportData {
            offset: [0.1, 0.1],
            size: [0.8, 0.8],
            mode: 999,
            anchor: 42,
        };
        let vp = Viewport::from_data(&data);
        assert_eq!(vp.mode, SizeMode::Relative);
        assert_eq!(vp.anchor, Anchor::TopLeft);
        assert_eq!(vp.offset, Vec2::new(0.1, 0.1));
    }

    #[test]
    fn test_apply_data_overwrites_all_fields() {
        let mut vp = Viewport {
            offset: Vec2::new(5.0, 5.0),
            size: Vec2::new(9.0, 9.0),
            mode: SizeMode::Absolute,
            anchor: Anchor::BottomLeft,
        };
        vp.apply_data(&ViewportData::default());
        assert_eq!(vp, Viewport::default());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(ViewportData::from_json("not json").is_err());
        assert!(ViewportData::from_json(r#"{"mode": "relative"}"#).is_err());
        assert!(ViewportData::from_json(r#"{"offset": [1.0]}"#).is_err());
    }

    #[test]
    fn test_negative_values_pass_through() {
        // The record layer does not validate; geometry degrades at use time
        let data = ViewportData {
            offset: [-10.0, -20.0],
            size: [-1.0, 0.0],
            mode: 201,
            anchor: 301,
        };
        let restored = ViewportData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(restored, data);

        let vp = Viewport::from_data(&restored);
        assert!(!vp.is_valid());
    }
}
