//! Snapshot types produced by a window query.

use serde::{Deserialize, Serialize};

/// CoreGraphics window identifier (`kCGWindowNumber`).
///
/// Unique among currently-open windows, but not stable across a window being
/// closed and reopened.
pub type WindowId = u32;

/// Window geometry in global display points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, non-negative.
    pub width: f64,
    /// Height, non-negative.
    pub height: f64,
}

impl Bounds {
    /// Window area in square points.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A snapshot of one window at query time.
///
/// Records are constructed fresh on every query and never cached across
/// queries; by the time a caller acts on one, the window may already be gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    /// CoreGraphics window id.
    pub id: WindowId,
    /// Name of the owning application process.
    pub owner_name: String,
    /// Process id of the owning application; keys the bundle-id lookup.
    pub owner_pid: i32,
    /// Window title, possibly empty.
    #[serde(default)]
    pub title: String,
    /// On-screen geometry.
    pub bounds: Bounds,
    /// Stacking order; lower is closer to the user.
    pub layer: i32,
    /// False for minimized or otherwise hidden windows.
    pub is_on_screen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_payload() {
        let payload = r#"[{
            "id": 4211,
            "owner_name": "MetalShaderStudio",
            "owner_pid": 998,
            "title": "Untitled.metal",
            "bounds": {"x": 0, "y": 25, "width": 1280, "height": 775},
            "layer": 0,
            "is_on_screen": true
        }]"#;
        let records: Vec<WindowRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(records.len(), 1);
        let w = &records[0];
        assert_eq!(w.id, 4211);
        assert_eq!(w.owner_name, "MetalShaderStudio");
        assert_eq!(w.bounds.area(), 1280.0 * 775.0);
        assert!(w.is_on_screen);
    }

    #[test]
    fn missing_title_defaults_to_empty() {
        let payload = r#"[{
            "id": 7,
            "owner_name": "Dock",
            "owner_pid": 120,
            "bounds": {"x": 0, "y": 0, "width": 10, "height": 10},
            "layer": 20,
            "is_on_screen": true
        }]"#;
        let records: Vec<WindowRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(records[0].title, "");
    }
}
