use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Manages the current view of the map: center and zoom level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    /// Restricts the zoom range and re-clamps the current level
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Moves the view center
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    /// Sets the zoom level, clamped to the allowed range.
    /// Returns whether the level actually changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if clamped == self.zoom {
            return false;
        }
        self.zoom = clamped;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::default(), crate::constants::WHOLE_WORLD_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(LatLng::new(10.0, 20.0), 5.0);
        assert_eq!(viewport.center, LatLng::new(10.0, 20.0));
        assert_eq!(viewport.zoom, 5.0);
    }

    #[test]
    fn test_zoom_clamped_to_limits() {
        let mut viewport = Viewport::new(LatLng::default(), 25.0);
        assert_eq!(viewport.zoom, 18.0);

        viewport.set_zoom_limits(2.0, 10.0);
        assert!(!viewport.set_zoom(12.0)); // clamps back to 10, no change
        assert_eq!(viewport.zoom, 10.0);
    }

    #[test]
    fn test_set_zoom_reports_change() {
        let mut viewport = Viewport::default();
        assert_eq!(viewport.zoom, 3.0);
        assert!(viewport.set_zoom(5.0));
        assert!(!viewport.set_zoom(5.0));
    }
}
