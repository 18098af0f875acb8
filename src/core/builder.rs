//! Map builder for fluent surface composition.
//!
//! Declares base-layer choices, overlays, and the initial viewport, then
//! wires the control and lifecycle state in `build()`.

use crate::{
    core::{
        geo::LatLng,
        map::{Map, MapOptions},
    },
    layers::{boundary::BoundaryLayer, group::LayerGroup, tile::TileLayer},
    Result,
};

/// Builder for creating and configuring Map instances
pub struct MapBuilder {
    center: LatLng,
    zoom: f64,
    map_options: MapOptions,
    base_layers: Vec<TileLayer>,
    boundaries: Option<BoundaryLayer>,
    markers: Option<LayerGroup>,
}

impl MapBuilder {
    /// Create a new MapBuilder showing the whole world: center on the
    /// equator at the prime meridian
    pub fn new() -> Self {
        Self {
            center: LatLng::default(),
            zoom: crate::constants::WHOLE_WORLD_ZOOM,
            map_options: MapOptions::default(),
            base_layers: Vec::new(),
            boundaries: None,
            markers: None,
        }
    }

    /// Set the initial center and zoom level
    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Set map options
    pub fn with_map_options(mut self, options: MapOptions) -> Self {
        self.map_options = options;
        self
    }

    /// Add a selectable base layer; the first added starts active
    pub fn with_base_layer(mut self, layer: TileLayer) -> Self {
        self.base_layers.push(layer);
        self
    }

    /// Add the static plate-boundary overlay
    pub fn with_boundaries(mut self, layer: BoundaryLayer) -> Self {
        self.boundaries = Some(layer);
        self
    }

    /// Add the event-marker group; `build()` will attach it and mark the
    /// surface loaded
    pub fn with_markers(mut self, group: LayerGroup) -> Self {
        self.markers = Some(group);
        self
    }

    /// Compose the surface
    pub fn build(self) -> Result<Map> {
        let mut map = Map::with_options(self.center, self.zoom, self.map_options);

        for layer in self.base_layers {
            map.add_base_layer(layer)?;
        }
        if let Some(boundaries) = self.boundaries {
            map.add_overlay(Box::new(boundaries))?;
        }
        if let Some(markers) = self.markers {
            map.load(markers)?;
        }

        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::map::SurfaceState;

    #[test]
    fn test_builder_defaults_to_whole_world_view() {
        let map = MapBuilder::new().build().unwrap();
        assert_eq!(map.viewport().center, LatLng::new(0.0, 0.0));
        assert_eq!(map.viewport().zoom, 3.0);
        assert_eq!(map.state(), SurfaceState::Unloaded);
    }

    #[test]
    fn test_builder_composes_a_loaded_surface() {
        let map = MapBuilder::new()
            .with_base_layer(TileLayer::dark("dark".to_string(), "Dark".to_string(), ""))
            .with_base_layer(TileLayer::satellite(
                "satellite".to_string(),
                "Satellite".to_string(),
                "",
            ))
            .with_markers(LayerGroup::new("quakes", "Earthquakes"))
            .build()
            .unwrap();

        assert!(map.is_loaded());
        assert_eq!(map.control().active_base().unwrap().layer_id, "dark");
        assert_eq!(map.control().base_layers().len(), 2);
        assert!(map.control().is_overlay_active("quakes"));
        assert!(!map.control().is_collapsed());
    }
}
