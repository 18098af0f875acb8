use crate::{
    constants::ZOOM_RESET_RADIUS_M,
    core::{geo::LatLng, viewport::Viewport},
    events::{EventManager, MapEvent},
    layers::{base::Layer, group::LayerGroup, tile::TileLayer},
    ui::controls::LayersControl,
    Result,
};

/// Lifecycle of the display surface.
///
/// The transition is one-way: a successful data load attaches markers and
/// flips the surface to `Loaded`. There is no refresh path; a failed fetch
/// leaves the surface `Unloaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Unloaded,
    Loaded,
}

#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
}

/// The composed display surface: viewport, base layers, overlays, layer
/// control, and lifecycle state.
///
/// Owns every layer it shows. The zoom-driven marker reset runs in here,
/// not through a shared layer-group reference.
pub struct Map {
    viewport: Viewport,
    base_layers: Vec<TileLayer>,
    overlays: Vec<Box<dyn Layer>>,
    control: LayersControl,
    events: EventManager,
    state: SurfaceState,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self::with_options(center, zoom, MapOptions::default())
    }

    pub fn with_options(center: LatLng, zoom: f64, options: MapOptions) -> Self {
        let mut viewport = Viewport::new(center, zoom);
        if let (Some(min), Some(max)) = (options.min_zoom, options.max_zoom) {
            viewport.set_zoom_limits(min, max);
        }

        Self {
            viewport,
            base_layers: Vec::new(),
            overlays: Vec::new(),
            control: LayersControl::new(),
            events: EventManager::new(),
            state: SurfaceState::Unloaded,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == SurfaceState::Loaded
    }

    pub fn control(&self) -> &LayersControl {
        &self.control
    }

    /// Adds a selectable base layer; the first added becomes the active one
    pub fn add_base_layer(&mut self, layer: TileLayer) -> Result<()> {
        self.ensure_unique_id(layer.id())?;
        self.control.add_base_layer(layer.id(), layer.name());
        self.events.emit(MapEvent::LayerAdded {
            layer_id: layer.id().to_string(),
        });
        self.base_layers.push(layer);
        Ok(())
    }

    /// Adds a toggleable overlay, active by default
    pub fn add_overlay(&mut self, layer: Box<dyn Layer>) -> Result<()> {
        self.ensure_unique_id(layer.id())?;
        self.control.add_overlay(layer.id(), layer.name());
        self.events.emit(MapEvent::LayerAdded {
            layer_id: layer.id().to_string(),
        });
        self.overlays.push(layer);
        Ok(())
    }

    /// Removes an overlay and its control entry
    pub fn remove_overlay(&mut self, layer_id: &str) -> Option<Box<dyn Layer>> {
        let index = self.overlays.iter().position(|l| l.id() == layer_id)?;
        let layer = self.overlays.remove(index);
        self.control.remove_overlay(layer_id);
        self.events.emit(MapEvent::LayerRemoved {
            layer_id: layer_id.to_string(),
        });
        Some(layer)
    }

    /// Attaches the event-marker group and flips the surface to `Loaded`.
    ///
    /// Errors if the surface is already loaded; the state machine has no
    /// reload transition.
    pub fn load(&mut self, markers: LayerGroup) -> Result<()> {
        if self.is_loaded() {
            return Err(crate::Error::Layer(
                "surface is already loaded".to_string(),
            ));
        }

        let count = markers.len();
        self.add_overlay(Box::new(markers))?;
        self.state = SurfaceState::Loaded;
        self.events.emit(MapEvent::SurfaceLoaded { markers: count });
        log::info!("surface loaded with {count} event markers");
        Ok(())
    }

    /// Activates one base layer, deactivating the rest
    pub fn select_base_layer(&mut self, layer_id: &str) -> bool {
        let changed = self.control.select_base(layer_id);
        if changed {
            self.events.emit(MapEvent::BaseLayerChanged {
                layer_id: layer_id.to_string(),
            });
        }
        changed
    }

    /// Flips one overlay on or off; returns its new state
    pub fn toggle_overlay(&mut self, layer_id: &str) -> Option<bool> {
        let active = self.control.toggle_overlay(layer_id)?;
        if let Some(layer) = self.overlays.iter_mut().find(|l| l.id() == layer_id) {
            layer.set_visible(active);
        }
        self.events.emit(MapEvent::OverlayToggled {
            layer_id: layer_id.to_string(),
            active,
        });
        Some(active)
    }

    /// Moves the view; a zoom-level change goes through the reset policy
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        let moved = self.viewport.center != center;
        self.viewport.set_center(center);
        let zoomed = self.apply_zoom(zoom);

        if moved || zoomed {
            self.events.emit(MapEvent::ViewChanged {
                center: self.viewport.center,
                zoom: self.viewport.zoom,
            });
        }
    }

    /// Changes the zoom level
    pub fn zoom_to(&mut self, zoom: f64) {
        self.apply_zoom(zoom);
    }

    /// Applies a zoom change; on an actual level change every marker in
    /// every marker group is flattened to the reset radius.
    fn apply_zoom(&mut self, zoom: f64) -> bool {
        if !self.viewport.set_zoom(zoom) {
            return false;
        }

        self.reset_marker_radii();
        self.events.emit(MapEvent::ZoomEnd {
            zoom: self.viewport.zoom,
        });
        true
    }

    fn reset_marker_radii(&mut self) {
        for overlay in &mut self.overlays {
            if let Some(group) = overlay.as_any_mut().downcast_mut::<LayerGroup>() {
                group.set_uniform_radius(ZOOM_RESET_RADIUS_M);
                log::debug!(
                    "reset {} markers in '{}' to {} m",
                    group.len(),
                    group.id(),
                    ZOOM_RESET_RADIUS_M
                );
            }
        }
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    /// All overlays in insertion order
    pub fn overlays(&self) -> Vec<&dyn Layer> {
        self.overlays.iter().map(|l| l.as_ref()).collect()
    }

    /// Gets an overlay marker group by ID
    pub fn marker_group(&self, layer_id: &str) -> Option<&LayerGroup> {
        self.overlays
            .iter()
            .find(|l| l.id() == layer_id)
            .and_then(|l| l.as_any().downcast_ref::<LayerGroup>())
    }

    /// Applies a function to a specific overlay mutably
    pub fn with_overlay_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn Layer) -> R,
    {
        self.overlays
            .iter_mut()
            .find(|l| l.id() == layer_id)
            .map(|layer| f(layer.as_mut()))
    }

    /// Lists all layer IDs, base layers first
    pub fn layer_ids(&self) -> Vec<String> {
        self.base_layers
            .iter()
            .map(|l| l.id().to_string())
            .chain(self.overlays.iter().map(|l| l.id().to_string()))
            .collect()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.events.on(event_type, callback);
    }

    /// Process all queued events
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.events.process_events()
    }

    fn ensure_unique_id(&self, layer_id: &str) -> Result<()> {
        if self.layer_ids().iter().any(|id| id == layer_id) {
            return Err(crate::Error::Layer(format!(
                "layer id '{layer_id}' is already on the surface"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::marker::CircleMarker;

    fn map_with_markers(radii: &[f64]) -> Map {
        let mut group = LayerGroup::new("quakes", "Earthquakes");
        for radius in radii {
            group.add(CircleMarker::new(LatLng::default(), *radius));
        }

        let mut map = Map::new(LatLng::default(), 3.0);
        map.load(group).unwrap();
        map
    }

    #[test]
    fn test_zoom_change_flattens_marker_radii() {
        let mut map = map_with_markers(&[450_000.0, 120_000.0]);
        map.zoom_to(5.0);

        let group = map.marker_group("quakes").unwrap();
        assert!(group.markers().iter().all(|m| m.radius_m() == 20_000.0));
    }

    #[test]
    fn test_unchanged_zoom_keeps_radii() {
        let mut map = map_with_markers(&[450_000.0]);
        map.zoom_to(3.0); // already at 3

        let group = map.marker_group("quakes").unwrap();
        assert_eq!(group.markers()[0].radius_m(), 450_000.0);
    }

    #[test]
    fn test_set_view_triggers_the_same_reset() {
        let mut map = map_with_markers(&[450_000.0]);
        map.set_view(LatLng::new(10.0, 10.0), 4.0);

        let group = map.marker_group("quakes").unwrap();
        assert_eq!(group.markers()[0].radius_m(), 20_000.0);
        assert_eq!(map.viewport().center, LatLng::new(10.0, 10.0));
    }

    #[test]
    fn test_load_is_one_way() {
        let mut map = map_with_markers(&[]);
        assert!(map.is_loaded());
        assert!(map.load(LayerGroup::new("more", "More")).is_err());
    }

    #[test]
    fn test_surface_starts_unloaded() {
        let map = Map::new(LatLng::default(), 3.0);
        assert_eq!(map.state(), SurfaceState::Unloaded);
        assert!(map.overlays().is_empty());
    }

    #[test]
    fn test_duplicate_layer_ids_are_rejected() {
        let mut map = Map::new(LatLng::default(), 3.0);
        map.add_base_layer(TileLayer::dark("dark".to_string(), "Dark".to_string(), ""))
            .unwrap();
        let again = TileLayer::dark("dark".to_string(), "Dark".to_string(), "");
        assert!(map.add_base_layer(again).is_err());
    }

    #[test]
    fn test_toggle_overlay_syncs_visibility() {
        let mut map = map_with_markers(&[100.0]);
        assert_eq!(map.toggle_overlay("quakes"), Some(false));
        assert!(!map.marker_group("quakes").unwrap().is_visible());
        assert!(!map.control().is_overlay_active("quakes"));

        assert_eq!(map.toggle_overlay("quakes"), Some(true));
        assert!(map.marker_group("quakes").unwrap().is_visible());
    }

    #[test]
    fn test_zoom_emits_zoomend_once_processed() {
        let mut map = map_with_markers(&[100.0]);
        map.process_events(); // drain layer/load events
        map.zoom_to(6.0);

        let events = map.process_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, MapEvent::ZoomEnd { zoom } if *zoom == 6.0)));
    }

    #[test]
    fn test_remove_overlay_drops_control_entry() {
        let mut map = map_with_markers(&[100.0]);
        assert!(map.remove_overlay("quakes").is_some());
        assert!(map.marker_group("quakes").is_none());
        assert!(map.control().overlays().is_empty());
        assert!(map.remove_overlay("quakes").is_none());
    }
}
