//! Surface lifecycle events and the listener registry.
//!
//! Listeners observe the surface; they never mutate it. Mutating policies
//! (like the zoom-driven marker reset) live inside [`crate::Map`] itself.

use crate::core::geo::LatLng;
use std::collections::{HashMap, VecDeque};

/// Map event types that can be emitted by the surface
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Map view has changed (center or zoom)
    ViewChanged { center: LatLng, zoom: f64 },
    /// Zoom level change finished
    ZoomEnd { zoom: f64 },
    /// Layer was added to the map
    LayerAdded { layer_id: String },
    /// Layer was removed from the map
    LayerRemoved { layer_id: String },
    /// Active base layer was changed
    BaseLayerChanged { layer_id: String },
    /// Overlay was toggled on or off
    OverlayToggled { layer_id: String, active: bool },
    /// Markers and controls are attached; the surface is usable
    SurfaceLoaded { markers: usize },
}

impl MapEvent {
    /// Listener registry key for this event, Leaflet-style
    pub fn event_type(&self) -> &'static str {
        match self {
            MapEvent::ViewChanged { .. } => "viewchanged",
            MapEvent::ZoomEnd { .. } => "zoomend",
            MapEvent::LayerAdded { .. } => "layeradd",
            MapEvent::LayerRemoved { .. } => "layerremove",
            MapEvent::BaseLayerChanged { .. } => "baselayerchange",
            MapEvent::OverlayToggled { .. } => "overlaytoggle",
            MapEvent::SurfaceLoaded { .. } => "load",
        }
    }
}

/// Callback type for event listeners
pub type EventCallback = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// Manages event listeners and dispatching
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type
    listeners: HashMap<String, Vec<EventCallback>>,
    /// Event queue for processing
    event_queue: VecDeque<MapEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events, notifying listeners in registration order
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(event.event_type()) {
                for callback in callbacks {
                    callback(event);
                }
            }
        }

        events
    }

    /// Clear all events from the queue
    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }

    /// Get number of pending events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_listener_receives_matching_events() {
        let mut manager = EventManager::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        manager.on("zoomend", move |event| {
            assert!(matches!(event, MapEvent::ZoomEnd { .. }));
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.emit(MapEvent::ZoomEnd { zoom: 5.0 });
        manager.emit(MapEvent::ViewChanged {
            center: LatLng::default(),
            zoom: 5.0,
        });

        let processed = manager.process_events();
        assert_eq!(processed.len(), 2);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(manager.pending_events(), 0);
    }

    #[test]
    fn test_clear_events_drops_queue() {
        let mut manager = EventManager::new();
        manager.emit(MapEvent::LayerAdded {
            layer_id: "markers".to_string(),
        });
        assert_eq!(manager.pending_events(), 1);

        manager.clear_events();
        assert!(manager.process_events().is_empty());
    }
}
