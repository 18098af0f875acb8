//! The user-facing layer-selection control.
//!
//! Base layers behave like a radio group — exactly one active at a time.
//! Overlays toggle independently and start active. The control is always
//! expanded.

/// Entry in the layer-selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEntry {
    pub layer_id: String,
    pub label: String,
    pub active: bool,
}

impl ControlEntry {
    fn new(layer_id: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        Self {
            layer_id: layer_id.into(),
            label: label.into(),
            active,
        }
    }
}

/// Layer-selection control state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayersControl {
    base_layers: Vec<ControlEntry>,
    overlays: Vec<ControlEntry>,
}

impl LayersControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a base-layer choice; the first registered becomes active
    pub fn add_base_layer(&mut self, layer_id: impl Into<String>, label: impl Into<String>) {
        let active = self.base_layers.is_empty();
        self.base_layers
            .push(ControlEntry::new(layer_id, label, active));
    }

    /// Registers an overlay choice, active by default
    pub fn add_overlay(&mut self, layer_id: impl Into<String>, label: impl Into<String>) {
        self.overlays.push(ControlEntry::new(layer_id, label, true));
    }

    /// Removes an overlay entry
    pub fn remove_overlay(&mut self, layer_id: &str) {
        self.overlays.retain(|entry| entry.layer_id != layer_id);
    }

    /// Activates one base layer, deactivating the rest.
    /// Returns whether the selection changed.
    pub fn select_base(&mut self, layer_id: &str) -> bool {
        if !self.base_layers.iter().any(|e| e.layer_id == layer_id) {
            return false;
        }
        let mut changed = false;
        for entry in &mut self.base_layers {
            let active = entry.layer_id == layer_id;
            if entry.active != active {
                entry.active = active;
                changed = true;
            }
        }
        changed
    }

    /// Flips one overlay; returns its new state, or None for an unknown id
    pub fn toggle_overlay(&mut self, layer_id: &str) -> Option<bool> {
        let entry = self
            .overlays
            .iter_mut()
            .find(|e| e.layer_id == layer_id)?;
        entry.active = !entry.active;
        Some(entry.active)
    }

    pub fn active_base(&self) -> Option<&ControlEntry> {
        self.base_layers.iter().find(|e| e.active)
    }

    pub fn is_overlay_active(&self, layer_id: &str) -> bool {
        self.overlays
            .iter()
            .any(|e| e.layer_id == layer_id && e.active)
    }

    pub fn base_layers(&self) -> &[ControlEntry] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[ControlEntry] {
        &self.overlays
    }

    /// The control is always shown expanded
    pub fn is_collapsed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> LayersControl {
        let mut control = LayersControl::new();
        control.add_base_layer("dark", "Dark");
        control.add_base_layer("satellite", "Satellite");
        control.add_overlay("quakes", "Earthquakes");
        control.add_overlay("plates", "Tectonic Plates");
        control
    }

    #[test]
    fn test_first_base_layer_starts_active() {
        let control = control();
        assert_eq!(control.active_base().unwrap().layer_id, "dark");
        assert_eq!(
            control.base_layers().iter().filter(|e| e.active).count(),
            1
        );
    }

    #[test]
    fn test_base_selection_is_exclusive() {
        let mut control = control();
        assert!(control.select_base("satellite"));
        assert_eq!(control.active_base().unwrap().layer_id, "satellite");
        assert_eq!(
            control.base_layers().iter().filter(|e| e.active).count(),
            1
        );

        // re-selecting the active layer changes nothing
        assert!(!control.select_base("satellite"));
        // unknown ids leave the selection alone
        assert!(!control.select_base("missing"));
        assert_eq!(control.active_base().unwrap().layer_id, "satellite");
    }

    #[test]
    fn test_overlays_toggle_independently() {
        let mut control = control();
        assert!(control.is_overlay_active("quakes"));
        assert!(control.is_overlay_active("plates"));

        assert_eq!(control.toggle_overlay("plates"), Some(false));
        assert!(control.is_overlay_active("quakes"));
        assert!(!control.is_overlay_active("plates"));

        assert_eq!(control.toggle_overlay("plates"), Some(true));
        assert_eq!(control.toggle_overlay("missing"), None);
    }

    #[test]
    fn test_control_is_always_expanded() {
        assert!(!control().is_collapsed());
    }
}
