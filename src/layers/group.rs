use crate::core::geo::LatLngBounds;
use crate::encode::VisualEncoding;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use crate::layers::marker::CircleMarker;

/// A named collection of circle markers toggled as one unit.
///
/// Marker order follows insertion order; it carries no z-order meaning.
pub struct LayerGroup {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl LayerGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            properties: LayerProperties::new(id.into(), name.into(), LayerKind::MarkerGroup),
            markers: Vec::new(),
        }
    }

    /// Builds a group with one marker per encoding, in encoding order
    pub fn from_encodings(
        id: impl Into<String>,
        name: impl Into<String>,
        encodings: &[VisualEncoding],
    ) -> Self {
        let mut group = Self::new(id, name);
        group
            .markers
            .extend(encodings.iter().map(CircleMarker::from_encoding));
        group
    }

    pub fn add(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Applies a function to each marker mutably
    pub fn for_each_marker_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut CircleMarker),
    {
        for marker in &mut self.markers {
            f(marker);
        }
    }

    /// Flattens every marker to the same radius, discarding per-event radii
    pub fn set_uniform_radius(&mut self, radius_m: f64) {
        self.for_each_marker_mut(|marker| marker.set_radius_m(radius_m));
    }

    /// Bounding box of all marker positions
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let first = self.markers.first()?.position();
        let mut bounds = LatLngBounds::new(first, first);
        for marker in self.markers.iter().skip(1) {
            bounds.extend(&marker.position());
        }
        Some(bounds)
    }
}

impl Layer for LayerGroup {
    crate::impl_layer!(LayerGroup, properties);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn group_of(radii: &[f64]) -> LayerGroup {
        let mut group = LayerGroup::new("quakes", "Earthquakes");
        for (i, radius) in radii.iter().enumerate() {
            group.add(CircleMarker::new(LatLng::new(i as f64, i as f64), *radius));
        }
        group
    }

    #[test]
    fn test_uniform_radius_flattens_every_marker() {
        let mut group = group_of(&[450_000.0, 120_000.0, 880_000.0]);
        group.set_uniform_radius(20_000.0);

        assert!(group.markers().iter().all(|m| m.radius_m() == 20_000.0));
    }

    #[test]
    fn test_group_is_a_toggleable_layer() {
        let mut group = group_of(&[100.0]);
        assert_eq!(group.id(), "quakes");
        assert_eq!(group.kind(), LayerKind::MarkerGroup);
        assert!(group.is_visible());

        group.set_visible(false);
        assert!(!group.is_visible());
    }

    #[test]
    fn test_bounds_cover_all_markers() {
        let group = group_of(&[1.0, 1.0, 1.0]);
        let bounds = group.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(0.0, 0.0));
        assert_eq!(bounds.north_east, LatLng::new(2.0, 2.0));

        assert!(group_of(&[]).bounds().is_none());
    }
}
