use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::geojson::FeatureCollection;
use crate::encode::color::Color;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use serde::{Deserialize, Serialize};

/// Stroke style for boundary line work
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke_color: Color,
    pub stroke_width: f32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(0x33, 0x88, 0xff),
            stroke_width: 3.0,
        }
    }
}

/// Static tectonic plate edges drawn atop the base layer.
///
/// The document is consumed as-is: geometry is assumed valid and is not
/// derived from the live feed.
pub struct BoundaryLayer {
    properties: LayerProperties,
    collection: FeatureCollection,
    style: PathStyle,
}

impl BoundaryLayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, collection: FeatureCollection) -> Self {
        Self {
            properties: LayerProperties::new(id.into(), name.into(), LayerKind::Boundary),
            collection,
            style: PathStyle::default(),
        }
    }

    /// Parses a boundary layer from a GeoJSON document
    pub fn from_geojson_str(
        id: impl Into<String>,
        name: impl Into<String>,
        data: &str,
    ) -> crate::Result<Self> {
        Ok(Self::new(id, name, FeatureCollection::parse(data)?))
    }

    /// Reads and parses a boundary document from disk
    pub fn from_geojson_file(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl AsRef<std::path::Path>,
    ) -> crate::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_geojson_str(id, name, &data)
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    pub fn feature_count(&self) -> usize {
        self.collection.features.len()
    }

    /// All line work in the document, one path per ring or line string
    pub fn paths(&self) -> Vec<Vec<LatLng>> {
        self.collection
            .features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .flat_map(|geometry| geometry.paths())
            .collect()
    }

    /// Bounding box of every feature in the document
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for feature in &self.collection.features {
            if let Some(geom_bounds) = feature.geometry.as_ref().and_then(|g| g.bounds()) {
                match bounds.as_mut() {
                    Some(b) => {
                        b.extend(&geom_bounds.south_west);
                        b.extend(&geom_bounds.north_east);
                    }
                    None => bounds = Some(geom_bounds),
                }
            }
        }
        bounds
    }
}

impl Layer for BoundaryLayer {
    crate::impl_layer!(BoundaryLayer, properties);
}
