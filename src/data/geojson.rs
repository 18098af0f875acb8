//! GeoJSON types for the static boundary document.
//!
//! Covers the geometry kinds plate-boundary data carries; the live event
//! feed has its own wire types in [`crate::feed::record`].

use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geometry of one boundary feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

/// One boundary feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root feature collection of a boundary document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parses a GeoJSON document
    pub fn parse(data: &str) -> crate::Result<Self> {
        serde_json::from_str(data)
            .map_err(|e| crate::Error::Parse(format!("invalid GeoJSON: {e}")))
    }
}

impl Geometry {
    /// The line work of this geometry: one path per ring or line string
    pub fn paths(&self) -> Vec<Vec<LatLng>> {
        fn path(coords: &[[f64; 2]]) -> Vec<LatLng> {
            coords.iter().map(|c| LatLng::new(c[1], c[0])).collect()
        }

        match self {
            Geometry::LineString { coordinates } => vec![path(coordinates)],
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|line| path(line)).collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| path(ring)))
                .collect(),
        }
    }

    /// Bounding box of the geometry, if it has any coordinates
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut points = self.paths().into_iter().flatten();
        let first = points.next()?;
        let mut bounds = LatLngBounds::new(first, first);
        for point in points {
            bounds.extend(&point);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY_SAMPLE: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"Name": "EU-AF"},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-24.0, 35.0], [-20.0, 37.0], [-16.0, 36.0]]
                }
            },
            {
                "type": "Feature",
                "properties": {"Name": "ridge segment"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[10.0, -10.0], [12.0, -12.0]], [[14.0, -14.0], [16.0, -16.0]]]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_parse_boundary_document() {
        let collection = FeatureCollection::parse(BOUNDARY_SAMPLE).unwrap();
        assert_eq!(collection.features.len(), 2);

        let first = collection.features[0].geometry.as_ref().unwrap();
        assert_eq!(first.paths(), vec![vec![
            LatLng::new(35.0, -24.0),
            LatLng::new(37.0, -20.0),
            LatLng::new(36.0, -16.0),
        ]]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(FeatureCollection::parse("not geojson").is_err());
    }

    #[test]
    fn test_multi_line_paths_and_bounds() {
        let collection = FeatureCollection::parse(BOUNDARY_SAMPLE).unwrap();
        let geometry = collection.features[1].geometry.as_ref().unwrap();

        assert_eq!(geometry.paths().len(), 2);

        let bounds = geometry.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-16.0, 10.0));
        assert_eq!(bounds.north_east, LatLng::new(-10.0, 16.0));
    }
}
