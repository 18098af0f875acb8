//! Typed view of the feed wire format.
//!
//! The raw serde types mirror the feature collection as served: every field
//! an upstream hiccup could drop is optional. Validation turns each raw
//! feature into an [`Earthquake`] or a counted, logged skip — a malformed
//! record never reaches the encoding stage.

use crate::core::geo::LatLng;
use serde::Deserialize;

/// Top-level feature collection as served by the feed
#[derive(Debug, Clone, Deserialize)]
pub struct FeedCollection {
    #[serde(default)]
    pub features: Vec<FeedFeature>,
}

/// One raw feed feature
#[derive(Debug, Clone, Deserialize)]
pub struct FeedFeature {
    pub id: Option<String>,
    pub geometry: Option<FeedGeometry>,
    #[serde(default)]
    pub properties: FeedProperties,
}

/// Event geometry: `coordinates` is `[lon, lat, depth_km]`
#[derive(Debug, Clone, Deserialize)]
pub struct FeedGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedProperties {
    pub mag: Option<f64>,
    pub title: Option<String>,
    /// Event time in epoch milliseconds
    pub time: Option<i64>,
}

/// A validated earthquake event
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    pub position: LatLng,
    /// Signed depth in kilometers; negative for above-sea-level-adjusted
    /// readings
    pub depth_km: f64,
    pub magnitude: f64,
    /// Descriptive title from the feed, e.g. "M 4.5 - 10km SSW of ..."
    pub title: String,
    /// Event time in epoch milliseconds
    pub time_ms: i64,
}

/// Why a raw feature was rejected during validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("feature has no geometry")]
    MissingGeometry,
    #[error("geometry has {0} coordinates, expected [lon, lat, depth]")]
    ShortCoordinates(usize),
    #[error("position ({0}, {1}) is out of range")]
    PositionOutOfRange(f64, f64),
    #[error("feature has no magnitude")]
    MissingMagnitude,
    #[error("feature has no title")]
    MissingTitle,
    #[error("feature has no timestamp")]
    MissingTime,
}

impl TryFrom<FeedFeature> for Earthquake {
    type Error = RecordError;

    fn try_from(feature: FeedFeature) -> Result<Self, Self::Error> {
        let geometry = feature.geometry.ok_or(RecordError::MissingGeometry)?;
        if geometry.coordinates.len() < 3 {
            return Err(RecordError::ShortCoordinates(geometry.coordinates.len()));
        }
        let (lng, lat, depth_km) = (
            geometry.coordinates[0],
            geometry.coordinates[1],
            geometry.coordinates[2],
        );

        let position = LatLng::new(lat, lng);
        if !position.is_valid() {
            return Err(RecordError::PositionOutOfRange(lat, lng));
        }

        Ok(Self {
            position,
            depth_km,
            magnitude: feature.properties.mag.ok_or(RecordError::MissingMagnitude)?,
            title: feature.properties.title.ok_or(RecordError::MissingTitle)?,
            time_ms: feature.properties.time.ok_or(RecordError::MissingTime)?,
        })
    }
}

impl FeedCollection {
    /// Parses a feed document
    pub fn parse(data: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Validates every raw feature, keeping feed order.
    ///
    /// Returns the surviving events and the number of skipped features;
    /// each skip is logged at warn level.
    pub fn into_events(self) -> (Vec<Earthquake>, usize) {
        let mut events = Vec::with_capacity(self.features.len());
        let mut skipped = 0;

        for feature in self.features {
            let id = feature.id.clone();
            match Earthquake::try_from(feature) {
                Ok(event) => events.push(event),
                Err(reason) => {
                    log::warn!(
                        "skipping feed feature {}: {reason}",
                        id.as_deref().unwrap_or("<unidentified>")
                    );
                    skipped += 1;
                }
            }
        }

        (events, skipped)
    }
}
