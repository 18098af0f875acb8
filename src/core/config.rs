//! Runtime configuration for composing the surface.
//!
//! The access token is carried through to the tile layers as-is; this crate
//! never validates it against the tile provider.

use crate::core::geo::LatLng;
use crate::feed::client::USGS_ALL_DAY_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the earthquake feed URL.
pub const FEED_URL_VAR: &str = "QUAKEMAP_FEED_URL";
/// Environment variable holding the tile provider access token.
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";
/// Environment variable pointing at a plate-boundary GeoJSON file.
pub const PLATES_FILE_VAR: &str = "QUAKEMAP_PLATES_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// URL of the earthquake feature-collection feed
    pub feed_url: String,
    /// Static access token for the base-layer tile provider
    pub access_token: String,
    /// Initial view center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: f64,
    /// Optional plate-boundary GeoJSON document to overlay
    pub plates_file: Option<PathBuf>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            feed_url: USGS_ALL_DAY_URL.to_string(),
            access_token: String::new(),
            center: LatLng::default(),
            zoom: crate::constants::WHOLE_WORLD_ZOOM,
            plates_file: None,
        }
    }
}

impl MapConfig {
    /// Builds a configuration from the environment, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(FEED_URL_VAR) {
            config.feed_url = url;
        }
        if let Ok(token) = std::env::var(ACCESS_TOKEN_VAR) {
            config.access_token = token;
        }
        if let Ok(path) = std::env::var(PLATES_FILE_VAR) {
            config.plates_file = Some(PathBuf::from(path));
        }
        config
    }
}
