use crate::constants::{MAX_TILE_ZOOM, TILE_SIZE};
use crate::core::geo::TileCoord;
use crate::layers::base::{Layer, LayerKind, LayerProperties};
use serde::{Deserialize, Serialize};

/// URL template for Mapbox styled tiles
pub const MAPBOX_STYLE_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

/// Attribution for the stock base layers
const MAPBOX_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> Hugo Ahlenius, Nordpil and Peter Bird, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

/// Configuration for a tile layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayerOptions {
    /// URL template with `{id}`, `{z}`, `{x}`, `{y}` and `{accessToken}`
    /// placeholders
    pub url_template: String,
    /// Provider style identifier substituted for `{id}`
    pub style_id: String,
    /// Attribution text
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Static access token substituted for `{accessToken}`; carried, not
    /// validated
    pub access_token: String,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: MAPBOX_STYLE_URL_TEMPLATE.to_string(),
            style_id: "dark-v10".to_string(),
            attribution: MAPBOX_ATTRIBUTION.to_string(),
            tile_size: TILE_SIZE,
            min_zoom: 0,
            max_zoom: MAX_TILE_ZOOM,
            access_token: String::new(),
        }
    }
}

/// A background tile set choice
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    /// Create a tile layer with custom options
    pub fn with_options(id: String, name: String, options: TileLayerOptions) -> Self {
        let properties = LayerProperties::new(id, name, LayerKind::Tile);
        Self {
            properties,
            options,
        }
    }

    /// Create the dark styled base layer
    pub fn dark(id: String, name: String, access_token: &str) -> Self {
        let options = TileLayerOptions {
            style_id: "dark-v10".to_string(),
            access_token: access_token.to_string(),
            ..TileLayerOptions::default()
        };
        Self::with_options(id, name, options)
    }

    /// Create the satellite imagery base layer
    pub fn satellite(id: String, name: String, access_token: &str) -> Self {
        let options = TileLayerOptions {
            style_id: "satellite-v9".to_string(),
            access_token: access_token.to_string(),
            ..TileLayerOptions::default()
        };
        Self::with_options(id, name, options)
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    /// Build the URL for the requested tile coordinate
    pub fn tile_url(&self, coord: &TileCoord) -> String {
        self.options
            .url_template
            .replace("{id}", &self.options.style_id)
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{accessToken}", &self.options.access_token)
    }
}

impl Layer for TileLayer {
    crate::impl_layer!(TileLayer, properties);
}
