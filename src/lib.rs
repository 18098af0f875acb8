//! # Quakemap
//!
//! A Rust-native model of a Leaflet-style earthquake map: one fetch of the
//! USGS GeoJSON summary feed, a typed validate-and-encode pipeline, and a
//! composed display surface with selectable base layers, toggleable
//! overlays, and an always-expanded layer control.
//!
//! Rendering widgets consume the composed [`Map`]; this crate owns what is
//! on the surface, not how it is rasterized.

pub mod core;
pub mod data;
pub mod encode;
pub mod events;
pub mod feed;
pub mod layers;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::MapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, SurfaceState},
    viewport::Viewport,
};

pub use layers::{
    base::Layer, boundary::BoundaryLayer, group::LayerGroup, marker::CircleMarker,
    tile::TileLayer,
};

pub use encode::{color::Color, transform, VisualEncoding};

pub use events::{EventManager, MapEvent};

pub use feed::{client::FeedSource, client::UsgsFeedClient, record::Earthquake};

pub use ui::controls::LayersControl;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
