//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use quakemap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::MapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapOptions, SurfaceState},
    viewport::Viewport,
};

pub use crate::layers::{
    base::{Layer, LayerKind},
    boundary::BoundaryLayer,
    group::LayerGroup,
    marker::{CircleMarker, CircleStyle},
    tile::TileLayer,
};

pub use crate::encode::{depth_color, popup_html, radius_m, transform, Color, VisualEncoding};

pub use crate::events::{EventManager, MapEvent};

pub use crate::feed::{
    client::{FeedSource, UsgsFeedClient},
    record::{Earthquake, FeedCollection},
};

pub use crate::ui::controls::LayersControl;
