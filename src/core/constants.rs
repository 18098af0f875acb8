//! Presentation constants shared across the encoding pipeline and the
//! surface model. Keeping them in a single place makes it easier to tweak
//! map-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Deepest zoom level the stock tile styles serve.
pub const MAX_TILE_ZOOM: u8 = 18;

/// Zoom level that fits the whole world in a typical viewport.
pub const WHOLE_WORLD_ZOOM: f64 = 3.0;

/// Multiplier converting event magnitude into a marker radius in meters.
/// Tuning constant so markers stay visible at a whole-Earth zoom, not a
/// physical unit conversion.
pub const MAGNITUDE_RADIUS_SCALE: f64 = 100_000.0;

/// Flat radius in meters applied to every marker when the zoom level
/// changes.
// TODO: rescale marker radii proportionally on zoom instead of flattening
// them; the flat reset discards the magnitude encoding after the first zoom.
pub const ZOOM_RESET_RADIUS_M: f64 = 20_000.0;
