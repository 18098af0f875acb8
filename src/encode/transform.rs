use crate::constants::MAGNITUDE_RADIUS_SCALE;
use crate::core::geo::LatLng;
use crate::encode::color::{depth_color, Color};
use crate::feed::record::Earthquake;
use chrono::{LocalResult, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// How one earthquake event is drawn: position, circle radius, band color,
/// and popup markup. Created once per event, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEncoding {
    pub position: LatLng,
    /// Circle radius as a map distance in meters
    pub radius_m: f64,
    /// Fill and stroke color from the depth classification
    pub color: Color,
    /// Popup markup shown when the marker is clicked
    pub popup_html: String,
}

impl VisualEncoding {
    /// Encodes a single event. Derives from that event only.
    pub fn from_event(event: &Earthquake) -> Self {
        Self {
            position: event.position,
            radius_m: radius_m(event.magnitude),
            color: depth_color(event.depth_km),
            popup_html: popup_html(&event.title, event.time_ms),
        }
    }
}

/// Circle radius in meters for an event magnitude
pub fn radius_m(magnitude: f64) -> f64 {
    magnitude * MAGNITUDE_RADIUS_SCALE
}

/// Popup markup for an event: details header, description, event time.
/// The description comes from the feed and is trusted as plain text; no
/// escaping is applied.
pub fn popup_html(title: &str, time_ms: i64) -> String {
    format!(
        "<center><p>Earthquake Details<hr>{}<br>{}</center>",
        title,
        format_event_time(time_ms)
    )
}

/// Human-readable UTC rendering of a feed timestamp
fn format_event_time(time_ms: i64) -> String {
    match Utc.timestamp_millis_opt(time_ms) {
        LocalResult::Single(when) => when.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        _ => format!("epoch {time_ms} ms"),
    }
}

/// Encodes a batch of events, preserving count and order.
pub fn transform(events: &[Earthquake]) -> Vec<VisualEncoding> {
    events.iter().map(VisualEncoding::from_event).collect()
}
