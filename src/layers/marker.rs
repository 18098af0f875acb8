use crate::core::geo::LatLng;
use crate::encode::color::{Color, SHALLOW};
use crate::encode::VisualEncoding;
use serde::{Deserialize, Serialize};

/// Circle style: shared fill/stroke color, translucent fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub fill_opacity: f32,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            fill_color: SHALLOW,
            stroke_color: SHALLOW,
            fill_opacity: 0.5,
        }
    }
}

impl CircleStyle {
    /// Style with fill and stroke sharing one color
    pub fn solid(color: Color) -> Self {
        Self {
            fill_color: color,
            stroke_color: color,
            ..Self::default()
        }
    }
}

/// Circle drawn for one earthquake event
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    position: LatLng,
    radius_m: f64,
    style: CircleStyle,
    popup_html: Option<String>,
}

impl CircleMarker {
    pub fn new(position: LatLng, radius_m: f64) -> Self {
        Self {
            position,
            radius_m,
            style: CircleStyle::default(),
            popup_html: None,
        }
    }

    pub fn with_style(mut self, style: CircleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_popup(mut self, html: String) -> Self {
        self.popup_html = Some(html);
        self
    }

    /// Builds the marker for one visual encoding
    pub fn from_encoding(encoding: &VisualEncoding) -> Self {
        Self::new(encoding.position, encoding.radius_m)
            .with_style(CircleStyle::solid(encoding.color))
            .with_popup(encoding.popup_html.clone())
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn set_radius_m(&mut self, radius_m: f64) {
        self.radius_m = radius_m;
    }

    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    pub fn popup_html(&self) -> Option<&str> {
        self.popup_html.as_deref()
    }
}
