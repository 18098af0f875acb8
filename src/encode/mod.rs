//! Feature transformer: earthquake records in, visual encodings out.

pub mod color;
pub mod transform;

pub use color::{depth_color, Color};
pub use transform::{popup_html, radius_m, transform, VisualEncoding};
