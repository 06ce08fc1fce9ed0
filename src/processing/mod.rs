//! Image processing backed by resvg and the `image` crate.
//!
//! - [`executor`]: the two end-to-end conversion pipelines
//! - [`svg`]: SVG parsing and rasterization
//! - [`encode`]: PNG/JPEG encoder settings
//! - [`icon`]: resampling and ICO/ICNS packing

mod encode;
mod executor;
pub mod icon;
mod svg;

pub use encode::{encode_jpeg, encode_png, encode_raster, flatten_onto};
pub use executor::{build_icons, rasterize_svg};
pub use svg::{load_tree, render_to_size};
