//! Command handlers registered with the host.
//!
//! - [`SvgToImageNode`]: rasterize an SVG to PNG/JPEG
//! - [`ImageToIconNode`]: render an image into ICO/ICNS icons
//!
//! [`convert_svg`] and [`convert_image_to_icons`] expose the same pipelines to
//! async callers.

mod icon;
mod svg;

pub use icon::{convert_image_to_icons, ImageToIconNode, IMAGE_TO_ICON};
pub use svg::{convert_svg, SvgToImageNode, SVG_TO_IMAGE};
