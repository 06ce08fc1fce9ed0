//! SVG parsing and rasterization via resvg.

use std::path::Path;
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use tracing::debug;

use crate::core::PluginConfig;
use crate::utils::{ConvertError, ConvertResult};

/// Parses the SVG at `path`.
///
/// Relative `href`s resolve against the SVG's own directory.
pub fn load_tree(path: &Path, config: &PluginConfig) -> ConvertResult<usvg::Tree> {
    let data = std::fs::read(path)
        .map_err(|e| ConvertError::io(format!("Cannot read {}: {e}", path.display())))?;

    let mut opt = usvg::Options::default();
    opt.resources_dir = std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    if config.load_system_fonts {
        opt.fontdb_mut().load_system_fonts();
    }

    let tree = usvg::Tree::from_data(&data, &opt)?;
    debug!(
        "Parsed '{}': intrinsic size {}×{}",
        path.display(),
        tree.size().width(),
        tree.size().height()
    );
    Ok(tree)
}

/// Renders `tree` so it exactly fills `width × height`.
///
/// Axes scale independently, so the aspect ratio follows the requested
/// dimensions rather than the document's. The canvas starts transparent.
pub fn render_to_size(tree: &usvg::Tree, width: u32, height: u32) -> ConvertResult<RgbaImage> {
    let size = tree.size();
    let sx = width as f32 / size.width();
    let sy = height as f32 / size.height();

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        ConvertError::processing(format!("Cannot allocate a {width}×{height} canvas"))
    })?;
    resvg::render(tree, tiny_skia::Transform::from_scale(sx, sy), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba(&pixmap))
}

/// tiny-skia stores premultiplied alpha; the image encoders expect straight alpha.
fn pixmap_to_rgba(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}
