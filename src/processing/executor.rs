//! Synchronous conversion pipelines.
//!
//! Each function validates its request, creates the output directory, hands the
//! heavy lifting to resvg or `image`, and writes the result. Nothing here keeps
//! state between calls.

use tracing::debug;

use crate::core::{
    IconConversion, IconConversionResult, PluginConfig, SvgConversion, SvgConversionResult,
};
use crate::processing::icon::{encode_icon_file, load_rgba, resize_square};
use crate::processing::{encode_raster, load_tree, render_to_size};
use crate::utils::{
    ConvertResult, base_name, ensure_output_dir, output_path, validate_icon_conversion,
    validate_svg_conversion, write_file,
};

/// Rasterizes one SVG to PNG or JPEG.
pub fn rasterize_svg(request: &SvgConversion, config: &PluginConfig) -> ConvertResult<SvgConversionResult> {
    validate_svg_conversion(request, config)?;
    ensure_output_dir(&request.output_dir)?;

    let stem = base_name(&request.svg_file)?;
    let output_file = output_path(&request.output_dir, &stem, request.format.primary_extension());

    let tree = load_tree(&request.svg_file, config)?;
    let image = render_to_size(&tree, request.width, request.height)?;
    let bytes = encode_raster(&image, request.format, config)?;
    write_file(&output_file, &bytes)?;

    debug!(
        "'{}' → '{}' ({}×{} {})",
        request.svg_file.display(),
        output_file.display(),
        request.width,
        request.height,
        request.format
    );

    Ok(SvgConversionResult {
        output_file,
        width: request.width,
        height: request.height,
        format: request.format,
    })
}

/// Renders one image into icon files, one per size or a single bundle.
pub fn build_icons(request: &IconConversion) -> ConvertResult<IconConversionResult> {
    let sizes = validate_icon_conversion(request)?;
    ensure_output_dir(&request.output_dir)?;

    let stem = base_name(&request.image_file)?;
    let ext = request.format.extension();
    let source = load_rgba(&request.image_file)?;

    let mut output_files = Vec::new();
    if request.bundle {
        let icons: Vec<_> = sizes.iter().map(|s| resize_square(&source, *s)).collect();
        let path = output_path(&request.output_dir, &stem, ext);
        write_file(&path, &encode_icon_file(request.format, &icons)?)?;
        output_files.push(path);
    } else {
        for size in &sizes {
            let icon = resize_square(&source, *size);
            let path = output_path(&request.output_dir, &format!("{stem}_{size}"), ext);
            write_file(&path, &encode_icon_file(request.format, std::slice::from_ref(&icon))?)?;
            output_files.push(path);
        }
    }

    debug!(
        "'{}' → {} {} file(s)",
        request.image_file.display(),
        output_files.len(),
        request.format
    );

    Ok(IconConversionResult {
        output_files,
        sizes,
        format: request.format,
    })
}
