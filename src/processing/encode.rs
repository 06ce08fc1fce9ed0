//! Maps raster output formats to `image` encoder settings.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, RgbaImage};

use crate::core::PluginConfig;
use crate::utils::{ConvertError, ConvertResult, RasterFormat};

/// Encodes `image` as PNG with the slowest, smallest settings.
pub fn encode_png(image: &RgbaImage) -> ConvertResult<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .map_err(|e| ConvertError::processing(format!("PNG encode failed: {e}")))?;
    Ok(buf)
}

/// Encodes `image` as baseline JPEG after flattening alpha onto `background`.
pub fn encode_jpeg(image: &RgbaImage, quality: u8, background: [u8; 3]) -> ConvertResult<Vec<u8>> {
    let flat = flatten_onto(image, background);
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .write_image(flat.as_raw(), flat.width(), flat.height(), ExtendedColorType::Rgb8)
        .map_err(|e| ConvertError::processing(format!("JPEG encode failed: {e}")))?;
    Ok(buf)
}

/// Dispatches to the encoder for `format`.
pub fn encode_raster(image: &RgbaImage, format: RasterFormat, config: &PluginConfig) -> ConvertResult<Vec<u8>> {
    match format {
        RasterFormat::PNG => encode_png(image),
        RasterFormat::JPEG => encode_jpeg(image, config.jpeg_quality, config.jpeg_background),
    }
}

/// Alpha-composites `image` over a solid colour.
pub fn flatten_onto(image: &RgbaImage, background: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let px = image.get_pixel(x, y);
        let a = px[3] as u32;
        let blend = |c: u8, b: u8| ((c as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8;
        Rgb([
            blend(px[0], background[0]),
            blend(px[1], background[1]),
            blend(px[2], background[2]),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn flatten_blends_by_alpha() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        let flat = flatten_onto(&img, [255, 255, 255]);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([0, 0, 0]));
        assert_eq!(flat.get_pixel(2, 0), &Rgb([127, 127, 127]));
    }

    #[test]
    fn encoders_emit_their_magic_bytes() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let config = PluginConfig::default();

        let png = encode_raster(&img, RasterFormat::PNG, &config).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let jpeg = encode_raster(&img, RasterFormat::JPEG, &config).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }
}
