//! Icon rendering: decode once, resample per size, pack into ICO or ICNS.

mod icns;
mod ico;

pub use icns::{pack_icns, parse_icns, IcnsElement};
pub use ico::encode_ico;

use std::path::Path;
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::processing::encode_png;
use crate::utils::{ConvertError, ConvertResult, IconFormat};

/// Decodes any format the `image` crate recognises, sniffing content rather
/// than trusting the extension, and converts to RGBA.
pub fn load_rgba(path: &Path) -> ConvertResult<RgbaImage> {
    let image = ImageReader::open(path)
        .map_err(|e| ConvertError::io(format!("Cannot open {}: {e}", path.display())))?
        .with_guessed_format()?
        .decode()?;
    debug!("Decoded '{}': {}×{} {:?}", path.display(), image.width(), image.height(), image.color());
    Ok(image.to_rgba8())
}

/// Resamples to `size × size` with a Lanczos filter. Aspect ratio is not kept.
pub fn resize_square(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    imageops::resize(image, size, size, FilterType::Lanczos3)
}

/// Encodes already-resampled icons into one container of `format`.
pub fn encode_icon_file(format: IconFormat, icons: &[RgbaImage]) -> ConvertResult<Vec<u8>> {
    match format {
        IconFormat::ICO => encode_ico(icons),
        IconFormat::ICNS => {
            let entries = icons
                .iter()
                .map(|img| Ok((img.width(), encode_png(img)?)))
                .collect::<ConvertResult<Vec<_>>>()?;
            pack_icns(&entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn resize_square_ignores_aspect_ratio() {
        let wide = RgbaImage::from_pixel(40, 10, Rgba([0, 255, 0, 255]));
        let out = resize_square(&wide, 16);
        assert_eq!(out.dimensions(), (16, 16));
        assert_eq!(out.get_pixel(8, 8), &Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn icns_payloads_are_png() {
        let icons = vec![RgbaImage::new(16, 16), RgbaImage::new(32, 32)];
        let bytes = encode_icon_file(IconFormat::ICNS, &icons).unwrap();
        let elements = parse_icns(&bytes).unwrap();
        assert_eq!(elements.len(), 2);
        for element in elements {
            assert_eq!(&element.data[..4], b"\x89PNG");
        }
    }
}
