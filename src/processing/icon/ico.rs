//! Windows icon (ICO) encoding through the `image` crate.

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageResult, RgbaImage};

use crate::utils::{ConvertError, ConvertResult};

/// Encodes `images` as PNG-compressed entries of one ICO directory.
///
/// Every image must be at most 256×256.
pub fn encode_ico(images: &[RgbaImage]) -> ConvertResult<Vec<u8>> {
    let frames = images
        .iter()
        .map(|img| IcoFrame::as_png(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8))
        .collect::<ImageResult<Vec<_>>>()
        .map_err(|e| ConvertError::processing(format!("ICO frame encode failed: {e}")))?;

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf)
        .encode_images(&frames)
        .map_err(|e| ConvertError::processing(format!("ICO encode failed: {e}")))?;
    Ok(buf)
}
