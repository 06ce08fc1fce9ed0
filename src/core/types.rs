//! Core types for conversion requests and results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::utils::{IconFormat, RasterFormat};

/// Parameters for rasterizing one SVG file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvgConversion {
    /// Path to the source SVG
    pub svg_file: PathBuf,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Directory the raster image is written into
    pub output_dir: PathBuf,
    /// PNG or JPEG
    pub format: RasterFormat,
}

/// Parameters for turning one raster image into icon files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConversion {
    /// Path to the source image
    pub image_file: PathBuf,
    /// Directory the icon files are written into
    pub output_dir: PathBuf,
    /// ICO or ICNS
    pub format: IconFormat,
    /// Requested edge lengths; `None` means the format's standard set
    #[serde(default)]
    pub sizes: Option<Vec<u32>>,
    /// Write a single multi-resolution file instead of one file per size
    #[serde(default)]
    pub bundle: bool,
}

impl IconConversion {
    /// Sizes to render before validation: the request's, or the format defaults.
    pub fn requested_sizes(&self) -> Vec<u32> {
        match &self.sizes {
            Some(sizes) => sizes.clone(),
            None => self.format.standard_sizes().to_vec(),
        }
    }
}

/// Result of an SVG conversion.
#[derive(Debug, Clone, Serialize)]
pub struct SvgConversionResult {
    /// Path of the written image
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: RasterFormat,
}

/// Result of an icon conversion.
#[derive(Debug, Clone, Serialize)]
pub struct IconConversionResult {
    /// Paths of the written icon files, ascending by size
    pub output_files: Vec<PathBuf>,
    /// Edge lengths that were rendered, ascending
    pub sizes: Vec<u32>,
    pub format: IconFormat,
}

impl IconConversionResult {
    /// Human-readable size list, e.g. "16, 32, 48"
    pub fn sizes_label(&self) -> String {
        self.sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
