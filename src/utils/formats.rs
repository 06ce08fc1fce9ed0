use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::utils::ConvertError;

/// Raster output formats for SVG conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RasterFormat {
    PNG,
    JPEG,
}

impl RasterFormat {
    /// Values the host offers in the format combo box
    pub const CHOICES: [&'static str; 2] = ["PNG", "JPEG"];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::PNG => &["png"],
            Self::JPEG => &["jpg", "jpeg"],
        }
    }

    /// Get the primary extension for this format
    pub fn primary_extension(&self) -> &str {
        self.extensions()[0]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PNG => "PNG",
            Self::JPEG => "JPEG",
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RasterFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PNG" => Ok(Self::PNG),
            "JPEG" | "JPG" => Ok(Self::JPEG),
            _ => Err(ConvertError::format(format!(
                "Unsupported output format: {}", s
            ))),
        }
    }
}

/// Icon container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IconFormat {
    ICO,
    ICNS,
}

/// ICNS element types for PNG-encoded icons, keyed by edge length.
const ICNS_TYPES: [(u32, [u8; 4]); 7] = [
    (16, *b"icp4"),
    (32, *b"icp5"),
    (64, *b"icp6"),
    (128, *b"ic07"),
    (256, *b"ic08"),
    (512, *b"ic09"),
    (1024, *b"ic10"),
];

/// Largest edge an ICO directory entry can describe
const ICO_MAX_SIZE: u32 = 256;

impl IconFormat {
    pub const CHOICES: [&'static str; 2] = ["ICO", "ICNS"];

    /// Get the default size set for this format
    pub fn standard_sizes(&self) -> &'static [u32] {
        match self {
            Self::ICO => &[16, 32, 48, 64, 128, 256],
            Self::ICNS => &[16, 32, 64, 128, 256, 512, 1024],
        }
    }

    /// Check whether an icon of `size × size` can be stored in this container
    pub fn supports_size(&self, size: u32) -> bool {
        match self {
            Self::ICO => (1..=ICO_MAX_SIZE).contains(&size),
            Self::ICNS => icns_type_for(size).is_some(),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::ICO => "ico",
            Self::ICNS => "icns",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ICO => "ICO",
            Self::ICNS => "ICNS",
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ICO" => Ok(Self::ICO),
            "ICNS" => Ok(Self::ICNS),
            _ => Err(ConvertError::format(format!(
                "Unsupported icon format: {}", s
            ))),
        }
    }
}

/// Look up the ICNS OSType for a PNG icon of the given edge length
pub fn icns_type_for(size: u32) -> Option<[u8; 4]> {
    ICNS_TYPES
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, ty)| *ty)
}
