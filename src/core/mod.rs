//! Core plugin types and configuration.
//!
//! - [`PluginConfig`]: encoder and safety settings
//! - [`SvgConversion`] / [`IconConversion`]: validated conversion requests
//! - [`SvgConversionResult`] / [`IconConversionResult`]: what was written

mod config;
mod types;

pub use config::{PluginConfig, ENV_JPEG_QUALITY, ENV_MAX_DIMENSION};
pub use types::{IconConversion, IconConversionResult, SvgConversion, SvgConversionResult};
