//! Plugin configuration.
//!
//! Defaults, optionally overlaid by a JSON object the host passes in, then by
//! environment variables.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::utils::{ConvertError, ConvertResult};

pub const ENV_JPEG_QUALITY: &str = "AUTOTASK_FILECONVERT_JPEG_QUALITY";
pub const ENV_MAX_DIMENSION: &str = "AUTOTASK_FILECONVERT_MAX_DIMENSION";

/// Encoder and safety settings shared by both nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// JPEG quality 1-100
    pub jpeg_quality: u8,
    /// RGB colour transparent SVG regions are flattened onto for JPEG output
    pub jpeg_background: [u8; 3],
    /// Upper bound for requested SVG output width/height
    pub max_dimension: u32,
    /// Make installed fonts available to SVG `<text>` rendering
    pub load_system_fonts: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 95,
            jpeg_background: [255, 255, 255],
            max_dimension: 16384,
            load_system_fonts: true,
        }
    }
}

impl PluginConfig {
    /// Builds the config from an optional host-supplied JSON object and the environment.
    pub fn load(host_config: Option<&serde_json::Value>) -> ConvertResult<Self> {
        let config = match host_config {
            Some(value) => serde_json::from_value::<Self>(value.clone())
                .map_err(|e| ConvertError::settings(format!("Invalid plugin config: {e}")))?,
            None => Self::default(),
        };
        let config = config.with_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        debug!("Plugin config: {:?}", config);
        Ok(config)
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_JPEG_QUALITY) {
            match raw.trim().parse() {
                Ok(q) => self.jpeg_quality = q,
                Err(_) => warn!("Ignoring {ENV_JPEG_QUALITY}={raw}: not a number"),
            }
        }
        if let Some(raw) = lookup(ENV_MAX_DIMENSION) {
            match raw.trim().parse() {
                Ok(d) => self.max_dimension = d,
                Err(_) => warn!("Ignoring {ENV_MAX_DIMENSION}={raw}: not a number"),
            }
        }
        self
    }

    pub fn validate(&self) -> ConvertResult<()> {
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ConvertError::settings(format!(
                "Invalid JPEG quality: {}. Must be between 1 and 100",
                self.jpeg_quality
            )));
        }
        if self.max_dimension == 0 {
            return Err(ConvertError::settings("Max dimension cannot be 0"));
        }
        Ok(())
    }
}
