// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;
pub mod host;
pub mod abi;

// Public exports for host integrations
pub use crate::core::{IconConversion, IconConversionResult, PluginConfig, SvgConversion, SvgConversionResult};
pub use crate::utils::{ConvertError, ConvertResult, IconFormat, NodeError, RasterFormat};
pub use crate::host::{manifest, registry, Node, NodeInputs, NodeOutputs, NodeRegistry, PluginManifest, TracingLogger, WorkflowLogger};
pub use crate::commands::*;

// The library is what the host loads; main.rs is a development harness.
