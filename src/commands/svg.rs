//! SVG to raster image command.

use std::path::PathBuf;
use serde_json::json;
use tracing::debug;

use crate::core::{PluginConfig, SvgConversion, SvgConversionResult};
use crate::host::{InputKind, InputSpec, Node, NodeDescriptor, NodeInputs, NodeOutputs, OutputSpec, WorkflowLogger};
use crate::processing::rasterize_svg;
use crate::utils::{ConvertError, ConvertResult, NodeError, RasterFormat};

pub const SVG_TO_IMAGE: &str = "svg_to_image";

/// Converts an SVG file to PNG or JPEG at fixed dimensions.
pub struct SvgToImageNode {
    config: PluginConfig,
}

impl SvgToImageNode {
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// Reads the host's option values into a request.
    pub fn parse_inputs(inputs: &NodeInputs) -> ConvertResult<SvgConversion> {
        let format = match inputs.optional_str("format")? {
            Some(f) => f.parse::<RasterFormat>()?,
            None => RasterFormat::PNG,
        };

        Ok(SvgConversion {
            svg_file: PathBuf::from(inputs.required_str("svg_file")?),
            width: inputs.required_u32("width")?,
            height: inputs.required_u32("height")?,
            output_dir: PathBuf::from(inputs.required_str("output_dir")?),
            format,
        })
    }
}

impl Node for SvgToImageNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            id: SVG_TO_IMAGE.to_string(),
            name: "SVG to Image Converter".to_string(),
            description: "Convert SVG file to PNG/JPEG with custom dimensions".to_string(),
            inputs: vec![
                InputSpec::new("svg_file", "SVG File Path", "Path to the SVG file to convert", InputKind::String)
                    .required(),
                InputSpec::new("width", "Width", "Output image width in pixels", InputKind::Int).required(),
                InputSpec::new("height", "Height", "Output image height in pixels", InputKind::Int).required(),
                InputSpec::new(
                    "output_dir",
                    "Output Directory",
                    "Directory for the output image file",
                    InputKind::String,
                )
                .required(),
                InputSpec::new("format", "Output Format", "Output image format (PNG or JPEG)", InputKind::Combo)
                    .with_default("PNG")
                    .with_options(&RasterFormat::CHOICES),
            ],
            outputs: vec![OutputSpec::new(
                "output_file",
                "Output Image Path",
                "Path to the generated image file",
                InputKind::String,
            )],
        }
    }

    fn execute(&self, inputs: &NodeInputs, logger: &dyn WorkflowLogger) -> Result<NodeOutputs, NodeError> {
        // The failure message names the requested format even when it is invalid.
        let format_label = inputs
            .display("format")
            .map(|f| f.to_uppercase())
            .unwrap_or_else(|| RasterFormat::PNG.to_string());

        let run = || -> ConvertResult<SvgConversionResult> {
            let request = Self::parse_inputs(inputs)?;
            logger.info(&format!(
                "Converting SVG file: {} to {}",
                request.svg_file.display(),
                request.format
            ));
            rasterize_svg(&request, &self.config)
        };

        match run() {
            Ok(result) => {
                logger.info(&format!(
                    "Successfully converted SVG to {}: {}",
                    result.format,
                    result.output_file.display()
                ));
                Ok(json!({ "output_file": result.output_file }))
            }
            Err(e) => {
                let err = NodeError::new(format!("SVG to {format_label} conversion"), e);
                logger.error(&err.message);
                Err(err)
            }
        }
    }
}

/// Runs an SVG conversion on the blocking pool for async callers.
pub async fn convert_svg(request: SvgConversion, config: PluginConfig) -> ConvertResult<SvgConversionResult> {
    debug!("Dispatching SVG conversion for {}", request.svg_file.display());
    tokio::task::spawn_blocking(move || rasterize_svg(&request, &config))
        .await
        .map_err(|e| ConvertError::processing(format!("Conversion task panicked: {e}")))?
}
