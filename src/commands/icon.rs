//! Image to icon (ICO/ICNS) command.

use std::path::PathBuf;
use serde_json::json;
use tracing::debug;

use crate::core::{IconConversion, IconConversionResult};
use crate::host::{InputKind, InputSpec, Node, NodeDescriptor, NodeInputs, NodeOutputs, OutputSpec, WorkflowLogger};
use crate::processing::build_icons;
use crate::utils::{ConvertError, ConvertResult, IconFormat, NodeError};

pub const IMAGE_TO_ICON: &str = "image_to_icon";

/// Converts a raster image into ICO or ICNS files at several sizes.
#[derive(Debug, Default)]
pub struct ImageToIconNode;

impl ImageToIconNode {
    pub fn new() -> Self {
        Self
    }

    /// Reads the host's option values into a request.
    pub fn parse_inputs(inputs: &NodeInputs) -> ConvertResult<IconConversion> {
        let format = match inputs.optional_str("format")? {
            Some(f) => f.parse::<IconFormat>()?,
            None => IconFormat::ICO,
        };

        Ok(IconConversion {
            image_file: PathBuf::from(inputs.required_str("image_file")?),
            output_dir: PathBuf::from(inputs.required_str("output_dir")?),
            format,
            sizes: inputs.optional_u32_list("sizes")?,
            bundle: inputs.optional_bool("bundle")?.unwrap_or(false),
        })
    }
}

impl Node for ImageToIconNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            id: IMAGE_TO_ICON.to_string(),
            name: "Image to Icon Converter".to_string(),
            description: "Convert image files to ICO (Windows) or ICNS (macOS) format at multiple sizes".to_string(),
            inputs: vec![
                InputSpec::new(
                    "image_file",
                    "Image File Path",
                    "Path to the input image file (PNG recommended)",
                    InputKind::String,
                )
                .required(),
                InputSpec::new(
                    "output_dir",
                    "Output Directory",
                    "Directory for the output icon files",
                    InputKind::String,
                )
                .required(),
                InputSpec::new(
                    "format",
                    "Icon Format",
                    "Output icon format (ICO for Windows, ICNS for macOS)",
                    InputKind::Combo,
                )
                .required()
                .with_default("ICO")
                .with_options(&IconFormat::CHOICES),
                InputSpec::new(
                    "sizes",
                    "Icon Sizes",
                    "Edge lengths in pixels; defaults to 16-256 for ICO and 16-1024 for ICNS",
                    InputKind::List,
                ),
                InputSpec::new(
                    "bundle",
                    "Single File",
                    "Write one multi-resolution file instead of one file per size",
                    InputKind::Bool,
                )
                .with_default(false),
            ],
            outputs: vec![OutputSpec::new(
                "output_files",
                "Output Icon Paths",
                "Paths to the generated icon files",
                InputKind::List,
            )],
        }
    }

    fn execute(&self, inputs: &NodeInputs, logger: &dyn WorkflowLogger) -> Result<NodeOutputs, NodeError> {
        let format_label = inputs
            .display("format")
            .map(|f| f.to_uppercase())
            .unwrap_or_else(|| IconFormat::ICO.to_string());

        let run = || -> ConvertResult<IconConversionResult> {
            let request = Self::parse_inputs(inputs)?;
            logger.info(&format!(
                "Converting image to {}: {}",
                request.format,
                request.image_file.display()
            ));
            build_icons(&request)
        };

        match run() {
            Ok(result) => {
                let files: Vec<String> = result
                    .output_files
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                logger.info(&format!(
                    "Successfully created {} files with sizes: {}",
                    result.format,
                    result.sizes_label()
                ));
                logger.info(&format!("Output files: {}", files.join(", ")));
                Ok(json!({ "output_files": files }))
            }
            Err(e) => {
                let err = NodeError::new(format!("Image to {format_label} conversion"), e);
                logger.error(&err.message);
                Err(err)
            }
        }
    }
}

/// Runs an icon conversion on the blocking pool for async callers.
pub async fn convert_image_to_icons(request: IconConversion) -> ConvertResult<IconConversionResult> {
    debug!("Dispatching icon conversion for {}", request.image_file.display());
    tokio::task::spawn_blocking(move || build_icons(&request))
        .await
        .map_err(|e| ConvertError::processing(format!("Conversion task panicked: {e}")))?
}
