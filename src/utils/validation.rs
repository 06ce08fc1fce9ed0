use tracing::warn;
use crate::core::{IconConversion, PluginConfig, SvgConversion};
use crate::utils::{ConvertError, ConvertResult, get_extension, validate_input_path};

/// Validates an SVG conversion request
pub fn validate_svg_conversion(request: &SvgConversion, config: &PluginConfig) -> ConvertResult<()> {
    validate_input_path(&request.svg_file)?;

    if get_extension(&request.svg_file).as_deref() != Some("svg") {
        // usvg sniffs content, so a mislabelled file may still parse
        warn!("Input does not have an .svg extension: {}", request.svg_file.display());
    }

    validate_dimension("Width", request.width, config.max_dimension)?;
    validate_dimension("Height", request.height, config.max_dimension)?;
    Ok(())
}

fn validate_dimension(label: &str, value: u32, max: u32) -> ConvertResult<()> {
    if value == 0 {
        return Err(ConvertError::settings(format!("{label} cannot be 0")));
    }
    if value > max {
        return Err(ConvertError::settings(format!(
            "{label} {value} exceeds the maximum of {max} pixels"
        )));
    }
    Ok(())
}

/// Validates an icon conversion request and returns the sizes to render,
/// de-duplicated and ascending.
pub fn validate_icon_conversion(request: &IconConversion) -> ConvertResult<Vec<u32>> {
    validate_input_path(&request.image_file)?;
    normalize_icon_sizes(request)
}

fn normalize_icon_sizes(request: &IconConversion) -> ConvertResult<Vec<u32>> {
    let mut sizes = request.requested_sizes();
    sizes.sort_unstable();
    sizes.dedup();

    if sizes.is_empty() {
        return Err(ConvertError::settings("At least one icon size is required"));
    }

    let unsupported: Vec<String> = sizes
        .iter()
        .filter(|s| !request.format.supports_size(**s))
        .map(|s| s.to_string())
        .collect();
    if !unsupported.is_empty() {
        return Err(ConvertError::settings(format!(
            "Unsupported {} icon size(s): {}",
            request.format,
            unsupported.join(", ")
        )));
    }

    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{IconFormat, RasterFormat};
    use std::path::PathBuf;

    fn icon_request(format: IconFormat, sizes: Option<Vec<u32>>) -> IconConversion {
        IconConversion {
            image_file: PathBuf::from("unused.png"),
            output_dir: PathBuf::from("out"),
            format,
            sizes,
            bundle: false,
        }
    }

    #[test]
    fn absent_size_list_means_standard_sizes() {
        let sizes = normalize_icon_sizes(&icon_request(IconFormat::ICO, None)).unwrap();
        assert_eq!(sizes, vec![16, 32, 48, 64, 128, 256]);
    }

    #[test]
    fn empty_size_list_is_rejected() {
        let err = normalize_icon_sizes(&icon_request(IconFormat::ICNS, Some(vec![]))).unwrap_err();
        assert_eq!(err.cause(), "At least one icon size is required");
    }

    #[test]
    fn sizes_are_sorted_and_deduplicated() {
        let sizes = normalize_icon_sizes(&icon_request(IconFormat::ICO, Some(vec![64, 16, 64, 32]))).unwrap();
        assert_eq!(sizes, vec![16, 32, 64]);
    }

    #[test]
    fn sizes_the_container_cannot_hold_are_rejected() {
        let err = normalize_icon_sizes(&icon_request(IconFormat::ICO, Some(vec![16, 512]))).unwrap_err();
        assert_eq!(err.cause(), "Unsupported ICO icon size(s): 512");

        let err = normalize_icon_sizes(&icon_request(IconFormat::ICNS, Some(vec![48]))).unwrap_err();
        assert_eq!(err.cause(), "Unsupported ICNS icon size(s): 48");
    }

    #[test]
    fn svg_dimensions_must_be_positive_and_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let svg = dir.path().join("a.svg");
        std::fs::write(&svg, "<svg xmlns='http://www.w3.org/2000/svg' width='1' height='1'/>").unwrap();
        let config = PluginConfig { max_dimension: 100, ..PluginConfig::default() };

        let mut request = SvgConversion {
            svg_file: svg,
            width: 0,
            height: 10,
            output_dir: dir.path().to_path_buf(),
            format: RasterFormat::PNG,
        };
        let err = validate_svg_conversion(&request, &config).unwrap_err();
        assert_eq!(err.cause(), "Width cannot be 0");

        request.width = 10;
        request.height = 101;
        let err = validate_svg_conversion(&request, &config).unwrap_err();
        assert_eq!(err.cause(), "Height 101 exceeds the maximum of 100 pixels");

        request.height = 100;
        validate_svg_conversion(&request, &config).unwrap();
    }
}
