pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{ConvertError, ConvertResult, NodeError, PathError, ValidationError};
pub use validation::{validate_icon_conversion, validate_svg_conversion};
pub use formats::{IconFormat, RasterFormat, icns_type_for};
pub use fs::{
    base_name,
    ensure_output_dir,
    get_extension,
    output_path,
    validate_input_path,
    write_file,
};
