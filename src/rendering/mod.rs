pub mod raw;
pub mod resize;

pub use raw::{export_file_name, parse_size, read_raw_rgba, write_raw_rgba};
pub use resize::{downscale, fit_dimensions, fit_to_max};
