pub mod color;
pub mod config;
pub mod error;
pub mod types;

pub use color::{Rgb, is_hex_color};
pub use config::{locate_config, parse_page_config};
pub use error::{Error, Result};
pub use types::*;
