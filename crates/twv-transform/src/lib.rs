//! twat-video data transformation.
//!
//! - **normalization**: fixed-point number formatting and text case handling
//! - **process**: the `process_data` transformation and its report wrapper

pub mod normalization;
pub mod process;

pub use normalization::{format_fixed, format_fixed_integer, normalize_text, render_item};
pub use process::{process_data, process_report};

/// Version string of the twat-video packages.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
